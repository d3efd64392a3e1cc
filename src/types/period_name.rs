use crate::error::RecordSearchError;
use std::fmt;
use std::str::FromStr;

/// Temporal resolution of the readings requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PeriodName {
    /// One reading every fifteen minutes.
    #[default]
    FifteenMin,
    /// One aggregated reading per day.
    Daily,
    /// Irregular readings within a day. The only period published for
    /// water-quality parameters.
    SubDaily,
}

impl PeriodName {
    pub const ALL: [PeriodName; 3] = [PeriodName::FifteenMin, PeriodName::Daily, PeriodName::SubDaily];

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodName::FifteenMin => "15min",
            PeriodName::Daily => "daily",
            PeriodName::SubDaily => "sub-daily",
        }
    }
}

impl FromStr for PeriodName {
    type Err = RecordSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PeriodName::ALL
            .iter()
            .find(|period| period.as_str() == s)
            .copied()
            .ok_or_else(|| {
                let known: Vec<&str> = PeriodName::ALL.iter().map(|p| p.as_str()).collect();
                RecordSearchError::InvalidArgument(format!(
                    "period_name \"{}\" not in {:?}",
                    s, known
                ))
            })
    }
}

/// Formats a `PeriodName` with its API spelling.
///
/// # Examples
///
/// ```
/// use ea_record_search::PeriodName;
///
/// assert_eq!(PeriodName::SubDaily.to_string(), "sub-daily");
/// assert_eq!(format!("{}", PeriodName::default()), "15min");
/// ```
impl fmt::Display for PeriodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
