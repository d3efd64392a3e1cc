//! The resolved state of a configured search: what is being asked for, over
//! which window, and which remote identifier answers it.

use crate::types::observed_property::ObservedProperty;
use crate::types::period_name::PeriodName;
use chrono::NaiveDate;
use std::fmt;

/// Identifier of the instrument the readings request is addressed to.
///
/// Hydrometric properties are served by `wiskiID`, water-quality parameters by
/// the station `notation`; a configured search always holds exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StationIdentifier {
    WiskiId(String),
    Notation(String),
}

impl StationIdentifier {
    /// Query parameter name the readings endpoint expects for this identifier.
    pub(crate) fn query_key(&self) -> &'static str {
        match self {
            StationIdentifier::WiskiId(_) => "station.wiskiID",
            StationIdentifier::Notation(_) => "station",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            StationIdentifier::WiskiId(id) | StationIdentifier::Notation(id) => id,
        }
    }
}

impl fmt::Display for StationIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.query_key(), self.value())
    }
}

/// Inclusive date bounds of a readings request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateWindow {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl DateWindow {
    pub(crate) const DATE_FORMAT: &'static str = "%Y-%m-%d";

    pub fn min_date_string(&self) -> String {
        self.min_date.format(Self::DATE_FORMAT).to_string()
    }

    pub fn max_date_string(&self) -> String {
        self.max_date.format(Self::DATE_FORMAT).to_string()
    }
}

/// Everything a successful `configure` resolved, kept together so the client
/// never exposes a half-resolved search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameters {
    pub observed_property: ObservedProperty,
    /// Effective period; always [`PeriodName::SubDaily`] for water-quality properties.
    pub period_name: PeriodName,
    pub window: DateWindow,
    pub station_identifier: StationIdentifier,
}

impl SearchParameters {
    pub fn is_water_quality_station(&self) -> bool {
        self.observed_property.is_water_quality()
    }

    /// Query pairs for the readings endpoint.
    pub(crate) fn readings_query(&self) -> Vec<(String, String)> {
        vec![
            (
                self.station_identifier.query_key().to_string(),
                self.station_identifier.value().to_string(),
            ),
            (
                "observedProperty".to_string(),
                self.observed_property.as_str().to_string(),
            ),
            ("periodName".to_string(), self.period_name.as_str().to_string()),
            ("min-date".to_string(), self.window.min_date_string()),
            ("max-date".to_string(), self.window.max_date_string()),
        ]
    }
}
