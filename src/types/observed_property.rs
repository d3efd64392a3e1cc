//! Defines the physical quantities a hydrology station can report and how
//! they map to the strings used by the Environment Agency API.

use crate::error::RecordSearchError;
use std::fmt;
use std::str::FromStr;

/// The physical quantity measured at a station.
///
/// The first four variants are hydrometric properties, identified on the API by
/// a station's `wiskiID`. The rest are water-quality parameters, identified by
/// the station `notation` and only published at `sub-daily` granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservedProperty {
    WaterFlow,
    WaterLevel,
    Rainfall,
    GroundwaterLevel,
    DissolvedOxygen,
    Fdom,
    Bga,
    Turbidity,
    Chlorophyll,
    Conductivity,
    Temperature,
    Ammonium,
    Nitrate,
    Ph,
}

impl ObservedProperty {
    /// Hydrometric properties, resolved through the station `wiskiID`.
    pub const NON_WATER_QUALITY: [ObservedProperty; 4] = [
        ObservedProperty::WaterFlow,
        ObservedProperty::WaterLevel,
        ObservedProperty::Rainfall,
        ObservedProperty::GroundwaterLevel,
    ];

    /// Water-quality parameters, resolved through the station `notation`.
    pub const WATER_QUALITY: [ObservedProperty; 10] = [
        ObservedProperty::DissolvedOxygen,
        ObservedProperty::Fdom,
        ObservedProperty::Bga,
        ObservedProperty::Turbidity,
        ObservedProperty::Chlorophyll,
        ObservedProperty::Conductivity,
        ObservedProperty::Temperature,
        ObservedProperty::Ammonium,
        ObservedProperty::Nitrate,
        ObservedProperty::Ph,
    ];

    /// Every property the API accepts, hydrometric ones first.
    pub const ALL: [ObservedProperty; 14] = [
        ObservedProperty::WaterFlow,
        ObservedProperty::WaterLevel,
        ObservedProperty::Rainfall,
        ObservedProperty::GroundwaterLevel,
        ObservedProperty::DissolvedOxygen,
        ObservedProperty::Fdom,
        ObservedProperty::Bga,
        ObservedProperty::Turbidity,
        ObservedProperty::Chlorophyll,
        ObservedProperty::Conductivity,
        ObservedProperty::Temperature,
        ObservedProperty::Ammonium,
        ObservedProperty::Nitrate,
        ObservedProperty::Ph,
    ];

    /// The value sent as the `observedProperty` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObservedProperty::WaterFlow => "waterFlow",
            ObservedProperty::WaterLevel => "waterLevel",
            ObservedProperty::Rainfall => "rainfall",
            ObservedProperty::GroundwaterLevel => "groundwaterLevel",
            ObservedProperty::DissolvedOxygen => "dissolved-oxygen",
            ObservedProperty::Fdom => "fdom",
            ObservedProperty::Bga => "bga",
            ObservedProperty::Turbidity => "turbidity",
            ObservedProperty::Chlorophyll => "chlorophyll",
            ObservedProperty::Conductivity => "conductivity",
            ObservedProperty::Temperature => "temperature",
            ObservedProperty::Ammonium => "ammonium",
            ObservedProperty::Nitrate => "nitrate",
            ObservedProperty::Ph => "ph",
        }
    }

    /// `true` for the water-quality parameters.
    pub fn is_water_quality(&self) -> bool {
        !matches!(
            self,
            ObservedProperty::WaterFlow
                | ObservedProperty::WaterLevel
                | ObservedProperty::Rainfall
                | ObservedProperty::GroundwaterLevel
        )
    }
}

/// Parses the API spelling of a property (e.g. `"waterFlow"`, `"dissolved-oxygen"`).
///
/// # Examples
///
/// ```
/// use ea_record_search::ObservedProperty;
///
/// let property: ObservedProperty = "ph".parse().unwrap();
/// assert_eq!(property, ObservedProperty::Ph);
/// assert!(property.is_water_quality());
/// assert!("salinity".parse::<ObservedProperty>().is_err());
/// ```
impl FromStr for ObservedProperty {
    type Err = RecordSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObservedProperty::ALL
            .iter()
            .find(|property| property.as_str() == s)
            .copied()
            .ok_or_else(|| {
                let known: Vec<&str> = ObservedProperty::ALL.iter().map(|p| p.as_str()).collect();
                RecordSearchError::InvalidArgument(format!(
                    "observed_property \"{}\" not in {:?}",
                    s, known
                ))
            })
    }
}

impl fmt::Display for ObservedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
