//! Data structures for the station and measure listings returned by the
//! hydrology API. Only the fields this crate reads are modelled; everything
//! else in the payload is ignored.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Envelope shared by every hydrology API response: `{"items": [...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemsResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// A station record from the `/id/stations` search.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StationItem {
    /// Station notation, used for water-quality readings and measure listings.
    #[serde(default)]
    pub notation: Option<String>,
    /// Instrument identifier, used for hydrometric readings.
    #[serde(rename = "wiskiID", default)]
    pub wiski_id: Option<String>,
    /// Human-readable station name.
    #[serde(default, deserialize_with = "first_string")]
    pub label: Option<String>,
}

/// A measurable parameter available at a station, from the `/id/measures` listing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeasureParameter {
    /// Parameter identifier, e.g. `"flow"` or `"level"`.
    #[serde(default, deserialize_with = "first_string")]
    pub parameter: Option<String>,
    /// Unit of the values, e.g. `"m3/s"`.
    #[serde(default, deserialize_with = "first_string")]
    pub unit_name: Option<String>,
    /// Period the measure is published at, e.g. `"15min"`.
    #[serde(default, deserialize_with = "first_string")]
    pub period_name: Option<String>,
    /// How values are aggregated, e.g. `"instantaneous"` or `"mean"`.
    #[serde(default, deserialize_with = "first_string")]
    pub value_type: Option<String>,
    /// Display label of the measure.
    #[serde(default, deserialize_with = "first_string")]
    pub label: Option<String>,
}

/// What [`crate::RecordSearch::fetch_station_parameters`] found: the notations
/// matching the station name and the measures listed for them.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StationParameters {
    pub notations: Vec<String>,
    pub measures: Vec<MeasureParameter>,
}

// The API sometimes emits multilingual or repeated literals as arrays.
fn first_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Array(values)) => values.into_iter().find_map(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        }),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_item_reads_wiski_id_and_notation() {
        let json = r#"{"items":[{"notation":"abc-123","wiskiID":"SS92F014","label":"Hemingford Grey","riverName":"Ouse"}]}"#;
        let parsed: ItemsResponse<StationItem> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].wiski_id.as_deref(), Some("SS92F014"));
        assert_eq!(parsed.items[0].notation.as_deref(), Some("abc-123"));
    }

    #[test]
    fn missing_items_is_an_empty_listing() {
        let parsed: ItemsResponse<StationItem> = serde_json::from_str("{}").unwrap();
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn measure_label_accepts_an_array() {
        let json = r#"{"parameter":"flow","unitName":"m3/s","periodName":"15min","valueType":"mean","label":["Flow","Debit"]}"#;
        let measure: MeasureParameter = serde_json::from_str(json).unwrap();
        assert_eq!(measure.label.as_deref(), Some("Flow"));
        assert_eq!(measure.unit_name.as_deref(), Some("m3/s"));
    }
}
