//! Station search against `/id/stations` and the three ways of turning a
//! station name into a remote identifier.
//!
//! When several stations match a search, the first one returned by the API is
//! used. No attempt is made to disambiguate between them.

use crate::config::ClientConfig;
use crate::error::RecordSearchError;
use crate::transport::{get_items, HttpTransport};
use crate::types::observed_property::ObservedProperty;
use crate::types::search_parameters::StationIdentifier;
use crate::types::station::StationItem;
use log::debug;

const STATIONS_PATH: &str = "id/stations";

/// Searches stations by name, optionally restricted to those measuring `property`.
pub(crate) fn search_stations(
    transport: &dyn HttpTransport,
    config: &ClientConfig,
    station_name: &str,
    property: Option<ObservedProperty>,
) -> Result<Vec<StationItem>, RecordSearchError> {
    let mut query = vec![("search".to_string(), station_name.to_string())];
    if let Some(property) = property {
        query.push(("observedProperty".to_string(), property.as_str().to_string()));
    }
    let items: Vec<StationItem> = get_items(transport, &config.endpoint(STATIONS_PATH), &query)?;
    debug!(
        "Station search for '{}' ({:?}) returned {} items",
        station_name,
        property,
        items.len()
    );
    Ok(items)
}

/// Resolves the identifier the readings endpoint needs for `property` at `station_name`:
/// the first match's `wiskiID` for hydrometric properties, its `notation` for water quality.
pub(crate) fn resolve_identifier(
    transport: &dyn HttpTransport,
    config: &ClientConfig,
    station_name: &str,
    property: ObservedProperty,
) -> Result<StationIdentifier, RecordSearchError> {
    let items = search_stations(transport, config, station_name, Some(property))?;
    let first = items.into_iter().next().ok_or_else(|| {
        RecordSearchError::NotFound(format!(
            "Station '{}' with observed property '{}' was not found",
            station_name, property
        ))
    })?;

    if property.is_water_quality() {
        first.notation.map(StationIdentifier::Notation).ok_or_else(|| {
            RecordSearchError::NotFound(format!(
                "Station '{}' with observed property '{}' has no notation",
                station_name, property
            ))
        })
    } else {
        first.wiski_id.map(StationIdentifier::WiskiId).ok_or_else(|| {
            RecordSearchError::NotFound(format!(
                "Station '{}' with observed property '{}' has no wiskiID",
                station_name, property
            ))
        })
    }
}

/// Notations of every station matching `station_name`, in API order.
///
/// Fails with `NotFound` when no returned item carries a notation, which
/// includes an empty result.
pub(crate) fn resolve_search_notations(
    transport: &dyn HttpTransport,
    config: &ClientConfig,
    station_name: &str,
) -> Result<Vec<String>, RecordSearchError> {
    let notations: Vec<String> = search_stations(transport, config, station_name, None)?
        .into_iter()
        .filter_map(|item| item.notation)
        .collect();
    if notations.is_empty() {
        return Err(RecordSearchError::NotFound(format!(
            "Notation not found for station '{}'",
            station_name
        )));
    }
    Ok(notations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::ScriptedTransport;

    fn config() -> ClientConfig {
        ClientConfig::builder().base_url("http://api.test/hydrology").build()
    }

    #[test]
    fn hydrometric_property_resolves_first_wiski_id() {
        let transport = ScriptedTransport::new().respond(
            200,
            r#"{"items":[{"wiskiID":"SS92F014","notation":"n-1"},{"wiskiID":"OTHER"}]}"#,
        );
        let id = resolve_identifier(&transport, &config(), "Hemingford Grey", ObservedProperty::WaterFlow)
            .unwrap();
        assert_eq!(id, StationIdentifier::WiskiId("SS92F014".to_string()));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://api.test/hydrology/id/stations");
        assert_eq!(requests[0].param("search"), Some("Hemingford Grey"));
        assert_eq!(requests[0].param("observedProperty"), Some("waterFlow"));
    }

    #[test]
    fn water_quality_property_resolves_notation() {
        let transport = ScriptedTransport::new()
            .respond(200, r#"{"items":[{"notation":"E05962A","wiskiID":"ignored"}]}"#);
        let id = resolve_identifier(&transport, &config(), "Kingston", ObservedProperty::Ph).unwrap();
        assert_eq!(id, StationIdentifier::Notation("E05962A".to_string()));
        assert_eq!(transport.requests()[0].param("observedProperty"), Some("ph"));
    }

    #[test]
    fn zero_matches_is_not_found() {
        let transport = ScriptedTransport::new().respond(200, r#"{"items":[]}"#);
        let err = resolve_identifier(&transport, &config(), "Nowhere", ObservedProperty::Rainfall)
            .unwrap_err();
        assert!(matches!(err, RecordSearchError::NotFound(_)));
    }

    #[test]
    fn first_match_without_required_field_is_not_found() {
        let transport = ScriptedTransport::new().respond(200, r#"{"items":[{"notation":"only"}]}"#);
        let err = resolve_identifier(&transport, &config(), "Somewhere", ObservedProperty::WaterLevel)
            .unwrap_err();
        assert!(matches!(err, RecordSearchError::NotFound(_)));
    }

    #[test]
    fn name_only_search_collects_notations_without_property_filter() {
        let transport = ScriptedTransport::new()
            .respond(200, r#"{"items":[{"notation":"a"},{"label":"no notation"},{"notation":"b"}]}"#);
        let notations = resolve_search_notations(&transport, &config(), "Avon").unwrap();
        assert_eq!(notations, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(transport.requests()[0].param("observedProperty"), None);
    }

    #[test]
    fn name_only_search_without_notation_field_is_not_found() {
        let transport = ScriptedTransport::new().respond(200, r#"{"items":[{"wiskiID":"X"}]}"#);
        let err = resolve_search_notations(&transport, &config(), "Avon").unwrap_err();
        assert!(matches!(err, RecordSearchError::NotFound(_)));
    }
}
