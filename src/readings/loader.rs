use crate::config::ClientConfig;
use crate::error::RecordSearchError;
use crate::readings::frame::items_to_frame;
use crate::transport::{get_ok_body, HttpTransport};
use crate::types::search_parameters::SearchParameters;
use crate::types::station::ItemsResponse;
use log::info;
use polars::frame::DataFrame;
use serde_json::Value;

// Cross-measure readings query; the station and property filters select the measure.
const READINGS_PATH: &str = "id/measures/{measure}/readings";

/// Fetches the readings described by `params` and returns one row per item.
pub(crate) fn fetch_readings(
    transport: &dyn HttpTransport,
    config: &ClientConfig,
    params: &SearchParameters,
) -> Result<DataFrame, RecordSearchError> {
    let url = config.endpoint(READINGS_PATH);
    let body = get_ok_body(transport, &url, &params.readings_query())?;
    let parsed: ItemsResponse<Value> = serde_json::from_str(&body)?;
    let frame = items_to_frame(&parsed.items)?;
    info!(
        "Fetched {} {} readings for {} between {} and {}",
        frame.height(),
        params.observed_property,
        params.station_identifier,
        params.window.min_date,
        params.window.max_date
    );
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::ScriptedTransport;
    use crate::types::observed_property::ObservedProperty;
    use crate::types::period_name::PeriodName;
    use crate::types::search_parameters::{DateWindow, StationIdentifier};
    use chrono::NaiveDate;

    fn params() -> SearchParameters {
        SearchParameters {
            observed_property: ObservedProperty::WaterFlow,
            period_name: PeriodName::Daily,
            window: DateWindow {
                min_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                max_date: NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
            },
            station_identifier: StationIdentifier::WiskiId("SS92F014".to_string()),
        }
    }

    #[test]
    fn requests_readings_with_wiski_id_and_window() {
        let transport = ScriptedTransport::new().respond(
            200,
            r#"{"items":[{"dateTime":"2023-01-01T00:00:00","value":3.2},{"dateTime":"2023-01-02T00:00:00","value":3.4}]}"#,
        );
        let config = ClientConfig::builder().base_url("http://api.test/hydrology").build();
        let frame = fetch_readings(&transport, &config, &params()).unwrap();
        assert_eq!(frame.height(), 2);

        let request = &transport.requests()[0];
        assert_eq!(
            request.url,
            "http://api.test/hydrology/id/measures/{measure}/readings"
        );
        assert_eq!(request.param("station.wiskiID"), Some("SS92F014"));
        assert_eq!(request.param("station"), None);
        assert_eq!(request.param("observedProperty"), Some("waterFlow"));
        assert_eq!(request.param("periodName"), Some("daily"));
        assert_eq!(request.param("min-date"), Some("2023-01-01"));
        assert_eq!(request.param("max-date"), Some("2023-01-31"));
    }

    #[test]
    fn server_error_is_remote_error() {
        let transport = ScriptedTransport::new().respond(500, r#"{"error":"boom"}"#);
        let config = ClientConfig::default();
        let err = fetch_readings(&transport, &config, &params()).unwrap_err();
        assert!(matches!(
            err,
            RecordSearchError::RemoteError { status: 500, ref body, .. } if body.contains("boom")
        ));
    }
}
