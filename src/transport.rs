//! Blocking HTTP GET plumbing shared by the station, measure and readings requests.

use crate::config::ClientConfig;
use crate::error::RecordSearchError;
use crate::types::station::ItemsResponse;
use log::{info, warn};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Performs a GET request with query parameters.
///
/// Implementations only report transport-level failures as errors; any HTTP
/// status, including 4xx and 5xx, is returned as an [`HttpResponse`].
pub trait HttpTransport: Send {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<HttpResponse, RecordSearchError>;
}

/// [`HttpTransport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, RecordSearchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(RecordSearchError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<HttpResponse, RecordSearchError> {
        info!("Requesting {} with {:?}", url, query);
        let response = self
            .client
            .get(url)
            .query(query)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| RecordSearchError::NetworkRequest(url.to_string(), e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| RecordSearchError::NetworkRequest(url.to_string(), e))?;
        Ok(HttpResponse { status, body })
    }
}

/// Sends the request and returns the raw body of a `200` response.
///
/// Any other status becomes [`RecordSearchError::RemoteError`]; the body is
/// re-rendered as compact JSON when it decodes as JSON.
pub(crate) fn get_ok_body(
    transport: &dyn HttpTransport,
    url: &str,
    query: &[(String, String)],
) -> Result<String, RecordSearchError> {
    let response = transport.get(url, query)?;
    if response.status != 200 {
        let body = match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(json) => json.to_string(),
            Err(_) => response.body,
        };
        warn!("HTTP error {} for {}: {}", response.status, url, body);
        return Err(RecordSearchError::RemoteError {
            url: url.to_string(),
            status: response.status,
            body,
        });
    }
    Ok(response.body)
}

/// GETs a hydrology listing and decodes its `items` array.
pub(crate) fn get_items<T: DeserializeOwned>(
    transport: &dyn HttpTransport,
    url: &str,
    query: &[(String, String)],
) -> Result<Vec<T>, RecordSearchError> {
    let body = get_ok_body(transport, url, query)?;
    let parsed: ItemsResponse<T> = serde_json::from_str(&body)?;
    Ok(parsed.items)
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedTransport;
    use super::*;
    use crate::types::station::StationItem;

    #[test]
    fn non_200_becomes_remote_error_with_body() {
        let transport = ScriptedTransport::new().respond(404, r#"{ "message" : "no such station" }"#);
        let err = get_ok_body(&transport, "http://h/id/stations", &[]).unwrap_err();
        match err {
            RecordSearchError::RemoteError { status, body, url } => {
                assert_eq!(status, 404);
                assert_eq!(body, r#"{"message":"no such station"}"#);
                assert_eq!(url, "http://h/id/stations");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_error_body_is_kept_verbatim() {
        let transport = ScriptedTransport::new().respond(502, "Bad Gateway");
        let err = get_ok_body(&transport, "http://h/x", &[]).unwrap_err();
        assert!(matches!(err, RecordSearchError::RemoteError { ref body, .. } if body == "Bad Gateway"));
    }

    #[test]
    fn get_items_decodes_listing() {
        let transport = ScriptedTransport::new().respond(200, r#"{"items":[{"wiskiID":"A1"},{"wiskiID":"B2"}]}"#);
        let items: Vec<StationItem> = get_items(&transport, "http://h/id/stations", &[]).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].wiski_id.as_deref(), Some("B2"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let transport = ScriptedTransport::new().respond(200, "<html>");
        let result: Result<Vec<StationItem>, _> = get_items(&transport, "http://h/id/stations", &[]);
        assert!(matches!(result, Err(RecordSearchError::JsonParse(_))));
    }
}
