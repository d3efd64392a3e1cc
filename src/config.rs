//! Client configuration: where the hydrology API lives and how requests are sent.

use bon::Builder;
use std::time::Duration;

/// Root of the Environment Agency hydrology API.
pub const DEFAULT_BASE_URL: &str = "http://environment.data.gov.uk/hydrology";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the HTTP side of [`crate::RecordSearch`].
///
/// Every field has a default, so `ClientConfig::default()` (or
/// `ClientConfig::builder().build()`) targets the public API.
///
/// # Examples
///
/// ```
/// use ea_record_search::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::builder()
///     .base_url("http://localhost:8080/hydrology")
///     .timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.base_url, "http://localhost:8080/hydrology");
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ClientConfig {
    /// API root without a trailing slash.
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,

    /// Whole-request timeout.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,

    /// `User-Agent` header sent with each request.
    #[builder(into, default = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string())]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::builder().build()
    }
}

impl ClientConfig {
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}
