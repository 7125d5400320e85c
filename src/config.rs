use serde::Deserialize;
use std::time::Duration;

pub const LIVE_API_URL: &str = "https://api.globalgatewaye4.firstdata.com/transaction/";
pub const TEST_API_URL: &str = "https://api.demo.globalgatewaye4.firstdata.com/transaction/";
pub const DEFAULT_API_VERSION: &str = "v13";
pub const DEFAULT_CONTENT_TYPE: &str = "application/json; charset=UTF-8;";

/// Which gateway the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Live,
    Test,
}

/// Per-client gateway settings.
///
/// # Examples
///
/// ```
/// use gge4_client::config::{Environment, GatewayConfig};
///
/// let config = GatewayConfig::test();
/// assert_eq!(config.environment, Environment::Test);
/// assert_eq!(
///     config.endpoint(),
///     "https://api.demo.globalgatewaye4.firstdata.com/transaction/v13"
/// );
/// assert_eq!(config.api_path(), "/transaction/v13");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub environment: Environment,
    pub api_version: String,
    /// Sent as `Content-Type` and used verbatim in the signing string.
    pub content_type: String,
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    /// Replaces the live/test URL, e.g. for a local mock gateway. Must end
    /// with `/`.
    pub base_url: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Live,
            api_version: DEFAULT_API_VERSION.to_string(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            connect_timeout_secs: 30,
            timeout_secs: 60,
            base_url: None,
        }
    }
}

impl GatewayConfig {
    pub fn live() -> Self {
        Self::default()
    }

    pub fn test() -> Self {
        Self {
            environment: Environment::Test,
            ..Self::default()
        }
    }

    pub fn for_mode(test_mode: bool) -> Self {
        if test_mode { Self::test() } else { Self::live() }
    }

    pub fn base_url(&self) -> &str {
        match (&self.base_url, self.environment) {
            (Some(url), _) => url,
            (None, Environment::Live) => LIVE_API_URL,
            (None, Environment::Test) => TEST_API_URL,
        }
    }

    /// The URL requests are posted to.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url(), self.api_version)
    }

    /// The path component covered by the request signature.
    pub fn api_path(&self) -> String {
        format!("/transaction/{}", self.api_version)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
