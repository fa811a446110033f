use serde::Deserialize;

/// Client identity sent with every fetch unless configured otherwise
pub const DEFAULT_USER_AGENT: &str = "Mozilla";

/// Total fetch timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Main configuration structure for html-insight
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub links: LinkConfig,
}

/// Document fetcher configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// User agent string sent with the request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Upper bound for the whole request, body included (milliseconds)
    #[serde(rename = "timeout-ms", default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Link harvesting configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkConfig {
    /// What to do when a harvested link cannot be classified
    #[serde(rename = "on-error", default)]
    pub on_error: LinkErrorPolicy,
}

/// Policy applied when a harvested link URL cannot be classified
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkErrorPolicy {
    /// Abort the whole harvest on the first failing link
    #[default]
    Strict,
    /// Set failing links aside and classify the rest
    Isolate,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}
