use std::time::Duration;

/// Default Transiter server address.
pub const DEFAULT_ADDR: &str = "http://localhost:8080";

/// Default transit system id.
pub const DEFAULT_SYSTEM: &str = "us-ny-subway";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for a Transiter server.
#[derive(Debug, Clone)]
pub struct TransiterConfig {
    /// Base address of the server's API.
    pub addr: String,
    /// Transit system to query.
    pub system: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Sent as `Authorization: Bearer <key>` when present.
    pub api_key: Option<String>,
}

impl TransiterConfig {
    pub fn new(addr: impl Into<String>, system: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            system: system.into(),
            timeout: DEFAULT_TIMEOUT,
            api_key: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Empty keys are ignored.
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.is_empty());
        self
    }
}

impl Default for TransiterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADDR, DEFAULT_SYSTEM)
    }
}
