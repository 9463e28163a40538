//! Error types for stop lookups and departure queries.

/// Errors that can occur while querying the upstream stop API.
#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    /// The request never produced a response (connect failure, timeout, abort).
    #[error("error calling {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with something other than 200 OK.
    #[error("error calling {url} {status}")]
    Status { url: String, status: u16 },

    /// The response body was not a valid payload.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The fuzzy station search matched nothing.
    #[error("no stations found matching {query}")]
    StationNotFound { query: String },

    /// No future stop-time at the station satisfied the selector.
    #[error("could not find any {selector} trains at station {station}")]
    NoDepartures { selector: String, station: String },

    /// The configured server address cannot be used as a base URL.
    #[error("invalid server address {addr}: {message}")]
    InvalidAddress { addr: String, message: String },

    /// The line/direction options do not describe a single selector.
    #[error("{0}")]
    InvalidSelector(String),

    /// The API key cannot be sent as a header value.
    #[error("invalid API key format")]
    InvalidApiKey,

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
