use thiserror::Error;

/// Startup failures while reading the Airtable settings; fatal, the server never binds.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is missing")]
    Missing(&'static str),
    #[error("{var} environment variable is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TickerError {
    #[error("ticker must not be empty")]
    Empty,
}

/// Failures of a single outbound request to Airtable.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build the HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Airtable is unreachable: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// Airtable answered with a non-2xx status; `body` is its raw response text.
    #[error("Airtable responded with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("failed to decode the Airtable response: {0}")]
    Decode(#[source] reqwest::Error),
}
