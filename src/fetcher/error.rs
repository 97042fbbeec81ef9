use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Errors that abort a stats scrape
#[derive(Error, Debug)]
pub enum FetchError {
    /// The stats URL could not be built from the base URL and index pattern
    #[error("Invalid stats URL {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be created
    #[error("Failed to build the HTTP client")]
    Client(#[source] reqwest::Error),

    /// Connection, transport, or body read failure
    #[error("Request to {url} failed")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// Anything other than 200 OK
    #[error("{url} {status}")]
    UnexpectedStatus { url: Url, status: StatusCode },

    /// Malformed or schema-mismatched body
    #[error("Failed to decode stats from {url}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
}
