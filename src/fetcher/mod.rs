use crate::datamodel::StatsDocument;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

pub mod error;

pub use error::FetchError;

const STATS_PATH: &str = "_stats";

/// Build `{base}/{indices}/_stats`.
///
/// A trailing slash on the base URL is ignored so that `http://host:9200/`
/// and `http://host:9200` give the same request.
pub fn stats_url(base: &Url, indices: &str) -> Result<Url, FetchError> {
    let url = format!(
        "{}/{}/{}",
        base.as_str().trim_end_matches('/'),
        indices,
        STATS_PATH
    );
    Url::parse(&url).map_err(|source| FetchError::InvalidUrl { url, source })
}

/// Client for the index statistics endpoint. No timeout, no retry.
pub struct StatsClient {
    http_client: reqwest::Client,
}

impl StatsClient {
    pub fn new() -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { http_client })
    }

    /// Issue one GET and decode the body.
    ///
    /// The response is fully read and dropped before decoding starts.
    pub async fn fetch(&self, url: &Url) -> Result<StatsDocument, FetchError> {
        debug!(%url, "Requesting index statistics");

        let body = {
            let response = self
                .http_client
                .get(url.clone())
                .send()
                .await
                .map_err(|source| FetchError::Transport {
                    url: url.clone(),
                    source,
                })?;

            let status = response.status();
            if status != StatusCode::OK {
                return Err(FetchError::UnexpectedStatus {
                    url: url.clone(),
                    status,
                });
            }

            response
                .bytes()
                .await
                .map_err(|source| FetchError::Transport {
                    url: url.clone(),
                    source,
                })?
        };
        debug!(%url, bytes = body.len(), "Received index statistics");

        decode_stats(&body).map_err(|source| FetchError::Decode {
            url: url.clone(),
            source,
        })
    }
}

pub fn decode_stats(body: &[u8]) -> Result<StatsDocument, serde_json::Error> {
    serde_json::from_slice(body)
}
