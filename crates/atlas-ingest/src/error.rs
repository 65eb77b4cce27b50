use thiserror::Error;

/// Failures while loading the country dataset.
///
/// The `Display` rendering is the free-text reason the presentation layer
/// shows as its error state. The pipeline is never invoked on a failed load.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to decode country payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
