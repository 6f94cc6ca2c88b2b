use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to make the HTTP request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Received non-OK status code: {}", .0.as_u16())]
    UnexpectedStatus(StatusCode),

    #[error("Failed to read response body: {0}")]
    Io(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to unmarshal JSON response: {0}")]
pub struct DecodeError(#[source] pub serde_json::Error);

/// Failure to render a single product. Never fatal; see `printer::print_products`.
#[derive(Debug, Error)]
#[error("Failed to encode product {id}: {source}")]
pub struct ItemEncodeError {
    pub id: i64,
    #[source]
    pub source: serde_json::Error,
}

/// Errors that end the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
