use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("base url `{0}` cannot carry a path")]
    InvalidBaseUrl(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response body is not valid json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("topic response has no `arn` field: {body}")]
    MissingArn { body: String },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
