use std::path::PathBuf;
use thiserror::Error;

use super::UseCaseId;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate use case id {0}")]
    DuplicateId(UseCaseId),

    #[error("unsupported catalog source: {0}")]
    UnsupportedSource(String),
}
