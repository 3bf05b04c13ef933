use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoverError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode task failed: {0}")]
    Join(String),
}
