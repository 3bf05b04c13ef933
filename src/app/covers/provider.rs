use async_trait::async_trait;
use lazy_static::lazy_static;
use std::path::Path;
use url::Url;

use super::{CoverError, ImageData};
use crate::catalog::ImageLocation;

lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::builder()
        .user_agent(concat!("use-case-gallery/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default();
}

#[async_trait]
pub trait CoverProvider: Send + Sync {
    async fn fetch(&self, location: &ImageLocation) -> Result<ImageData, CoverError>;
}

/// Reads http(s) covers with reqwest and local covers from disk; decoding runs
/// on the blocking pool so large images don't stall the runtime workers.
pub struct DefaultCoverProvider;

impl DefaultCoverProvider {
    pub fn new() -> Self {
        Self
    }

    async fn fetch_remote(&self, url: &Url) -> Result<Vec<u8>, CoverError> {
        let resp = CLIENT.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoverError::Status(status.as_u16()));
        }
        Ok(resp.bytes().await?.to_vec())
    }

    async fn read_local(&self, path: &Path) -> Result<Vec<u8>, CoverError> {
        Ok(tokio::fs::read(path).await?)
    }
}

#[async_trait]
impl CoverProvider for DefaultCoverProvider {
    async fn fetch(&self, location: &ImageLocation) -> Result<ImageData, CoverError> {
        let bytes = match location {
            ImageLocation::Remote(url) => self.fetch_remote(url).await?,
            ImageLocation::Local(path) => self.read_local(path).await?,
        };
        tokio::task::spawn_blocking(move || ImageData::decode(&bytes))
            .await
            .map_err(|e| CoverError::Join(e.to_string()))?
            .map_err(CoverError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_and_decodes_local_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("use_case_cover_{}.png", std::process::id()));
        image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let data = DefaultCoverProvider::new()
            .fetch(&ImageLocation::Local(path.clone()))
            .await
            .unwrap();
        assert_eq!(data.size(), [4, 4]);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn missing_local_file_is_io_error() {
        let mut path = std::env::temp_dir();
        path.push(format!("use_case_cover_missing_{}.png", std::process::id()));
        let err = DefaultCoverProvider::new()
            .fetch(&ImageLocation::Local(path))
            .await
            .unwrap_err();
        assert!(matches!(err, CoverError::Io(_)));
    }
}
