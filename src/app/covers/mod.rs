// Lazy cover loading for cards: provider trait (network / local file) and a manager
// that owns the textures and drains results on the UI thread.
mod error;
mod image_data;
mod manager;
mod provider;

pub use error::CoverError;
pub use image_data::ImageData;
pub use manager::CoverManager;
pub use provider::{CoverProvider, DefaultCoverProvider};
