// Catalog domain: use-case records, the filter/sort/selection store and the one-shot loader.
// Nothing in here touches egui, so the whole state machine is testable without a window.

mod error;
mod filter;
pub mod loader;
mod store;
mod types;

pub use error::LoadError;
pub use filter::{FilterState, normalize_tag};
pub use loader::{CatalogSource, ImageLocation};
pub use store::CatalogStore;
pub use types::{Attribute, CatalogDocument, UseCase, UseCaseId};
