use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a use case inside one loaded catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UseCaseId(pub u64);

impl fmt::Display for UseCaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Small icon + label pair shown as a badge at the bottom of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub icon: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCase {
    pub id: UseCaseId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Absolute http(s) URL or a path relative to the catalog document.
    #[serde(default)]
    pub image: String,
    /// Tags as written in the document. Matching uses the normalized form.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// Wire shape of a catalog file: `{ "data": [ ... ] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub data: Vec<UseCase>,
}
