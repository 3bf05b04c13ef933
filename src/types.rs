use serde::{Deserialize, Serialize};

use crate::views::filters::{EnumWithAlternativeNames, LocalizableName};

#[derive(
    strum::EnumCount,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Default,
    Debug,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    None,
    Title,
}

impl EnumWithAlternativeNames for SortKey {
    fn alternative_name(&self) -> &'static str {
        match self {
            SortKey::None => "≡",
            SortKey::Title => "🔤",
        }
    }
}

impl LocalizableName for SortKey {
    fn loc_key(&self) -> &'static str {
        match self {
            SortKey::None => "sort-none",
            SortKey::Title => "sort-title",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn selector_values_round_trip() {
        assert_eq!(SortKey::from_str("none").unwrap(), SortKey::None);
        assert_eq!(SortKey::from_str("Title").unwrap(), SortKey::Title);
        assert!(SortKey::from_str("date").is_err());
        assert_eq!(SortKey::Title.to_string(), "title");
        assert_eq!(SortKey::iter().count(), 2);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&SortKey::Title).unwrap(), "\"title\"");
        let k: SortKey = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(k, SortKey::None);
    }
}
