use std::collections::BTreeSet;

/// Canonical form used for every tag comparison: trimmed and lowercased,
/// so "Portfolio" and " portfolio" select the same cards.
pub fn normalize_tag(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Set of tags a card must carry to stay visible. Empty means "show all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selected_tags: BTreeSet<String>,
}

impl FilterState {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected_tags = tags
            .into_iter()
            .map(|t| normalize_tag(t.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();
        Self { selected_tags }
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected_tags
    }

    pub fn is_empty(&self) -> bool {
        self.selected_tags.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.selected_tags.contains(&normalize_tag(tag))
    }

    /// Copy of this filter with `tag` flipped in or out.
    pub fn toggled(&self, tag: &str) -> Self {
        let tag = normalize_tag(tag);
        let mut selected_tags = self.selected_tags.clone();
        if tag.is_empty() {
            return Self { selected_tags };
        }
        if !selected_tags.remove(&tag) {
            selected_tags.insert(tag);
        }
        Self { selected_tags }
    }

    /// Conjunctive match: every selected tag must be present in `tags`
    /// (which must already be normalized).
    pub fn matches(&self, tags: &BTreeSet<String>) -> bool {
        self.selected_tags.is_subset(tags)
    }

    pub fn clear(&mut self) {
        self.selected_tags.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| normalize_tag(t)).collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let f = FilterState::default();
        assert!(f.matches(&set(&[])));
        assert!(f.matches(&set(&["writing", "design"])));
    }

    #[test]
    fn every_selected_tag_is_required() {
        let f = FilterState::new(["writing", "design"]);
        assert!(f.matches(&set(&["writing", "design", "blog"])));
        assert!(!f.matches(&set(&["writing"])));
        assert!(!f.matches(&set(&["design"])));
    }

    #[test]
    fn tags_are_normalized_on_the_way_in() {
        let f = FilterState::new(["  Portfolio", "", "DESIGN "]);
        assert_eq!(f.selected_tags().len(), 2);
        assert!(f.contains("portfolio"));
        assert!(f.contains("Design"));
        assert!(f.matches(&set(&["Portfolio", "Design"])));
    }

    #[test]
    fn toggled_adds_then_removes() {
        let f = FilterState::default().toggled("Blog");
        assert!(f.contains("blog"));
        let f = f.toggled("BLOG");
        assert!(f.is_empty());
        assert!(FilterState::default().toggled("   ").is_empty());
    }
}
