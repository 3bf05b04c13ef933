use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::{FilterState, UseCase, UseCaseId, normalize_tag};
use crate::types::SortKey;

struct Entry {
    record: UseCase,
    tags: BTreeSet<String>,
    title_key: TitleKey,
}

/// Owns the loaded catalog plus filter, sort and selection state.
///
/// The visible list is recomputed eagerly whenever filter or sort changes and
/// is stored as indices into the catalog, so records are never cloned or reordered.
/// Selection is independent of visibility: hiding the selected card through a
/// filter keeps it selected.
#[derive(Default)]
pub struct CatalogStore {
    entries: Vec<Entry>,
    // normalized tag -> first spelling seen in the catalog
    tag_labels: BTreeMap<String, String>,
    filter: FilterState,
    sort: SortKey,
    selection: Option<UseCaseId>,
    visible: Vec<usize>,
    last_error: Option<String>,
    loaded: bool,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole catalog. Filter, sort and selection go back to their defaults.
    pub fn load(&mut self, records: Vec<UseCase>) {
        let mut tag_labels = BTreeMap::new();
        let entries: Vec<Entry> = records
            .into_iter()
            .map(|record| {
                let mut tags = BTreeSet::new();
                for raw in &record.tags {
                    let norm = normalize_tag(raw);
                    if norm.is_empty() {
                        continue;
                    }
                    tag_labels
                        .entry(norm.clone())
                        .or_insert_with(|| raw.trim().to_string());
                    tags.insert(norm);
                }
                let title_key = TitleKey::new(&record.name);
                Entry {
                    record,
                    tags,
                    title_key,
                }
            })
            .collect();

        log::info!(
            "Catalog loaded: {} use cases, {} distinct tags",
            entries.len(),
            tag_labels.len()
        );

        self.entries = entries;
        self.tag_labels = tag_labels;
        self.filter.clear();
        self.sort = SortKey::None;
        self.selection = None;
        self.last_error = None;
        self.loaded = true;
        self.recompute();
    }

    /// Substitute an empty catalog after a failed load. Controls stay usable.
    pub fn load_failed(&mut self, err: &dyn Display) {
        log::error!("Catalog load failed: {err}");
        self.entries.clear();
        self.tag_labels.clear();
        self.filter.clear();
        self.selection = None;
        self.last_error = Some(err.to_string());
        self.loaded = true;
        self.recompute();
    }

    pub fn set_tag_filter<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter = FilterState::new(tags);
        self.recompute();
    }

    /// Flip a single tag, as a checkbox does.
    pub fn toggle_tag(&mut self, tag: &str) {
        self.filter = self.filter.toggled(tag);
        self.recompute();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
        self.recompute();
    }

    pub fn reset_filters(&mut self) {
        self.filter.clear();
        self.recompute();
    }

    /// Selecting the active id clears it, any other known id replaces it.
    /// Unknown ids are ignored. Returns the selection after the call.
    pub fn toggle_select(&mut self, id: UseCaseId) -> Option<UseCaseId> {
        if !self.entries.iter().any(|e| e.record.id == id) {
            log::warn!("Ignoring selection of unknown use case {id}");
            return self.selection;
        }
        self.selection = if self.selection == Some(id) {
            None
        } else {
            Some(id)
        };
        log::debug!("Selection is now {:?}", self.selection);
        self.selection
    }

    pub fn visible(&self) -> impl ExactSizeIterator<Item = &UseCase> + '_ {
        self.visible.iter().map(move |&i| &self.entries[i].record)
    }

    #[cfg(test)]
    pub fn visible_ids(&self) -> Vec<UseCaseId> {
        self.visible().map(|r| r.id).collect()
    }

    pub fn selection(&self) -> Option<UseCaseId> {
        self.selection
    }

    pub fn selected(&self) -> Option<&UseCase> {
        let id = self.selection?;
        self.entries.iter().map(|e| &e.record).find(|r| r.id == id)
    }

    pub fn is_active(&self, id: UseCaseId) -> bool {
        self.selection == Some(id)
    }

    /// True when the selected record is hidden by the current filter.
    pub fn selection_hidden(&self) -> bool {
        match self.selection {
            Some(id) => !self.visible().any(|r| r.id == id),
            None => false,
        }
    }

    pub fn can_continue(&self) -> bool {
        self.selection().is_some()
    }

    /// All catalog tags as (normalized, display label), sorted by normalized form.
    pub fn available_tags(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.tag_labels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.filter.contains(tag)
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn recompute(&mut self) {
        let mut visible: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| self.filter.matches(&e.tags))
            .map(|(i, _)| i)
            .collect();
        match self.sort {
            SortKey::None => {}
            // sort_by is stable, equal titles keep catalog order
            SortKey::Title => {
                visible.sort_by(|&a, &b| self.entries[a].title_key.cmp(&self.entries[b].title_key))
            }
        }
        self.visible = visible;
    }
}

/// Collation key for titles. Compares base letters first (accents and case
/// folded away), then the lowercased text, so "Éclair" sits between "Apple" and
/// "Zine" and "eclair" < "éclair". Names equal under both keys tie.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct TitleKey {
    base: String,
    folded: String,
}

impl TitleKey {
    fn new(title: &str) -> Self {
        let base = title
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect();
        let folded = title.nfc().flat_map(char::to_lowercase).collect();
        Self { base, folded }
    }
}
