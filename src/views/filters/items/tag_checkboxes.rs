use eframe::egui::{RichText, Ui};

use crate::catalog::CatalogStore;
use crate::localization::translate;

/// One checkbox per catalog tag. Checked state is read from the store every frame,
/// so resetting the filter unticks them without any widget-side bookkeeping.
/// Returns the normalized tag whose box was toggled this frame.
pub fn tag_checkboxes(ui: &mut Ui, store: &CatalogStore) -> Option<String> {
    let mut toggled = None;
    let mut any = false;
    for (tag, label) in store.available_tags() {
        any = true;
        let mut checked = store.is_tag_selected(tag);
        if ui.checkbox(&mut checked, label).changed() {
            toggled = Some(tag.to_string());
        }
    }
    if !any {
        ui.label(RichText::new(translate("tags-empty")).weak().italics());
    }
    toggled
}
