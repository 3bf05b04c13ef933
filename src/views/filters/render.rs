use eframe::egui::{self, Layout, RichText};

use crate::catalog::CatalogStore;
use crate::localization::{translate, translate_with};
use crate::types::SortKey;
use crate::views::filters::items::{segmented_panel::segmented_panel, tag_checkboxes::tag_checkboxes};

/// User intent collected from the sidebar in one frame. The panel only reads the
/// store; the app applies these afterwards.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FiltersOutput {
    pub tag_toggled: Option<String>,
    pub sort_changed: Option<SortKey>,
    pub reset_clicked: bool,
    pub continue_clicked: bool,
    pub logs_clicked: bool,
}

/// Draws the left-side filters panel.
pub fn draw_filters_panel(ctx: &egui::Context, store: &CatalogStore) -> FiltersOutput {
    let mut out = FiltersOutput::default();
    egui::SidePanel::left("filters_panel")
        .frame(
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(30, 30, 30))
                .inner_margin(10.0),
        )
        .resizable(false)
        .exact_width(crate::ui_constants::SIDEBAR_WIDTH)
        .show(ctx, |ui| {
            ui.label(RichText::new(translate("filters-header")).strong());
            ui.separator();

            // SORT
            out.sort_changed = segmented_panel(ui, "sort-header", store.sort());

            ui.separator();

            // TAGS
            ui.label(RichText::new(translate("tags-header")).weak());
            egui::ScrollArea::vertical()
                .id_source("tag_checkboxes")
                .max_height(ui.available_height() * 0.6)
                .show(ui, |ui| {
                    out.tag_toggled = tag_checkboxes(ui, store);
                });

            ui.add_space(4.0);
            let reset = ui.add_enabled(
                !store.filter().is_empty(),
                egui::Button::new(translate("reset-filters")),
            );
            if reset.clicked() {
                out.reset_clicked = true;
            }

            ui.separator();
            ui.label(
                RichText::new(translate_with(
                    "visible-count",
                    &[
                        ("shown", store.visible().len().to_string()),
                        ("total", store.len().to_string()),
                    ],
                ))
                .small()
                .weak(),
            );

            ui.with_layout(Layout::bottom_up(egui::Align::LEFT), |ui| {
                if ui.button(translate("logs-button")).clicked() {
                    out.logs_clicked = true;
                }
                ui.add_space(8.0);
                let cont = ui.add_enabled(
                    store.can_continue(),
                    egui::Button::new(RichText::new(translate("continue-button")).strong())
                        .min_size(egui::vec2(ui.available_width(), 32.0)),
                );
                if cont.clicked() {
                    out.continue_clicked = true;
                }
                if let Some(selected) = store.selected() {
                    ui.label(
                        RichText::new(translate_with(
                            "selected-name",
                            &[("name", selected.name.clone())],
                        ))
                        .small(),
                    );
                }
            });
        });

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_frame_reports_no_intent() {
        let ctx = egui::Context::default();
        let mut store = CatalogStore::new();
        store.load_failed(&"offline");

        let mut out = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            out = Some(draw_filters_panel(ctx, &store));
        });
        assert_eq!(out, Some(FiltersOutput::default()));
    }
}
