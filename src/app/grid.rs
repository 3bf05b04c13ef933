use eframe::egui::{self, Color32, RichText};

use crate::catalog::UseCase;
use crate::localization::{translate, translate_with};
use crate::ui_constants::CARD_GAP;
use crate::views::cards::{CARD_HEIGHT, CARD_WIDTH, CoverView, use_case_card};
use crate::views::ui_helpers::centered_note;

/// Central panel: status line, empty/error states and the card grid.
impl super::GalleryApp {
    pub(super) fn draw_catalog(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if self.is_loading() {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.label(translate("catalog-loading"));
            });
            return;
        }

        if let Some(err) = self.store.last_error() {
            centered_note(
                ui,
                &translate_with("catalog-load-failed", &[("error", err.to_string())]),
                Color32::from_rgb(220, 80, 80),
            );
            return;
        }

        if self.store.is_empty() {
            centered_note(ui, &translate("catalog-empty"), Color32::from_gray(160));
            return;
        }

        if self.store.selection_hidden() {
            ui.label(
                RichText::new(translate("selection-hidden"))
                    .small()
                    .color(Color32::from_rgb(235, 200, 80)),
            );
        }

        let records: Vec<&UseCase> = self.store.visible().collect();
        if records.is_empty() {
            centered_note(ui, &translate("catalog-no-matches"), Color32::from_gray(160));
            return;
        }

        let store = &self.store;
        let covers = &mut self.covers;
        let source = &self.load.source;
        let events = &self.cards.tx;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let avail = ui.available_width();
                let cols = ((avail + CARD_GAP) / (CARD_WIDTH + CARD_GAP)).floor().max(1.0) as usize;
                let used = cols as f32 * CARD_WIDTH + (cols.saturating_sub(1)) as f32 * CARD_GAP;
                let left_pad = ((avail - used) / 2.0).max(0.0);

                draw_cards_grid(ui, ctx, &records, cols, left_pad, |ui, ctx, record| {
                    let id = record.id;
                    if covers.get(id).is_none() {
                        if let Some(loc) = source.resolve_image(&record.image) {
                            covers.schedule(ctx, id, loc);
                        }
                    }
                    let cover = CoverView {
                        texture: covers.get(id),
                        loading: covers.is_loading(id),
                    };
                    use_case_card(
                        ui,
                        record,
                        store.is_active(id),
                        egui::vec2(CARD_WIDTH, CARD_HEIGHT),
                        cover,
                        events,
                    );
                });
            });
    }
}

/// Virtualized grid: only rows intersecting the clip rect are laid out; the rest
/// is replaced by empty space of the same height.
fn draw_cards_grid<F>(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    records: &[&UseCase],
    cols: usize,
    left_pad: f32,
    mut card_ui: F,
) where
    F: FnMut(&mut egui::Ui, &egui::Context, &UseCase),
{
    let total = records.len();
    if total == 0 || cols == 0 {
        return;
    }
    let total_rows = (total + cols - 1) / cols;
    let row_h = CARD_HEIGHT + CARD_GAP;

    let start_y = ui.cursor().min.y;
    let clip = ui.clip_rect();
    let overscan: isize = 1;
    let first_row = (((clip.top() - start_y) / row_h).floor() as isize - overscan).max(0) as usize;
    let last_row = ((((clip.bottom() - start_y) / row_h).ceil() as isize) + overscan)
        .clamp(0, total_rows as isize) as usize;
    let first_row = first_row.min(last_row);

    let top_skip = first_row as f32 * row_h;
    if top_skip > 0.0 {
        ui.add_space(top_skip);
    }

    for r in first_row..last_row {
        ui.horizontal(|ui| {
            ui.set_min_height(CARD_HEIGHT);
            ui.add_space(left_pad);
            let base = r * cols;
            for c in 0..cols {
                let Some(record) = records.get(base + c) else { break };
                ui.vertical(|ui| card_ui(ui, ctx, record));
                if c + 1 < cols {
                    ui.add_space(CARD_GAP);
                }
            }
        });
        ui.add_space(CARD_GAP);
    }

    let bottom_skip = (total_rows - last_row) as f32 * row_h;
    if bottom_skip > 0.0 {
        ui.add_space(bottom_skip);
    }
}

