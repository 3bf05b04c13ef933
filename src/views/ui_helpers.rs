use eframe::egui::{self, Color32, RichText, Rounding, Stroke};

/// Floating label shown above `trigger` while the pointer is over it.
/// Drawn in the tooltip layer and never interactable, so it can't steal hover.
pub fn show_hover_label(ui: &egui::Ui, trigger: &egui::Response, id: egui::Id, text: &str) {
    if !trigger.hovered() || text.is_empty() {
        return;
    }
    let rect = trigger.rect;
    egui::Area::new(id)
        .order(egui::Order::Tooltip)
        .interactable(false)
        .pivot(egui::Align2::CENTER_BOTTOM)
        .fixed_pos(egui::pos2(rect.center().x, rect.top() - 6.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::none()
                .fill(Color32::from_rgb(51, 51, 51))
                .stroke(Stroke::new(1.0, Color32::from_gray(70)))
                .rounding(Rounding::same(5.0))
                .inner_margin(egui::Margin::same(5.0))
                .show(ui, |ui| {
                    ui.add(
                        egui::Label::new(RichText::new(text).small().color(Color32::WHITE))
                            .wrap(false)
                            .selectable(false),
                    );
                });
        });
}

/// Centered, muted one-line message used for empty/loading/error states.
pub fn centered_note(ui: &mut egui::Ui, text: &str, color: Color32) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(text).color(color));
    });
}
