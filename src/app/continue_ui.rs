// Confirmation dialog shown after Continue.

use eframe::egui::{self, RichText};

use crate::catalog::UseCase;
use crate::localization::{translate, translate_with};

pub fn draw_continue_window(ctx: &egui::Context, confirmed: &mut Option<UseCase>) {
    let Some(choice) = confirmed.as_ref() else {
        return;
    };

    let mut close = false;
    egui::Window::new(translate("continue-title"))
        .id(egui::Id::new("continue_window"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(translate_with("continue-body", &[("name", choice.name.clone())]));
            if !choice.description.is_empty() {
                ui.label(RichText::new(&choice.description).weak());
            }
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button(translate("continue-ok")).clicked() {
                    close = true;
                }
            });
        });

    if close {
        *confirmed = None;
    }
}
