use eframe::egui::{self, Color32, FontId, Sense, Vec2};

use crate::catalog::{Attribute, UseCaseId};
use crate::ui_constants::card::ATTRIBUTE_SIZE;
use crate::views::ui_helpers::show_hover_label;

/// Round attribute badges; the label appears above a badge while it is hovered.
pub fn draw_attributes(ui: &mut egui::Ui, id: UseCaseId, attributes: &[Attribute]) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        for (idx, attr) in attributes.iter().enumerate() {
            let (rect, response) =
                ui.allocate_exact_size(Vec2::splat(ATTRIBUTE_SIZE), Sense::hover());
            let bg = if response.hovered() {
                Color32::from_gray(225)
            } else {
                Color32::from_gray(238)
            };
            let painter = ui.painter();
            painter.circle_filled(rect.center(), ATTRIBUTE_SIZE / 2.0, bg);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                icon_glyph(&attr.icon),
                FontId::proportional(15.0),
                Color32::from_gray(85),
            );
            show_hover_label(
                ui,
                &response,
                egui::Id::new(("attr_label", id, idx)),
                &attr.label,
            );
        }
    });
}

/// Map icon names like "icons:language" or "social:school" to a glyph egui's
/// default fonts can draw. Only the part after the last ':' matters.
pub fn icon_glyph(icon: &str) -> &'static str {
    let name = icon.rsplit(':').next().unwrap_or(icon).trim().to_ascii_lowercase();
    match name.as_str() {
        "language" | "translate" | "public" => "🌐",
        "school" | "education" => "🎓",
        "image" | "photo" | "collections" => "🖼",
        "edit" | "mode-edit" | "create" => "✏",
        "book" | "menu-book" | "chrome-reader-mode" => "📖",
        "code" => "💻",
        "star" | "grade" => "⭐",
        "people" | "group" | "person" => "👥",
        "search" => "🔍",
        "link" => "🔗",
        _ => "●",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaced_icons_map_by_name() {
        assert_eq!(icon_glyph("icons:language"), "🌐");
        assert_eq!(icon_glyph("social:school"), "🎓");
        assert_eq!(icon_glyph("editor:mode-edit"), "✏");
        assert_eq!(icon_glyph("Search"), "🔍");
    }

    #[test]
    fn unknown_icons_get_a_generic_glyph() {
        assert_eq!(icon_glyph("hax:hax2022"), "●");
        assert_eq!(icon_glyph(""), "●");
    }
}
