use eframe::egui::{self, Color32, FontId, Rounding, Sense, Vec2};

use crate::ui_constants::card::COVER_ROUNDING;

/// Cover image, or a placeholder carrying the record name while it loads or
/// when it could not be fetched.
pub fn draw_cover(
    ui: &mut egui::Ui,
    size: Vec2,
    texture: Option<&egui::TextureHandle>,
    loading: bool,
    alt: &str,
) {
    if let Some(tex) = texture {
        ui.add(
            egui::Image::new(tex)
                .fit_to_exact_size(size)
                .rounding(Rounding::same(COVER_ROUNDING)),
        );
        return;
    }

    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, Rounding::same(COVER_ROUNDING), Color32::from_gray(48));
    if loading {
        ui.put(rect, egui::Spinner::new());
    } else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            alt,
            FontId::proportional(14.0),
            Color32::from_gray(150),
        );
    }
}
