use eframe::egui::{self, Align2, Color32, FontId, Rect, RichText, Rounding, Stroke, Ui, Vec2};
use strum::{EnumCount, IntoEnumIterator};

use crate::localization::translate;
use crate::views::filters::{EnumWithAlternativeNames, LocalizableName};

/// Single-choice segmented control over all variants of `T`.
/// Header shows the translated `title` and the current value; each segment shows
/// the variant glyph followed by its translated name.
/// Returns Some(variant) when a different segment was clicked this frame.
pub fn segmented_panel<T>(ui: &mut Ui, title: &str, current: T) -> Option<T>
where
    T: IntoEnumIterator + EnumCount + EnumWithAlternativeNames + LocalizableName + PartialEq + Copy,
{
    ui.horizontal(|ui| {
        ui.add(egui::Label::new(RichText::new(translate(title)).weak()).selectable(false));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::Label::new(translate(current.loc_key())).selectable(false));
        });
    });

    let height = (ui.spacing().interact_size.y * 1.4).clamp(28.0, 40.0);
    let (container, _) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), height), egui::Sense::hover());
    let painter = ui.painter().clone();
    painter.rect(
        container,
        Rounding::same(6.0),
        Color32::from_rgb(30, 30, 30),
        Stroke::new(1.0, Color32::from_gray(80)),
    );

    let seg_w = container.width() / T::COUNT as f32;
    let mut picked = None;

    for (i, variant) in T::iter().enumerate() {
        let seg = Rect::from_min_size(
            container.min + Vec2::new(i as f32 * seg_w, 0.0),
            Vec2::new(seg_w, container.height()),
        );
        let is_selected = current == variant;

        if i > 0 {
            painter.line_segment(
                [
                    egui::pos2(seg.min.x, seg.min.y + 4.0),
                    egui::pos2(seg.min.x, seg.max.y - 4.0),
                ],
                Stroke::new(1.0, Color32::from_gray(60)),
            );
        }

        let response = ui
            .interact(seg, ui.id().with(("segmented_panel", title, i)), egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if is_selected {
            painter.rect_filled(seg.shrink(2.0), Rounding::same(4.0), Color32::from_rgb(45, 45, 45));
        } else if response.hovered() {
            painter.rect_filled(
                seg.shrink(2.0),
                Rounding::same(4.0),
                Color32::from_rgba_premultiplied(255, 255, 255, 6),
            );
        }

        let color = if is_selected {
            Color32::from_rgb(110, 160, 240)
        } else {
            Color32::from_gray(170)
        };
        painter.text(
            seg.center(),
            Align2::CENTER_CENTER,
            format!("{} {}", variant.alternative_name(), translate(variant.loc_key())),
            FontId::proportional(13.0),
            color,
        );

        if response.clicked() && !is_selected {
            picked = Some(variant);
        }
    }

    picked
}
