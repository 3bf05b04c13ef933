use eframe::egui::{self, Color32, Layout, RichText, Rounding, Stroke, Vec2};
use std::sync::mpsc::Sender;

use super::attributes::draw_attributes;
use super::cover::draw_cover;
use crate::catalog::{UseCase, UseCaseId};
use crate::localization::translate;
use crate::ui_constants::card::{
    ACTIVE_STROKE, COVER_ASPECT, DESCRIPTION_HEIGHT, INNER_MARGIN, ROUNDING,
};

/// What a card can ask of its owner. The card never changes selection itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    SelectRequested { id: UseCaseId },
}

/// Cover state as seen by the card.
#[derive(Clone, Copy, Default)]
pub struct CoverView<'a> {
    pub texture: Option<&'a egui::TextureHandle>,
    pub loading: bool,
}

pub struct CardStyle {
    pub fill: Color32,
    pub stroke: Stroke,
    pub button_fill: Color32,
}

pub fn card_style(active: bool) -> CardStyle {
    if active {
        CardStyle {
            fill: Color32::from_rgb(30, 52, 38),
            stroke: Stroke::new(ACTIVE_STROKE, Color32::from_rgb(70, 130, 230)),
            button_fill: Color32::from_rgb(40, 140, 80),
        }
    } else {
        CardStyle {
            fill: Color32::from_rgb(36, 36, 36),
            stroke: Stroke::new(1.0, Color32::from_rgb(64, 64, 64)),
            button_fill: Color32::from_rgb(0, 95, 169),
        }
    }
}

/// Responses of the whole card and of its select button.
pub struct CardResponse {
    pub card: egui::Response,
    pub select: egui::Response,
}

/// Localization key of the select button for the given state.
pub fn select_label_key(active: bool) -> &'static str {
    if active { "card-selected" } else { "card-select" }
}

/// Fixed-size card for one use case.
/// Pure function of the record and `active`; a click on the select button is
/// reported through `events` and nothing else.
pub fn use_case_card(
    ui: &mut egui::Ui,
    record: &UseCase,
    active: bool,
    size: Vec2,
    cover: CoverView<'_>,
    events: &Sender<CardEvent>,
) -> CardResponse {
    let style = card_style(active);

    ui.set_min_width(size.x);
    ui.set_max_width(size.x);

    let frame_out = egui::Frame::none()
        .fill(style.fill)
        .stroke(style.stroke)
        .rounding(Rounding::same(ROUNDING))
        .inner_margin(egui::Margin::same(INNER_MARGIN))
        .show(ui, |ui| {
            let inner = size - Vec2::splat(2.0 * INNER_MARGIN);
            ui.set_width(inner.x);
            ui.set_min_height(inner.y);

            draw_cover(
                ui,
                Vec2::new(inner.x, inner.x * COVER_ASPECT),
                cover.texture,
                cover.loading,
                &record.name,
            );

            ui.add_space(10.0);
            ui.add(
                egui::Label::new(
                    RichText::new(&record.name)
                        .heading()
                        .color(Color32::from_rgb(230, 230, 230)),
                )
                .truncate(true),
            );
            ui.add_space(4.0);

            // Fixed block so every card keeps the same height regardless of text length
            let (desc_rect, _) = ui.allocate_exact_size(
                Vec2::new(inner.x, DESCRIPTION_HEIGHT),
                egui::Sense::hover(),
            );
            let mut desc_ui = ui.child_ui(desc_rect, Layout::top_down(egui::Align::Min));
            desc_ui.set_clip_rect(desc_rect.intersect(ui.clip_rect()));
            desc_ui.add(
                egui::Label::new(
                    RichText::new(&record.description).color(Color32::from_rgb(180, 180, 180)),
                )
                .wrap(true),
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                draw_attributes(ui, record.id, &record.attributes);
                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    let button = egui::Button::new(
                        RichText::new(translate(select_label_key(active))).color(Color32::WHITE),
                    )
                    .fill(style.button_fill)
                    .rounding(Rounding::same(5.0))
                    .min_size(Vec2::new(90.0, 30.0));
                    let resp = ui
                        .add(button)
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    if resp.clicked() {
                        log::debug!("select requested for use case {}", record.id);
                        let _ = events.send(CardEvent::SelectRequested { id: record.id });
                    }
                    resp
                })
                .inner
            })
            .inner
        });

    CardResponse {
        card: frame_out.response,
        select: frame_out.inner,
    }
}
