// Logs viewport (separate OS window) listing the in-app log buffer with colored levels.

use eframe::egui;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::localization::{translate, translate_with};

static LOGS_OPEN: AtomicBool = AtomicBool::new(false);
static AUTOSCROLL: AtomicBool = AtomicBool::new(true);

pub fn open_logs() {
    LOGS_OPEN.store(true, Ordering::Relaxed);
}

pub fn draw_logs_viewport(ctx: &egui::Context) {
    if !LOGS_OPEN.load(Ordering::Relaxed) {
        return;
    }

    ctx.show_viewport_deferred(
        egui::ViewportId::from_hash_of("logs_window"),
        egui::ViewportBuilder::default()
            .with_title(translate("logs-title"))
            .with_inner_size([800.0, 500.0])
            .with_resizable(true),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                LOGS_OPEN.store(false, Ordering::Relaxed);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button(translate("logs-clear")).clicked() {
                        crate::logger::clear();
                    }
                    if ui.button(translate("logs-copy")).clicked() {
                        let text = crate::logger::get_all().join("\n");
                        ui.output_mut(|o| o.copied_text = text);
                    }
                    let mut autoscroll = AUTOSCROLL.load(Ordering::Relaxed);
                    if ui.checkbox(&mut autoscroll, translate("logs-autoscroll")).changed() {
                        AUTOSCROLL.store(autoscroll, Ordering::Relaxed);
                    }
                    ui.separator();
                    ui.label(translate_with(
                        "logs-lines",
                        &[("count", crate::logger::len().to_string())],
                    ));
                });
                ui.separator();

                let scroll = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(AUTOSCROLL.load(Ordering::Relaxed));
                let total = crate::logger::len();
                let row_height = ui.text_style_height(&egui::TextStyle::Monospace) + 2.0;
                scroll.show_rows(ui, row_height, total, |ui, row_range| {
                    let mut job = egui::text::LayoutJob::default();
                    crate::logger::for_each_range(row_range.start, row_range.end, |e| {
                        let fmt = egui::TextFormat {
                            color: color_for_level(e.level),
                            font_id: egui::FontId::monospace(12.0),
                            ..Default::default()
                        };
                        job.append(&format!("{e}\n"), 0.0, fmt);
                    });
                    ui.label(job);
                });
            });
        },
    );
}

fn color_for_level(level: log::Level) -> egui::Color32 {
    match level {
        log::Level::Error => egui::Color32::from_rgb(220, 80, 80),
        log::Level::Warn => egui::Color32::from_rgb(235, 200, 80),
        log::Level::Info => egui::Color32::from_rgb(200, 200, 200),
        log::Level::Debug => egui::Color32::from_rgb(120, 180, 255),
        log::Level::Trace => egui::Color32::from_rgb(160, 160, 160),
    }
}
