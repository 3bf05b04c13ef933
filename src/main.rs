#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide the console in release
// Entry point kept minimal: logging, config, localization, window options and app start.
// Everything else lives in the app module.

use eframe::egui;

mod app;
mod catalog;
mod localization;
mod logger;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    app::config::load_config_from_disk();

    let preferred_lang = app::config::with_config(|c| c.language.clone());
    if let Err(e) = localization::initialize_localization(preferred_lang.as_deref()) {
        log::warn!("Localization fallback to English: {e}");
    }
    log::info!("UI language: {}", localization::current_language());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([560.0, 480.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        localization::translate("app-window-title").as_str(),
        native_options,
        Box::new(|_cc| Box::new(app::GalleryApp::new())),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
