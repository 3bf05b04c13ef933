// Application shell: owns the catalog store and the channels feeding it, and wires the
// sidebar, the card grid and the continue dialog together each frame.

use eframe::{egui, App};
use std::sync::Arc;

use crate::catalog::{CatalogSource, CatalogStore, UseCase};
use crate::views::cards::CardEvent;
use crate::views::filters::{FiltersOutput, draw_filters_panel};

pub mod config;
mod continue_ui;
mod covers;
mod fetch;
mod grid;
mod logs_ui;
mod runtime;
mod state;

pub use runtime::rt;
use covers::{CoverManager, DefaultCoverProvider};
use state::{CardEvents, LoadState};

pub struct GalleryApp {
    store: CatalogStore,
    load: LoadState,
    covers: CoverManager,
    cards: CardEvents,
    // Selection confirmed through Continue, shown in a dialog until dismissed
    confirmed: Option<UseCase>,
}

impl GalleryApp {
    pub fn new() -> Self {
        let raw_source = config::with_config(|c| c.effective_catalog_source());
        let mut store = CatalogStore::new();
        let source = match CatalogSource::parse(raw_source.as_deref()) {
            Ok(source) => source,
            Err(e) => {
                store.load_failed(&e);
                CatalogSource::Embedded
            }
        };
        let mut load = LoadState::new(source);
        // A bad source is terminal: no fetch, just the empty catalog.
        load.started = store.is_loaded();

        Self {
            store,
            load,
            covers: CoverManager::new(Arc::new(DefaultCoverProvider::new())),
            cards: CardEvents::new(),
            confirmed: None,
        }
    }

    fn apply_filters_output(&mut self, out: FiltersOutput) {
        let mut filters_changed = false;
        if let Some(tag) = out.tag_toggled {
            self.store.toggle_tag(&tag);
            filters_changed = true;
        }
        if let Some(sort) = out.sort_changed {
            self.store.set_sort(sort);
            filters_changed = true;
        }
        if out.reset_clicked {
            self.store.reset_filters();
            filters_changed = true;
        }
        if out.continue_clicked {
            self.continue_with_selection();
        }
        if out.logs_clicked {
            logs_ui::open_logs();
        }
        if filters_changed {
            self.remember_filters();
        }
    }

    fn continue_with_selection(&mut self) {
        if let Some(selected) = self.store.selected() {
            log::info!("Continuing with use case {} ({})", selected.id, selected.name);
            self.confirmed = Some(selected.clone());
        }
    }

    /// Persist sidebar state as the next startup state when enabled in config.
    fn remember_filters(&self) {
        if !config::with_config(|c| c.remember_filters) {
            return;
        }
        let tags: Vec<String> = self.store.filter().selected_tags().iter().cloned().collect();
        let sort = self.store.sort();
        let need_save = config::with_config_mut(|c| {
            let changed = c.startup_tags != tags || c.startup_sort != sort;
            c.startup_tags = tags;
            c.startup_sort = sort;
            changed
        });
        if need_save {
            config::save_config_to_disk();
        }
    }

    fn drain_card_events(&mut self, ctx: &egui::Context) {
        while let Ok(ev) = self.cards.rx.try_recv() {
            match ev {
                CardEvent::SelectRequested { id } => {
                    self.store.toggle_select(id);
                }
            }
            ctx.request_repaint();
        }
    }
}

impl App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        if !self.load.started {
            self.start_load(ctx);
        }
        self.poll_catalog();
        self.covers.poll(ctx);

        let out = draw_filters_panel(ctx, &self.store);
        self.apply_filters_output(out);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_catalog(ui, ctx);
        });
        // Events raised by cards this frame are applied before the next one is drawn.
        self.drain_card_events(ctx);

        continue_ui::draw_continue_window(ctx, &mut self.confirmed);
        logs_ui::draw_logs_viewport(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UseCaseId;

    fn record(id: u64, name: &str) -> UseCase {
        UseCase {
            id: UseCaseId(id),
            name: name.to_string(),
            description: String::new(),
            image: String::new(),
            tags: Vec::new(),
            attributes: Vec::new(),
        }
    }

    #[test]
    fn card_events_toggle_the_store_selection() {
        let mut app = GalleryApp::new();
        app.store.load(vec![record(7, "Course"), record(8, "Blog")]);
        let ctx = egui::Context::default();
        let tx = app.cards.tx.clone();

        tx.send(CardEvent::SelectRequested { id: UseCaseId(7) }).unwrap();
        app.drain_card_events(&ctx);
        assert_eq!(app.store.selection(), Some(UseCaseId(7)));

        // several events in one frame apply in order
        tx.send(CardEvent::SelectRequested { id: UseCaseId(8) }).unwrap();
        tx.send(CardEvent::SelectRequested { id: UseCaseId(8) }).unwrap();
        app.drain_card_events(&ctx);
        assert_eq!(app.store.selection(), None);

        tx.send(CardEvent::SelectRequested { id: UseCaseId(8) }).unwrap();
        app.drain_card_events(&ctx);
        app.continue_with_selection();
        assert_eq!(app.confirmed.as_ref().map(|r| r.name.as_str()), Some("Blog"));
    }
}
