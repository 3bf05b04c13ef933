use eframe::egui;

use super::{GalleryApp, config, rt};
use crate::catalog::loader;

/// One-shot catalog read. The result arrives through `load.rx` and is applied in
/// `poll_catalog`; there is no retry, a failure simply leaves the catalog empty.
impl GalleryApp {
    pub(super) fn start_load(&mut self, ctx: &egui::Context) {
        if self.load.started {
            return;
        }
        self.load.started = true;
        self.load.loading = true;

        let tx = self.load.tx.clone();
        let source = self.load.source.clone();
        let ctx2 = ctx.clone();
        log::info!("Loading catalog from {source}");

        rt().spawn(async move {
            let res = loader::fetch_catalog(&source).await;
            let _ = tx.send(res);
            ctx2.request_repaint();
        });
    }

    pub(super) fn poll_catalog(&mut self) {
        while let Ok(res) = self.load.rx.try_recv() {
            self.load.loading = false;
            match res {
                Ok(records) => {
                    self.store.load(records);
                    self.covers.clear();
                    self.apply_startup_filters();
                }
                Err(e) => self.store.load_failed(&e),
            }
        }
    }

    /// Restore the configured sidebar state on top of the freshly loaded catalog.
    fn apply_startup_filters(&mut self) {
        let (sort, tags) = config::with_config(|c| (c.startup_sort, c.startup_tags.clone()));
        if !tags.is_empty() {
            log::info!("Applying startup tags: {}", tags.join(", "));
            self.store.set_tag_filter(&tags);
        }
        self.store.set_sort(sort);
    }

    pub(super) fn is_loading(&self) -> bool {
        self.load.loading
    }
}
