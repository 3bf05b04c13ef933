use eframe::egui;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::mpsc;

use super::{CoverProvider, ImageData};
use crate::catalog::{ImageLocation, UseCaseId};

pub enum CoverMsg {
    Ok { generation: u64, id: UseCaseId, data: ImageData },
    Err { generation: u64, id: UseCaseId },
}

impl CoverMsg {
    fn generation(&self) -> u64 {
        match self {
            CoverMsg::Ok { generation, .. } | CoverMsg::Err { generation, .. } => *generation,
        }
    }
}

/// Cover textures keyed by use case. Each id is fetched at most once per catalog;
/// failures are remembered so the grid doesn't re-request them every frame.
pub struct CoverManager {
    provider: Arc<dyn CoverProvider>,
    covers: HashMap<UseCaseId, egui::TextureHandle>,
    loading: HashSet<UseCaseId>,
    failed: HashSet<UseCaseId>,
    // bumped by clear(); results from older generations are dropped
    generation: u64,
    tx: mpsc::Sender<CoverMsg>,
    rx: mpsc::Receiver<CoverMsg>,
}

impl CoverManager {
    pub fn new(provider: Arc<dyn CoverProvider>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            provider,
            covers: HashMap::new(),
            loading: HashSet::new(),
            failed: HashSet::new(),
            generation: 0,
            tx,
            rx,
        }
    }

    pub fn get(&self, id: UseCaseId) -> Option<&egui::TextureHandle> {
        self.covers.get(&id)
    }

    pub fn is_loading(&self, id: UseCaseId) -> bool {
        self.loading.contains(&id)
    }

    fn needs_fetch(&self, id: UseCaseId) -> bool {
        !(self.covers.contains_key(&id) || self.loading.contains(&id) || self.failed.contains(&id))
    }

    /// Start fetching a cover unless it is cached, in flight or already failed.
    pub fn schedule(&mut self, ctx: &egui::Context, id: UseCaseId, location: ImageLocation) {
        if !self.needs_fetch(id) {
            return;
        }
        self.loading.insert(id);
        let provider = self.provider.clone();
        let tx = self.tx.clone();
        let ctx2 = ctx.clone();
        let generation = self.generation;

        crate::app::rt().spawn(async move {
            let msg = match provider.fetch(&location).await {
                Ok(data) => {
                    log::debug!(
                        "cover ok: id={} size={}x{} from {:?}",
                        id,
                        data.width,
                        data.height,
                        location
                    );
                    CoverMsg::Ok { generation, id, data }
                }
                Err(e) => {
                    log::warn!("cover fetch failed: id={} err={} from {:?}", id, e, location);
                    CoverMsg::Err { generation, id }
                }
            };
            let _ = tx.send(msg);
            ctx2.request_repaint();
        });
    }

    /// Turn finished fetches into textures. Call once per frame on the UI thread.
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            if msg.generation() != self.generation {
                log::debug!("dropping cover from a previous catalog");
                continue;
            }
            match msg {
                CoverMsg::Ok { id, data, .. } => {
                    self.loading.remove(&id);
                    let image = egui::ColorImage::from_rgba_unmultiplied(data.size(), &data.rgba);
                    let tex = ctx.load_texture(
                        format!("cover_{}", id),
                        image,
                        egui::TextureOptions::default(),
                    );
                    self.covers.insert(id, tex);
                }
                CoverMsg::Err { id, .. } => {
                    self.loading.remove(&id);
                    self.failed.insert(id);
                }
            }
            ctx.request_repaint();
        }
    }

    /// Forget everything; ids are only meaningful within one loaded catalog.
    /// Fetches still in flight are discarded when they arrive.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.covers.clear();
        self.loading.clear();
        self.failed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::covers::CoverError;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CoverProvider for FailingProvider {
        async fn fetch(&self, _location: &ImageLocation) -> Result<ImageData, CoverError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(CoverError::Status(404))
        }
    }

    #[test]
    fn failed_cover_is_not_requested_again() {
        let provider = Arc::new(FailingProvider {
            calls: AtomicUsize::new(0),
        });
        let mut mgr = CoverManager::new(provider.clone());
        let ctx = egui::Context::default();
        let id = UseCaseId(1);
        let loc = ImageLocation::Local(PathBuf::from("nope.png"));

        mgr.schedule(&ctx, id, loc.clone());
        assert!(mgr.is_loading(id));
        // in flight: second schedule is a no-op
        mgr.schedule(&ctx, id, loc.clone());

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while mgr.is_loading(id) && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(10));
            mgr.poll(&ctx);
        }
        assert!(!mgr.is_loading(id));

        mgr.schedule(&ctx, id, loc);
        assert!(!mgr.is_loading(id));
        assert!(mgr.get(id).is_none());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn results_from_before_clear_are_dropped() {
        let mut mgr = CoverManager::new(Arc::new(FailingProvider {
            calls: AtomicUsize::new(0),
        }));
        let tx = mgr.tx.clone();
        let ctx = egui::Context::default();
        let id = UseCaseId(3);

        mgr.loading.insert(id);
        mgr.clear();
        // the old catalog's fetch finishes after the reload
        tx.send(CoverMsg::Ok {
            generation: 0,
            id,
            data: ImageData::new(1, 1, vec![0, 0, 0, 255]),
        })
        .unwrap();
        mgr.poll(&ctx);
        assert!(mgr.get(id).is_none());

        tx.send(CoverMsg::Ok {
            generation: 1,
            id,
            data: ImageData::new(1, 1, vec![0, 0, 0, 255]),
        })
        .unwrap();
        mgr.poll(&ctx);
        assert!(mgr.get(id).is_some());
    }
}
