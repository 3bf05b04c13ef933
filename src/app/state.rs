// Channel-backed state pieces owned by GalleryApp.

use std::sync::mpsc;

use crate::catalog::{CatalogSource, LoadError, UseCase};
use crate::views::cards::CardEvent;

pub struct LoadState {
    pub source: CatalogSource,
    pub started: bool,
    pub loading: bool,
    pub tx: mpsc::Sender<Result<Vec<UseCase>, LoadError>>,
    pub rx: mpsc::Receiver<Result<Vec<UseCase>, LoadError>>,
}

impl LoadState {
    pub fn new(source: CatalogSource) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            started: false,
            loading: false,
            tx,
            rx,
        }
    }
}

/// Card -> app notifications. Cards only get the sender.
pub struct CardEvents {
    pub tx: mpsc::Sender<CardEvent>,
    pub rx: mpsc::Receiver<CardEvent>,
}

impl CardEvents {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }
}
