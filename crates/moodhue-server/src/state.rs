//! Shared server state.

use std::time::Instant;

use moodhue_core::{EmotionClassifier, PaletteStore};
use tokio::sync::Mutex;

/// State shared by all request handlers.
///
/// The classifier sits behind a mutex: inference needs `&mut` and the
/// session is a single shared capability, so invocations from this process
/// serialize. The palette store carries its own lock and is read and
/// written independently.
pub struct ServerState<C> {
    pub classifier: Mutex<C>,
    pub palettes: PaletteStore,
    pub started_at: Instant,
}

impl<C: EmotionClassifier> ServerState<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier: Mutex::new(classifier),
            palettes: PaletteStore::new(),
            started_at: Instant::now(),
        }
    }
}
