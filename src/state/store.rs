use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::snapshot::SimulationSnapshot;

/// Single-slot store for the most recent snapshot payload.
///
/// Written only by the UDP ingest task, read by every SSE connection and the
/// status API. There is no history: `put` replaces the slot wholesale and
/// `get` hands out the current value, or the canonical default encoding while
/// nothing has arrived yet. Handles are cheap clones sharing the same slot.
#[derive(Debug, Clone)]
pub struct StateStore {
    slot: Arc<RwLock<Option<Arc<str>>>>,
    default_json: Arc<str>,
    subscribers: Arc<AtomicUsize>,
}

/// RAII marker for one attached stream reader. The gauge drops back when
/// the reader's stream is torn down, so a count stuck above baseline after
/// the readers are gone means a leaked per-connection resource.
#[derive(Debug)]
pub struct SubscriberGuard {
    gauge: Arc<AtomicUsize>,
}

impl Drop for SubscriberGuard {
    fn drop(&mut self) {
        let remaining = self.gauge.fetch_sub(1, Ordering::Relaxed) - 1;
        log::debug!("stream subscriber detached ({} active)", remaining);
    }
}

impl StateStore {
    pub fn new() -> Self {
        let default_json = serde_json::to_string(&SimulationSnapshot::default())
            .expect("default snapshot serializes");
        StateStore {
            slot: Arc::new(RwLock::new(None)),
            default_json: default_json.into(),
            subscribers: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Register one stream reader; the count falls when the guard drops.
    pub fn subscriber_guard(&self) -> SubscriberGuard {
        let active = self.subscribers.fetch_add(1, Ordering::Relaxed) + 1;
        log::debug!("stream subscriber attached ({} active)", active);
        SubscriberGuard {
            gauge: self.subscribers.clone(),
        }
    }

    /// Number of currently attached stream readers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.load(Ordering::Relaxed)
    }

    /// Replace the slot unconditionally. Last write wins.
    pub fn put(&self, raw: impl Into<Arc<str>>) {
        *self.slot.write().unwrap() = Some(raw.into());
    }

    /// Current payload, or the default encoding before the first `put`.
    pub fn get(&self) -> Arc<str> {
        self.slot
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| self.default_json.clone())
    }

    /// The canonical default snapshot encoding served before any update.
    pub fn default_json(&self) -> &str {
        &self.default_json
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
