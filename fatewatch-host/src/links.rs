//! In-process click-handler registry.
//!
//! Handlers are keyed by FATE id. Registering under a key that is already
//! bound replaces the old handler, so repeated pops of the same FATE never
//! accumulate stale handlers.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::debug;

use fatewatch_core::types::FateId;

use crate::ports::{ClickHandler, LinkRegistry};

/// A [`LinkRegistry`] that keeps handlers in memory and can invoke them.
#[derive(Default)]
pub struct ClickActionRegistry {
    handlers: Mutex<HashMap<FateId, ClickHandler>>,
}

impl ClickActionRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the handler bound to `key`. Returns `false` if none is bound.
    pub fn invoke(&self, key: FateId) -> bool {
        // Clone out so the handler may re-register without deadlocking.
        let handler = self.handlers.lock().get(&key).cloned();
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => {
                debug!(fate = %key, "click on unbound link");
                false
            }
        }
    }

    /// Whether a handler is bound to `key`.
    #[must_use]
    pub fn contains(&self, key: FateId) -> bool {
        self.handlers.lock().contains_key(&key)
    }

    /// Number of bound handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.lock().len()
    }

    /// Whether no handler is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.lock().is_empty()
    }
}

impl LinkRegistry for ClickActionRegistry {
    fn register(&self, key: FateId, handler: ClickHandler) {
        if self.handlers.lock().insert(key, handler).is_some() {
            debug!(fate = %key, "replaced click handler");
        }
    }

    fn unregister(&self, key: FateId) {
        self.handlers.lock().remove(&key);
    }
}
