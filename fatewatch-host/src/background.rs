//! Detached background work.
//!
//! Tracker creation and pop-time writes must never stall a tick, so they
//! run as tokio tasks nobody awaits. Failures are logged and dropped; a
//! later pop re-evaluates connection and permission state from scratch.

use tokio::runtime::Handle;
use tracing::{debug, warn};

use fatewatch_core::error::{FateError, Result};

use crate::ports::TrackerFuture;

/// Spawns fire-and-forget tracker requests on a tokio runtime.
#[derive(Debug, Clone)]
pub struct Background {
    handle: Handle,
}

impl Background {
    /// Spawn onto the runtime behind `handle`.
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Spawn onto the runtime the caller is running inside.
    ///
    /// # Errors
    /// Returns `FateError::NoRuntime` outside of a tokio runtime.
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| FateError::NoRuntime)
    }

    /// Run `request` in the background. `task` names it in the logs.
    pub fn spawn_detached(&self, task: &'static str, request: TrackerFuture) {
        drop(self.handle.spawn(async move {
            match request.await {
                Ok(()) => debug!(task, "background tracker request finished"),
                Err(error) => warn!(task, %error, "background tracker request failed"),
            }
        }));
    }
}
