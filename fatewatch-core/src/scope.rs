//! The tracked FATE collection for the zone the player is currently in.

use crate::types::{FateId, TerritoryId, TrackedFate};

/// Tracked FATEs of a single zone.
///
/// Only one scope is active at a time. Leaving the zone drops it; nothing
/// is carried over to the next one.
#[derive(Debug, Clone)]
pub struct FateScope {
    territory: TerritoryId,
    fates: Vec<TrackedFate>,
}

impl FateScope {
    /// Create a scope for `territory` containing `fates`.
    #[must_use]
    pub fn new(territory: TerritoryId, fates: Vec<TrackedFate>) -> Self {
        Self { territory, fates }
    }

    /// Territory this scope belongs to.
    #[must_use]
    pub fn territory(&self) -> TerritoryId {
        self.territory
    }

    /// Look up a tracked FATE by id.
    #[must_use]
    pub fn get(&self, id: FateId) -> Option<&TrackedFate> {
        self.fates.iter().find(|f| f.id() == id)
    }

    /// Whether `id` is tracked in this scope.
    #[must_use]
    pub fn contains(&self, id: FateId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate over all tracked FATEs.
    pub fn iter(&self) -> impl Iterator<Item = &TrackedFate> {
        self.fates.iter()
    }

    /// Number of tracked FATEs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fates.len()
    }

    /// Whether the scope tracks nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fates.is_empty()
    }

    /// Store a newly observed progress value for `id`.
    ///
    /// This is the only write path into a [`TrackedFate`]. Returns the
    /// previous value when it changed, `None` when the FATE is untracked or
    /// the value is unchanged.
    pub fn record_progress(&mut self, id: FateId, progress: u8) -> Option<u8> {
        let fate = self.fates.iter_mut().find(|f| f.id() == id)?;
        let previous = fate.last_progress();
        if previous == progress {
            return None;
        }
        fate.set_last_progress(progress);
        Some(previous)
    }
}
