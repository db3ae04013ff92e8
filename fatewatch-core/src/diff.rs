//! Tick-over-tick snapshot diffing.
//!
//! The client reports the set of active FATEs every frame with no events of
//! its own. Comparing consecutive snapshots yields the two things the rest
//! of fatewatch reacts to:
//!
//! - **appeared** — ids present now but absent last tick, restricted to the
//!   FATEs the zone scope tracks;
//! - **progressed** — tracked FATEs whose reported progress differs from the
//!   last value recorded in the scope.
//!
//! The two are computed independently. An unchanged id sequence skips the
//! appearance pass only; progress can move without the set changing.

use crate::scope::FateScope;
use crate::types::{FateId, WorldFate};

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// One tick's worth of active FATEs, deduplicated by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    fates: Vec<WorldFate>,
}

impl Snapshot {
    /// An empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from raw client entries.
    ///
    /// Duplicate ids collapse into one entry at the position of the first
    /// occurrence, carrying the progress of the last one.
    pub fn from_fates(raw: impl IntoIterator<Item = WorldFate>) -> Self {
        let mut fates: Vec<WorldFate> = Vec::new();
        for fate in raw {
            match fates.iter_mut().find(|f| f.id == fate.id) {
                Some(existing) => existing.progress = fate.progress,
                None => fates.push(fate),
            }
        }
        Self { fates }
    }

    /// Entries in client order.
    #[must_use]
    pub fn fates(&self) -> &[WorldFate] {
        &self.fates
    }

    /// Whether `id` is active in this snapshot.
    #[must_use]
    pub fn contains(&self, id: FateId) -> bool {
        self.fates.iter().any(|f| f.id == id)
    }

    /// Number of distinct active FATEs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fates.len()
    }

    /// Whether no FATE is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fates.is_empty()
    }

    /// Same ids in the same order. Progress is not compared.
    #[must_use]
    pub fn same_sequence(&self, other: &Self) -> bool {
        self.fates.len() == other.fates.len()
            && self.fates.iter().zip(&other.fates).all(|(a, b)| a.id == b.id)
    }
}

// ---------------------------------------------------------------------------
// Diff results
// ---------------------------------------------------------------------------

/// A tracked FATE whose progress differs from the recorded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressDelta {
    /// FATE identifier.
    pub id: FateId,
    /// Value recorded in the scope before this tick.
    pub previous: u8,
    /// Value reported this tick.
    pub progress: u8,
}

/// Everything derived from one pair of consecutive snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickDiff {
    /// Tracked FATEs that were absent last tick, in snapshot order.
    pub appeared: Vec<FateId>,
    /// Tracked FATEs with changed progress, in snapshot order.
    pub progressed: Vec<ProgressDelta>,
}

impl TickDiff {
    /// Whether nothing happened this tick.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.appeared.is_empty() && self.progressed.is_empty()
    }
}

/// Tracked FATEs present in `current` but not in `previous`.
///
/// Returns nothing when both snapshots hold the same id sequence.
#[must_use]
pub fn appeared(previous: &Snapshot, current: &Snapshot, scope: &FateScope) -> Vec<FateId> {
    if current.same_sequence(previous) {
        return Vec::new();
    }

    current
        .fates()
        .iter()
        .map(|f| f.id)
        .filter(|&id| !previous.contains(id) && scope.contains(id))
        .collect()
}

/// Tracked FATEs whose progress differs from the scope's recorded value.
///
/// FATEs for which `ignored` returns true never produce a delta.
pub fn progress_deltas(
    current: &Snapshot,
    scope: &FateScope,
    ignored: impl Fn(FateId) -> bool,
) -> Vec<ProgressDelta> {
    current
        .fates()
        .iter()
        .filter(|f| !ignored(f.id))
        .filter_map(|f| {
            let tracked = scope.get(f.id)?;
            (tracked.last_progress() != f.progress).then(|| ProgressDelta {
                id: f.id,
                previous: tracked.last_progress(),
                progress: f.progress,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Differ
// ---------------------------------------------------------------------------

/// Holds the previous tick's snapshot and diffs new ones against it.
#[derive(Debug, Clone, Default)]
pub struct SnapshotDiffer {
    previous: Snapshot,
}

impl SnapshotDiffer {
    /// A differ whose previous snapshot is empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot from the last committed tick.
    #[must_use]
    pub fn previous(&self) -> &Snapshot {
        &self.previous
    }

    /// Diff `current` against the previous snapshot.
    ///
    /// Does not modify state; call [`commit`](Self::commit) once the tick's
    /// events have been dispatched.
    pub fn diff(
        &self,
        current: &Snapshot,
        scope: &FateScope,
        ignored: impl Fn(FateId) -> bool,
    ) -> TickDiff {
        TickDiff {
            appeared: appeared(&self.previous, current, scope),
            progressed: progress_deltas(current, scope, ignored),
        }
    }

    /// Replace the previous snapshot wholesale.
    pub fn commit(&mut self, current: Snapshot) {
        self.previous = current;
    }

    /// Forget the previous snapshot, so every active FATE counts as new.
    pub fn reset(&mut self) {
        self.previous = Snapshot::new();
    }
}
