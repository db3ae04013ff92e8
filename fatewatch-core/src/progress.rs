//! Progress milestone reports.
//!
//! A report fires when a FATE's progress crosses a multiple of
//! [`MILESTONE_STEP`]. The scope always records the newest value, reported
//! or not, so each milestone fires once per pass through it.

use tracing::debug;

use crate::diff::ProgressDelta;
use crate::message::{PROGRESS_COLOR, RichText};
use crate::scope::FateScope;
use crate::types::{FateId, TrackedFate};

/// Progress boundary size in percent.
pub const MILESTONE_STEP: u8 = 25;

/// A milestone crossed by one FATE.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    /// FATE identifier.
    pub id: FateId,
    /// Highest milestone in `(previous, progress]`.
    pub milestone: u8,
    /// Progress reported this tick.
    pub progress: u8,
    /// Chat message announcing the milestone.
    pub message: RichText,
}

/// Highest multiple of [`MILESTONE_STEP`] in `(previous, progress]`.
///
/// Zero is never a milestone, and a drop in progress (a respawned FATE)
/// crosses nothing.
#[must_use]
pub fn crossed_milestone(previous: u8, progress: u8) -> Option<u8> {
    if progress <= previous {
        return None;
    }
    let milestone = progress - progress % MILESTONE_STEP;
    (milestone > previous && milestone > 0).then_some(milestone)
}

/// `"{name}: <map link> is at {milestone}%"`.
#[must_use]
pub fn progress_message(fate: &TrackedFate, milestone: u8) -> RichText {
    RichText::fate_header(fate)
        .text(" is at ")
        .colored(PROGRESS_COLOR, format!("{milestone}%"))
}

/// Record every delta in `scope` and return the reports that should be printed.
///
/// With `enabled` false the scope is still updated, but nothing is reported.
pub fn apply_deltas(scope: &mut FateScope, deltas: &[ProgressDelta], enabled: bool) -> Vec<ProgressReport> {
    let mut reports = Vec::new();

    for delta in deltas {
        let Some(previous) = scope.record_progress(delta.id, delta.progress) else {
            continue;
        };
        if !enabled {
            continue;
        }
        let Some(milestone) = crossed_milestone(previous, delta.progress) else {
            continue;
        };
        let Some(fate) = scope.get(delta.id) else {
            continue;
        };

        debug!(fate = %delta.id, previous, progress = delta.progress, milestone, "FATE crossed milestone");
        reports.push(ProgressReport {
            id: delta.id,
            milestone,
            progress: delta.progress,
            message: progress_message(fate, milestone),
        });
    }

    reports
}
