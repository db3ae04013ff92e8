//! Shared tracker records and the auto-pop rule.
//!
//! The tracker is an external, shared list of notorious monster FATEs with
//! the last time each one popped. fatewatch never edits records in place;
//! it only decides whether a pop-time write should be sent. Writes are
//! addressed by [`TrackedFate::tracker_slot`](crate::types::TrackedFate::tracker_slot).

use chrono::{DateTime, TimeDelta, Utc};

use crate::config::TrackerConfig;
use crate::types::FateId;

/// How close to its respawn estimate a popped record may be overwritten.
#[must_use]
pub fn respawn_window() -> TimeDelta {
    TimeDelta::minutes(5)
}

/// The tracker's view of one FATE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerRecord {
    /// FATE the record refers to.
    pub fate_id: FateId,
    /// Whether the tracker owner chose to track this FATE.
    pub include_in_tracker: bool,
    /// Last recorded pop time.
    pub popped_at: Option<DateTime<Utc>>,
    /// Estimated respawn time derived from `popped_at`.
    pub respawn_at: Option<DateTime<Utc>>,
}

impl TrackerRecord {
    /// A tracked record that has never popped.
    #[must_use]
    pub fn new(fate_id: FateId) -> Self {
        Self {
            fate_id,
            include_in_tracker: true,
            popped_at: None,
            respawn_at: None,
        }
    }

    /// Whether the record holds a pop that is still on cooldown at `now`.
    #[must_use]
    pub fn is_popped(&self, now: DateTime<Utc>) -> bool {
        self.popped_at.is_some() && self.respawn_at.is_none_or(|respawn| now < respawn)
    }

    /// Whether the respawn estimate lies between `now` and `now + window`.
    #[must_use]
    pub fn respawn_within(&self, window: TimeDelta, now: DateTime<Utc>) -> bool {
        self.respawn_at
            .is_some_and(|respawn| respawn >= now && respawn - now <= window)
    }
}

/// Whether a pop-time write should be issued for `record`.
///
/// Records excluded from tracking are never written. Otherwise an unpopped
/// record is always written, and a popped one only when
/// `auto_pop_within_respawn` is set and its respawn is inside
/// [`respawn_window`].
#[must_use]
pub fn should_write_pop(record: &TrackerRecord, config: &TrackerConfig, now: DateTime<Utc>) -> bool {
    if !record.include_in_tracker {
        return false;
    }
    !record.is_popped(now)
        || (config.auto_pop_within_respawn && record.respawn_within(respawn_window(), now))
}
