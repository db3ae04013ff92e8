//! Core type definitions for fatewatch.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// Game-assigned FATE identifier. Stable while the FATE is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FateId(pub u16);

impl fmt::Display for FateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Territory (zone) identifier reported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerritoryId(pub u16);

impl fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Map sheet identifier used for map links and flag markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapId(pub u32);

/// Handle addressing a record inside the shared tracker.
///
/// Distinct from [`FateId`]: the tracker numbers its own records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackerSlot(pub u16);

impl fmt::Display for TrackerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the game's numbered chat sound effects (`<se.1>` .. `<se.16>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundEffect(pub u8);

impl SoundEffect {
    /// Lowest valid sound effect number.
    pub const MIN: u8 = 1;
    /// Highest valid sound effect number.
    pub const MAX: u8 = 16;

    /// Whether this names a sound the client can play.
    #[must_use]
    pub fn is_valid(self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<se.{}>", self.0)
    }
}

// ---------------------------------------------------------------------------
// Spatial
// ---------------------------------------------------------------------------

/// A position in map coordinates (the X/Y shown on the in-game map).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MapPosition {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl MapPosition {
    /// Create a position from map coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for MapPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {:.1}, Y: {:.1}", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// FATEs
// ---------------------------------------------------------------------------

/// A FATE as reported by the world snapshot for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldFate {
    /// FATE identifier.
    pub id: FateId,
    /// Completion percentage, 0–100.
    pub progress: u8,
}

impl WorldFate {
    /// Create a world FATE entry.
    #[must_use]
    pub const fn new(id: FateId, progress: u8) -> Self {
        Self { id, progress }
    }
}

/// A FATE the current zone's tracker knows about.
///
/// Everything except `last_progress` is static zone data owned by the
/// tracker. `last_progress` is the one field fatewatch writes, and only
/// through [`FateScope::record_progress`](crate::scope::FateScope::record_progress).
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedFate {
    id: FateId,
    name: String,
    territory: TerritoryId,
    map: MapId,
    position: MapPosition,
    filtered: bool,
    tracker_slot: TrackerSlot,
    last_progress: u8,
}

impl TrackedFate {
    /// Describe a tracked FATE. Starts unfiltered with no observed progress.
    #[must_use]
    pub fn new(
        id: FateId,
        name: impl Into<String>,
        territory: TerritoryId,
        map: MapId,
        position: MapPosition,
        tracker_slot: TrackerSlot,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            territory,
            map,
            position,
            filtered: false,
            tracker_slot,
            last_progress: 0,
        }
    }

    /// Mark this FATE as belonging to the filtered (low-value) category.
    #[must_use]
    pub fn with_filtered(mut self, filtered: bool) -> Self {
        self.filtered = filtered;
        self
    }

    /// FATE identifier.
    #[must_use]
    pub fn id(&self) -> FateId {
        self.id
    }

    /// Display name (the notorious monster's name for NM FATEs).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Territory the FATE spawns in.
    #[must_use]
    pub fn territory(&self) -> TerritoryId {
        self.territory
    }

    /// Map sheet for links and flags.
    #[must_use]
    pub fn map(&self) -> MapId {
        self.map
    }

    /// Known spawn position.
    #[must_use]
    pub fn position(&self) -> MapPosition {
        self.position
    }

    /// Whether this is a filtered-category FATE.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    /// The shared tracker's handle for this FATE.
    #[must_use]
    pub fn tracker_slot(&self) -> TrackerSlot {
        self.tracker_slot
    }

    /// Progress value seen on the most recent change.
    #[must_use]
    pub fn last_progress(&self) -> u8 {
        self.last_progress
    }

    pub(crate) fn set_last_progress(&mut self, progress: u8) {
        self.last_progress = progress;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sound_effect_range() {
        assert!(SoundEffect(1).is_valid());
        assert!(SoundEffect(16).is_valid());
        assert!(!SoundEffect(0).is_valid());
        assert!(!SoundEffect(17).is_valid());
        assert_eq!(SoundEffect(6).to_string(), "<se.6>");
    }

    #[test]
    fn position_display_uses_one_decimal() {
        assert_eq!(MapPosition::new(12.34, 7.0).to_string(), "X: 12.3, Y: 7.0");
    }
}
