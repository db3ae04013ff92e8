//! Collaborator interfaces the host game client provides.
//!
//! fatewatch never talks to the client directly. Everything it reads
//! (world state, zone data, tracker records) and everything it produces
//! (chat, toasts, sounds, links, map flags, tracker writes) goes through
//! these traits, which a plugin shim implements on top of the real client
//! API.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use fatewatch_core::error::{Result, TrackerError};
use fatewatch_core::message::RichText;
use fatewatch_core::scope::FateScope;
use fatewatch_core::tracker::TrackerRecord;
use fatewatch_core::types::{FateId, MapId, MapPosition, SoundEffect, TerritoryId, TrackerSlot, WorldFate};

/// Callback run when a clickable chat link is activated.
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// A detached tracker request. Its output is logged, never returned to the
/// tick loop.
pub type TrackerFuture = Pin<Box<dyn Future<Output = std::result::Result<(), TrackerError>> + Send>>;

// ---------------------------------------------------------------------------
// Inbound
// ---------------------------------------------------------------------------

/// Live world state, queried once per tick.
pub trait WorldState: Send + Sync {
    /// Territory the player is in right now.
    fn current_territory(&self) -> TerritoryId;

    /// FATEs currently active in the instance, in client order.
    fn active_fates(&self) -> Vec<WorldFate>;
}

/// Static zone data.
pub trait ZoneDirectory: Send + Sync {
    /// Whether fatewatch should poll while in `territory`.
    fn is_tracked_zone(&self, territory: TerritoryId) -> bool;

    /// The tracked FATEs for `territory`, `Ok(None)` when the zone has no
    /// tracker.
    ///
    /// # Errors
    ///
    /// Returns an error if zone data could not be loaded; fatewatch treats
    /// that the same as `Ok(None)`.
    fn resolve_scope(&self, territory: TerritoryId) -> Result<Option<FateScope>>;

    /// Whether `id` belongs to the filtered category, whose progress is
    /// never reported.
    fn is_filtered_fate(&self, id: FateId) -> bool;
}

/// Host event subscriptions. The host calls
/// [`FateManager::on_tick`](crate::manager::FateManager::on_tick) every
/// frame while ticks are subscribed, and
/// [`FateManager::on_zone_changed`](crate::manager::FateManager::on_zone_changed)
/// on every zone change while zone changes are subscribed.
pub trait HostEvents: Send + Sync {
    /// Start delivering frame ticks.
    fn subscribe_tick(&self);
    /// Stop delivering frame ticks.
    fn unsubscribe_tick(&self);
    /// Start delivering zone changes.
    fn subscribe_zone(&self);
    /// Stop delivering zone changes.
    fn unsubscribe_zone(&self);
}

// ---------------------------------------------------------------------------
// Outbound
// ---------------------------------------------------------------------------

/// Chat and toast output.
pub trait ChatOutput: Send + Sync {
    /// Print a message to the local chat log.
    fn print(&self, message: &RichText);
    /// Show a quest-style toast.
    fn toast(&self, message: &RichText);
    /// Send plain text to the game's chat channel.
    fn send(&self, text: &str);
}

/// Sound effect playback.
pub trait SoundPlayer: Send + Sync {
    /// Play `effect` once.
    fn play(&self, effect: SoundEffect);
}

/// Clickable chat link registration.
pub trait LinkRegistry: Send + Sync {
    /// Bind `handler` to `key`, replacing any handler already bound.
    fn register(&self, key: FateId, handler: ClickHandler);
    /// Drop the handler bound to `key`, if any.
    fn unregister(&self, key: FateId);
}

/// System clipboard.
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`.
    fn copy(&self, text: &str);
}

/// Map flag placement.
pub trait MapMarker: Send + Sync {
    /// Place the player's map flag at `position`.
    fn set_flag(&self, territory: TerritoryId, map: MapId, position: MapPosition);
}

/// The shared, possibly remote, FATE tracker.
pub trait SharedTracker: Send + Sync {
    /// Whether a tracker connection is established.
    fn is_connected(&self) -> bool;

    /// Whether the connected user may write to the tracker.
    fn can_modify(&self) -> bool;

    /// The tracker's record for `id`, if it has one.
    fn find_record(&self, id: FateId) -> Option<TrackerRecord>;

    /// Record `unix_millis` as the pop time of the record at `slot`.
    fn set_pop_time(&self, slot: TrackerSlot, unix_millis: i64) -> TrackerFuture;

    /// Create and connect a new tracker for `territory`.
    fn create_tracker(&self, territory: TerritoryId) -> TrackerFuture;
}

// ---------------------------------------------------------------------------
// Bundle
// ---------------------------------------------------------------------------

/// Every collaborator fatewatch needs, as shared handles.
#[derive(Clone)]
pub struct Host {
    /// Live world state.
    pub world: Arc<dyn WorldState>,
    /// Static zone data.
    pub zones: Arc<dyn ZoneDirectory>,
    /// Event subscriptions.
    pub events: Arc<dyn HostEvents>,
    /// Chat and toast output.
    pub chat: Arc<dyn ChatOutput>,
    /// Sound playback.
    pub sound: Arc<dyn SoundPlayer>,
    /// Clickable link registration.
    pub links: Arc<dyn LinkRegistry>,
    /// Clipboard.
    pub clipboard: Arc<dyn Clipboard>,
    /// Map flags.
    pub map: Arc<dyn MapMarker>,
    /// Shared tracker.
    pub tracker: Arc<dyn SharedTracker>,
}
