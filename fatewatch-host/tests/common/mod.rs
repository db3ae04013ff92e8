//! In-memory game client used by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use fatewatch_core::diff::TickDiff;
use fatewatch_core::error::{Result, TrackerError};
use fatewatch_core::message::RichText;
use fatewatch_core::scope::FateScope;
use fatewatch_core::tracker::TrackerRecord;
use fatewatch_core::types::{
    FateId, MapId, MapPosition, SoundEffect, TerritoryId, TrackedFate, TrackerSlot, WorldFate,
};
use fatewatch_host::ports::{
    ChatOutput, Clipboard, HostEvents, MapMarker, SharedTracker, SoundPlayer, TrackerFuture,
    WorldState, ZoneDirectory,
};
use fatewatch_host::{ClickActionRegistry, FateManager, Host};

pub const ANEMOS: TerritoryId = TerritoryId(732);
pub const PAGOS: TerritoryId = TerritoryId(763);
pub const CITY: TerritoryId = TerritoryId(129);

pub const CORRIDO: FateId = FateId(1332);
pub const LORD: FateId = FateId(1348);
pub const BUNNY: FateId = FateId(1367);

pub fn anemos_fates() -> Vec<TrackedFate> {
    let fate = |id: FateId, name: &str, slot: u16, x: f32, y: f32| {
        TrackedFate::new(id, name, ANEMOS, MapId(414), MapPosition::new(x, y), TrackerSlot(slot))
    };
    vec![
        fate(CORRIDO, "Sabotender Corrido", 1, 14.0, 22.0),
        fate(LORD, "The Lord of Anemos", 2, 30.0, 27.0),
        fate(BUNNY, "Bunny Fate", 40, 18.0, 19.0).with_filtered(true),
    ]
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Records everything fatewatch asks of the client.
#[derive(Default)]
pub struct FakeClient {
    pub territory: Mutex<Option<TerritoryId>>,
    pub fates: Mutex<Vec<WorldFate>>,
    pub tick_subscribed: Mutex<bool>,
    pub zone_subscribed: Mutex<bool>,
    pub tick_subscribe_calls: AtomicUsize,
    pub zone_subscribe_calls: AtomicUsize,
    pub snapshot_reads: AtomicUsize,
    pub printed: Mutex<Vec<RichText>>,
    pub toasts: Mutex<Vec<RichText>>,
    pub sent: Mutex<Vec<String>>,
    pub sounds: Mutex<Vec<SoundEffect>>,
    pub clipboard: Mutex<Vec<String>>,
    pub flags: Mutex<Vec<(TerritoryId, MapId, MapPosition)>>,
    pub broken_zone: Mutex<Option<TerritoryId>>,
}

impl FakeClient {
    pub fn set_fates(&self, fates: &[(FateId, u8)]) {
        *self.fates.lock() = fates.iter().map(|&(id, p)| WorldFate::new(id, p)).collect();
    }

    pub fn printed_text(&self) -> Vec<String> {
        self.printed.lock().iter().map(ToString::to_string).collect()
    }

    pub fn clear_output(&self) {
        self.printed.lock().clear();
        self.toasts.lock().clear();
        self.sent.lock().clear();
        self.sounds.lock().clear();
    }
}

impl WorldState for FakeClient {
    fn current_territory(&self) -> TerritoryId {
        self.territory.lock().unwrap_or(CITY)
    }

    fn active_fates(&self) -> Vec<WorldFate> {
        self.snapshot_reads.fetch_add(1, Ordering::SeqCst);
        self.fates.lock().clone()
    }
}

impl ZoneDirectory for FakeClient {
    fn is_tracked_zone(&self, territory: TerritoryId) -> bool {
        territory == ANEMOS || territory == PAGOS
    }

    fn resolve_scope(&self, territory: TerritoryId) -> Result<Option<FateScope>> {
        if *self.broken_zone.lock() == Some(territory) {
            return Err(fatewatch_core::FateError::Host("zone data unavailable".to_string()));
        }
        Ok((territory == ANEMOS).then(|| FateScope::new(ANEMOS, anemos_fates())))
    }

    fn is_filtered_fate(&self, id: FateId) -> bool {
        id == BUNNY
    }
}

impl HostEvents for FakeClient {
    fn subscribe_tick(&self) {
        self.tick_subscribe_calls.fetch_add(1, Ordering::SeqCst);
        *self.tick_subscribed.lock() = true;
    }

    fn unsubscribe_tick(&self) {
        *self.tick_subscribed.lock() = false;
    }

    fn subscribe_zone(&self) {
        self.zone_subscribe_calls.fetch_add(1, Ordering::SeqCst);
        *self.zone_subscribed.lock() = true;
    }

    fn unsubscribe_zone(&self) {
        *self.zone_subscribed.lock() = false;
    }
}

impl ChatOutput for FakeClient {
    fn print(&self, message: &RichText) {
        self.printed.lock().push(message.clone());
    }

    fn toast(&self, message: &RichText) {
        self.toasts.lock().push(message.clone());
    }

    fn send(&self, text: &str) {
        self.sent.lock().push(text.to_string());
    }
}

impl SoundPlayer for FakeClient {
    fn play(&self, effect: SoundEffect) {
        self.sounds.lock().push(effect);
    }
}

impl Clipboard for FakeClient {
    fn copy(&self, text: &str) {
        self.clipboard.lock().push(text.to_string());
    }
}

impl MapMarker for FakeClient {
    fn set_flag(&self, territory: TerritoryId, map: MapId, position: MapPosition) {
        self.flags.lock().push((territory, map, position));
    }
}

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

/// Shared tracker double. Requests are recorded when issued.
pub struct FakeTracker {
    pub connected: Mutex<bool>,
    pub writable: Mutex<bool>,
    pub records: Mutex<HashMap<FateId, TrackerRecord>>,
    pub pop_writes: Mutex<Vec<(TrackerSlot, i64)>>,
    pub created: Mutex<Vec<TerritoryId>>,
}

impl FakeTracker {
    /// Connected, writable, with an unpopped record for every Anemos FATE.
    pub fn connected() -> Self {
        let records = anemos_fates()
            .iter()
            .map(|f| (f.id(), TrackerRecord::new(f.id())))
            .collect();
        Self {
            connected: Mutex::new(true),
            writable: Mutex::new(true),
            records: Mutex::new(records),
            pop_writes: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn disconnected() -> Self {
        let tracker = Self::connected();
        *tracker.connected.lock() = false;
        tracker
    }

    pub fn written_slots(&self) -> Vec<TrackerSlot> {
        self.pop_writes.lock().iter().map(|&(slot, _)| slot).collect()
    }
}

impl SharedTracker for FakeTracker {
    fn is_connected(&self) -> bool {
        *self.connected.lock()
    }

    fn can_modify(&self) -> bool {
        *self.writable.lock()
    }

    fn find_record(&self, id: FateId) -> Option<TrackerRecord> {
        self.records.lock().get(&id).cloned()
    }

    fn set_pop_time(&self, slot: TrackerSlot, unix_millis: i64) -> TrackerFuture {
        self.pop_writes.lock().push((slot, unix_millis));
        Box::pin(async { Ok::<(), TrackerError>(()) })
    }

    fn create_tracker(&self, territory: TerritoryId) -> TrackerFuture {
        self.created.lock().push(territory);
        Box::pin(async { Ok::<(), TrackerError>(()) })
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

pub struct Harness {
    pub client: Arc<FakeClient>,
    pub tracker: Arc<FakeTracker>,
    pub links: Arc<ClickActionRegistry>,
    pub manager: FateManager,
}

impl Harness {
    /// Build a stopped manager. Must be called inside a tokio runtime.
    pub fn new(config: fatewatch_core::FateWatchConfig, tracker: FakeTracker) -> Self {
        let client = Arc::new(FakeClient::default());
        let tracker = Arc::new(tracker);
        let links = Arc::new(ClickActionRegistry::new());
        let host = Host {
            world: client.clone(),
            zones: client.clone(),
            events: client.clone(),
            chat: client.clone(),
            sound: client.clone(),
            links: links.clone(),
            clipboard: client.clone(),
            map: client.clone(),
            tracker: tracker.clone(),
        };
        let background = fatewatch_host::Background::current().expect("tokio runtime");
        let manager = FateManager::new(host, config, background);
        Self {
            client,
            tracker,
            links,
            manager,
        }
    }

    /// Started and standing in Anemos.
    pub fn in_anemos(config: fatewatch_core::FateWatchConfig, tracker: FakeTracker) -> Self {
        let mut harness = Self::new(config, tracker);
        harness.manager.start();
        harness.change_zone(ANEMOS);
        harness
    }

    /// Deliver a zone change the way the host would.
    pub fn change_zone(&mut self, territory: TerritoryId) {
        *self.client.territory.lock() = Some(territory);
        if *self.client.zone_subscribed.lock() {
            self.manager.on_zone_changed(territory);
        }
    }

    /// Deliver one frame the way the host would: only while subscribed.
    pub fn frame(&mut self, fates: &[(FateId, u8)]) -> Option<TickDiff> {
        self.client.set_fates(fates);
        if *self.client.tick_subscribed.lock() {
            self.manager.on_tick()
        } else {
            None
        }
    }
}
