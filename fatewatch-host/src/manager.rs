//! FATE manager — lifecycle and per-tick pipeline.
//!
//! ```text
//! zone change ─► ZoneGate ─► (re)subscribe / unsubscribe ticks
//!
//! tick ─► WorldState::active_fates ─► SnapshotDiffer
//!            ├─ progressed ─► progress::apply_deltas ─► chat
//!            └─ appeared   ─► PopDispatcher ─► chat / toast / sound / links / tracker
//!         ─► commit snapshot
//! ```
//!
//! The host calls [`FateManager::on_zone_changed`] and
//! [`FateManager::on_tick`] from its own scheduler, never concurrently.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, trace};

use fatewatch_core::FateWatchConfig;
use fatewatch_core::diff::{Snapshot, SnapshotDiffer, TickDiff};
use fatewatch_core::progress;
use fatewatch_core::scope::FateScope;
use fatewatch_core::types::TerritoryId;

use crate::background::Background;
use crate::dispatch::PopDispatcher;
use crate::gate::{GateDecision, ZoneGate};
use crate::ports::Host;

/// Owns the zone and tick subscriptions and everything derived from them.
pub struct FateManager {
    host: Host,
    config: Arc<FateWatchConfig>,
    background: Background,
    gate: ZoneGate,
    differ: SnapshotDiffer,
    dispatcher: PopDispatcher,
    zone_subscribed: bool,
    tick_subscribed: bool,
}

impl FateManager {
    /// Create a stopped manager.
    #[must_use]
    pub fn new(host: Host, config: FateWatchConfig, background: Background) -> Self {
        let config = Arc::new(config);
        let dispatcher = PopDispatcher::new(host.clone(), Arc::clone(&config), background.clone());
        Self {
            host,
            config,
            background,
            gate: ZoneGate::new(),
            differ: SnapshotDiffer::new(),
            dispatcher,
            zone_subscribed: false,
            tick_subscribed: false,
        }
    }

    /// Subscribe to zone changes and start polling if the player is already
    /// in a tracked zone. Does nothing when already started.
    pub fn start(&mut self) {
        if self.zone_subscribed {
            return;
        }
        self.host.events.subscribe_zone();
        self.zone_subscribed = true;
        info!("FATE manager started");

        let territory = self.host.world.current_territory();
        self.apply_zone(territory, false);
    }

    /// Unsubscribe from everything and drop the zone scope. Idempotent.
    pub fn stop(&mut self) {
        if self.zone_subscribed {
            self.host.events.unsubscribe_zone();
            self.zone_subscribed = false;
            info!("FATE manager stopped");
        }
        self.disable_ticks();
        self.gate.close();
        self.differ.reset();
    }

    /// Zone change callback.
    pub fn on_zone_changed(&mut self, territory: TerritoryId) {
        if !self.zone_subscribed {
            trace!(%territory, "zone change ignored while stopped");
            return;
        }
        self.apply_zone(territory, true);
    }

    /// Frame callback. Returns what was derived this tick, or `None` when
    /// the tick was ignored (not polling, or no tracker for the zone).
    pub fn on_tick(&mut self) -> Option<TickDiff> {
        if !self.tick_subscribed {
            trace!("tick ignored while not polling");
            return None;
        }
        let scope = self.gate.scope_mut()?;

        let current = Snapshot::from_fates(self.host.world.active_fates());
        let zones = &self.host.zones;
        let diff = self.differ.diff(&current, scope, |id| zones.is_filtered_fate(id));

        for report in progress::apply_deltas(scope, &diff.progressed, self.config.progress.enabled) {
            self.host.chat.print(&report.message);
        }

        let now = Utc::now();
        for id in &diff.appeared {
            if let Some(fate) = scope.get(*id) {
                self.dispatcher.dispatch(fate, now);
            }
        }

        self.differ.commit(current);
        Some(diff)
    }

    /// Whether ticks are currently subscribed.
    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.tick_subscribed
    }

    /// Whether zone changes are currently subscribed.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.zone_subscribed
    }

    /// The active zone scope.
    #[must_use]
    pub fn scope(&self) -> Option<&FateScope> {
        self.gate.scope()
    }

    /// Snapshot the next tick will be diffed against.
    #[must_use]
    pub fn previous_snapshot(&self) -> &Snapshot {
        self.differ.previous()
    }

    fn apply_zone(&mut self, territory: TerritoryId, allow_auto_create: bool) {
        self.differ.reset();

        match self.gate.evaluate(territory, self.host.zones.as_ref()) {
            GateDecision::Enable => {
                if allow_auto_create {
                    self.maybe_create_tracker(territory);
                }
                self.enable_ticks();
            }
            GateDecision::Disable => self.disable_ticks(),
        }
    }

    fn maybe_create_tracker(&self, territory: TerritoryId) {
        if !self.config.tracker.auto_create || self.host.tracker.is_connected() {
            return;
        }
        info!(%territory, "no tracker connected, creating one");
        self.background
            .spawn_detached("create_tracker", self.host.tracker.create_tracker(territory));
    }

    fn enable_ticks(&mut self) {
        if !self.tick_subscribed {
            self.host.events.subscribe_tick();
            self.tick_subscribed = true;
            debug!("tick polling enabled");
        }
    }

    fn disable_ticks(&mut self) {
        if self.tick_subscribed {
            self.host.events.unsubscribe_tick();
            self.tick_subscribed = false;
            debug!("tick polling disabled");
        }
    }
}

impl Drop for FateManager {
    fn drop(&mut self) {
        self.stop();
    }
}
