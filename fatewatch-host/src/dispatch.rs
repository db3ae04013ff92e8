//! Pop dispatch: carries out a [`PopPlan`] against the host.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use fatewatch_core::FateWatchConfig;
use fatewatch_core::config::LinkAction;
use fatewatch_core::coords;
use fatewatch_core::pop::{self, NormalPop, PopPlan};
use fatewatch_core::tracker;
use fatewatch_core::types::TrackedFate;

use crate::background::Background;
use crate::ports::{ClickHandler, Host};

/// Announces popped FATEs and books them on the shared tracker.
pub struct PopDispatcher {
    host: Host,
    config: Arc<FateWatchConfig>,
    background: Background,
}

impl PopDispatcher {
    /// Dispatch through `host` according to `config`.
    #[must_use]
    pub fn new(host: Host, config: Arc<FateWatchConfig>, background: Background) -> Self {
        Self {
            host,
            config,
            background,
        }
    }

    /// Fire every configured effect for a FATE that just appeared.
    pub fn dispatch(&self, fate: &TrackedFate, now: DateTime<Utc>) {
        match pop::plan_pop(fate, &self.config) {
            Some(PopPlan::Filtered { id, message, sound }) => {
                debug!(fate = %id, name = fate.name(), "filtered FATE popped");
                self.host.chat.print(&message);
                self.host.sound.play(sound);
            }
            Some(PopPlan::Normal(plan)) => {
                info!(fate = %plan.id, name = fate.name(), "FATE popped");
                self.dispatch_normal(fate, plan, now);
            }
            None => debug!(fate = %fate.id(), "pop notifications disabled for FATE"),
        }
    }

    fn dispatch_normal(&self, fate: &TrackedFate, plan: NormalPop, now: DateTime<Utc>) {
        if let Some(toast) = &plan.toast {
            self.host.chat.toast(toast);
        }

        if let Some(sound) = plan.sound {
            self.host.sound.play(sound);
        }

        if let Some(chat) = plan.chat {
            self.host.links.unregister(plan.id);
            if let Some(action) = chat.action {
                self.host.links.register(plan.id, self.click_handler(fate, action));
            }
            self.host.chat.print(&chat.message);
        }

        if plan.auto_pop {
            self.auto_pop(fate, now);
        }
    }

    /// Flag the map, then shout or copy the (possibly jittered) position.
    fn click_handler(&self, fate: &TrackedFate, action: LinkAction) -> ClickHandler {
        let fate = fate.clone();
        let link = self.config.link.clone();
        let chat = Arc::clone(&self.host.chat);
        let clipboard = Arc::clone(&self.host.clipboard);
        let map = Arc::clone(&self.host.map);

        Arc::new(move || {
            let mut rng = rand::thread_rng();
            let position = coords::share_position(&fate, &link, &mut rng);
            map.set_flag(fate.territory(), fate.map(), position);

            let text = coords::announcement(&fate, position, &mut rng);
            match action {
                LinkAction::Copy => clipboard.copy(&text),
                LinkAction::Shout | LinkAction::Nothing => chat.send(&text),
            }
        })
    }

    fn auto_pop(&self, fate: &TrackedFate, now: DateTime<Utc>) {
        let tracker = &self.host.tracker;
        if !tracker.is_connected() || !tracker.can_modify() {
            debug!(fate = %fate.id(), "tracker not writable, skipping auto-pop");
            return;
        }

        let Some(record) = tracker.find_record(fate.id()) else {
            return;
        };
        if !tracker::should_write_pop(&record, &self.config.tracker, now) {
            debug!(fate = %fate.id(), "tracker record untracked or already popped");
            return;
        }

        let slot = fate.tracker_slot();
        info!(fate = %fate.id(), %slot, "writing pop time to tracker");
        self.background
            .spawn_detached("set_pop_time", tracker.set_pop_time(slot, now.timestamp_millis()));
    }
}
