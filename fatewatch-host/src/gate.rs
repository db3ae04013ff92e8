//! Zone gate: decides whether ticks are polled, and which scope is active.

use tracing::{debug, info, warn};

use fatewatch_core::scope::FateScope;
use fatewatch_core::types::TerritoryId;

use crate::ports::ZoneDirectory;

/// Outcome of evaluating a zone change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Qualifying zone: poll ticks.
    Enable,
    /// Anywhere else: stop polling.
    Disable,
}

/// Holds the active zone scope.
///
/// The scope is always resolved before [`GateDecision::Enable`] is
/// returned, so no tick can run against the previous zone's scope.
#[derive(Debug, Default)]
pub struct ZoneGate {
    territory: Option<TerritoryId>,
    scope: Option<FateScope>,
}

impl ZoneGate {
    /// A closed gate with no scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluate for `territory`, replacing whatever scope was held.
    pub fn evaluate(&mut self, territory: TerritoryId, zones: &dyn ZoneDirectory) -> GateDecision {
        self.scope = None;

        if !zones.is_tracked_zone(territory) {
            self.territory = None;
            debug!(%territory, "left tracked zones");
            return GateDecision::Disable;
        }

        self.territory = Some(territory);
        self.scope = match zones.resolve_scope(territory) {
            Ok(Some(scope)) => {
                info!(%territory, fates = scope.len(), "entered tracked zone");
                Some(scope)
            }
            Ok(None) => {
                info!(%territory, "entered tracked zone without a tracker");
                None
            }
            Err(error) => {
                warn!(%territory, %error, "failed to resolve zone tracker");
                None
            }
        };
        GateDecision::Enable
    }

    /// Drop the scope and forget the zone.
    pub fn close(&mut self) {
        self.territory = None;
        self.scope = None;
    }

    /// Tracked territory the gate is open for.
    #[must_use]
    pub fn territory(&self) -> Option<TerritoryId> {
        self.territory
    }

    /// The active scope, if the zone has a tracker.
    #[must_use]
    pub fn scope(&self) -> Option<&FateScope> {
        self.scope.as_ref()
    }

    /// Mutable access for recording progress.
    pub fn scope_mut(&mut self) -> Option<&mut FateScope> {
        self.scope.as_mut()
    }
}
