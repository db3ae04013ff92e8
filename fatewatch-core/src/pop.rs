//! Pop planning: what a newly appeared FATE should trigger.
//!
//! Planning is pure. The host's dispatcher carries out a [`PopPlan`] against
//! chat, audio, the link registry and the shared tracker.

use crate::config::{FateWatchConfig, LinkAction};
use crate::message::RichText;
use crate::types::{FateId, SoundEffect, TrackedFate};

/// Side effects for one popped FATE.
#[derive(Debug, Clone, PartialEq)]
pub enum PopPlan {
    /// A filtered-category FATE: plain message plus its own sound.
    Filtered {
        /// FATE identifier.
        id: FateId,
        /// `"{name}: <map link>"`.
        message: RichText,
        /// Filtered pop sound.
        sound: SoundEffect,
    },
    /// A normal FATE.
    Normal(NormalPop),
}

/// Independently gated effects for a normal FATE pop.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalPop {
    /// FATE identifier; also the click-handler key.
    pub id: FateId,
    /// Quest toast to show.
    pub toast: Option<RichText>,
    /// Sound to play.
    pub sound: Option<SoundEffect>,
    /// Chat message to print.
    pub chat: Option<ChatPop>,
    /// Whether to attempt a tracker pop-time write.
    pub auto_pop: bool,
}

/// Chat part of a normal pop.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPop {
    /// Message, including the `[Click to ...]` label when `action` is set.
    pub message: RichText,
    /// Click action to register under the FATE id before printing.
    pub action: Option<LinkAction>,
}

/// Plan the pop of `fate`. `None` when nothing at all should happen.
#[must_use]
pub fn plan_pop(fate: &TrackedFate, config: &FateWatchConfig) -> Option<PopPlan> {
    let header = RichText::fate_header(fate);

    if fate.is_filtered() {
        return config.filtered.enabled.then(|| PopPlan::Filtered {
            id: fate.id(),
            message: header,
            sound: config.filtered.sound_effect,
        });
    }

    let chat = config.pop.chat.then(|| match config.link.action.verb() {
        Some(verb) => ChatPop {
            message: header.clone().text(" ").link(fate.id(), format!("[Click to {verb}]")),
            action: Some(config.link.action),
        },
        None => ChatPop {
            message: header.clone(),
            action: None,
        },
    });

    Some(PopPlan::Normal(NormalPop {
        id: fate.id(),
        toast: config.pop.toast.then(|| header.clone()),
        sound: config.pop.sound.then_some(config.pop.sound_effect),
        chat,
        auto_pop: config.tracker.auto_pop,
    }))
}
