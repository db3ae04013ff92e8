//! Coordinate text for sharing a FATE's location.
//!
//! Known spawn points are public knowledge, but announcing the exact same
//! numbers every time makes automated shouts easy to spot, so positions can
//! be jittered within a small radius before they are flagged and shared.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::LinkConfig;
use crate::types::{MapPosition, TrackedFate};

const POP_PHRASES: &[&str] = &["pop!", "is up!", "popped!", "is up, come help!"];

/// Offset `position` by up to `radius` on each axis.
pub fn jitter(position: MapPosition, radius: f32, rng: &mut impl Rng) -> MapPosition {
    if radius <= 0.0 {
        return position;
    }
    MapPosition::new(
        position.x + rng.gen_range(-radius..=radius),
        position.y + rng.gen_range(-radius..=radius),
    )
}

/// Position to flag and share for `fate`, jittered when configured.
pub fn share_position(fate: &TrackedFate, link: &LinkConfig, rng: &mut impl Rng) -> MapPosition {
    if link.randomize_coords {
        jitter(fate.position(), link.randomize_radius, rng)
    } else {
        fate.position()
    }
}

/// A short announcement such as `"Pazuzu is up! X: 7.4, Y: 21.7"`.
pub fn announcement(fate: &TrackedFate, position: MapPosition, rng: &mut impl Rng) -> String {
    let phrase = POP_PHRASES.choose(rng).copied().unwrap_or("pop!");
    format!("{} {phrase} {position}", fate.name())
}
