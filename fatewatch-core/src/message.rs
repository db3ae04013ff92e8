//! Rich chat text built from segments.
//!
//! Hosts render segments into their own chat payload format; [`fmt::Display`]
//! gives the plain-text form used for logging and tests.

use std::fmt;

use crate::types::{FateId, MapId, MapPosition, TerritoryId, TrackedFate};

/// UI colour used to highlight progress percentages.
pub const PROGRESS_COLOR: u16 = 58;

/// UI colour used for clickable link labels.
pub const LINK_COLOR: u16 = 32;

/// A piece of rich chat text.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text.
    Text(String),
    /// A map link that opens the map at `position`.
    MapLink {
        /// Territory of the link.
        territory: TerritoryId,
        /// Map sheet of the link.
        map: MapId,
        /// Linked coordinates.
        position: MapPosition,
    },
    /// Start colouring with a UI foreground colour.
    Foreground(u16),
    /// Stop colouring.
    ForegroundOff,
    /// Start of a clickable region bound to the handler registered under the key.
    Link(FateId),
    /// End of a clickable region.
    LinkTerminator,
}

/// A chat message made of [`Segment`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RichText {
    segments: Vec<Segment>,
}

impl RichText {
    /// An empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `"{name}: <map link>"`, the prefix shared by every FATE message.
    #[must_use]
    pub fn fate_header(fate: &TrackedFate) -> Self {
        Self::new()
            .text(format!("{}: ", fate.name()))
            .map_link(fate.territory(), fate.map(), fate.position())
    }

    /// Append literal text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Text(text.into()));
        self
    }

    /// Append a map link.
    #[must_use]
    pub fn map_link(mut self, territory: TerritoryId, map: MapId, position: MapPosition) -> Self {
        self.segments.push(Segment::MapLink {
            territory,
            map,
            position,
        });
        self
    }

    /// Append `text` in UI colour `color`.
    #[must_use]
    pub fn colored(mut self, color: u16, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Foreground(color));
        self.segments.push(Segment::Text(text.into()));
        self.segments.push(Segment::ForegroundOff);
        self
    }

    /// Append a coloured clickable `label` bound to `key`.
    #[must_use]
    pub fn link(mut self, key: FateId, label: impl Into<String>) -> Self {
        self.segments.push(Segment::Foreground(LINK_COLOR));
        self.segments.push(Segment::Link(key));
        self.segments.push(Segment::Text(label.into()));
        self.segments.push(Segment::LinkTerminator);
        self.segments.push(Segment::ForegroundOff);
        self
    }

    /// All segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Key of the first clickable region, if any.
    #[must_use]
    pub fn link_key(&self) -> Option<FateId> {
        self.segments.iter().find_map(|s| match s {
            Segment::Link(key) => Some(*key),
            _ => None,
        })
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => f.write_str(text)?,
                Segment::MapLink { position, .. } => write!(f, "({position})")?,
                Segment::Foreground(_)
                | Segment::ForegroundOff
                | Segment::Link(_)
                | Segment::LinkTerminator => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrackerSlot;

    #[test]
    fn plain_rendering_skips_markup() {
        let fate = TrackedFate::new(
            FateId(1331),
            "Pazuzu",
            TerritoryId(763),
            MapId(467),
            MapPosition::new(7.4, 21.7),
            TrackerSlot(16),
        );
        let text = RichText::fate_header(&fate)
            .text(" is at ")
            .colored(PROGRESS_COLOR, "50%")
            .link(FateId(1331), "[Click to shout]");

        assert_eq!(text.to_string(), "Pazuzu: (X: 7.4, Y: 21.7) is at 50%[Click to shout]");
        assert_eq!(text.link_key(), Some(FateId(1331)));
    }
}
