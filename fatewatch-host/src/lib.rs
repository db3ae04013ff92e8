//! # fatewatch-host — Host Integration for fatewatch
//!
//! Wires the game-agnostic `fatewatch-core` pipeline to a game client.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │              Game client                  │
//! │  zone change      frame tick              │
//! │      │                │                   │
//! │  ┌───▼────────────────▼────────────────┐  │
//! │  │          FateManager                │  │
//! │  │  ZoneGate ─ SnapshotDiffer ─ PopDispatcher
//! │  └───┬────────────────┬────────────────┘  │
//! │      ▼                ▼                   │
//! │  chat / toast / sound / links / tracker   │
//! └───────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `ports` — collaborator traits the client implements
//! - `gate` — zone gating and scope resolution
//! - `dispatch` — pop notifications and tracker auto-pop
//! - `manager` — lifecycle and the per-tick pipeline
//! - `links` — in-memory click handler registry
//! - `background` — detached tracker requests
//! - `telemetry` — tracing subscriber setup

pub mod background;
pub mod dispatch;
pub mod gate;
pub mod links;
pub mod manager;
pub mod ports;
pub mod telemetry;

pub use background::Background;
pub use links::ClickActionRegistry;
pub use manager::FateManager;
pub use ports::Host;
