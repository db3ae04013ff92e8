//! # fatewatch core
//!
//! Game-agnostic model for deriving FATE events from per-tick world
//! snapshots.
//!
//! The game client only exposes the set of currently active FATEs each
//! frame. Everything temporal is derived here:
//!
//! - **Snapshot diffing** — which FATEs appeared since the last tick, and
//!   which changed progress ([`diff`]).
//! - **Progress milestones** — one report per 25% boundary crossed
//!   ([`progress`]).
//! - **Pop planning** — what a newly appeared FATE should trigger: chat,
//!   toast, sound, a clickable link and tracker bookkeeping ([`pop`]).
//!
//! Host integration (callbacks, chat, audio, the shared tracker) lives in
//! `fatewatch-host`; this crate performs no I/O beyond loading its config.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod coords;
pub mod diff;
pub mod error;
pub mod message;
pub mod pop;
pub mod progress;
pub mod scope;
pub mod tracker;
pub mod types;

pub use config::FateWatchConfig;
pub use error::FateError;
pub use scope::FateScope;
pub use types::*;
