//! `rt-core` — foundational types for the `ridertrack` training-track
//! simulation.
//!
//! This crate is a dependency of every other `rt-*` crate.  It has no `rt-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `ProcessId`, `RiderKind`, `RiderId`                      |
//! | [`time`]     | `SimTime` (totally ordered virtual time)                 |
//! | [`zone`]     | `Zone`, `Action`, `PoolKind`, `LatchKind`                |
//! | [`event`]    | `Event`, `QueueSample`, `UtilizationSample`              |
//! | [`config`]   | `TrackConfig`, `TrackPolicy`, `RunLimits`                |
//! | [`error`]    | `ConfigError`, `ConfigResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod event;
pub mod ids;
pub mod time;
pub mod zone;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{LatchPolicy, RunLimits, TrackConfig, TrackPolicy, ZoneAPolicy};
pub use error::{ConfigError, ConfigResult};
pub use event::{Event, QueueSample, UtilizationSample};
pub use ids::{ProcessId, RiderId, RiderKind};
pub use time::SimTime;
pub use zone::{Action, LatchKind, PoolKind, Zone};
