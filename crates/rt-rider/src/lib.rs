//! `rt-rider` — the rider lifecycle as an explicit, resumable state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`command`] | `Command` enum (`Record`, `Acquire`, `Dwell`, …)            |
//! | [`course`]  | `Course` — per-zone dwell times and guarding pools          |
//! | [`process`] | `RiderProcess`, `Phase`                                     |
//!
//! # Design notes
//!
//! A rider never touches scheduler state.  Each call to
//! [`RiderProcess::resume`] returns the commands for one segment of its
//! lifecycle, ending in exactly one *suspending* command:
//!
//! - `Acquire(pool)`: may suspend until the pool hands over a slot
//! - `Dwell(d)`: suspends for `d` time units
//! - `Finish`: terminal
//!
//! The orchestrator (rt-sim) applies the commands in order and resumes the
//! rider again once the suspension ends.  Rider logic therefore stays pure and
//! testable without a clock.

pub mod command;
pub mod course;
pub mod process;


pub use command::Command;
pub use course::{Course, Stage};
pub use process::{Phase, RiderProcess};
