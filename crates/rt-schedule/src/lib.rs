//! `rt-schedule` — the scheduling primitives of the track simulation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`agenda`]   | `Agenda` (`BTreeMap<SimTime, VecDeque<ProcessId>>`)       |
//! | [`pool`]     | `ResourcePool`, `Acquire`                                 |
//! | [`latch`]    | `Latch`, `LatchWait`                                      |
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! None of these types know about riders.  They deal only in
//! [`ProcessId`][rt_core::ProcessId]s: a primitive that unblocks a process
//! hands its id back to the caller, and the caller (rt-sim) puts it on the
//! agenda at the current instant.  That keeps every wake-up on the one
//! FIFO agenda, which is what makes same-time ordering deterministic.

pub mod agenda;
pub mod error;
pub mod latch;
pub mod pool;


pub use agenda::Agenda;
pub use error::{ScheduleError, ScheduleResult};
pub use latch::{Latch, LatchWait};
pub use pool::{Acquire, ResourcePool};
