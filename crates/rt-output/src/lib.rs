//! `rt-output` — exports and scenario files for the ridertrack simulation.
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`csv`]        | `CsvWriter`: `events.csv`, `queue.csv`, `zone.csv`     |
//! | [`observer`]   | `SimOutputObserver` (streaming), `write_report`        |
//! | [`scenario`]   | `Scenario`: JSON load / save with validation           |
//!
//! Writers implement [`OutputWriter`]; they can be driven live by
//! [`SimOutputObserver`], which implements `rt_sim::TrackObserver`, or fed a
//! finished report with [`write_report`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use rt_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod scenario;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{SimOutputObserver, write_report};
pub use row::{EventRow, QueueRow, ZoneRow};
pub use scenario::Scenario;
pub use writer::OutputWriter;
