//! `fq-output` — event and visit export for the rust_fq simulator.
//!
//! Two record streams come out of a run:
//!
//! - **events** — one row per state change (arrival / admission / release),
//!   captured under the lock by [`RecordingObserver`] so row order is the
//!   true order of events.
//! - **visits** — one row per completed actor, produced from the driver's
//!   report after the run.
//!
//! The [`EventWriter`] trait decouples the rows from any one format; the
//! only backend currently shipped is CSV.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RecordingObserver;
pub use row::{EventKind, EventRow, VisitRow};
pub use writer::EventWriter;
