//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`
//! - `visits.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{EventRow, VisitRow};
use crate::writer::EventWriter;
use crate::OutputResult;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    visits:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["at_ms", "kind", "actor", "ticket", "slot", "free", "head", "next"])?;

        let mut visits = Writer::from_path(dir.join("visits.csv"))?;
        visits.write_record(["actor", "ticket", "slot", "arrived_ms", "admitted_ms", "departed_ms"])?;

        Ok(Self {
            events,
            visits,
            finished: false,
        })
    }
}

impl EventWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.at_ms.to_string(),
                row.kind.to_string(),
                row.actor.to_string(),
                row.ticket.to_string(),
                row.slot.to_string(),
                row.free.to_string(),
                row.head.to_string(),
                row.next.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_visits(&mut self, rows: &[VisitRow]) -> OutputResult<()> {
        for row in rows {
            self.visits.write_record(&[
                row.actor.to_string(),
                row.ticket.to_string(),
                row.slot.to_string(),
                row.arrived_ms.to_string(),
                row.admitted_ms.to_string(),
                row.departed_ms.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.visits.flush()?;
        Ok(())
    }
}
