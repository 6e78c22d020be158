//! The backend-agnostic writer trait.

use crate::row::{EventRow, VisitRow};
use crate::OutputResult;

/// Something that can persist event and visit rows.
///
/// Implementations buffer internally; callers must call
/// [`finish`][Self::finish] once at the end to flush.
pub trait EventWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    fn write_visits(&mut self, rows: &[VisitRow]) -> OutputResult<()>;

    /// Flush everything.  Must be idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
