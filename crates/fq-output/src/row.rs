//! Flat row types written by the output backends.

use std::fmt;
use std::time::Duration;

use fq_actor::Visit;
use fq_core::SlotId;

/// Which state change an [`EventRow`] records.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EventKind {
    Arrival,
    Admission,
    Release,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::Arrival   => "arrival",
            EventKind::Admission => "admission",
            EventKind::Release   => "release",
        };
        f.write_str(s)
    }
}

/// One state change, with the consistent queue counters observed at that
/// instant (the observer runs under the lock).
#[derive(Clone, Debug)]
pub struct EventRow {
    /// Milliseconds since the recorder was created.
    pub at_ms: u64,
    pub kind:  EventKind,
    pub actor: u32,
    pub ticket: u64,
    /// Slot involved, or `u16::MAX` for arrivals (no slot yet).
    pub slot: u16,
    pub free: usize,
    pub head: u64,
    pub next: u64,
}

impl EventRow {
    /// Sentinel slot value for events that involve no slot.
    pub const NO_SLOT: u16 = SlotId::INVALID.0;

    /// Sentinel ticket value for events that involve no ticket.
    pub const NO_TICKET: u64 = u64::MAX;
}

/// One completed visit, flattened for export.
#[derive(Clone, Debug)]
pub struct VisitRow {
    pub actor:       u32,
    pub ticket:      u64,
    pub slot:        u16,
    pub arrived_ms:  u64,
    pub admitted_ms: u64,
    pub departed_ms: u64,
}

impl From<&Visit> for VisitRow {
    fn from(v: &Visit) -> Self {
        VisitRow {
            actor:       v.actor.0,
            ticket:      v.ticket.0,
            slot:        v.slot.0,
            arrived_ms:  as_ms(v.arrived_at),
            admitted_ms: as_ms(v.admitted_at),
            departed_ms: as_ms(v.departed_at),
        }
    }
}

pub(crate) fn as_ms(d: Duration) -> u64 {
    d.as_millis() as u64
}
