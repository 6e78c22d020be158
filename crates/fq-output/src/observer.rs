//! `RecordingObserver` — captures the event stream for later export.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use fq_core::{ActorId, SlotId, Ticket};
use fq_protocol::{AdmissionObserver, Snapshot};

use crate::row::{as_ms, EventKind, EventRow};

/// Shared handle to the rows a [`RecordingObserver`] has captured.
///
/// The observer itself is boxed away inside the admission monitor; the
/// handle is how the driving code reads the rows back after the run.
pub type EventRows = Arc<Mutex<Vec<EventRow>>>;

/// An [`AdmissionObserver`] that appends one [`EventRow`] per state change.
///
/// Runs under the shared lock, so rows land in true event order and each
/// carries counters from a consistent snapshot.  The buffer mutex is a
/// leaf — only ever taken while already holding the admission lock — so no
/// ordering hazard is introduced.
pub struct RecordingObserver {
    epoch: Instant,
    rows:  EventRows,
}

impl RecordingObserver {
    /// Create the observer and the handle used to collect the rows later.
    ///
    /// Timestamps are milliseconds since this call.
    pub fn new() -> (Self, EventRows) {
        let rows: EventRows = Arc::default();
        let observer = Self {
            epoch: Instant::now(),
            rows:  Arc::clone(&rows),
        };
        (observer, rows)
    }

    fn push(&mut self, kind: EventKind, actor: ActorId, ticket: Ticket, slot: u16, snap: &Snapshot) {
        // A poisoned buffer means a previous push panicked; drop the row
        // rather than panic again under the admission lock.
        if let Ok(mut rows) = self.rows.lock() {
            rows.push(EventRow {
                at_ms: as_ms(self.epoch.elapsed()),
                kind,
                actor: actor.0,
                ticket: ticket.0,
                slot,
                free: snap.free,
                head: snap.head.0,
                next: snap.next.0,
            });
        }
    }
}

impl AdmissionObserver for RecordingObserver {
    fn on_arrival(&mut self, actor: ActorId, ticket: Ticket, snap: &Snapshot) {
        self.push(EventKind::Arrival, actor, ticket, EventRow::NO_SLOT, snap);
    }

    fn on_admission(&mut self, actor: ActorId, ticket: Ticket, slot: SlotId, snap: &Snapshot) {
        self.push(EventKind::Admission, actor, ticket, slot.0, snap);
    }

    fn on_release(&mut self, actor: ActorId, slot: SlotId, snap: &Snapshot) {
        // The releasing actor's ticket was admitted long ago and is not part
        // of the release event.
        self.push(EventKind::Release, actor, Ticket(EventRow::NO_TICKET), slot.0, snap);
    }
}
