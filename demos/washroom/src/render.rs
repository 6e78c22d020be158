//! Console rendering: timestamped event logs and state snapshots.

use std::time::Instant;

use tracing::{debug, info};

use fq_core::{ActorId, SlotId, Ticket};
use fq_protocol::{AdmissionObserver, Snapshot};

/// Logs every state change and, optionally, renders the queue state.
///
/// Runs under the admission lock (all observers do), which is also what
/// keeps interleaved output from different actors readable: no two events
/// ever print at once.
pub struct ConsoleObserver {
    epoch:     Instant,
    snapshots: bool,
    live:      bool,
}

impl ConsoleObserver {
    pub fn new(snapshots: bool, live: bool) -> Self {
        Self {
            epoch: Instant::now(),
            snapshots,
            live,
        }
    }

    fn elapsed_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1e3
    }

    /// One line per stall (`|07|` occupied by person 7, `|  |` empty), then
    /// the waiting line in ticket order.
    fn render_state(&self, snap: &Snapshot, reason: &str) {
        if !self.snapshots && !self.live {
            return;
        }

        if self.live {
            // ANSI clear + home, then redraw the panel.
            print!("\x1b[2J\x1b[H");
            println!("--- washroom (live) ---");
        } else {
            println!("\n--- {reason} ---");
        }

        let stalls: String = snap
            .slots
            .iter()
            .map(|owner| {
                if *owner == ActorId::INVALID {
                    "|  | ".to_string()
                } else {
                    format!("|{:02}| ", owner.0)
                }
            })
            .collect();
        println!("Stalls: {stalls}(free={})", snap.free);

        let line: String = snap
            .waiting
            .iter()
            .map(|a| format!(" {}", a.0))
            .collect();
        println!("Queue: [{line} ]  (tickets head={}, next={})", snap.head.0, snap.next.0);
    }
}

impl AdmissionObserver for ConsoleObserver {
    fn on_arrival(&mut self, actor: ActorId, ticket: Ticket, snap: &Snapshot) {
        debug!(
            "[{:8.3} ms] person {} arrived (ticket {}), head={}, free={}",
            self.elapsed_ms(), actor.0, ticket, snap.head, snap.free,
        );
        self.render_state(snap, "arrival");
    }

    fn on_admission(&mut self, actor: ActorId, ticket: Ticket, slot: SlotId, snap: &Snapshot) {
        info!(
            "[{:8.3} ms] person {} ENTERED stall {} (ticket {}, head={}, next={}, free={})",
            self.elapsed_ms(), actor.0, slot.0, ticket, snap.head, snap.next, snap.free,
        );
        self.render_state(snap, "admission");
    }

    fn on_release(&mut self, actor: ActorId, slot: SlotId, snap: &Snapshot) {
        info!(
            "[{:8.3} ms] person {} LEFT stall {} (free={})",
            self.elapsed_ms(), actor.0, slot.0, snap.free,
        );
        self.render_state(snap, "release");
    }
}
