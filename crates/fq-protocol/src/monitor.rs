//! The admission monitor: one lock, one condvar, strict FIFO admission.

use std::sync::{Condvar, Mutex, MutexGuard};

use fq_core::{ActorId, SlotId, Ticket};

use crate::observer::{AdmissionObserver, NoopObserver, Snapshot};
use crate::pool::ResourcePool;
use crate::ticket_queue::TicketQueue;
use crate::AdmissionError;

// ── Shared state ──────────────────────────────────────────────────────────────

/// Everything the lock guards.  The pool and the ticket queue are never
/// locked independently, so the eligibility predicate
/// `ticket == head AND a slot is free` is atomic across both.
struct State {
    pool:     ResourcePool,
    tickets:  TicketQueue,
    /// Cooperative cancellation flag, checked at every wake.
    shutdown: bool,
    observer: Box<dyn AdmissionObserver>,
}

impl State {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            slots:   self.pool.owners().to_vec(),
            free:    self.pool.free_count(),
            head:    self.tickets.head(),
            next:    self.tickets.next(),
            waiting: self.tickets.waiting().map(|(_, a)| a).collect(),
        }
    }
}

// ── Admission ─────────────────────────────────────────────────────────────────

/// The shared rendezvous every actor goes through.
///
/// # Contract
///
/// - [`arrive`][Self::arrive] once, yielding a ticket.
/// - [`acquire`][Self::acquire] with that ticket exactly once.  The call
///   blocks until the ticket reaches the head of the line AND a slot is
///   free, then returns the occupied slot.
/// - [`release`][Self::release] the slot when done.
///
/// Hold no slot across a second `acquire`; an actor owns at most one slot
/// at a time.  All long-running work (the service time itself) happens
/// between `acquire` and `release` with no lock held.
pub struct Admission {
    state:    Mutex<State>,
    /// Waiters blocked in `acquire`.  Signalled with `notify_all` on every
    /// admission and every release — see the crate docs on
    /// broadcast-and-recheck.
    eligible: Condvar,
    capacity: usize,
}

impl Admission {
    /// A monitor over `capacity` slots with no observer.
    pub fn new(capacity: usize) -> Self {
        Self::with_observer(capacity, Box::new(NoopObserver))
    }

    /// A monitor over `capacity` slots that reports every state change to
    /// `observer` (called under the lock, so snapshots are consistent).
    pub fn with_observer(capacity: usize, observer: Box<dyn AdmissionObserver>) -> Self {
        Self {
            state: Mutex::new(State {
                pool: ResourcePool::new(capacity),
                tickets: TicketQueue::new(),
                shutdown: false,
                observer,
            }),
            eligible: Condvar::new(),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, AdmissionError> {
        self.state.lock().map_err(|_| AdmissionError::Poisoned)
    }

    // ── Protocol operations ───────────────────────────────────────────────

    /// Join the queue: draw this actor's ticket.
    ///
    /// Tickets are issued densely in arrival order; the ticket is immutable
    /// for the actor's lifetime.  No wakeup is sent — a new arrival can
    /// only unblock itself, which `acquire` checks first thing.
    pub fn arrive(&self, actor: ActorId) -> Result<Ticket, AdmissionError> {
        let mut state = self.lock()?;
        let ticket = state.tickets.draw(actor);
        let snap = state.snapshot();
        state.observer.on_arrival(actor, ticket, &snap);
        Ok(ticket)
    }

    /// Block until `ticket` is at the head of the line and a slot is free,
    /// then occupy that slot and advance the head.
    ///
    /// The wait releases the lock atomically while suspended and re-checks
    /// the full predicate after every wake, so surplus wakeups are harmless
    /// and signals cannot be missed.  Only the head-ticket holder ever
    /// attempts to occupy — that is what makes admission order strict FIFO
    /// even when several slots free up at once.
    ///
    /// Returns [`AdmissionError::Cancelled`] if [`shutdown`][Self::shutdown]
    /// fires while the actor is still queued.
    pub fn acquire(&self, actor: ActorId, ticket: Ticket) -> Result<SlotId, AdmissionError> {
        let mut state = self.lock()?;
        let slot = loop {
            if state.shutdown {
                return Err(AdmissionError::Cancelled);
            }
            if state.tickets.head() == ticket {
                if let Some(slot) = state.pool.try_occupy(actor) {
                    break slot;
                }
            }
            state = self
                .eligible
                .wait(state)
                .map_err(|_| AdmissionError::Poisoned)?;
        };
        state.tickets.admit();
        let snap = state.snapshot();
        state.observer.on_admission(actor, ticket, slot, &snap);
        // Advancing the head may have made the next ticket holder eligible.
        self.eligible.notify_all();
        Ok(slot)
    }

    /// Free `slot` and wake the waiters — one of them may now be eligible.
    pub fn release(&self, actor: ActorId, slot: SlotId) -> Result<(), AdmissionError> {
        let mut state = self.lock()?;
        state.pool.release(slot);
        let snap = state.snapshot();
        state.observer.on_release(actor, slot, &snap);
        self.eligible.notify_all();
        Ok(())
    }

    /// Cancel every queued actor cooperatively.  Idempotent.
    ///
    /// Waiters observe the flag at their next wake and return
    /// [`AdmissionError::Cancelled`] from `acquire`; occupying actors are
    /// unaffected and release normally.
    pub fn shutdown(&self) {
        let mut state = match self.state.lock() {
            Ok(guard) => guard,
            // Still raise the flag on a poisoned lock so nobody waits forever.
            Err(poisoned) => poisoned.into_inner(),
        };
        state.shutdown = true;
        drop(state);
        self.eligible.notify_all();
    }

    /// A consistent view of the current state.
    pub fn snapshot(&self) -> Result<Snapshot, AdmissionError> {
        Ok(self.lock()?.snapshot())
    }
}
