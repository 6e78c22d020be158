//! Arrival ordering: dense tickets and the head-of-line pointer.
//!
//! # Why this exists
//!
//! Admission checks run concurrently across every waiting actor, yet the
//! order of service must be the order of arrival.  The queue reduces that to
//! two counters: `next` (the ticket the next arrival will draw) and `head`
//! (the ticket currently eligible for a slot).  An actor may occupy a slot
//! only while its ticket equals `head`, so a later arrival can never slip
//! into a free slot ahead of an earlier one — the ordering is structural,
//! not a matter of scheduling luck.
//!
//! Invariant: `head ≤ next` always; both only ever increase.

use fq_core::{ActorId, Ticket};

/// Ticket issue and head-of-line tracking, plus an owner audit table.
///
/// Like [`ResourcePool`][crate::ResourcePool], this struct does no locking;
/// the admission monitor mutates it under the one shared lock.
#[derive(Default)]
pub struct TicketQueue {
    next: Ticket,
    head: Ticket,
    /// Ticket index → owner.  Diagnostics only; correctness never reads it.
    owners: Vec<ActorId>,
}

impl TicketQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket to `actor`.
    ///
    /// Values are dense and ordered by call order under the lock — call
    /// order *is* arrival order.
    pub fn draw(&mut self, actor: ActorId) -> Ticket {
        let ticket = self.next;
        self.next = self.next.next();
        self.owners.push(actor);
        ticket
    }

    /// Advance the head past an admitted actor.
    ///
    /// Call only immediately after a successful occupy on behalf of the
    /// holder of the current head ticket.
    pub fn admit(&mut self) {
        self.head = self.head.next();
    }

    /// The ticket currently eligible for admission.
    #[inline]
    pub fn head(&self) -> Ticket {
        self.head
    }

    /// The ticket the next arrival will draw.
    #[inline]
    pub fn next(&self) -> Ticket {
        self.next
    }

    /// Actors queued but not yet admitted.
    #[inline]
    pub fn waiting_count(&self) -> u64 {
        self.next - self.head
    }

    /// Who drew `ticket`, if it has been issued.
    pub fn owner_of(&self, ticket: Ticket) -> Option<ActorId> {
        self.owners.get(ticket.index()).copied()
    }

    /// The waiting line in admission order: `(ticket, owner)` from the head
    /// ticket up to (excluding) the next unissued one.
    pub fn waiting(&self) -> impl Iterator<Item = (Ticket, ActorId)> + '_ {
        (self.head.0..self.next.0).map(|t| (Ticket(t), self.owners[t as usize]))
    }
}
