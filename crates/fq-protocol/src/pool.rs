//! The fixed-size pool of interchangeable slots.
//!
//! `ResourcePool` does no locking of its own — it is not thread-safe in
//! isolation.  All mutation happens while the caller holds the
//! [`Admission`][crate::Admission] lock, which also guards the ticket queue;
//! keeping both under one lock is what makes the admission predicate atomic
//! across the two structures.

use fq_core::{ActorId, SlotId};

/// Occupancy bookkeeping for `capacity` interchangeable slots.
///
/// Invariant: `free() == slots.iter().filter(|o| **o == ActorId::INVALID).count()`
/// at all times.
pub struct ResourcePool {
    /// Owner per slot; `ActorId::INVALID` marks an empty slot.
    slots: Vec<ActorId>,
    free:  usize,
}

impl ResourcePool {
    /// A pool with `capacity` empty slots.  Capacity never changes.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![ActorId::INVALID; capacity],
            free:  capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots currently unowned.
    #[inline]
    pub fn free_count(&self) -> usize {
        self.free
    }

    /// Slots currently owned.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.slots.len() - self.free
    }

    /// Owner of `slot`, or `None` if it is empty.
    pub fn owner(&self, slot: SlotId) -> Option<ActorId> {
        let o = self.slots[slot.index()];
        (o != ActorId::INVALID).then_some(o)
    }

    /// Owner per slot; `ActorId::INVALID` marks an empty slot.
    pub fn owners(&self) -> &[ActorId] {
        &self.slots
    }

    /// Assign the first empty slot to `actor`, or `None` if all are taken.
    ///
    /// Caller must hold the shared lock.
    pub fn try_occupy(&mut self, actor: ActorId) -> Option<SlotId> {
        let i = self.slots.iter().position(|o| *o == ActorId::INVALID)?;
        self.slots[i] = actor;
        self.free -= 1;
        Some(SlotId(i as u16))
    }

    /// Mark `slot` empty again.
    ///
    /// Caller must hold the shared lock.  Releasing an already-empty slot is
    /// a logic error.
    pub fn release(&mut self, slot: SlotId) {
        debug_assert_ne!(self.slots[slot.index()], ActorId::INVALID, "double release of {slot}");
        self.slots[slot.index()] = ActorId::INVALID;
        self.free += 1;
    }
}
