//! Observer hooks for state-change reporting and data collection.

use fq_core::{ActorId, SlotId, Ticket};

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// A consistent view of the shared state, taken while the lock is held.
///
/// Every observer callback receives one, so renderers and recorders never
/// see a half-updated queue.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Owner per slot; `ActorId::INVALID` marks an empty slot.
    pub slots: Vec<ActorId>,
    /// Slots currently unowned.  Always `capacity - occupied`.
    pub free: usize,
    /// The ticket currently eligible for admission.
    pub head: Ticket,
    /// The ticket the next arrival will draw.
    pub next: Ticket,
    /// Actors queued but not yet admitted, in ticket order.
    pub waiting: Vec<ActorId>,
}

impl Snapshot {
    /// Slots currently owned.
    #[inline]
    pub fn occupied(&self) -> usize {
        self.slots.len() - self.free
    }
}

// ── Observer trait ────────────────────────────────────────────────────────────

/// Callbacks invoked by [`Admission`][crate::Admission] immediately after
/// each state-changing operation, while the shared lock is still held.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Keep implementations quick — every
/// other actor is blocked on the lock for the duration of the call.
///
/// # Example — admission counter
///
/// ```rust,ignore
/// struct AdmissionCounter(usize);
///
/// impl AdmissionObserver for AdmissionCounter {
///     fn on_admission(&mut self, _a: ActorId, _t: Ticket, _s: SlotId, _snap: &Snapshot) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait AdmissionObserver: Send {
    /// An actor drew a ticket and joined the queue.
    fn on_arrival(&mut self, _actor: ActorId, _ticket: Ticket, _snap: &Snapshot) {}

    /// The head-ticket holder occupied a slot; the head has advanced.
    fn on_admission(&mut self, _actor: ActorId, _ticket: Ticket, _slot: SlotId, _snap: &Snapshot) {}

    /// An occupying actor freed its slot.
    fn on_release(&mut self, _actor: ActorId, _slot: SlotId, _snap: &Snapshot) {}
}

/// An [`AdmissionObserver`] that does nothing.  Use when you need an
/// `Admission` but don't care about callbacks.
pub struct NoopObserver;

impl AdmissionObserver for NoopObserver {}

// ── Fanout ────────────────────────────────────────────────────────────────────

/// Forwards every callback to each registered observer in order.
///
/// `Admission` holds exactly one observer; this is how a binary combines,
/// say, a console renderer with a CSV recorder.
#[derive(Default)]
pub struct FanoutObserver {
    inner: Vec<Box<dyn AdmissionObserver>>,
}

impl FanoutObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer; callbacks arrive in registration order.
    pub fn with(mut self, observer: Box<dyn AdmissionObserver>) -> Self {
        self.inner.push(observer);
        self
    }
}

impl AdmissionObserver for FanoutObserver {
    fn on_arrival(&mut self, actor: ActorId, ticket: Ticket, snap: &Snapshot) {
        for obs in &mut self.inner {
            obs.on_arrival(actor, ticket, snap);
        }
    }

    fn on_admission(&mut self, actor: ActorId, ticket: Ticket, slot: SlotId, snap: &Snapshot) {
        for obs in &mut self.inner {
            obs.on_admission(actor, ticket, slot, snap);
        }
    }

    fn on_release(&mut self, actor: ActorId, slot: SlotId, snap: &Snapshot) {
        for obs in &mut self.inner {
            obs.on_release(actor, slot, snap);
        }
    }
}
