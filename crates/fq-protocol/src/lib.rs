//! `fq-protocol` — the fair-admission rendezvous at the core of `rust_fq`.
//!
//! # The protocol
//!
//! ```text
//! arrive   — draw a ticket; tickets are dense and strictly increasing.
//! acquire  — wait until (my ticket is the head ticket AND a slot is free),
//!            then occupy the slot, advance the head, and wake all waiters.
//! release  — free the slot and wake all waiters.
//! ```
//!
//! Both structures — the [`ResourcePool`] and the [`TicketQueue`] — live
//! under ONE mutex inside [`Admission`], so the eligibility predicate is
//! atomic relative to both at once.  Neither structure locks on its own.
//!
//! # Broadcast-and-recheck
//!
//! Admission and release both `notify_all`.  Waking everyone is deliberate:
//! either event can change eligibility for at most one waiter (the head
//! holder), but *which* thread that is cannot be known without a per-ticket
//! wait queue.  Every waiter re-evaluates its own predicate after each wake,
//! so spurious and surplus wakeups are harmless.  Do not replace this with
//! `notify_one` — FIFO fairness would then depend on which waiter the OS
//! happens to pick.

pub mod error;
pub mod monitor;
pub mod observer;
pub mod pool;
pub mod ticket_queue;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::AdmissionError;
pub use monitor::Admission;
pub use observer::{AdmissionObserver, FanoutObserver, NoopObserver, Snapshot};
pub use pool::ResourcePool;
pub use ticket_queue::TicketQueue;
