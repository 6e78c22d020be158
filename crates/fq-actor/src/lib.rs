//! `fq-actor` — one actor's journey through the admission protocol.
//!
//! ```text
//! Arrived ─→ Queued ─→ Admitted ─→ Occupying ─→ Departed
//!    arrive()   acquire()    (slot held,     release()
//!                             no lock)
//! ```
//!
//! The lifecycle is the only place the two protocol structures interact
//! from the outside: everything between `acquire` and `release` runs with
//! no lock held, so slow service never blocks the queue's bookkeeping.

pub mod lifecycle;

#[cfg(test)]
mod tests;

pub use lifecycle::{Actor, Phase, Visit};
