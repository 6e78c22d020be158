//! The admission-order counter.
//!
//! # Design
//!
//! Arrival order is represented as a monotonically increasing `Ticket`
//! counter.  Tickets are dense: the k-th arrival holds ticket k, so the set
//! of issued tickets is always `{0, 1, …, n-1}` after n arrivals.  Using an
//! integer as the canonical ordering unit means all queue arithmetic is
//! exact and comparisons are O(1).
//!
//! A ticket says nothing about *when* its holder is served — only *in what
//! order*.  The holder of the head ticket is next, however long that takes.

use std::fmt;

/// An admission-order ticket.
///
/// Stored as `u64` to avoid overflow: one ticket per arrival, so a u64
/// outlasts any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticket(pub u64);

impl Ticket {
    pub const ZERO: Ticket = Ticket(0);

    /// The ticket issued immediately after `self`.
    #[inline]
    pub fn next(self) -> Ticket {
        Ticket(self.0 + 1)
    }

    /// Cast to `usize` for direct use as an audit-table index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u64> for Ticket {
    type Output = Ticket;
    #[inline]
    fn add(self, rhs: u64) -> Ticket {
        Ticket(self.0 + rhs)
    }
}

impl std::ops::Sub for Ticket {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Ticket) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
