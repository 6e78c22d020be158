//! The actor state machine and its completed-visit record.

use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use fq_core::{ActorId, ServiceSampler, SlotId, Ticket};
use fq_protocol::{Admission, AdmissionError};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Where an actor currently is in its lifecycle.
///
/// An actor is constructed at the moment it arrives; the remaining
/// transitions are driven by [`Actor::run`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// At the facility, no ticket yet.
    Arrived,
    /// Holding a ticket, waiting for its turn and a free slot.
    Queued,
    /// Past the head of the line, slot assigned.
    Admitted,
    /// Using the slot (no lock held).
    Occupying,
    /// Slot released; the actor is done.
    Departed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Arrived   => "arrived",
            Phase::Queued    => "queued",
            Phase::Admitted  => "admitted",
            Phase::Occupying => "occupying",
            Phase::Departed  => "departed",
        };
        f.write_str(s)
    }
}

// ── Visit ─────────────────────────────────────────────────────────────────────

/// The record of one completed visit, for reporting.
///
/// All timestamps are monotonic offsets from the simulation epoch, taken
/// outside the lock — event ordering for fairness checks comes from the
/// observer (which runs under the lock), not from these.
#[derive(Clone, Debug)]
pub struct Visit {
    pub actor:       ActorId,
    pub ticket:      Ticket,
    pub slot:        SlotId,
    pub arrived_at:  Duration,
    pub admitted_at: Duration,
    pub departed_at: Duration,
}

impl Visit {
    /// Time spent queued between arrival and admission.
    pub fn waited(&self) -> Duration {
        self.admitted_at.saturating_sub(self.arrived_at)
    }

    /// Time the slot was held.
    pub fn held(&self) -> Duration {
        self.departed_at.saturating_sub(self.admitted_at)
    }
}

// ── Actor ─────────────────────────────────────────────────────────────────────

/// One simulated actor: an identity, a mean service time, and a private
/// duration sampler.
pub struct Actor<S: ServiceSampler> {
    id:           ActorId,
    mean_service: Duration,
    sampler:      S,
    phase:        Phase,
}

impl<S: ServiceSampler> Actor<S> {
    pub fn new(id: ActorId, mean_service: Duration, sampler: S) -> Self {
        Self {
            id,
            mean_service,
            sampler,
            phase: Phase::Arrived,
        }
    }

    #[inline]
    pub fn id(&self) -> ActorId {
        self.id
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Drive the whole lifecycle: draw a ticket, wait for admission, hold
    /// the slot for a sampled service time, release, depart.
    ///
    /// `epoch` anchors the visit's timestamps.  Returns
    /// [`AdmissionError::Cancelled`] if a shutdown fires while the actor is
    /// still queued; a cancelled actor has occupied nothing and releases
    /// nothing.
    pub fn run(&mut self, admission: &Admission, epoch: Instant) -> Result<Visit, AdmissionError> {
        let ticket = admission.arrive(self.id)?;
        let arrived_at = epoch.elapsed();
        self.phase = Phase::Queued;

        let slot = admission.acquire(self.id, ticket)?;
        let admitted_at = epoch.elapsed();
        self.phase = Phase::Admitted;

        // Service happens with no lock held; only bookkeeping is protected.
        self.phase = Phase::Occupying;
        let service = self.sampler.sample(self.mean_service);
        if !service.is_zero() {
            thread::sleep(service);
        }

        admission.release(self.id, slot)?;
        let departed_at = epoch.elapsed();
        self.phase = Phase::Departed;

        Ok(Visit {
            actor: self.id,
            ticket,
            slot,
            arrived_at,
            admitted_at,
            departed_at,
        })
    }
}
