//! The `Sim` struct, its run loop, and the end-of-run report.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use fq_core::{exp_duration, ActorId, ExpSampler, FqError, SimConfig, SimRng};
use fq_actor::{Actor, Visit};
use fq_protocol::{Admission, AdmissionError};

use crate::{SimError, SimResult};

/// Offset for deriving the driver's arrival stream from the root seed, so
/// it never collides with any actor's service stream.
const ARRIVAL_STREAM: u64 = u64::MAX;

// ── SimReport ─────────────────────────────────────────────────────────────────

/// What a completed run produced.
#[derive(Debug)]
pub struct SimReport {
    /// Completed visits, sorted by ticket (= admission order).
    pub visits: Vec<Visit>,
    /// Actors cancelled by the deadline while still queued.
    pub cancelled: usize,
    /// Wall-clock duration of the whole run.
    pub elapsed: Duration,
}

impl SimReport {
    /// Number of actors that completed a visit.
    pub fn completed(&self) -> usize {
        self.visits.len()
    }

    /// Mean time completed actors spent queued.  Zero for an empty run.
    pub fn mean_wait(&self) -> Duration {
        if self.visits.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.visits.iter().map(Visit::waited).sum();
        total / self.visits.len() as u32
    }

    /// Longest time any completed actor spent queued.
    pub fn max_wait(&self) -> Duration {
        self.visits.iter().map(Visit::waited).max().unwrap_or(Duration::ZERO)
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// A configured, ready-to-run simulation.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    config:    SimConfig,
    admission: Arc<Admission>,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, admission: Arc<Admission>) -> Self {
        Self { config, admission }
    }

    /// The shared admission monitor (e.g. for taking a snapshot mid-run
    /// from the driving thread).
    pub fn admission(&self) -> &Arc<Admission> {
        &self.admission
    }

    /// Run the simulation to completion and return the report.
    ///
    /// Spawns one thread per actor, sleeping a sampled inter-arrival gap
    /// between consecutive spawns so arrivals stagger the way a real queue
    /// fills.  If a deadline is configured, a watchdog thread cancels all
    /// still-queued actors when it expires; occupying actors always finish
    /// and release.
    ///
    /// Thread-spawn failure and lock poisoning are fatal (the first aborts
    /// the spawn loop, the second the whole run); cancellation is not.
    pub fn run(self) -> SimResult<SimReport> {
        let epoch = Instant::now();
        let mut arrivals = SimRng::new(self.config.seed).child(ARRIVAL_STREAM);

        if let Some(deadline) = self.config.deadline {
            let admission = Arc::clone(&self.admission);
            // Not joined: if the run finishes first, the late shutdown on a
            // drained monitor is a no-op.
            thread::Builder::new()
                .name("fq-watchdog".into())
                .spawn(move || {
                    thread::sleep(deadline);
                    admission.shutdown();
                })
                .map_err(FqError::Io)?;
        }

        let mut handles = Vec::with_capacity(self.config.actor_count);
        for i in 0..self.config.actor_count {
            let id = ActorId(i as u32);
            let admission = Arc::clone(&self.admission);
            let mean_service = self.config.mean_service;
            let sampler = ExpSampler::for_actor(self.config.seed, id);

            let handle = thread::Builder::new()
                .name(format!("fq-actor-{i}"))
                .spawn(move || {
                    let mut actor = Actor::new(id, mean_service, sampler);
                    actor.run(&admission, epoch)
                })
                .map_err(FqError::Io)?;
            handles.push((id, handle));

            let gap = exp_duration(&mut arrivals, self.config.mean_interarrival);
            if !gap.is_zero() {
                thread::sleep(gap);
            }
        }

        let mut visits = Vec::with_capacity(handles.len());
        let mut cancelled = 0;
        for (id, handle) in handles {
            match handle.join() {
                Ok(Ok(visit))                          => visits.push(visit),
                Ok(Err(AdmissionError::Cancelled))     => cancelled += 1,
                Ok(Err(AdmissionError::Poisoned))      => return Err(SimError::Poisoned),
                Err(_)                                 => return Err(SimError::ActorPanicked(id)),
            }
        }

        visits.sort_by_key(|v| v.ticket);
        Ok(SimReport {
            visits,
            cancelled,
            elapsed: epoch.elapsed(),
        })
    }
}
