//! Duration samplers for arrival gaps and service times.
//!
//! The protocol itself never cares how long anything takes — it only needs
//! "produce a non-negative duration around a mean".  Samplers own their RNG
//! stream so two samplers never interleave draws, which keeps runs
//! reproducible for a fixed seed regardless of thread scheduling.

use std::time::Duration;

use crate::{ActorId, ActorRng, SimRng};

/// Produces non-negative durations around a mean.
///
/// Implementations must be deterministic given their seed: the n-th sample
/// for a fixed mean is always the same value.
pub trait ServiceSampler: Send {
    /// Draw the next duration.  Never negative; a zero mean samples to zero.
    fn sample(&mut self, mean: Duration) -> Duration;
}

// ── Exponential ───────────────────────────────────────────────────────────────

/// Inverse-transform exponential draw: `-mean * ln(U)`, `U ∈ (0, 1]`.
///
/// `u01` must be uniform in `[0, 1)`; it is flipped to `(0, 1]` so `ln`
/// never sees zero.
fn exp_from_unit(u01: f64, mean: Duration) -> Duration {
    let mean_secs = mean.as_secs_f64();
    if mean_secs <= 0.0 {
        return Duration::ZERO;
    }
    let u = 1.0 - u01;
    let x = -mean_secs * u.ln();
    Duration::from_secs_f64(x.max(0.0))
}

/// One exponential draw from a driver-level stream.
///
/// Used by the simulation driver for inter-arrival gaps; actors use
/// [`ExpSampler`] instead so each holds its own stream.
pub fn exp_duration(rng: &mut SimRng, mean: Duration) -> Duration {
    exp_from_unit(rng.random::<f64>(), mean)
}

/// Exponential (memoryless) sampler over a per-actor stream.
///
/// Models the classic M/M/c-style service time: most visits are short, a
/// long tail are not.  Deterministic for a fixed `(global_seed, actor)`
/// pair.
pub struct ExpSampler {
    rng: ActorRng,
}

impl ExpSampler {
    /// Sampler whose stream is derived from the run seed and the actor ID.
    pub fn for_actor(global_seed: u64, actor: ActorId) -> Self {
        Self { rng: ActorRng::new(global_seed, actor) }
    }

    /// Sampler over an explicitly constructed stream.
    pub fn from_rng(rng: ActorRng) -> Self {
        Self { rng }
    }
}

impl ServiceSampler for ExpSampler {
    fn sample(&mut self, mean: Duration) -> Duration {
        exp_from_unit(self.rng.random::<f64>(), mean)
    }
}

// ── Fixed ─────────────────────────────────────────────────────────────────────

/// Returns the mean verbatim on every draw.
///
/// Useful in tests and constant-rate runs where stochastic timing would only
/// add noise.
#[derive(Default)]
pub struct FixedSampler;

impl ServiceSampler for FixedSampler {
    fn sample(&mut self, mean: Duration) -> Duration {
        mean
    }
}
