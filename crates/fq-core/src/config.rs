//! Top-level simulation configuration.

use std::time::Duration;

use crate::{FqError, FqResult, SlotId};

/// Immutable inputs for one simulation run.
///
/// Typically assembled by a CLI or test harness and passed to the driver at
/// construction; nothing in the core mutates it afterwards.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// How many actors arrive over the course of the run.
    pub actor_count: usize,

    /// Number of interchangeable slots in the resource pool.  Fixed for the
    /// whole run.
    pub capacity: usize,

    /// Mean gap between consecutive arrivals (exponentially distributed).
    pub mean_interarrival: Duration,

    /// Mean time an actor occupies its slot (exponentially distributed).
    pub mean_service: Duration,

    /// Master RNG seed.  The same seed always produces identical samples.
    pub seed: u64,

    /// Optional wall-clock deadline: when it expires, all still-waiting
    /// actors are cancelled cooperatively.  `None` lets the run go to
    /// completion.
    pub deadline: Option<Duration>,
}

impl SimConfig {
    /// Check the run is representable and can terminate.
    ///
    /// A zero-capacity pool admits nobody, so such a run is only accepted
    /// when a deadline guarantees the waiting actors are eventually
    /// cancelled.
    pub fn validate(&self) -> FqResult<()> {
        if self.actor_count > u32::MAX as usize {
            return Err(FqError::Config(format!(
                "actor count {} exceeds the ID space",
                self.actor_count
            )));
        }
        if self.capacity >= SlotId::INVALID.index() {
            return Err(FqError::Config(format!(
                "capacity {} exceeds the slot ID space",
                self.capacity
            )));
        }
        if self.capacity == 0 && self.deadline.is_none() {
            return Err(FqError::Config(
                "capacity is 0 and no deadline is set; the run could never terminate".into(),
            ));
        }
        Ok(())
    }
}
