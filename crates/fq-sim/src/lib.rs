//! `fq-sim` — drives a full run of the fair-queue simulation.
//!
//! # Run structure
//!
//! ```text
//! build    — validate SimConfig, construct the Admission monitor
//! spawn    — one OS thread per actor, a sampled exponential gap between
//!            consecutive spawns (arrival staggering)
//! watchdog — optional: a deadline thread that cancels all waiters
//! join     — collect every actor's Visit (or cancellation)
//! report   — visits sorted by ticket, wait statistics, elapsed time
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use fq_core::SimConfig;
//! use fq_sim::SimBuilder;
//!
//! let config = SimConfig {
//!     actor_count:       20,
//!     capacity:          2,
//!     mean_interarrival: Duration::from_millis(40),
//!     mean_service:      Duration::from_millis(60),
//!     seed:              42,
//!     deadline:          None,
//! };
//! let report = SimBuilder::new(config).build()?.run()?;
//! println!("{} visits, mean wait {:?}", report.completed(), report.mean_wait());
//! ```

pub mod builder;
pub mod error;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use sim::{Sim, SimReport};
