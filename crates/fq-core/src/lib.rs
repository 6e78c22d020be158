//! `fq-core` — foundational types for the `rust_fq` fair-queue simulator.
//!
//! This crate is a dependency of every other `fq-*` crate.  It intentionally
//! has no `fq-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `ActorId`, `SlotId`                                   |
//! | [`ticket`]  | `Ticket` — the admission-order counter                |
//! | [`rng`]     | `ActorRng` (per-actor), `SimRng` (driver-level)       |
//! | [`sample`]  | `ServiceSampler`, `ExpSampler`, `FixedSampler`        |
//! | [`config`]  | `SimConfig`                                           |
//! | [`error`]   | `FqError`, `FqResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod sample;
pub mod ticket;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{FqError, FqResult};
pub use ids::{ActorId, SlotId};
pub use rng::{ActorRng, SimRng};
pub use sample::{exp_duration, ExpSampler, FixedSampler, ServiceSampler};
pub use ticket::Ticket;
