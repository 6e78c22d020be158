use fq_core::{ActorId, FqError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] FqError),

    #[error("actor {0} panicked during the run")]
    ActorPanicked(ActorId),

    #[error("shared admission state was poisoned")]
    Poisoned,
}

pub type SimResult<T> = Result<T, SimError>;
