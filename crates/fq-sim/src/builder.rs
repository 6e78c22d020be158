//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use fq_core::SimConfig;
use fq_protocol::{Admission, AdmissionObserver};

use crate::{Sim, SimResult};

/// Builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — actor count, capacity, means, seed, optional deadline.
///
/// # Optional inputs
///
/// | Method          | Default                      |
/// |-----------------|------------------------------|
/// | `.observer(o)`  | No observer (silent run)     |
///
/// # Example
///
/// ```rust,ignore
/// let report = SimBuilder::new(config)
///     .observer(Box::new(my_observer))
///     .build()?
///     .run()?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    observer: Option<Box<dyn AdmissionObserver>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, observer: None }
    }

    /// Install an observer; it will be invoked under the shared lock after
    /// every arrival, admission, and release.
    pub fn observer(mut self, observer: Box<dyn AdmissionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Validate the configuration and construct a ready-to-run [`Sim`].
    ///
    /// Fails before any thread starts if the run is unrepresentable
    /// (capacity or actor count out of range, or a zero-capacity run with
    /// no deadline, which could never terminate).
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let admission = match self.observer {
            Some(observer) => Admission::with_observer(self.config.capacity, observer),
            None           => Admission::new(self.config.capacity),
        };

        Ok(Sim::new(self.config, Arc::new(admission)))
    }
}
