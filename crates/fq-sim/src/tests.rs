//! Integration tests for the simulation driver.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use fq_core::{ActorId, SimConfig, SlotId, Ticket};
use fq_protocol::{AdmissionObserver, Snapshot};

use crate::{SimBuilder, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(actor_count: usize, capacity: usize) -> SimConfig {
    SimConfig {
        actor_count,
        capacity,
        mean_interarrival: Duration::from_millis(1),
        mean_service:      Duration::from_millis(2),
        seed:              42,
        deadline:          None,
    }
}

/// Records the admission order, as seen under the lock.
struct RecordAdmissions(Arc<Mutex<Vec<Ticket>>>);

impl AdmissionObserver for RecordAdmissions {
    fn on_admission(&mut self, _a: ActorId, t: Ticket, _s: SlotId, _snap: &Snapshot) {
        self.0.lock().unwrap().push(t);
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_valid_config() {
        let sim = SimBuilder::new(test_config(3, 1)).build().unwrap();
        assert_eq!(sim.admission().capacity(), 1);
    }

    #[test]
    fn zero_capacity_without_deadline_rejected() {
        let result = SimBuilder::new(test_config(3, 0)).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn zero_capacity_with_deadline_accepted() {
        let mut config = test_config(3, 0);
        config.deadline = Some(Duration::from_millis(30));
        assert!(SimBuilder::new(config).build().is_ok());
    }
}

// ── Full runs ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn all_actors_depart() {
        let report = SimBuilder::new(test_config(6, 2)).build().unwrap().run().unwrap();
        assert_eq!(report.completed(), 6);
        assert_eq!(report.cancelled, 0);
    }

    #[test]
    fn tickets_dense_and_report_sorted() {
        let report = SimBuilder::new(test_config(8, 3)).build().unwrap().run().unwrap();
        let tickets: Vec<u64> = report.visits.iter().map(|v| v.ticket.0).collect();
        assert_eq!(tickets, (0..8u64).collect::<Vec<_>>());
    }

    #[test]
    fn admission_order_is_ticket_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let report = SimBuilder::new(test_config(5, 1))
            .observer(Box::new(RecordAdmissions(Arc::clone(&order))))
            .build()
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(report.completed(), 5);
        let order = order.lock().unwrap();
        assert_eq!(*order, (0..5).map(Ticket).collect::<Vec<_>>());
    }

    #[test]
    fn empty_run_reports_zero() {
        let report = SimBuilder::new(test_config(0, 1)).build().unwrap().run().unwrap();
        assert_eq!(report.completed(), 0);
        assert_eq!(report.mean_wait(), Duration::ZERO);
        assert_eq!(report.max_wait(), Duration::ZERO);
    }

    #[test]
    fn wait_statistics_consistent() {
        let report = SimBuilder::new(test_config(6, 1)).build().unwrap().run().unwrap();
        assert!(report.mean_wait() <= report.max_wait());
        assert!(report.elapsed >= report.max_wait());
    }
}

// ── Deadline / cancellation ───────────────────────────────────────────────────

#[cfg(test)]
mod deadline_tests {
    use super::*;

    #[test]
    fn zero_capacity_run_cancels_everyone() {
        let mut config = test_config(3, 0);
        config.deadline = Some(Duration::from_millis(30));
        let report = SimBuilder::new(config).build().unwrap().run().unwrap();
        assert_eq!(report.completed(), 0);
        assert_eq!(report.cancelled, 3);
    }

    #[test]
    fn generous_deadline_cancels_nobody() {
        let mut config = test_config(4, 2);
        config.deadline = Some(Duration::from_secs(30));
        let report = SimBuilder::new(config).build().unwrap().run().unwrap();
        assert_eq!(report.completed(), 4);
        assert_eq!(report.cancelled, 0);
    }
}
