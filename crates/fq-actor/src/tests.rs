//! Tests for the actor lifecycle.

#[cfg(test)]
mod lifecycle_tests {
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    use fq_core::{ActorId, FixedSampler, SlotId, Ticket};
    use fq_protocol::{Admission, AdmissionError};

    use crate::{Actor, Phase};

    #[test]
    fn single_visit_completes() {
        let adm = Admission::new(1);
        let mut actor = Actor::new(ActorId(0), Duration::ZERO, FixedSampler);
        assert_eq!(actor.phase(), Phase::Arrived);

        let visit = actor.run(&adm, Instant::now()).unwrap();
        assert_eq!(actor.phase(), Phase::Departed);
        assert_eq!(visit.actor, ActorId(0));
        assert_eq!(visit.ticket, Ticket::ZERO);
        assert_eq!(visit.slot, SlotId(0));
        assert!(visit.arrived_at <= visit.admitted_at);
        assert!(visit.admitted_at <= visit.departed_at);

        let snap = adm.snapshot().unwrap();
        assert_eq!(snap.free, 1);
        assert_eq!(snap.head, Ticket(1));
    }

    #[test]
    fn visit_durations_derive_from_timestamps() {
        let adm = Admission::new(1);
        let mut actor = Actor::new(ActorId(3), Duration::from_millis(5), FixedSampler);
        let visit = actor.run(&adm, Instant::now()).unwrap();
        assert!(visit.held() >= Duration::from_millis(5));
        assert_eq!(visit.waited() + visit.held(), visit.departed_at - visit.arrived_at);
    }

    #[test]
    fn cancelled_actor_occupies_nothing() {
        let adm = Arc::new(Admission::new(0));
        let handle = {
            let adm = Arc::clone(&adm);
            thread::spawn(move || {
                let mut actor = Actor::new(ActorId(0), Duration::ZERO, FixedSampler);
                actor.run(&adm, Instant::now())
            })
        };
        thread::sleep(Duration::from_millis(20));
        adm.shutdown();
        assert!(matches!(handle.join().unwrap(), Err(AdmissionError::Cancelled)));
        let snap = adm.snapshot().unwrap();
        assert_eq!(snap.head, Ticket::ZERO);
        assert_eq!(snap.occupied(), 0);
    }

    #[test]
    fn two_actors_share_one_slot_in_order() {
        let adm = Arc::new(Admission::new(1));
        let epoch = Instant::now();
        let mut handles = Vec::new();
        for i in 0..2u32 {
            let adm = Arc::clone(&adm);
            handles.push(thread::spawn(move || {
                let mut actor =
                    Actor::new(ActorId(i), Duration::from_millis(5), FixedSampler);
                actor.run(&adm, epoch).unwrap()
            }));
            thread::sleep(Duration::from_millis(1));
        }
        let visits: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let mut tickets: Vec<_> = visits.iter().map(|v| v.ticket.0).collect();
        tickets.sort_unstable();
        assert_eq!(tickets, vec![0, 1]);
        // Both used the only slot.
        assert!(visits.iter().all(|v| v.slot == SlotId(0)));
    }
}
