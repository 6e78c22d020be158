//! Unit tests for fq-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ActorId, SlotId};

    #[test]
    fn index_roundtrip() {
        let id = ActorId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ActorId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(ActorId(0) < ActorId(1));
        assert!(SlotId(3) > SlotId(2));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(ActorId::INVALID.0, u32::MAX);
        assert_eq!(SlotId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(ActorId(7).to_string(), "ActorId(7)");
        assert_eq!(SlotId(1).to_string(), "SlotId(1)");
    }
}

#[cfg(test)]
mod ticket {
    use crate::Ticket;

    #[test]
    fn arithmetic() {
        let t = Ticket(10);
        assert_eq!(t.next(), Ticket(11));
        assert_eq!(t + 5, Ticket(15));
        assert_eq!(Ticket(15) - Ticket(10), 5u64);
        assert_eq!(t.index(), 10);
    }

    #[test]
    fn ordering_and_zero() {
        assert!(Ticket::ZERO < Ticket(1));
        assert_eq!(Ticket::default(), Ticket::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(Ticket(42).to_string(), "#42");
    }
}

#[cfg(test)]
mod rng {
    use crate::{ActorId, ActorRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = ActorRng::new(12345, ActorId(0));
        let mut r2 = ActorRng::new(12345, ActorId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_actors_differ() {
        let mut r0 = ActorRng::new(1, ActorId(0));
        let mut r1 = ActorRng::new(1, ActorId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "streams for adjacent actors should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = ActorRng::new(0, ActorId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn child_streams_diverge() {
        let mut root = SimRng::new(7);
        let mut a = root.child(0);
        let mut b = root.child(1);
        let x: u64 = a.random();
        let y: u64 = b.random();
        assert_ne!(x, y);
    }
}

#[cfg(test)]
mod sample {
    use std::time::Duration;

    use crate::{exp_duration, ActorId, ActorRng, ExpSampler, FixedSampler, ServiceSampler, SimRng};

    #[test]
    fn exp_never_negative_and_finite() {
        let mut s = ExpSampler::for_actor(9, ActorId(3));
        for _ in 0..10_000 {
            let d = s.sample(Duration::from_millis(100));
            assert!(d < Duration::from_secs(60), "tail draw unreasonably large: {d:?}");
        }
    }

    #[test]
    fn exp_zero_mean_is_zero() {
        let mut s = ExpSampler::for_actor(9, ActorId(0));
        assert_eq!(s.sample(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn exp_deterministic_per_actor() {
        let mean = Duration::from_millis(250);
        let mut a = ExpSampler::for_actor(42, ActorId(5));
        // Building from an explicit stream is equivalent.
        let mut b = ExpSampler::from_rng(ActorRng::new(42, ActorId(5)));
        for _ in 0..50 {
            assert_eq!(a.sample(mean), b.sample(mean));
        }
    }

    #[test]
    fn exp_mean_roughly_matches() {
        // 20k draws at mean 100 ms should land well within 10% of the mean.
        let mean = Duration::from_millis(100);
        let mut s = ExpSampler::for_actor(1, ActorId(0));
        let total: f64 = (0..20_000).map(|_| s.sample(mean).as_secs_f64()).sum();
        let observed = total / 20_000.0;
        assert!(
            (observed - 0.1).abs() < 0.01,
            "observed mean {observed} too far from 0.1"
        );
    }

    #[test]
    fn driver_stream_deterministic() {
        let mean = Duration::from_millis(40);
        let mut a = SimRng::new(3).child(1);
        let mut b = SimRng::new(3).child(1);
        for _ in 0..50 {
            assert_eq!(exp_duration(&mut a, mean), exp_duration(&mut b, mean));
        }
    }

    #[test]
    fn fixed_returns_mean() {
        let mut s = FixedSampler;
        assert_eq!(s.sample(Duration::from_millis(7)), Duration::from_millis(7));
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::SimConfig;

    fn base() -> SimConfig {
        SimConfig {
            actor_count:       5,
            capacity:          2,
            mean_interarrival: Duration::from_millis(10),
            mean_service:      Duration::from_millis(20),
            seed:              42,
            deadline:          None,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn zero_capacity_without_deadline_rejected() {
        let cfg = SimConfig { capacity: 0, ..base() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_capacity_with_deadline_accepted() {
        let cfg = SimConfig {
            capacity: 0,
            deadline: Some(Duration::from_millis(50)),
            ..base()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn oversized_capacity_rejected() {
        let cfg = SimConfig { capacity: usize::from(u16::MAX), ..base() };
        assert!(cfg.validate().is_err());
    }
}
