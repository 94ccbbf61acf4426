//! Unit tests for rg-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert_eq!(AgentId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod cell {
    use crate::{Bounds, Cell, Direction};

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(-2, 5);
        let b = Cell::new(3, -1);
        assert_eq!(a.manhattan(b), 11);
        assert_eq!(b.manhattan(a), 11);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn neighbors_in_expansion_order() {
        let c = Cell::new(0, 0);
        assert_eq!(
            c.neighbors(),
            [Cell::new(1, 0), Cell::new(-1, 0), Cell::new(0, 1), Cell::new(0, -1)]
        );
    }

    #[test]
    fn direction_to_adjacent_only() {
        let c = Cell::new(4, 4);
        assert_eq!(c.direction_to(Cell::new(5, 4)), Some(Direction::PosX));
        assert_eq!(c.direction_to(Cell::new(4, 3)), Some(Direction::NegZ));
        assert_eq!(c.direction_to(Cell::new(5, 5)), None);
        assert_eq!(c.direction_to(c), None);
    }

    #[test]
    fn bounds_are_inclusive() {
        let b = Bounds::new(0, 4, 0, 4);
        assert!(b.contains(Cell::new(0, 0)));
        assert!(b.contains(Cell::new(4, 4)));
        assert!(!b.contains(Cell::new(5, 0)));
        assert!(!b.contains(Cell::new(0, -1)));
        assert_eq!(b.width(), 5);
        assert_eq!(b.cells().count(), 25);
    }

    #[test]
    fn default_bounds() {
        let b = Bounds::default();
        assert_eq!((b.min_x, b.max_x, b.min_z, b.max_z), (-2, 42, -2, 17));
        assert!(b.is_valid());
        assert!(!Bounds::new(3, 2, 0, 0).is_valid());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn every_interval() {
        assert!(Tick(0).every(30));
        assert!(Tick(60).every(30));
        assert!(!Tick(31).every(30));
        assert!(!Tick(0).every(0));
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(16);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_ms(), 32);
    }
}

#[cfg(test)]
mod config {
    use crate::{Bounds, SimConfig};

    #[test]
    fn defaults_validate() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.motion.move_steps, 20);
        assert_eq!(cfg.motion.landing_steps, 12);
        assert_eq!(cfg.shuffle.max_attempts, 40);
    }

    #[test]
    fn zero_move_steps_rejected() {
        let mut cfg = SimConfig::default();
        cfg.motion.move_steps = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_bounds_rejected() {
        let cfg = SimConfig { bounds: Bounds::new(1, 0, 0, 0), ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.move_delay(10), r2.move_delay(10));
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: Vec<u32> = (0..16).map(|_| r0.move_delay(1_000_000)).collect();
        let b: Vec<u32> = (0..16).map(|_| r1.move_delay(1_000_000)).collect();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn move_delay_in_range() {
        let mut rng = AgentRng::new(0, AgentId(3));
        for _ in 0..1000 {
            assert!(rng.move_delay(10) <= 10);
        }
        assert_eq!(rng.move_delay(0), 0);
    }

    #[test]
    fn distinct_pair_never_repeats_index() {
        let mut rng = SimRng::new(9);
        for _ in 0..1000 {
            let (a, b) = rng.distinct_pair(3).unwrap();
            assert_ne!(a, b);
            assert!(a < 3 && b < 3);
        }
        assert!(rng.distinct_pair(1).is_none());
        assert!(rng.distinct_pair(0).is_none());
    }
}
