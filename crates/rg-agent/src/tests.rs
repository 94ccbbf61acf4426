//! Unit tests for rg-agent.

#[cfg(test)]
mod helpers {
    use rg_core::Cell;

    use crate::{AgentRngs, AgentStore, AgentStoreBuilder};

    pub fn store_at(cells: &[(i32, i32)]) -> (AgentStore, AgentRngs) {
        AgentStoreBuilder::new(7)
            .targets(cells.iter().map(|&c| Cell::from(c)).collect())
            .build()
    }

    pub fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }
}

// ── AgentStoreBuilder ─────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use rg_core::{AgentId, Cell};

    use super::helpers::store_at;
    use crate::{AgentStoreBuilder, ColorTag, PALETTE};

    #[test]
    fn one_settled_agent_per_target() {
        let (store, rngs) = store_at(&[(0, 0), (3, 1), (-2, 5)]);
        assert_eq!(store.count, 3);
        assert_eq!(rngs.len(), 3);
        assert_eq!(store.cell[1], Cell::new(3, 1));
        assert_eq!(store.cell, store.destination);
        assert!(store.phase.iter().all(|p| p.is_settled()));
        assert_eq!(store.unsettled_count(), 0);
    }

    #[test]
    fn colors_cycle_through_palette() {
        let cells: Vec<(i32, i32)> = (0..8).map(|x| (x, 0)).collect();
        let (store, _) = store_at(&cells);
        assert_eq!(store.color[0], PALETTE[0]);
        assert_eq!(store.color[5], PALETTE[5]);
        assert_eq!(store.color[6], PALETTE[0]);
        assert_eq!(store.color[7], PALETTE[1]);
    }

    #[test]
    fn custom_palette() {
        let (store, _) = AgentStoreBuilder::new(0)
            .targets(vec![Cell::new(0, 0), Cell::new(1, 0)])
            .palette(vec![ColorTag(0x123456)])
            .build();
        assert_eq!(store.color, vec![ColorTag(0x123456); 2]);
        assert_eq!(store.color[0].to_string(), "#123456");
    }

    #[test]
    fn empty_target_list() {
        let (store, rngs) = AgentStoreBuilder::new(0).build();
        assert!(store.is_empty());
        assert!(rngs.is_empty());
        assert!(!store.contains(AgentId(0)));
    }
}

// ── Phase state machine ───────────────────────────────────────────────────────

#[cfg(test)]
mod phase {
    use rg_core::{AgentId, Cell, MotionConfig};

    use super::helpers::store_at;
    use crate::{MoveState, Phase, PhaseEvent};

    const A: AgentId = AgentId(0);

    #[test]
    fn settled_agent_does_not_move() {
        let (mut store, _) = store_at(&[(0, 0)]);
        assert!(!store.wants_move(A));
        assert!(!store.begin_move(A, Cell::new(1, 0), 0));
        assert_eq!(store.advance(A, &MotionConfig::default()), None);
    }

    #[test]
    fn assign_destination_wakes_settled_agent() {
        let (mut store, _) = store_at(&[(0, 0)]);
        store.assign_destination(A, Cell::new(2, 0));
        assert_eq!(store.phase[0], Phase::Ready);
        assert!(store.wants_move(A));

        // Re-pointing at the current cell leaves nothing to do.
        let (mut store, _) = store_at(&[(0, 0)]);
        store.assign_destination(A, Cell::new(0, 0));
        assert!(store.is_settled(A));
    }

    #[test]
    fn begin_move_rejects_non_adjacent_target() {
        let (mut store, _) = store_at(&[(0, 0)]);
        store.assign_destination(A, Cell::new(3, 0));
        assert!(!store.begin_move(A, Cell::new(2, 0), 0));
        assert!(!store.begin_move(A, Cell::new(1, 1), 0));
        assert!(store.begin_move(A, Cell::new(1, 0), 0));
        // Already moving: a second commit is refused.
        assert!(!store.begin_move(A, Cell::new(0, 1), 0));
    }

    #[test]
    fn delay_elapses_before_progress() {
        let motion = MotionConfig::default();
        let (mut store, _) = store_at(&[(0, 0)]);
        store.assign_destination(A, Cell::new(1, 0));
        store.begin_move(A, Cell::new(1, 0), 3);

        for _ in 0..3 {
            assert_eq!(store.advance(A, &motion), None);
        }
        assert_eq!(
            store.phase[0],
            Phase::Moving(MoveState { from: Cell::new(0, 0), to: Cell::new(1, 0), step: 0, delay: 0 })
        );
        assert_eq!(store.phase[0].progress(&motion), 0.0);

        store.advance(A, &motion);
        assert!((store.phase[0].progress(&motion) - 1.0 / 20.0).abs() < 1e-6);
    }

    #[test]
    fn full_move_then_landing_then_settled() {
        let motion = MotionConfig::default();
        let (mut store, _) = store_at(&[(0, 0)]);
        store.assign_destination(A, Cell::new(1, 0));
        store.begin_move(A, Cell::new(1, 0), 0);

        for _ in 0..motion.move_steps - 1 {
            assert_eq!(store.advance(A, &motion), None);
            assert_eq!(store.cell[0], Cell::new(0, 0), "cell changes only on completion");
        }
        assert_eq!(
            store.advance(A, &motion),
            Some(PhaseEvent::Arrived { cell: Cell::new(1, 0), at_destination: true })
        );
        assert_eq!(store.phase[0], Phase::Landing { step: 0 });

        for _ in 0..motion.landing_steps - 1 {
            assert_eq!(store.advance(A, &motion), None);
        }
        assert_eq!(store.advance(A, &motion), Some(PhaseEvent::Landed));
        assert!(store.is_settled(A));
        assert_eq!(store.cell[0], store.destination[0]);
    }

    #[test]
    fn intermediate_arrival_skips_landing() {
        let motion = MotionConfig { move_steps: 2, ..MotionConfig::default() };
        let (mut store, _) = store_at(&[(0, 0)]);
        store.assign_destination(A, Cell::new(2, 0));
        store.begin_move(A, Cell::new(1, 0), 0);
        store.advance(A, &motion);
        assert_eq!(
            store.advance(A, &motion),
            Some(PhaseEvent::Arrived { cell: Cell::new(1, 0), at_destination: false })
        );
        assert_eq!(store.phase[0], Phase::Ready);
        assert!(store.wants_move(A));
    }

    #[test]
    fn landing_with_repointed_destination_returns_to_ready() {
        let motion = MotionConfig { move_steps: 1, landing_steps: 1, ..MotionConfig::default() };
        let (mut store, _) = store_at(&[(0, 0)]);
        store.assign_destination(A, Cell::new(1, 0));
        store.begin_move(A, Cell::new(1, 0), 0);
        store.advance(A, &motion); // arrive → Landing
        store.assign_destination(A, Cell::new(4, 0));
        assert_eq!(store.advance(A, &motion), Some(PhaseEvent::Landed));
        assert_eq!(store.phase[0], Phase::Ready);
    }

    #[test]
    fn ready_at_destination_settles() {
        let (mut store, _) = store_at(&[(0, 0)]);
        store.assign_destination(A, Cell::new(1, 0));
        store.assign_destination(A, Cell::new(0, 0));
        assert_eq!(store.phase[0], Phase::Ready);
        assert!(!store.wants_move(A));
        assert_eq!(store.advance(A, &MotionConfig::default()), Some(PhaseEvent::Settled));
        assert!(store.is_settled(A));
    }

    #[test]
    fn occupancy_includes_reserved_target() {
        let (mut store, _) = store_at(&[(0, 0), (5, 5)]);
        store.assign_destination(A, Cell::new(1, 0));
        store.begin_move(A, Cell::new(1, 0), 4);
        let entries: Vec<_> = store.occupancy_entries().collect();
        assert_eq!(
            entries,
            vec![
                (AgentId(0), Cell::new(0, 0)),
                (AgentId(0), Cell::new(1, 0)),
                (AgentId(1), Cell::new(5, 5)),
            ]
        );
        assert_eq!(store.moving_count(), 1);
    }

    #[test]
    fn swap_destinations_twice_restores() {
        let (mut store, _) = store_at(&[(0, 0), (5, 5)]);
        store.swap_destinations(AgentId(0), AgentId(1));
        assert_eq!(store.destination[0], Cell::new(5, 5));
        assert!(store.is_settled(A), "speculative swap leaves phase alone");
        store.swap_destinations(AgentId(0), AgentId(1));
        assert_eq!(store.destination, vec![Cell::new(0, 0), Cell::new(5, 5)]);
    }

    #[test]
    fn mark_ready_only_affects_settled() {
        let (mut store, _) = store_at(&[(0, 0), (5, 5)]);
        store.swap_destinations(AgentId(0), AgentId(1));
        store.mark_ready(A);
        assert_eq!(store.phase[0], Phase::Ready);
        assert_eq!(store.settled_agents().collect::<Vec<_>>(), vec![AgentId(1)]);
    }
}

// ── Pose ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pose {
    use rg_core::{Cell, MotionConfig};

    use super::helpers::approx;
    use crate::pose::{landing_height, world_center};
    use crate::{MoveState, Phase, Pose};

    fn moving(from: Cell, to: Cell, step: u32) -> Phase {
        Phase::Moving(MoveState { from, to, step, delay: 0 })
    }

    #[test]
    fn resting_pose_uses_world_offset() {
        let motion = MotionConfig::default();
        let pose = Pose::resting(Cell::new(20, 7), &motion);
        assert!(approx(pose.position[0], 0.0));
        assert!(approx(pose.position[1], 0.475));
        assert!(approx(pose.position[2], 0.0));
        assert_eq!(pose.rotation, Pose::IDENTITY_ROTATION);
    }

    #[test]
    fn rolling_starts_at_rest() {
        let motion = MotionConfig::default();
        let from = Cell::new(3, 3);
        let pose = Pose::for_phase(from, &moving(from, Cell::new(4, 3), 0), &motion);
        let rest = world_center(from, &motion);
        for k in 0..3 {
            assert!(approx(pose.position[k], rest[k]));
        }
        assert!(approx(pose.rotation[3], 1.0));
    }

    #[test]
    fn rolling_completes_one_cube_edge_along_each_direction() {
        let motion = MotionConfig::default();
        let s = motion.cube_size;
        let from = Cell::new(0, 0);
        let rest = world_center(from, &motion);

        for (to, dx, dz) in [
            (Cell::new(1, 0), s, 0.0),
            (Cell::new(-1, 0), -s, 0.0),
            (Cell::new(0, 1), 0.0, s),
            (Cell::new(0, -1), 0.0, -s),
        ] {
            let pose = Pose::for_phase(from, &moving(from, to, motion.move_steps), &motion);
            assert!(approx(pose.position[0], rest[0] + dx), "to {to}: x {}", pose.position[0]);
            assert!(approx(pose.position[1], s / 2.0), "to {to}: y {}", pose.position[1]);
            assert!(approx(pose.position[2], rest[2] + dz), "to {to}: z {}", pose.position[2]);
        }
    }

    #[test]
    fn rolling_lifts_centre_mid_move() {
        let motion = MotionConfig::default();
        let from = Cell::new(0, 0);
        let pose = Pose::for_phase(from, &moving(from, Cell::new(1, 0), motion.move_steps / 2), &motion);
        // At 45° the centre sits h·√2 above the pivot edge.
        let h = motion.cube_size / 2.0;
        assert!(approx(pose.position[1], h * std::f32::consts::SQRT_2));

        let q = pose.rotation;
        let norm = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
        assert!(approx(norm, 1.0));
        assert!(q[2] < 0.0, "+x roll turns about -z");
    }

    #[test]
    fn landing_bounce_peaks_mid_tween() {
        assert!(approx(landing_height(0.0, 0.3), 0.0));
        assert!(approx(landing_height(0.5, 0.3), 0.3));
        assert!(approx(landing_height(1.0, 0.3), 0.0));

        let motion = MotionConfig::default();
        let cell = Cell::new(1, 1);
        let pose = Pose::for_phase(cell, &Phase::Landing { step: motion.landing_steps / 2 }, &motion);
        assert!(approx(pose.position[1], motion.cube_size / 2.0 + motion.bounce_height));
    }

    #[test]
    fn view_carries_phase_and_progress() {
        let motion = MotionConfig::default();
        let (mut store, _) = super::helpers::store_at(&[(0, 0)]);
        let id = rg_core::AgentId(0);
        store.assign_destination(id, Cell::new(1, 0));
        store.begin_move(id, Cell::new(1, 0), 0);
        store.advance(id, &motion);

        let view = store.view(id, &motion);
        assert_eq!(view.cell, Cell::new(0, 0));
        assert_eq!(view.destination, Cell::new(1, 0));
        assert_eq!(view.phase.as_str(), "moving");
        assert!(approx(view.progress, 0.05));
    }
}
