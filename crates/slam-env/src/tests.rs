//! Unit tests for the environment oracle and reachability analyzer.

#[cfg(test)]
mod tile {
    use crate::tile::{Observation, TileKind};

    #[test]
    fn traversable_set() {
        assert!(TileKind::Free.is_traversable());
        assert!(TileKind::EntryPoint.is_traversable());
        assert!(TileKind::DoorOpen.is_traversable());
        assert!(TileKind::Window.is_traversable());
        assert!(!TileKind::Wall.is_traversable());
        assert!(!TileKind::DoorClosed.is_traversable());
        assert!(!TileKind::OutOfBounds.is_traversable());
    }

    #[test]
    fn blocking_set() {
        assert!(TileKind::Wall.is_blocking());
        assert!(TileKind::DoorClosed.is_blocking());
        assert!(TileKind::OutOfBounds.is_blocking());
        assert!(!TileKind::Window.is_blocking());
    }

    #[test]
    fn code_roundtrip() {
        for code in 0u8..=6 {
            let tile = TileKind::from_code(code).unwrap();
            assert_eq!(tile.to_code(), code);
        }
        assert!(TileKind::from_code(7).is_none());
    }

    #[test]
    fn observation_default_is_unknown() {
        assert_eq!(Observation::default(), Observation::Unknown);
        assert!(Observation::Unknown.is_unknown());
        assert!(!Observation::Seen(TileKind::Free).is_unknown());
        assert_eq!(Observation::Seen(TileKind::Wall).tile(), Some(TileKind::Wall));
    }
}

#[cfg(test)]
mod grid {
    use slam_core::{Cell, SimRng};

    use crate::grid::EnvironmentBuilder;
    use crate::loader::parse_map;

    fn build(text: &str, seed: u64) -> crate::Environment {
        let rows = parse_map(text).unwrap();
        let mut rng = SimRng::new(seed);
        EnvironmentBuilder::from_rows(rows).unwrap().build(&mut rng).unwrap()
    }

    #[test]
    fn out_of_bounds_reads_as_out_of_bounds() {
        let env = build("1 1 1\n1 0 1\n1 1 1\n", 0);
        assert_eq!(env.tile(Cell::new(-1, 0)), crate::TileKind::OutOfBounds);
        assert_eq!(env.tile(Cell::new(3, 0)), crate::TileKind::OutOfBounds);
    }

    #[test]
    fn explicit_entry_point_is_used() {
        let env = build("1 1 1\n1 2 1\n1 1 1\n", 0);
        assert_eq!(env.entry_points(), &[Cell::new(1, 1)]);
    }

    #[test]
    fn missing_entry_point_falls_back_to_traversable_cell() {
        let env = build("1 1 1\n1 0 1\n1 1 1\n", 7);
        assert_eq!(env.entry_points().len(), 1);
        let chosen = env.entry_points()[0];
        assert_eq!(env.tile(chosen), crate::TileKind::EntryPoint);
    }

    #[test]
    fn inconsistent_row_width_is_rejected() {
        let rows = vec![vec![crate::TileKind::Free; 3], vec![crate::TileKind::Free; 2]];
        assert!(EnvironmentBuilder::from_rows(rows).is_err());
    }

    #[test]
    fn is_blocked_checks_peer_occupancy() {
        use std::collections::HashSet;
        let env = build("1 1 1\n1 2 1\n1 0 1\n1 1 1\n", 0);
        let mut occupied = HashSet::new();
        occupied.insert(Cell::new(1, 2));
        assert!(env.is_blocked(Cell::new(1, 2), &occupied));
        assert!(!env.is_blocked(Cell::new(1, 1), &occupied));
    }
}

#[cfg(test)]
mod reachability {
    use slam_core::{Cell, SimRng};

    use crate::grid::EnvironmentBuilder;
    use crate::loader::parse_map;
    use crate::reachability::compute_reachable_mask;

    #[test]
    fn open_room_is_fully_reachable_including_border_walls() {
        let text = "1 1 1 1 1\n1 2 0 0 1\n1 0 0 0 1\n1 1 1 1 1\n";
        let rows = parse_map(text).unwrap();
        let mut rng = SimRng::new(0);
        let env = EnvironmentBuilder::from_rows(rows).unwrap().build(&mut rng).unwrap();
        let mask = compute_reachable_mask(&env);

        // Interior walkable cells.
        assert!(mask.is_reachable(Cell::new(1, 1)));
        assert!(mask.is_reachable(Cell::new(3, 2)));
        // Border walls adjacent to the walkable interior are reachable too
        // (they can be observed, just not stepped on).
        assert!(mask.is_reachable(Cell::new(0, 1)));
        assert!(mask.is_reachable(Cell::new(2, 0)));
    }

    #[test]
    fn unreachable_pocket_is_excluded() {
        // A 2x2 pocket (rows 1-2, cols 5-6) fully walled off from the rest.
        let text = concat!(
            "1 1 1 1 1 1 1 1\n",
            "1 2 0 0 1 1 1 1\n",
            "1 0 0 0 1 0 0 1\n",
            "1 1 1 1 1 0 0 1\n",
            "1 1 1 1 1 1 1 1\n",
        );
        let rows = parse_map(text).unwrap();
        let mut rng = SimRng::new(0);
        let env = EnvironmentBuilder::from_rows(rows).unwrap().build(&mut rng).unwrap();
        let mask = compute_reachable_mask(&env);

        assert!(!mask.is_reachable(Cell::new(5, 2)));
        assert!(!mask.is_reachable(Cell::new(6, 2)));
        assert!(mask.is_reachable(Cell::new(1, 1)));
    }
}
