//! Tests for header counts derived from tiles

#[cfg(test)]
mod tests {
    use pathgen::algorithm::census::HeaderCounts;
    use pathgen::spatial::MapGrid;
    use pathgen::spatial::tiles::{CHECKPOINTS, ROCK, ROCK2, ROCK3, TELE_INS, TELE_OUTS};

    #[test]
    fn test_empty_grid_counts_nothing() {
        let Ok(grid) = MapGrid::new(4, 4, 0, "") else {
            unreachable!("valid grid rejected");
        };
        assert_eq!(grid.header_counts(), HeaderCounts::default());
    }

    // Repeated checkpoint symbols count once per group
    #[test]
    fn test_checkpoints_count_distinct_groups() {
        let Ok(mut grid) = MapGrid::new(5, 2, 0, "") else {
            unreachable!("valid grid rejected");
        };
        assert!(grid.set(CHECKPOINTS[0], [0, 1, 2], [0]).is_ok());
        assert!(grid.set_single(CHECKPOINTS[2], 4, 1).is_ok());

        assert_eq!(grid.header_counts().checkpoints, 2);
    }

    #[test]
    fn test_rocks_count_two_variants() {
        let Ok(mut grid) = MapGrid::new(3, 3, 0, "") else {
            unreachable!("valid grid rejected");
        };
        assert!(grid.set(ROCK, 0..3, [0]).is_ok());
        assert!(grid.set(ROCK2, [0, 1], [1]).is_ok());
        assert!(grid.set_single(ROCK3, 2, 2).is_ok());

        assert_eq!(grid.header_counts().rocks, 5);
    }

    // Teleporters are counted by their inputs only
    #[test]
    fn test_teleporters_count_inputs() {
        let Ok(mut grid) = MapGrid::new(4, 2, 0, "") else {
            unreachable!("valid grid rejected");
        };
        assert!(grid.set_single(TELE_INS[1], 0, 0).is_ok());
        assert!(grid.set(TELE_OUTS[1], [1, 2], [0]).is_ok());
        assert!(grid.set_single(TELE_OUTS[3], 0, 1).is_ok());

        let counts = grid.header_counts();
        assert_eq!(counts.teleporters, 1);
        assert_eq!(counts.checkpoints, 0);
        assert_eq!(counts.rocks, 0);
    }
}
