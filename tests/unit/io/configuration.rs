//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use pathgen::io::configuration::{
        CHECKPOINT_GROUPS, DEFAULT_FORUM_LINE_WIDTH, DEFAULT_MAX_CONSECUTIVE_FAILURES,
        DEFAULT_MAX_GENERATION_ATTEMPTS, FORUM_NEWLINE, MAP_EDITOR_URL, MAX_GRID_CELLS,
        MAX_GRID_DIMENSION,
    };
    use pathgen::spatial::tiles::{CHECKPOINTS, TELE_INS, TELE_OUTS};

    #[test]
    fn test_group_count_matches_catalog() {
        assert_eq!(CHECKPOINTS.len(), CHECKPOINT_GROUPS);
        assert_eq!(TELE_INS.len(), CHECKPOINT_GROUPS);
        assert_eq!(TELE_OUTS.len(), CHECKPOINT_GROUPS);
    }

    #[test]
    fn test_defaults_are_usable() {
        assert_eq!(DEFAULT_MAX_CONSECUTIVE_FAILURES, 100);
        assert!(DEFAULT_MAX_GENERATION_ATTEMPTS > 0);
        assert!(DEFAULT_FORUM_LINE_WIDTH > 0);
        assert!(MAX_GRID_DIMENSION >= 25);
        assert!(MAX_GRID_CELLS >= MAX_GRID_DIMENSION);
        assert!(MAX_GRID_CELLS < MAX_GRID_DIMENSION * MAX_GRID_DIMENSION);
    }

    #[test]
    fn test_forum_constants() {
        assert_eq!(FORUM_NEWLINE, "\r\n");
        assert!(MAP_EDITOR_URL.starts_with("http"));
        assert!(!MAP_EDITOR_URL.ends_with('?'));
    }
}
