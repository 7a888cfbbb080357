//! Tests for error messages and helper constructors

#[cfg(test)]
mod tests {
    use std::error::Error;

    use pathgen::MapError;
    use pathgen::io::error::{invalid_argument, malformed};
    use pathgen::spatial::tiles::ROCK;

    #[test]
    fn test_invalid_argument_message() {
        let error = invalid_argument("factor", &0, &"must be at least 1");
        assert_eq!(
            error,
            MapError::InvalidArgument {
                parameter: "factor",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            }
        );
        assert_eq!(
            error.to_string(),
            "Invalid argument 'factor' = '0': must be at least 1"
        );
    }

    #[test]
    fn test_placement_exhausted_message() {
        let error = MapError::PlacementExhausted {
            tile: ROCK,
            requested: 10,
            placed: 3,
            failures: 100,
        };
        let message = error.to_string();
        assert!(message.contains("'r'"));
        assert!(message.contains("100 consecutive misses"));
        assert!(message.contains("3 of 10 placed"));
    }

    #[test]
    fn test_malformed_and_exhausted_messages() {
        assert_eq!(
            malformed("walls", &"'x' is not a non-negative integer").to_string(),
            "Malformed map code in walls: 'x' is not a non-negative integer"
        );
        assert_eq!(
            MapError::GenerationExhausted {
                generator: "Edge Case".to_string(),
                attempts: 7,
            }
            .to_string(),
            "Generator 'Edge Case' produced no valid map in 7 attempts"
        );
    }

    #[test]
    fn test_usable_as_error_trait_object() {
        let boxed: Box<dyn Error> = Box::new(malformed("body", &"empty token"));
        assert!(boxed.source().is_none());
        assert!(boxed.to_string().contains("empty token"));
    }
}
