//! Tests for map code encoding and decoding

#[cfg(test)]
mod tests {
    use pathgen::MapError;
    use pathgen::io::codec::{MapHeader, decode, encode, parse_header};
    use pathgen::spatial::MapGrid;
    use pathgen::spatial::tiles::{
        CHECKPOINTS, EMPTY, FINISH, GREEN_START, ROCK, ROCK2, TELE_INS, TELE_OUTS,
    };

    const SIMPLE: &str = "13x7.c1.r10.w9.t0.Simple.:0s.0r.10f.0s.5r.5f.0s.0r.6r.1r.1f.0s.11f.\
                          0s.2r.4a.3f.0s.1r.4r.4f.0s.2r.6r.1f.";

    fn grid(width: usize, height: usize) -> MapGrid {
        MapGrid::new(width, height, 0, "").unwrap_or_else(|error| {
            unreachable!("valid grid rejected: {error}");
        })
    }

    #[test]
    fn test_encode_empty_grid() {
        assert_eq!(encode(&grid(3, 2)), "3x2.c0.r0.w0.t0..:");
    }

    #[test]
    fn test_encode_gap_token() {
        let mut grid = grid(3, 2);
        assert!(grid.set_single(ROCK, 1, 1).is_ok());
        assert_eq!(grid.to_map_code(), "3x2.c0.r1.w0.t0..:4r.");
    }

    #[test]
    fn test_encode_adjacent_and_header_counts() {
        let Ok(mut grid) = MapGrid::new(4, 2, 12, "Pairs") else {
            unreachable!("valid grid rejected");
        };
        assert!(grid.set_single(GREEN_START, 0, 0).is_ok());
        assert!(grid.set_single(CHECKPOINTS[0], 1, 0).is_ok());
        assert!(grid.set_single(CHECKPOINTS[0], 3, 0).is_ok());
        assert!(grid.set_single(TELE_INS[0], 0, 1).is_ok());
        assert!(grid.set_single(TELE_OUTS[0], 1, 1).is_ok());
        assert!(grid.set_single(ROCK2, 2, 1).is_ok());
        assert!(grid.set_single(FINISH, 3, 1).is_ok());

        assert_eq!(
            encode(&grid),
            "4x2.c1.r1.w12.t1.Pairs.:0s.0a.1a.0t.0u.0R.0f."
        );
    }

    // A real map code decodes and re-encodes to the same text
    #[test]
    fn test_known_code_round_trip() {
        let Ok(grid) = decode(SIMPLE) else {
            unreachable!("known code must decode");
        };

        assert_eq!((grid.width(), grid.height()), (13, 7));
        assert_eq!(grid.walls(), 9);
        assert_eq!(grid.name(), "Simple");
        assert_eq!(grid.count(GREEN_START), 7);
        assert_eq!(grid.count(FINISH), 7);
        assert_eq!(grid.get(8, 4), Ok(CHECKPOINTS[0]));
        assert_eq!(grid.get(12, 6), Ok(FINISH));
        assert_eq!(encode(&grid), SIMPLE);
    }

    #[test]
    fn test_round_trip_preserves_every_attribute() {
        let Ok(mut grid) = MapGrid::new(5, 4, 17, "Round Trip") else {
            unreachable!("valid grid rejected");
        };
        assert!(grid.set(ROCK, 0..5, [0]).is_ok());
        assert!(grid.set_single(FINISH, 4, 3).is_ok());
        assert!(grid.set_single(TELE_OUTS[4], 2, 2).is_ok());

        let decoded: Result<MapGrid, MapError> = grid.to_map_code().parse();
        assert_eq!(decoded, Ok(grid));
    }

    #[test]
    fn test_decode_ignores_line_breaks() {
        let wrapped = "13x7.c1.r10.w9.t0.Simple.:0s.\r\n0r.10f.0s.5r.5f.0s.0r.6r.1r.\n1f.0s.11f.\
                       0s.2r.4a.3f.0s.1r.\n4r.4f.0s.2r.6r.1f.";
        assert_eq!(decode(wrapped), decode(SIMPLE));
    }

    #[test]
    fn test_decode_header_errors() {
        let cases = [
            ("3x2.c0.r0.w0.t0..", "map code"),
            ("3x2.c0.r0.w0:", "header"),
            ("3by2.c0.r0.w0.t0..:", "dimensions"),
            ("ax2.c0.r0.w0.t0..:", "dimensions"),
            ("0x2.c0.r0.w0.t0..:", "dimensions"),
            ("10000x10000.c0.r0.w0.t0..:", "dimensions"),
            ("3x2.x0.r0.w0.t0..:", "checkpoints"),
            ("3x2.c0.0.w0.t0..:", "rocks"),
            ("3x2.c0.r0.q0.t0..:", "walls"),
            ("3x2.c0.r0.w-1.t0..:", "walls"),
            ("3x2.c0.r0.wx.t0..:", "walls"),
            ("3x2.c0.r0.w0.0..:", "teleporters"),
        ];

        for (code, expected_field) in cases {
            match decode(code) {
                Err(MapError::MalformedEncoding { field, .. }) => {
                    assert_eq!(field, expected_field, "wrong field for {code:?}");
                }
                other => unreachable!("{code:?} should be malformed, got {other:?}"),
            }
        }
    }

    // Tokens past the grid, bad symbols and missing terminators fail instead of truncating
    #[test]
    fn test_decode_body_errors() {
        for code in [
            "3x2.c0.r0.w0.t0..:6r.",
            "3x2.c0.r0.w0.t0..:0r.0r.0r.0r.0r.0r.0r.",
            "3x2.c0.r0.w0.t0..:0z.",
            "3x2.c0.r0.w0.t0..:0 .",
            "3x2.c0.r0.w0.t0..:0r",
            "3x2.c0.r0.w0.t0..:r.",
            "3x2.c0.r0.w0.t0..:.",
            "3x2.c0.r0.w0.t0..:99999999999999999999999r.",
        ] {
            assert!(
                matches!(decode(code), Err(MapError::MalformedEncoding { field: "body", .. })),
                "{code:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_fills_last_cell() {
        let Ok(grid) = decode("3x2.c0.r0.w0.t0..:5f.") else {
            unreachable!("last cell is in range");
        };
        assert_eq!(grid.get(2, 1), Ok(FINISH));
        assert_eq!(grid.count(EMPTY), 5);
    }

    // Declared counts are reported but never trusted
    #[test]
    fn test_declared_counts_are_informational() {
        let code = "3x2.c4.r9.w2.t3.Liar.:0r.";

        assert_eq!(
            parse_header(code),
            Ok(MapHeader {
                width: 3,
                height: 2,
                checkpoints: Some(4),
                rocks: Some(9),
                walls: 2,
                teleporters: Some(3),
                name: "Liar".to_string(),
            })
        );

        let Ok(grid) = decode(code) else {
            unreachable!("declared counts do not affect decoding");
        };
        assert_eq!(grid.to_map_code(), "3x2.c0.r1.w2.t0.Liar.:0r.");
    }

    #[test]
    fn test_parse_header_without_body() {
        let Ok(header) = parse_header("20x20.c.r12.w22.t3.Edge Case.") else {
            unreachable!("header alone is enough");
        };
        assert_eq!((header.width, header.height), (20, 20));
        assert_eq!(header.checkpoints, None);
        assert_eq!(header.name, "Edge Case");
    }
}
