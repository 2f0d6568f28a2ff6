//! Unit tests for rr-core primitives.

#[cfg(test)]
mod ids {
    use crate::VertexId;

    #[test]
    fn ordering() {
        assert!(VertexId(0) < VertexId(1));
        assert!(VertexId(314080061) > VertexId(314080060));
    }

    #[test]
    fn display_is_bare_integer() {
        assert_eq!(VertexId(30198538).to_string(), "30198538");
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(" 42\n".parse::<VertexId>().unwrap(), VertexId(42));
        assert!("forty-two".parse::<VertexId>().is_err());
        assert!("4.2".parse::<VertexId>().is_err());
    }

    #[test]
    fn negative_ids_are_valid() {
        assert_eq!("-5".parse::<VertexId>().unwrap(), VertexId(-5));
        assert_eq!(VertexId(-5).to_string(), "-5");
        assert!(VertexId(-5) < VertexId(0));
    }
}

#[cfg(test)]
mod coord {
    use crate::{CoreError, FixedCoord, MAX_FIXED, parse_fixed};

    #[test]
    fn truncates_not_rounds() {
        // 53.618369 × 100 000 = 5 361 836.9 → 5 361 836
        assert_eq!(parse_fixed("53.618369").unwrap(), 5361836);
    }

    #[test]
    fn truncates_toward_zero_for_negatives() {
        assert_eq!(parse_fixed("-113.602987").unwrap(), -11360298);
        assert_eq!(parse_fixed("-0.000009").unwrap(), 0);
    }

    #[test]
    fn accepts_trailing_newline() {
        assert_eq!(parse_fixed("53.5\n").unwrap(), 5350000);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_fixed("north"),
            Err(CoreError::InvalidCoordinate { .. })
        ));
        assert!(parse_fixed("").is_err());
        assert!(parse_fixed("NaN").is_err());
        assert!(parse_fixed("inf").is_err());
        assert!(parse_fixed("1000.0").is_err());
    }

    #[test]
    fn parse_pair() {
        let c = FixedCoord::parse_pair("53.65488,-113.33914").unwrap();
        assert_eq!(c, FixedCoord::new(5365488, -11333914));
        assert!(FixedCoord::parse_pair("53.65488").is_err());
        assert!(FixedCoord::parse_pair("53.65488,west").is_err());
    }

    #[test]
    fn planar_distance() {
        let a = FixedCoord::new(0, 0);
        let b = FixedCoord::new(3, 4);
        assert_eq!(a.distance_sq(b), 25);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn range_covers_parsed_extremes() {
        let edge = FixedCoord::parse("360.0", "-360.0").unwrap();
        assert_eq!(edge, FixedCoord::new(MAX_FIXED, -MAX_FIXED));
        assert!(edge.is_in_range());
        assert!(!FixedCoord::new(MAX_FIXED + 1, 0).is_in_range());
        assert!(!FixedCoord::new(0, i64::MIN).is_in_range());
    }

    #[test]
    fn distance_saturates_far_out() {
        let low = FixedCoord::new(i64::MIN, i64::MIN);
        let high = FixedCoord::new(i64::MAX, i64::MAX);
        assert_eq!(low.distance_sq(high), i64::MAX);
        assert_eq!(FixedCoord::new(4_000_000_000, 0).distance_sq(FixedCoord::new(0, 0)), i64::MAX);

        // Opposite corners of the accepted box are still exact.
        let a = FixedCoord::new(-MAX_FIXED, -MAX_FIXED);
        let b = FixedCoord::new(MAX_FIXED, MAX_FIXED);
        let side = 2 * MAX_FIXED;
        assert_eq!(a.distance_sq(b), 2 * side * side);
    }

    #[test]
    fn display_space_separated() {
        assert_eq!(FixedCoord::new(100, -200).to_string(), "100 -200");
    }
}
