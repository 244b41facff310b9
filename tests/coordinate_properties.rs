//! Property tests for coordinate entry.
//!
//! 1. In-range values survive format -> parse unchanged
//! 2. Out-of-range values clamp to the nearest bound
//! 3. Every parsed value lies inside its axis domain

use proptest::prelude::*;
use toggle_settings::{format_coordinate, parse_and_clamp, Axis};

fn arb_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Latitude), Just(Axis::Longitude)]
}

// ── 1. Round trip ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn latitude_round_trip(n in -90.0..=90.0_f64) {
        prop_assert_eq!(parse_and_clamp(&format_coordinate(Some(n)), Axis::Latitude), Some(n));
    }

    #[test]
    fn longitude_round_trip(n in -180.0..=180.0_f64) {
        prop_assert_eq!(parse_and_clamp(&format_coordinate(Some(n)), Axis::Longitude), Some(n));
    }
}

// ── 2. Clamping ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn above_max_clamps(axis in arb_axis(), excess in 1e-9..1e12_f64) {
        let n = axis.max() + excess;
        prop_assert_eq!(parse_and_clamp(&n.to_string(), axis), Some(axis.max()));
    }

    #[test]
    fn below_min_clamps(axis in arb_axis(), excess in 1e-9..1e12_f64) {
        let n = axis.min() - excess;
        prop_assert_eq!(parse_and_clamp(&n.to_string(), axis), Some(axis.min()));
    }
}

// ── 3. Domain ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn any_text_stays_in_domain(axis in arb_axis(), text in "\\PC*|[0-9a-fxob+\\-.,e° \u{FEFF}]{0,12}") {
        if let Some(v) = parse_and_clamp(&text, axis) {
            prop_assert!(v.is_finite());
            prop_assert!(v >= axis.min() && v <= axis.max());
        } else {
            let blank = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}').is_empty();
            prop_assert!(blank);
        }
    }

    #[test]
    fn comma_matches_period(whole in -89i32..89, frac in 0u32..1000) {
        let with_period = format!("{}.{:03}", whole, frac);
        let with_comma = format!("{},{:03}", whole, frac);
        prop_assert_eq!(
            parse_and_clamp(&with_comma, Axis::Latitude),
            parse_and_clamp(&with_period, Axis::Latitude)
        );
    }
}
