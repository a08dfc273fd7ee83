//! Property tests for the coverage engine.

use proptest::prelude::*;

use firelayout::{compute_required_quantity, generate_grid, CoverageError};

fn dimension() -> impl Strategy<Value = f64> {
    0.1f64..200.0
}

fn spacing() -> impl Strategy<Value = f64> {
    0.5f64..50.0
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: quantity is the ceiling of area over cell area, never below 1.
    #[test]
    fn property_quantity_is_area_ceiling(l in dimension(), w in dimension(), s in spacing()) {
        let quantity = compute_required_quantity(l, w, s).unwrap();
        let expected = (((l * w) / (s * s)).ceil() as u64).max(1);
        prop_assert_eq!(quantity, expected);
        prop_assert!(quantity >= 1);
    }

    /// PROPERTY: every grid position lies inside the room.
    #[test]
    fn property_grid_stays_inside_room(l in dimension(), w in dimension(), s in spacing()) {
        for p in generate_grid(l, w, s).unwrap() {
            prop_assert!(p.x > 0.0 && p.x <= l, "x={} outside (0, {}]", p.x, l);
            prop_assert!(p.y > 0.0 && p.y <= w, "y={} outside (0, {}]", p.y, w);
        }
    }

    /// PROPERTY: grid size is bounded by the cell count and positions are
    /// ordered column by column.
    #[test]
    fn property_grid_is_bounded_and_column_ordered(
        l in dimension(),
        w in dimension(),
        s in spacing(),
    ) {
        let grid = generate_grid(l, w, s).unwrap();
        let cells = (l / s).ceil() as usize * (w / s).ceil() as usize;
        prop_assert!(grid.len() <= cells);

        for pair in grid.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.x < b.x || (a.x == b.x && a.y < b.y));
        }
    }

    /// PROPERTY: identical inputs give identical outputs.
    #[test]
    fn property_engine_is_deterministic(l in dimension(), w in dimension(), s in spacing()) {
        prop_assert_eq!(
            compute_required_quantity(l, w, s).unwrap(),
            compute_required_quantity(l, w, s).unwrap()
        );
        prop_assert_eq!(generate_grid(l, w, s).unwrap(), generate_grid(l, w, s).unwrap());
    }

    /// PROPERTY: a bad room is reported before a bad spacing.
    #[test]
    fn property_room_checked_before_spacing(
        l in -100.0f64..=0.0,
        w in dimension(),
        s in -10.0f64..10.0,
    ) {
        let err = compute_required_quantity(l, w, s).unwrap_err();
        prop_assert!(matches!(err, CoverageError::InvalidGeometry { .. }), "expected InvalidGeometry, got {:?}", err);
        let err = generate_grid(w, l, s).unwrap_err();
        prop_assert!(matches!(err, CoverageError::InvalidGeometry { .. }), "expected InvalidGeometry, got {:?}", err);
    }

    /// PROPERTY: with a valid room, a non-positive spacing is always rejected.
    #[test]
    fn property_non_positive_spacing_rejected(
        l in dimension(),
        w in dimension(),
        s in -50.0f64..=0.0,
    ) {
        prop_assert_eq!(
            compute_required_quantity(l, w, s).unwrap_err(),
            CoverageError::InvalidSpacing { spacing: s }
        );
    }
}
