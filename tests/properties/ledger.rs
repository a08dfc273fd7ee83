//! Property tests for the selection ledger.

use proptest::prelude::*;

use firelayout::{DeviceSpec, SelectionLedger, SizingMetric};

fn device(index: usize, spacing: Option<f64>) -> DeviceSpec {
    let spec = DeviceSpec::new(format!("Device {index}"), "NFPA 72");
    match spacing {
        Some(s) => spec.with_sizing(SizingMetric::Spacing(s)),
        None => spec,
    }
}

fn ledger_from(spacings: &[Option<f64>], manual: u64) -> SelectionLedger {
    let mut ledger = SelectionLedger::new();
    for (index, spacing) in spacings.iter().enumerate() {
        ledger.add_entry(&device(index, *spacing));
        ledger.set_quantity(index, manual);
    }
    ledger
}

fn quantities(ledger: &SelectionLedger) -> Vec<u64> {
    ledger.entries().iter().map(|e| e.quantity()).collect()
}

fn spacing_lists() -> impl Strategy<Value = Vec<Option<f64>>> {
    proptest::collection::vec(proptest::option::of(1.0f64..30.0), 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: running the cycle twice on the same room changes nothing.
    #[test]
    fn property_compute_and_apply_is_idempotent(
        spacings in spacing_lists(),
        l in 1.0f64..100.0,
        w in 1.0f64..100.0,
    ) {
        let mut ledger = ledger_from(&spacings, 7);
        let first = ledger.compute_and_apply(l, w).unwrap();
        let after_first = quantities(&ledger);

        let second = ledger.compute_and_apply(l, w).unwrap();
        prop_assert_eq!(after_first, quantities(&ledger));
        prop_assert_eq!(first.positions(), second.positions());
    }

    /// PROPERTY: a rejected room leaves every quantity untouched.
    #[test]
    fn property_invalid_room_is_atomic(
        spacings in spacing_lists(),
        l in -100.0f64..=0.0,
        w in 1.0f64..100.0,
        manual in 1u64..50,
    ) {
        let mut ledger = ledger_from(&spacings, manual);
        let before = quantities(&ledger);

        prop_assert!(ledger.compute_and_apply(l, w).is_err());
        prop_assert_eq!(before, quantities(&ledger));
    }

    /// PROPERTY: entries without a spacing keep their manual quantity.
    #[test]
    fn property_unspaced_entries_keep_quantity(
        spacings in spacing_lists(),
        l in 1.0f64..100.0,
        w in 1.0f64..100.0,
        manual in 1u64..50,
    ) {
        let mut ledger = ledger_from(&spacings, manual);
        ledger.compute_and_apply(l, w).unwrap();

        for (entry, spacing) in ledger.entries().iter().zip(&spacings) {
            if spacing.is_none() {
                prop_assert_eq!(entry.quantity(), manual);
            } else {
                prop_assert!(entry.quantity() >= 1);
            }
        }
    }
}
