//! `firelayout grid` previews the two sizing rules side by side.

mod common;

use common::TestEnv;

#[test]
fn grid_reports_quantity_and_positions() {
    let env = TestEnv::new();

    let result = env.run(&["grid", "-l", "20", "-w", "10", "-s", "5"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Required quantity: 8"));
    assert!(result.stdout.contains("Grid positions: 8"));
    assert!(result.stdout.contains("(2.50, 2.50)"));
    assert!(result.stdout.contains("(17.50, 7.50)"));
}

#[test]
fn grid_shows_quantity_grid_divergence() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "grid", "-l", "10", "-w", "10", "-s", "9.1"]);
    assert!(result.success, "{}", result.combined_output());

    let events = result.events();
    assert_eq!(events[0]["quantity"], 2);
    assert_eq!(events[0]["columns"], 2);
    assert_eq!(events[0]["rows"], 2);
    let positions = events[0]["positions"].as_array().unwrap();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0]["x"], 4.55);
    assert_eq!(positions[0]["y"], 4.55);
}

#[test]
fn grid_rejects_bad_spacing() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "grid", "-l", "10", "-w", "10", "-s", "0"]);
    assert!(!result.success);
    assert_eq!(result.events()[0]["code"], "invalid_spacing");
}

#[test]
fn grid_checks_room_before_spacing() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "grid", "-l", "0", "-w", "10", "-s", "-1"]);
    assert!(!result.success);
    assert_eq!(result.events()[0]["code"], "invalid_geometry");
}
