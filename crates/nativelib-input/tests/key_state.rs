//! Key state table tests.

use nativelib_input::{KeyCode, KeyStateTable};

#[test]
fn test_unknown_code_is_not_pressed() {
    let table = KeyStateTable::new();
    assert!(!table.is_pressed(KeyCode::A));
    assert!(!table.is_pressed(KeyCode(0xFF)));
    assert!(table.is_empty());
}

#[test]
fn test_press_then_release() {
    let mut table = KeyStateTable::new();

    table.update(KeyCode::SPACE, true);
    assert!(table.is_pressed(KeyCode::SPACE));

    table.update(KeyCode::SPACE, false);
    assert!(!table.is_pressed(KeyCode::SPACE));
}

#[test]
fn test_repeated_press_is_idempotent() {
    let mut table = KeyStateTable::new();

    table.update(KeyCode::W, true);
    table.update(KeyCode::W, true);
    assert_eq!(table.len(), 1);

    // A single release clears it
    table.update(KeyCode::W, false);
    assert!(!table.is_pressed(KeyCode::W));
}

#[test]
fn test_release_without_press_is_noop() {
    let mut table = KeyStateTable::new();
    table.update(KeyCode::ESCAPE, false);
    assert!(table.is_empty());
}

#[test]
fn test_keys_are_tracked_independently() {
    let mut table = KeyStateTable::new();

    table.update(KeyCode::LEFT, true);
    table.update(KeyCode::UP, true);
    table.update(KeyCode::LEFT, false);

    assert!(!table.is_pressed(KeyCode::LEFT));
    assert!(table.is_pressed(KeyCode::UP));

    let pressed: Vec<_> = table.pressed().collect();
    assert_eq!(pressed, vec![KeyCode::UP]);
}
