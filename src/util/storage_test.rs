#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn key_is_kept() {
    assert_eq!(LocalStorageStore::new("fn_slots_history").key(), "fn_slots_history");
}

#[test]
fn load_reports_nothing_stored_in_non_browser_tests() {
    let store = LocalStorageStore::new("k");
    assert!(matches!(store.load(), Ok(None)));
}

#[test]
fn save_and_clear_are_noops_but_succeed() {
    let store = LocalStorageStore::new("k");
    assert!(store.save("[]").is_ok());
    assert!(store.clear().is_ok());
    assert!(matches!(store.load(), Ok(None)));
}
