use serde_json::json;

use super::*;

// =============================================================
// SlotKey
// =============================================================

#[test]
fn slot_key_display_is_prefixed() {
    assert_eq!(SlotKey::new(2, 3).to_string(), "slot-2-3");
}

#[test]
fn slot_key_parses_canonical_form() {
    assert_eq!("slot-1-1".parse::<SlotKey>(), Ok(SlotKey::new(1, 1)));
    assert_eq!("slot-12-4".parse::<SlotKey>(), Ok(SlotKey::new(12, 4)));
}

#[test]
fn slot_key_rejects_malformed_keys() {
    for raw in ["slot-1", "slot-a-1", "slot-1-0", "slot-0-1", "slot-01-1", "1-1", "slot--1", ""] {
        assert!(raw.parse::<SlotKey>().is_err(), "{raw:?} should not parse");
    }
}

#[test]
fn slot_keys_order_by_row_then_position() {
    let mut keys = vec![SlotKey::new(1, 10), SlotKey::new(2, 1), SlotKey::new(1, 2)];
    keys.sort();
    assert_eq!(keys, vec![SlotKey::new(1, 2), SlotKey::new(1, 10), SlotKey::new(2, 1)]);
}

// =============================================================
// Container
// =============================================================

#[test]
fn container_names_round_trip_through_strings() {
    let cases = [
        (Container::Palette, "palette"),
        (Container::Trash, "trash"),
        (Container::Slot(SlotKey::new(1, 2)), "slot-1-2"),
    ];
    for (container, name) in cases {
        assert_eq!(container.to_string(), name);
        assert_eq!(name.parse::<Container>(), Ok(container));
    }
}

#[test]
fn container_rejects_unknown_name() {
    assert_eq!("bin".parse::<Container>(), Err(InvalidContainer("bin".into())));
}

// =============================================================
// Row
// =============================================================

#[test]
fn initial_row_has_full_palette_and_empty_slots() {
    let row = Row::initial(1, 3);
    assert_eq!(row.row_id, "row-1");
    assert_eq!(row.palette, Token::ALL.to_vec());
    assert_eq!(
        row.slots.keys().copied().collect::<Vec<_>>(),
        vec![SlotKey::new(1, 1), SlotKey::new(1, 2), SlotKey::new(1, 3)]
    );
    assert!(row.slots.values().all(Option::is_none));
    assert!(row.trash.is_empty());
    assert!(row.is_conserved());
}

#[test]
fn holds_checks_the_named_container_only() {
    let mut row = Row::initial(1, 3);
    row.palette.retain(|t| *t != Token::Map);
    row.slots.insert(SlotKey::new(1, 2), Some(Token::Map));

    assert!(row.holds(Container::Slot(SlotKey::new(1, 2)), Token::Map));
    assert!(!row.holds(Container::Slot(SlotKey::new(1, 1)), Token::Map));
    assert!(!row.holds(Container::Palette, Token::Map));
    assert!(row.holds(Container::Palette, Token::Filter));
    assert!(!row.holds(Container::Trash, Token::Filter));
}

#[test]
fn conservation_detects_loss_and_duplication() {
    let mut lost = Row::initial(1, 3);
    lost.palette.pop();
    assert!(!lost.is_conserved());

    let mut duplicated = Row::initial(1, 3);
    duplicated.trash.push(Token::Map);
    assert!(!duplicated.is_conserved());
}

#[test]
fn row_serializes_to_persisted_shape() {
    let mut row = Row::initial(1, 2);
    row.palette = vec![Token::Filter, Token::Reduce, Token::Compress];
    row.slots.insert(SlotKey::new(1, 1), Some(Token::Map));

    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(
        value,
        json!({
            "rowId": "row-1",
            "palette": ["filter", "reduce", "compress"],
            "slots": { "slot-1-1": "map", "slot-1-2": null },
            "trash": []
        })
    );

    let back: Row = serde_json::from_value(value).unwrap();
    assert_eq!(back, row);
}

#[test]
fn row_rejects_bad_slot_key_in_json() {
    let value = json!({
        "rowId": "row-1",
        "palette": [],
        "slots": { "cell-1": null },
        "trash": []
    });
    assert!(serde_json::from_value::<Row>(value).is_err());
}

// =============================================================
// Snapshot
// =============================================================

#[test]
fn initial_snapshot_is_single_row() {
    let snapshot = Snapshot::initial(3);
    assert_eq!(snapshot.rows.len(), 1);
    assert_eq!(snapshot.rows[0], Row::initial(1, 3));
}

#[test]
fn snapshot_serializes_as_bare_array() {
    let value = serde_json::to_value(Snapshot::initial(1)).unwrap();
    assert!(value.is_array());
    assert_eq!(value[0]["rowId"], "row-1");
}

#[test]
fn row_lookup_uses_declared_id() {
    let snapshot = Snapshot::initial(3).with_added_row(3);
    assert_eq!(snapshot.row("row-2").map(|r| r.row_id.as_str()), Some("row-2"));
    assert!(snapshot.row("row-9").is_none());
}

#[test]
fn added_row_is_numbered_after_existing_rows() {
    let snapshot = Snapshot::initial(3);
    let grown = snapshot.with_added_row(3);

    assert_eq!(grown.rows.len(), 2);
    assert_eq!(grown.rows[0], snapshot.rows[0]);
    assert_eq!(grown.rows[1], Row::initial(2, 3));
    assert_eq!(grown.rows[1].slots.len(), 3);
}

#[test]
fn next_row_number_skips_taken_ids() {
    let snapshot = Snapshot { rows: vec![Row::initial(2, 3)] };
    assert_eq!(snapshot.next_row_number(), 3);
}

#[test]
fn repeated_row_ids_are_detected() {
    let grown = Snapshot::initial(3).with_added_row(3);
    assert!(grown.has_unique_row_ids());

    let repeated = Snapshot { rows: vec![Row::initial(1, 3), Row::initial(1, 3)] };
    assert!(!repeated.has_unique_row_ids());
}
