use super::*;
use crate::row::SlotKey;

// =============================================================
// Encoding
// =============================================================

#[test]
fn encodes_palette_source() {
    let payload = DragPayload::new("row-1", Container::Palette, Token::Map);
    assert_eq!(payload.to_string(), "row-1:palette::map");
}

#[test]
fn encodes_slot_source() {
    let payload = DragPayload::new("row-2", Container::Slot(SlotKey::new(2, 3)), Token::Reduce);
    assert_eq!(payload.to_string(), "row-2:slot-2-3::reduce");
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_every_container_kind() {
    let cases = [
        ("row-1:palette::map", Container::Palette, Token::Map),
        ("row-1:trash::filter", Container::Trash, Token::Filter),
        ("row-1:slot-1-2::compress", Container::Slot(SlotKey::new(1, 2)), Token::Compress),
    ];
    for (raw, container, token) in cases {
        assert_eq!(raw.parse::<DragPayload>(), Ok(DragPayload::new("row-1", container, token)));
    }
}

#[test]
fn parse_ignores_surrounding_whitespace() {
    let payload: DragPayload = " row-1:trash::map\n".parse().unwrap();
    assert_eq!(payload, DragPayload::new("row-1", Container::Trash, Token::Map));
}

#[test]
fn empty_payload_is_reported_as_empty() {
    assert_eq!("".parse::<DragPayload>(), Err(PayloadError::Empty));
    assert_eq!("   ".parse::<DragPayload>(), Err(PayloadError::Empty));
}

#[test]
fn wrong_field_layout_is_malformed() {
    for raw in ["row-1:palette:map", "row-1:palette::map:extra", ":palette::map", "row-1:::map", "row-1:palette::", "row-1:palette:x:map", "hello"] {
        assert!(
            matches!(raw.parse::<DragPayload>(), Err(PayloadError::Malformed(_))),
            "{raw:?} should be malformed"
        );
    }
}

#[test]
fn unknown_container_or_token_is_rejected() {
    assert!(matches!("row-1:shelf::map".parse::<DragPayload>(), Err(PayloadError::Container(_))));
    assert!(matches!("row-1:palette::zip".parse::<DragPayload>(), Err(PayloadError::Token(_))));
}
