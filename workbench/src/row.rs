//! Rows, their containers, and whole-board snapshots.
//!
//! A [`Row`] groups one palette, a fixed set of slots, and a trash bag. The
//! JSON shape is the persisted one:
//!
//! ```json
//! { "rowId": "row-1", "palette": ["map"], "slots": { "slot-1-1": null }, "trash": [] }
//! ```
//!
//! A [`Snapshot`] is the full ordered row list and serializes as a bare array.

#[cfg(test)]
#[path = "row_test.rs"]
mod row_test;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::{PALETTE, ROW_ID_PREFIX, SLOT_KEY_PREFIX, TRASH};
use crate::token::Token;

// =============================================================
// SlotKey
// =============================================================

/// Composite slot identifier: owning row number and 1-based position.
///
/// Ordered by `(row, position)` so a row's slots iterate left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub row: u32,
    pub position: u32,
}

impl SlotKey {
    #[must_use]
    pub fn new(row: u32, position: u32) -> Self {
        Self { row, position }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SLOT_KEY_PREFIX}{}-{}", self.row, self.position)
    }
}

/// Returned when a string is not a canonical `slot-<row>-<position>` key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid slot key: {0:?}")]
pub struct InvalidSlotKey(pub String);

impl FromStr for SlotKey {
    type Err = InvalidSlotKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidSlotKey(s.to_owned());
        let rest = s.strip_prefix(SLOT_KEY_PREFIX).ok_or_else(invalid)?;
        let (row, position) = rest.split_once('-').ok_or_else(invalid)?;
        let row = row.parse::<u32>().map_err(|_| invalid())?;
        let position = position.parse::<u32>().map_err(|_| invalid())?;
        let key = SlotKey::new(row, position);
        // Reject zero positions and non-canonical spellings such as `slot-01-1`.
        if row == 0 || position == 0 || key.to_string() != s {
            return Err(invalid());
        }
        Ok(key)
    }
}

impl Serialize for SlotKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================
// Container
// =============================================================

/// One of the three places a token can sit within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Palette,
    Trash,
    Slot(SlotKey),
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette => f.write_str(PALETTE),
            Self::Trash => f.write_str(TRASH),
            Self::Slot(key) => write!(f, "{key}"),
        }
    }
}

/// Returned when a string names neither the palette, the trash, nor a slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid container: {0:?}")]
pub struct InvalidContainer(pub String);

impl FromStr for Container {
    type Err = InvalidContainer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PALETTE => Ok(Self::Palette),
            TRASH => Ok(Self::Trash),
            other => other
                .parse()
                .map(Self::Slot)
                .map_err(|_| InvalidContainer(other.to_owned())),
        }
    }
}

// =============================================================
// Row
// =============================================================

/// An independent palette + slots + trash grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Unique id within a snapshot, e.g. `row-1`.
    pub row_id: String,
    /// Tokens not yet placed, in display order.
    pub palette: Vec<Token>,
    /// Fixed slot set; `None` marks an empty slot.
    pub slots: BTreeMap<SlotKey, Option<Token>>,
    /// Discarded tokens. Order carries no meaning.
    pub trash: Vec<Token>,
}

impl Row {
    /// A fresh row numbered `number`: full palette, empty slots, empty trash.
    #[must_use]
    pub fn initial(number: u32, slot_count: u32) -> Self {
        Self {
            row_id: row_id(number),
            palette: Token::ALL.to_vec(),
            slots: (1..=slot_count)
                .map(|position| (SlotKey::new(number, position), None))
                .collect(),
            trash: Vec::new(),
        }
    }

    /// Whether `token` currently sits in `container`.
    #[must_use]
    pub fn holds(&self, container: Container, token: Token) -> bool {
        match container {
            Container::Palette => self.palette.contains(&token),
            Container::Trash => self.trash.contains(&token),
            Container::Slot(key) => self.slots.get(&key).copied().flatten() == Some(token),
        }
    }

    /// Every token present anywhere in the row, sorted.
    #[must_use]
    pub fn inventory(&self) -> Vec<Token> {
        let mut tokens: Vec<Token> = self
            .palette
            .iter()
            .copied()
            .chain(self.slots.values().flatten().copied())
            .chain(self.trash.iter().copied())
            .collect();
        tokens.sort_unstable();
        tokens
    }

    /// True when the row holds exactly one of each token.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        let mut full = Token::ALL.to_vec();
        full.sort_unstable();
        self.inventory() == full
    }
}

/// Canonical id for row number `number`.
#[must_use]
pub fn row_id(number: u32) -> String {
    format!("{ROW_ID_PREFIX}{number}")
}

// =============================================================
// Snapshot
// =============================================================

/// The ordered row list at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub rows: Vec<Row>,
}

impl Snapshot {
    /// The canonical starting state: a single fresh `row-1`.
    #[must_use]
    pub fn initial(slot_count: u32) -> Self {
        Self { rows: vec![Row::initial(1, slot_count)] }
    }

    /// Look up a row by its declared id.
    #[must_use]
    pub fn row(&self, row_id: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.row_id == row_id)
    }

    /// True when no two rows share a `row_id`.
    #[must_use]
    pub fn has_unique_row_ids(&self) -> bool {
        let mut seen = BTreeSet::new();
        self.rows.iter().all(|row| seen.insert(row.row_id.as_str()))
    }

    /// Number the next added row would get.
    ///
    /// Starts at `rows + 1` and skips any number whose id is already taken.
    #[must_use]
    pub fn next_row_number(&self) -> u32 {
        let mut number = u32::try_from(self.rows.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1);
        while self.row(&row_id(number)).is_some() {
            number = number.saturating_add(1);
        }
        number
    }

    /// A copy of this snapshot with one fresh row appended.
    #[must_use]
    pub fn with_added_row(&self, slot_count: u32) -> Self {
        let mut rows = self.rows.clone();
        rows.push(Row::initial(self.next_row_number(), slot_count));
        Self { rows }
    }
}
