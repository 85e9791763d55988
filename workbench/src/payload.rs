//! Drag payload: the string carried through the platform's drag-data channel.
//!
//! Format: `"<rowId>:<container>::<token>"`, e.g. `"row-1:palette::map"` or
//! `"row-2:slot-2-1::reduce"`. The empty third field is part of the format.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use std::fmt;
use std::str::FromStr;

use crate::row::{Container, InvalidContainer};
use crate::token::{Token, UnknownToken};

/// Where a dragged token came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub row_id: String,
    pub container: Container,
    pub token: Token,
}

impl DragPayload {
    #[must_use]
    pub fn new(row_id: impl Into<String>, container: Container, token: Token) -> Self {
        Self { row_id: row_id.into(), container, token }
    }
}

impl fmt::Display for DragPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}::{}", self.row_id, self.container, self.token)
    }
}

/// Error returned when parsing a [`DragPayload`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    /// Nothing was carried (foreign drag, or a drop with no data).
    #[error("drag payload is empty")]
    Empty,
    /// Wrong number of fields, an empty field, or a non-empty gap field.
    #[error("malformed drag payload: {0:?}")]
    Malformed(String),
    #[error(transparent)]
    Container(#[from] InvalidContainer),
    #[error(transparent)]
    Token(#[from] UnknownToken),
}

impl FromStr for DragPayload {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(PayloadError::Empty);
        }

        let fields: Vec<&str> = raw.split(':').collect();
        let [row_id, container, gap, token] = fields.as_slice() else {
            return Err(PayloadError::Malformed(raw.to_owned()));
        };
        if row_id.is_empty() || container.is_empty() || token.is_empty() || !gap.is_empty() {
            return Err(PayloadError::Malformed(raw.to_owned()));
        }

        Ok(Self {
            row_id: (*row_id).to_owned(),
            container: container.parse()?,
            token: token.parse()?,
        })
    }
}
