//! The closed set of function tokens arranged on the workbench.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A function name that can be dragged between containers.
///
/// Tokens carry no data beyond their name. Each row starts with exactly one
/// of each, in [`Token::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    Map,
    Filter,
    Reduce,
    Compress,
}

impl Token {
    /// Every token, in the order a fresh palette lists them.
    pub const ALL: [Token; 4] = [Token::Map, Token::Filter, Token::Reduce, Token::Compress];

    /// Wire and display name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Filter => "filter",
            Self::Reduce => "reduce",
            Self::Compress => "compress",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token: {0:?}")]
pub struct UnknownToken(pub String);

impl FromStr for Token {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Token::ALL
            .into_iter()
            .find(|token| token.as_str() == s)
            .ok_or_else(|| UnknownToken(s.to_owned()))
    }
}
