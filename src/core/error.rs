//! Error kinds for the ranking core.
//!
//! Only `InvalidDecisionTarget` and `GameEnded` ever reach a caller of the
//! engine; they mean the caller broke the one-card-on-screen contract.
//! `TokenDecode` and `StateInconsistency` are produced inside the codec
//! and recovered there. `CatalogLoad` belongs to the loader boundary.

use thiserror::Error;

use super::id::CardId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("catalog load failed: {0}")]
    CatalogLoad(String),
    #[error("decision on {got} but the current card is {}", display_expected(.expected))]
    InvalidDecisionTarget {
        expected: Option<CardId>,
        got: CardId,
    },
    #[error("game already ended")]
    GameEnded,
    #[error("token decode failed: {0}")]
    TokenDecode(String),
    #[error("inconsistent state: {0}")]
    StateInconsistency(String),
}

fn display_expected(expected: &Option<CardId>) -> String {
    match expected {
        Some(id) => id.to_string(),
        None => "none".to_string(),
    }
}

impl From<serde_json::Error> for RankError {
    fn from(value: serde_json::Error) -> Self {
        Self::CatalogLoad(value.to_string())
    }
}

impl From<bincode::Error> for RankError {
    fn from(value: bincode::Error) -> Self {
        Self::TokenDecode(value.to_string())
    }
}

impl From<base64::DecodeError> for RankError {
    fn from(value: base64::DecodeError) -> Self {
        Self::TokenDecode(value.to_string())
    }
}
