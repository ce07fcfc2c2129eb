//! Durable snapshot of a game state.
//!
//! Only fields needed to resume a game are captured: per-card scores and
//! the round bookkeeping. Payloads, `survived_round`, the sorted result
//! and the decision log are all rebuilt on restore.
//!
//! The scalar fields are `Option` so an explicit `None` falls back to the
//! fresh state's values. The encoding is not self-describing: a token with
//! a field cut off fails to decode as a whole and never falls back field
//! by field.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, GameState};

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u8 = 1;

/// Persisted ranking fields of one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub id: CardId,
    pub current_rank: u32,
    pub final_rank: Option<u32>,
}

/// Persisted game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Layout version, checked on decode.
    pub version: u8,

    /// One entry per card, catalog order.
    pub cards: Vec<CardSnapshot>,

    pub current_card_index: Option<u32>,
    pub round_number: Option<u32>,
    pub ended: Option<bool>,
}

impl Snapshot {
    /// Capture the durable fields of a state.
    #[must_use]
    pub fn capture<P>(state: &GameState<P>) -> Self {
        let cards = state
            .cards()
            .iter()
            .map(|c| CardSnapshot {
                id: c.id,
                current_rank: c.current_rank(),
                final_rank: c.final_rank(),
            })
            .collect();

        Self {
            version: SNAPSHOT_VERSION,
            cards,
            current_card_index: u32::try_from(state.current_card_index()).ok(),
            round_number: Some(state.round_number()),
            ended: Some(state.is_ended()),
        }
    }
}
