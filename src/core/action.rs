//! Decisions: the swipe direction applied to the card on screen.
//!
//! A decision is a card id plus a `Direction`. The engine answers with a
//! `DecisionResult` telling the caller whether the round and/or the game
//! ended as a consequence. Every accepted decision is appended to the
//! session's decision log as a `DecisionRecord`.

use serde::{Deserialize, Serialize};

use super::id::CardId;

/// Binary keep/discard choice on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Swipe right: the card survives this round and gains `round_number`.
    Advance,
    /// Swipe left: the card is settled at its current score.
    Eliminate,
}

impl Direction {
    #[must_use]
    pub fn is_advance(self) -> bool {
        matches!(self, Direction::Advance)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Advance => write!(f, "advance"),
            Direction::Eliminate => write!(f, "eliminate"),
        }
    }
}

/// Outcome of a single decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// The decision exhausted the round and a transition ran.
    pub round_ended: bool,
    /// The transition finalized the ranking.
    pub game_ended: bool,
}

/// Record of an accepted decision, for the session log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Card the decision applied to.
    pub card: CardId,
    /// Direction chosen.
    pub direction: Direction,
    /// Round the decision was made in.
    pub round: u32,
}

impl DecisionRecord {
    #[must_use]
    pub fn new(card: CardId, direction: Direction, round: u32) -> Self {
        Self { card, direction, round }
    }
}
