//! Ranked cards - a catalog payload plus its ranking state.
//!
//! `RankedCard` wraps whatever the loader produced (the payload is opaque
//! to the engine) with the three fields the elimination algorithm mutates:
//!
//! - `current_rank`: score accumulated over the rounds the card survived
//! - `final_rank`: settled score, `None` while the card is still active
//! - `survived_round`: kept in the round that just ran (transient)
//!
//! A card is either active (`final_rank == None`) or settled. Settling is
//! irreversible for the rest of the game.

use serde::{Deserialize, Serialize};

use super::id::CardId;

/// Value reported by [`RankedCard::final_rank_or_sentinel`] for active cards.
pub const ACTIVE_SENTINEL: i64 = -1;

/// A catalog card with its ranking state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCard<P> {
    /// Stable id assigned at catalog load.
    pub id: CardId,

    /// Display data passed through untouched for the presentation layer.
    pub payload: P,

    current_rank: u32,
    final_rank: Option<u32>,
    survived_round: bool,
}

impl<P> RankedCard<P> {
    /// Create an active card with zero score.
    #[must_use]
    pub fn new(id: CardId, payload: P) -> Self {
        Self {
            id,
            payload,
            current_rank: 0,
            final_rank: None,
            survived_round: false,
        }
    }

    /// Accumulated score.
    #[must_use]
    pub fn current_rank(&self) -> u32 {
        self.current_rank
    }

    /// Settled score, `None` while active.
    #[must_use]
    pub fn final_rank(&self) -> Option<u32> {
        self.final_rank
    }

    /// Settled score with `-1` standing in for "still active".
    #[must_use]
    pub fn final_rank_or_sentinel(&self) -> i64 {
        self.final_rank.map_or(ACTIVE_SENTINEL, i64::from)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.final_rank.is_none()
    }

    #[must_use]
    pub fn survived_round(&self) -> bool {
        self.survived_round
    }

    /// Keep the card for the next round, adding `round_number` to its score.
    pub(crate) fn advance(&mut self, round_number: u32) {
        self.current_rank = self.current_rank.saturating_add(round_number);
        self.survived_round = true;
    }

    /// Drop the card, freezing its score where it stands.
    pub(crate) fn eliminate(&mut self) {
        self.final_rank = Some(self.current_rank);
        self.survived_round = false;
    }

    /// Freeze the score if the card is still active. No-op otherwise.
    pub(crate) fn settle(&mut self) {
        if self.final_rank.is_none() {
            self.final_rank = Some(self.current_rank);
        }
    }

    /// Flag as kept this round without touching the score.
    pub(crate) fn mark_survived(&mut self) {
        self.survived_round = true;
    }

    pub(crate) fn clear_round_flag(&mut self) {
        self.survived_round = false;
    }

    /// Back to a freshly loaded card.
    pub(crate) fn reset(&mut self) {
        self.current_rank = 0;
        self.final_rank = None;
        self.survived_round = false;
    }

    /// Overwrite the durable ranking fields from a decoded snapshot.
    pub(crate) fn restore_ranks(&mut self, current_rank: u32, final_rank: Option<u32>) {
        self.current_rank = current_rank;
        self.final_rank = final_rank;
        self.survived_round = false;
    }
}
