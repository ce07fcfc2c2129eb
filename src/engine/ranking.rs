//! The ranking engine: turns keep/discard decisions into a total order.
//!
//! The engine holds only configuration. All session data lives in the
//! caller-owned `GameState`, so one engine can drive any number of games.
//!
//! ## Example
//!
//! ```
//! use swipe_rank::core::Direction;
//! use swipe_rank::engine::RankingEngine;
//!
//! let engine = RankingEngine::default();
//! let mut state = engine.new_game(["Wishlist Wyrm", "Restock Raven"]);
//!
//! let first = state.current_card_id().unwrap();
//! engine.decide(&mut state, first, Direction::Advance).unwrap();
//!
//! let second = state.current_card_id().unwrap();
//! let result = engine.decide(&mut state, second, Direction::Eliminate).unwrap();
//!
//! assert!(result.game_ended);
//! assert_eq!(state.sorted_ids(), vec![first, second]);
//! ```

use tracing::debug;

use super::round::{end_game, start_next_round};
use crate::core::{
    CardId, DecisionRecord, DecisionResult, Direction, EngineConfig, GameState, RankError,
};

/// Round-elimination ranking engine.
#[derive(Clone, Debug, Default)]
pub struct RankingEngine {
    config: EngineConfig,
}

impl RankingEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a game over a catalog.
    ///
    /// Cards get ids `card-0`, `card-1`, ... in catalog order. An empty
    /// catalog produces a game that is already ended with an empty result.
    pub fn new_game<P>(&self, catalog: impl IntoIterator<Item = P>) -> GameState<P> {
        let mut state = GameState::from_catalog(catalog);
        if state.is_empty() {
            end_game(&mut state);
        }
        debug!(target: "engine.new_game", cards = state.len(), "new game");
        state
    }

    /// Apply a decision to the card currently on screen.
    ///
    /// Fails with `InvalidDecisionTarget` if `card` is not the current
    /// card and `GameEnded` once the ranking is final. Neither failure
    /// mutates the state.
    pub fn decide<P>(
        &self,
        state: &mut GameState<P>,
        card: CardId,
        direction: Direction,
    ) -> Result<DecisionResult, RankError> {
        if state.ended {
            return Err(RankError::GameEnded);
        }

        let expected = state.current_card_id();
        if expected != Some(card) {
            return Err(RankError::InvalidDecisionTarget { expected, got: card });
        }

        let round = state.round_number;
        let slot = state.current_round[state.current_card_index];
        let target = &mut state.all_cards[slot];
        match direction {
            Direction::Advance => target.advance(round),
            Direction::Eliminate => target.eliminate(),
        }
        state.decisions.push(DecisionRecord::new(card, direction, round));
        debug!(target: "engine.decide", card = %card, %direction, round, score = target_score(state, slot), "decision applied");

        state.current_card_index += 1;

        let mut result = DecisionResult::default();
        if state.current_card_index >= state.current_round.len() {
            result.round_ended = true;
            result.game_ended = start_next_round(state, &self.config);
        }
        Ok(result)
    }

    /// Reset every card and the round bookkeeping, keeping the catalog.
    pub fn restart<P>(&self, state: &mut GameState<P>) {
        for card in &mut state.all_cards {
            card.reset();
        }
        state.current_round = (0..state.all_cards.len()).collect();
        state.current_card_index = 0;
        state.round_number = 1;
        state.ended = false;
        state.sorted_result.clear();
        state.decisions.clear();

        if state.is_empty() {
            end_game(state);
        }
        debug!(target: "engine.restart", cards = state.len(), "game restarted");
    }
}

fn target_score<P>(state: &GameState<P>, slot: usize) -> u32 {
    state.all_cards[slot].current_rank()
}
