//! Round transition and end-of-game settlement.
//!
//! Both run synchronously inside the decision that exhausted a round, or
//! inside the codec when it repairs a decoded state.
//!
//! ## Transition
//!
//! 1. Survivors are the current round's cards flagged `survived_round`.
//! 2. At most one survivor: the game ends.
//! 3. Every survivor carries a distinct score: the game ends, since a
//!    further round cannot reorder them (when early stop is enabled).
//! 4. Otherwise the survivors become the next round, `round_number` goes
//!    up by one and the cursor returns to 0.

use std::cmp::Reverse;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::{EngineConfig, GameState};

/// Run the round transition. Returns `true` if the game ended.
pub(crate) fn start_next_round<P>(state: &mut GameState<P>, config: &EngineConfig) -> bool {
    let survivors: Vec<usize> = state
        .current_round
        .iter()
        .copied()
        .filter(|&i| state.all_cards[i].survived_round())
        .collect();

    if survivors.len() <= 1 {
        debug!(target: "engine.round", round = state.round_number, survivors = survivors.len(), "too few survivors, ending");
        settle(state, &survivors);
        end_game(state);
        return true;
    }

    if config.early_stop_on_distinct_ranks && ranks_distinct(state, &survivors) {
        debug!(target: "engine.round", round = state.round_number, survivors = survivors.len(), "survivor scores distinct, ending");
        settle(state, &survivors);
        end_game(state);
        return true;
    }

    for &i in &survivors {
        state.all_cards[i].clear_round_flag();
    }
    state.round_number = state.round_number.saturating_add(1);
    state.current_round = survivors;
    state.current_card_index = 0;

    debug!(target: "engine.round", round = state.round_number, cards = state.current_round.len(), "next round");
    false
}

/// Settle every still-active card and build the sorted result.
///
/// Safe to call on an already ended state; settled cards are untouched.
pub(crate) fn end_game<P>(state: &mut GameState<P>) {
    for card in &mut state.all_cards {
        card.settle();
    }

    let mut order: Vec<usize> = (0..state.all_cards.len()).collect();
    // Stable: ties keep catalog order.
    order.sort_by_key(|&i| Reverse(state.all_cards[i].final_rank().unwrap_or(0)));

    state.sorted_result = order;
    state.current_round.clear();
    state.current_card_index = 0;
    state.ended = true;

    debug!(target: "engine.end", cards = state.all_cards.len(), rounds = state.round_number, "ranking finalized");
}

fn settle<P>(state: &mut GameState<P>, indices: &[usize]) {
    for &i in indices {
        state.all_cards[i].settle();
    }
}

fn ranks_distinct<P>(state: &GameState<P>, indices: &[usize]) -> bool {
    let ranks: FxHashSet<u32> = indices
        .iter()
        .map(|&i| state.all_cards[i].current_rank())
        .collect();
    ranks.len() == indices.len()
}
