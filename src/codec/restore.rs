//! Reconcile a decoded snapshot against a freshly loaded catalog.
//!
//! Cards are matched by id. Cards the snapshot doesn't know keep their
//! fresh values; snapshot entries for cards no longer in the catalog are
//! ignored.
//!
//! ## Round reconstruction
//!
//! Round membership isn't persisted. In any state reached through
//! decisions, every card in round `r` entered it with the same score
//! `S = 1 + 2 + ... + (r - 1)`, so the round is exactly the cards that are
//! active or were settled at `S`, and the ones before the cursor that are
//! still active were advanced. When the snapshot fits that shape the round
//! is rebuilt exactly, cursor and `survived_round` flags included.
//!
//! Otherwise (catalog changed, hand-edited token) the round falls back to
//! the active cards in catalog order with the cursor clamped into range.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::snapshot::{CardSnapshot, Snapshot};
use crate::core::{CardId, GameState, RankError};
use crate::engine::end_game;

/// Overlay `snapshot` onto `state`, which must be freshly initialized.
pub(crate) fn apply<P>(snapshot: &Snapshot, mut state: GameState<P>) -> GameState<P> {
    let records: FxHashMap<CardId, &CardSnapshot> =
        snapshot.cards.iter().map(|c| (c.id, c)).collect();

    let mut matched = 0usize;
    for card in &mut state.all_cards {
        if let Some(record) = records.get(&card.id) {
            card.restore_ranks(record.current_rank, record.final_rank);
            matched += 1;
        }
    }
    if matched != state.all_cards.len() || matched != snapshot.cards.len() {
        warn!(target: "codec.restore", matched, catalog = state.all_cards.len(), token = snapshot.cards.len(), "catalog changed since token was issued");
    }

    state.round_number = snapshot.round_number.unwrap_or(state.round_number).max(1);
    state.ended = snapshot.ended.unwrap_or(state.ended);
    let cursor = snapshot
        .current_card_index
        .map_or(state.current_card_index, |i| i as usize);

    let active = state.active_count();
    match (state.ended, active) {
        (true, 0) => end_game(&mut state),
        (true, _) | (false, 0) => {
            let err = RankError::StateInconsistency(format!(
                "ended={} with {} active cards",
                state.ended, active
            ));
            warn!(target: "codec.restore", error = %err, "forcing end-of-game settlement");
            end_game(&mut state);
        }
        (false, _) => rebuild_round(&mut state, cursor),
    }
    state
}

fn rebuild_round<P>(state: &mut GameState<P>, cursor: usize) {
    if !rebuild_exact(state, cursor) {
        rebuild_active(state, cursor);
    }
}

/// Round-entry score for `round`: the sum of all earlier round numbers.
fn round_entry_score(round: u32) -> u64 {
    let r = u64::from(round);
    r * (r - 1) / 2
}

fn rebuild_exact<P>(state: &mut GameState<P>, cursor: usize) -> bool {
    let entry = round_entry_score(state.round_number);
    let advanced = entry + u64::from(state.round_number);

    let members: Vec<usize> = state
        .all_cards
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_active() || c.final_rank().map(u64::from) == Some(entry))
        .map(|(i, _)| i)
        .collect();

    if cursor >= members.len() {
        return false;
    }

    let mut survived = Vec::new();
    for (pos, &i) in members.iter().enumerate() {
        let card = &state.all_cards[i];
        let score = u64::from(card.current_rank());
        let decided = pos < cursor;
        let fits = match (card.is_active(), decided) {
            (true, false) => score == entry,
            (true, true) => {
                survived.push(i);
                score == advanced
            }
            (false, true) => score == entry,
            (false, false) => false,
        };
        if !fits {
            return false;
        }
    }

    for &i in &survived {
        state.all_cards[i].mark_survived();
    }
    state.current_round = members;
    state.current_card_index = cursor;
    true
}

fn rebuild_active<P>(state: &mut GameState<P>, cursor: usize) {
    state.current_round = state
        .all_cards
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_active())
        .map(|(i, _)| i)
        .collect();

    state.current_card_index = if state.current_round.is_empty() {
        0
    } else {
        cursor.min(state.current_round.len() - 1)
    };
}
