//! State codec integration tests.
//!
//! These tests verify token round-trips through real games, recovery from
//! corrupt tokens, reconciliation against changed catalogs, and repair of
//! inconsistent snapshots.

use swipe_rank::codec::{decode_token, encode_token, CardSnapshot, Snapshot, StateCodec, SNAPSHOT_VERSION};
use swipe_rank::core::{CardId, Direction, EngineConfig, GameState};
use swipe_rank::engine::RankingEngine;

const CATALOG: [&str; 5] = ["a", "b", "c", "d", "e"];

fn fresh() -> GameState<&'static str> {
    RankingEngine::default().new_game(CATALOG)
}

fn assert_same_progress<P, Q>(left: &GameState<P>, right: &GameState<Q>) {
    assert_eq!(ranks_of(left), ranks_of(right));
    assert_eq!(left.current_card_index(), right.current_card_index());
    assert_eq!(left.round_number(), right.round_number());
    assert_eq!(left.is_ended(), right.is_ended());
}

fn ranks_of<P>(s: &GameState<P>) -> Vec<(CardId, u32, Option<u32>)> {
    s.cards()
        .iter()
        .map(|c| (c.id, c.current_rank(), c.final_rank()))
        .collect()
}

// =============================================================================
// Round-Trips
// =============================================================================

/// Every intermediate state of a game survives snapshot/restore.
#[test]
fn test_round_trip_every_step() {
    let engine = RankingEngine::default();
    let codec = StateCodec::default();
    let mut state = fresh();

    // Round 1: keep a, c, e. Round 2: keep c only.
    let plan = [
        Direction::Advance,
        Direction::Eliminate,
        Direction::Advance,
        Direction::Eliminate,
        Direction::Advance,
        Direction::Eliminate,
        Direction::Advance,
        Direction::Eliminate,
    ];

    for direction in plan {
        let token = codec.snapshot(&state);
        let restored = codec.restore(&token, fresh());
        assert_same_progress(&state, &restored);
        assert_eq!(restored.current_round_ids(), state.current_round_ids());
        assert_eq!(restored.current_card_id(), state.current_card_id());

        let id = state.current_card_id().unwrap();
        engine.decide(&mut state, id, direction).unwrap();
    }

    assert!(state.is_ended());
    let restored = codec.restore(&codec.snapshot(&state), fresh());
    assert_same_progress(&state, &restored);
    assert_eq!(restored.sorted_ids(), state.sorted_ids());
}

/// A game resumed mid-round finishes exactly like the uninterrupted one.
#[test]
fn test_resumed_game_finishes_identically() {
    let engine = RankingEngine::default();
    let codec = StateCodec::default();
    let plan = |i: usize| if i % 3 == 0 { Direction::Eliminate } else { Direction::Advance };

    let mut straight = fresh();
    let mut step = 0;
    while let Some(id) = straight.current_card_id() {
        engine.decide(&mut straight, id, plan(step)).unwrap();
        step += 1;
    }

    let mut interrupted = fresh();
    let mut step = 0;
    while let Some(id) = interrupted.current_card_id() {
        engine.decide(&mut interrupted, id, plan(step)).unwrap();
        step += 1;
        let token = codec.snapshot(&interrupted);
        interrupted = codec.restore(&token, fresh());
    }

    assert_eq!(interrupted.sorted_ids(), straight.sorted_ids());
    assert_same_progress(&interrupted, &straight);
}

/// Payloads are not part of the token; a restore can use any payload type.
#[test]
fn test_restore_into_different_payload_type() {
    let engine = RankingEngine::default();
    let codec = StateCodec::default();
    let mut state = fresh();
    engine.decide(&mut state, CardId::new(0), Direction::Eliminate).unwrap();

    let token = codec.snapshot(&state);
    let restored = codec.restore(&token, engine.new_game(0..5u8));

    assert_same_progress(&state, &restored);
    assert_eq!(restored.current_card().map(|c| c.payload), Some(1));
}

// =============================================================================
// Corrupt Tokens
// =============================================================================

/// Corrupt tokens of every flavor fall back to the fresh game.
#[test]
fn test_corrupt_tokens_fall_back() {
    let codec = StateCodec::default();
    let good = codec.snapshot(&fresh());

    let corrupt = [
        String::new(),
        "!!!".to_string(),
        "a b c".to_string(),
        good[..good.len() - 1].to_string(),
        format!("{good}AAAA"),
        "AAAA".to_string(),
        "x".repeat(100_000),
    ];

    for token in &corrupt {
        assert_eq!(codec.restore(token, fresh()), fresh(), "token {token:?}");
    }
}

/// Unknown snapshot versions are rejected.
#[test]
fn test_future_version_rejected() {
    let mut snapshot = Snapshot::capture(&fresh());
    snapshot.version = SNAPSHOT_VERSION + 1;
    let token = encode_token(&snapshot).unwrap();

    assert!(decode_token(&token, EngineConfig::default().max_token_len).is_err());
    assert_eq!(StateCodec::default().restore(&token, fresh()), fresh());
}

// =============================================================================
// Catalog Changes
// =============================================================================

/// Cards removed from the catalog are dropped; remaining ones keep scores.
#[test]
fn test_catalog_shrunk() {
    let engine = RankingEngine::default();
    let codec = StateCodec::default();
    let mut state = fresh();
    engine.decide(&mut state, CardId::new(0), Direction::Eliminate).unwrap();
    engine.decide(&mut state, CardId::new(1), Direction::Advance).unwrap();

    let token = codec.snapshot(&state);
    let restored = codec.restore(&token, engine.new_game(["a", "b", "c"]));

    assert_eq!(restored.len(), 3);
    assert_eq!(restored.card(CardId::new(0)).unwrap().final_rank(), Some(0));
    assert_eq!(restored.card(CardId::new(1)).unwrap().current_rank(), 1);
    assert!(!restored.is_ended());
    assert_eq!(restored.current_card_id(), Some(CardId::new(2)));
}

/// New cards keep fresh values and join the active round.
#[test]
fn test_catalog_grown() {
    let engine = RankingEngine::default();
    let codec = StateCodec::default();
    let mut state = engine.new_game(["a", "b"]);
    engine.decide(&mut state, CardId::new(0), Direction::Eliminate).unwrap();

    let token = codec.snapshot(&state);
    let restored = codec.restore(&token, engine.new_game(["a", "b", "c", "d"]));

    assert_eq!(restored.card(CardId::new(0)).unwrap().final_rank(), Some(0));
    for raw in 1..4 {
        let card = restored.card(CardId::new(raw)).unwrap();
        assert!(card.is_active());
        assert_eq!(card.current_rank(), 0);
    }
    assert_eq!(
        restored.current_round_ids(),
        vec![CardId::new(0), CardId::new(1), CardId::new(2), CardId::new(3)]
    );
    assert_eq!(restored.current_card_id(), Some(CardId::new(1)));
}

// =============================================================================
// Consistency Repair
// =============================================================================

fn token(cards: &[(u32, u32, Option<u32>)], cursor: u32, round: u32, ended: bool) -> String {
    encode_token(&Snapshot {
        version: SNAPSHOT_VERSION,
        cards: cards
            .iter()
            .map(|&(id, current_rank, final_rank)| CardSnapshot {
                id: CardId::new(id),
                current_rank,
                final_rank,
            })
            .collect(),
        current_card_index: Some(cursor),
        round_number: Some(round),
        ended: Some(ended),
    })
    .unwrap()
}

/// "Ended" with active cards is settled into a proper final ranking.
#[test]
fn test_ended_token_with_active_cards() {
    let engine = RankingEngine::default();
    let t = token(&[(0, 3, None), (1, 1, Some(1)), (2, 6, None)], 0, 3, true);

    let state = StateCodec::default().restore(&t, engine.new_game(["a", "b", "c"]));

    assert!(state.is_ended());
    assert!(state.current_card().is_none());
    assert_eq!(
        state.sorted_ids(),
        vec![CardId::new(2), CardId::new(0), CardId::new(1)]
    );
}

/// "Running" with nothing left to decide is ended.
#[test]
fn test_running_token_with_no_active_cards() {
    let engine = RankingEngine::default();
    let t = token(&[(0, 0, Some(0)), (1, 0, Some(0))], 5, 1, false);

    let state = StateCodec::default().restore(&t, engine.new_game(["a", "b"]));

    assert!(state.is_ended());
    assert_eq!(state.sorted_ids(), vec![CardId::new(0), CardId::new(1)]);
    assert_eq!(state.current_card_index(), 0);
}

/// A cursor past the end is clamped onto the last active card.
#[test]
fn test_cursor_clamped() {
    let engine = RankingEngine::default();
    let t = token(&[(0, 0, None), (1, 0, None)], 40, 1, false);

    let state = StateCodec::default().restore(&t, engine.new_game(["a", "b"]));

    assert_eq!(state.current_card_index(), 1);
    assert_eq!(state.current_card_id(), Some(CardId::new(1)));
}

/// A hand-edited round number at the top of the range keeps the game
/// playable: the next round saturates instead of overflowing.
#[test]
fn test_max_round_number_saturates() {
    let engine = RankingEngine::default();
    let t = token(&[(0, 5, None), (1, 5, None)], 0, u32::MAX, false);
    let mut state = StateCodec::default().restore(&t, engine.new_game(["a", "b"]));
    assert_eq!(state.round_number(), u32::MAX);

    engine.decide(&mut state, CardId::new(0), Direction::Advance).unwrap();
    let result = engine.decide(&mut state, CardId::new(1), Direction::Advance).unwrap();

    assert!(result.round_ended);
    assert!(!result.game_ended);
    assert_eq!(state.round_number(), u32::MAX);
    assert_eq!(state.card(CardId::new(0)).unwrap().current_rank(), u32::MAX);
    assert_eq!(state.current_card_id(), Some(CardId::new(0)));
}
