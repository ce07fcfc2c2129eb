//! Game state for one ranking session.
//!
//! ## Card storage
//!
//! `all_cards` is the canonical, catalog-ordered list; membership never
//! changes after load. The current round and the final result are kept as
//! index lists into `all_cards` rather than copies, so a card's ranking
//! fields live in exactly one place.
//!
//! ## Round bookkeeping
//!
//! - `current_round`: cards that entered this round, in order; a card
//!   dropped mid-round stays listed (and settled) until the round ends
//! - `current_card_index`: cursor into `current_round`, reset each round
//! - `round_number`: starts at 1, also the score awarded for surviving
//! - `ended` / `sorted_result`: set together by end-of-game settlement
//!
//! Mutation goes through `RankingEngine` and `StateCodec`; this module only
//! exposes read access for presentation.

use super::action::DecisionRecord;
use super::card::RankedCard;
use super::id::CardId;

/// Per-session ranking state.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState<P> {
    pub(crate) all_cards: Vec<RankedCard<P>>,
    pub(crate) current_round: Vec<usize>,
    pub(crate) current_card_index: usize,
    pub(crate) round_number: u32,
    pub(crate) ended: bool,
    pub(crate) sorted_result: Vec<usize>,

    /// Decisions accepted this session. Not persisted in tokens.
    pub(crate) decisions: Vec<DecisionRecord>,
}

impl<P> GameState<P> {
    /// Build a fresh state over a catalog, ids assigned by position.
    pub(crate) fn from_catalog(catalog: impl IntoIterator<Item = P>) -> Self {
        let all_cards: Vec<RankedCard<P>> = catalog
            .into_iter()
            .enumerate()
            .map(|(index, payload)| RankedCard::new(CardId::new(index as u32), payload))
            .collect();
        let current_round = (0..all_cards.len()).collect();

        Self {
            all_cards,
            current_round,
            current_card_index: 0,
            round_number: 1,
            ended: false,
            sorted_result: Vec::new(),
            decisions: Vec::new(),
        }
    }

    // === Cards ===

    /// All cards in catalog order.
    #[must_use]
    pub fn cards(&self) -> &[RankedCard<P>] {
        &self.all_cards
    }

    /// Number of cards in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.all_cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_cards.is_empty()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&RankedCard<P>> {
        self.all_cards.get(id.index()).filter(|c| c.id == id)
    }

    /// Number of cards not yet settled.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.all_cards.iter().filter(|c| c.is_active()).count()
    }

    // === Current round ===

    /// Cards that entered the present round, in order. Cards before the
    /// cursor have been decided and may already be settled.
    pub fn current_round_cards(&self) -> impl Iterator<Item = &RankedCard<P>> {
        self.current_round.iter().map(|&i| &self.all_cards[i])
    }

    /// Ids of the current round's cards.
    #[must_use]
    pub fn current_round_ids(&self) -> Vec<CardId> {
        self.current_round_cards().map(|c| c.id).collect()
    }

    /// The card currently on screen, if the game is still running.
    #[must_use]
    pub fn current_card(&self) -> Option<&RankedCard<P>> {
        if self.ended {
            return None;
        }
        self.current_round
            .get(self.current_card_index)
            .map(|&i| &self.all_cards[i])
    }

    #[must_use]
    pub fn current_card_id(&self) -> Option<CardId> {
        self.current_card().map(|c| c.id)
    }

    /// Cursor into the current round.
    #[must_use]
    pub fn current_card_index(&self) -> usize {
        self.current_card_index
    }

    /// Cards still waiting for a decision this round.
    #[must_use]
    pub fn remaining_in_round(&self) -> usize {
        self.current_round.len().saturating_sub(self.current_card_index)
    }

    /// `(cursor, round length)` for progress displays.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.current_card_index, self.current_round.len())
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    // === Result ===

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Final ranking, highest score first. Empty until the game has ended.
    pub fn sorted_result(&self) -> impl Iterator<Item = &RankedCard<P>> {
        self.sorted_result.iter().map(|&i| &self.all_cards[i])
    }

    /// Ids of the final ranking, highest score first.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<CardId> {
        self.sorted_result().map(|c| c.id).collect()
    }

    // === Decision log ===

    /// Decisions accepted during this session, oldest first.
    #[must_use]
    pub fn decisions(&self) -> &[DecisionRecord] {
        &self.decisions
    }
}
