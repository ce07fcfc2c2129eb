//! # swipe-rank
//!
//! Ranking engine for a single-player "swipe" card game: a deck of
//! feature cards is narrowed down round by round (swipe right to keep,
//! left to drop) until a total order emerges.
//!
//! ## Scoring
//!
//! - Keeping a card in round `r` adds `r` to its score, so later rounds
//!   are worth more.
//! - Dropping a card settles it at its current score for good.
//! - A round ends when every card in it has a decision. The game ends when
//!   at most one card survives, or when all survivors carry distinct
//!   scores; otherwise the survivors play another round.
//! - The result lists every card by settled score, highest first, ties in
//!   catalog order.
//!
//! ## Resuming
//!
//! `StateCodec` turns a game into a short URL-safe token and back. Restoring
//! never fails: a bad token yields a fresh game, an inconsistent one is
//! repaired, and a changed catalog is reconciled card by card.
//!
//! ## Modules
//!
//! - `core`: ids, ranked cards, game state, decisions, config, errors
//! - `engine`: `RankingEngine` (new game, decide, restart)
//! - `codec`: snapshots and tokens
//! - `catalog`: feature card records and JSON loading
//! - `view`: drag/swipe view-model kept outside the game state

pub mod core;
pub mod engine;
pub mod codec;
pub mod catalog;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    CardId, RankedCard, GameState,
    Direction, DecisionResult, DecisionRecord,
    EngineConfig, SwipeConfig, RankError,
};

pub use crate::engine::RankingEngine;

pub use crate::codec::{StateCodec, Snapshot, CardSnapshot, encode_token, decode_token};

pub use crate::catalog::{FeatureCard, load_catalog, load_catalog_file};

pub use crate::view::{CardView, ViewModel};
