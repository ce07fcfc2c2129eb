//! Round-elimination ranking.
//!
//! - `RankingEngine`: game setup, decisions, restart
//! - round transition and end-of-game settlement (crate-internal)

mod ranking;
mod round;

pub use ranking::RankingEngine;

pub(crate) use round::end_game;
