//! Core types: ids, ranked cards, game state, decisions, configuration, errors.
//!
//! Nothing here knows how a round ends or how a token is encoded. The
//! engine and codec build on these types.

pub mod id;
pub mod card;
pub mod action;
pub mod state;
pub mod config;
pub mod error;

pub use id::CardId;
pub use card::{RankedCard, ACTIVE_SENTINEL};
pub use action::{DecisionRecord, DecisionResult, Direction};
pub use state::GameState;
pub use config::{EngineConfig, SwipeConfig};
pub use error::RankError;
