//! Resumable game state via opaque URL-safe tokens.
//!
//! ## Key Types
//!
//! - `Snapshot`: durable fields of a `GameState`
//! - `StateCodec`: `snapshot` / `restore` boundary that never fails
//!
//! `encode_token` and `decode_token` are the fallible layer underneath,
//! exposed for callers that want to inspect failures.
//!
//! ## Example
//!
//! ```
//! use swipe_rank::codec::StateCodec;
//! use swipe_rank::core::Direction;
//! use swipe_rank::engine::RankingEngine;
//!
//! let engine = RankingEngine::default();
//! let codec = StateCodec::default();
//!
//! let mut state = engine.new_game(["a", "b", "c"]);
//! let id = state.current_card_id().unwrap();
//! engine.decide(&mut state, id, Direction::Eliminate).unwrap();
//!
//! let token = codec.snapshot(&state);
//! let resumed = codec.restore(&token, engine.new_game(["a", "b", "c"]));
//! assert_eq!(resumed.current_card_id(), state.current_card_id());
//!
//! // Garbage falls back to the fresh game.
//! let fresh = codec.restore("%%%", engine.new_game(["a", "b", "c"]));
//! assert_eq!(fresh, engine.new_game(["a", "b", "c"]));
//! ```

mod restore;
pub mod snapshot;
pub mod token;

pub use snapshot::{CardSnapshot, Snapshot, SNAPSHOT_VERSION};
pub use token::{decode_token, encode_token};

use tracing::{debug, warn};

use crate::core::{EngineConfig, GameState, RankError};

/// Snapshot/restore boundary for game state tokens.
#[derive(Clone, Debug)]
pub struct StateCodec {
    max_token_len: usize,
}

impl Default for StateCodec {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl StateCodec {
    /// Create a codec using the token limits from an engine config.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            max_token_len: config.max_token_len,
        }
    }

    /// Serialize the durable fields of `state` into a token.
    ///
    /// Returns an empty string if encoding fails.
    #[must_use]
    pub fn snapshot<P>(&self, state: &GameState<P>) -> String {
        match encode_token(&Snapshot::capture(state)) {
            Ok(token) => {
                debug!(target: "codec.snapshot", len = token.len(), "token issued");
                token
            }
            Err(e) => {
                warn!(target: "codec.snapshot", error = %e, "snapshot failed");
                String::new()
            }
        }
    }

    /// Overlay a token onto a fresh game.
    ///
    /// Any decode failure returns `fresh` untouched.
    #[must_use]
    pub fn restore<P>(&self, token: &str, fresh: GameState<P>) -> GameState<P> {
        match decode_token(token, self.max_token_len) {
            Ok(snapshot) => restore::apply(&snapshot, fresh),
            Err(e) => {
                warn!(target: "codec.restore", error = %e, "discarding token, starting fresh");
                fresh
            }
        }
    }

    /// Restore from an optional token; `None` or an empty string starts fresh.
    #[must_use]
    pub fn restore_or_fresh<P>(&self, token: Option<&str>, fresh: GameState<P>) -> GameState<P> {
        match token.map(str::trim) {
            Some(t) if !t.is_empty() => self.restore(t, fresh),
            _ => fresh,
        }
    }

    /// Like `restore`, but surfaces decode failures instead of recovering.
    ///
    /// Consistency repair still happens silently; only an undecodable
    /// token is an error.
    pub fn try_restore<P>(&self, token: &str, fresh: GameState<P>) -> Result<GameState<P>, RankError> {
        let snapshot = decode_token(token, self.max_token_len)?;
        Ok(restore::apply(&snapshot, fresh))
    }
}
