//! Card identification.
//!
//! Every card in a catalog gets a `CardId` derived from its 0-based
//! position in catalog order. Ids are assigned once at load time and are
//! never reused within a game.
//!
//! ## External form
//!
//! The string form is `card-<index>`, which is what presentation layers
//! and tokens see:
//!
//! ```
//! use swipe_rank::core::CardId;
//!
//! let id = CardId::new(3);
//! assert_eq!(id.to_string(), "card-3");
//! assert_eq!("card-3".parse::<CardId>().unwrap(), id);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RankError;

const ID_PREFIX: &str = "card-";

/// Stable identifier for a card within one catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a catalog index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Catalog position this id was assigned from.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", ID_PREFIX, self.0)
    }
}

impl FromStr for CardId {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(ID_PREFIX)
            .ok_or_else(|| RankError::TokenDecode(format!("card id missing prefix: {s:?}")))?;
        digits
            .parse::<u32>()
            .map(CardId)
            .map_err(|e| RankError::TokenDecode(format!("bad card id {s:?}: {e}")))
    }
}
