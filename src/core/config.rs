//! Engine and view configuration.
//!
//! - `EngineConfig`: ranking rules and token limits
//! - `SwipeConfig`: gesture thresholds for the presentation view-model
//!
//! Both are plain data with `Default` values tuned for the swipe web
//! client, and `with_*` builders for overrides.

use serde::{Deserialize, Serialize};

/// Ranking engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// End the game as soon as every survivor carries a distinct score.
    ///
    /// With this off, rounds continue until at most one survivor is left.
    pub early_stop_on_distinct_ranks: bool,

    /// Tokens longer than this are rejected without decoding.
    pub max_token_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            early_stop_on_distinct_ranks: true,
            max_token_len: 16 * 1024,
        }
    }
}

impl EngineConfig {
    /// Toggle the distinct-rank early stop.
    #[must_use]
    pub fn with_early_stop(mut self, enabled: bool) -> Self {
        self.early_stop_on_distinct_ranks = enabled;
        self
    }

    /// Set the maximum accepted token length.
    #[must_use]
    pub fn with_max_token_len(mut self, len: usize) -> Self {
        self.max_token_len = len;
        self
    }
}

/// Gesture configuration for the swipe view-model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// Minimum horizontal drag (px) that counts as a swipe.
    pub swipe_threshold: f64,

    /// Degrees of rotation per pixel dragged.
    pub rotation_factor: f64,

    /// Rotation (deg) applied when a swiped card flies off screen.
    pub fly_out_rotation: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 80.0,
            rotation_factor: 0.05,
            fly_out_rotation: 30.0,
        }
    }
}

impl SwipeConfig {
    #[must_use]
    pub fn with_threshold(mut self, px: f64) -> Self {
        self.swipe_threshold = px;
        self
    }

    #[must_use]
    pub fn with_rotation_factor(mut self, factor: f64) -> Self {
        self.rotation_factor = factor;
        self
    }
}
