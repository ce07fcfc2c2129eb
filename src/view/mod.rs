//! Presentation view-model, outside the ranking state.
//!
//! Drag offsets, rotation, opacity and swipe indicators per card id, plus
//! the threshold rule that turns a drag into a `Direction`.

mod model;

pub use model::{CardView, ViewModel};
