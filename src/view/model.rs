//! Per-card presentation state and drag-gesture tracking.
//!
//! Kept apart from `GameState`: nothing here is persisted or read by the
//! engine. A gesture only becomes a decision when `end_drag` returns a
//! `Direction`, which the caller then passes to `RankingEngine::decide`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CardId, Direction, SwipeConfig};

/// Fly-out distance, percent of the card width.
const FLY_OUT_PERCENT: f64 = 200.0;

/// Visual state of one card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    /// Horizontal offset: px while dragging, percent once flown out.
    pub offset_x: f64,
    pub flown_out: bool,
    pub rotation_deg: f64,
    pub opacity: f64,
    pub overlay_opacity: f64,
    pub left_indicator: f64,
    pub right_indicator: f64,
}

impl Default for CardView {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            flown_out: false,
            rotation_deg: 0.0,
            opacity: 1.0,
            overlay_opacity: 0.0,
            left_indicator: 0.0,
            right_indicator: 0.0,
        }
    }
}

impl CardView {
    /// CSS transform for the card.
    #[must_use]
    pub fn transform(&self) -> String {
        if self.flown_out {
            format!("translateX({}%) rotate({}deg)", self.offset_x, self.rotation_deg)
        } else {
            format!("translateX({}px) rotate({}deg)", self.offset_x, self.rotation_deg)
        }
    }

    fn clear_indicators(&mut self) {
        self.overlay_opacity = 0.0;
        self.left_indicator = 0.0;
        self.right_indicator = 0.0;
    }
}

#[derive(Clone, Copy, Debug)]
struct Drag {
    card: CardId,
    start_x: f64,
    delta_x: f64,
}

/// View-model for every card on the table, keyed by card id.
#[derive(Clone, Debug, Default)]
pub struct ViewModel {
    config: SwipeConfig,
    views: FxHashMap<CardId, CardView>,
    drag: Option<Drag>,
}

impl ViewModel {
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            views: FxHashMap::default(),
            drag: None,
        }
    }

    /// Current view of a card; untouched cards report the default view.
    #[must_use]
    pub fn view(&self, card: CardId) -> CardView {
        self.views.get(&card).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin dragging `card` from pointer position `x`.
    pub fn start_drag(&mut self, card: CardId, x: f64) {
        self.drag = Some(Drag { card, start_x: x, delta_x: 0.0 });
        self.views.insert(card, CardView::default());
    }

    /// Follow the pointer. Ignored unless `card` is being dragged.
    pub fn drag(&mut self, card: CardId, x: f64) {
        let Some(drag) = self.drag.as_mut().filter(|d| d.card == card) else {
            return;
        };
        drag.delta_x = x - drag.start_x;
        let delta = drag.delta_x;

        let strength = (delta.abs() / self.config.swipe_threshold).min(1.0);
        let view = self.views.entry(card).or_default();
        view.offset_x = delta;
        view.rotation_deg = delta * self.config.rotation_factor;
        view.overlay_opacity = strength;
        if delta < 0.0 {
            view.left_indicator = strength;
            view.right_indicator = 0.0;
        } else {
            view.right_indicator = strength;
            view.left_indicator = 0.0;
        }
    }

    /// Release the card. Returns the swipe direction if the drag passed the
    /// threshold, otherwise snaps the card back and returns `None`.
    pub fn end_drag(&mut self, card: CardId) -> Option<Direction> {
        let drag = self.drag.filter(|d| d.card == card)?;
        self.drag = None;

        let direction = if drag.delta_x > self.config.swipe_threshold {
            Some(Direction::Advance)
        } else if drag.delta_x < -self.config.swipe_threshold {
            Some(Direction::Eliminate)
        } else {
            None
        };

        match direction {
            Some(d) => self.fly_out(card, d),
            None => {
                let view = self.views.entry(card).or_default();
                view.clear_indicators();
                view.offset_x = 0.0;
                view.rotation_deg = 0.0;
                view.opacity = 1.0;
            }
        }
        direction
    }

    /// Send a decided card off screen in the swipe direction.
    pub fn fly_out(&mut self, card: CardId, direction: Direction) {
        let sign = if direction.is_advance() { 1.0 } else { -1.0 };
        let rotation = self.config.fly_out_rotation;
        let view = self.views.entry(card).or_default();
        view.offset_x = sign * FLY_OUT_PERCENT;
        view.flown_out = true;
        view.rotation_deg = sign * rotation;
        view.opacity = 0.0;
        view.clear_indicators();
    }

    /// Reset the given cards to their resting view for a new round.
    pub fn reset_round(&mut self, cards: impl IntoIterator<Item = CardId>) {
        for card in cards {
            self.views.insert(card, CardView::default());
        }
    }

    /// Forget every card (restart).
    pub fn clear(&mut self) {
        self.views.clear();
        self.drag = None;
    }
}
