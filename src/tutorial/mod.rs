//! Guided walkthrough shown on a game's first visit.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `geometry` | Highlight rectangle and tooltip placement with viewport clamping |
//! | `store`    | Durable per-game "seen" flag with a soft-fail backend wrapper |
//! | `steps`    | Per-game step catalogs and intro cards |
//!
//! The sequencer itself lives here: a small state machine
//! Inactive -> ShowingStep(0..n) -> Completed, advancing on user
//! acknowledgment and durably recording completion. There is no
//! cancellation path; replaying re-enters step 0 without clearing the
//! stored flag.

pub mod geometry;
pub mod steps;
pub mod store;

use serde::{Deserialize, Serialize};

use crate::game_engine::models::GameKind;
use geometry::{highlight_rect, tooltip_position, Rect, TooltipSide, Viewport};
use store::SeenStore;

/// Anchors render late (mount animations); the host retries resolution on
/// this schedule, in milliseconds, on top of resize/scroll re-layouts.
pub const ANCHOR_RETRY_MS: [u64; 2] = [100, 500];

/// One walkthrough step: which anchor to spotlight and what to say.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialStep {
    /// Anchor identifier resolved by the presentation layer.
    pub anchor: String,
    pub title: String,
    pub body: String,
    pub side: TooltipSide,
}

impl TutorialStep {
    pub fn new(
        anchor: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        side: TooltipSide,
    ) -> Self {
        TutorialStep {
            anchor: anchor.into(),
            title: title.into(),
            body: body.into(),
            side,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TutorialState {
    Inactive,
    ShowingStep(usize),
    Completed,
}

/// Where to draw the current step, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepLayout {
    /// No step is active.
    Hidden,
    /// The anchor did not resolve yet; dim the screen and retry on
    /// [`ANCHOR_RETRY_MS`].
    Pending,
    Positioned {
        highlight: Rect,
        tooltip_top: f64,
        tooltip_left: f64,
    },
}

/// Supplied by the presentation layer: the on-screen bounds of a named
/// anchor, if it is currently rendered.
pub trait AnchorResolver {
    fn resolve(&self, anchor_id: &str) -> Option<Rect>;
}

pub struct TutorialSequencer {
    game: GameKind,
    steps: Vec<TutorialStep>,
    state: TutorialState,
}

impl TutorialSequencer {
    pub fn new(game: GameKind, steps: Vec<TutorialStep>) -> Self {
        TutorialSequencer {
            game,
            steps,
            state: TutorialState::Inactive,
        }
    }

    pub fn game(&self) -> GameKind {
        self.game
    }

    pub fn state(&self) -> TutorialState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TutorialState::ShowingStep(_))
    }

    pub fn steps(&self) -> &[TutorialStep] {
        &self.steps
    }

    pub fn current_step(&self) -> Option<&TutorialStep> {
        match self.state {
            TutorialState::ShowingStep(i) => self.steps.get(i),
            _ => None,
        }
    }

    /// (1-based step, total) for the "1 / 3" badge.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self.state {
            TutorialState::ShowingStep(i) => Some((i + 1, self.steps.len())),
            _ => None,
        }
    }

    /// Enter step 0 if the durable flag for this game is unset. A game
    /// whose flag is already set never auto-starts.
    pub fn start_if_unseen(&mut self, store: &impl SeenStore) -> bool {
        if self.steps.is_empty() || store.get(self.game.key()) {
            return false;
        }
        self.state = TutorialState::ShowingStep(0);
        true
    }

    /// Re-enter step 0 unconditionally ("how to play" button). Does not
    /// clear the durable flag.
    pub fn replay(&mut self) {
        if !self.steps.is_empty() {
            self.state = TutorialState::ShowingStep(0);
        }
    }

    /// User acknowledgment: advance one step, or complete and durably
    /// record the seen flag on the last one. A no-op outside ShowingStep.
    pub fn acknowledge(&mut self, store: &mut impl SeenStore) -> TutorialState {
        if let TutorialState::ShowingStep(i) = self.state {
            if i + 1 < self.steps.len() {
                self.state = TutorialState::ShowingStep(i + 1);
            } else {
                self.state = TutorialState::Completed;
                store.set(self.game.key());
            }
        }
        self.state
    }

    /// Resolve the active step's anchor and compute highlight + tooltip
    /// placement. Recompute on resize, scroll, and the retry schedule.
    pub fn layout(&self, resolver: &impl AnchorResolver, viewport: Viewport) -> StepLayout {
        let step = match self.current_step() {
            Some(step) => step,
            None => return StepLayout::Hidden,
        };
        match resolver.resolve(&step.anchor) {
            Some(target) => {
                let (tooltip_top, tooltip_left) =
                    tooltip_position(target, step.side, viewport);
                StepLayout::Positioned {
                    highlight: highlight_rect(target),
                    tooltip_top,
                    tooltip_left,
                }
            }
            None => StepLayout::Pending,
        }
    }
}
