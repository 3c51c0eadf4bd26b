//! Mascot text: random praise/retry lines and the fixed per-game prompts.

use rand::Rng;

use crate::game_engine::models::GameKind;

/// Mascot greeting on the menu before any game is picked.
pub const GREETING: &str = "Hi! I'm Sparky. Pick a game to start!";

pub const POSITIVE: [&str; 6] = [
    "Great job!",
    "You did it!",
    "Super work!",
    "Correct!",
    "Awesome!",
    "That's right!",
];

pub const NEGATIVE: [&str; 5] = [
    "Try again!",
    "Not quite.",
    "Give it another shot.",
    "Oops, almost!",
    "Keep trying!",
];

/// One random line from the fixed pool for the outcome, so consecutive
/// answers don't read identically.
pub fn feedback_message<R: Rng>(rng: &mut R, success: bool) -> &'static str {
    if success {
        POSITIVE[rng.gen_range(0..POSITIVE.len())]
    } else {
        NEGATIVE[rng.gen_range(0..NEGATIVE.len())]
    }
}

/// The fixed instructional sentence for a game, or the menu prompt.
pub fn mascot_message(mode: Option<GameKind>) -> &'static str {
    match mode {
        Some(GameKind::Counting)   => "Fill in all the missing numbers in the grid!",
        Some(GameKind::PlaceValue) => "Drag the blocks to build the target number.",
        Some(GameKind::Ordering)   => "Drag the balloons to put them in the right order.",
        Some(GameKind::Comparing)  => "Choose the sign that points to the bigger number.",
        Some(GameKind::Arithmetic) => "Solve the math problem by picking the right answer!",
        None                       => "Pick a game to start learning math!",
    }
}
