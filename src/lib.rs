//! # number_spark
//!
//! A fully offline, deterministic game-logic core for five early-math
//! mini-games: counting grids, place-value block building, balloon
//! ordering, alligator comparing, and drag-to-answer addition/subtraction.
//!
//! The crate generates random problems, checks answers, tracks per-game
//! session state (streak, score, the celebration lock), drives the
//! first-visit guided tutorial with its highlight/tooltip geometry, and
//! supplies the mascot's feedback text. Rendering, gestures, confetti, and
//! real storage stay in the host behind small traits.
//!
//! ## How it works
//!
//! 1. Create a [`ProblemRequest`] with a game, difficulty tier, optional
//!    RNG seed, and (for counting) a level number.
//! 2. Call [`generate_problem`] — the engine samples operands, hidden
//!    cells, or balloon values within the tier's ranges, builds distractor
//!    options where the game needs them, and returns a [`Problem`] with
//!    its mascot prompt.
//! 3. Check submissions with [`check`], or let a [`GameSession`] own the
//!    loop: it locks input during the celebration, hands the host a timed
//!    advance token, and rolls the next problem when the token fires.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` (or
//!   `GameSession::with_seed`) to reproduce the exact same problems —
//!   useful for tests and bug reports.
//! - **One correct answer, always**: every generated problem is solvable
//!   by a valid user action, and distractor sets never duplicate the
//!   correct answer.
//! - **Soft-fail persistence**: the per-game tutorial flag degrades to
//!   "show the tutorial again" when the backing store is unavailable;
//!   nothing in the crate raises.
//!
//! ## Quick start
//!
//! ```rust
//! use number_spark::{
//!     check, generate_problem, Answer, Comparison, Difficulty, GameKind,
//!     ProblemBody, ProblemRequest,
//! };
//!
//! // Minimal — only the game is required (defaults: Easy, level 1, entropy):
//! let problem = generate_problem(&ProblemRequest::new(GameKind::PlaceValue));
//! println!("{}", problem.prompt);
//!
//! // Full control — set every field:
//! let problem = generate_problem(&ProblemRequest {
//!     game: GameKind::Comparing,
//!     difficulty: Difficulty::Hard,
//!     level: 1,
//!     rng_seed: Some(42),
//! });
//!
//! if let ProblemBody::Comparing(ponds) = &problem.body {
//!     let answer = Answer::Comparing(Comparison::of(ponds.left, ponds.right));
//!     assert!(check(&problem, &answer));
//! }
//! ```

pub mod feedback;
pub mod game_engine;
pub mod session;
pub mod shell;
pub mod tutorial;
pub mod ui_adapter;

// Convenience re-exports so callers can use `number_spark::generate_problem`
// directly without reaching into sub-modules.
pub use game_engine::{
    check, generate_problem, generate_with, Answer, ArithmeticProblem, Blocks, CellInputs,
    Comparison, ComparingProblem, CountingProblem, Difficulty, GameKind, Operator,
    OrderingProblem, PlaceValueProblem, Problem, ProblemBody, ProblemRequest, SortDirection,
};
pub use session::{
    AdvanceToken, Celebration, CelebrationEffect, GameSession, PendingAdvance, SubmitResult,
};
pub use shell::AppShell;
pub use tutorial::{
    geometry::{Rect, TooltipSide, Viewport},
    store::{MemorySeenStore, SeenBackend, SeenStore, SoftFailStore, StoreError},
    AnchorResolver, StepLayout, TutorialSequencer, TutorialState, TutorialStep,
};

#[cfg(test)]
mod tests;
