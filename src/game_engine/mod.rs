//! Core game engine — problem generation, answer checking, shared sampling.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: games, difficulty tiers, problem/answer shapes |
//! | `helpers`   | Bounded rejection sampling and Fisher-Yates shuffling |
//! | `generator` | Single entry point `generate_problem()` — dispatches to games |
//! | `games`     | Five per-game generators (counting, place value, ordering, comparing, arithmetic) |
//! | `checker`   | Pure answer checkers, one per game plus a uniform dispatch |

pub mod checker;
pub mod games;
pub mod generator;
pub mod helpers;
pub mod models;

// Re-export the public API surface so callers can use
// `game_engine::generate_problem` without reaching into sub-modules.
pub use checker::check;
pub use generator::{generate_problem, generate_with};
pub use models::{
    Answer, ArithmeticProblem, Blocks, CellInputs, Comparison, ComparingProblem,
    CountingProblem, Difficulty, GameKind, Operator, OrderingProblem, PlaceValueProblem,
    Problem, ProblemBody, ProblemRequest, SortDirection,
};
