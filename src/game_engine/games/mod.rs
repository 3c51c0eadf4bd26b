//! One generator per mini-game.
//!
//! Every public function takes `&mut impl Rng` plus the parameters its
//! game actually scales with, and returns a fully-assembled [`Problem`]
//! including the mascot prompt:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty, problem_id: String) -> Problem
//! ```
//!
//! Counting additionally takes the level number. The dispatcher in
//! `generator.rs` routes to these.
//!
//! [`Problem`]: crate::game_engine::models::Problem

pub mod arithmetic;
pub mod comparing;
pub mod counting;
pub mod ordering;
pub mod place_value;
