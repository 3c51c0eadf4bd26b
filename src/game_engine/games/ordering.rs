use rand::Rng;

use crate::game_engine::helpers::sample_distinct;
use crate::game_engine::models::{
    Difficulty, GameKind, OrderingProblem, Problem, ProblemBody, SortDirection,
};

/// Number of balloons on screen.
pub const BALLOON_COUNT: usize = 5;

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty, problem_id: String) -> Problem {
    // The balloons always span [1, 99] regardless of tier; five values is
    // already the whole challenge at this age.
    let numbers = sample_distinct(rng, BALLOON_COUNT, 1, 99);

    let direction = if rng.gen_bool(0.5) {
        SortDirection::Ascending
    } else {
        SortDirection::Descending
    };

    // The presentation order is exactly the sampled order. It may, rarely,
    // already be sorted; that free win is left in place.
    let prompt = format!(
        "Drag the balloons to order them from {}!",
        direction.label()
    );

    Problem {
        problem_id,
        game: GameKind::Ordering,
        difficulty,
        prompt,
        body: ProblemBody::Ordering(OrderingProblem { numbers, direction }),
    }
}
