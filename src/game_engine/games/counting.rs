use rand::Rng;

use crate::game_engine::helpers::sample_distinct;
use crate::game_engine::models::{
    CountingProblem, Difficulty, GameKind, Problem, ProblemBody,
};

/// How many cells to hide: the level-scaled base plus the tier bonus,
/// capped at half the grid so the board stays solvable at a glance.
fn missing_count(difficulty: Difficulty, level: u32) -> u32 {
    let base = level * 2;
    (base + difficulty.missing_bonus()).min(difficulty.grid_size() / 2)
}

pub fn generate<R: Rng>(
    rng: &mut R,
    difficulty: Difficulty,
    level: u32,
    problem_id: String,
) -> Problem {
    let grid_size = difficulty.grid_size();
    let count = missing_count(difficulty, level);

    // count <= grid_size / 2, so the rejection sampler's draw space is
    // always at least twice the requested subset.
    let missing = sample_distinct(rng, count as usize, 1, grid_size);

    let prompt = format!("Can you fill in the {} missing numbers?", count);

    Problem {
        problem_id,
        game: GameKind::Counting,
        difficulty,
        prompt,
        body: ProblemBody::Counting(CountingProblem { grid_size, missing }),
    }
}
