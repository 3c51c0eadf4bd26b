use rand::Rng;

use crate::game_engine::models::{
    ComparingProblem, Difficulty, GameKind, Problem, ProblemBody,
};

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty, problem_id: String) -> Problem {
    let max = difficulty.comparing_max();

    // Independent draws: equal ponds are allowed and exercise the "=" choice.
    let left = rng.gen_range(1..=max);
    let right = rng.gen_range(1..=max);

    Problem {
        problem_id,
        game: GameKind::Comparing,
        difficulty,
        prompt: "Which side has more fish? Help the alligator decide!".to_string(),
        body: ProblemBody::Comparing(ComparingProblem { left, right }),
    }
}
