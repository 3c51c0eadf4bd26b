use rand::Rng;

use crate::game_engine::models::{
    Difficulty, GameKind, PlaceValueProblem, Problem, ProblemBody,
};

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty, problem_id: String) -> Problem {
    // Always a two-digit target; the tens/ones split is the whole point.
    let target = rng.gen_range(10..=99u32);

    Problem {
        problem_id,
        game: GameKind::PlaceValue,
        difficulty,
        prompt: format!("Build the number {} using blocks!", target),
        body: ProblemBody::PlaceValue(PlaceValueProblem { target }),
    }
}
