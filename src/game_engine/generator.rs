use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::game_engine::{
    games,
    models::{Difficulty, GameKind, Problem, ProblemRequest},
};

/// Generate a unique problem ID from game + RNG.
fn make_problem_id(game: GameKind, rng: &mut impl RngCore) -> String {
    let prefix = match game {
        GameKind::Counting   => "CT",
        GameKind::PlaceValue => "PV",
        GameKind::Ordering   => "OR",
        GameKind::Comparing  => "CP",
        GameKind::Arithmetic => "AS",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Core dispatch over an existing RNG; used by sessions that keep one
/// random stream alive across problems.
pub fn generate_with<R: Rng>(
    rng: &mut R,
    game: GameKind,
    difficulty: Difficulty,
    level: u32,
) -> Problem {
    let problem_id = make_problem_id(game, rng);

    match game {
        GameKind::Counting =>
            games::counting::generate(rng, difficulty, level, problem_id),

        GameKind::PlaceValue =>
            games::place_value::generate(rng, difficulty, problem_id),

        GameKind::Ordering =>
            games::ordering::generate(rng, difficulty, problem_id),

        GameKind::Comparing =>
            games::comparing::generate(rng, difficulty, problem_id),

        GameKind::Arithmetic =>
            games::arithmetic::generate(rng, difficulty, problem_id),
    }
}

/// Single entry point: builds the RNG from the request's seed (or entropy)
/// and routes to the right game generator.
pub fn generate_problem(request: &ProblemRequest) -> Problem {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    generate_with(&mut rng, request.game, request.difficulty, request.level)
}
