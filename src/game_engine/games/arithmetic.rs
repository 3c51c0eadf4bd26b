use rand::Rng;

use crate::game_engine::helpers::{shuffle, MAX_DRAWS_PER_VALUE};
use crate::game_engine::models::{
    ArithmeticProblem, Difficulty, GameKind, Operator, Problem, ProblemBody,
};

/// Total choices shown, correct answer included.
pub const OPTION_COUNT: usize = 3;

/// Decoys never exceed 1.5x the tier ceiling.
fn option_ceiling(max: u32) -> u32 {
    max * 3 / 2
}

/// Two decoys near the answer: candidate = answer +/- offset in [1, 5],
/// kept when non-negative, under the ceiling, and not already present.
///
/// answer <= max - 1 and max >= 20, so answer+1..=answer+5 are always
/// admissible; the draw loop cannot run dry, and the fallback scan makes
/// that unconditional.
fn decoy_options<R: Rng>(rng: &mut R, answer: u32, max: u32) -> Vec<u32> {
    let ceiling = option_ceiling(max) as i64;
    let mut options: Vec<u32> = vec![answer];

    let mut draws = 0usize;
    while options.len() < OPTION_COUNT && draws < OPTION_COUNT * MAX_DRAWS_PER_VALUE {
        draws += 1;
        let offset = rng.gen_range(1..=5i64);
        let sign = if rng.gen_bool(0.5) { 1 } else { -1 };
        let candidate = answer as i64 + offset * sign;

        if candidate >= 0 && candidate <= ceiling && !options.contains(&(candidate as u32)) {
            options.push(candidate as u32);
        }
    }

    if options.len() < OPTION_COUNT {
        for offset in 1..=5i64 {
            for candidate in [answer as i64 + offset, answer as i64 - offset] {
                if options.len() == OPTION_COUNT {
                    break;
                }
                if candidate >= 0 && candidate <= ceiling && !options.contains(&(candidate as u32))
                {
                    options.push(candidate as u32);
                }
            }
        }
    }

    shuffle(rng, &mut options);
    options
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty, problem_id: String) -> Problem {
    let max = difficulty.arithmetic_max();

    let operator = if rng.gen_bool(0.5) {
        Operator::Add
    } else {
        Operator::Subtract
    };

    let (operand_a, operand_b, answer) = match operator {
        Operator::Add => {
            // Draw the sum first so it can never exceed the ceiling, then
            // split it into two positive operands.
            let answer = rng.gen_range(2..=max - 1);
            let a = rng.gen_range(1..=answer - 1);
            (a, answer - a, answer)
        }
        Operator::Subtract => {
            // Subtrahend strictly below the minuend: result stays positive.
            let a = rng.gen_range(1..=max - 1);
            let b = rng.gen_range(0..a);
            (a, b, a - b)
        }
    };

    let options = decoy_options(rng, answer, max);

    Problem {
        problem_id,
        game: GameKind::Arithmetic,
        difficulty,
        prompt: "Drag the answer to the box!".to_string(),
        body: ProblemBody::Arithmetic(ArithmeticProblem {
            operand_a,
            operand_b,
            operator,
            answer,
            options,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn decoys_are_distinct_and_bounded() {
        let mut rng = StdRng::seed_from_u64(5);
        for answer in [0u32, 1, 2, 19, 99] {
            let options = decoy_options(&mut rng, answer, 100);
            assert_eq!(options.len(), OPTION_COUNT);
            assert!(options.contains(&answer));
            let mut seen = std::collections::HashSet::new();
            for &o in &options {
                assert!(o <= option_ceiling(100));
                assert!(seen.insert(o), "duplicate option {}", o);
            }
        }
    }

    #[test]
    fn decoys_near_zero_stay_non_negative() {
        // answer = 0 forces every negative candidate through the filter.
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let options = decoy_options(&mut rng, 0, 20);
            assert_eq!(options.len(), OPTION_COUNT);
        }
    }
}
