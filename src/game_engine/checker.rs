//! Pure answer checkers. No state, no side effects; the session layer
//! owns the streak/score mutation and the next-problem transition.

use crate::game_engine::models::{
    Answer, ArithmeticProblem, Blocks, CellInputs, Comparison, ComparingProblem,
    CountingProblem, OrderingProblem, PlaceValueProblem, Problem, ProblemBody,
};

/// Parse one grid cell. Empty or non-numeric text counts as 0, which can
/// never match a hidden value (those start at 1).
pub fn parse_cell(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Hidden cells whose current input already matches, for live colouring.
pub fn counting_correct_cells(problem: &CountingProblem, inputs: &CellInputs) -> Vec<u32> {
    problem
        .missing
        .iter()
        .copied()
        .filter(|cell| {
            inputs
                .get(cell)
                .map(|raw| parse_cell(raw) == *cell)
                .unwrap_or(false)
        })
        .collect()
}

/// Success requires every hidden cell to hold its true value.
pub fn check_counting(problem: &CountingProblem, inputs: &CellInputs) -> bool {
    counting_correct_cells(problem, inputs).len() == problem.missing.len()
}

pub fn check_place_value(problem: &PlaceValueProblem, blocks: Blocks) -> bool {
    blocks.value() == problem.target
}

/// The arrangement must equal the directed sort element-wise. All values
/// are distinct by construction, so there is no tie to break.
pub fn check_ordering(problem: &OrderingProblem, arrangement: &[u32]) -> bool {
    arrangement == problem.solution().as_slice()
}

pub fn check_comparing(problem: &ComparingProblem, choice: Comparison) -> bool {
    choice == problem.relation()
}

pub fn check_arithmetic(problem: &ArithmeticProblem, chosen: u32) -> bool {
    chosen == problem.operator.apply(problem.operand_a, problem.operand_b)
}

/// Uniform dispatch for the session layer. An answer variant that does not
/// match the problem's game is wrong, not an error.
pub fn check(problem: &Problem, answer: &Answer) -> bool {
    match (&problem.body, answer) {
        (ProblemBody::Counting(p), Answer::Counting(inputs)) => check_counting(p, inputs),
        (ProblemBody::PlaceValue(p), Answer::PlaceValue(blocks)) => {
            check_place_value(p, *blocks)
        }
        (ProblemBody::Ordering(p), Answer::Ordering(arrangement)) => {
            check_ordering(p, arrangement)
        }
        (ProblemBody::Comparing(p), Answer::Comparing(choice)) => check_comparing(p, *choice),
        (ProblemBody::Arithmetic(p), Answer::Arithmetic(chosen)) => {
            check_arithmetic(p, *chosen)
        }
        _ => false,
    }
}
