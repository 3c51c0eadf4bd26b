use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Game / difficulty enums
// ---------------------------------------------------------------------------

/// The five mini-games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Counting,
    PlaceValue,
    Ordering,
    Comparing,
    Arithmetic,
}

impl GameKind {
    /// Stable identifier used for the durable tutorial flag
    /// (`tutorial_seen_<key>`) and for routing from the client.
    pub fn key(self) -> &'static str {
        match self {
            GameKind::Counting   => "COUNTING",
            GameKind::PlaceValue => "PLACE_VALUE",
            GameKind::Ordering   => "ORDERING",
            GameKind::Comparing  => "COMPARING",
            GameKind::Arithmetic => "ADDITION_SUBTRACTION",
        }
    }

    /// All five games in menu order.
    pub fn all() -> [GameKind; 5] {
        [
            GameKind::Counting,
            GameKind::PlaceValue,
            GameKind::Ordering,
            GameKind::Comparing,
            GameKind::Arithmetic,
        ]
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameKind::Counting   => "Counting & Grid",
            GameKind::PlaceValue => "Place Value",
            GameKind::Ordering   => "Ordering",
            GameKind::Comparing  => "Comparing",
            GameKind::Arithmetic => "Add & Subtract",
        };
        write!(f, "{}", s)
    }
}

/// Difficulty tier. Every numeric ceiling strictly increases with the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Counting grid length.
    pub fn grid_size(self) -> u32 {
        match self {
            Difficulty::Easy   => 20,
            Difficulty::Medium => 50,
            Difficulty::Hard   => 100,
        }
    }

    /// Extra missing cells on top of the level-scaled base count.
    pub fn missing_bonus(self) -> u32 {
        match self {
            Difficulty::Easy   => 0,
            Difficulty::Medium => 2,
            Difficulty::Hard   => 4,
        }
    }

    /// Largest sum / minuend in the arithmetic game.
    pub fn arithmetic_max(self) -> u32 {
        match self {
            Difficulty::Easy   => 20,
            Difficulty::Medium => 50,
            Difficulty::Hard   => 100,
        }
    }

    /// Largest pond size in the comparing game. Kept low so the fish
    /// stay countable on screen.
    pub fn comparing_max(self) -> u32 {
        match self {
            Difficulty::Easy   => 10,
            Difficulty::Medium => 25,
            Difficulty::Hard   => 50,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard   => write!(f, "Hard"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Wording used in prompts and the mode indicator.
    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending  => "Smallest to Largest",
            SortDirection::Descending => "Largest to Smallest",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending  => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    /// Apply to operands that were generated for this operator.
    /// Subtraction operands always satisfy `a >= b` by construction.
    pub fn apply(self, a: u32, b: u32) -> u32 {
        match self {
            Operator::Add      => a + b,
            Operator::Subtract => a - b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add      => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
        }
    }
}

/// Relation the player picks in the comparing game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    Less,
    Greater,
    Equal,
}

impl Comparison {
    /// The true relation of `left` to `right`.
    pub fn of(left: u32, right: u32) -> Comparison {
        if left < right {
            Comparison::Less
        } else if left > right {
            Comparison::Greater
        } else {
            Comparison::Equal
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Less    => write!(f, "<"),
            Comparison::Greater => write!(f, ">"),
            Comparison::Equal   => write!(f, "="),
        }
    }
}

// ---------------------------------------------------------------------------
// Problem shapes
// ---------------------------------------------------------------------------

/// Dense grid 1..=grid_size with a random subset of cells hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountingProblem {
    pub grid_size: u32,
    /// Hidden cell values, in sampled order. Distinct, each in [1, grid_size].
    pub missing: Vec<u32>,
}

impl CountingProblem {
    pub fn is_missing(&self, value: u32) -> bool {
        self.missing.contains(&value)
    }

    /// The first hidden cell, used as the tutorial anchor target.
    pub fn first_missing(&self) -> Option<u32> {
        self.missing.first().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceValueProblem {
    /// Always two digits: [10, 99].
    pub target: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingProblem {
    /// 5 distinct values in [1, 99], in sampled presentation order.
    pub numbers: Vec<u32>,
    pub direction: SortDirection,
}

impl OrderingProblem {
    /// The arrangement that wins, per the active direction.
    pub fn solution(&self) -> Vec<u32> {
        let mut sorted = self.numbers.clone();
        sorted.sort_unstable();
        if self.direction == SortDirection::Descending {
            sorted.reverse();
        }
        sorted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparingProblem {
    pub left: u32,
    pub right: u32,
}

impl ComparingProblem {
    pub fn relation(&self) -> Comparison {
        Comparison::of(self.left, self.right)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticProblem {
    pub operand_a: u32,
    pub operand_b: u32,
    pub operator: Operator,
    pub answer: u32,
    /// Exactly 3 distinct non-negative choices containing `answer`, shuffled.
    pub options: Vec<u32>,
}

/// Module-specific problem payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemBody {
    Counting(CountingProblem),
    PlaceValue(PlaceValueProblem),
    Ordering(OrderingProblem),
    Comparing(ComparingProblem),
    Arithmetic(ArithmeticProblem),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Per-game prefix + 8 hex digits, e.g. "OR-1A2B3C4D".
    pub problem_id: String,
    pub game: GameKind,
    pub difficulty: Difficulty,
    /// Mascot line shown when the problem appears.
    pub prompt: String,
    pub body: ProblemBody,
}

// ---------------------------------------------------------------------------
// Requests / answers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub game: GameKind,
    pub difficulty: Difficulty,
    /// Counting scales its missing-cell count with this; other games
    /// ignore it.
    pub level: u32,
    pub rng_seed: Option<u64>,
}

impl ProblemRequest {
    /// Minimal constructor: Easy, level 1, entropy seed.
    pub fn new(game: GameKind) -> Self {
        ProblemRequest {
            game,
            difficulty: Difficulty::Easy,
            level: 1,
            rng_seed: None,
        }
    }
}

/// Raw text typed into the hidden grid cells, keyed by the cell's true value.
pub type CellInputs = HashMap<u32, String>;

/// Tens/ones block counts the player has built up. Increment-only while
/// building (caps at 9 tens / 19 ones); clicking a placed block removes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blocks {
    pub tens: u32,
    pub ones: u32,
}

impl Blocks {
    pub const MAX_TENS: u32 = 9;
    pub const MAX_ONES: u32 = 19;

    pub fn new(tens: u32, ones: u32) -> Self {
        Blocks { tens, ones }
    }

    pub fn value(self) -> u32 {
        self.tens * 10 + self.ones
    }

    pub fn add_ten(&mut self) {
        if self.tens < Self::MAX_TENS {
            self.tens += 1;
        }
    }

    pub fn add_one(&mut self) {
        if self.ones < Self::MAX_ONES {
            self.ones += 1;
        }
    }

    pub fn remove_ten(&mut self) {
        self.tens = self.tens.saturating_sub(1);
    }

    pub fn remove_one(&mut self) {
        self.ones = self.ones.saturating_sub(1);
    }
}

/// A candidate answer, one variant per game. Submitting the wrong variant
/// for the current problem is simply an incorrect answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Answer {
    Counting(CellInputs),
    PlaceValue(Blocks),
    Ordering(Vec<u32>),
    Comparing(Comparison),
    Arithmetic(u32),
}
