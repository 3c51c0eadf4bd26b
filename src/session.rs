//! Per-game session control.
//!
//! A [`GameSession`] owns the state one mounted game module needs: the
//! current problem, streak/score counters, and the lock that suppresses
//! input while a correct-answer celebration plays. The host owns the
//! actual timer; the session hands it a [`PendingAdvance`] whose token
//! goes stale the moment the problem it belonged to is replaced, so a
//! late callback can never act on a torn-down or reset module.

use rand::rngs::StdRng;
use rand::SeedableRng;

use serde::{Deserialize, Serialize};

use crate::feedback::feedback_message;
use crate::game_engine::checker::check;
use crate::game_engine::generator::generate_with;
use crate::game_engine::models::{
    Answer, Difficulty, GameKind, Problem, ProblemBody, SortDirection,
};

/// Parameters for the confetti burst, passed straight to the effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Celebration {
    pub particle_count: u32,
    pub spread_degrees: u32,
}

/// Fire-and-forget confetti hook the host implements. No return value;
/// the core never waits on it.
pub trait CelebrationEffect {
    fn fire(&mut self, celebration: Celebration);
}

/// Handle for the deferred next-problem transition. Valid only for the
/// problem it was issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceToken {
    epoch: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    /// How long the celebration holds the screen before advancing.
    pub delay_ms: u64,
    pub token: AdvanceToken,
}

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub correct: bool,
    /// Mascot line for this outcome.
    pub feedback: &'static str,
    pub celebration: Option<Celebration>,
    pub advance: Option<PendingAdvance>,
}

/// Points the counting game awards per completed level.
pub const LEVEL_SCORE: u32 = 10;

fn celebration_for(game: GameKind) -> Celebration {
    let (particle_count, spread_degrees) = match game {
        GameKind::Counting   => (100, 70),
        GameKind::PlaceValue => (50, 45),
        GameKind::Ordering   => (80, 120),
        GameKind::Comparing  => (50, 70),
        GameKind::Arithmetic => (80, 60),
    };
    Celebration { particle_count, spread_degrees }
}

/// How long the celebration blocks input before the next problem.
fn advance_delay_ms(game: GameKind) -> u64 {
    match game {
        GameKind::Counting   => 2000,
        GameKind::PlaceValue => 2000,
        GameKind::Ordering   => 2500,
        GameKind::Comparing  => 2500,
        GameKind::Arithmetic => 1500,
    }
}

pub struct GameSession {
    game: GameKind,
    difficulty: Difficulty,
    level: u32,
    streak: u32,
    score: u32,
    problem: Problem,
    locked: bool,
    epoch: u64,
    rng: StdRng,
}

impl GameSession {
    pub fn new(game: GameKind, difficulty: Difficulty) -> Self {
        Self::from_rng(game, difficulty, StdRng::from_entropy())
    }

    /// Deterministic session: same seed, same problems and feedback.
    pub fn with_seed(game: GameKind, difficulty: Difficulty, seed: u64) -> Self {
        Self::from_rng(game, difficulty, StdRng::seed_from_u64(seed))
    }

    fn from_rng(game: GameKind, difficulty: Difficulty, mut rng: StdRng) -> Self {
        let problem = generate_with(&mut rng, game, difficulty, 1);
        GameSession {
            game,
            difficulty,
            level: 1,
            streak: 0,
            score: 0,
            problem,
            locked: false,
            epoch: 0,
            rng,
        }
    }

    pub fn game(&self) -> GameKind {
        self.game
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// True while a celebration is in flight and input is suppressed.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Check an answer. Returns `None` while locked — submissions during
    /// the celebration are swallowed, not queued.
    pub fn submit(&mut self, answer: &Answer) -> Option<SubmitResult> {
        if self.locked {
            return None;
        }

        if check(&self.problem, answer) {
            self.locked = true;
            self.streak += 1;
            if self.game == GameKind::Counting {
                self.score += LEVEL_SCORE;
            }
            Some(SubmitResult {
                correct: true,
                feedback: feedback_message(&mut self.rng, true),
                celebration: Some(celebration_for(self.game)),
                advance: Some(PendingAdvance {
                    delay_ms: advance_delay_ms(self.game),
                    token: AdvanceToken { epoch: self.epoch },
                }),
            })
        } else {
            self.streak = 0;
            Some(SubmitResult {
                correct: false,
                feedback: self.wrong_feedback(),
                celebration: None,
                advance: None,
            })
        }
    }

    /// Ordering coaches the direction instead of a generic retry line.
    fn wrong_feedback(&mut self) -> &'static str {
        if let ProblemBody::Ordering(p) = &self.problem.body {
            return match p.direction {
                SortDirection::Ascending => "Oops! Start with the SMALLEST number on the left.",
                SortDirection::Descending => "Oops! Start with the LARGEST number on the left.",
            };
        }
        feedback_message(&mut self.rng, false)
    }

    /// The deferred transition the celebration timer fires. Returns false
    /// (and changes nothing) if the token is stale — the problem it was
    /// issued for was already replaced by refresh/difficulty change.
    pub fn advance(&mut self, token: AdvanceToken) -> bool {
        if !self.locked || token.epoch != self.epoch {
            return false;
        }
        if self.game == GameKind::Counting {
            self.level += 1;
        }
        self.next_problem();
        true
    }

    /// Skip to a fresh problem immediately, invalidating any pending
    /// advance.
    pub fn refresh(&mut self) {
        self.next_problem();
    }

    /// Difficulty switches reset the run: streak, score, and level start
    /// over on a fresh problem.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.level = 1;
        self.streak = 0;
        self.score = 0;
        self.next_problem();
    }

    fn next_problem(&mut self) {
        self.epoch += 1;
        self.locked = false;
        self.problem = generate_with(&mut self.rng, self.game, self.difficulty, self.level);
    }
}
