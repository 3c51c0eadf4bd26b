//! Unit tests for the `number_spark` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical problem; different seeds → varied output |
//! | Structural | Per-game value ranges, distinctness, ID prefixes, non-empty prompts |
//! | Generated answers | Every generated problem is solvable by constructing its answer |
//! | Ordering permutations | Checker accepts exactly one of the 120 arrangements |
//! | Session | Lock, streak/score/level, stale advance tokens, difficulty resets |
//! | Tutorial | Step advance, durable completion, no auto-restart, layout states |
//! | Shell | Intro/tutorial gating, mascot routing, difficulty propagation |
//! | Feedback / adapter | Message pools, view-model shapes |

use crate::feedback::{feedback_message, mascot_message, NEGATIVE, POSITIVE};
use crate::game_engine::models::{
    Answer, Blocks, CellInputs, Comparison, Difficulty, GameKind, Operator, Problem,
    ProblemBody, ProblemRequest,
};
use crate::game_engine::{check, generate_problem};
use crate::session::GameSession;
use crate::shell::AppShell;
use crate::tutorial::geometry::{Rect, Viewport};
use crate::tutorial::steps::steps_for;
use crate::tutorial::store::{MemorySeenStore, SeenStore};
use crate::tutorial::{AnchorResolver, StepLayout, TutorialSequencer, TutorialState};
use crate::ui_adapter::{session_view, shell_view};

use rand::rngs::StdRng;
use rand::SeedableRng;

// ── helpers ──────────────────────────────────────────────────────────────────

/// Build a deterministic `ProblemRequest` at Medium difficulty.
fn req(game: GameKind, seed: u64) -> ProblemRequest {
    ProblemRequest {
        game,
        difficulty: Difficulty::Medium,
        level: 1,
        rng_seed: Some(seed),
    }
}

fn req_at(game: GameKind, difficulty: Difficulty, level: u32, seed: u64) -> ProblemRequest {
    ProblemRequest {
        game,
        difficulty,
        level,
        rng_seed: Some(seed),
    }
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

const TIERS: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

/// Construct the correct answer for any generated problem.
fn solving_answer(problem: &Problem) -> Answer {
    match &problem.body {
        ProblemBody::Counting(p) => {
            let mut inputs = CellInputs::new();
            for &cell in &p.missing {
                inputs.insert(cell, cell.to_string());
            }
            Answer::Counting(inputs)
        }
        ProblemBody::PlaceValue(p) => {
            Answer::PlaceValue(Blocks::new(p.target / 10, p.target % 10))
        }
        ProblemBody::Ordering(p) => Answer::Ordering(p.solution()),
        ProblemBody::Comparing(p) => Answer::Comparing(p.relation()),
        ProblemBody::Arithmetic(p) => Answer::Arithmetic(p.answer),
    }
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_problem() {
    for game in GameKind::all() {
        let a = generate_problem(&req(game, 12345));
        let b = generate_problem(&req(game, 12345));
        assert_eq!(a, b, "same-seed mismatch for {game:?}");
    }
}

#[test]
fn different_seeds_produce_varied_problems() {
    // Not a hard guarantee (collisions are possible in the smaller value
    // spaces) but holds comfortably for ordering and arithmetic.
    for game in [GameKind::Ordering, GameKind::Arithmetic] {
        let mut same_count = 0usize;
        let pairs = 40u64;
        for seed in 0..pairs {
            let a = generate_problem(&req(game, seed));
            let b = generate_problem(&req(game, seed + 500));
            if a.body == b.body {
                same_count += 1;
            }
        }
        assert!(
            same_count < pairs as usize / 4,
            "Too many identical problems across different seeds for {game:?} \
             ({same_count}/{pairs})"
        );
    }
}

#[test]
fn entropy_seed_produces_a_valid_problem() {
    // Smoke test: rng_seed: None must not panic and must stay solvable.
    for game in GameKind::all() {
        let problem = generate_problem(&ProblemRequest::new(game));
        assert!(!problem.problem_id.is_empty());
        assert!(!problem.prompt.is_empty());
        assert!(check(&problem, &solving_answer(&problem)), "{game:?} not solvable");
    }
}

// ── structural invariants ────────────────────────────────────────────────────

#[test]
fn every_problem_id_starts_with_game_prefix() {
    let expected_prefixes = [
        (GameKind::Counting,   "CT-"),
        (GameKind::PlaceValue, "PV-"),
        (GameKind::Ordering,   "OR-"),
        (GameKind::Comparing,  "CP-"),
        (GameKind::Arithmetic, "AS-"),
    ];
    for (game, prefix) in expected_prefixes {
        let p = generate_problem(&req(game, 1));
        assert!(
            p.problem_id.starts_with(prefix),
            "ID '{}' for {game:?} does not start with expected prefix '{prefix}'",
            p.problem_id
        );
    }
}

#[test]
fn counting_missing_cells_stay_within_half_the_grid() {
    for difficulty in TIERS {
        for level in [1u32, 2, 5, 25, 100] {
            for seed in SEEDS {
                let p = generate_problem(&req_at(GameKind::Counting, difficulty, level, seed));
                let ProblemBody::Counting(body) = &p.body else {
                    panic!("wrong body for counting");
                };
                assert_eq!(body.grid_size, difficulty.grid_size());
                assert!(
                    body.missing.len() as u32 <= body.grid_size / 2,
                    "{difficulty:?} level {level}: {} missing of {}",
                    body.missing.len(),
                    body.grid_size
                );
                let mut seen = std::collections::HashSet::new();
                for &cell in &body.missing {
                    assert!((1..=body.grid_size).contains(&cell));
                    assert!(seen.insert(cell), "duplicate missing cell {cell}");
                }
            }
        }
    }
}

#[test]
fn place_value_targets_are_two_digit() {
    for seed in SEEDS {
        let p = generate_problem(&req(GameKind::PlaceValue, seed));
        let ProblemBody::PlaceValue(body) = &p.body else {
            panic!("wrong body for place value");
        };
        assert!((10..=99).contains(&body.target));
    }
}

#[test]
fn ordering_samples_five_distinct_values() {
    for seed in SEEDS {
        let p = generate_problem(&req(GameKind::Ordering, seed));
        let ProblemBody::Ordering(body) = &p.body else {
            panic!("wrong body for ordering");
        };
        assert_eq!(body.numbers.len(), 5);
        let mut seen = std::collections::HashSet::new();
        for &n in &body.numbers {
            assert!((1..=99).contains(&n));
            assert!(seen.insert(n), "duplicate balloon {n}");
        }
    }
}

#[test]
fn comparing_values_respect_the_tier_ceiling() {
    for difficulty in TIERS {
        for seed in SEEDS {
            let p = generate_problem(&req_at(GameKind::Comparing, difficulty, 1, seed));
            let ProblemBody::Comparing(body) = &p.body else {
                panic!("wrong body for comparing");
            };
            let max = difficulty.comparing_max();
            assert!((1..=max).contains(&body.left));
            assert!((1..=max).contains(&body.right));
        }
    }
}

#[test]
fn arithmetic_operands_and_answer_agree() {
    for difficulty in TIERS {
        let max = difficulty.arithmetic_max();
        for seed in 0..100u64 {
            let p = generate_problem(&req_at(GameKind::Arithmetic, difficulty, 1, seed));
            let ProblemBody::Arithmetic(body) = &p.body else {
                panic!("wrong body for arithmetic");
            };
            match body.operator {
                Operator::Add => {
                    assert_eq!(body.operand_a + body.operand_b, body.answer);
                    assert!(body.answer <= max, "sum {} over ceiling {max}", body.answer);
                    assert!(body.operand_a >= 1 && body.operand_b >= 1);
                }
                Operator::Subtract => {
                    assert_eq!(body.operand_a - body.operand_b, body.answer);
                    assert!(body.operand_b < body.operand_a);
                    assert!(body.operand_a <= max - 1);
                }
            }
        }
    }
}

#[test]
fn arithmetic_options_are_three_distinct_values_with_the_answer() {
    for difficulty in TIERS {
        let ceiling = difficulty.arithmetic_max() * 3 / 2;
        for seed in 0..100u64 {
            let p = generate_problem(&req_at(GameKind::Arithmetic, difficulty, 1, seed));
            let ProblemBody::Arithmetic(body) = &p.body else {
                panic!("wrong body for arithmetic");
            };
            assert_eq!(body.options.len(), 3);
            assert!(body.options.contains(&body.answer));
            let mut seen = std::collections::HashSet::new();
            for &o in &body.options {
                assert!(o <= ceiling, "option {o} over {ceiling}");
                assert!(seen.insert(o), "duplicate option {o}");
            }
        }
    }
}

#[test]
fn ceilings_strictly_increase_with_tier() {
    for pair in TIERS.windows(2) {
        assert!(pair[0].grid_size() < pair[1].grid_size());
        assert!(pair[0].arithmetic_max() < pair[1].arithmetic_max());
        assert!(pair[0].comparing_max() < pair[1].comparing_max());
        assert!(pair[0].missing_bonus() < pair[1].missing_bonus());
    }
}

#[test]
fn blocks_increment_only_up_to_the_caps() {
    let mut blocks = Blocks::default();
    for _ in 0..12 {
        blocks.add_ten();
    }
    for _ in 0..25 {
        blocks.add_one();
    }
    assert_eq!(blocks, Blocks::new(9, 19));

    blocks.remove_ten();
    blocks.remove_one();
    assert_eq!(blocks.value(), 8 * 10 + 18);

    let mut empty = Blocks::default();
    empty.remove_ten();
    empty.remove_one();
    assert_eq!(empty.value(), 0);
}

#[test]
fn every_prompt_is_non_empty() {
    for game in GameKind::all() {
        for seed in SEEDS {
            let p = generate_problem(&req(game, seed));
            assert!(!p.prompt.is_empty(), "empty prompt for {game:?}");
        }
    }
}

// ── generated problems are solvable ──────────────────────────────────────────

#[test]
fn every_generated_problem_accepts_its_constructed_answer() {
    for game in GameKind::all() {
        for difficulty in TIERS {
            for seed in SEEDS {
                let p = generate_problem(&req_at(game, difficulty, 2, seed));
                assert!(
                    check(&p, &solving_answer(&p)),
                    "constructed answer rejected for {game:?} {difficulty:?} seed={seed}"
                );
            }
        }
    }
}

#[test]
fn near_miss_answers_are_rejected() {
    for seed in SEEDS {
        let p = generate_problem(&req(GameKind::Arithmetic, seed));
        let ProblemBody::Arithmetic(body) = &p.body else {
            panic!("wrong body");
        };
        for &option in body.options.iter().filter(|&&o| o != body.answer) {
            assert!(!check(&p, &Answer::Arithmetic(option)));
        }

        let p = generate_problem(&req(GameKind::Comparing, seed));
        let ProblemBody::Comparing(body) = &p.body else {
            panic!("wrong body");
        };
        let wrong = match body.relation() {
            Comparison::Less => Comparison::Greater,
            _ => Comparison::Less,
        };
        assert!(!check(&p, &Answer::Comparing(wrong)));
    }
}

/// Heap's algorithm: all k! arrangements of `values`.
fn permutations(values: &mut Vec<u32>, k: usize, out: &mut Vec<Vec<u32>>) {
    if k == 1 {
        out.push(values.clone());
        return;
    }
    for i in 0..k {
        permutations(values, k - 1, out);
        if k % 2 == 0 {
            values.swap(i, k - 1);
        } else {
            values.swap(0, k - 1);
        }
    }
}

#[test]
fn ordering_accepts_exactly_one_of_all_permutations() {
    let p = generate_problem(&req(GameKind::Ordering, 42));
    let ProblemBody::Ordering(body) = &p.body else {
        panic!("wrong body");
    };

    let mut values = body.numbers.clone();
    let mut all = Vec::new();
    permutations(&mut values, 5, &mut all);
    assert_eq!(all.len(), 120);

    let accepted = all
        .iter()
        .filter(|arrangement| check(&p, &Answer::Ordering((*arrangement).clone())))
        .count();
    assert_eq!(accepted, 1, "exactly one arrangement may win");
}

// ── session ──────────────────────────────────────────────────────────────────

#[test]
fn correct_answer_locks_celebrates_and_advances() {
    let mut session = GameSession::with_seed(GameKind::Comparing, Difficulty::Easy, 42);
    let first_id = session.problem().problem_id.clone();

    let answer = solving_answer(session.problem());
    let result = session.submit(&answer).expect("input not locked yet");
    assert!(result.correct);
    assert!(session.is_locked());
    assert_eq!(session.streak(), 1);

    let celebration = result.celebration.expect("correct answers celebrate");
    assert_eq!(celebration.particle_count, 50);
    assert_eq!(celebration.spread_degrees, 70);

    let pending = result.advance.expect("correct answers schedule an advance");
    assert_eq!(pending.delay_ms, 2500);

    // Input is swallowed while the celebration is in flight.
    assert!(session.submit(&answer).is_none());

    assert!(session.advance(pending.token));
    assert!(!session.is_locked());
    assert_ne!(session.problem().problem_id, first_id);
    assert_eq!(session.streak(), 1, "streak survives the advance");
}

#[test]
fn wrong_answer_resets_the_streak() {
    let mut session = GameSession::with_seed(GameKind::Comparing, Difficulty::Easy, 7);

    let correct = solving_answer(session.problem());
    let pending = session.submit(&correct).unwrap().advance.unwrap();
    session.advance(pending.token);
    assert_eq!(session.streak(), 1);

    let wrong = match solving_answer(session.problem()) {
        Answer::Comparing(Comparison::Less) => Answer::Comparing(Comparison::Greater),
        _ => Answer::Comparing(Comparison::Less),
    };
    let result = session.submit(&wrong).unwrap();
    assert!(!result.correct);
    assert!(result.celebration.is_none());
    assert!(result.advance.is_none());
    assert_eq!(session.streak(), 0);
    assert!(!session.is_locked(), "wrong answers keep input open");
}

#[test]
fn stale_advance_token_is_a_no_op() {
    let mut session = GameSession::with_seed(GameKind::Arithmetic, Difficulty::Easy, 9);

    let answer = solving_answer(session.problem());
    let pending = session.submit(&answer).unwrap().advance.unwrap();

    // Skip before the timer fires: the token must die with its problem.
    session.refresh();
    let id_after_refresh = session.problem().problem_id.clone();

    assert!(!session.advance(pending.token));
    assert_eq!(session.problem().problem_id, id_after_refresh);
    assert!(!session.is_locked());
}

#[test]
fn difficulty_change_resets_the_run_and_pending_tokens() {
    let mut session = GameSession::with_seed(GameKind::Counting, Difficulty::Easy, 11);

    let answer = solving_answer(session.problem());
    let pending = session.submit(&answer).unwrap().advance.unwrap();
    assert_eq!(session.score(), 10);

    session.set_difficulty(Difficulty::Hard);
    assert_eq!(session.difficulty(), Difficulty::Hard);
    assert_eq!(session.streak(), 0);
    assert_eq!(session.score(), 0);
    assert_eq!(session.level(), 1);
    assert!(!session.advance(pending.token), "token from the old run is dead");
}

#[test]
fn counting_levels_up_and_scores_through_the_celebration() {
    let mut session = GameSession::with_seed(GameKind::Counting, Difficulty::Easy, 3);
    assert_eq!(session.level(), 1);

    let pending = session
        .submit(&solving_answer(session.problem()))
        .unwrap()
        .advance
        .unwrap();
    assert_eq!(session.score(), 10);
    assert_eq!(session.level(), 1, "level bumps only when the timer fires");

    assert!(session.advance(pending.token));
    assert_eq!(session.level(), 2);

    let ProblemBody::Counting(body) = &session.problem().body else {
        panic!("wrong body");
    };
    // Easy level 2: base 4, bonus 0.
    assert_eq!(body.missing.len(), 4);
}

#[test]
fn ordering_coaches_the_direction_on_a_wrong_answer() {
    for seed in SEEDS {
        let mut session = GameSession::with_seed(GameKind::Ordering, Difficulty::Easy, seed);
        let ProblemBody::Ordering(body) = &session.problem().body else {
            panic!("wrong body");
        };
        // Reversing the solution is always wrong for distinct values.
        let mut wrong = body.solution();
        wrong.reverse();

        let result = session.submit(&Answer::Ordering(wrong)).unwrap();
        assert!(!result.correct);
        assert!(result.feedback.starts_with("Oops!"), "got '{}'", result.feedback);
    }
}

// ── tutorial ─────────────────────────────────────────────────────────────────

fn comparing_sequencer() -> TutorialSequencer {
    let problem = generate_problem(&req(GameKind::Comparing, 1));
    TutorialSequencer::new(GameKind::Comparing, steps_for(GameKind::Comparing, &problem))
}

#[test]
fn walkthrough_advances_then_completes_durably() {
    let mut store = MemorySeenStore::new();
    let mut sequencer = comparing_sequencer();
    let total = sequencer.steps().len();
    assert_eq!(total, 3);

    assert!(sequencer.start_if_unseen(&store));
    assert_eq!(sequencer.state(), TutorialState::ShowingStep(0));

    // N-1 acknowledgments land on the last step.
    for expected in 1..total {
        assert_eq!(
            sequencer.acknowledge(&mut store),
            TutorialState::ShowingStep(expected)
        );
    }
    assert_eq!(sequencer.progress(), Some((total, total)));
    assert!(!store.get(GameKind::Comparing.key()), "flag set only on completion");

    // One more completes and records the flag.
    assert_eq!(sequencer.acknowledge(&mut store), TutorialState::Completed);
    assert!(store.get(GameKind::Comparing.key()));

    // Acknowledging after completion changes nothing.
    assert_eq!(sequencer.acknowledge(&mut store), TutorialState::Completed);
}

#[test]
fn a_seen_game_does_not_auto_start() {
    let mut store = MemorySeenStore::new();
    store.set(GameKind::Comparing.key());

    let mut sequencer = comparing_sequencer();
    assert!(!sequencer.start_if_unseen(&store));
    assert_eq!(sequencer.state(), TutorialState::Inactive);

    // Explicit replay still works and leaves the flag alone.
    sequencer.replay();
    assert_eq!(sequencer.state(), TutorialState::ShowingStep(0));
    assert!(store.get(GameKind::Comparing.key()));
}

#[test]
fn seen_flag_reads_are_idempotent() {
    let store = MemorySeenStore::new();
    assert!(!store.get("COUNTING"));
    assert!(!store.get("COUNTING"));
}

struct FixedResolver(Option<Rect>);

impl AnchorResolver for FixedResolver {
    fn resolve(&self, _anchor_id: &str) -> Option<Rect> {
        self.0
    }
}

#[test]
fn layout_waits_for_late_anchors_then_positions() {
    let store = MemorySeenStore::new();
    let mut sequencer = comparing_sequencer();
    let viewport = Viewport { width: 1280.0, height: 720.0 };

    assert_eq!(
        sequencer.layout(&FixedResolver(None), viewport),
        StepLayout::Hidden,
        "inactive tutorial draws nothing"
    );

    sequencer.start_if_unseen(&store);
    assert_eq!(
        sequencer.layout(&FixedResolver(None), viewport),
        StepLayout::Pending,
        "unresolved anchor means retry, not failure"
    );

    let target = Rect::new(300.0, 500.0, 120.0, 60.0);
    match sequencer.layout(&FixedResolver(Some(target)), viewport) {
        StepLayout::Positioned { highlight, tooltip_top, tooltip_left } => {
            assert_eq!(highlight, Rect::new(290.0, 490.0, 140.0, 80.0));
            // First comparing step prefers the bottom side.
            assert_eq!(tooltip_top, 390.0);
            assert_eq!(tooltip_left, 410.0);
        }
        other => panic!("expected a positioned layout, got {other:?}"),
    }
}

#[test]
fn counting_steps_target_the_first_missing_cell() {
    let problem = generate_problem(&req(GameKind::Counting, 5));
    let ProblemBody::Counting(body) = &problem.body else {
        panic!("wrong body");
    };
    let steps = steps_for(GameKind::Counting, &problem);
    assert_eq!(steps[0].anchor, "counting-grid");
    assert_eq!(
        steps[1].anchor,
        format!("input-{}", body.first_missing().unwrap())
    );
    assert_eq!(steps[2].anchor, "check-btn");
}

// ── shell ────────────────────────────────────────────────────────────────────

#[test]
fn first_visit_runs_intro_then_tutorial_then_play() {
    let mut shell = AppShell::new(MemorySeenStore::new());
    shell.enter_seeded(GameKind::Comparing, 42);

    assert_eq!(shell.mode(), Some(GameKind::Comparing));
    assert!(shell.intro_open());
    assert_eq!(shell.intro_card().unwrap().title, "Hungry Alligator");

    shell.dismiss_intro();
    assert_eq!(shell.tutorial_state(), TutorialState::ShowingStep(0));

    // Submissions are suppressed while the overlay is up.
    let answer = solving_answer(shell.session().unwrap().problem());
    assert!(shell.submit(&answer).is_none());

    for _ in 0..3 {
        shell.acknowledge_tutorial();
    }
    assert_eq!(shell.tutorial_state(), TutorialState::Completed);

    let result = shell.submit(&answer).expect("play unlocked after tutorial");
    assert!(result.correct);
    assert_eq!(shell.mascot_message(), result.feedback);

    let pending = result.advance.unwrap();
    assert!(shell.advance(pending.token));
    let prompt = shell.session().unwrap().problem().prompt.clone();
    assert_eq!(shell.mascot_message(), prompt);
}

#[test]
fn second_visit_skips_intro_and_tutorial() {
    let mut shell = AppShell::new(MemorySeenStore::new());
    shell.enter_seeded(GameKind::Ordering, 1);
    shell.dismiss_intro();
    for _ in 0..3 {
        shell.acknowledge_tutorial();
    }

    shell.exit_to_menu();
    assert_eq!(shell.mode(), None);
    assert_eq!(shell.mascot_message(), mascot_message(None));

    shell.enter_seeded(GameKind::Ordering, 2);
    assert!(!shell.intro_open());
    shell.dismiss_intro();
    assert_eq!(
        shell.tutorial_state(),
        TutorialState::Inactive,
        "completed tutorials never auto-start"
    );
}

#[test]
fn difficulty_buttons_propagate_into_the_active_session() {
    let mut shell = AppShell::new(MemorySeenStore::new());
    shell.enter_seeded(GameKind::Comparing, 5);
    shell.set_difficulty(Difficulty::Hard);

    let session = shell.session().unwrap();
    assert_eq!(session.difficulty(), Difficulty::Hard);
    assert_eq!(shell.difficulty(), Difficulty::Hard);
}

#[test]
fn mascot_click_repeats_the_contextual_instruction() {
    let mut shell = AppShell::new(MemorySeenStore::new());
    shell.enter_seeded(GameKind::PlaceValue, 8);
    shell.mascot_clicked();
    assert_eq!(
        shell.mascot_message(),
        mascot_message(Some(GameKind::PlaceValue))
    );
}

// ── feedback ─────────────────────────────────────────────────────────────────

#[test]
fn feedback_comes_from_the_right_pool() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..50 {
        assert!(POSITIVE.contains(&feedback_message(&mut rng, true)));
        assert!(NEGATIVE.contains(&feedback_message(&mut rng, false)));
    }
    assert!(POSITIVE.len() >= 5);
    assert!(NEGATIVE.len() >= 5);
}

#[test]
fn every_game_has_its_own_mascot_prompt() {
    let mut prompts = std::collections::HashSet::new();
    for game in GameKind::all() {
        let prompt = mascot_message(Some(game));
        assert!(!prompt.is_empty());
        assert!(prompts.insert(prompt), "duplicate prompt for {game:?}");
    }
}

// ── view-model adapter ───────────────────────────────────────────────────────

#[test]
fn counting_view_marks_hidden_cells_with_anchors() {
    let session = GameSession::with_seed(GameKind::Counting, Difficulty::Easy, 21);
    let ProblemBody::Counting(body) = &session.problem().body else {
        panic!("wrong body");
    };

    let view = session_view(&session);
    let cells = view["board"]["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 20);
    assert_eq!(view["board"]["columns"], 5);

    for cell in cells {
        let value = cell["cell"].as_u64().unwrap() as u32;
        if body.is_missing(value) {
            assert!(cell["given"].is_null());
            assert_eq!(cell["anchor"], format!("input-{value}"));
        } else {
            assert_eq!(cell["given"], value);
        }
    }
}

#[test]
fn comparing_view_caps_visible_fish() {
    let mut found = false;
    // Hard tier can roll ponds over 20; verify the cap via a session that did.
    for seed in 0..200u64 {
        let session = GameSession::with_seed(GameKind::Comparing, Difficulty::Hard, seed);
        if let ProblemBody::Comparing(p) = &session.problem().body {
            if p.left > 20 {
                let view = session_view(&session);
                assert_eq!(view["board"]["left"]["visible_fish"], 20);
                assert_eq!(view["board"]["left"]["overflow"], (p.left - 20) as u64);
                found = true;
                break;
            }
        }
    }
    assert!(found, "no Hard pond over 20 fish in 200 seeds");
}

#[test]
fn shell_view_shows_the_menu_and_then_the_game() {
    let mut shell = AppShell::new(MemorySeenStore::new());

    let view = shell_view(&shell);
    assert_eq!(view["mode"], "MENU");
    assert_eq!(view["screen"]["cards"].as_array().unwrap().len(), 5);
    assert!(view["intro"].is_null());

    shell.enter_seeded(GameKind::Arithmetic, 13);
    let view = shell_view(&shell);
    assert_eq!(view["mode"], "ADDITION_SUBTRACTION");
    assert_eq!(view["intro"]["title"], "Math Wizard");
    assert_eq!(view["screen"]["board"]["options"].as_array().unwrap().len(), 3);

    shell.dismiss_intro();
    let view = shell_view(&shell);
    assert_eq!(view["tutorial"]["state"], "showing");
    assert_eq!(view["tutorial"]["anchor"], "math-problem");
    assert_eq!(view["tutorial"]["total"], 2);
}
