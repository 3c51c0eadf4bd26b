//! Full demo of the five mini-games.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `number_spark` works end to end:
//!
//! 1. **A scripted first visit** — the arithmetic game is entered with a
//!    fixed seed, the intro card and guided walkthrough play out, a correct
//!    answer fires the celebration, and the advance token rolls the next
//!    problem.
//!
//! 2. **One problem per game** — each game generates once with a fixed
//!    seed, so the output is deterministic and reproducible.
//!
//! ## Key concepts demonstrated
//!
//! - `ProblemRequest::new(game)` — minimal one-argument constructor;
//!   defaults: Easy, level 1, entropy.
//! - `rng_seed: Some(u64)` / `enter_seeded` make the output fully
//!   deterministic.
//! - The tutorial overlay suppresses submissions until it completes, and
//!   completion durably sets the per-game seen flag.
//! - `SubmitResult` carries the confetti parameters and a timed advance
//!   token; a stale token is ignored.

use number_spark::{
    generate_problem, ui_adapter, AnchorResolver, Answer, AppShell, Celebration,
    CelebrationEffect, Comparison, Difficulty, GameKind, MemorySeenStore, Problem, ProblemBody,
    ProblemRequest, Rect, StepLayout, TutorialState, Viewport,
};

/// Console confetti.
struct PrintedConfetti;

impl CelebrationEffect for PrintedConfetti {
    fn fire(&mut self, celebration: Celebration) {
        println!(
            "  *** confetti: {} particles over {} degrees ***",
            celebration.particle_count, celebration.spread_degrees
        );
    }
}

/// Every anchor sits at a fixed spot in this fake 1280x720 layout.
struct DemoResolver;

impl AnchorResolver for DemoResolver {
    fn resolve(&self, anchor_id: &str) -> Option<Rect> {
        match anchor_id {
            "math-problem" => Some(Rect::new(120.0, 340.0, 600.0, 160.0)),
            "math-options" => Some(Rect::new(420.0, 340.0, 600.0, 120.0)),
            _ => None,
        }
    }
}

/// Derive the winning answer from the problem itself.
fn solve(problem: &Problem) -> Answer {
    match &problem.body {
        ProblemBody::Counting(p) => {
            let inputs = p.missing.iter().map(|&c| (c, c.to_string())).collect();
            Answer::Counting(inputs)
        }
        ProblemBody::PlaceValue(p) => Answer::PlaceValue(number_spark::Blocks::new(
            p.target / 10,
            p.target % 10,
        )),
        ProblemBody::Ordering(p) => Answer::Ordering(p.solution()),
        ProblemBody::Comparing(p) => Answer::Comparing(Comparison::of(p.left, p.right)),
        ProblemBody::Arithmetic(p) => Answer::Arithmetic(p.answer),
    }
}

/// Generate and pretty-print one problem.
fn print_problem(game: GameKind, seed: u64) {
    let problem = generate_problem(&ProblemRequest {
        game,
        difficulty: Difficulty::Medium,
        level: 1,
        rng_seed: Some(seed),
    });

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  ID: {}", game, problem.problem_id);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Prompt: {}", problem.prompt);

    match &problem.body {
        ProblemBody::Counting(p) => {
            println!("  Grid 1..={} with {} hidden cells: {:?}",
                p.grid_size, p.missing.len(), p.missing);
        }
        ProblemBody::PlaceValue(p) => {
            println!("  Target: {}  (e.g. {} tens + {} ones)",
                p.target, p.target / 10, p.target % 10);
        }
        ProblemBody::Ordering(p) => {
            println!("  Balloons: {:?}  direction: {}", p.numbers, p.direction);
            println!("  Winning order: {:?}", p.solution());
        }
        ProblemBody::Comparing(p) => {
            println!("  Ponds: {} vs {}  ->  {} {} {}",
                p.left, p.right, p.left, p.relation(), p.right);
        }
        ProblemBody::Arithmetic(p) => {
            println!("  {} {} {} = ?   options: {:?}",
                p.operand_a, p.operator, p.operand_b, p.options);
        }
    }
    println!();
}

fn main() {
    let mut confetti = PrintedConfetti;

    println!();
    println!("══ Scripted first visit: Math Wizard ══");
    println!();

    let mut shell = AppShell::new(MemorySeenStore::new());
    shell.enter_seeded(GameKind::Arithmetic, 42);

    if let Some(card) = shell.intro_card() {
        println!("  Intro: {} — {}", card.title, card.description);
        for (i, line) in card.instructions.iter().enumerate() {
            println!("    {}. {}", i + 1, line);
        }
    }
    shell.dismiss_intro();

    let viewport = Viewport { width: 1280.0, height: 720.0 };
    while let TutorialState::ShowingStep(_) = shell.tutorial_state() {
        if let Some(tutorial) = shell.tutorial() {
            if let (Some(step), Some((index, total))) =
                (tutorial.current_step(), tutorial.progress())
            {
                println!("  Tutorial {}/{}: {} — {}", index, total, step.title, step.body);
            }
        }
        match shell.tutorial_layout(&DemoResolver, viewport) {
            StepLayout::Positioned { highlight, tooltip_top, tooltip_left } => println!(
                "    highlight {}x{} at ({}, {}); tooltip at ({}, {})",
                highlight.width, highlight.height, highlight.top, highlight.left,
                tooltip_top, tooltip_left
            ),
            StepLayout::Pending => println!("    anchor not rendered yet — retrying"),
            StepLayout::Hidden => {}
        }
        shell.acknowledge_tutorial();
    }
    println!("  Tutorial complete; the seen flag is stored.");
    println!();

    let problem = shell.session().map(|s| s.problem().clone());
    if let Some(problem) = problem {
        println!("  Mascot: {}", shell.mascot_message());
        let result = shell
            .submit(&solve(&problem))
            .expect("input is open after the tutorial");
        println!("  Submitted the right answer: {}", result.feedback);
        if let Some(celebration) = result.celebration {
            confetti.fire(celebration);
        }
        if let Some(pending) = result.advance {
            println!("  ...{} ms later the next problem arrives:", pending.delay_ms);
            shell.advance(pending.token);
            println!("  Mascot: {}", shell.mascot_message());
        }
    }
    println!();

    println!("══ One problem per game (fixed seeds) ══");
    println!();
    for (game, seed) in [
        (GameKind::Counting, 7),
        (GameKind::PlaceValue, 11),
        (GameKind::Ordering, 23),
        (GameKind::Comparing, 31),
        (GameKind::Arithmetic, 47),
    ] {
        print_problem(game, seed);
    }

    println!("══ Client view state (JSON) ══");
    println!();
    let view = ui_adapter::shell_view(&shell);
    println!("{}", serde_json::to_string_pretty(&view).unwrap_or_default());
}
