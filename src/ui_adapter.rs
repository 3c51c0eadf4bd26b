use serde_json::{json, Value};

use crate::game_engine::models::{
    ArithmeticProblem, ComparingProblem, CountingProblem, Difficulty, GameKind,
    OrderingProblem, PlaceValueProblem, Problem, ProblemBody,
};
use crate::session::GameSession;
use crate::shell::AppShell;
use crate::tutorial::store::SeenStore;
use crate::tutorial::TutorialState;

/// Ponds render at most this many fish; the rest collapse into "+N more".
const MAX_VISIBLE_FISH: u32 = 20;

/// Counting dots under the arithmetic operands only help small numbers.
const MAX_DOTTED_OPERAND: u32 = 15;

/// Build one grid cell entry: given cells carry their value, hidden cells
/// carry the anchor id of their input box.
fn counting_cell(problem: &CountingProblem, value: u32) -> Value {
    if problem.is_missing(value) {
        json!({
            "cell": value,
            "given": Value::Null,
            "anchor": format!("input-{}", value)
        })
    } else {
        json!({
            "cell": value,
            "given": value,
            "anchor": Value::Null
        })
    }
}

fn counting_view(problem: &CountingProblem) -> Value {
    let cells: Vec<Value> = (1..=problem.grid_size)
        .map(|v| counting_cell(problem, v))
        .collect();
    json!({
        "grid_size": problem.grid_size,
        "columns": if problem.grid_size <= 20 { 5 } else { 10 },
        "missing_count": problem.missing.len(),
        "cells": cells
    })
}

fn place_value_view(problem: &PlaceValueProblem) -> Value {
    json!({
        "target": problem.target,
        "max_tens": crate::game_engine::models::Blocks::MAX_TENS,
        "max_ones": crate::game_engine::models::Blocks::MAX_ONES
    })
}

fn ordering_view(problem: &OrderingProblem) -> Value {
    json!({
        "balloons": problem.numbers,
        "direction": problem.direction,
        "direction_label": problem.direction.label()
    })
}

/// One pond: the capped fish count plus the overflow badge.
fn pond(count: u32) -> Value {
    let visible = count.min(MAX_VISIBLE_FISH);
    json!({
        "count": count,
        "visible_fish": visible,
        "overflow": count.saturating_sub(MAX_VISIBLE_FISH),
        "fish_size": 20u32.max(40u32.saturating_sub(visible))
    })
}

fn comparing_view(problem: &ComparingProblem) -> Value {
    json!({
        "left": pond(problem.left),
        "right": pond(problem.right)
    })
}

/// Dots are drawn only on Easy and only for operands small enough to count.
fn operand_dots(difficulty: Difficulty, operand: u32) -> Value {
    if difficulty == Difficulty::Easy && operand <= MAX_DOTTED_OPERAND {
        json!(operand)
    } else {
        Value::Null
    }
}

fn arithmetic_view(problem: &ArithmeticProblem, difficulty: Difficulty) -> Value {
    json!({
        "operand_a": problem.operand_a,
        "operand_b": problem.operand_b,
        "operator": problem.operator.to_string(),
        "dots_a": operand_dots(difficulty, problem.operand_a),
        "dots_b": operand_dots(difficulty, problem.operand_b),
        "options": problem.options,
        "drop_anchor": "math-drop-zone"
    })
}

fn problem_body_view(problem: &Problem) -> Value {
    match &problem.body {
        ProblemBody::Counting(p)   => counting_view(p),
        ProblemBody::PlaceValue(p) => place_value_view(p),
        ProblemBody::Ordering(p)   => ordering_view(p),
        ProblemBody::Comparing(p)  => comparing_view(p),
        ProblemBody::Arithmetic(p) => arithmetic_view(p, problem.difficulty),
    }
}

/// View state for one mounted game, shaped the way the client components
/// consume it.
pub fn session_view(session: &GameSession) -> Value {
    let problem = session.problem();
    json!({
        "game": session.game().key(),
        "difficulty": session.difficulty().to_string(),
        "problem_id": problem.problem_id,
        "prompt": problem.prompt,
        "level": session.level(),
        "streak": session.streak(),
        "score": session.score(),
        "locked": session.is_locked(),
        "board": problem_body_view(problem)
    })
}

fn menu_view(active_difficulty: Difficulty) -> Value {
    let cards: Vec<Value> = GameKind::all()
        .iter()
        .map(|g| json!({ "game": g.key(), "title": g.to_string() }))
        .collect();
    json!({
        "difficulty": active_difficulty.to_string(),
        "cards": cards
    })
}

fn tutorial_view<S: SeenStore>(shell: &AppShell<S>) -> Value {
    let tutorial = match shell.tutorial() {
        Some(tutorial) => tutorial,
        None => return json!({ "state": "inactive" }),
    };
    match tutorial.state() {
        TutorialState::Inactive => json!({ "state": "inactive" }),
        TutorialState::Completed => json!({ "state": "completed" }),
        TutorialState::ShowingStep(_) => match (tutorial.current_step(), tutorial.progress()) {
            (Some(step), Some((index, total))) => json!({
                "state": "showing",
                "anchor": step.anchor,
                "title": step.title,
                "body": step.body,
                "side": step.side,
                "step": index,
                "total": total,
                "last": index == total
            }),
            // ShowingStep always indexes a real step; degrade anyway.
            _ => json!({ "state": "inactive" }),
        },
    }
}

/// Full client view: menu or mounted game, mascot, intro modal, tutorial.
pub fn shell_view<S: SeenStore>(shell: &AppShell<S>) -> Value {
    let screen = match shell.session() {
        Some(session) => session_view(session),
        None => menu_view(shell.difficulty()),
    };

    let intro = match shell.intro_card() {
        Some(card) => json!({
            "title": card.title,
            "description": card.description,
            "instructions": card.instructions
        }),
        None => Value::Null,
    };

    json!({
        "mode": shell.mode().map(|g| g.key()).unwrap_or("MENU"),
        "difficulty": shell.difficulty().to_string(),
        "mascot": shell.mascot_message(),
        "intro": intro,
        "tutorial": tutorial_view(shell),
        "screen": screen
    })
}
