//! Step catalogs and intro cards for each game.
//!
//! Anchors here must match the ids the web client renders; counting's
//! second step targets the first hidden cell of the live problem.

use crate::game_engine::models::{GameKind, Problem, ProblemBody};

use super::geometry::TooltipSide;
use super::TutorialStep;

/// The "How to Play" modal shown before the first walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroCard {
    pub title: &'static str,
    pub description: &'static str,
    pub instructions: &'static [&'static str],
}

pub fn intro_for(game: GameKind) -> IntroCard {
    match game {
        GameKind::Counting => IntroCard {
            title: "Counting Grid",
            description: "Some numbers have gone missing from the grid! Can you help us find them?",
            instructions: &[
                "Look for the empty boxes in the grid.",
                "Figure out which number comes next in the counting pattern.",
                "Click the box and type the missing number.",
                "Click 'Check My Answers' when you are done!",
            ],
        },
        GameKind::PlaceValue => IntroCard {
            title: "Place Value Builder",
            description: "Let's act like construction workers and build numbers using blocks!",
            instructions: &[
                "Look at the 'Target' number at the top.",
                "Use Blue blocks for Tens (10).",
                "Use Green blocks for Ones (1).",
                "Click 'Add Ten' or 'Add One' until you match the target number!",
            ],
        },
        GameKind::Ordering => IntroCard {
            title: "Balloon Ordering",
            description: "The number balloons are floating away in the wrong order! We need to fix them.",
            instructions: &[
                "Read the sign at the top. It says 'Smallest to Largest' or 'Largest to Smallest'.",
                "Click and drag the balloons left or right.",
                "Look at the dots on the side to help you!",
                "Click 'Check Order' to see if you won!",
            ],
        },
        GameKind::Comparing => IntroCard {
            title: "Hungry Alligator",
            description: "The alligator is very hungry! He always wants to eat the side with MORE fish.",
            instructions: &[
                "Look at the two ponds of fish.",
                "Which pond has more fish?",
                "Click the alligator mouth that points to the bigger pond.",
                "If they have the same amount, click the smiling alligator in the middle!",
            ],
        },
        GameKind::Arithmetic => IntroCard {
            title: "Math Wizard",
            description: "Use your magical math powers to solve addition and subtraction problems!",
            instructions: &[
                "Look at the math problem (like 2 + 2).",
                "Look at the choices at the bottom.",
                "Drag the correct number into the question mark box.",
                "In 'Easy' mode, you can count the dots to help you!",
            ],
        },
    }
}

/// Walkthrough steps for a game, given the problem currently on screen.
pub fn steps_for(game: GameKind, problem: &Problem) -> Vec<TutorialStep> {
    match game {
        GameKind::Counting => {
            let input_anchor = match &problem.body {
                ProblemBody::Counting(p) => p
                    .first_missing()
                    .map(|cell| format!("input-{}", cell))
                    .unwrap_or_else(|| "input-missing".to_string()),
                _ => "input-missing".to_string(),
            };
            vec![
                TutorialStep::new(
                    "counting-grid",
                    "The Number Grid",
                    "Here is a grid of numbers. Look closely!",
                    TooltipSide::Top,
                ),
                TutorialStep::new(
                    input_anchor,
                    "Missing Numbers",
                    "Some numbers are gone! Find the empty box and type the correct number.",
                    TooltipSide::Top,
                ),
                TutorialStep::new(
                    "check-btn",
                    "Check Your Work",
                    "When you are done, click this button to see if you are right!",
                    TooltipSide::Top,
                ),
            ]
        }
        GameKind::PlaceValue => vec![
            TutorialStep::new(
                "pv-target",
                "Target Number",
                "This is the number we need to build.",
                TooltipSide::Bottom,
            ),
            TutorialStep::new(
                "pv-add-ten",
                "Add Tens",
                "Click this Blue button to add a 10-block.",
                TooltipSide::Top,
            ),
            TutorialStep::new(
                "pv-add-one",
                "Add Ones",
                "Click this Green button to add a 1-block.",
                TooltipSide::Top,
            ),
            TutorialStep::new(
                "pv-check",
                "Check Button",
                "When your blocks match the target, click here!",
                TooltipSide::Top,
            ),
        ],
        GameKind::Ordering => vec![
            TutorialStep::new(
                "order-mode",
                "The Rules",
                "Look here! Do we want smallest to largest, or largest to smallest?",
                TooltipSide::Bottom,
            ),
            TutorialStep::new(
                "balloon-container",
                "The Balloons",
                "Drag the balloons left or right to put them in order.",
                TooltipSide::Top,
            ),
            TutorialStep::new(
                "check-order-btn",
                "Check Button",
                "Click here when you think you are done!",
                TooltipSide::Top,
            ),
        ],
        GameKind::Comparing => vec![
            TutorialStep::new(
                "pond-left",
                "Left Pond",
                "Count the fish in the left pond.",
                TooltipSide::Bottom,
            ),
            TutorialStep::new(
                "pond-right",
                "Right Pond",
                "Count the fish in the right pond.",
                TooltipSide::Bottom,
            ),
            TutorialStep::new(
                "alligator-controls",
                "Hungry Alligator",
                "Click the alligator that wants to eat the MOST fish!",
                TooltipSide::Top,
            ),
        ],
        GameKind::Arithmetic => vec![
            TutorialStep::new(
                "math-problem",
                "The Problem",
                "Use your math skills to solve this!",
                TooltipSide::Bottom,
            ),
            TutorialStep::new(
                "math-options",
                "Drag & Drop",
                "Drag the correct number to the box with the question mark.",
                TooltipSide::Top,
            ),
        ],
    }
}
