//! Formatting helpers shared by the snapshot adapter, the demo, and tests.

use crate::drill_engine::models::{Problem, QuestionSlot};
use crate::drill_engine::resolver;

/// Render the equation with the hidden slot masked, e.g. "7 × ? = 42".
pub fn masked_equation(problem: &Problem, slot: QuestionSlot) -> String {
    let result = resolver::correct_answer(problem, QuestionSlot::Result);
    let part = |value: u32, hidden: bool| -> String {
        if hidden {
            "?".to_string()
        } else {
            value.to_string()
        }
    };
    format!(
        "{} {} {} = {}",
        part(problem.operand1, slot == QuestionSlot::FirstOperand),
        problem.operation,
        part(problem.operand2, slot == QuestionSlot::SecondOperand),
        part(result, slot == QuestionSlot::Result),
    )
}

/// Render the equation with every value visible, e.g. "7 × 6 = 42".
pub fn full_equation(problem: &Problem) -> String {
    format!(
        "{} {} {} = {}",
        problem.operand1,
        problem.operation,
        problem.operand2,
        resolver::correct_answer(problem, QuestionSlot::Result),
    )
}
