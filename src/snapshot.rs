//! Renderer-facing JSON view of a session.
//!
//! The controller mutates [`SessionState`]; this module maps one state value
//! to a self-contained `serde_json::Value` a UI can redraw from without any
//! additional query — equation text with the hidden slot masked, the active
//! answer panel, progress counters, and the challenge overlay when present.

use serde_json::{json, Value};

use crate::drill_engine::helpers::masked_equation;
use crate::drill_engine::models::{AnswerMode, SessionState};

/// Build the answer-entry panel for the active answer mode.
fn answer_panel(state: &SessionState) -> Value {
    match state.answer_mode {
        AnswerMode::Input => json!({
            "kind": "input",
            "buffer": state.input,
        }),
        AnswerMode::MultipleChoice => json!({
            "kind": "choices",
            "values": state.choices,
            "selected": state.selected_choice,
        }),
        AnswerMode::NumberSequence => json!({
            "kind": "sequence",
            "values": state.sequence,
            "selected": state.selected_choice,
        }),
    }
}

/// Challenge overlay, or `null` outside challenge difficulty.
fn challenge_panel(state: &SessionState) -> Value {
    match &state.challenge {
        Some(ch) => json!({
            "lives": ch.lives,
            "level": ch.level,
            "errors": ch.errors,
            "high_score": ch.high_score,
            "game_over": ch.game_over,
        }),
        None => Value::Null,
    }
}

/// Map a [`SessionState`] to a JSON object ready for a renderer.
pub fn session_snapshot(state: &SessionState) -> Value {
    json!({
        "equation": masked_equation(&state.problem, state.slot),
        "problem": {
            "operand1": state.problem.operand1,
            "operand2": state.problem.operand2,
            "operation": state.problem.operation.symbol(),
        },
        "hidden_slot": state.slot,
        "game_mode": state.game_mode,
        "answer_mode": state.answer_mode,
        "difficulty": state.difficulty,
        "operations": state.operations,
        "number_range": state.number_range.bound(),
        "score": state.score,
        "task_index": state.task_index,
        "task_count": state.task_count,
        "total_solved": state.total_solved,
        "checked": state.checked,
        "last_answer_correct": state.last_answer_correct,
        "completed": state.completed,
        "answer_panel": answer_panel(state),
        "challenge": challenge_panel(state),
    })
}
