//! Full demo of the drill engine.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `arith_drill_gen` works end to end:
//!
//! 1. **Answer modes** — one short batch per entry mode (keypad input,
//!    multiple choice, number sequence), answered programmatically so the
//!    output is deterministic and reproducible.
//!
//! 2. **Challenge mode** — a seeded run that climbs the level table and then
//!    burns its lives, showing the game-over freeze and high-score carry.
//!
//! ## Key concepts demonstrated
//!
//! - `SessionController::with_seed` makes the whole session deterministic.
//! - The controller owns all state; the demo only forwards intents and
//!   redraws from `state()` / `session_snapshot`.
//! - `take_changes()` surfaces which persistable values the host should
//!   store after each mutation.

use arith_drill_gen::{
    session_snapshot, AnswerMode, DifficultyMode, NumberRange, Operation, Problem, QuestionSlot,
    SessionConfig, SessionController,
};

/// Recompute the hidden value so the demo can play both sides.
fn solve(problem: &Problem, slot: QuestionSlot) -> u32 {
    let result = match problem.operation {
        Operation::Addition => problem.operand1 + problem.operand2,
        Operation::Subtraction => problem.operand1 - problem.operand2,
        Operation::Multiplication => problem.operand1 * problem.operand2,
        Operation::Division => problem.operand1 / problem.operand2,
    };
    match slot {
        QuestionSlot::FirstOperand => problem.operand1,
        QuestionSlot::SecondOperand => problem.operand2,
        QuestionSlot::Result => result,
    }
}

fn print_question(session: &SessionController) {
    let snap = session_snapshot(session.state());
    println!(
        "  Task {}/{}  {}",
        snap["task_index"], snap["task_count"], snap["equation"]
    );
    match snap["answer_panel"]["kind"].as_str() {
        Some("choices") => println!("    choices:  {}", snap["answer_panel"]["values"]),
        Some("sequence") => println!("    sequence: {}", snap["answer_panel"]["values"]),
        _ => {}
    }
}

fn run_batch(label: &str, mode: AnswerMode, seed: u64) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{label}]  seed: {seed}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = SessionConfig {
        operations: Some(vec![Operation::Multiplication, Operation::Addition]),
        number_range: Some(NumberRange::Twenty),
        ..SessionConfig::default()
    };
    let mut session = SessionController::with_seed(config, seed);
    session.set_answer_mode(mode);

    for _ in 0..3 {
        print_question(&session);
        let answer = solve(&session.state().problem, session.state().slot);
        match mode {
            AnswerMode::Input => session.submit_text_answer(&answer.to_string()),
            AnswerMode::MultipleChoice | AnswerMode::NumberSequence => {
                session.select_choice(answer)
            }
        }
        session.check();
        println!(
            "    answered {answer} → {}",
            if session.state().last_answer_correct { "correct" } else { "wrong" }
        );
        session.next();
    }
    println!("  score: {}\n", session.state().score);
}

fn run_challenge(seed: u64) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [Challenge]  seed: {seed}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut session = SessionController::with_seed(SessionConfig::default(), seed);
    session.set_difficulty_mode(DifficultyMode::Challenge);

    // Climb: six correct answers cross the first level threshold.
    for _ in 0..6 {
        let answer = solve(&session.state().problem, session.state().slot);
        session.submit_text_answer(&answer.to_string());
        session.check();
        session.next();
    }
    let ch = session.state().challenge.as_ref().unwrap();
    println!("  after 6 points: level {}, lives {}", ch.level, ch.lives);

    // Burn all lives with deliberate wrong answers.
    while !session.state().challenge.as_ref().unwrap().game_over {
        session.submit_text_answer("0");
        session.check();
        session.next();
    }
    let ch = session.state().challenge.as_ref().unwrap();
    println!(
        "  game over at score {}, high score {}",
        session.state().score, ch.high_score
    );

    session.restart();
    let ch = session.state().challenge.as_ref().unwrap();
    println!(
        "  restarted: level {}, lives {}, high score kept at {}\n",
        ch.level, ch.lives, ch.high_score
    );
}

fn main() {
    run_batch("Keypad Input", AnswerMode::Input, 11);
    run_batch("Multiple Choice", AnswerMode::MultipleChoice, 22);
    run_batch("Number Sequence", AnswerMode::NumberSequence, 33);
    run_challenge(44);
}
