//! # arith_drill_gen
//!
//! A fully offline, deterministic arithmetic drill engine.
//!
//! This library generates bounded arithmetic problems across the four basic
//! operations, derives the correct answer for whichever element of the
//! equation is hidden, synthesizes plausible wrong-answer sets for multiple
//! choice and ordered pick-lists for sequence selection, and drives the
//! session progression — scoring, fixed-length task batches, and an
//! optional lives/levels challenge mode.
//!
//! ## How it works
//!
//! 1. Build a [`SessionConfig`] from whatever the surrounding application
//!    has persisted (all fields optional — defaults apply).
//! 2. Create a [`SessionController`] — it generates the first problem and
//!    owns all session state from then on.
//! 3. Forward user intents (`submit_text_answer`, `select_choice`,
//!    `check`, `next`, mode changes) and redraw from
//!    [`SessionController::state`] after each one. The
//!    [`snapshot`](crate::snapshot) module turns that state into a
//!    renderer-ready JSON value.
//! 4. Drain [`SessionController::take_changes`] to learn which persistable
//!    values (operations, range, lifetime counter, high score) changed.
//!
//! ## Key features
//!
//! - **Range-safe by construction**: every operand and result respects the
//!   configured bound without rejection sampling; division is always exact.
//! - **Deterministic**: [`SessionController::with_seed`] reproduces the
//!   exact same questions, choices and sequences — useful for tests and
//!   replays.
//! - **Challenge mode**: a score-threshold level table escalates the bound,
//!   game mode and operation set as the player's score rises, with a
//!   lives-based game-over condition and carried high score.
//!
//! ## Quick start
//!
//! ```rust
//! use arith_drill_gen::{Operation, NumberRange, SessionConfig, SessionController};
//!
//! let config = SessionConfig {
//!     operations: Some(vec![Operation::Addition]),
//!     number_range: Some(NumberRange::Twenty),
//!     ..SessionConfig::default()
//! };
//! let mut session = SessionController::with_seed(config, 42);
//!
//! // The first problem is ready; answer it via the keypad buffer.
//! let problem = session.state().problem;
//! session.submit_text_answer(&(problem.operand1 + problem.operand2).to_string());
//! session.check();
//! assert!(session.state().last_answer_correct);
//! session.next();
//! ```

pub mod drill_engine;
pub mod snapshot;

// Convenience re-exports so callers can use `arith_drill_gen::SessionController`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    AnswerMode, ChallengeLevel, ChallengeState, DifficultyMode, GameMode, NumberRange, Operation,
    Problem, QuestionSlot, SessionConfig, SessionController, SessionState, StateChange,
    CHALLENGE_LEVELS, DEFAULT_TASK_COUNT, MAX_LIVES,
};
pub use snapshot::session_snapshot;
