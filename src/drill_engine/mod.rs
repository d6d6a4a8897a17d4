//! Core drill engine — problem generation, answer validation, and session
//! progression.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | All shared types: operations, ranges, problems, modes, session state |
//! | `generator`   | Range-constrained problem construction per operation |
//! | `resolver`    | Correct value for whichever slot of a problem is hidden |
//! | `distractors` | Multiple-choice sets, number sequences, Fisher–Yates shuffle |
//! | `progression` | Challenge level table, lives, game-over and high-score rules |
//! | `helpers`     | Equation formatting shared by snapshot, demo and tests |
//! | `session`     | `SessionController` — the per-question lifecycle and all user intents |

pub mod distractors;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod progression;
pub mod resolver;
pub mod session;

// Re-export the public API surface so callers can use
// `drill_engine::SessionController` without reaching into sub-modules.
pub use models::{
    AnswerMode, DifficultyMode, GameMode, NumberRange, Operation, Problem, QuestionSlot,
    SessionConfig, SessionState, StateChange,
};
pub use progression::{ChallengeLevel, ChallengeState, CHALLENGE_LEVELS, MAX_LIVES};
pub use session::{SessionController, DEFAULT_TASK_COUNT};
