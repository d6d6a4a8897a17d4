use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Arithmetic primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// The arithmetic symbol shown in an equation, e.g. "×".
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition       => "+",
            Operation::Subtraction    => "−",
            Operation::Multiplication => "×",
            Operation::Division       => "÷",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Maximum-bound tier applied to every operand and result of a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberRange {
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl NumberRange {
    pub const ALL: [NumberRange; 4] = [
        NumberRange::Ten,
        NumberRange::Twenty,
        NumberRange::Fifty,
        NumberRange::Hundred,
    ];

    pub fn bound(self) -> u32 {
        match self {
            NumberRange::Ten     => 10,
            NumberRange::Twenty  => 20,
            NumberRange::Fifty   => 50,
            NumberRange::Hundred => 100,
        }
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1–{}", self.bound())
    }
}

/// One generated question: two operands joined by a binary operation.
///
/// Invariants maintained by the generator: every operand and the result lie
/// in `[1, bound]` (a subtraction result may be 0), multiplication operands
/// and division divisors/quotients never exceed `min(10, bound)`, and
/// division is always exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub operand1: u32,
    pub operand2: u32,
    pub operation: Operation,
}

/// Which element of a [`Problem`] is hidden and must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionSlot {
    FirstOperand,
    SecondOperand,
    Result,
}

// ---------------------------------------------------------------------------
// Session configuration enums
// ---------------------------------------------------------------------------

/// Which slot a session hides. `Mixed` re-rolls the slot for every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Normal,
    FirstMissing,
    SecondMissing,
    Mixed,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameMode::Normal        => "Normal",
            GameMode::FirstMissing  => "First Missing",
            GameMode::SecondMissing => "Second Missing",
            GameMode::Mixed         => "Mixed",
        };
        write!(f, "{}", s)
    }
}

/// How the learner enters an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerMode {
    Input,
    MultipleChoice,
    NumberSequence,
}

impl fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnswerMode::Input          => "Input",
            AnswerMode::MultipleChoice => "Multiple Choice",
            AnswerMode::NumberSequence => "Number Sequence",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyMode {
    Normal,
    /// Re-randomizes the answer mode on every question.
    Creative,
    /// Lives/levels overlay with a game-over condition.
    Challenge,
}

impl fmt::Display for DifficultyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyMode::Normal    => write!(f, "Normal"),
            DifficultyMode::Creative  => write!(f, "Creative"),
            DifficultyMode::Challenge => write!(f, "Challenge"),
        }
    }
}

// ---------------------------------------------------------------------------
// Session boundary types
// ---------------------------------------------------------------------------

/// Values handed in by the surrounding application at session start.
///
/// Any field may be absent; [`crate::SessionController`] applies the
/// defaults {Multiplication} / 1–100 / 0 / 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub operations: Option<Vec<Operation>>,
    pub number_range: Option<NumberRange>,
    pub total_solved: Option<u64>,
    pub high_score: Option<u32>,
}

/// Persistable values the controller has changed since the last drain,
/// plus motivation milestones. Storage itself is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateChange {
    OperationsChanged,
    NumberRangeChanged,
    TotalSolvedChanged,
    HighScoreChanged,
    /// Emitted every 10 lifetime solves, carrying the counter value.
    MotivationMilestone(u64),
}

/// Everything a renderer needs to draw one frame of a session.
///
/// Mutated exclusively by [`crate::SessionController`]; the UI reads it and
/// forwards intents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub problem: Problem,
    pub slot: QuestionSlot,
    pub game_mode: GameMode,
    pub answer_mode: AnswerMode,
    pub difficulty: DifficultyMode,
    /// Enabled operations; never empty.
    pub operations: Vec<Operation>,
    pub number_range: NumberRange,
    pub score: u32,
    /// 1-based position within the current task batch.
    pub task_index: u32,
    pub task_count: u32,
    /// Lifetime counter, carried across sessions by the caller.
    pub total_solved: u64,
    /// Keypad buffer for [`AnswerMode::Input`].
    pub input: String,
    pub selected_choice: Option<u32>,
    /// Current choice set when in [`AnswerMode::MultipleChoice`].
    pub choices: Vec<u32>,
    /// Current pick-list when in [`AnswerMode::NumberSequence`].
    pub sequence: Vec<u32>,
    pub checked: bool,
    pub last_answer_correct: bool,
    pub completed: bool,
    /// Present only while `difficulty == Challenge`.
    pub challenge: Option<super::progression::ChallengeState>,
}
