use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::drill_engine::models::{
    AnswerMode, DifficultyMode, GameMode, NumberRange, Operation, Problem, QuestionSlot,
    SessionConfig, SessionState, StateChange,
};
use crate::drill_engine::progression::{self, ChallengeState};
use crate::drill_engine::{distractors, generator, resolver};

/// Questions per non-challenge session batch.
pub const DEFAULT_TASK_COUNT: u32 = 10;

/// A motivation milestone fires every this many lifetime solves.
const MOTIVATION_INTERVAL: u64 = 10;

/// Drives the per-question lifecycle: generate → present → accept input →
/// validate → advance.
///
/// Every intent is a synchronous state transition; there is no I/O inside.
/// Persistence and rendering stay with the caller, which drains
/// [`take_changes`](SessionController::take_changes) after mutations and
/// redraws from [`state`](SessionController::state).
pub struct SessionController {
    state: SessionState,
    rng: StdRng,
    changes: Vec<StateChange>,
    /// Challenge high score carried while not in challenge mode.
    stored_high_score: u32,
}

impl SessionController {
    /// Entropy-seeded session.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic session — same seed and intents reproduce the exact
    /// same questions, choices and sequences.
    pub fn with_seed(config: SessionConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SessionConfig, rng: StdRng) -> Self {
        let operations = config
            .operations
            .filter(|ops| !ops.is_empty())
            .unwrap_or_else(|| vec![Operation::Multiplication]);
        let number_range = config.number_range.unwrap_or(NumberRange::Hundred);

        let state = SessionState {
            // Replaced by the first `new_question` below.
            problem: Problem {
                operand1: 1,
                operand2: 1,
                operation: operations[0],
            },
            slot: QuestionSlot::Result,
            game_mode: GameMode::Normal,
            answer_mode: AnswerMode::Input,
            difficulty: DifficultyMode::Normal,
            operations,
            number_range,
            score: 0,
            task_index: 1,
            task_count: DEFAULT_TASK_COUNT,
            total_solved: config.total_solved.unwrap_or(0),
            input: String::new(),
            selected_choice: None,
            choices: Vec::new(),
            sequence: Vec::new(),
            checked: false,
            last_answer_correct: false,
            completed: false,
            challenge: None,
        };

        let mut controller = SessionController {
            state,
            rng,
            changes: Vec::new(),
            stored_high_score: config.high_score.unwrap_or(0),
        };
        controller.new_question();
        controller
    }

    /// Read-only view for the renderer.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Drain the persistable-value changes recorded since the last call.
    pub fn take_changes(&mut self) -> Vec<StateChange> {
        std::mem::take(&mut self.changes)
    }

    // -----------------------------------------------------------------------
    // Answer entry
    // -----------------------------------------------------------------------

    /// Append one keypad digit to the input buffer.
    pub fn push_digit(&mut self, digit: u8) {
        if self.state.checked || self.state.answer_mode != AnswerMode::Input || digit > 9 {
            return;
        }
        self.state.input.push(char::from(b'0' + digit));
    }

    /// Remove the last buffered digit.
    pub fn backspace(&mut self) {
        if self.state.checked {
            return;
        }
        self.state.input.pop();
    }

    /// Empty the input buffer.
    pub fn clear_input(&mut self) {
        if self.state.checked {
            return;
        }
        self.state.input.clear();
    }

    /// Replace the input buffer wholesale, e.g. from a text field.
    pub fn submit_text_answer(&mut self, text: &str) {
        if self.state.checked || self.state.answer_mode != AnswerMode::Input {
            return;
        }
        self.state.input = text.to_string();
    }

    /// Select one value from the choice set or sequence.
    pub fn select_choice(&mut self, value: u32) {
        if self.state.checked || self.state.answer_mode == AnswerMode::Input {
            return;
        }
        self.state.selected_choice = Some(value);
    }

    // -----------------------------------------------------------------------
    // Question lifecycle
    // -----------------------------------------------------------------------

    /// Validate the entered answer against the hidden slot.
    ///
    /// With nothing entered this is a silent no-op. Non-numeric text parses
    /// to no value and scores as incorrect. Re-checking an already checked
    /// question, or checking after game over, changes nothing.
    pub fn check(&mut self) {
        if self.state.checked || self.state.completed {
            return;
        }
        if let Some(ch) = &self.state.challenge {
            if ch.game_over {
                return;
            }
        }

        let submitted: Option<u32> = match self.state.answer_mode {
            AnswerMode::Input => {
                if self.state.input.is_empty() {
                    return;
                }
                self.state.input.parse().ok()
            }
            AnswerMode::MultipleChoice | AnswerMode::NumberSequence => {
                match self.state.selected_choice {
                    None => return,
                    selected => selected,
                }
            }
        };

        let correct_value = resolver::correct_answer(&self.state.problem, self.state.slot);
        let is_correct = submitted == Some(correct_value);

        self.state.checked = true;
        self.state.last_answer_correct = is_correct;

        if is_correct {
            self.state.score += 1;
            if let Some(ch) = &mut self.state.challenge {
                ch.record_correct(self.state.score);
            }
        } else if let Some(ch) = &mut self.state.challenge {
            if ch.record_wrong(self.state.score) {
                self.changes.push(StateChange::HighScoreChanged);
            }
        }
    }

    /// Advance to the next question.
    ///
    /// Outside challenge mode the batch completes once the task count is
    /// reached. In challenge mode this is a no-op after game over and the
    /// next question takes its parameters from the current level.
    pub fn next(&mut self) {
        if self.state.completed {
            return;
        }
        if let Some(ch) = &self.state.challenge {
            if ch.game_over {
                return;
            }
        }
        if self.state.challenge.is_none() && self.state.task_index >= self.state.task_count {
            self.state.completed = true;
            return;
        }

        self.state.task_index += 1;
        self.state.total_solved += 1;
        self.changes.push(StateChange::TotalSolvedChanged);
        if self.state.total_solved % MOTIVATION_INTERVAL == 0 {
            self.changes
                .push(StateChange::MotivationMilestone(self.state.total_solved));
        }
        self.new_question();
    }

    /// Reset score and task position; a challenge run also refills lives,
    /// drops back to level 1 and keeps its high score.
    pub fn restart(&mut self) {
        self.state.score = 0;
        self.state.task_index = 1;
        self.state.completed = false;
        if let Some(ch) = &mut self.state.challenge {
            *ch = ChallengeState::new(ch.high_score);
        }
        self.new_question();
    }

    // -----------------------------------------------------------------------
    // Configuration intents
    // -----------------------------------------------------------------------

    pub fn set_game_mode(&mut self, mode: GameMode) {
        if self.state.game_mode == mode {
            return;
        }
        self.state.game_mode = mode;
        self.new_question();
    }

    pub fn set_answer_mode(&mut self, mode: AnswerMode) {
        if self.state.answer_mode == mode {
            return;
        }
        self.state.answer_mode = mode;
        self.state.input.clear();
        self.state.selected_choice = None;
        let bound = self.effective_bound();
        self.rebuild_answer_artifacts(bound);
    }

    pub fn set_number_range(&mut self, range: NumberRange) {
        if self.state.number_range == range {
            return;
        }
        self.state.number_range = range;
        self.changes.push(StateChange::NumberRangeChanged);
        self.new_question();
    }

    /// Enable or disable one operation. Disabling the last enabled
    /// operation is rejected — the set must stay non-empty.
    pub fn toggle_operation(&mut self, operation: Operation) {
        if let Some(pos) = self.state.operations.iter().position(|&o| o == operation) {
            if self.state.operations.len() == 1 {
                return;
            }
            self.state.operations.remove(pos);
        } else {
            self.state.operations.push(operation);
        }
        self.changes.push(StateChange::OperationsChanged);
        self.new_question();
    }

    /// Switch difficulty. Entering challenge mode creates a fresh
    /// lives/level overlay seeded with the stored high score; leaving it
    /// hands the (possibly improved) high score back. Either way the
    /// session restarts.
    pub fn set_difficulty_mode(&mut self, mode: DifficultyMode) {
        if self.state.difficulty == mode {
            return;
        }
        if let Some(ch) = self.state.challenge.take() {
            self.stored_high_score = ch.high_score;
        }
        self.state.difficulty = mode;
        if mode == DifficultyMode::Challenge {
            self.state.challenge = Some(ChallengeState::new(self.stored_high_score));
        }
        self.restart();
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Bound in force for the next problem: the challenge level's range
    /// when a run is active, the player's selection otherwise.
    fn effective_bound(&self) -> u32 {
        match &self.state.challenge {
            Some(ch) => progression::level_params(ch.level).number_range.bound(),
            None => self.state.number_range.bound(),
        }
    }

    /// Generate and install the next problem, then reset per-question
    /// transient state.
    fn new_question(&mut self) {
        let (bound, game_mode, operations): (u32, GameMode, Vec<Operation>) =
            match &self.state.challenge {
                Some(ch) => {
                    let level = progression::level_params(ch.level);
                    let ops = level
                        .operations
                        .map(<[Operation]>::to_vec)
                        .unwrap_or_else(|| self.state.operations.clone());
                    (level.number_range.bound(), level.game_mode, ops)
                }
                None => (
                    self.state.number_range.bound(),
                    self.state.game_mode,
                    self.state.operations.clone(),
                ),
            };

        let operation = generator::pick_operation(&mut self.rng, &operations);

        // The slot is fixed before the numbers are drawn; only Mixed mode
        // rolls it per question.
        let slot = match game_mode {
            GameMode::Normal => QuestionSlot::Result,
            GameMode::FirstMissing => QuestionSlot::FirstOperand,
            GameMode::SecondMissing => QuestionSlot::SecondOperand,
            GameMode::Mixed => match self.rng.gen_range(0..3u8) {
                0 => QuestionSlot::FirstOperand,
                1 => QuestionSlot::SecondOperand,
                _ => QuestionSlot::Result,
            },
        };

        self.state.problem = generator::generate_problem(&mut self.rng, operation, bound);
        self.state.slot = slot;

        if self.state.difficulty == DifficultyMode::Creative {
            self.state.answer_mode = self.random_answer_mode(slot);
        }

        self.rebuild_answer_artifacts(bound);

        self.state.input.clear();
        self.state.selected_choice = None;
        self.state.checked = false;
        self.state.last_answer_correct = false;
    }

    /// Creative-mode reroll. Number sequence is only offered when the
    /// result is hidden; operand slots draw from input/multiple choice.
    fn random_answer_mode(&mut self, slot: QuestionSlot) -> AnswerMode {
        if slot == QuestionSlot::Result {
            match self.rng.gen_range(0..3u8) {
                0 => AnswerMode::Input,
                1 => AnswerMode::MultipleChoice,
                _ => AnswerMode::NumberSequence,
            }
        } else if self.rng.gen_bool(0.5) {
            AnswerMode::Input
        } else {
            AnswerMode::MultipleChoice
        }
    }

    /// Build the choice set or pick-list the active answer mode needs for
    /// the current problem.
    fn rebuild_answer_artifacts(&mut self, bound: u32) {
        self.state.choices.clear();
        self.state.sequence.clear();
        match self.state.answer_mode {
            AnswerMode::Input => {}
            AnswerMode::MultipleChoice => {
                let correct = resolver::correct_answer(&self.state.problem, self.state.slot);
                self.state.choices = distractors::build_choices(&mut self.rng, correct);
            }
            AnswerMode::NumberSequence => {
                self.state.sequence =
                    distractors::build_sequence(&self.state.problem, self.state.slot, bound);
            }
        }
    }
}
