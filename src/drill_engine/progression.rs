use serde::{Deserialize, Serialize};

use crate::drill_engine::models::{GameMode, NumberRange, Operation};

/// Lives a challenge run starts with.
pub const MAX_LIVES: u32 = 3;

/// One row of the challenge level table.
#[derive(Debug, Clone, Copy)]
pub struct ChallengeLevel {
    /// Score at which this level takes effect.
    pub min_score: u32,
    pub number_range: NumberRange,
    pub game_mode: GameMode,
    /// `None` means "use the player's selected operations".
    pub operations: Option<&'static [Operation]>,
}

/// Score-threshold table for challenge mode, sorted ascending by
/// `min_score`. [`level_for_score`] takes the last row whose threshold is
/// met, so the thresholds form a non-decreasing step function of score.
pub const CHALLENGE_LEVELS: [ChallengeLevel; 5] = [
    ChallengeLevel {
        min_score: 0,
        number_range: NumberRange::Ten,
        game_mode: GameMode::Normal,
        operations: Some(&[Operation::Multiplication]),
    },
    ChallengeLevel {
        min_score: 5,
        number_range: NumberRange::Twenty,
        game_mode: GameMode::Normal,
        operations: Some(&[Operation::Multiplication, Operation::Division]),
    },
    ChallengeLevel {
        min_score: 10,
        number_range: NumberRange::Fifty,
        game_mode: GameMode::Normal,
        operations: None,
    },
    ChallengeLevel {
        min_score: 15,
        number_range: NumberRange::Fifty,
        game_mode: GameMode::Mixed,
        operations: None,
    },
    ChallengeLevel {
        min_score: 20,
        number_range: NumberRange::Hundred,
        game_mode: GameMode::Mixed,
        operations: None,
    },
];

/// 1-based level reached at `score`: the last table row whose `min_score`
/// is met.
pub fn level_for_score(score: u32) -> u32 {
    let mut level = 1;
    for (i, entry) in CHALLENGE_LEVELS.iter().enumerate() {
        if score >= entry.min_score {
            level = i as u32 + 1;
        }
    }
    level
}

/// Parameters of a 1-based level number. Out-of-table numbers clamp to the
/// nearest row.
pub fn level_params(level: u32) -> &'static ChallengeLevel {
    let idx = (level.max(1) as usize - 1).min(CHALLENGE_LEVELS.len() - 1);
    &CHALLENGE_LEVELS[idx]
}

/// Lives/level overlay for challenge mode.
///
/// Created with full lives on entering challenge difficulty, reset on
/// restart, dropped on leaving. The high score survives restarts within the
/// same run and is handed back to the caller for persistence when beaten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeState {
    pub lives: u32,
    pub level: u32,
    pub errors: u32,
    pub high_score: u32,
    /// Set once lives hit 0; freezes the session until restart.
    pub game_over: bool,
}

impl ChallengeState {
    pub fn new(high_score: u32) -> Self {
        ChallengeState {
            lives: MAX_LIVES,
            level: 1,
            errors: 0,
            high_score,
            game_over: false,
        }
    }

    /// A correct answer at the given (already incremented) score: re-derive
    /// the level from the table.
    pub fn record_correct(&mut self, score: u32) {
        self.level = level_for_score(score);
    }

    /// A wrong answer: lose a life, count the error, and end the run once
    /// no lives remain. Returns `true` when the stored high score was
    /// beaten, so the caller can signal persistence.
    pub fn record_wrong(&mut self, score: u32) -> bool {
        self.errors += 1;
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.game_over = true;
            if score > self.high_score {
                self.high_score = score;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_table_is_sorted_ascending() {
        for pair in CHALLENGE_LEVELS.windows(2) {
            assert!(
                pair[0].min_score < pair[1].min_score,
                "level thresholds must strictly increase"
            );
        }
    }

    #[test]
    fn level_one_is_multiplication_only_at_bound_10() {
        let first = level_params(1);
        assert_eq!(first.min_score, 0);
        assert_eq!(first.number_range.bound(), 10);
        assert_eq!(first.operations, Some(&[Operation::Multiplication][..]));
    }

    #[test]
    fn level_is_a_step_function_of_score() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(4), 1);
        assert_eq!(level_for_score(5), 2);
        assert_eq!(level_for_score(12), 3);
        assert_eq!(level_for_score(19), 4);
        assert_eq!(level_for_score(20), 5);
        assert_eq!(level_for_score(1000), 5);
    }

    #[test]
    fn wrong_answers_burn_lives_then_end_the_run() {
        let mut ch = ChallengeState::new(0);
        assert!(!ch.record_wrong(2));
        assert!(!ch.record_wrong(2));
        assert_eq!(ch.lives, 1);
        assert!(!ch.game_over);
        // Final life: run ends and the score of 2 beats the stored 0.
        assert!(ch.record_wrong(2));
        assert!(ch.game_over);
        assert_eq!(ch.lives, 0);
        assert_eq!(ch.errors, 3);
        assert_eq!(ch.high_score, 2);
    }

    #[test]
    fn game_over_without_beating_high_score_reports_no_change() {
        let mut ch = ChallengeState::new(50);
        ch.record_wrong(10);
        ch.record_wrong(10);
        assert!(!ch.record_wrong(10));
        assert!(ch.game_over);
        assert_eq!(ch.high_score, 50);
    }
}
