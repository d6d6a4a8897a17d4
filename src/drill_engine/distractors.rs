use rand::Rng;

use crate::drill_engine::generator::FACTOR_CAP;
use crate::drill_engine::models::{Operation, Problem, QuestionSlot};
use crate::drill_engine::resolver;

/// Choice-set size for multiple choice.
const CHOICE_COUNT: usize = 3;

/// Attempt budget for the random candidate loop in [`build_choices`].
const MAX_ATTEMPTS: u32 = 100;

/// Pick-list length for number-sequence mode.
const SEQUENCE_LEN: u32 = 10;

/// Fisher–Yates shuffle.
pub fn shuffle<R: Rng, T>(rng: &mut R, values: &mut [T]) {
    for i in (1..values.len()).rev() {
        let j = rng.gen_range(0..=i);
        values.swap(i, j);
    }
}

/// Build three distinct positive choices, exactly one of which is `correct`,
/// in uniformly random order.
///
/// Each candidate is either "nearby" (correct plus an offset from
/// `{−4…−1, 1…4}`, drawn as `[−4, 3]` with non-negative draws shifted up by
/// one to skip zero) or uniform in `[1, 100]`, 50/50. Candidates that are
/// non-positive, equal to `correct`, or already present are discarded. If
/// the attempt budget runs out — possible only near very small correct
/// values — the set is topped up deterministically from
/// `{+1, +2, −1, −2}`.
pub fn build_choices<R: Rng>(rng: &mut R, correct: u32) -> Vec<u32> {
    let mut choices = vec![correct];

    let mut attempts = 0;
    while choices.len() < CHOICE_COUNT && attempts < MAX_ATTEMPTS {
        attempts += 1;
        let candidate: i64 = if rng.gen_bool(0.5) {
            let mut offset = rng.gen_range(-4i64..=3);
            if offset >= 0 {
                offset += 1;
            }
            i64::from(correct) + offset
        } else {
            rng.gen_range(1i64..=100)
        };
        if candidate > 0 && !choices.contains(&(candidate as u32)) {
            choices.push(candidate as u32);
        }
    }

    if choices.len() < CHOICE_COUNT {
        for delta in [1i64, 2, -1, -2] {
            let candidate = i64::from(correct) + delta;
            if candidate > 0 && !choices.contains(&(candidate as u32)) {
                choices.push(candidate as u32);
            }
            if choices.len() == CHOICE_COUNT {
                break;
            }
        }
    }

    shuffle(rng, &mut choices);
    choices
}

/// Build the ordered 10-entry pick-list for number-sequence mode.
///
/// The list is patterned to the operation so the learner can reason
/// positionally:
///
/// - Multiplication result: the times-table row of operand1.
/// - Unknown dividend: the first ten multiples of the divisor.
/// - Addition/subtraction result: ten consecutive integers windowed around
///   the correct value, clamped so the window starts no lower than 1.
/// - Every other slot: `1..=min(10, bound)`.
///
/// The window clamp means a subtraction whose correct difference is 0 gets
/// the list `[1..10]`, which cannot contain the true answer. That matches
/// the positive-integers display rule; the generator never produces a zero
/// difference, so the case only arises for hand-built problems.
pub fn build_sequence(problem: &Problem, slot: QuestionSlot, bound: u32) -> Vec<u32> {
    match (problem.operation, slot) {
        (Operation::Multiplication, QuestionSlot::Result) => {
            (1..=SEQUENCE_LEN).map(|i| problem.operand1 * i).collect()
        }
        (Operation::Division, QuestionSlot::FirstOperand) => {
            (1..=SEQUENCE_LEN).map(|i| problem.operand2 * i).collect()
        }
        (Operation::Addition, QuestionSlot::Result)
        | (Operation::Subtraction, QuestionSlot::Result) => {
            let correct = resolver::correct_answer(problem, QuestionSlot::Result);
            let start = correct.saturating_sub(4).max(1);
            (start..start + SEQUENCE_LEN).collect()
        }
        _ => (1..=FACTOR_CAP.min(bound)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut values = [1u32, 2, 3, 4, 5, 6, 7];
        shuffle(&mut rng, &mut values);
        let mut sorted = values;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn choices_are_deterministic_with_seed() {
        let make = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            build_choices(&mut rng, 42)
        };
        assert_eq!(make(7), make(7));
    }
}
