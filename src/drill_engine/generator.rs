use rand::Rng;

use crate::drill_engine::models::{Operation, Problem};

/// Cap on multiplication factors, divisors and quotients. Keeps generated
/// products inside times-table territory regardless of the session bound.
pub(crate) const FACTOR_CAP: u32 = 10;

/// Draw the operation for a new question uniformly from the enabled set.
///
/// The set is never empty — the session controller refuses to disable the
/// last operation.
pub fn pick_operation<R: Rng>(rng: &mut R, enabled: &[Operation]) -> Operation {
    enabled[rng.gen_range(0..enabled.len())]
}

/// Generate a problem whose operands and result all respect `bound`.
///
/// Each arm draws values that are valid by construction, so no candidate is
/// ever rejected and re-drawn:
///
/// - Addition: operand1 from `[1, bound−1]`, operand2 from
///   `[1, bound−operand1]`, so the sum stays within `bound`.
/// - Subtraction: the difference is drawn first from `[1, bound−1]`, then
///   the subtrahend from `[1, bound−difference]`; the minuend is their sum.
/// - Multiplication: both factors capped at `min(10, …)` so the product
///   stays within `bound`.
/// - Division: divisor and quotient are drawn, the dividend is their
///   product — division is always exact.
pub fn generate_problem<R: Rng>(rng: &mut R, operation: Operation, bound: u32) -> Problem {
    match operation {
        Operation::Addition => {
            let operand1 = rng.gen_range(1..=bound - 1);
            let operand2 = rng.gen_range(1..=bound - operand1);
            Problem { operand1, operand2, operation }
        }
        Operation::Subtraction => {
            let difference = rng.gen_range(1..=bound - 1);
            let operand2 = rng.gen_range(1..=bound - difference);
            Problem { operand1: operand2 + difference, operand2, operation }
        }
        Operation::Multiplication => {
            let operand1 = rng.gen_range(1..=FACTOR_CAP.min(bound));
            let operand2 = rng.gen_range(1..=FACTOR_CAP.min(bound / operand1));
            Problem { operand1, operand2, operation }
        }
        Operation::Division => {
            let operand2 = rng.gen_range(1..=FACTOR_CAP.min(bound));
            let quotient = rng.gen_range(1..=FACTOR_CAP.min(bound / operand2));
            Problem { operand1: operand2 * quotient, operand2, operation }
        }
    }
}
