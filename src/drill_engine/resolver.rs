use crate::drill_engine::models::{Operation, Problem, QuestionSlot};

/// The unique correct value for the hidden slot of a problem.
///
/// Total for every problem the generator can produce: operand slots are read
/// back directly, and the result slot is exact arithmetic (division never
/// leaves a remainder by the generator's invariant).
pub fn correct_answer(problem: &Problem, slot: QuestionSlot) -> u32 {
    match slot {
        QuestionSlot::FirstOperand  => problem.operand1,
        QuestionSlot::SecondOperand => problem.operand2,
        QuestionSlot::Result => match problem.operation {
            Operation::Addition       => problem.operand1 + problem.operand2,
            Operation::Subtraction    => problem.operand1 - problem.operand2,
            Operation::Multiplication => problem.operand1 * problem.operand2,
            Operation::Division       => problem.operand1 / problem.operand2,
        },
    }
}
