use std::fmt;

use rand::Rng;

use crate::domain::level::Level;

/// The four supported arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub const fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Evaluate `lhs op rhs`. Division floors toward negative infinity.
    /// Returns `None` on a zero divisor or overflow.
    pub fn apply(&self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Sub => lhs.checked_sub(rhs),
            Operator::Mul => lhs.checked_mul(rhs),
            Operator::Div => {
                let quotient = lhs.checked_div(rhs)?;
                if lhs % rhs != 0 && ((lhs < 0) != (rhs < 0)) {
                    Some(quotient - 1)
                } else {
                    Some(quotient)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One unanswered arithmetic question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub num1: i64,
    pub num2: i64,
    pub op: Operator,
}

impl Question {
    pub fn new(num1: i64, num2: i64, op: Operator) -> Self {
        Self { num1, num2, op }
    }

    pub fn correct_answer(&self) -> Option<i64> {
        self.op.apply(self.num1, self.num2)
    }

    /// Whether `answer` (already parsed; `None` when unparseable) is right.
    pub fn is_correct(&self, answer: Option<i64>) -> bool {
        match (answer, self.correct_answer()) {
            (Some(given), Some(expected)) => given == expected,
            _ => false,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.num1, self.op, self.num2)
    }
}

/// Draw a question for `level`: both operands uniformly from the level's
/// range, the operator uniformly from the four supported ones.
pub fn generate_question<R: Rng + ?Sized>(level: Level, rng: &mut R) -> Question {
    let range = level.operand_range();
    let num1 = rng.random_range(range.clone());
    let num2 = rng.random_range(range);
    let op = Operator::ALL[rng.random_range(0..Operator::ALL.len())];
    Question::new(num1, num2, op)
}
