use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::domain::rules::{EASY_OPERANDS, HARD_OPERANDS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Difficulty tier chosen at round start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Easy,
    Hard,
}

impl Level {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "easy",
            Level::Hard => "hard",
        }
    }

    /// Inclusive range both operands are drawn from.
    pub fn operand_range(&self) -> RangeInclusive<i64> {
        match self {
            Level::Easy => EASY_OPERANDS,
            Level::Hard => HARD_OPERANDS,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Level::Easy),
            "hard" => Ok(Level::Hard),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidLevel,
                format!("Level must be 'easy' or 'hard', got '{}'", s.trim()),
            )),
        }
    }
}
