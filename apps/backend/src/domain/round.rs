//! Round state machine: start, score one answer at a time, end on timeout.

use rand::Rng;

use crate::domain::level::Level;
use crate::domain::question::{generate_question, Question};
use crate::domain::rules::{average_time, ROUND_SECONDS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Raw start-form input, before validation.
#[derive(Debug, Clone, Default)]
pub struct StartRequest<'a> {
    pub player_name: Option<&'a str>,
    pub level: Option<&'a str>,
}

impl StartRequest<'_> {
    /// Check the name is present and non-empty and the level is a known tier.
    /// The name is kept exactly as submitted.
    pub fn validate(&self) -> Result<(String, Level), DomainError> {
        let player_name = self
            .player_name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::MissingPlayerName,
                    "Missing player name",
                )
            })?;

        let level = self
            .level
            .filter(|level| !level.trim().is_empty())
            .ok_or_else(|| DomainError::validation(ValidationKind::MissingLevel, "Missing level"))?
            .parse::<Level>()?;

        Ok((player_name.to_string(), level))
    }
}

/// Per-session state of a round in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub player_name: String,
    pub level: Level,
    pub score: i32,
    pub questions_answered: u32,
    /// Seconds left as last reported by the client.
    pub timeleft: i64,
    /// Always a question the player hasn't answered yet.
    pub question: Question,
}

/// Final figures of a finished round, ready to be appended to the leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    pub player_name: String,
    pub score: i32,
    pub questions_answered: u32,
    pub total_time: i32,
    pub average_time: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoundStep {
    InRound(RoundState),
    Ended(RoundResult),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub step: RoundStep,
}

/// Parse a submitted answer. Anything that isn't an integer becomes `None`,
/// which never matches a correct answer.
pub fn parse_answer(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Parse the client-reported clock. Unlike answers, a missing or non-integer
/// value is rejected rather than scored.
pub fn parse_timeleft(raw: Option<&str>) -> Result<i64, DomainError> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidTimeleft,
                "timeleft must be an integer number of seconds",
            )
        })
}

impl RoundState {
    /// Fresh round: zero score, full clock, first question drawn.
    pub fn start<R: Rng + ?Sized>(player_name: String, level: Level, rng: &mut R) -> Self {
        Self {
            player_name,
            level,
            score: 0,
            questions_answered: 0,
            timeleft: i64::from(ROUND_SECONDS),
            question: generate_question(level, rng),
        }
    }

    /// Score `answer` against the current question and take the client's
    /// `timeleft` as the new clock. Ends the round once the clock reaches
    /// zero, otherwise moves on to a new question at the same level.
    pub fn answer<R: Rng + ?Sized>(
        mut self,
        answer: Option<i64>,
        timeleft: i64,
        rng: &mut R,
    ) -> AnswerOutcome {
        let correct = self.question.is_correct(answer);
        if correct {
            self.score += 1;
        } else {
            self.score -= 1;
        }
        self.questions_answered += 1;
        self.timeleft = timeleft;

        let step = if self.timeleft <= 0 {
            RoundStep::Ended(self.finish())
        } else {
            self.question = generate_question(self.level, rng);
            RoundStep::InRound(self)
        };

        AnswerOutcome { correct, step }
    }

    fn finish(self) -> RoundResult {
        RoundResult {
            player_name: self.player_name,
            score: self.score,
            questions_answered: self.questions_answered,
            total_time: ROUND_SECONDS,
            average_time: average_time(ROUND_SECONDS, self.questions_answered),
        }
    }
}
