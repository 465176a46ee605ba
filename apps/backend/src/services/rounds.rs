//! Round controller: bridges the pure round state machine with the session
//! store and the leaderboard.

use tracing::{debug, info};

use crate::db::txn::with_txn;
use crate::domain::{parse_answer, parse_timeleft, RoundState, RoundStep, StartRequest};
use crate::error::AppError;
use crate::repos::leaderboard::{self, LeaderboardEntry};
use crate::state::app_state::AppState;
use crate::state::session_store::SessionId;

/// Result of submitting one answer.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// No live round for this caller; nothing changed.
    NoSession,
    /// Answer scored, next question stored.
    Continue { correct: bool },
    /// Clock ran out; the round was written to the leaderboard.
    Finished(LeaderboardEntry),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RoundService;

impl RoundService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the start form and open a new round under a fresh session id.
    ///
    /// On validation failure nothing is stored and `previous` is left alone.
    pub async fn start(
        &self,
        state: &AppState,
        previous: Option<SessionId>,
        request: StartRequest<'_>,
    ) -> Result<SessionId, AppError> {
        let (player_name, level) = request.validate()?;

        if let Some(old) = previous {
            state.sessions().remove(&old).await;
        }

        let round = {
            let mut rng = rand::rng();
            RoundState::start(player_name, level, &mut rng)
        };
        let id = SessionId::generate();

        info!(
            session_id = %id,
            player_name = %round.player_name,
            level = %round.level,
            "round_started"
        );
        state.sessions().put(id, round).await;
        Ok(id)
    }

    /// The round in progress for this caller, if any.
    pub async fn current(&self, state: &AppState, session: Option<SessionId>) -> Option<RoundState> {
        match session {
            Some(id) => state.sessions().get(&id).await,
            None => None,
        }
    }

    /// Drop whatever round this caller had going.
    pub async fn clear(&self, state: &AppState, session: Option<SessionId>) {
        if let Some(id) = session {
            state.sessions().remove(&id).await;
        }
    }

    /// Score one answer and advance the round.
    ///
    /// An unparseable `answer` is scored wrong. A missing or non-integer
    /// `timeleft` is rejected and leaves the session untouched. When the round
    /// ends, the leaderboard row is committed before the session is cleared,
    /// so a storage failure leaves the round in place.
    pub async fn submit(
        &self,
        state: &AppState,
        session: Option<SessionId>,
        answer: Option<&str>,
        timeleft: Option<&str>,
    ) -> Result<SubmitOutcome, AppError> {
        let Some(id) = session else {
            return Ok(SubmitOutcome::NoSession);
        };
        let Some(round) = state.sessions().get(&id).await else {
            debug!(session_id = %id, "submit without live round");
            return Ok(SubmitOutcome::NoSession);
        };

        let timeleft = parse_timeleft(timeleft)?;
        let answer = answer.and_then(parse_answer);

        let outcome = {
            let mut rng = rand::rng();
            round.answer(answer, timeleft, &mut rng)
        };

        match outcome.step {
            RoundStep::InRound(next) => {
                debug!(
                    session_id = %id,
                    correct = outcome.correct,
                    score = next.score,
                    questions_answered = next.questions_answered,
                    timeleft = next.timeleft,
                    "answer_scored"
                );
                state.sessions().put(id, next).await;
                Ok(SubmitOutcome::Continue {
                    correct: outcome.correct,
                })
            }
            RoundStep::Ended(result) => {
                let entry = with_txn(state, move |txn| {
                    Box::pin(async move { Ok(leaderboard::append(txn, &result).await?) })
                })
                .await?;
                state.sessions().remove(&id).await;

                info!(
                    session_id = %id,
                    entry_id = entry.id,
                    player_name = %entry.player_name,
                    score = entry.score,
                    average_time = entry.average_time,
                    "round_ended"
                );
                Ok(SubmitOutcome::Finished(entry))
            }
        }
    }
}
