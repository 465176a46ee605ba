//! Leaderboard read side.

use crate::db::require_db;
use crate::error::AppError;
use crate::repos::leaderboard::{self, LeaderboardEntry};
use crate::state::app_state::AppState;

/// All recorded rounds, highest score first.
pub async fn standings(state: &AppState) -> Result<Vec<LeaderboardEntry>, AppError> {
    let db = require_db(state)?;
    Ok(leaderboard::list_all_sorted(db).await?)
}
