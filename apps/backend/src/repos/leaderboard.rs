//! Leaderboard repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::adapters::leaderboard_sea as leaderboard_adapter;
use crate::domain::RoundResult;
use crate::entities::leaderboard;
use crate::errors::domain::DomainError;

/// One completed round as shown on the leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub player_name: String,
    pub score: i32,
    pub total_time: i32,
    pub average_time: f64,
}

/// Append the result of a finished round.
pub async fn append<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    result: &RoundResult,
) -> Result<LeaderboardEntry, DomainError> {
    let dto = leaderboard_adapter::LeaderboardCreate {
        player_name: result.player_name.clone(),
        score: result.score,
        total_time: result.total_time,
        average_time: result.average_time,
    };
    let row = leaderboard_adapter::insert(conn, dto).await?;
    debug!(entry_id = row.id, score = row.score, "leaderboard_entry_appended");
    Ok(LeaderboardEntry::from(row))
}

/// Every entry, highest score first.
pub async fn list_all_sorted<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<LeaderboardEntry>, DomainError> {
    let rows = leaderboard_adapter::find_all_by_score_desc(conn).await?;
    Ok(rows.into_iter().map(LeaderboardEntry::from).collect())
}

impl From<leaderboard::Model> for LeaderboardEntry {
    fn from(model: leaderboard::Model) -> Self {
        Self {
            id: model.id,
            player_name: model.player_name,
            score: model.score,
            total_time: model.total_time,
            average_time: model.average_time,
        }
    }
}
