//! SeaORM adapter for the leaderboard table.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};

use crate::entities::leaderboard;

pub mod dto;

pub use dto::LeaderboardCreate;

/// Insert one row. Rows are never updated afterwards.
pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: LeaderboardCreate,
) -> Result<leaderboard::Model, sea_orm::DbErr> {
    let row = leaderboard::ActiveModel {
        id: sea_orm::NotSet,
        player_name: Set(dto.player_name),
        score: Set(dto.score),
        total_time: Set(dto.total_time),
        average_time: Set(dto.average_time),
    };

    row.insert(conn).await
}

/// All rows, highest score first. Ties come back in whatever order the
/// database yields them.
pub async fn find_all_by_score_desc<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<leaderboard::Model>, sea_orm::DbErr> {
    leaderboard::Entity::find()
        .order_by_desc(leaderboard::Column::Score)
        .all(conn)
        .await
}

/// Number of stored rows.
pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    use sea_orm::PaginatorTrait;

    leaderboard::Entity::find().count(conn).await
}
