use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Leaderboard {
    Table,
    Id,
    PlayerName,
    Score,
    TotalTime,
    AverageTime,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leaderboard::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Leaderboard::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Leaderboard::PlayerName).string().not_null())
                    .col(ColumnDef::new(Leaderboard::Score).integer().not_null())
                    .col(ColumnDef::new(Leaderboard::TotalTime).integer().not_null())
                    .col(ColumnDef::new(Leaderboard::AverageTime).double().not_null())
                    .to_owned(),
            )
            .await?;

        // Leaderboard reads are always score-descending.
        manager
            .create_index(
                Index::create()
                    .name("ix_leaderboard_score")
                    .table(Leaderboard::Table)
                    .col(Leaderboard::Score)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("ix_leaderboard_score")
                    .table(Leaderboard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Leaderboard::Table).to_owned())
            .await
    }
}
