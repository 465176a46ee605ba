use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "leaderboard")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "player_name")]
    pub player_name: String,
    pub score: i32,
    #[sea_orm(column_name = "total_time")]
    pub total_time: i32,
    #[sea_orm(column_name = "average_time", column_type = "Double")]
    pub average_time: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
