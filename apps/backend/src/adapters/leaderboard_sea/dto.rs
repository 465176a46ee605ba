//! DTOs for leaderboard_sea adapter.

/// DTO for appending a finished round.
#[derive(Debug, Clone)]
pub struct LeaderboardCreate {
    pub player_name: String,
    pub score: i32,
    pub total_time: i32,
    pub average_time: f64,
}
