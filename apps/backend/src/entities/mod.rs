pub mod leaderboard;

pub use leaderboard::Entity as Leaderboard;
pub use leaderboard::Model as LeaderboardRow;
