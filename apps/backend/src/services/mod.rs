pub mod leaderboard;
pub mod rounds;
