//! Adapters for external dependencies.

pub mod leaderboard_sea;
