pub mod leaderboard;
pub mod seeder;

pub use leaderboard::{IndexState, Leaderboard, LeaderboardError};
pub use seeder::seed_competitors;
