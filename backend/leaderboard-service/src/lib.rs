pub mod config;
pub mod error;
pub mod handlers;
pub mod jobs;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use jobs::{ScoreSimulator, ScoreSimulatorConfig};
pub use services::{seed_competitors, Leaderboard, LeaderboardError};
