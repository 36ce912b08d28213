use crate::error::AppError;
use serde::Deserialize;

/// Environment variable prefix for every setting below.
pub const ENV_PREFIX: &str = "LEADERBOARD_";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Competitors created at startup
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,
    /// Simulated score updates per second (0 disables)
    #[serde(default = "default_updates_per_second")]
    pub updates_per_second: u32,
    /// Largest absolute change per simulated update
    #[serde(default = "default_max_score_delta")]
    pub max_score_delta: i32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8080
}

fn default_service_name() -> String {
    "leaderboard-service".to_string()
}

fn default_seed_count() -> usize {
    1000
}

fn default_updates_per_second() -> u32 {
    10
}

fn default_max_score_delta() -> i32 {
    50
}

impl Config {
    /// Load from `LEADERBOARD_*` environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Config = envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_score_delta <= 0 {
            return Err(AppError::Config(format!(
                "{ENV_PREFIX}MAX_SCORE_DELTA must be positive, got {}",
                self.max_score_delta
            )));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}
