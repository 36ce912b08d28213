// ============================================
// Score Simulator Job
// ============================================
//
// Background job that keeps the leaderboard moving.
//
// Workflow (per tick):
// 1. Pick a random competitor
// 2. Read its current score
// 3. Apply a uniform delta in [-max_delta, +max_delta]
// 4. Write it back through `update_score` (the leaderboard clamps)

use crate::config::Config;
use crate::services::{Leaderboard, LeaderboardError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

const LOG_EVERY: u64 = 100;
const MIN_TICK_PERIOD: Duration = Duration::from_micros(100);

/// Score simulator configuration
#[derive(Debug, Clone)]
pub struct ScoreSimulatorConfig {
    /// Ticks per second (0 disables the job)
    pub updates_per_second: u32,
    /// Largest absolute change applied in a single tick
    pub max_delta: i32,
}

impl ScoreSimulatorConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            updates_per_second: config.updates_per_second,
            max_delta: config.max_score_delta,
        }
    }
}

/// One applied update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub handle: String,
    pub previous: i32,
    pub delta: i32,
    pub stored: i32,
}

pub struct ScoreSimulator<R = StdRng> {
    config: ScoreSimulatorConfig,
    leaderboard: Arc<Leaderboard>,
    rng: R,
    updates: u64,
}

impl ScoreSimulator<StdRng> {
    pub fn new(config: ScoreSimulatorConfig, leaderboard: Arc<Leaderboard>) -> Self {
        Self::with_rng(config, leaderboard, StdRng::from_entropy())
    }
}

impl<R: Rng> ScoreSimulator<R> {
    pub fn with_rng(config: ScoreSimulatorConfig, leaderboard: Arc<Leaderboard>, rng: R) -> Self {
        Self {
            config,
            leaderboard,
            rng,
            updates: 0,
        }
    }

    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Apply a single random update. `None` when there is nothing to update.
    pub fn tick(&mut self) -> Option<ScoreUpdate> {
        let (handle, previous) = self.leaderboard.sample(&mut self.rng)?;
        let max_delta = self.config.max_delta.abs();
        let delta = self.rng.gen_range(-max_delta..=max_delta);

        match self
            .leaderboard
            .update_score(&handle, previous.saturating_add(delta))
        {
            Ok(stored) => {
                self.updates += 1;
                if self.updates % LOG_EVERY == 0 {
                    info!(updates = self.updates, "Processed score updates");
                }
                Some(ScoreUpdate {
                    handle,
                    previous,
                    delta,
                    stored,
                })
            }
            Err(LeaderboardError::NotFound { handle }) => {
                debug!(handle = %handle, "Sampled competitor vanished before update");
                None
            }
        }
    }

    /// Run until the task is dropped or aborted.
    pub async fn run(mut self) {
        if self.config.updates_per_second == 0 {
            info!("Score simulator disabled");
            return;
        }

        let period =
            (Duration::from_secs(1) / self.config.updates_per_second).max(MIN_TICK_PERIOD);
        info!(
            updates_per_second = self.config.updates_per_second,
            max_delta = self.config.max_delta,
            "Starting score simulator"
        );

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.tick();
        }
    }
}

/// Spawn the simulator onto the current tokio runtime.
pub fn spawn_score_simulator(
    config: ScoreSimulatorConfig,
    leaderboard: Arc<Leaderboard>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(ScoreSimulator::new(config, leaderboard).run())
}
