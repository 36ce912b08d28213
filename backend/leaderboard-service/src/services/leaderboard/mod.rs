/// Leaderboard Module
///
/// In-memory ranked registry of competitors with lazy re-ranking.
///
/// # Architecture
/// - **Registry**: owns the competitor records, keyed by handle
/// - **Ranking Index**: ordered slots into the registry plus competition ranks
/// - **Query Layer**: paged listing and substring search over the ordered view
///
/// # Locking
/// Writes take the exclusive lock and only mark the index dirty. Queries take the
/// shared lock and copy out directly when the index is clean. When it is dirty they
/// take the exclusive lock, recompute, and downgrade to a shared guard before copying,
/// so a snapshot always comes from the recompute pass that preceded it.
pub mod query;
pub mod ranking;
pub mod registry;

pub use ranking::{IndexState, RankingIndex};
pub use registry::Registry;

use crate::models::{CompetitorSnapshot, CreateOutcome};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use rand::Rng;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeaderboardError {
    #[error("competitor not found: {handle}")]
    NotFound { handle: String },
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;

#[derive(Debug, Default)]
struct LeaderboardState {
    registry: Registry,
    index: RankingIndex,
}

/// Shared leaderboard. Construct once and hand out behind an `Arc`.
#[derive(Debug, Default)]
pub struct Leaderboard {
    state: RwLock<LeaderboardState>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: RwLock::new(LeaderboardState {
                registry: Registry::with_capacity(capacity),
                index: RankingIndex::new(),
            }),
        }
    }

    /// Add a competitor. A handle that already exists has its score overwritten.
    pub fn add_competitor(&self, handle: &str, score: i32) -> CreateOutcome {
        let mut state = self.state.write();
        let (slot, outcome) = state.registry.create(handle, score);
        match outcome {
            CreateOutcome::Inserted => state.index.append(slot),
            CreateOutcome::Updated => state.index.mark_dirty(),
        }
        outcome
    }

    /// Set a competitor's score. Returns the stored (clamped) score.
    pub fn update_score(&self, handle: &str, score: i32) -> Result<i32> {
        let mut state = self.state.write();
        let stored = state.registry.set_score(handle, score)?;
        state.index.mark_dirty();
        Ok(stored)
    }

    pub fn total_count(&self) -> usize {
        // Count does not depend on rank order, so no recompute
        self.state.read().registry.count()
    }

    pub fn index_state(&self) -> IndexState {
        self.state.read().index.state()
    }

    /// Force a recompute. Returns whether the index was dirty.
    pub fn recompute(&self) -> bool {
        let mut guard = self.state.write();
        let state = &mut *guard;
        state.index.recompute(state.registry.records_mut())
    }

    pub fn get_page(&self, page: usize, page_size: usize) -> Vec<CompetitorSnapshot> {
        let state = self.clean_view();
        query::page(&state.registry, &state.index, page, page_size)
    }

    pub fn search(&self, term: &str) -> Vec<CompetitorSnapshot> {
        let state = self.clean_view();
        query::search(&state.registry, &state.index, term)
    }

    /// First rank held by competitors with exactly `score`.
    pub fn rank_for_score(&self, score: i32) -> Option<u32> {
        self.clean_view().index.rank_for_score(score)
    }

    /// Exact handle lookup ignoring case.
    pub fn find(&self, handle: &str) -> Option<CompetitorSnapshot> {
        self.clean_view()
            .registry
            .resolve(handle)
            .map(|record| record.snapshot())
    }

    /// Pick a random competitor as `(handle, score)`. `None` when empty.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(String, i32)> {
        let state = self.state.read();
        if state.registry.is_empty() {
            return None;
        }
        let slot = rng.gen_range(0..state.registry.count());
        state
            .registry
            .at(slot)
            .map(|record| (record.handle.clone(), record.score))
    }

    /// Shared guard over a clean index.
    fn clean_view(&self) -> RwLockReadGuard<'_, LeaderboardState> {
        let state = self.state.read();
        if !state.index.is_dirty() {
            return state;
        }
        drop(state);

        let mut guard = self.state.write();
        let state = &mut *guard;
        // Another reader may have recomputed while we waited
        if state.index.recompute(state.registry.records_mut()) {
            debug!(competitors = state.registry.count(), "Recomputed ranks for query");
        }
        RwLockWriteGuard::downgrade(guard)
    }
}
