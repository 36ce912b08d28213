use serde::{Deserialize, Serialize};

/// Lowest score a competitor can hold.
pub const MIN_SCORE: i32 = 100;
/// Highest score a competitor can hold.
pub const MAX_SCORE: i32 = 5000;

/// Rank carried by a record that has not been through a recompute pass yet.
pub const UNRANKED: u32 = 0;

/// Normalize a raw score into `[MIN_SCORE, MAX_SCORE]`.
///
/// Out-of-range input is not an error: every write path goes through here.
pub fn clamp_score(score: i32) -> i32 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Competitor record owned by the registry.
///
/// `rank` is derived state. It is only meaningful while the ranking index is clean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competitor {
    pub handle: String,
    pub score: i32,
    pub rank: u32,
}

impl Competitor {
    pub fn new(handle: impl Into<String>, score: i32) -> Self {
        Self {
            handle: handle.into(),
            score: clamp_score(score),
            rank: UNRANKED,
        }
    }

    pub fn snapshot(&self) -> CompetitorSnapshot {
        CompetitorSnapshot {
            username: self.handle.clone(),
            rating: self.score,
            rank: self.rank,
        }
    }
}

/// Value copy of a competitor handed out to callers.
///
/// Serialized with the public field names (`username`, `rating`, `rank`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorSnapshot {
    pub username: String,
    pub rating: i32,
    pub rank: u32,
}

/// Outcome of adding a competitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// A new record was appended
    Inserted,
    /// The handle already existed and its score was overwritten in place
    Updated,
}

// ============================================
// HTTP DTOs
// ============================================

#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardQuery {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub users: Vec<CompetitorSnapshot>,
    pub page: usize,
    pub page_size: usize,
    pub total_users: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<CompetitorSnapshot>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_users: usize,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
    pub users: usize,
}
