/// Ranking index over the registry's records
///
/// State transitions:
/// - Clean → Dirty: on any create or score write
/// - Dirty → Clean: on recompute
/// - Clean → Clean: recompute is a no-op
use crate::models::Competitor;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    /// Order, ranks and the score map reflect the current records
    Clean,
    /// At least one write happened since the last recompute
    Dirty,
}

/// Ordered view of the registry.
///
/// `order` holds registry slots, never copies of records.
#[derive(Debug)]
pub struct RankingIndex {
    state: IndexState,
    order: Vec<usize>,
    /// score → first rank holding that score
    first_rank_by_score: HashMap<i32, u32>,
}

impl Default for RankingIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Leaderboard order: score descending, then handle ascending.
pub fn leaderboard_order(a: &Competitor, b: &Competitor) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.handle.cmp(&b.handle))
}

impl RankingIndex {
    pub fn new() -> Self {
        Self {
            state: IndexState::Dirty,
            order: Vec::new(),
            first_rank_by_score: HashMap::new(),
        }
    }

    pub fn state(&self) -> IndexState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == IndexState::Dirty
    }

    pub fn mark_dirty(&mut self) {
        self.state = IndexState::Dirty;
    }

    /// Track a freshly inserted registry slot at the tail of the order.
    pub fn append(&mut self, slot: usize) {
        self.order.push(slot);
        self.mark_dirty();
    }

    /// Re-sort and re-rank when dirty. Returns whether any work was done.
    pub fn recompute(&mut self, records: &mut [Competitor]) -> bool {
        if self.state == IndexState::Clean {
            return false;
        }

        self.order
            .sort_by(|&a, &b| leaderboard_order(&records[a], &records[b]));

        self.first_rank_by_score.clear();

        let mut current_rank: u32 = 1;
        let mut previous_score: Option<i32> = None;
        for (position, &slot) in self.order.iter().enumerate() {
            let record = &mut records[slot];
            if previous_score.is_some_and(|score| score != record.score) {
                current_rank = position as u32 + 1;
            }
            record.rank = current_rank;
            previous_score = Some(record.score);

            self.first_rank_by_score
                .entry(record.score)
                .or_insert(current_rank);
        }

        self.state = IndexState::Clean;
        debug!(
            competitors = self.order.len(),
            distinct_scores = self.first_rank_by_score.len(),
            "Ranking index recomputed"
        );
        true
    }

    /// Registry slots in rank order. Only meaningful while clean.
    pub fn ordered_slots(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn rank_for_score(&self, score: i32) -> Option<u32> {
        self.first_rank_by_score.get(&score).copied()
    }
}
