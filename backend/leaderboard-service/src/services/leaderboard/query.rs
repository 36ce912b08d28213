//! Read-only queries over a clean ranking index.
//!
//! Callers must hold at least shared access and must have recomputed the index first.

use super::ranking::RankingIndex;
use super::registry::Registry;
use crate::models::CompetitorSnapshot;

/// One page of the leaderboard. `page` is 1-based.
///
/// Inputs are expected to be validated by the caller (`page >= 1`, `page_size >= 1`).
/// A page past the end is empty.
pub fn page(
    registry: &Registry,
    index: &RankingIndex,
    page: usize,
    page_size: usize,
) -> Vec<CompetitorSnapshot> {
    let slots = index.ordered_slots();
    let total = slots.len();
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= total {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(total);

    slots[start..end]
        .iter()
        .filter_map(|&slot| registry.at(slot))
        .map(|record| record.snapshot())
        .collect()
}

/// Case-insensitive substring match over handles, in rank order.
///
/// An empty term matches every competitor.
pub fn search(registry: &Registry, index: &RankingIndex, term: &str) -> Vec<CompetitorSnapshot> {
    let needle = term.to_lowercase();

    index
        .ordered_slots()
        .iter()
        .filter_map(|&slot| registry.at(slot))
        .filter(|record| record.handle.to_lowercase().contains(&needle))
        .map(|record| record.snapshot())
        .collect()
}
