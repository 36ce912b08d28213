use super::{LeaderboardError, Result};
use crate::models::{clamp_score, Competitor, CreateOutcome};
use std::collections::HashMap;

/// Exclusive store of competitor records.
///
/// Records live in one array and never move. `by_handle` maps the exact handle to
/// its slot, `by_folded` maps the lowercased handle to a slot for any-case lookups.
#[derive(Debug, Default)]
pub struct Registry {
    records: Vec<Competitor>,
    by_handle: HashMap<String, usize>,
    by_folded: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            by_handle: HashMap::with_capacity(capacity),
            by_folded: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a competitor, or overwrite the score of an existing handle.
    ///
    /// Returns the slot of the record together with what happened.
    pub fn create(&mut self, handle: &str, score: i32) -> (usize, CreateOutcome) {
        if let Some(&slot) = self.by_handle.get(handle) {
            self.records[slot].score = clamp_score(score);
            return (slot, CreateOutcome::Updated);
        }

        let slot = self.records.len();
        self.records.push(Competitor::new(handle, score));
        self.by_handle.insert(handle.to_string(), slot);
        // Last created handle wins a case-folded collision
        self.by_folded.insert(handle.to_lowercase(), slot);
        (slot, CreateOutcome::Inserted)
    }

    /// Overwrite the score of an existing competitor. Returns the stored (clamped) score.
    pub fn set_score(&mut self, handle: &str, score: i32) -> Result<i32> {
        let slot = *self
            .by_handle
            .get(handle)
            .ok_or_else(|| LeaderboardError::NotFound {
                handle: handle.to_string(),
            })?;

        let clamped = clamp_score(score);
        self.records[slot].score = clamped;
        Ok(clamped)
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, handle: &str) -> Option<&Competitor> {
        self.by_handle.get(handle).map(|&slot| &self.records[slot])
    }

    /// Exact lookup ignoring case.
    pub fn resolve(&self, handle: &str) -> Option<&Competitor> {
        self.by_folded
            .get(&handle.to_lowercase())
            .map(|&slot| &self.records[slot])
    }

    pub fn at(&self, slot: usize) -> Option<&Competitor> {
        self.records.get(slot)
    }

    pub fn records(&self) -> &[Competitor] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [Competitor] {
        &mut self.records
    }
}
