// ============================================
// Competitor Seeder
// ============================================
//
// Populates an empty leaderboard at startup with synthetic competitors.
// Handles are `{first}_{last}{i}` so they stay unique for a single run.

use super::leaderboard::Leaderboard;
use crate::models::{CreateOutcome, MAX_SCORE, MIN_SCORE};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

const FIRST_NAMES: &[&str] = &[
    "rahul", "priya", "amit", "sneha", "vikram", "anjali", "rohan", "pooja", "arjun", "neha",
    "karan", "divya", "raj", "shreya", "aditya", "kavya", "siddharth", "riya", "varun", "meera",
    "akash", "tanvi", "dev", "ishita", "aman", "nisha", "harsh", "ananya", "kunal", "sanya",
];

const LAST_NAMES: &[&str] = &[
    "kumar", "sharma", "patel", "singh", "verma", "gupta", "reddy", "mehta", "joshi", "nair",
    "burman", "mathur", "kapoor", "mishra", "iyer", "desai", "bhat", "menon", "rao", "krishnan",
    "agarwal", "malhotra", "chopra", "sinha", "pandey", "chauhan", "ghosh", "banerjee", "saxena",
    "trivedi",
];

const PROGRESS_EVERY: usize = 1000;

/// Seed `count` competitors. Returns how many new records were inserted.
pub fn seed_competitors<R: Rng + ?Sized>(
    leaderboard: &Leaderboard,
    count: usize,
    rng: &mut R,
) -> usize {
    info!(count, "Seeding competitors");

    let mut inserted = 0;
    for i in 0..count {
        let first = FIRST_NAMES.choose(rng).copied().unwrap_or("player");
        let last = LAST_NAMES.choose(rng).copied().unwrap_or("anon");
        let handle = format!("{first}_{last}{i}");
        let score = rng.gen_range(MIN_SCORE..=MAX_SCORE);

        if leaderboard.add_competitor(&handle, score) == CreateOutcome::Inserted {
            inserted += 1;
        }

        if (i + 1) % PROGRESS_EVERY == 0 {
            info!(seeded = i + 1, "Seeding progress");
        }
    }

    info!(
        inserted,
        total = leaderboard.total_count(),
        "Successfully seeded competitors"
    );
    inserted
}
