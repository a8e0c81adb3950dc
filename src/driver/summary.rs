//! Batch statistics
//!
//! Counts what happened to each record of a batch and renders store-wide
//! statistics for the `--stats` mode.

use crate::resolver::Resolution;
use crate::storage::StoreCounts;
use std::time::Duration;

/// What happened to one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    pub resolution: Resolution,
    /// Whether the outcome reached the record store
    pub stored: bool,
}

/// Per-batch counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub resolved: usize,
    pub not_found: usize,
    pub failed: usize,
    /// Records with an empty name, left untouched
    pub skipped: usize,
    pub write_errors: usize,
    pub elapsed: Duration,
}

impl BatchSummary {
    /// Adds one record outcome to the counts
    pub fn record(&mut self, outcome: &RecordOutcome) {
        match outcome.resolution {
            Resolution::Resolved(_) => self.resolved += 1,
            Resolution::NotFound => self.not_found += 1,
            Resolution::Failed(_) => self.failed += 1,
        }
        if !outcome.stored {
            self.write_errors += 1;
        }
    }

    /// Number of records that went through resolution
    pub fn processed(&self) -> usize {
        self.resolved + self.not_found + self.failed
    }
}

/// Prints store statistics to stdout
pub fn print_store_counts(counts: &StoreCounts) {
    println!("=== Record Store Statistics ===\n");
    println!("  Total records: {}", counts.total);
    println!("  With website: {}", counts.resolved);
    println!("  Without website (null): {}", counts.unresolved);
    println!("  Pending: {}", counts.pending);

    let processed = counts.resolved + counts.unresolved;
    let hit_rate = if processed > 0 {
        (counts.resolved as f64 / processed as f64) * 100.0
    } else {
        0.0
    };

    println!();
    println!(
        "Hit Rate: {:.1}% ({} / {} processed records have a website)",
        hit_rate, counts.resolved, processed
    );
}
