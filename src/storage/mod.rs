//! Storage module for company records
//!
//! This module handles all database operations, including:
//! - SQLite database initialization and schema management
//! - Reading records that still need a website
//! - Writing resolved websites (or explicit nulls) back per record

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStorage;
pub use traits::{RecordStore, StorageError, StorageResult};

/// A company record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRecord {
    pub id: i64,
    pub name: String,
    pub url: Option<String>,
    pub source: Option<String>,
    pub processed_at: Option<String>,
}

impl CompanyRecord {
    /// Creates an unprocessed record
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url: None,
            source: None,
            processed_at: None,
        }
    }

    pub fn is_processed(&self) -> bool {
        self.processed_at.is_some()
    }
}

/// Record counts by processing outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub total: u64,
    pub resolved: u64,
    pub unresolved: u64,
    pub pending: u64,
}
