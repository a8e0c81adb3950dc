//! Storage traits and error types
//!
//! This module defines the trait interface for record store backends and
//! associated error types.

use crate::storage::{CompanyRecord, StoreCounts};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Record not found: {0}")]
    RecordNotFound(i64),

    #[error("Record store lock poisoned")]
    LockPoisoned,

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for record store implementations
///
/// Each write targets a single record id; the driver never writes the same
/// record from two workers.
pub trait RecordStore {
    /// Inserts a new, unprocessed company and returns its id
    fn insert_company(&mut self, name: &str) -> StorageResult<i64>;

    /// Gets a record by id
    fn get_record(&self, id: i64) -> StorageResult<CompanyRecord>;

    /// Gets all records that have a name and were never processed
    fn pending_records(&self) -> StorageResult<Vec<CompanyRecord>>;

    /// Stores the outcome for a record and marks it processed
    ///
    /// # Arguments
    ///
    /// * `id` - The record id
    /// * `url` - The resolved website, or `None` to store an explicit null
    /// * `source` - Which heuristic produced the website, if any
    fn set_url(&mut self, id: i64, url: Option<&str>, source: Option<&str>) -> StorageResult<()>;

    /// Counts records by processing outcome
    fn counts(&self) -> StorageResult<StoreCounts>;
}
