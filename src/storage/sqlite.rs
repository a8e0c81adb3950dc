//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the RecordStore trait.

use crate::storage::schema::initialize_schema;
use crate::storage::traits::{RecordStore, StorageError, StorageResult};
use crate::storage::{CompanyRecord, StoreCounts};
use crate::SiteFinderError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const RECORD_COLUMNS: &str = "id, name, url, source, processed_at";

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Creates a new SqliteStorage instance
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(SiteFinderError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, SiteFinderError> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database
    pub fn new_in_memory() -> Result<Self, SiteFinderError> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Inserts every non-blank line of `text` as a company name
    ///
    /// Returns the number of records inserted.
    pub fn import_names(&mut self, text: &str) -> StorageResult<usize> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare("INSERT INTO companies (name) VALUES (?1)")?;
            for name in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
                stmt.execute(params![name])?;
                inserted += 1;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<CompanyRecord> {
    Ok(CompanyRecord {
        id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        url: row.get(2)?,
        source: row.get(3)?,
        processed_at: row.get(4)?,
    })
}

impl RecordStore for SqliteStorage {
    fn insert_company(&mut self, name: &str) -> StorageResult<i64> {
        self.conn
            .execute("INSERT INTO companies (name) VALUES (?1)", params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_record(&self, id: i64) -> StorageResult<CompanyRecord> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM companies WHERE id = ?1", RECORD_COLUMNS),
                params![id],
                record_from_row,
            )
            .optional()?
            .ok_or(StorageError::RecordNotFound(id))
    }

    fn pending_records(&self) -> StorageResult<Vec<CompanyRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM companies WHERE name IS NOT NULL AND processed_at IS NULL ORDER BY id",
            RECORD_COLUMNS
        ))?;

        let records = stmt
            .query_map([], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn set_url(&mut self, id: i64, url: Option<&str>, source: Option<&str>) -> StorageResult<()> {
        let now = Utc::now().to_rfc3339();
        let updated = self.conn.execute(
            "UPDATE companies SET url = ?1, source = ?2, processed_at = ?3 WHERE id = ?4",
            params![url, source, now, id],
        )?;

        if updated == 0 {
            return Err(StorageError::RecordNotFound(id));
        }
        Ok(())
    }

    fn counts(&self) -> StorageResult<StoreCounts> {
        let counts = self.conn.query_row(
            "SELECT
                COUNT(*),
                COUNT(CASE WHEN processed_at IS NOT NULL AND url IS NOT NULL THEN 1 END),
                COUNT(CASE WHEN processed_at IS NOT NULL AND url IS NULL THEN 1 END),
                COUNT(CASE WHEN processed_at IS NULL AND name IS NOT NULL THEN 1 END)
             FROM companies",
            [],
            |row| {
                Ok(StoreCounts {
                    total: row.get::<_, i64>(0)? as u64,
                    resolved: row.get::<_, i64>(1)? as u64,
                    unresolved: row.get::<_, i64>(2)? as u64,
                    pending: row.get::<_, i64>(3)? as u64,
                })
            },
        )?;
        Ok(counts)
    }
}
