//! Batch driver
//!
//! Runs the resolver over every pending record with a bounded pool of
//! workers. Each worker resolves one record and writes the outcome back
//! before the next record gets its permit. A record's failure is written as
//! a null website and never affects other records.

mod summary;

pub use summary::{print_store_counts, BatchSummary, RecordOutcome};

use crate::resolver::{Resolution, UrlResolver};
use crate::storage::{CompanyRecord, RecordStore, StorageError, StorageResult};
use crate::SiteFinderError;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Drives website resolution for a batch of records
pub struct Driver<S> {
    resolver: Arc<UrlResolver>,
    store: Arc<Mutex<S>>,
    max_workers: usize,
}

impl<S> Driver<S>
where
    S: RecordStore + Send + 'static,
{
    /// Creates a driver
    ///
    /// # Arguments
    ///
    /// * `resolver` - Resolver shared by all workers
    /// * `store` - Record store receiving the outcomes
    /// * `max_workers` - Maximum records processed at once (at least 1)
    pub fn new(resolver: Arc<UrlResolver>, store: Arc<Mutex<S>>, max_workers: usize) -> Self {
        Self {
            resolver,
            store,
            max_workers: max_workers.max(1),
        }
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Processes every pending record in the store
    pub async fn run(&self) -> Result<BatchSummary, SiteFinderError> {
        let records = lock_store(&self.store)?.pending_records()?;
        tracing::info!(
            "Processing {} pending records with {} workers",
            records.len(),
            self.max_workers
        );
        Ok(self.process_all(records).await)
    }

    /// Processes the given records
    ///
    /// Records are submitted in input order; completion order is
    /// unspecified. Records with a blank name are skipped and left untouched.
    pub async fn process_all(&self, records: Vec<CompanyRecord>) -> BatchSummary {
        let start_time = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.max_workers));
        let mut workers = JoinSet::new();
        let mut summary = BatchSummary::default();

        for record in records {
            let name = record.name.trim().to_string();
            if name.is_empty() {
                tracing::debug!("Skipping record {} without a name", record.id);
                summary.skipped += 1;
                continue;
            }

            // The semaphore is never closed
            let Ok(permit) = Arc::clone(&semaphore).acquire_owned().await else {
                break;
            };

            let resolver = Arc::clone(&self.resolver);
            let store = Arc::clone(&self.store);
            workers.spawn(async move {
                let _permit = permit;
                process_record(resolver, store, record.id, name).await
            });
        }

        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(outcome) => summary.record(&outcome),
                Err(e) => {
                    tracing::error!("Worker task failed: {}", e);
                    summary.failed += 1;
                }
            }
        }

        summary.elapsed = start_time.elapsed();
        tracing::info!(
            "Batch complete in {:?}: {} resolved, {} not found, {} failed, {} skipped, {} write errors",
            summary.elapsed,
            summary.resolved,
            summary.not_found,
            summary.failed,
            summary.skipped,
            summary.write_errors
        );

        summary
    }
}

/// Resolves one record and writes the outcome
async fn process_record<S>(
    resolver: Arc<UrlResolver>,
    store: Arc<Mutex<S>>,
    id: i64,
    name: String,
) -> RecordOutcome
where
    S: RecordStore + Send + 'static,
{
    let resolution = resolve_isolated(resolver, name.clone()).await;

    match &resolution {
        Resolution::Resolved(resolved) => {
            tracing::info!("Updated {} with URL: {}", name, resolved.url)
        }
        Resolution::NotFound => {
            tracing::info!("Could not find a valid website for '{}', set URL to null.", name)
        }
        Resolution::Failed(reason) => {
            tracing::error!("Error processing company {}: {}", name, reason)
        }
    }

    let stored = match write_resolution(&store, id, &resolution) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Failed to store result for '{}' (id {}): {}", name, id, e);
            false
        }
    };

    RecordOutcome {
        resolution,
        stored,
    }
}

/// Runs the resolution on its own task so a panic becomes `Failed`
async fn resolve_isolated(resolver: Arc<UrlResolver>, name: String) -> Resolution {
    let task = tokio::spawn(async move { resolver.resolve(&name).await });
    match task.await {
        Ok(resolution) => resolution,
        Err(e) => Resolution::Failed(e.to_string()),
    }
}

fn write_resolution<S: RecordStore>(
    store: &Mutex<S>,
    id: i64,
    resolution: &Resolution,
) -> StorageResult<()> {
    let source = resolution.stage().map(|stage| stage.to_db_string());
    lock_store(store)?.set_url(id, resolution.url(), source)
}

fn lock_store<S>(store: &Mutex<S>) -> StorageResult<std::sync::MutexGuard<'_, S>> {
    store.lock().map_err(|_| StorageError::LockPoisoned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileScraper;
    use crate::search::{SearchOutcome, SearchProvider, SearchResponse};
    use crate::storage::SqliteStorage;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Returns canned links per query; panics for the query "panic"
    struct ScriptedSearch {
        results: HashMap<String, Vec<String>>,
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    impl ScriptedSearch {
        fn new(results: Vec<(&str, Vec<&str>)>) -> Arc<Self> {
            Arc::new(Self {
                results: results
                    .into_iter()
                    .map(|(q, links)| {
                        (q.to_string(), links.into_iter().map(String::from).collect())
                    })
                    .collect(),
                in_flight: AtomicUsize::new(0),
                peak: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl SearchProvider for ScriptedSearch {
        async fn search(&self, query: &str) -> SearchOutcome {
            if query == "panic" {
                panic!("search client blew up");
            }

            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            match self.results.get(query) {
                Some(links) => {
                    SearchOutcome::Found(SearchResponse::from_links(links.iter().cloned()))
                }
                None => SearchOutcome::Unavailable,
            }
        }
    }

    struct NoProfiles;

    #[async_trait]
    impl ProfileScraper for NoProfiles {
        async fn declared_website(&self, _profile_url: &str) -> Option<String> {
            None
        }
    }

    fn build_driver(
        search: Arc<ScriptedSearch>,
        names: &[&str],
        max_workers: usize,
    ) -> (Driver<SqliteStorage>, Arc<Mutex<SqliteStorage>>, Vec<i64>) {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        let ids = names
            .iter()
            .map(|name| storage.insert_company(name).unwrap())
            .collect();
        let store = Arc::new(Mutex::new(storage));
        let resolver = Arc::new(UrlResolver::new(search, Arc::new(NoProfiles), "linkedin.com"));
        (
            Driver::new(resolver, Arc::clone(&store), max_workers),
            store,
            ids,
        )
    }

    #[tokio::test]
    async fn test_run_writes_urls_and_nulls() {
        let search = ScriptedSearch::new(vec![
            ("Acme", vec!["https://acme.com/about", "https://acme.com/"]),
            ("Nobody", vec!["https://directory.example.com/nobody"]),
        ]);
        let (driver, store, ids) = build_driver(search, &["Acme", "Nobody"], 4);

        let summary = driver.run().await.unwrap();
        assert_eq!(summary.resolved, 1);
        assert_eq!(summary.not_found, 1);
        assert_eq!(summary.write_errors, 0);

        let store = store.lock().unwrap();
        let acme = store.get_record(ids[0]).unwrap();
        assert_eq!(acme.url.as_deref(), Some("https://acme.com/"));
        assert_eq!(acme.source.as_deref(), Some("search"));

        let nobody = store.get_record(ids[1]).unwrap();
        assert_eq!(nobody.url, None);
        assert!(nobody.is_processed());
    }

    #[tokio::test]
    async fn test_panicking_resolution_becomes_null() {
        let search = ScriptedSearch::new(vec![("Acme", vec!["https://acme.com/"])]);
        let (driver, store, ids) = build_driver(search, &["panic", "Acme"], 2);

        let summary = driver.run().await.unwrap();
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.resolved, 1);

        let store = store.lock().unwrap();
        let broken = store.get_record(ids[0]).unwrap();
        assert_eq!(broken.url, None);
        assert!(broken.is_processed());
        assert_eq!(
            store.get_record(ids[1]).unwrap().url.as_deref(),
            Some("https://acme.com/")
        );
    }

    #[tokio::test]
    async fn test_blank_names_skipped_and_untouched() {
        let search = ScriptedSearch::new(vec![]);
        let (driver, store, ids) = build_driver(search, &["   "], 2);

        let summary = driver.run().await.unwrap();
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.processed(), 0);
        assert!(!store.lock().unwrap().get_record(ids[0]).unwrap().is_processed());
    }

    #[tokio::test]
    async fn test_worker_count_bounds_concurrency() {
        let names: Vec<String> = (0..12).map(|i| format!("Company {}", i)).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let search = ScriptedSearch::new(vec![]);
        let (driver, _store, _ids) = build_driver(Arc::clone(&search), &name_refs, 3);

        let summary = driver.run().await.unwrap();
        assert_eq!(summary.not_found, 12);
        assert!(search.peak.load(Ordering::SeqCst) <= 3);
        assert!(search.peak.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn test_write_error_counted_not_fatal() {
        let search = ScriptedSearch::new(vec![("Ghost", vec!["https://ghost.com/"])]);
        let (driver, _store, _ids) = build_driver(search, &[], 2);

        let summary = driver
            .process_all(vec![CompanyRecord::new(999, "Ghost")])
            .await;
        assert_eq!(summary.resolved, 1);
        assert_eq!(summary.write_errors, 1);
    }

    #[test]
    fn test_zero_workers_clamped() {
        let search = ScriptedSearch::new(vec![]);
        let (driver, _store, _ids) = build_driver(search, &[], 0);
        assert_eq!(driver.max_workers(), 1);
    }
}
