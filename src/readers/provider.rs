use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::BaseTable;
use crate::readers::{CollisionReader, CollisionSource};

/// Capability handed to consumers that need the base table
#[async_trait]
pub trait DatasetProvider: Send + Sync {
    async fn load(&self, max_rows: usize) -> Result<BaseTable>;
}

/// Fetches and parses once per distinct `max_rows`, then serves the same
/// snapshot for the life of the provider.
///
/// The cache lock is held across the fetch so concurrent first loads of
/// the same limit wait for one download instead of starting their own.
/// Failed loads are not cached.
pub struct CachedDatasetProvider<S> {
    source: S,
    reader: CollisionReader,
    cache: Mutex<HashMap<usize, BaseTable>>,
    fetches: AtomicUsize,
}

impl<S: CollisionSource> CachedDatasetProvider<S> {
    pub fn new(source: S) -> Self {
        Self::with_reader(source, CollisionReader::new())
    }

    pub fn with_reader(source: S, reader: CollisionReader) -> Self {
        Self {
            source,
            reader,
            cache: Mutex::new(HashMap::new()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of times the underlying source has been hit
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl<S: CollisionSource> DatasetProvider for CachedDatasetProvider<S> {
    async fn load(&self, max_rows: usize) -> Result<BaseTable> {
        let mut cache = self.cache.lock().await;

        if let Some(table) = cache.get(&max_rows) {
            debug!("Serving cached table for max_rows={}", max_rows);
            return Ok(table.clone());
        }

        self.fetches.fetch_add(1, Ordering::Relaxed);
        let bytes = self.source.fetch(max_rows).await?;
        let table = self.reader.read_table(bytes.as_slice(), max_rows)?;

        info!(
            "Loaded {} records from {} (max_rows={})",
            table.len(),
            self.source.describe(),
            max_rows
        );

        cache.insert(max_rows, table.clone());
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    struct StaticSource {
        body: &'static str,
    }

    #[async_trait]
    impl CollisionSource for StaticSource {
        fn describe(&self) -> String {
            "static".to_string()
        }

        async fn fetch(&self, _max_rows: usize) -> Result<Vec<u8>> {
            Ok(self.body.as_bytes().to_vec())
        }
    }

    const BODY: &str = "crash_date,crash_time,latitude,longitude,on_street_name,\
number_of_persons_injured,number_of_pedestrians_injured,number_of_cyclists_injured,\
number_of_motorists_injured
2021-09-11,9:35,40.7,-73.9,A,1,0,0,1
2021-09-11,9:40,40.8,-73.8,B,0,0,0,0
2021-09-11,9:45,40.6,-73.7,C,2,2,0,0";

    #[tokio::test]
    async fn test_load_is_memoized_per_limit() -> Result<()> {
        let provider = CachedDatasetProvider::new(StaticSource { body: BODY });

        let first = provider.load(10).await?;
        let second = provider.load(10).await?;
        assert_eq!(provider.fetch_count(), 1);
        assert!(first.shares_snapshot(&second));
        assert_eq!(first.len(), 3);

        let smaller = provider.load(2).await?;
        assert_eq!(provider.fetch_count(), 2);
        assert_eq!(smaller.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let provider = CachedDatasetProvider::new(StaticSource {
            body: "crash_date,crash_time\n2021-09-11,9:35",
        });

        assert!(matches!(
            provider.load(10).await,
            Err(DashboardError::MissingColumn(_))
        ));
        assert!(provider.load(10).await.is_err());
        assert_eq!(provider.fetch_count(), 2);
    }
}
