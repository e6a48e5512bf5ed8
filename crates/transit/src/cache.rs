//! Load-once memoization of the read-only datasets.
//!
//! Each dataset is keyed by the [`SourceKey`] of the source that produced
//! it. The first successful load is kept for the lifetime of the cache and
//! handed out as a shared `Arc<[T]>`; there is no invalidation. Failed loads
//! are not remembered, so the next render reads the source again.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::identifiers::{DatasetKind, SourceKey};
use crate::models::{DatasetSource, Result, StationSnapshot, TransitLineSegment};

/// One memo table per row type
struct MemoTable<T> {
    entries: RwLock<HashMap<SourceKey, Arc<[T]>>>,
}

impl<T> MemoTable<T> {
    fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn get_or_try_load(
        &self,
        key: SourceKey,
        load: impl FnOnce() -> Result<Vec<T>>,
    ) -> Result<Arc<[T]>> {
        if let Some(rows) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(rows));
        }

        let mut guard = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        // Another render may have filled the slot while we waited
        if let Some(rows) = guard.get(&key) {
            return Ok(Arc::clone(rows));
        }

        tracing::debug!("loading {key}");
        let rows: Arc<[T]> = load()?.into();
        guard.insert(key, Arc::clone(&rows));
        Ok(rows)
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Process-wide memo cache for both datasets
pub struct DatasetCache {
    stations: MemoTable<StationSnapshot>,
    segments: MemoTable<TransitLineSegment>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self {
            stations: MemoTable::new(),
            segments: MemoTable::new(),
        }
    }

    pub fn stations(&self, source: &dyn DatasetSource) -> Result<Arc<[StationSnapshot]>> {
        self.stations.get_or_try_load(source.source_key(DatasetKind::Stations), || {
            source.load_station_data()
        })
    }

    pub fn segments(&self, source: &dyn DatasetSource) -> Result<Arc<[TransitLineSegment]>> {
        self.segments.get_or_try_load(source.source_key(DatasetKind::Lines), || {
            source.load_transit_geometry()
        })
    }

    /// Number of datasets currently held
    pub fn len(&self) -> usize {
        self.stations.len() + self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows handed to a view, with a user-facing notice when the load failed
#[derive(Clone, Debug)]
pub struct Loaded<T> {
    pub rows: Arc<[T]>,
    pub notice: Option<String>,
}

impl<T> Loaded<T> {
    fn recover(result: Result<Arc<[T]>>) -> Self {
        match result {
            Ok(rows) => Self { rows, notice: None },
            Err(err) => {
                tracing::warn!("dataset unavailable, showing empty view: {err}");
                Self {
                    rows: Vec::new().into(),
                    notice: Some(format!(
                        "Données indisponibles ({}). La carte est affichée sans données.",
                        err.path().display()
                    )),
                }
            }
        }
    }
}

/// A dataset source paired with its memo cache
pub struct Datasets<S> {
    source: S,
    cache: DatasetCache,
}

impl<S: DatasetSource> Datasets<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: DatasetCache::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    /// Station snapshots, or an empty table plus a notice
    pub fn stations(&self) -> Loaded<StationSnapshot> {
        Loaded::recover(self.cache.stations(&self.source))
    }

    /// Line segments, or an empty collection plus a notice
    pub fn segments(&self) -> Loaded<TransitLineSegment> {
        Loaded::recover(self.cache.segments(&self.source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{FileDatasetSource, StaticDatasetSource};
    use crate::models::DatasetError;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        loads: AtomicUsize,
        fail: bool,
    }

    impl DatasetSource for CountingSource {
        fn source_key(&self, kind: DatasetKind) -> SourceKey {
            SourceKey::new(kind, "counting")
        }

        fn load_station_data(&self) -> Result<Vec<StationSnapshot>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DatasetError::Unreadable {
                    path: PathBuf::from("counting.csv"),
                    reason: "broken".into(),
                });
            }
            Ok(Vec::new())
        }

        fn load_transit_geometry(&self) -> Result<Vec<TransitLineSegment>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_load_once() {
        let source = CountingSource {
            loads: AtomicUsize::new(0),
            fail: false,
        };
        let cache = DatasetCache::new();

        let first = cache.stations(&source).unwrap();
        let second = cache.stations(&source).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);

        cache.segments(&source).unwrap();
        cache.segments(&source).unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_failures_are_not_cached() {
        let source = CountingSource {
            loads: AtomicUsize::new(0),
            fail: true,
        };
        let cache = DatasetCache::new();

        assert!(cache.stations(&source).is_err());
        assert!(cache.stations(&source).is_err());
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_distinct_sources_do_not_collide() {
        let cache = DatasetCache::new();
        let a = StaticDatasetSource::from_data("a", Vec::new(), Vec::new());
        let b = StaticDatasetSource::from_data("b", Vec::new(), Vec::new());

        cache.stations(&a).unwrap();
        cache.stations(&b).unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_missing_file_recovers_with_notice() {
        let datasets = Datasets::new(FileDatasetSource::new(
            "/nonexistent/stations.csv",
            "/nonexistent/lines.json",
        ));

        let stations = datasets.stations();
        assert!(stations.rows.is_empty());
        assert!(stations.notice.unwrap().contains("/nonexistent/stations.csv"));

        let segments = datasets.segments();
        assert!(segments.rows.is_empty());
        assert!(segments.notice.is_some());
    }
}
