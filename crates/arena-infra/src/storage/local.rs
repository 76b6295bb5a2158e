//! Shared store behind the in-memory and JSON-file backends.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use arena_core::domain::Record;
use arena_core::error::RepoError;

/// A content collection held in process memory, optionally mirrored to a
/// JSON file after every mutation.
///
/// There is exactly one store per collection per process; all readers and
/// writers observe the same state through the `RwLock`. A failed file write
/// is logged and the in-memory state keeps the mutation.
pub struct LocalStore<T> {
    records: RwLock<Vec<T>>,
    path: Option<PathBuf>,
}

impl<T> LocalStore<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    /// Transient store seeded with the given records.
    pub fn in_memory(seed: Vec<T>) -> Self {
        tracing::info!(
            collection = T::ID_PREFIX,
            count = seed.len(),
            "Initialized in-memory store"
        );
        Self {
            records: RwLock::new(seed),
            path: None,
        }
    }

    /// File-backed store. Loads the JSON document at `path` if present,
    /// otherwise writes the seed data to it.
    pub fn file_backed(path: PathBuf, seed: Vec<T>) -> Self {
        let records = match Self::load(&path) {
            Some(records) => {
                tracing::info!(
                    collection = T::ID_PREFIX,
                    count = records.len(),
                    path = %path.display(),
                    "Loaded collection from file"
                );
                records
            }
            None => {
                Self::write_file(&path, &seed);
                seed
            }
        };
        Self {
            records: RwLock::new(records),
            path: Some(path),
        }
    }

    fn load(path: &Path) -> Option<Vec<T>> {
        if !path.exists() {
            return None;
        }
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read collection file, reseeding");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Some(records),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse collection file, reseeding");
                None
            }
        }
    }

    // Construction-time seeding runs before the server accepts requests, so a
    // blocking write is fine here; mutations go through the async `persist`.
    fn write_file(path: &Path, records: &[T]) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %path.display(), error = %e, "Failed to create data directory");
                return;
            }
        }
        match serde_json::to_string_pretty(records) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to persist collection");
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to serialize collection");
            }
        }
    }

    async fn persist(&self, records: &[T]) {
        let Some(path) = &self.path else {
            return;
        };
        let json = match serde_json::to_string_pretty(records) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to serialize collection");
                return;
            }
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = tokio::fs::create_dir_all(parent).await {
                tracing::warn!(path = %path.display(), error = %e, "Failed to create data directory");
                return;
            }
        }
        if let Err(e) = tokio::fs::write(path, json).await {
            tracing::warn!(path = %path.display(), error = %e, "Failed to persist collection");
        }
    }

    /// Clone of the full collection, in storage order (newest insertions first).
    pub async fn snapshot(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// First record matching the predicate.
    pub async fn find<F>(&self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.records.read().await.iter().find(|r| pred(r)).cloned()
    }

    /// Mint an identifier, build the record, and prepend it.
    pub async fn insert<F>(&self, build: F) -> Result<T, RepoError>
    where
        F: FnOnce(String) -> T,
    {
        let mut records = self.records.write().await;

        // Identifiers are millisecond timestamps; bump until free so that
        // two creations within the same millisecond stay distinct.
        let mut millis = Utc::now().timestamp_millis();
        let id = loop {
            let candidate = format!("{}-{}", T::ID_PREFIX, millis);
            if !records.iter().any(|r| r.id() == candidate) {
                break candidate;
            }
            millis += 1;
        };

        let record = build(id);
        records.insert(0, record.clone());
        self.persist(&records).await;
        Ok(record)
    }

    /// Apply a mutation to the record with the given id.
    pub async fn update<F>(&self, id: &str, apply: F) -> Result<T, RepoError>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Err(RepoError::NotFound);
        };
        apply(record);
        let updated = record.clone();
        self.persist(&records).await;
        Ok(updated)
    }

    /// Remove the record with the given id.
    pub async fn remove(&self, id: &str) -> Result<(), RepoError> {
        let mut records = self.records.write().await;
        let Some(index) = records.iter().position(|r| r.id() == id) else {
            return Err(RepoError::NotFound);
        };
        records.remove(index);
        self.persist(&records).await;
        Ok(())
    }
}
