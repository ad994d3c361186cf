//! Record sources — where a listing collection comes from before it is frozen
//! into a `RecordStore`.
//!
//! The store and the filter never see a source; callers load once and hand
//! the snapshot on. Tests substitute their own `RecordSource` fakes.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{Job, Listing, Recruiter};
use crate::store::RecordStore;
use crate::validation::{validate_all, validate_job, validate_recruiter, Validation};

#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    async fn load(&self) -> Result<Vec<R>, AppError>;

    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;
}

/// Fixed in-memory records (the built-in sample data).
pub struct StaticSource<R> {
    records: Vec<R>,
}

impl<R> StaticSource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl<R> RecordSource<R> for StaticSource<R>
where
    R: Clone + Send + Sync,
{
    async fn load(&self) -> Result<Vec<R>, AppError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} records)", self.records.len())
    }
}

/// A JSON array of records on disk, validated before it is accepted.
pub struct JsonFileSource<R> {
    path: PathBuf,
    validator: fn(R) -> Validation<R>,
}

impl<R> JsonFileSource<R> {
    pub fn new(path: impl Into<PathBuf>, validator: fn(R) -> Validation<R>) -> Self {
        Self {
            path: path.into(),
            validator,
        }
    }
}

impl JsonFileSource<Job> {
    pub fn jobs(path: impl Into<PathBuf>) -> Self {
        Self::new(path, validate_job)
    }
}

impl JsonFileSource<Recruiter> {
    pub fn recruiters(path: impl Into<PathBuf>) -> Self {
        Self::new(path, validate_recruiter)
    }
}

#[async_trait]
impl<R> RecordSource<R> for JsonFileSource<R>
where
    R: DeserializeOwned + Send + Sync,
{
    async fn load(&self) -> Result<Vec<R>, AppError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let records: Vec<R> = serde_json::from_str(&raw)?;

        validate_all(records, self.validator)
            .into_result()
            .map_err(|errors| {
                warn!(
                    source = %self.describe(),
                    errors = errors.len(),
                    "rejected invalid records"
                );
                AppError::InvalidRecords {
                    source_name: self.describe(),
                    errors,
                }
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Loads a source once and freezes it into a store.
pub async fn load_store<R, S>(source: &S) -> Result<RecordStore<R>, AppError>
where
    R: Listing,
    S: RecordSource<R> + ?Sized,
{
    let records = source.load().await?;
    let store = RecordStore::new(records)?;
    if store.is_empty() {
        warn!(source = %source.describe(), "record store is empty");
    } else {
        info!(source = %source.describe(), records = store.len(), "record store loaded");
    }
    Ok(store)
}
