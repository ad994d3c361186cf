//! Record Store — an immutable, shareable snapshot of one listing collection.

use std::collections::HashSet;
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{Job, Listing, Recruiter};

/// Ordered, read-only collection of records with unique ids.
///
/// Cloning shares the underlying slice, so two clones are the same snapshot
/// (see `same_snapshot`), which is what `FilterCache` keys on.
#[derive(Debug)]
pub struct RecordStore<R> {
    records: Arc<[R]>,
}

impl<R> Clone for RecordStore<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<R: Listing> RecordStore<R> {
    /// Builds a store, rejecting the first duplicated id.
    pub fn new(records: Vec<R>) -> Result<Self, AppError> {
        {
            let mut seen = HashSet::with_capacity(records.len());
            for record in &records {
                if !seen.insert(record.id()) {
                    return Err(AppError::DuplicateId(record.id().to_string()));
                }
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }
}

impl<R> RecordStore<R> {
    /// All records in insertion order.
    pub fn all_records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when both handles point at the same loaded collection.
    pub fn same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }

    /// Deduplicated union of a set-valued attribute, in first-seen order.
    pub fn vocabulary<F>(&self, extractor: F) -> Vec<String>
    where
        F: Fn(&R) -> &[String],
    {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut vocabulary = Vec::new();

        for record in self.records.iter() {
            for value in extractor(record) {
                if seen.insert(value.as_str()) {
                    vocabulary.push(value.clone());
                }
            }
        }

        vocabulary
    }
}

impl RecordStore<Job> {
    /// Every skill tag present on at least one job.
    pub fn tag_vocabulary(&self) -> Vec<String> {
        self.vocabulary(|job| job.tags.as_slice())
    }
}

impl RecordStore<Recruiter> {
    /// Every niche present on at least one recruiter.
    pub fn niche_vocabulary(&self) -> Vec<String> {
        self.vocabulary(|recruiter| recruiter.niche.as_slice())
    }
}
