use tracing::trace;

use super::composer::{matching_indices, RecordFilter};
use crate::store::RecordStore;

/// Memoizes the last filter result, keyed on (store snapshot, filter state).
///
/// Returns exactly what `filter_records` would; the cache only skips the
/// recomputation when neither the snapshot nor the state value changed.
#[derive(Debug)]
pub struct FilterCache<R, F> {
    last: Option<Entry<R, F>>,
    hits: u64,
    misses: u64,
}

#[derive(Debug)]
struct Entry<R, F> {
    store: RecordStore<R>,
    state: F,
    indices: Vec<usize>,
}

impl<R, F> Default for FilterCache<R, F> {
    fn default() -> Self {
        Self {
            last: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<R, F> FilterCache<R, F>
where
    F: RecordFilter<R> + PartialEq + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<'s>(&mut self, store: &'s RecordStore<R>, state: &F) -> Vec<&'s R> {
        let fresh = match &self.last {
            Some(entry) => entry.store.same_snapshot(store) && entry.state == *state,
            None => false,
        };

        if fresh {
            self.hits += 1;
            trace!(hits = self.hits, "filter cache hit");
        } else {
            self.misses += 1;
            trace!(misses = self.misses, "filter cache miss");
            self.last = Some(Entry {
                store: store.clone(),
                state: state.clone(),
                indices: matching_indices(store.all_records(), state),
            });
        }

        let records = store.all_records();
        self.last
            .as_ref()
            .map(|entry| entry.indices.iter().map(|&i| &records[i]).collect())
            .unwrap_or_default()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
