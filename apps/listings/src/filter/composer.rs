//! Filter Composer — AND across dimensions, stable over input order.

use tracing::debug;

/// A filter state that decides, per record, whether every active dimension matches.
pub trait RecordFilter<R> {
    fn matches(&self, record: &R) -> bool;
}

/// Returns the records matching `state`, in their original order.
///
/// Pure: the input slice is never mutated and equal inputs give equal output.
/// An empty result is a normal outcome.
pub fn filter_records<'a, R, F>(records: &'a [R], state: &F) -> Vec<&'a R>
where
    F: RecordFilter<R> + ?Sized,
{
    let matched: Vec<&R> = records.iter().filter(|r| state.matches(r)).collect();
    debug!(matched = matched.len(), total = records.len(), "filtered records");
    matched
}

/// Indices of matching records, used by the cache to avoid holding borrows.
pub(crate) fn matching_indices<R, F>(records: &[R], state: &F) -> Vec<usize>
where
    F: RecordFilter<R> + ?Sized,
{
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| state.matches(r))
        .map(|(i, _)| i)
        .collect()
}
