//! One pure predicate per filter dimension.
//!
//! Every predicate is total and borrows its inputs; an unconstrained
//! dimension (empty query, `Choice::All`, empty tag set, zero threshold)
//! always matches.

use super::choice::Choice;

/// Case-insensitive substring search across a fixed set of fields.
/// An empty query matches everything.
pub fn matches_search<'a, I>(query: &str, fields: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact, case-sensitive equality unless the selection is `All`.
/// Used for job type and location.
pub fn matches_choice(selection: &Choice, value: &str) -> bool {
    match selection {
        Choice::All => true,
        Choice::Only(selected) => selected == value,
    }
}

/// Exact element containment in a multi-value field unless the selection is `All`.
pub fn matches_niche(selection: &Choice, values: &[String]) -> bool {
    match selection {
        Choice::All => true,
        Choice::Only(selected) => values.iter().any(|v| v == selected),
    }
}

/// OR within the dimension: any selected tag present on the record.
/// No selected tags means no constraint.
pub fn matches_tags(selected: &[String], tags: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|tag| tags.contains(tag))
}

/// Inclusive lower bound on rating. A threshold of 0 imposes nothing on
/// non-negative ratings.
pub fn matches_rating(min_rating: f64, rating: f64) -> bool {
    rating >= min_rating
}
