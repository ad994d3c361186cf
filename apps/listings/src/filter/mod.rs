//! Client-side listing filter: per-dimension predicates, AND composition,
//! and an optional memo keyed on (snapshot, state).

pub mod cache;
pub mod choice;
pub mod composer;
pub mod predicates;
pub mod state;

pub use cache::FilterCache;
pub use choice::Choice;
pub use composer::{filter_records, RecordFilter};
pub use state::{JobFilter, RecruiterFilter};
