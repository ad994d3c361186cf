pub mod job;
pub mod recruiter;

pub use job::{Job, JobType};
pub use recruiter::Recruiter;

/// A record that can be held in a `RecordStore`.
pub trait Listing {
    /// Opaque identifier, unique within one collection.
    fn id(&self) -> &str;
}
