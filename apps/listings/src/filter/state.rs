use serde::{Deserialize, Serialize};

use super::choice::Choice;
use super::composer::RecordFilter;
use super::predicates::{matches_choice, matches_niche, matches_rating, matches_search, matches_tags};
use crate::models::{Job, Recruiter};

/// Filter state for the jobs listing. `Default` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobFilter {
    pub query: String,
    #[serde(rename = "type")]
    pub job_type: Choice,
    pub location: Choice,
    /// Selected skill tags, in selection order.
    pub tags: Vec<String>,
}

impl JobFilter {
    /// Adds the tag if absent, removes it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty()
            && self.job_type.is_all()
            && self.location.is_all()
            && self.tags.is_empty()
    }

    pub fn matches_search(&self, job: &Job) -> bool {
        matches_search(
            &self.query,
            [job.title.as_str(), job.company.as_str(), job.description.as_str()],
        )
    }

    pub fn matches_type(&self, job: &Job) -> bool {
        matches_choice(&self.job_type, job.job_type.as_str())
    }

    pub fn matches_location(&self, job: &Job) -> bool {
        matches_choice(&self.location, &job.location)
    }

    pub fn matches_tags(&self, job: &Job) -> bool {
        matches_tags(&self.tags, &job.tags)
    }
}

impl RecordFilter<Job> for JobFilter {
    fn matches(&self, job: &Job) -> bool {
        self.matches_search(job)
            && self.matches_type(job)
            && self.matches_location(job)
            && self.matches_tags(job)
    }
}

/// Filter state for the recruiters listing. `Default` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecruiterFilter {
    pub query: String,
    pub niche: Choice,
    pub location: Choice,
    /// Inclusive lower bound; 0.0 is unfiltered.
    pub min_rating: f64,
}

impl RecruiterFilter {
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty()
            && self.niche.is_all()
            && self.location.is_all()
            && self.min_rating == 0.0
    }

    pub fn matches_search(&self, recruiter: &Recruiter) -> bool {
        let fields = [
            recruiter.name.as_str(),
            recruiter.company.as_str(),
            recruiter.bio.as_str(),
        ];
        matches_search(
            &self.query,
            fields
                .into_iter()
                .chain(recruiter.specialties.iter().map(String::as_str)),
        )
    }

    pub fn matches_niche(&self, recruiter: &Recruiter) -> bool {
        matches_niche(&self.niche, &recruiter.niche)
    }

    pub fn matches_location(&self, recruiter: &Recruiter) -> bool {
        matches_choice(&self.location, &recruiter.location)
    }

    pub fn matches_rating(&self, recruiter: &Recruiter) -> bool {
        matches_rating(self.min_rating, recruiter.rating)
    }
}

impl RecordFilter<Recruiter> for RecruiterFilter {
    fn matches(&self, recruiter: &Recruiter) -> bool {
        self.matches_search(recruiter)
            && self.matches_niche(recruiter)
            && self.matches_location(recruiter)
            && self.matches_rating(recruiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_jobs, sample_recruiters};

    #[test]
    fn test_defaults_are_unconstrained() {
        assert!(JobFilter::default().is_unconstrained());
        assert!(RecruiterFilter::default().is_unconstrained());
    }

    #[test]
    fn test_toggle_tag_adds_then_removes() {
        let mut filter = JobFilter::default();
        filter.toggle_tag("React");
        filter.toggle_tag("Python");
        assert_eq!(filter.tags, vec!["React", "Python"]);
        filter.toggle_tag("React");
        assert_eq!(filter.tags, vec!["Python"]);
        assert!(!filter.is_unconstrained());
    }

    #[test]
    fn test_job_search_ignores_tags() {
        let job = &sample_jobs()[0];
        let filter = JobFilter {
            query: "typescript".to_string(),
            ..Default::default()
        };
        assert!(!filter.matches_search(job));
    }

    #[test]
    fn test_recruiter_search_covers_specialties() {
        let recruiter = &sample_recruiters()[2];
        let filter = RecruiterFilter {
            query: "mlops".to_string(),
            ..Default::default()
        };
        assert!(filter.matches_search(recruiter));
        assert!(filter.matches(recruiter));
    }

    #[test]
    fn test_unknown_type_selection_matches_nothing() {
        let filter = JobFilter {
            job_type: Choice::only("Freelance"),
            ..Default::default()
        };
        assert!(sample_jobs().iter().all(|job| !filter.matches(job)));
    }

    #[test]
    fn test_filter_state_deserializes_with_defaults() {
        let filter: JobFilter = serde_json::from_str(r#"{"type": "Remote"}"#).unwrap();
        assert_eq!(filter.job_type, Choice::only("Remote"));
        assert!(filter.location.is_all());
        assert!(filter.query.is_empty());

        let filter: RecruiterFilter = serde_json::from_str(r#"{"minRating": 4.7}"#).unwrap();
        assert!((filter.min_rating - 4.7).abs() < f64::EPSILON);
        assert!(filter.niche.is_all());
    }
}
