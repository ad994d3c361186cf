use serde::{Deserialize, Serialize};

use super::Listing;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruiter {
    pub id: String,
    pub name: String,
    pub company: String,
    pub bio: String,
    /// Categories this recruiter places into, matched by exact containment.
    pub niche: Vec<String>,
    /// Searchable; cards show the first three plus an overflow count.
    pub specialties: Vec<String>,
    pub location: String,
    pub rating: f64,
    /// Display flag, not filterable.
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Listing for Recruiter {
    fn id(&self) -> &str {
        &self.id
    }
}
