use crate::{Job, JobType, Phase};

pub const UNTITLED_PLACEHOLDER: &str = "Untitled Role";
pub const COMPANY_PLACEHOLDER: &str = "Company";
pub const SOURCE_PLACEHOLDER: &str = "Source";

/// Hint shown while the recommendation panel has nothing to offer.
pub const RECOMMENDATION_HINT: &str =
    "Search for roles you like and this section will be personalized.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiscoveryViewModel {
    pub phase: Phase,
    pub keyword: String,
    pub location: String,
    pub job_type: JobType,
    pub page: u32,
    pub loading: bool,
    pub error: Option<String>,
    pub jobs: Vec<JobCardView>,
    pub has_more: bool,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    pub recommended: Vec<JobCardView>,
    pub dirty: bool,
}

/// A job with placeholders applied, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub key: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub source: String,
    pub link: Option<String>,
}

impl JobCardView {
    pub fn from_job(job: &Job, position: usize) -> Self {
        Self {
            key: job.key().unwrap_or_else(|| position.to_string()),
            title: present(&job.title).unwrap_or_else(|| UNTITLED_PLACEHOLDER.to_string()),
            company: present(&job.company).unwrap_or_else(|| COMPANY_PLACEHOLDER.to_string()),
            location: present(&job.location),
            job_type: present(&job.job_type),
            salary: present(&job.salary),
            source: present(&job.source).unwrap_or_else(|| SOURCE_PLACEHOLDER.to_string()),
            link: present(&job.link),
        }
    }
}

// Empty strings render like missing ones.
fn present(field: &Option<String>) -> Option<String> {
    field.as_ref().filter(|value| !value.is_empty()).cloned()
}
