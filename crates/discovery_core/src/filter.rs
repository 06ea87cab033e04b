use std::fmt;
use std::str::FromStr;

/// Employment type filter. `Any` is the unset value and is never sent to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobType {
    #[default]
    Any,
    Remote,
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub const ALL: [JobType; 6] = [
        JobType::Any,
        JobType::Remote,
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
    ];

    /// Wire value for the `type` query parameter (empty for `Any`).
    pub fn as_str(self) -> &'static str {
        match self {
            JobType::Any => "",
            JobType::Remote => "remote",
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JobType::Any => "Any",
            JobType::Remote => "Remote",
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
        }
    }

    pub fn is_any(self) -> bool {
        self == JobType::Any
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown job type {0:?}")]
pub struct JobTypeParseError(pub String);

impl FromStr for JobType {
    type Err = JobTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.is_empty() || wanted.eq_ignore_ascii_case("any") {
            return Ok(JobType::Any);
        }
        JobType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| JobTypeParseError(s.to_string()))
    }
}

/// Raw, undebounced filter inputs as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub keyword: String,
    pub location: String,
    pub job_type: JobType,
    pub page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            location: String::new(),
            job_type: JobType::Any,
            page: 1,
        }
    }
}

/// Parameters of a single listings request: debounced filters plus the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub keyword: String,
    pub location: String,
    pub job_type: JobType,
    pub page: u32,
}

impl ListingQuery {
    /// Query pairs in request order. Empty filters are omitted, `page` is always present.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if !self.keyword.is_empty() {
            pairs.push(("q", self.keyword.clone()));
        }
        if !self.location.is_empty() {
            pairs.push(("location", self.location.clone()));
        }
        if !self.job_type.is_any() {
            pairs.push(("type", self.job_type.as_str().to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs
    }
}
