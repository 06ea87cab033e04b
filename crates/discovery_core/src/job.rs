use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Bare responses at least this long are assumed to have a next page.
pub const PAGE_SIZE_THRESHOLD: usize = 10;

/// Maximum number of jobs shown in the recommendation panel.
pub const RECOMMENDATION_LIMIT: usize = 6;

/// Identifier of a job as supplied by the API, numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum JobKey {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobKey::Number(n) => write!(f, "{n}"),
            JobKey::Text(s) => f.write_str(s),
        }
    }
}

/// A listing as returned by the jobs API. Every field is optional.
///
/// Scalar fields accept strings and numbers; any other JSON type reads as
/// absent so one odd field never rejects the listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(deserialize_with = "lenient_key")]
    pub id: Option<JobKey>,
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(rename = "type", alias = "jobType", deserialize_with = "lenient_text")]
    pub job_type: Option<String>,
    #[serde(alias = "salaryText", deserialize_with = "lenient_text")]
    pub salary: Option<String>,
    #[serde(alias = "sourceName", deserialize_with = "lenient_text")]
    pub source: Option<String>,
    #[serde(alias = "applyLink", deserialize_with = "lenient_text")]
    pub link: Option<String>,
}

impl Job {
    /// Card key: `id`, else `link`, else `None` (caller falls back to position).
    pub fn key(&self) -> Option<String> {
        self.id
            .as_ref()
            .map(ToString::to_string)
            .or_else(|| self.link.clone())
    }
}

/// One page of listings after normalization of the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageResult {
    pub items: Vec<Job>,
    pub has_more: bool,
}

impl PageResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bare-sequence shape: `has_more` is inferred from the page length.
    pub fn from_bare(items: Vec<Job>) -> Self {
        let has_more = items.len() >= PAGE_SIZE_THRESHOLD;
        Self { items, has_more }
    }
}

fn lenient_key<'de, D>(deserializer: D) -> Result<Option<JobKey>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(JobKey::Number(n)),
        Value::String(s) => Some(JobKey::Text(s)),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
