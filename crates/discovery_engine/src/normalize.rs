use discovery_core::{Job, PageResult};
use discovery_logging::discovery_warn;
use serde_json::Value;

use crate::{FailureKind, FetchError};

/// Normalizes a listings/recommendations body into a [`PageResult`].
///
/// A bare array infers `has_more` from its length. An object is read as an
/// envelope: `items` defaults to empty, `hasMore` to false. `null` is a decode
/// failure; any other scalar yields an empty page. Elements that are not
/// objects are skipped.
pub fn normalize_page(body: &[u8]) -> Result<PageResult, FetchError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

    match value {
        Value::Array(raw) => Ok(PageResult::from_bare(parse_jobs(raw))),
        Value::Object(mut envelope) => {
            let items = match envelope.remove("items") {
                Some(Value::Array(raw)) => parse_jobs(raw),
                _ => Vec::new(),
            };
            let has_more = envelope
                .get("hasMore")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            Ok(PageResult { items, has_more })
        }
        Value::Null => Err(FetchError::new(FailureKind::Decode, "response body is null")),
        _ => Ok(PageResult::empty()),
    }
}

fn parse_jobs(raw: Vec<Value>) -> Vec<Job> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                discovery_warn!("skipping listing {}: not an object", index);
                return None;
            }
            match serde_json::from_value(item) {
                Ok(job) => Some(job),
                Err(err) => {
                    discovery_warn!("skipping listing {}: {}", index, err);
                    None
                }
            }
        })
        .collect()
}
