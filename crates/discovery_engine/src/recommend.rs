use std::sync::Arc;

use discovery_core::{Job, SearchLedger, RECOMMENDATION_LIMIT};
use discovery_logging::{discovery_debug, discovery_warn};

use crate::JobsApi;

/// Builds the recommendation panel from the ledger's top terms.
#[derive(Clone)]
pub struct RecommendationDeriver {
    api: Arc<dyn JobsApi>,
    ledger: SearchLedger,
}

impl RecommendationDeriver {
    pub fn new(api: Arc<dyn JobsApi>, ledger: SearchLedger) -> Self {
        Self { api, ledger }
    }

    /// Never fails: an empty ledger skips the request, errors yield no jobs.
    pub async fn derive(&self) -> Vec<Job> {
        let tags = self.ledger.top_terms();
        if tags.is_empty() {
            discovery_debug!("no search history; recommendations skipped");
            return Vec::new();
        }

        match self.api.recommended(&tags).await {
            Ok(page) => {
                let mut items = page.items;
                items.truncate(RECOMMENDATION_LIMIT);
                items
            }
            Err(err) => {
                discovery_warn!("recommendations unavailable: {}", err);
                Vec::new()
            }
        }
    }
}
