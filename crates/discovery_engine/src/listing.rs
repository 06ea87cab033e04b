use std::sync::Arc;

use discovery_core::{ListingQuery, PageResult, SearchLedger};
use discovery_logging::{discovery_debug, discovery_warn};

use crate::{FetchError, JobsApi};

/// Issues listings requests and feeds successful keyword searches into the ledger.
#[derive(Clone)]
pub struct ListingFetcher {
    api: Arc<dyn JobsApi>,
    ledger: SearchLedger,
}

impl ListingFetcher {
    pub fn new(api: Arc<dyn JobsApi>, ledger: SearchLedger) -> Self {
        Self { api, ledger }
    }

    /// Fetches one page. A completed fetch with a keyword counts as one search.
    pub async fn fetch(&self, query: &ListingQuery) -> Result<PageResult, FetchError> {
        let page = self.api.listings(query).await?;
        discovery_debug!(
            "listings page={} items={} has_more={}",
            query.page,
            page.items.len(),
            page.has_more
        );
        if !query.keyword.is_empty() {
            if let Err(err) = self.ledger.record(&query.keyword) {
                discovery_warn!("search ledger not updated: {}", err);
            }
        }
        Ok(page)
    }
}
