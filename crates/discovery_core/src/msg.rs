use std::time::Instant;

use crate::{Generation, Job, JobType, PageResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Discovery surface became visible; runs the initial fetches once.
    Activated,
    /// User edited the keyword box.
    KeywordChanged { text: String, at: Instant },
    /// User edited the location box.
    LocationChanged { text: String, at: Instant },
    /// User picked an employment type.
    JobTypeChanged { job_type: JobType, at: Instant },
    /// User jumped to a specific page.
    PageSelected(u32),
    /// User clicked Prev.
    PrevPage,
    /// User clicked Next.
    NextPage,
    /// User clicked Reset filters.
    ResetClicked { at: Instant },
    /// Clock tick used to settle debounced filters.
    Tick { now: Instant },
    /// Listings fetch finished successfully.
    ListingsLoaded {
        generation: Generation,
        page: PageResult,
    },
    /// Listings fetch failed; `reason` is for logs only.
    ListingsFailed {
        generation: Generation,
        reason: String,
    },
    /// Recommendation panel content (possibly empty).
    RecommendationsLoaded(Vec<Job>),
}
