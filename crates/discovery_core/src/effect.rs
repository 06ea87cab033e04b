use crate::{Generation, ListingQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page of listings; the completion must echo `generation`.
    FetchListings {
        generation: Generation,
        query: ListingQuery,
    },
    /// Derive the recommendation panel from the search ledger.
    FetchRecommendations,
}
