//! Job discovery core: pure controller state machine, debounce gates,
//! search ledger and view-model helpers.
mod debounce;
mod effect;
mod filter;
mod job;
mod ledger;
mod msg;
mod state;
mod update;
mod view_model;

pub use debounce::DebounceGate;
pub use effect::Effect;
pub use filter::{FilterState, JobType, JobTypeParseError, ListingQuery};
pub use job::{Job, JobKey, PageResult, PAGE_SIZE_THRESHOLD, RECOMMENDATION_LIMIT};
pub use ledger::{
    normalize_term, MemoryStorage, SearchLedger, StorageError, StoragePort, LEDGER_CAPACITY,
    LEDGER_KEY,
};
pub use msg::Msg;
pub use state::{
    DiscoveryConfig, DiscoveryState, Generation, Phase, DEFAULT_QUIET_PERIOD,
    FETCH_ERROR_MESSAGE,
};
pub use update::update;
pub use view_model::{
    DiscoveryViewModel, JobCardView, COMPANY_PLACEHOLDER, RECOMMENDATION_HINT,
    SOURCE_PLACEHOLDER, UNTITLED_PLACEHOLDER,
};
