//! Discovery engine: HTTP access to the jobs API, ledger storage and effect execution.
mod engine;
mod fetch;
mod listing;
mod normalize;
mod persist;
mod recommend;
mod types;

pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use fetch::{FetchSettings, JobsApi, ReqwestJobsApi, LISTINGS_PATH, RECOMMENDED_PATH};
pub use listing::ListingFetcher;
pub use normalize::normalize_page;
pub use persist::{ensure_data_dir, AtomicFileWriter, FileStorage, PersistError};
pub use recommend::RecommendationDeriver;
pub use types::{EngineEvent, FailureKind, FetchError};
