use std::sync::{mpsc, Arc};

use discovery_core::{Effect, Msg, SearchLedger};
use discovery_engine::{EngineEvent, EngineHandle, EventSink, JobsApi};
use discovery_logging::{discovery_debug, discovery_warn};

use super::input::Command;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(api: Arc<dyn JobsApi>, ledger: SearchLedger, inbox: mpsc::Sender<Command>) -> Self {
        let engine = EngineHandle::new(api, ledger, Arc::new(InboxSink { inbox }));
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchListings { generation, query } => {
                    discovery_debug!(
                        "FetchListings generation={} params={:?}",
                        generation,
                        query.to_pairs()
                    );
                    self.engine.fetch_listings(generation, query);
                }
                Effect::FetchRecommendations => {
                    self.engine.fetch_recommendations();
                }
            }
        }
    }
}

/// Routes engine completions back into the main loop's inbox.
struct InboxSink {
    inbox: mpsc::Sender<Command>,
}

impl EventSink for InboxSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.inbox.send(Command::Msg(to_msg(event)));
    }
}

pub(crate) fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ListingsFetched { generation, result } => match result {
            Ok(page) => Msg::ListingsLoaded { generation, page },
            Err(err) => {
                discovery_warn!("listings generation={} failed: {}", generation, err);
                Msg::ListingsFailed {
                    generation,
                    reason: err.to_string(),
                }
            }
        },
        EngineEvent::RecommendationsReady(jobs) => Msg::RecommendationsLoaded(jobs),
    }
}
