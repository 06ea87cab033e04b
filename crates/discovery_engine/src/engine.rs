use std::sync::{mpsc, Arc};
use std::thread;

use discovery_core::{Generation, ListingQuery, SearchLedger};
use discovery_logging::{discovery_debug, discovery_error};
use tokio_util::sync::CancellationToken;

use crate::{EngineEvent, JobsApi, ListingFetcher, RecommendationDeriver};

/// Receives engine completions. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    FetchListings {
        generation: Generation,
        query: ListingQuery,
    },
    FetchRecommendations,
}

/// Runs fetches on a background tokio runtime.
///
/// A new listings request cancels the previous one, so at most one listings
/// fetch is in flight. Dropping every handle shuts the runtime down.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(api: Arc<dyn JobsApi>, ledger: SearchLedger, sink: Arc<dyn EventSink>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let listings = ListingFetcher::new(api.clone(), ledger.clone());
        let recommendations = RecommendationDeriver::new(api, ledger);

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    discovery_error!("failed to start fetch runtime: {}", err);
                    return;
                }
            };
            let mut in_flight: Option<CancellationToken> = None;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::FetchListings { generation, query } => {
                        if let Some(previous) = in_flight.take() {
                            previous.cancel();
                        }
                        let token = CancellationToken::new();
                        in_flight = Some(token.clone());
                        let fetcher = listings.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            tokio::select! {
                                _ = token.cancelled() => {
                                    discovery_debug!("listings generation={} superseded", generation);
                                }
                                result = fetcher.fetch(&query) => {
                                    sink.emit(EngineEvent::ListingsFetched { generation, result });
                                }
                            }
                        });
                    }
                    EngineCommand::FetchRecommendations => {
                        let deriver = recommendations.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            let jobs = deriver.derive().await;
                            sink.emit(EngineEvent::RecommendationsReady(jobs));
                        });
                    }
                }
            }
        });

        Self { cmd_tx }
    }

    pub fn fetch_listings(&self, generation: Generation, query: ListingQuery) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::FetchListings { generation, query });
    }

    pub fn fetch_recommendations(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchRecommendations);
    }
}
