use std::sync::Once;
use std::time::{Duration, Instant};

use discovery_core::{
    update, DiscoveryState, Effect, JobType, ListingQuery, Msg, Phase, DEFAULT_QUIET_PERIOD,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(discovery_logging::initialize_for_tests);
}

fn query(keyword: &str, location: &str, job_type: JobType, page: u32) -> ListingQuery {
    ListingQuery {
        keyword: keyword.to_string(),
        location: location.to_string(),
        job_type,
        page,
    }
}

fn activated() -> DiscoveryState {
    let (state, _effects) = update(DiscoveryState::new(), Msg::Activated);
    state
}

fn tick(state: DiscoveryState, at: Instant) -> (DiscoveryState, Vec<Effect>) {
    update(state, Msg::Tick { now: at })
}

#[test]
fn activation_fetches_first_page_and_recommendations_once() {
    init_logging();
    let (mut state, effects) = update(DiscoveryState::new(), Msg::Activated);

    assert_eq!(
        effects,
        vec![
            Effect::FetchRecommendations,
            Effect::FetchListings {
                generation: 1,
                query: query("", "", JobType::Any, 1),
            },
        ]
    );
    assert_eq!(state.phase(), Phase::Loading);
    assert!(state.consume_dirty());

    let (state, effects) = update(state, Msg::Activated);
    assert!(effects.is_empty());
    assert_eq!(state.generation(), 1);
}

#[test]
fn keystrokes_fetch_once_after_quiet_period() {
    init_logging();
    let start = Instant::now();
    let mut state = activated();

    for (offset_ms, text) in [(0, "r"), (100, "ru"), (200, "rus"), (300, "rust")] {
        let at = start + Duration::from_millis(offset_ms);
        let (next, effects) = update(
            state,
            Msg::KeywordChanged {
                text: text.to_string(),
                at,
            },
        );
        assert!(effects.is_empty(), "page was already 1, nothing to fetch yet");
        let (next, effects) = tick(next, at);
        assert!(effects.is_empty());
        state = next;
    }
    assert_eq!(state.filters().keyword, "rust");
    assert!(state.has_pending_filters());

    let (state, effects) = tick(state, start + Duration::from_millis(650));
    assert!(effects.is_empty());

    let (state, effects) = tick(state, start + Duration::from_millis(700));
    assert_eq!(
        effects,
        vec![Effect::FetchListings {
            generation: 2,
            query: query("rust", "", JobType::Any, 1),
        }]
    );

    // Nothing left to settle.
    let (_state, effects) = tick(state, start + Duration::from_secs(5));
    assert!(effects.is_empty());
}

#[test]
fn filters_debounce_independently() {
    init_logging();
    let start = Instant::now();
    let state = activated();

    let (state, _) = update(
        state,
        Msg::KeywordChanged {
            text: "data".into(),
            at: start,
        },
    );
    let (state, _) = update(
        state,
        Msg::JobTypeChanged {
            job_type: JobType::Contract,
            at: start + Duration::from_millis(300),
        },
    );

    // Keyword settles on its own schedule while type is still pending.
    let (state, effects) = tick(state, start + DEFAULT_QUIET_PERIOD);
    assert_eq!(
        effects,
        vec![Effect::FetchListings {
            generation: 2,
            query: query("data", "", JobType::Any, 1),
        }]
    );

    let (state, effects) = tick(state, start + Duration::from_millis(700));
    assert_eq!(
        effects,
        vec![Effect::FetchListings {
            generation: 3,
            query: query("data", "", JobType::Contract, 1),
        }]
    );
    assert_eq!(state.current_query().job_type, JobType::Contract);
}

#[test]
fn filter_edit_on_later_page_resets_page_immediately() {
    init_logging();
    let start = Instant::now();
    let state = activated();
    let (state, _) = update(
        state,
        Msg::ListingsLoaded {
            generation: 1,
            page: discovery_core::PageResult {
                items: Vec::new(),
                has_more: true,
            },
        },
    );
    let (state, _) = update(state, Msg::NextPage);
    assert_eq!(state.filters().page, 2);

    let (state, effects) = update(
        state,
        Msg::LocationChanged {
            text: "Berlin".into(),
            at: start,
        },
    );
    // Page 1 applies now with the old debounced location.
    assert_eq!(
        effects,
        vec![Effect::FetchListings {
            generation: 3,
            query: query("", "", JobType::Any, 1),
        }]
    );
    assert_eq!(state.filters().page, 1);

    let (_state, effects) = tick(state, start + DEFAULT_QUIET_PERIOD);
    assert_eq!(
        effects,
        vec![Effect::FetchListings {
            generation: 4,
            query: query("", "Berlin", JobType::Any, 1),
        }]
    );
}

#[test]
fn reset_clears_filters_after_one_quiet_period() {
    init_logging();
    let start = Instant::now();
    let state = activated();

    let (state, _) = update(
        state,
        Msg::KeywordChanged {
            text: "rust".into(),
            at: start,
        },
    );
    let (state, _) = update(
        state,
        Msg::LocationChanged {
            text: "Remote".into(),
            at: start,
        },
    );
    let (state, _) = update(
        state,
        Msg::JobTypeChanged {
            job_type: JobType::Internship,
            at: start,
        },
    );
    let (state, effects) = tick(state, start + DEFAULT_QUIET_PERIOD);
    assert_eq!(effects.len(), 1);

    let reset_at = start + Duration::from_secs(2);
    let (state, effects) = update(state, Msg::ResetClicked { at: reset_at });
    assert!(effects.is_empty());
    assert_eq!(state.filters().keyword, "");
    assert_eq!(state.filters().location, "");
    assert_eq!(state.filters().job_type, JobType::Any);
    assert_eq!(state.filters().page, 1);

    let (_state, effects) = tick(state, reset_at + DEFAULT_QUIET_PERIOD);
    let Effect::FetchListings { query, .. } = &effects[0] else {
        panic!("expected a listings fetch, got {effects:?}");
    };
    assert_eq!(effects.len(), 1);
    assert_eq!(query.to_pairs(), vec![("page", "1".to_string())]);
}

#[test]
fn inputs_before_activation_do_not_fetch() {
    init_logging();
    let start = Instant::now();
    let (state, effects) = update(
        DiscoveryState::new(),
        Msg::KeywordChanged {
            text: "ml".into(),
            at: start,
        },
    );
    assert!(effects.is_empty());
    let (state, effects) = tick(state, start + DEFAULT_QUIET_PERIOD);
    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Idle);

    // The first fetch picks up what settled meanwhile.
    let (_state, effects) = update(state, Msg::Activated);
    assert_eq!(
        effects[1],
        Effect::FetchListings {
            generation: 1,
            query: query("ml", "", JobType::Any, 1),
        }
    );
}

#[test]
fn query_pairs_skip_empty_filters() {
    assert_eq!(
        query("rust dev", "", JobType::PartTime, 3).to_pairs(),
        vec![
            ("q", "rust dev".to_string()),
            ("type", "part-time".to_string()),
            ("page", "3".to_string()),
        ]
    );
}
