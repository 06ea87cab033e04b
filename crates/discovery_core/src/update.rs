use crate::{DiscoveryState, Effect, JobType, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DiscoveryState, msg: Msg) -> (DiscoveryState, Vec<Effect>) {
    let effects = match msg {
        Msg::Activated => {
            if state.is_active() {
                return (state, Vec::new());
            }
            state.activate();
            let mut effects = vec![Effect::FetchRecommendations];
            effects.extend(fetch_listings(&mut state));
            effects
        }
        Msg::KeywordChanged { text, at } => {
            state.set_keyword(text, at);
            reset_page(&mut state)
        }
        Msg::LocationChanged { text, at } => {
            state.set_location(text, at);
            reset_page(&mut state)
        }
        Msg::JobTypeChanged { job_type, at } => {
            state.set_job_type(job_type, at);
            reset_page(&mut state)
        }
        Msg::ResetClicked { at } => {
            state.set_keyword(String::new(), at);
            state.set_location(String::new(), at);
            state.set_job_type(JobType::Any, at);
            reset_page(&mut state)
        }
        Msg::PageSelected(page) => change_page(&mut state, page),
        Msg::PrevPage => {
            let page = state.filters().page;
            if page <= 1 {
                return (state, Vec::new());
            }
            change_page(&mut state, page - 1)
        }
        Msg::NextPage => {
            if !state.has_more() {
                return (state, Vec::new());
            }
            let page = state.filters().page.saturating_add(1);
            change_page(&mut state, page)
        }
        Msg::Tick { now } => {
            if state.settle_filters(now) {
                state.mark_dirty();
                fetch_listings(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::ListingsLoaded { generation, page } => {
            // A superseded request must not overwrite newer results.
            if generation == state.generation() {
                state.apply_page(page);
            }
            Vec::new()
        }
        Msg::ListingsFailed { generation, .. } => {
            if generation == state.generation() {
                state.apply_failure();
            }
            Vec::new()
        }
        Msg::RecommendationsLoaded(jobs) => {
            state.set_recommended(jobs);
            Vec::new()
        }
    };

    (state, effects)
}

/// Filter edits send the user back to page 1 right away; the page is not debounced.
fn reset_page(state: &mut DiscoveryState) -> Vec<Effect> {
    change_page(state, 1)
}

fn change_page(state: &mut DiscoveryState, page: u32) -> Vec<Effect> {
    if state.set_page(page) {
        fetch_listings(state)
    } else {
        Vec::new()
    }
}

fn fetch_listings(state: &mut DiscoveryState) -> Vec<Effect> {
    if !state.is_active() {
        return Vec::new();
    }
    let (generation, query) = state.begin_fetch();
    vec![Effect::FetchListings { generation, query }]
}
