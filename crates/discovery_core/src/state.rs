use std::time::{Duration, Instant};

use crate::debounce::DebounceGate;
use crate::view_model::{DiscoveryViewModel, JobCardView};
use crate::{FilterState, Job, JobType, ListingQuery, PageResult, RECOMMENDATION_LIMIT};

/// Monotonic tag of a listings request; only the latest one may write state.
pub type Generation = u64;

/// Shown when the listings request fails. Deliberately non-technical.
pub const FETCH_ERROR_MESSAGE: &str = "Unable to load jobs right now. Please try again later.";

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryConfig {
    pub quiet_period: Duration,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            quiet_period: DEFAULT_QUIET_PERIOD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryState {
    filters: FilterState,
    keyword_gate: DebounceGate<String>,
    location_gate: DebounceGate<String>,
    type_gate: DebounceGate<JobType>,
    active: bool,
    phase: Phase,
    generation: Generation,
    jobs: Vec<Job>,
    has_more: bool,
    error: Option<String>,
    recommended: Vec<Job>,
    dirty: bool,
}

impl Default for DiscoveryState {
    fn default() -> Self {
        Self::with_config(DiscoveryConfig::default())
    }
}

impl DiscoveryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiscoveryConfig) -> Self {
        Self {
            filters: FilterState::default(),
            keyword_gate: DebounceGate::new(String::new(), config.quiet_period),
            location_gate: DebounceGate::new(String::new(), config.quiet_period),
            type_gate: DebounceGate::new(JobType::Any, config.quiet_period),
            active: false,
            phase: Phase::Idle,
            generation: 0,
            jobs: Vec::new(),
            has_more: false,
            error: None,
            recommended: Vec::new(),
            dirty: false,
        }
    }

    pub fn view(&self) -> DiscoveryViewModel {
        DiscoveryViewModel {
            phase: self.phase,
            keyword: self.filters.keyword.clone(),
            location: self.filters.location.clone(),
            job_type: self.filters.job_type,
            page: self.filters.page,
            loading: self.phase == Phase::Loading,
            error: self.error.clone(),
            jobs: cards(&self.jobs),
            has_more: self.has_more,
            can_go_prev: self.filters.page > 1,
            can_go_next: self.has_more,
            recommended: cards(&self.recommended),
            dirty: self.dirty,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn recommended(&self) -> &[Job] {
        &self.recommended
    }

    /// Query for the current debounced filters and (undebounced) page.
    pub fn current_query(&self) -> ListingQuery {
        ListingQuery {
            keyword: self.keyword_gate.settled().clone(),
            location: self.location_gate.settled().clone(),
            job_type: *self.type_gate.settled(),
            page: self.filters.page,
        }
    }

    pub fn has_pending_filters(&self) -> bool {
        self.keyword_gate.is_pending()
            || self.location_gate.is_pending()
            || self.type_gate.is_pending()
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn activate(&mut self) {
        self.active = true;
        self.mark_dirty();
    }

    pub(crate) fn set_keyword(&mut self, text: String, at: Instant) {
        self.keyword_gate.push(text.clone(), at);
        self.filters.keyword = text;
        self.mark_dirty();
    }

    pub(crate) fn set_location(&mut self, text: String, at: Instant) {
        self.location_gate.push(text.clone(), at);
        self.filters.location = text;
        self.mark_dirty();
    }

    pub(crate) fn set_job_type(&mut self, job_type: JobType, at: Instant) {
        self.type_gate.push(job_type, at);
        self.filters.job_type = job_type;
        self.mark_dirty();
    }

    /// Returns `true` if the page changed.
    pub(crate) fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if self.filters.page == page {
            return false;
        }
        self.filters.page = page;
        self.mark_dirty();
        true
    }

    /// Settles every gate whose quiet period elapsed.
    /// Returns `true` if any debounced value changed.
    pub(crate) fn settle_filters(&mut self, now: Instant) -> bool {
        let keyword = self.keyword_gate.poll(now);
        let location = self.location_gate.poll(now);
        let job_type = self.type_gate.poll(now);
        keyword || location || job_type
    }

    /// Enters `Loading` under a fresh generation, superseding any request in flight.
    pub(crate) fn begin_fetch(&mut self) -> (Generation, ListingQuery) {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.error = None;
        self.mark_dirty();
        (self.generation, self.current_query())
    }

    pub(crate) fn apply_page(&mut self, page: PageResult) {
        self.jobs = page.items;
        self.has_more = page.has_more;
        self.error = None;
        self.phase = Phase::Ready;
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self) {
        self.jobs.clear();
        self.has_more = false;
        self.error = Some(FETCH_ERROR_MESSAGE.to_string());
        self.phase = Phase::Failed;
        self.mark_dirty();
    }

    pub(crate) fn set_recommended(&mut self, mut jobs: Vec<Job>) {
        jobs.truncate(RECOMMENDATION_LIMIT);
        self.recommended = jobs;
        self.mark_dirty();
    }
}

fn cards(jobs: &[Job]) -> Vec<JobCardView> {
    jobs.iter()
        .enumerate()
        .map(|(position, job)| JobCardView::from_job(job, position))
        .collect()
}
