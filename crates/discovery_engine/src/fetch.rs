use std::time::Duration;

use discovery_core::{ListingQuery, PageResult};
use discovery_logging::discovery_debug;
use futures_util::StreamExt;
use url::Url;

use crate::normalize::normalize_page;
use crate::{FailureKind, FetchError};

pub const LISTINGS_PATH: &str = "/api/jobs";
pub const RECOMMENDED_PATH: &str = "/api/recommended";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Read-only view of the jobs API. Both calls return normalized pages.
#[async_trait::async_trait]
pub trait JobsApi: Send + Sync {
    async fn listings(&self, query: &ListingQuery) -> Result<PageResult, FetchError>;

    async fn recommended(&self, tags: &[String]) -> Result<PageResult, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobsApi {
    base: Url,
    client: reqwest::Client,
    settings: FetchSettings,
}

impl ReqwestJobsApi {
    /// `base` is the API origin, e.g. `https://jobs.example.com`.
    pub fn new(base: &str, settings: FetchSettings) -> Result<Self, FetchError> {
        let base = Url::parse(base.trim_end_matches('/'))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(FetchError::new(
                FailureKind::InvalidUrl,
                format!("{base} cannot be used as an API origin"),
            ));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            base,
            client,
            settings,
        })
    }

    pub fn listings_url(&self, query: &ListingQuery) -> Url {
        let mut url = self.endpoint(LISTINGS_PATH);
        url.query_pairs_mut().extend_pairs(query.to_pairs());
        url
    }

    pub fn recommended_url(&self, tags: &[String]) -> Url {
        let mut url = self.endpoint(RECOMMENDED_PATH);
        url.query_pairs_mut().append_pair("tags", &tags.join(","));
        url
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{prefix}{path}"));
        url.set_query(None);
        url
    }

    async fn get_page(&self, url: Url) -> Result<PageResult, FetchError> {
        discovery_debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        normalize_page(&bytes)
    }
}

#[async_trait::async_trait]
impl JobsApi for ReqwestJobsApi {
    async fn listings(&self, query: &ListingQuery) -> Result<PageResult, FetchError> {
        self.get_page(self.listings_url(query)).await
    }

    async fn recommended(&self, tags: &[String]) -> Result<PageResult, FetchError> {
        self.get_page(self.recommended_url(tags)).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
