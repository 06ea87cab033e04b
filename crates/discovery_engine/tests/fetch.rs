use std::time::Duration;

use discovery_core::{JobType, ListingQuery};
use discovery_engine::{FailureKind, FetchSettings, JobsApi, ReqwestJobsApi};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn query(keyword: &str, location: &str, job_type: JobType, page: u32) -> ListingQuery {
    ListingQuery {
        keyword: keyword.to_string(),
        location: location.to_string(),
        job_type,
        page,
    }
}

fn api_for(server: &MockServer) -> ReqwestJobsApi {
    ReqwestJobsApi::new(&server.uri(), FetchSettings::default()).expect("valid origin")
}

#[tokio::test]
async fn listings_send_only_non_empty_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(query_param("q", "rust developer"))
        .and(query_param("type", "full-time"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"title": "Rustacean"}])))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let page = api
        .listings(&query("rust developer", "", JobType::FullTime, 2))
        .await
        .expect("fetch ok");
    assert_eq!(page.items.len(), 1);
    assert!(!page.has_more);

    let requests = server.received_requests().await.unwrap();
    let keys: Vec<String> = requests[0]
        .url
        .query_pairs()
        .map(|(key, _)| key.into_owned())
        .collect();
    assert_eq!(keys, vec!["q", "type", "page"]);
}

#[tokio::test]
async fn unfiltered_listings_carry_only_the_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"items": [], "hasMore": false})),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.listings(&query("", "", JobType::Any, 1)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("page=1"));
}

#[tokio::test]
async fn recommended_joins_tags_with_commas() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recommended"))
        .and(query_param("tags", "rust,go,remote work"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": 7}]})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let tags = vec!["rust".to_string(), "go".to_string(), "remote work".to_string()];
    let page = api.recommended(&tags).await.expect("fetch ok");
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn base_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/v2/", server.uri());
    let api = ReqwestJobsApi::new(&base, FetchSettings::default()).unwrap();
    api.listings(&query("", "", JobType::Any, 1)).await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .listings(&query("", "", JobType::Any, 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let api = ReqwestJobsApi::new(&server.uri(), settings).unwrap();
    let err = api
        .listings(&query("", "", JobType::Any, 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("[{},{},{},{}]"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 8,
        ..FetchSettings::default()
    };
    let api = ReqwestJobsApi::new(&server.uri(), settings).unwrap();
    let err = api
        .listings(&query("", "", JobType::Any, 1))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 8,
            actual: Some(13)
        }
    );
}

#[test]
fn invalid_origin_is_rejected() {
    let err = ReqwestJobsApi::new("not a url", FetchSettings::default()).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
