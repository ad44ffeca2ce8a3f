use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ballotwatch_api::Client;
use ballotwatch_server::routes::{router, AppState};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn app(provider_url: &str) -> Router {
    let civic = Client::with_base_url(provider_url, "test-key").unwrap();
    router(AppState::new(civic))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let mock_server = MockServer::start().await;
    let (status, body) = get_json(app(&mock_server.uri()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn missing_address_is_rejected_without_provider_call() {
    let mock_server = MockServer::start().await;
    // The provider must not be called at all for a missing address.
    Mock::given(method("GET"))
        .and(path("/voterinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (status, body) = get_json(app(&mock_server.uri()), "/api/v1/elections/voter-info").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Address parameter is required");
}

#[tokio::test]
async fn empty_address_is_rejected_without_provider_call() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voterinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (status, body) = get_json(
        app(&mock_server.uri()),
        "/api/v1/elections/voter-info?address=",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn voter_info_returns_normalized_result() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voterinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("voterinfo.json")))
        .mount(&mock_server)
        .await;

    let (status, body) = get_json(
        app(&mock_server.uri()),
        "/api/v1/elections/voter-info?address=123%20Main%20St%2C%20Springfield%2C%20IL",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let data = &body["data"];
    assert_eq!(data["election"]["id"], "4803");
    assert_eq!(data["contests"][0]["officeName"], "Mayor");

    // Second candidate has no party; it must be absent, not "".
    let second = &data["contests"][0]["candidates"][1];
    assert_eq!(second["name"], "John Roe");
    assert!(second.get("party").is_none());

    assert_eq!(data["pollingLocations"][0]["name"], "Springfield City Hall");
    assert_eq!(
        data["pollingLocations"][0]["locationType"],
        "polling_place"
    );
    // Provider sent no drop-off locations; the field is still an empty array.
    assert_eq!(data["dropOffLocations"], serde_json::json!([]));
}

#[tokio::test]
async fn voter_info_minimal_payload_yields_empty_collections() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voterinfo"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("voterinfo_minimal.json")),
        )
        .mount(&mock_server)
        .await;

    let (status, body) = get_json(
        app(&mock_server.uri()),
        "/api/v1/elections/voter-info?address=1%20First%20Ave",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["contests"], serde_json::json!([]));
    assert_eq!(data["pollingLocations"], serde_json::json!([]));
    assert_eq!(data["earlyVoteSites"], serde_json::json!([]));
    assert_eq!(data["dropOffLocations"], serde_json::json!([]));
}

#[tokio::test]
async fn provider_forbidden_maps_to_error_envelope() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voterinfo"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let (status, body) = get_json(
        app(&mock_server.uri()),
        "/api/v1/elections/voter-info?address=1%20First%20Ave",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("403"), "error was: {message}");
}

mod log_capture {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};

    /// Counts ERROR events emitted from this crate's handlers.
    pub struct BoundaryErrorCounter {
        count: Arc<AtomicUsize>,
    }

    impl BoundaryErrorCounter {
        pub fn new() -> (Self, Arc<AtomicUsize>) {
            let count = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    count: count.clone(),
                },
                count,
            )
        }
    }

    impl<S: Subscriber> Layer<S> for BoundaryErrorCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let meta = event.metadata();
            if *meta.level() == Level::ERROR && meta.target().starts_with("ballotwatch_server") {
                self.count.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub fn count_of(count: &Arc<AtomicUsize>) -> usize {
        count.load(Ordering::Relaxed)
    }
}

#[tokio::test]
async fn provider_failure_is_logged_once_at_the_boundary() {
    use tracing_subscriber::layer::SubscriberExt;

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voterinfo"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let (layer, count) = log_capture::BoundaryErrorCounter::new();
    let subscriber = tracing_subscriber::registry().with(layer);
    let _guard = tracing::subscriber::set_default(subscriber);

    let (status, _body) = get_json(
        app(&mock_server.uri()),
        "/api/v1/elections/voter-info?address=1%20First%20Ave",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(log_capture::count_of(&count), 1);
}

#[tokio::test]
async fn success_is_not_logged_at_the_boundary() {
    use tracing_subscriber::layer::SubscriberExt;

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voterinfo"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("voterinfo_minimal.json")),
        )
        .mount(&mock_server)
        .await;

    let (layer, count) = log_capture::BoundaryErrorCounter::new();
    let subscriber = tracing_subscriber::registry().with(layer);
    let _guard = tracing::subscriber::set_default(subscriber);

    let (status, _body) = get_json(
        app(&mock_server.uri()),
        "/api/v1/elections/voter-info?address=1%20First%20Ave",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(log_capture::count_of(&count), 0);
}

#[tokio::test]
async fn list_elections_returns_summaries() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/elections"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("elections.json")))
        .mount(&mock_server)
        .await;

    let (status, body) = get_json(app(&mock_server.uri()), "/api/v1/elections").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["elections"][0]["id"], "2000");
    assert_eq!(body["data"]["elections"][1]["electionDay"], "2025-04-01");
}

#[tokio::test]
async fn representatives_requires_address() {
    let mock_server = MockServer::start().await;
    let (status, body) = get_json(
        app(&mock_server.uri()),
        "/api/v1/elections/representatives",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Address parameter is required");
}

#[tokio::test]
async fn representatives_passthrough_with_filters() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/representatives"))
        .and(wiremock::matchers::query_param("levels", "country,administrativeArea1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"offices": [{"name": "Governor"}], "officials": []}"#,
        ))
        .mount(&mock_server)
        .await;

    let (status, body) = get_json(
        app(&mock_server.uri()),
        "/api/v1/elections/representatives?address=1%20First%20Ave&levels=country,administrativeArea1",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["offices"][0]["name"], "Governor");
}
