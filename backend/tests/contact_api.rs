use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use mobylabs_backend::{app, config::Config, AppState};

struct TestApp {
    router: Router,
    state: Arc<AppState>,
    _site: tempfile::TempDir,
}

fn test_app(rate: u32) -> TestApp {
    let site = tempfile::tempdir().unwrap();
    std::fs::write(site.path().join("index.html"), "<html><body>spa</body></html>").unwrap();
    std::fs::write(site.path().join("styles.css"), "body {}").unwrap();

    let config = Config {
        static_dir: site.path().to_path_buf(),
        contact_rate_per_minute: NonZeroU32::new(rate).unwrap(),
        ..Config::default()
    };
    let state = Arc::new(AppState::new(&config));
    TestApp {
        router: app(state.clone(), &config),
        state,
        _site: site,
    }
}

fn suam_request(email: &str) -> Value {
    json!({
        "formType": "suam",
        "name": "Ada Lovelace",
        "email": email,
        "phone": "",
        "organization": "",
        "organizationType": "",
        "fleetSize": "2",
        "deploymentArea": "Gulf of Maine",
        "useCase": "Commercial fishing",
        "additionalInfo": ""
    })
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

#[tokio::test]
async fn valid_inquiry_is_created() {
    let app = test_app(5);
    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/contact", &suam_request("ada@sea.org")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("24 hours"));

    let id: uuid::Uuid = body["id"].as_str().unwrap().parse().unwrap();
    let stored = app.state.inquiries.get(&id).unwrap();
    assert_eq!(stored.request.deployment_area, "Gulf of Maine");
}

#[tokio::test]
async fn missing_field_is_named_in_error() {
    let app = test_app(5);
    let mut request = suam_request("ada@sea.org");
    request["useCase"] = json!("  ");

    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/contact", &request))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": "useCase is required"}));
    assert!(app.state.inquiries.is_empty());
}

#[tokio::test]
async fn buoy_inquiry_requires_organization() {
    let app = test_app(5);
    let mut request = suam_request("ada@sea.org");
    request["formType"] = json!("buoy");

    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/contact", &request))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "organization is required");
}

#[tokio::test]
async fn repeated_sender_is_rate_limited() {
    let app = test_app(2);
    for _ in 0..2 {
        let response = app
            .router
            .clone()
            .oneshot(post_json("/api/contact", &suam_request("ada@sea.org")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Same sender, different casing.
    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/contact", &suam_request("ADA@sea.org")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(body_json(response).await["error"].is_string());

    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/contact", &suam_request("grace@sea.org")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(app.state.inquiries.len(), 3);
}

#[tokio::test]
async fn idle_senders_are_pruned() {
    // 600 per minute refills one request every 100ms.
    let app = test_app(600);
    for i in 0..20 {
        let response = app
            .router
            .clone()
            .oneshot(post_json("/api/contact", &suam_request(&format!("a{}@x.org", i))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    assert_eq!(app.state.contact_limiter.len(), 20);
    assert_eq!(app.state.prune_limiters(), 20);

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(app.state.prune_limiters(), 0);
    assert_eq!(app.state.inquiries.len(), 20);
}

#[tokio::test]
async fn malformed_body_gets_json_error() {
    let app = test_app(5);
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());

    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(suam_request("ada@sea.org").to_string()))
        .unwrap();
    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body_json(response).await["error"].is_string());
    assert!(app.state.inquiries.is_empty());
}

#[tokio::test]
async fn health_check_answers_ok() {
    let app = test_app(5);
    let response = app
        .router
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let app = test_app(5);
    let response = app
        .router
        .clone()
        .oneshot(Request::get("/blog/does-not-exist").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("spa"));

    let response = app
        .router
        .oneshot(Request::get("/styles.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "body {}");
}
