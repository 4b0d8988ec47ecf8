use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Method, Request, StatusCode},
    Json,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::assessment::router::{
    assessment_router, submit_handler, update_scoring_handler, webhook_handler,
};
use crate::scoring::ScoringConfig;

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn admin_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request")
}

#[tokio::test]
async fn submit_handler_returns_created_with_report_url() {
    let (service, _, _) = build_service();

    let response = submit_handler(
        State(Arc::new(service)),
        Json(submission("grace@example.com")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["report_url"],
        "https://profile.example.com/api/v1/reports/grace%40example.com"
    );
}

#[tokio::test]
async fn submit_handler_rejects_invalid_email() {
    let (service, _, _) = build_service();

    let response = submit_handler(
        State(Arc::new(service)),
        Json(submission("not-an-address")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("not-an-address")));
}

#[tokio::test]
async fn submit_without_configuration_is_unavailable() {
    let (service, _, _) = build_service_with(MemoryConfigs::default());

    let response = submit_handler(
        State(Arc::new(service)),
        Json(submission("grace@example.com")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn webhook_handler_returns_summary() {
    let (service, _, _) = build_service();

    let response = webhook_handler(
        State(Arc::new(service)),
        Json(webhook_payload("ada@example.com")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["scoring_method"], "webhook");
    assert_eq!(body["report"]["archetype"], "Lion");
    assert_eq!(body["report"]["email"], "ada@example.com");
}

#[tokio::test]
async fn webhook_without_form_response_is_bad_request() {
    let (service, _, _) = build_service();

    let response = webhook_handler(
        State(Arc::new(service)),
        Json(json!({ "event_type": "ping" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_scoring_update_lists_issues() {
    let (service, _, _) = build_service();
    let mut config = ScoringConfig::reference();
    config.reward_thresholds.medium_max = 10;

    let response = update_scoring_handler(State(Arc::new(service)), Json(config)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["issues"][0]["location"], "reward_thresholds");
}

#[tokio::test]
async fn router_serves_stored_report_by_email() {
    let (service, _, _) = build_service();
    let router = assessment_router(Arc::new(service), None);

    let created = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/assessment/submit",
            &serde_json::to_value(submission("grace@example.com")).expect("serializable"),
        ))
        .await
        .expect("submit response");
    assert_eq!(created.status(), StatusCode::CREATED);

    let fetched = router
        .clone()
        .oneshot(admin_request("/api/v1/reports/Grace@Example.com", None))
        .await
        .expect("report response");
    assert_eq!(fetched.status(), StatusCode::OK);
    let body = json_body(fetched).await;
    assert_eq!(body["archetype"], "Tiger");
    assert_eq!(body["personality"]["key"], "Tiger");

    let missing = router
        .oneshot(admin_request("/api/v1/reports/nobody@example.com", None))
        .await
        .expect("missing response");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_routes_require_configured_token() {
    let (service, _, _) = build_service();
    let router = assessment_router(Arc::new(service), Some("s3cret".to_string()));

    let anonymous = router
        .clone()
        .oneshot(admin_request("/api/v1/admin/scoring", None))
        .await
        .expect("anonymous response");
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let wrong = router
        .clone()
        .oneshot(admin_request("/api/v1/admin/scoring", Some("guess")))
        .await
        .expect("wrong token response");
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let authorized = router
        .clone()
        .oneshot(admin_request("/api/v1/admin/scoring", Some("s3cret")))
        .await
        .expect("authorized response");
    assert_eq!(authorized.status(), StatusCode::OK);
    let body = json_body(authorized).await;
    assert_eq!(body["version"], 1);

    let public = router
        .oneshot(admin_request("/api/v1/reports/nobody@example.com", None))
        .await
        .expect("public response");
    assert_eq!(public.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn score_tester_reports_result_without_storing() {
    let (service, _, reports) = build_service();
    let router = assessment_router(Arc::new(service), None);

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/admin/score-tester",
            &json!({ "answers": { "type_q1": "d", "tiebreaker": "A" } }),
        ))
        .await
        .expect("score tester response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["category_type"], "Tiger");
    assert_eq!(body["risk_score"], 30);
    assert!(reports
        .records
        .lock()
        .expect("repository mutex poisoned")
        .is_empty());
}

#[tokio::test]
async fn admin_listing_filters_by_archetype() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);
    service
        .submit(&submission("grace@example.com"))
        .expect("native");
    service
        .ingest_webhook(&webhook_payload("ada@example.com"))
        .expect("webhook");
    let router = assessment_router(service, None);

    let response = router
        .clone()
        .oneshot(admin_request(
            "/api/v1/admin/reports?archetype=Tiger&page_size=5",
            None,
        ))
        .await
        .expect("listing response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["page_size"], 5);
    assert_eq!(body["reports"][0]["email"], "grace@example.com");

    let stats = router
        .oneshot(admin_request("/api/v1/admin/reports/stats", None))
        .await
        .expect("stats response");
    let body = json_body(stats).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["by_archetype"]["Lion"], 1);
}

#[tokio::test]
async fn admin_scoring_without_configuration_is_not_found() {
    let (service, _, _) = build_service_with(MemoryConfigs::default());
    let router = assessment_router(Arc::new(service), None);

    let response = router
        .oneshot(admin_request("/api/v1/admin/scoring", None))
        .await
        .expect("scoring response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn report_url_resolves_against_this_router() {
    let (service, _, _) = build_service();
    let router = assessment_router(Arc::new(service.with_public_base_url("")), None);

    let created = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/assessment/submit",
            &serde_json::to_value(submission("Grace@Example.com")).expect("serializable"),
        ))
        .await
        .expect("submit response");
    assert_eq!(created.status(), StatusCode::CREATED);
    let body = json_body(created).await;
    let report_url = body["report_url"].as_str().expect("report url").to_string();
    assert_eq!(report_url, "/api/v1/reports/grace%40example.com");

    let fetched = router
        .oneshot(admin_request(&report_url, None))
        .await
        .expect("report response");
    assert_eq!(fetched.status(), StatusCode::OK);
    let body = json_body(fetched).await;
    assert_eq!(body["archetype"], "Tiger");
}

#[tokio::test]
async fn assessment_config_lists_questions_without_scoring_tables() {
    let (service, _, _) = build_service();
    let router = assessment_router(Arc::new(service), Some("s3cret".to_string()));

    let response = router
        .oneshot(admin_request("/api/v1/assessment/config", None))
        .await
        .expect("config response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["version"], 1);
    assert_eq!(body["sections"][0]["key"], "about_you");
    assert_eq!(body["sections"][1]["questions"][0]["reference"], "risk_q1");
    assert_eq!(body["sections"][1]["questions"][0]["kind"], "binary");
    assert_eq!(body["sections"][4]["questions"][0]["reference"], "select_driver");
    assert_eq!(
        body["sections"][4]["questions"][0]["options"][5]["label"],
        "Have a positive social impact"
    );
    let text = body.to_string();
    assert!(!text.contains("point_map"));
    assert!(!text.contains("option_to_category"));
    assert!(!text.contains("risk_thresholds"));
}

#[tokio::test]
async fn assessment_config_without_configuration_is_unavailable() {
    let (service, _, _) = build_service_with(MemoryConfigs::default());
    let router = assessment_router(Arc::new(service), None);

    let response = router
        .oneshot(admin_request("/api/v1/assessment/config", None))
        .await
        .expect("config response");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn score_tester_accepts_null_and_boolean_answers() {
    let (service, _, _) = build_service();
    let router = assessment_router(Arc::new(service), None);

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/admin/score-tester",
            &json!({ "answers": {
                "risk_q1": true,
                "risk_q2": null,
                "type_q1": "d",
                "tiebreaker": "A",
                "select_driver": "Money"
            } }),
        ))
        .await
        .expect("score tester response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["category_type"], "Tiger");
    // "true" selects option B (5 points); the null answer stays neutral.
    assert_eq!(body["risk_score"], 32);
}
