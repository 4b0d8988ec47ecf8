use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use super::content::ContentCatalog;
use super::intake::{flatten_answers, NativeSubmission};
use super::repository::{ReportQuery, ReportRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};
use super::store::{ConfigRepository, StoreError};
use crate::scoring::ScoringConfig;

/// Router builder exposing the participant and admin endpoints.
///
/// With `admin_token` set, every `/api/v1/admin` route requires a matching
/// `Authorization: Bearer` header.
pub fn assessment_router<C, R>(
    service: Arc<AssessmentService<C, R>>,
    admin_token: Option<String>,
) -> Router
where
    C: ConfigRepository + 'static,
    R: ReportRepository + 'static,
{
    let public = Router::new()
        .route(
            "/api/v1/assessment/config",
            get(assessment_form_handler::<C, R>),
        )
        .route("/api/v1/assessment/submit", post(submit_handler::<C, R>))
        .route("/api/v1/webhook/form", post(webhook_handler::<C, R>))
        .route("/api/v1/reports/:email", get(report_handler::<C, R>))
        .with_state(service.clone());

    let admin = Router::new()
        .route(
            "/api/v1/admin/score-tester",
            post(score_tester_handler::<C, R>),
        )
        .route(
            "/api/v1/admin/scoring",
            get(scoring_config_handler::<C, R>).put(update_scoring_handler::<C, R>),
        )
        .route(
            "/api/v1/admin/content",
            get(content_handler::<C, R>).put(update_content_handler::<C, R>),
        )
        .route("/api/v1/admin/reports", get(list_reports_handler::<C, R>))
        .route(
            "/api/v1/admin/reports/stats",
            get(report_stats_handler::<C, R>),
        )
        .with_state(service)
        .route_layer(middleware::from_fn_with_state(
            admin_token.map(Arc::<str>::from),
            require_admin,
        ));

    public.merge(admin)
}

pub(crate) async fn require_admin(
    State(token): State<Option<Arc<str>>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = token else {
        return next.run(request).await;
    };

    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    if presented == Some(expected.as_ref()) {
        next.run(request).await
    } else {
        warn!(path = %request.uri().path(), "admin request rejected");
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "unauthorized" })),
        )
            .into_response()
    }
}

/// Raw answer values, flattened the same way as hosted-form submissions.
#[derive(Debug, Deserialize)]
pub(crate) struct ScoreTesterRequest {
    #[serde(default)]
    pub(crate) answers: BTreeMap<String, Value>,
}

pub(crate) async fn assessment_form_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
) -> Response
where
    C: ConfigRepository + 'static,
    R: ReportRepository + 'static,
{
    match service.assessment_form() {
        Ok(form) => (StatusCode::OK, Json(form)).into_response(),
        Err(err) => error_response(err, StatusCode::SERVICE_UNAVAILABLE),
    }
}

pub(crate) async fn submit_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
    Json(submission): Json<NativeSubmission>,
) -> Response
where
    C: ConfigRepository + 'static,
    R: ReportRepository + 'static,
{
    match service.submit(&submission) {
        Ok(receipt) => (
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "report_url": receipt.report_url,
            })),
        )
            .into_response(),
        Err(err) => error_response(err, StatusCode::SERVICE_UNAVAILABLE),
    }
}

pub(crate) async fn webhook_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
    Json(payload): Json<Value>,
) -> Response
where
    C: ConfigRepository + 'static,
    R: ReportRepository + 'static,
{
    match service.ingest_webhook(&payload) {
        Ok(record) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "scoring_method": record.scoring_method,
                "report": record.report.summary(),
            })),
        )
            .into_response(),
        Err(err) => error_response(err, StatusCode::SERVICE_UNAVAILABLE),
    }
}

pub(crate) async fn report_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
    Path(email): Path<String>,
) -> Response
where
    C: ConfigRepository + 'static,
    R: ReportRepository + 'static,
{
    match service.report(&email) {
        Ok(record) => (StatusCode::OK, Json(record.report)).into_response(),
        Err(err) => error_response(err, StatusCode::SERVICE_UNAVAILABLE),
    }
}

pub(crate) async fn score_tester_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
    Json(request): Json<ScoreTesterRequest>,
) -> Response
where
    C: ConfigRepository + 'static,
    R: ReportRepository + 'static,
{
    match service.test_scoring(&flatten_answers(&request.answers)) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(err, StatusCode::NOT_FOUND),
    }
}

pub(crate) async fn scoring_config_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
) -> Response
where
    C: ConfigRepository + 'static,
    R: ReportRepository + 'static,
{
    match service.scoring_config() {
        Ok(stored) => (StatusCode::OK, Json(stored)).into_response(),
        Err(err) => error_response(err, StatusCode::NOT_FOUND),
    }
}

pub(crate) async fn update_scoring_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
    Json(config): Json<ScoringConfig>,
) -> Response
where
    C: ConfigRepository + 'static,
    R: ReportRepository + 'static,
{
    match service.update_scoring_config(config) {
        Ok(stored) => (StatusCode::OK, Json(stored)).into_response(),
        Err(err) => error_response(err, StatusCode::NOT_FOUND),
    }
}

pub(crate) async fn content_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
) -> Response
where
    C: ConfigRepository + 'static,
    R: ReportRepository + 'static,
{
    match service.content() {
        Ok(catalog) => (StatusCode::OK, Json(catalog)).into_response(),
        Err(err) => error_response(err, StatusCode::NOT_FOUND),
    }
}

pub(crate) async fn update_content_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
    Json(catalog): Json<ContentCatalog>,
) -> Response
where
    C: ConfigRepository + 'static,
    R: ReportRepository + 'static,
{
    match service.update_content(catalog) {
        Ok(catalog) => (StatusCode::OK, Json(catalog)).into_response(),
        Err(err) => error_response(err, StatusCode::NOT_FOUND),
    }
}

pub(crate) async fn list_reports_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
    Query(query): Query<ReportQuery>,
) -> Response
where
    C: ConfigRepository + 'static,
    R: ReportRepository + 'static,
{
    match service.list_reports(&query) {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(err) => error_response(err, StatusCode::NOT_FOUND),
    }
}

pub(crate) async fn report_stats_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
) -> Response
where
    C: ConfigRepository + 'static,
    R: ReportRepository + 'static,
{
    match service.report_stats() {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(err) => error_response(err, StatusCode::NOT_FOUND),
    }
}

/// `missing_config` is the status used when no configuration is stored:
/// participants see a temporary outage, admins a plain 404.
fn error_response(err: AssessmentServiceError, missing_config: StatusCode) -> Response {
    let (status, payload) = match &err {
        AssessmentServiceError::Intake(_) => {
            (StatusCode::BAD_REQUEST, json!({ "error": err.to_string() }))
        }
        AssessmentServiceError::InvalidConfig(issues) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "error": err.to_string(), "issues": issues }),
        ),
        AssessmentServiceError::Store(StoreError::NotFound(_)) => {
            (missing_config, json!({ "error": err.to_string() }))
        }
        AssessmentServiceError::Repository(RepositoryError::NotFound) => {
            (StatusCode::NOT_FOUND, json!({ "error": "report not found" }))
        }
        AssessmentServiceError::Store(_) | AssessmentServiceError::Repository(_) => {
            warn!(error = %err, "assessment request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": err.to_string() }),
            )
        }
    };
    (status, Json(payload)).into_response()
}
