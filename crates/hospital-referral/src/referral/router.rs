use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};

use crate::error::AppError;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::provider::SnapshotProvider;
use super::recommend::ReferralRequest;
use super::service::{ReferralService, ReferralServiceError};

/// Recommendation body: the patient request plus an optional hour override.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendBody {
    #[serde(flatten)]
    pub request: ReferralRequest,
    #[serde(default)]
    pub hour: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyBody {
    #[serde(default)]
    pub complaint: String,
}

/// Router builder exposing the referral endpoints.
pub fn referral_router<P>(service: Arc<ReferralService<P>>) -> Router
where
    P: SnapshotProvider + 'static,
{
    Router::new()
        .route("/api/v1/referral/recommend", post(recommend_handler::<P>))
        .route("/api/v1/referral/classify", post(classify_handler::<P>))
        .route("/api/v1/hospitals", get(hospitals_handler::<P>))
        .route("/api/v1/overview", get(overview_handler::<P>))
        .route("/api/v1/snapshots", get(snapshots_handler::<P>))
        .with_state(service)
}

pub(crate) async fn recommend_handler<P>(
    State(service): State<Arc<ReferralService<P>>>,
    axum::Json(body): axum::Json<RecommendBody>,
) -> Response
where
    P: SnapshotProvider + 'static,
{
    match service.recommend(&body.request, body.hour) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn classify_handler<P>(
    State(service): State<Arc<ReferralService<P>>>,
    axum::Json(body): axum::Json<ClassifyBody>,
) -> Response
where
    P: SnapshotProvider + 'static,
{
    let severity = service.classify(&body.complaint);
    let payload = json!({
        "severity_code": severity.tier,
        "severity_label": severity.label,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn hospitals_handler<P>(State(service): State<Arc<ReferralService<P>>>) -> Response
where
    P: SnapshotProvider + 'static,
{
    let payload = json!({
        "data": service.hospitals(),
        "timestamp": Utc::now(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn overview_handler<P>(State(service): State<Arc<ReferralService<P>>>) -> Response
where
    P: SnapshotProvider + 'static,
{
    match service.overview() {
        Ok(summary) => {
            let payload = json!({
                "summary": summary,
                "timestamp": Utc::now(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn snapshots_handler<P>(State(service): State<Arc<ReferralService<P>>>) -> Response
where
    P: SnapshotProvider + 'static,
{
    match service.snapshots() {
        Ok(snapshots) => {
            let payload = json!({
                "data": snapshots,
                "timestamp": Utc::now(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: ReferralServiceError) -> Response {
    AppError::from(error).into_response()
}
