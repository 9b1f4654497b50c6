use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::{ApplicationId, PositionId, QuestionId};
use super::insights::InsightProvider;
use super::repository::QuestionnaireStore;
use super::service::ScoringService;

/// Router exposing scoring, breakdown, ranking and analysis endpoints.
pub fn scoring_router<S, I>(service: Arc<ScoringService<S, I>>) -> Router
where
    S: QuestionnaireStore + 'static,
    I: InsightProvider + 'static,
{
    Router::new()
        .route(
            "/api/v1/applications/:application_id/score",
            get(application_score_handler::<S, I>),
        )
        .route(
            "/api/v1/applications/:application_id/breakdown",
            get(breakdown_handler::<S, I>),
        )
        .route(
            "/api/v1/positions/:position_id/max-score",
            get(max_score_handler::<S, I>),
        )
        .route(
            "/api/v1/positions/:position_id/rankings",
            get(rankings_handler::<S, I>),
        )
        .route(
            "/api/v1/questions/:question_id/analysis",
            get(analysis_handler::<S, I>),
        )
        .with_state(service)
}

pub(crate) async fn application_score_handler<S, I>(
    State(service): State<Arc<ScoringService<S, I>>>,
    Path(application_id): Path<u64>,
) -> Response
where
    S: QuestionnaireStore + 'static,
    I: InsightProvider + 'static,
{
    match service.application_score(ApplicationId(application_id)) {
        Some(score) => (StatusCode::OK, axum::Json(score)).into_response(),
        None => {
            let payload = json!({
                "application_id": application_id,
                "error": "application not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn breakdown_handler<S, I>(
    State(service): State<Arc<ScoringService<S, I>>>,
    Path(application_id): Path<u64>,
) -> Response
where
    S: QuestionnaireStore + 'static,
    I: InsightProvider + 'static,
{
    let breakdown = service.breakdown(ApplicationId(application_id));
    (StatusCode::OK, axum::Json(breakdown)).into_response()
}

pub(crate) async fn max_score_handler<S, I>(
    State(service): State<Arc<ScoringService<S, I>>>,
    Path(position_id): Path<u64>,
) -> Response
where
    S: QuestionnaireStore + 'static,
    I: InsightProvider + 'static,
{
    let max_score = service.max_score_for_application(PositionId(position_id));
    let payload = json!({
        "position_id": position_id,
        "max_score": max_score,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn rankings_handler<S, I>(
    State(service): State<Arc<ScoringService<S, I>>>,
    Path(position_id): Path<u64>,
) -> Response
where
    S: QuestionnaireStore + 'static,
    I: InsightProvider + 'static,
{
    let rankings = service.rank_candidates(PositionId(position_id));
    (StatusCode::OK, axum::Json(rankings)).into_response()
}

pub(crate) async fn analysis_handler<S, I>(
    State(service): State<Arc<ScoringService<S, I>>>,
    Path(question_id): Path<u64>,
) -> Response
where
    S: QuestionnaireStore + 'static,
    I: InsightProvider + 'static,
{
    match service.analyze_question(QuestionId(question_id)).await {
        Some(analysis) => (StatusCode::OK, axum::Json(analysis)).into_response(),
        None => {
            let payload = json!({
                "question_id": question_id,
                "error": "no data",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
