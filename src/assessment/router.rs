use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{AnswerSet, Question};
use super::interpretation::{interpret, Interpretation};
use super::repository::{AssessmentRecord, AssessmentRepository, RespondentId};
use super::service::{AssessmentService, AssessmentServiceError};

/// Request body for a questionnaire submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub answers: AnswerSet,
    #[serde(default)]
    pub include_interpretation: Option<bool>,
}

/// Stored record plus optional narrative copy.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    #[serde(flatten)]
    pub record: AssessmentRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<Interpretation>,
}

impl AssessmentView {
    pub fn new(record: AssessmentRecord, include_interpretation: bool) -> Self {
        let interpretation = include_interpretation.then(|| interpret(&record.result));
        Self {
            record,
            interpretation,
        }
    }
}

/// Router builder exposing the questionnaire, submission, and lookup endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/questions", get(questions_handler::<R>))
        .route(
            "/api/v1/assessments/:respondent_id",
            post(submit_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:respondent_id/latest",
            get(latest_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> axum::Json<Vec<Question>>
where
    R: AssessmentRepository + 'static,
{
    let questions = service
        .engine()
        .bank()
        .all_questions(true)
        .into_iter()
        .copied()
        .collect();
    axum::Json(questions)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(respondent_id): Path<String>,
    axum::Json(request): axum::Json<SubmissionRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let include_interpretation = request
        .include_interpretation
        .unwrap_or(service.config().include_interpretation);

    match service.submit(RespondentId(respondent_id), &request.answers) {
        Ok(record) => {
            let view = AssessmentView::new(record, include_interpretation);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::IncompleteSubmission(review)) => {
            let payload = json!({
                "error": "submission incomplete",
                "missing_questions": review.missing_questions,
                "out_of_range": review.out_of_range,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn latest_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(respondent_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let id = RespondentId(respondent_id);
    match service.latest(&id) {
        Ok(record) => {
            let view = AssessmentView::new(record, service.config().include_interpretation);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::NotFound(_)) => {
            let payload = json!({
                "respondent_id": id.0,
                "error": "no assessment on record",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
