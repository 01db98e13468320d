use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::AnswerSet;
use super::interpretation::AssessmentEngine;
use super::repository::{AssessmentRecord, AssessmentRepository, RepositoryError, RespondentId};
use super::validity::SubmissionReview;
use crate::config::AssessmentConfig;

/// Service composing submission review, scoring, and storage.
pub struct AssessmentService<R> {
    engine: AssessmentEngine,
    repository: Arc<R>,
    config: AssessmentConfig,
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: AssessmentConfig) -> Self {
        Self::with_engine(AssessmentEngine::default(), repository, config)
    }

    pub fn with_engine(
        engine: AssessmentEngine,
        repository: Arc<R>,
        config: AssessmentConfig,
    ) -> Self {
        Self {
            engine,
            repository,
            config,
        }
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    pub fn config(&self) -> AssessmentConfig {
        self.config
    }

    /// Score a submission and persist the outcome.
    ///
    /// Incomplete submissions are scored anyway unless the service requires complete
    /// answer sets, in which case nothing is stored.
    pub fn submit(
        &self,
        respondent_id: RespondentId,
        answers: &AnswerSet,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let review = self.engine.review(answers);
        if self.config.require_complete && !review.is_complete() {
            warn!(
                respondent = %respondent_id,
                missing = review.missing_questions.len(),
                out_of_range = review.out_of_range.len(),
                "rejecting incomplete submission"
            );
            return Err(AssessmentServiceError::IncompleteSubmission(review));
        }

        let result = self.engine.assess(answers);
        let record = AssessmentRecord {
            respondent_id,
            assessed_at: Utc::now(),
            result,
        };

        self.repository.save(record.clone())?;
        info!(
            respondent = %record.respondent_id,
            summary = %record.summary(),
            "assessment stored"
        );

        Ok(record)
    }

    /// Most recent stored assessment for the respondent.
    pub fn latest(
        &self,
        respondent_id: &RespondentId,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        self.repository
            .load_latest(respondent_id)?
            .ok_or_else(|| AssessmentServiceError::NotFound(respondent_id.clone()))
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("submission incomplete: {}", .0.summary())]
    IncompleteSubmission(SubmissionReview),
    #[error("no assessment stored for respondent {0}")]
    NotFound(RespondentId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
