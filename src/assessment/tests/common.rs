use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{AnswerSet, Category, Confidence};
use crate::assessment::questions::QuestionBank;
use crate::assessment::repository::{
    AssessmentRecord, AssessmentRepository, RepositoryError, RespondentId,
};
use crate::assessment::scoring::{CategoryScore, CategoryScores};
use crate::assessment::service::AssessmentService;
use crate::config::AssessmentConfig;

pub(super) fn bank() -> &'static QuestionBank {
    QuestionBank::global()
}

/// Every main question answered with the same value.
pub(super) fn uniform_answers(value: i32) -> AnswerSet {
    (1..=36).map(|id| (id, value)).collect()
}

/// Main answers chosen per category, e.g. to build a lopsided profile.
pub(super) fn answers_by_category(value_for: impl Fn(Category) -> i32) -> AnswerSet {
    (1..=36u32)
        .map(|id| {
            let category = Category::ordered()[((id - 1) % 6) as usize];
            (id, value_for(category))
        })
        .collect()
}

/// Hand-built score map; percentages are given in category declaration order.
pub(super) fn scores_from_percentages(percentages: [u32; 6]) -> CategoryScores {
    Category::ordered()
        .into_iter()
        .zip(percentages)
        .map(|(category, percentage)| {
            (
                category,
                CategoryScore {
                    raw: percentage * 30 / 100,
                    percentage,
                    confidence: Confidence::Medium,
                    consistency: 1.0,
                },
            )
        })
        .collect()
}

pub(super) fn respondent(name: &str) -> RespondentId {
    RespondentId(name.to_string())
}

pub(super) fn build_service(
    config: AssessmentConfig,
) -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone(), config);
    (service, repository)
}

pub(super) fn strict_config() -> AssessmentConfig {
    AssessmentConfig {
        require_complete: true,
        include_interpretation: true,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<AssessmentRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl AssessmentRepository for MemoryRepository {
    fn save(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .push(record);
        Ok(())
    }

    fn load_latest(
        &self,
        respondent_id: &RespondentId,
    ) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .find(|record| &record.respondent_id == respondent_id)
            .cloned())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn save(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn load_latest(
        &self,
        _respondent_id: &RespondentId,
    ) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
