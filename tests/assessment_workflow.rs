use axum::http::StatusCode;
use axum::response::IntoResponse;
use energy_profile::assessment::{
    assessment_router, interpret, AnswerSet, AssessmentEngine, AssessmentRecord,
    AssessmentRepository, AssessmentService, AssessmentServiceError, BurnoutRisk, Category,
    QuestionBank, RepositoryError, RespondentId,
};
use energy_profile::config::AssessmentConfig;
use energy_profile::error::AppError;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct VecRepository {
    records: Mutex<Vec<AssessmentRecord>>,
}

impl AssessmentRepository for VecRepository {
    fn save(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        self.records.lock().expect("repository mutex").push(record);
        Ok(())
    }

    fn load_latest(
        &self,
        respondent_id: &RespondentId,
    ) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .expect("repository mutex")
            .iter()
            .rev()
            .find(|record| &record.respondent_id == respondent_id)
            .cloned())
    }
}

fn focused_answers() -> AnswerSet {
    // Aquatic and Airy high, Metallic lowest.
    (1..=36u32)
        .map(|id| {
            let value = match Category::ordered()[((id - 1) % 6) as usize] {
                Category::Aquatic | Category::Airy => 5,
                Category::Electric | Category::Earthly => 3,
                Category::Fiery => 2,
                Category::Metallic => 1,
            };
            (id, value)
        })
        .collect()
}

#[test]
fn standard_bank_passes_integrity_checks() {
    let bank = QuestionBank::load().expect("bank is consistent");
    assert_eq!(bank.all_questions(false).len(), 36);
    assert_eq!(bank.all_questions(true).len(), 42);
    for category in Category::ordered() {
        assert_eq!(bank.questions_for_category(category).len(), 6);
    }
}

#[test]
fn end_to_end_assessment_and_interpretation() {
    let result = AssessmentEngine::default().assess(&focused_answers());

    assert_eq!(result.top_categories[..2], [Category::Aquatic, Category::Airy]);
    assert_eq!(result.patterns.blend_type, "Sea Mist");
    assert_eq!(
        result.shadow_indicators.growth_areas,
        vec![Category::Metallic, Category::Fiery]
    );
    assert_eq!(result.shadow_indicators.burnout_risk, BurnoutRisk::High);

    let interpretation = interpret(&result);
    assert!(interpretation.headline.starts_with("Intuitive Aquatic profile."));
    assert!(interpretation.blend_summary.starts_with("Sea Mist:"));
}

#[test]
fn service_stores_and_recalls_assessments() {
    let repository = Arc::new(VecRepository::default());
    let service = AssessmentService::new(repository.clone(), AssessmentConfig::default());
    let ava = RespondentId("ava".to_string());

    let stored = service
        .submit(ava.clone(), &focused_answers())
        .expect("submission stored");
    assert_eq!(service.latest(&ava).expect("latest"), stored);
    assert_eq!(repository.records.lock().expect("repository mutex").len(), 1);

    let json = serde_json::to_value(&stored).expect("record serializes");
    assert_eq!(json["respondent_id"], "ava");
    assert_eq!(json["result"]["patterns"]["blend_type"], "Sea Mist");
}

#[test]
fn strict_rejection_maps_to_unprocessable_entity() {
    let service = AssessmentService::new(
        Arc::new(VecRepository::default()),
        AssessmentConfig {
            require_complete: true,
            include_interpretation: false,
        },
    );
    let partial: AnswerSet = (1..=30u32).map(|id| (id, 3)).collect();

    let err = service
        .submit(RespondentId("ben".to_string()), &partial)
        .unwrap_err();
    assert!(matches!(err, AssessmentServiceError::IncompleteSubmission(_)));

    let response = AppError::from(err).into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn router_builds_for_custom_repositories() {
    let service = Arc::new(AssessmentService::new(
        Arc::new(VecRepository::default()),
        AssessmentConfig::default(),
    ));
    let _router = assessment_router(service);
}
