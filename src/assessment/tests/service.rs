use super::common::*;
use crate::assessment::domain::AnswerSet;
use crate::assessment::repository::{AssessmentRepository, RepositoryError};
use crate::assessment::service::{AssessmentService, AssessmentServiceError};
use crate::config::AssessmentConfig;
use std::sync::Arc;

fn first_half() -> AnswerSet {
    (1..=18).map(|id| (id, 4)).collect()
}

#[test]
fn submit_scores_and_stores_the_record() {
    let (service, repository) = build_service(AssessmentConfig::default());

    let record = service
        .submit(respondent("ava"), &uniform_answers(4))
        .expect("submission succeeds");

    assert_eq!(record.respondent_id, respondent("ava"));
    assert_eq!(repository.len(), 1);
    let stored = repository
        .load_latest(&respondent("ava"))
        .expect("load succeeds")
        .expect("record stored");
    assert_eq!(stored, record);
}

#[test]
fn stored_record_summarizes_the_outcome() {
    let (service, _) = build_service(AssessmentConfig::default());

    let record = service
        .submit(respondent("ivy"), &uniform_answers(3))
        .expect("submission succeeds");

    let summary = record.summary();
    assert!(summary.starts_with("ivy assessed "));
    assert!(summary.ends_with("Wildfire Spark (Electric), flagged"));
}

#[test]
fn strict_service_rejects_incomplete_submissions() {
    let (service, repository) = build_service(strict_config());

    match service.submit(respondent("ben"), &first_half()) {
        Err(AssessmentServiceError::IncompleteSubmission(review)) => {
            assert_eq!(review.missing_questions, (19..=36).collect::<Vec<u32>>());
        }
        other => panic!("expected incomplete submission, got {other:?}"),
    }
    assert_eq!(repository.len(), 0);
}

#[test]
fn strict_service_rejects_out_of_range_answers() {
    let (service, _) = build_service(strict_config());

    let err = service
        .submit(respondent("cal"), &uniform_answers(3).with(12, 6))
        .expect_err("out of range answer rejected");
    assert!(err.to_string().contains("12"));
}

#[test]
fn lenient_service_scores_incomplete_submissions() {
    let (service, repository) = build_service(AssessmentConfig::default());

    let record = service
        .submit(respondent("dee"), &first_half())
        .expect("lenient submission succeeds");

    assert_eq!(record.result.validity.completion_rate, 0.5);
    assert!(!record.result.validity.is_valid);
    assert_eq!(record.result.submission.missing_questions.len(), 18);
    assert_eq!(repository.len(), 1);
}

#[test]
fn latest_returns_the_most_recent_record() {
    let (service, _) = build_service(AssessmentConfig::default());

    service
        .submit(respondent("eve"), &uniform_answers(2))
        .expect("first submission");
    let second = service
        .submit(respondent("eve"), &uniform_answers(5))
        .expect("second submission");
    service
        .submit(respondent("fin"), &uniform_answers(3))
        .expect("other respondent");

    let latest = service.latest(&respondent("eve")).expect("latest found");
    assert_eq!(latest, second);
}

#[test]
fn latest_reports_unknown_respondents() {
    let (service, _) = build_service(AssessmentConfig::default());

    match service.latest(&respondent("nobody")) {
        Err(AssessmentServiceError::NotFound(id)) => assert_eq!(id, respondent("nobody")),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn repository_failures_propagate() {
    let service = AssessmentService::new(
        Arc::new(UnavailableRepository),
        AssessmentConfig::default(),
    );

    match service.submit(respondent("gus"), &uniform_answers(3)) {
        Err(AssessmentServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "database offline");
        }
        other => panic!("expected repository failure, got {other:?}"),
    }
}
