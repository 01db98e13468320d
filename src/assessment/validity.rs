use super::domain::{is_likert, AnswerSet, LIKERT_MAX, LIKERT_MIN};
use super::questions::{is_main_id, QuestionBank, MAIN_QUESTION_COUNT};
use super::scoring::{raw_scores, MAX_CATEGORY_RAW};
use serde::{Deserialize, Serialize};

const STRAIGHT_LINING_WARNING: f64 = 0.6;
const EXTREME_BIAS_WARNING: f64 = 0.8;
const CONSISTENCY_WARNING: f64 = 0.5;
const SOCIAL_DESIRABILITY_WARNING: f64 = 0.5;
const COMPLETION_FLOOR: f64 = 0.8;
const STRAIGHT_LINING_CEILING: f64 = 0.7;
const CONSISTENCY_FLOOR: f64 = 0.3;
/// Validation answers further than this from their category ratio are inconsistent.
const CONSISTENCY_TOLERANCE: f64 = 0.4;

/// Response-quality diagnostics for a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidityIndicators {
    pub is_valid: bool,
    pub completion_rate: f64,
    pub response_consistency: f64,
    pub straight_lining_score: f64,
    pub extreme_response_bias: f64,
    pub social_desirability_index: f64,
    pub warnings: Vec<String>,
}

/// Ids a caller should resolve before accepting a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReview {
    pub missing_questions: Vec<u32>,
    pub out_of_range: Vec<u32>,
}

impl SubmissionReview {
    pub fn is_complete(&self) -> bool {
        self.missing_questions.is_empty() && self.out_of_range.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.missing_questions.is_empty() {
            parts.push(format!(
                "{} unanswered question(s): {}",
                self.missing_questions.len(),
                join_ids(&self.missing_questions)
            ));
        }
        if !self.out_of_range.is_empty() {
            parts.push(format!(
                "answers outside {LIKERT_MIN}-{LIKERT_MAX} for question(s): {}",
                join_ids(&self.out_of_range)
            ));
        }
        if parts.is_empty() {
            "submission complete".to_string()
        } else {
            parts.join("; ")
        }
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lists unanswered main questions and any response outside the Likert range.
pub fn review_submission(bank: &QuestionBank, answers: &AnswerSet) -> SubmissionReview {
    let missing_questions = bank
        .main_ids()
        .filter(|id| answers.raw(*id).is_none())
        .collect();
    let out_of_range = answers
        .iter()
        .filter(|(_, value)| !is_likert(*value))
        .map(|(id, _)| id)
        .collect();

    SubmissionReview {
        missing_questions,
        out_of_range,
    }
}

pub fn analyze(bank: &QuestionBank, answers: &AnswerSet) -> ValidityIndicators {
    let collected: Vec<i32> = answers.collected().map(|(_, value)| value).collect();
    let total = collected.len() as f64;

    let answered_main = answers
        .collected()
        .filter(|(id, _)| is_main_id(*id))
        .count();
    let completion_rate = answered_main as f64 / MAIN_QUESTION_COUNT as f64;

    let straight_lining_score = ratio(most_common_count(&collected), total);
    let extreme_count = collected
        .iter()
        .filter(|value| **value == LIKERT_MIN || **value == LIKERT_MAX)
        .count();
    let extreme_response_bias = ratio(extreme_count, total);
    let response_consistency = cross_consistency(bank, answers);
    let social_desirability_index = if collected.is_empty() {
        0.0
    } else {
        let mean = collected.iter().map(|value| *value as f64).sum::<f64>() / total;
        ((mean - 3.0) / 2.0).max(0.0)
    };

    let mut warnings = Vec::new();
    if completion_rate <= COMPLETION_FLOOR {
        warnings.push(format!(
            "Only {:.0}% of the main questions were answered",
            completion_rate * 100.0
        ));
    }
    if straight_lining_score > STRAIGHT_LINING_WARNING {
        warnings.push(
            "Many answers share the same value; responses may be straight-lined".to_string(),
        );
    }
    if extreme_response_bias > EXTREME_BIAS_WARNING {
        warnings.push("Responses lean heavily on the extreme ends of the scale".to_string());
    }
    if response_consistency < CONSISTENCY_WARNING {
        warnings.push(
            "Validation answers contradict the main responses for several categories".to_string(),
        );
    }
    if social_desirability_index > SOCIAL_DESIRABILITY_WARNING {
        warnings.push(
            "Answers skew strongly positive; results may reflect an idealized self-image"
                .to_string(),
        );
    }

    ValidityIndicators {
        is_valid: completion_rate > COMPLETION_FLOOR
            && straight_lining_score < STRAIGHT_LINING_CEILING
            && response_consistency > CONSISTENCY_FLOOR,
        completion_rate,
        response_consistency,
        straight_lining_score,
        extreme_response_bias,
        social_desirability_index,
        warnings,
    }
}

fn ratio(count: usize, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        count as f64 / total
    }
}

fn most_common_count(values: &[i32]) -> usize {
    (LIKERT_MIN..=LIKERT_MAX)
        .map(|candidate| values.iter().filter(|value| **value == candidate).count())
        .max()
        .unwrap_or(0)
}

/// Share of validation answers that agree with their category's main score.
fn cross_consistency(bank: &QuestionBank, answers: &AnswerSet) -> f64 {
    let raw = raw_scores(bank, answers);
    let mut checked = 0usize;
    let mut consistent = 0usize;

    for question in bank.validation_questions() {
        let Some(answer) = answers.likert(question.id) else {
            continue;
        };
        checked += 1;

        let category_ratio =
            raw.get(&question.category).copied().unwrap_or(0) as f64 / MAX_CATEGORY_RAW as f64;
        let validation_ratio = (6 - answer) as f64 / LIKERT_MAX as f64;
        if (category_ratio - validation_ratio).abs() < CONSISTENCY_TOLERANCE {
            consistent += 1;
        }
    }

    if checked == 0 {
        1.0
    } else {
        consistent as f64 / checked as f64
    }
}
