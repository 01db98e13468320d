use super::domain::{AnswerSet, Category, Confidence};
use super::questions::{QuestionBank, QUESTIONS_PER_CATEGORY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Highest raw total a category can reach (six questions at five points).
pub const MAX_CATEGORY_RAW: u32 = (QUESTIONS_PER_CATEGORY as u32) * 5;

/// Largest population variance attainable on a 1..=5 scale.
const MAX_LIKERT_VARIANCE: f64 = 4.0;

/// Per-category scores, iterated in category declaration order.
pub type CategoryScores = BTreeMap<Category, CategoryScore>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub raw: u32,
    pub percentage: u32,
    pub confidence: Confidence,
    pub consistency: f64,
}

/// Applies reverse-scoring for a single response.
///
/// Ids missing from the bank pass the raw answer through unchanged.
pub fn adjusted_score(bank: &QuestionBank, question_id: u32, raw_answer: i32) -> i32 {
    match bank.question(question_id) {
        Some(question) if question.reversed => 6 - raw_answer,
        _ => raw_answer,
    }
}

/// Sums adjusted main-question answers per category. Validation ids never count.
pub fn raw_scores(bank: &QuestionBank, answers: &AnswerSet) -> BTreeMap<Category, u32> {
    let mut totals: BTreeMap<Category, u32> = Category::ordered()
        .into_iter()
        .map(|category| (category, 0))
        .collect();

    for question in bank.all_questions(false) {
        if let Some(answer) = answers.likert(question.id) {
            let adjusted = adjusted_score(bank, question.id, answer).max(0) as u32;
            *totals.entry(question.category).or_default() += adjusted;
        }
    }

    totals
}

pub fn category_scores(bank: &QuestionBank, answers: &AnswerSet) -> CategoryScores {
    let raw = raw_scores(bank, answers);

    Category::ordered()
        .into_iter()
        .map(|category| {
            let raw_total = raw.get(&category).copied().unwrap_or(0);
            let responses: Vec<i32> = bank
                .questions_for_category(category)
                .into_iter()
                .filter_map(|question| answers.likert(question.id))
                .collect();

            (category, score_category(raw_total, &responses))
        })
        .collect()
}

pub(crate) fn percentage_of(raw: u32) -> u32 {
    ((raw as f64 / MAX_CATEGORY_RAW as f64) * 100.0).round() as u32
}

fn score_category(raw: u32, responses: &[i32]) -> CategoryScore {
    let percentage = percentage_of(raw);
    let consistency = consistency_of(responses);

    CategoryScore {
        raw,
        percentage,
        confidence: confidence_for(consistency, percentage),
        consistency,
    }
}

/// `1 - variance / 4`, floored at zero. Fewer than two responses cannot disagree.
fn consistency_of(responses: &[i32]) -> f64 {
    if responses.len() < 2 {
        return 1.0;
    }

    let count = responses.len() as f64;
    let mean = responses.iter().map(|value| *value as f64).sum::<f64>() / count;
    let variance = responses
        .iter()
        .map(|value| (*value as f64 - mean).powi(2))
        .sum::<f64>()
        / count;

    (1.0 - variance / MAX_LIKERT_VARIANCE).max(0.0)
}

fn confidence_for(consistency: f64, percentage: u32) -> Confidence {
    if consistency > 0.7 && (percentage > 70 || percentage < 30) {
        Confidence::High
    } else if consistency > 0.5 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistency_defaults_to_one_for_sparse_categories() {
        assert_eq!(consistency_of(&[]), 1.0);
        assert_eq!(consistency_of(&[4]), 1.0);
    }

    #[test]
    fn consistency_falls_with_spread() {
        assert_eq!(consistency_of(&[3, 3, 3, 3, 3, 3]), 1.0);
        // Population variance of alternating 1/5 is 4, the scale maximum.
        assert_eq!(consistency_of(&[1, 5, 1, 5, 1, 5]), 0.0);
        let moderate = consistency_of(&[2, 4, 2, 4, 2, 4]);
        assert!((moderate - 0.75).abs() < 1e-9);
    }

    #[test]
    fn confidence_requires_consistent_and_decisive_scores() {
        assert_eq!(confidence_for(0.9, 80), Confidence::High);
        assert_eq!(confidence_for(0.9, 20), Confidence::High);
        assert_eq!(confidence_for(0.9, 50), Confidence::Medium);
        assert_eq!(confidence_for(0.7, 90), Confidence::Medium);
        assert_eq!(confidence_for(0.5, 90), Confidence::Low);
    }

    #[test]
    fn percentage_rounds_to_nearest_point() {
        assert_eq!(percentage_of(0), 0);
        assert_eq!(percentage_of(1), 3);
        assert_eq!(percentage_of(18), 60);
        assert_eq!(percentage_of(29), 97);
        assert_eq!(percentage_of(30), 100);
    }
}
