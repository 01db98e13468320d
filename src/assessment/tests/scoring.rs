use super::common::*;
use crate::assessment::domain::{AnswerSet, Category, Confidence};
use crate::assessment::scoring::{adjusted_score, category_scores, raw_scores};

#[test]
fn all_fives_saturate_every_category() {
    let scores = category_scores(bank(), &uniform_answers(5));

    for category in Category::ordered() {
        let score = scores[&category];
        assert_eq!(score.raw, 30, "{category}");
        assert_eq!(score.percentage, 100, "{category}");
        assert_eq!(score.consistency, 1.0);
        assert_eq!(score.confidence, Confidence::High);
    }
}

#[test]
fn all_ones_produce_the_scale_floor() {
    let scores = category_scores(bank(), &uniform_answers(1));

    for category in Category::ordered() {
        let score = scores[&category];
        assert_eq!(score.raw, 6);
        assert_eq!(score.percentage, 20);
        assert_eq!(score.confidence, Confidence::High);
    }
}

#[test]
fn unanswered_categories_score_zero() {
    let scores = category_scores(bank(), &AnswerSet::new());

    for category in Category::ordered() {
        let score = scores[&category];
        assert_eq!(score.raw, 0);
        assert_eq!(score.percentage, 0);
        assert_eq!(score.consistency, 1.0);
    }
}

#[test]
fn reverse_scored_questions_are_symmetric() {
    for question in bank().validation_questions() {
        for value in 1..=5 {
            let total = adjusted_score(bank(), question.id, value)
                + adjusted_score(bank(), question.id, 6 - value);
            assert_eq!(total, 6, "question {} value {value}", question.id);
        }
        assert_eq!(adjusted_score(bank(), question.id, 2), 4);
    }
}

#[test]
fn forward_and_unknown_questions_pass_answers_through() {
    assert_eq!(adjusted_score(bank(), 1, 4), 4);
    assert_eq!(adjusted_score(bank(), 36, 2), 2);
    assert_eq!(adjusted_score(bank(), 999, 4), 4);
    assert_eq!(adjusted_score(bank(), 0, 9), 9);
}

#[test]
fn validation_answers_never_reach_raw_totals() {
    let mut answers = uniform_answers(3);
    for id in 101..=106 {
        answers.insert(id, 1);
    }

    let raw = raw_scores(bank(), &answers);
    for category in Category::ordered() {
        assert_eq!(raw[&category], 18);
    }
}

#[test]
fn missing_answers_contribute_nothing() {
    let answers: AnswerSet = (1..=18).map(|id| (id, 5)).collect();

    let scores = category_scores(bank(), &answers);
    for category in Category::ordered() {
        assert_eq!(scores[&category].raw, 15);
        assert_eq!(scores[&category].percentage, 50);
    }
}

#[test]
fn out_of_range_answers_are_ignored() {
    let answers = uniform_answers(3).with(1, 9).with(2, 0);

    let scores = category_scores(bank(), &answers);
    assert_eq!(scores[&Category::Electric].raw, 15);
    assert_eq!(scores[&Category::Fiery].raw, 15);
    assert_eq!(scores[&Category::Aquatic].raw, 18);
}

#[test]
fn mixed_category_answers_lower_consistency() {
    // Electric questions are 1, 7, 13, 19, 25, 31.
    let answers = uniform_answers(3)
        .with(1, 1)
        .with(7, 5)
        .with(13, 1)
        .with(19, 5)
        .with(25, 1)
        .with(31, 5);

    let electric = category_scores(bank(), &answers)[&Category::Electric];
    assert_eq!(electric.raw, 18);
    assert_eq!(electric.percentage, 60);
    assert_eq!(electric.consistency, 0.0);
    assert_eq!(electric.confidence, Confidence::Low);
}

#[test]
fn scores_stay_in_bounds_and_are_deterministic() {
    for seed in 0..25u32 {
        let answers: AnswerSet = (1..=36u32)
            .chain(101..=106)
            .map(|id| (id, ((id * 7 + seed * 3) % 5 + 1) as i32))
            .collect();

        let first = category_scores(bank(), &answers);
        let second = category_scores(bank(), &answers);
        assert_eq!(first, second);

        for score in first.values() {
            assert!(score.raw <= 30);
            assert!(score.percentage <= 100);
            assert!((0.0..=1.0).contains(&score.consistency));
        }
    }
}
