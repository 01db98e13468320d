use super::domain::{AnswerSet, Category, DominantStyle};
use super::narrative;
use super::patterns::{self, Patterns};
use super::questions::QuestionBank;
use super::scoring::{category_scores, CategoryScores};
use super::shadow::{self, ShadowIndicators};
use super::validity::{self, SubmissionReview, ValidityIndicators};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Complete scoring output for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub scores: CategoryScores,
    pub top_categories: Vec<Category>,
    pub dominant_style: DominantStyle,
    pub validity: ValidityIndicators,
    pub patterns: Patterns,
    pub shadow_indicators: ShadowIndicators,
    pub submission: SubmissionReview,
}

impl AssessmentResult {
    pub fn primary_category(&self) -> Option<Category> {
        self.top_categories.first().copied()
    }
}

/// Human-readable summaries and recommendations for a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub headline: String,
    pub blend_summary: String,
    pub energy_summary: String,
    pub relationship_summary: String,
    pub work_summary: String,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
    pub growth_recommendations: Vec<String>,
    pub shadow_notes: Vec<String>,
    pub burnout_guidance: String,
}

/// Stateless pipeline running every analyzer over a shared question bank.
#[derive(Debug, Clone, Copy)]
pub struct AssessmentEngine {
    bank: &'static QuestionBank,
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new(QuestionBank::global())
    }
}

impl AssessmentEngine {
    pub fn new(bank: &'static QuestionBank) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &'static QuestionBank {
        self.bank
    }

    pub fn review(&self, answers: &AnswerSet) -> SubmissionReview {
        validity::review_submission(self.bank, answers)
    }

    pub fn assess(&self, answers: &AnswerSet) -> AssessmentResult {
        let scores = category_scores(self.bank, answers);
        let top_categories = patterns::top_categories(&scores, Category::COUNT);
        let dominant_style = patterns::dominant_style(&top_categories);
        let validity = validity::analyze(self.bank, answers);
        let patterns = patterns::analyze(&scores, &top_categories);
        let shadow_indicators = shadow::analyze(&scores);
        let submission = self.review(answers);

        if validity.is_valid {
            debug!(
                answers = answers.len(),
                blend = %patterns.blend_type,
                "assessment scored"
            );
        } else {
            warn!(
                answers = answers.len(),
                completion = validity.completion_rate,
                straight_lining = validity.straight_lining_score,
                consistency = validity.response_consistency,
                "assessment scored with low validity"
            );
        }

        AssessmentResult {
            scores,
            top_categories,
            dominant_style,
            validity,
            patterns,
            shadow_indicators,
            submission,
        }
    }
}

/// Maps a result through the narrative copy tables.
pub fn interpret(result: &AssessmentResult) -> Interpretation {
    let headline = match result.primary_category() {
        Some(primary) => format!(
            "{} {} profile. {}",
            result.dominant_style.label(),
            primary.label(),
            narrative::style_headline(result.dominant_style)
        ),
        None => narrative::style_headline(result.dominant_style).to_string(),
    };

    let blend_summary = match (result.top_categories.first(), result.top_categories.get(1)) {
        (Some(first), Some(second)) => format!(
            "{}: your {} meets a {}.",
            result.patterns.blend_type,
            narrative::category_copy(*first).essence,
            narrative::category_copy(*second).essence
        ),
        _ => result.patterns.blend_type.clone(),
    };

    let strengths = result
        .top_categories
        .iter()
        .take(2)
        .flat_map(|category| narrative::category_copy(*category).strengths)
        .map(str::to_string)
        .collect();

    let growth_recommendations = result
        .shadow_indicators
        .growth_areas
        .iter()
        .map(|category| {
            format!(
                "{}: {}",
                category.label(),
                narrative::category_copy(*category).growth_tip
            )
        })
        .collect();

    let shadow_notes = result
        .shadow_indicators
        .potential_shadows
        .iter()
        .map(|category| {
            format!(
                "{} (opposite of {}): {}",
                category.label(),
                category.opposite().label(),
                narrative::category_copy(*category).shadow_note
            )
        })
        .collect();

    let mut recommendations = vec![
        narrative::energy_recommendation(result.patterns.energy_style).to_string(),
        narrative::relationship_recommendation(result.patterns.relationship_orientation)
            .to_string(),
        narrative::work_recommendation(result.patterns.work_style).to_string(),
    ];
    if !result.validity.is_valid {
        recommendations.insert(
            0,
            "Consider retaking the assessment; response-quality checks flagged this submission."
                .to_string(),
        );
    }

    Interpretation {
        headline,
        blend_summary,
        energy_summary: narrative::energy_summary(result.patterns.energy_style).to_string(),
        relationship_summary: narrative::relationship_summary(
            result.patterns.relationship_orientation,
        )
        .to_string(),
        work_summary: narrative::work_summary(result.patterns.work_style).to_string(),
        strengths,
        recommendations,
        growth_recommendations,
        shadow_notes,
        burnout_guidance: narrative::burnout_guidance(result.shadow_indicators.burnout_risk)
            .to_string(),
    }
}
