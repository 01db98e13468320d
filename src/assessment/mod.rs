//! Questionnaire scoring, response-quality analysis, and profile interpretation.
//!
//! Every analyzer is a pure function of an [`AnswerSet`] and the shared
//! [`QuestionBank`]; the service and router layers add storage and HTTP on top.

pub mod domain;
pub mod import;
pub mod interpretation;
mod narrative;
pub mod patterns;
pub mod questions;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod shadow;
pub mod validity;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerSet, BurnoutRisk, Category, Confidence, Dimension, DominantStyle, EnergyStyle, Question,
    RelationshipOrientation, WorkStyle,
};
pub use import::{AnswerSheetImportError, AnswerSheetImporter, AnswerSheetRow};
pub use interpretation::{interpret, AssessmentEngine, AssessmentResult, Interpretation};
pub use patterns::Patterns;
pub use questions::{BankIntegrityError, QuestionBank};
pub use repository::{AssessmentRecord, AssessmentRepository, RepositoryError, RespondentId};
pub use router::{assessment_router, AssessmentView, SubmissionRequest};
pub use scoring::{CategoryScore, CategoryScores};
pub use service::{AssessmentService, AssessmentServiceError};
pub use shadow::ShadowIndicators;
pub use validity::{SubmissionReview, ValidityIndicators};
