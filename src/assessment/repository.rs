use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::interpretation::AssessmentResult;

/// Identifier of the person who completed the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RespondentId(pub String);

impl fmt::Display for RespondentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored outcome of one completed assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub respondent_id: RespondentId,
    pub assessed_at: DateTime<Utc>,
    pub result: AssessmentResult,
}

impl AssessmentRecord {
    pub fn summary(&self) -> String {
        let primary = self
            .result
            .primary_category()
            .map(|category| category.label())
            .unwrap_or("unscored");
        let reliability = if self.result.validity.is_valid {
            "valid"
        } else {
            "flagged"
        };
        format!(
            "{} assessed {}: {} ({}), {}",
            self.respondent_id,
            self.assessed_at.format("%Y-%m-%d %H:%M UTC"),
            self.result.patterns.blend_type,
            primary,
            reliability
        )
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait AssessmentRepository: Send + Sync {
    fn save(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    fn load_latest(
        &self,
        respondent_id: &RespondentId,
    ) -> Result<Option<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
