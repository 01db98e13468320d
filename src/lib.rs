//! Scoring and interpretation engine for the six-element energy profile questionnaire.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
