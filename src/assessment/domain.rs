use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lowest and highest accepted Likert responses.
pub const LIKERT_MIN: i32 = 1;
pub const LIKERT_MAX: i32 = 5;

/// The six scoring dimensions. Declaration order breaks every ranking tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electric,
    Fiery,
    Aquatic,
    Earthly,
    Airy,
    Metallic,
}

impl Category {
    pub const COUNT: usize = 6;

    pub const fn ordered() -> [Self; 6] {
        [
            Self::Electric,
            Self::Fiery,
            Self::Aquatic,
            Self::Earthly,
            Self::Airy,
            Self::Metallic,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Electric => "Electric",
            Self::Fiery => "Fiery",
            Self::Aquatic => "Aquatic",
            Self::Earthly => "Earthly",
            Self::Airy => "Airy",
            Self::Metallic => "Metallic",
        }
    }

    /// The paired category this one suppresses when it runs hot.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Electric => Self::Earthly,
            Self::Earthly => Self::Electric,
            Self::Fiery => Self::Aquatic,
            Self::Aquatic => Self::Fiery,
            Self::Airy => Self::Metallic,
            Self::Metallic => Self::Airy,
        }
    }

    pub const fn style_affinity(self) -> DominantStyle {
        match self {
            Self::Electric | Self::Fiery => DominantStyle::Dynamic,
            Self::Aquatic | Self::Airy => DominantStyle::Intuitive,
            Self::Earthly | Self::Metallic => DominantStyle::Grounded,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Facet a question probes. Used for bank curation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Motivation,
    Energy,
    Social,
    Cognitive,
    Values,
    Behavior,
    ShadowValidation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub category: Category,
    pub reversed: bool,
    pub dimension: Dimension,
}

/// Raw questionnaire responses keyed by question id.
///
/// Values outside the Likert range are retained so they can be reported back,
/// but [`AnswerSet::likert`] hides them from every scoring computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    responses: BTreeMap<u32, i32>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: u32, value: i32) -> Option<i32> {
        self.responses.insert(question_id, value)
    }

    pub fn with(mut self, question_id: u32, value: i32) -> Self {
        self.insert(question_id, value);
        self
    }

    /// The stored response, whether or not it is in range.
    pub fn raw(&self, question_id: u32) -> Option<i32> {
        self.responses.get(&question_id).copied()
    }

    /// The stored response only when it is a valid Likert value.
    pub fn likert(&self, question_id: u32) -> Option<i32> {
        self.raw(question_id).filter(|value| is_likert(*value))
    }

    /// All in-range responses in question id order.
    pub fn collected(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.responses
            .iter()
            .map(|(id, value)| (*id, *value))
            .filter(|(_, value)| is_likert(*value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.responses.iter().map(|(id, value)| (*id, *value))
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl FromIterator<(u32, i32)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (u32, i32)>>(iter: T) -> Self {
        Self {
            responses: iter.into_iter().collect(),
        }
    }
}

pub const fn is_likert(value: i32) -> bool {
    value >= LIKERT_MIN && value <= LIKERT_MAX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Broad disposition derived from the top three categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantStyle {
    Dynamic,
    Intuitive,
    Grounded,
}

impl DominantStyle {
    pub const fn ordered() -> [Self; 3] {
        [Self::Dynamic, Self::Intuitive, Self::Grounded]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dynamic => "Dynamic",
            Self::Intuitive => "Intuitive",
            Self::Grounded => "Grounded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyStyle {
    HighStimulation,
    LowStimulation,
    Variable,
    Moderate,
}

impl EnergyStyle {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighStimulation => "High Stimulation",
            Self::LowStimulation => "Low Stimulation",
            Self::Variable => "Variable",
            Self::Moderate => "Moderate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipOrientation {
    Nurturing,
    Expressive,
    Independent,
    Balanced,
}

impl RelationshipOrientation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nurturing => "Nurturing",
            Self::Expressive => "Expressive",
            Self::Independent => "Independent",
            Self::Balanced => "Balanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStyle {
    Structured,
    Innovative,
    Steady,
    Adaptive,
}

impl WorkStyle {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Structured => "Structured",
            Self::Innovative => "Innovative",
            Self::Steady => "Steady",
            Self::Adaptive => "Adaptive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BurnoutRisk {
    Low,
    Moderate,
    High,
}

impl BurnoutRisk {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}
