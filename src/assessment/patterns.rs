use super::domain::{Category, DominantStyle, EnergyStyle, RelationshipOrientation, WorkStyle};
use super::scoring::CategoryScores;
use serde::{Deserialize, Serialize};

/// Interpretive classifications derived from the category percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patterns {
    pub blend_type: String,
    pub energy_style: EnergyStyle,
    pub relationship_orientation: RelationshipOrientation,
    pub work_style: WorkStyle,
}

/// Threshold a category must exceed to drive a relationship or work rule.
const RULE_THRESHOLD: u32 = 60;
/// Rank weights for the top three categories when picking the dominant style.
const STYLE_WEIGHTS: [u32; 3] = [3, 2, 1];

const HIGH_STIMULATION: [Category; 2] = [Category::Electric, Category::Fiery];
const LOW_STIMULATION: [Category; 2] = [Category::Aquatic, Category::Earthly];

/// A classification rule: the outcome applies when the category exceeds the threshold.
struct Rule<T> {
    category: Category,
    outcome: T,
}

const fn rule<T>(category: Category, outcome: T) -> Rule<T> {
    Rule { category, outcome }
}

impl<T: Copy> Rule<T> {
    fn evaluate(&self, scores: &CategoryScores) -> Option<T> {
        (percentage(scores, self.category) > RULE_THRESHOLD).then_some(self.outcome)
    }
}

// First matching rule wins; order is part of the contract.
const RELATIONSHIP_RULES: [Rule<RelationshipOrientation>; 3] = [
    rule(Category::Aquatic, RelationshipOrientation::Nurturing),
    rule(Category::Fiery, RelationshipOrientation::Expressive),
    rule(Category::Airy, RelationshipOrientation::Independent),
];

const WORK_RULES: [Rule<WorkStyle>; 3] = [
    rule(Category::Metallic, WorkStyle::Structured),
    rule(Category::Electric, WorkStyle::Innovative),
    rule(Category::Earthly, WorkStyle::Steady),
];

static BLENDS: [(Category, Category, &str); 15] = [
    (Category::Electric, Category::Fiery, "Wildfire Spark"),
    (Category::Electric, Category::Aquatic, "Storm Current"),
    (Category::Electric, Category::Earthly, "Grounded Lightning"),
    (Category::Electric, Category::Airy, "Thunderhead"),
    (Category::Electric, Category::Metallic, "Live Wire"),
    (Category::Fiery, Category::Aquatic, "Steam Engine"),
    (Category::Fiery, Category::Earthly, "Volcanic Core"),
    (Category::Fiery, Category::Airy, "Firestorm"),
    (Category::Fiery, Category::Metallic, "Forged Blade"),
    (Category::Aquatic, Category::Earthly, "Riverbed"),
    (Category::Aquatic, Category::Airy, "Sea Mist"),
    (Category::Aquatic, Category::Metallic, "Quicksilver"),
    (Category::Earthly, Category::Airy, "Mountain Wind"),
    (Category::Earthly, Category::Metallic, "Bedrock Ore"),
    (Category::Airy, Category::Metallic, "Wind Chime"),
];

pub(crate) fn percentage(scores: &CategoryScores, category: Category) -> u32 {
    scores
        .get(&category)
        .map(|score| score.percentage)
        .unwrap_or(0)
}

/// Categories ranked by descending percentage. Equal percentages keep declaration order.
pub fn top_categories(scores: &CategoryScores, n: usize) -> Vec<Category> {
    let mut ranked = Category::ordered().to_vec();
    // `sort_by` is stable, so ties stay in declaration order.
    ranked.sort_by(|a, b| percentage(scores, *b).cmp(&percentage(scores, *a)));
    ranked.truncate(n);
    ranked
}

pub fn dominant_style(top_categories: &[Category]) -> DominantStyle {
    let mut totals = [0u32; 3];
    for (category, weight) in top_categories.iter().zip(STYLE_WEIGHTS) {
        let slot = DominantStyle::ordered()
            .iter()
            .position(|style| *style == category.style_affinity())
            .unwrap_or(0);
        totals[slot] += weight;
    }

    let mut best = DominantStyle::ordered()[0];
    let mut best_total = totals[0];
    for (style, total) in DominantStyle::ordered().into_iter().zip(totals).skip(1) {
        if total > best_total {
            best = style;
            best_total = total;
        }
    }
    best
}

/// Named label for an unordered pair of categories.
pub fn blend_type(first: Category, second: Category) -> String {
    lookup_blend(first, second)
        .map(str::to_string)
        .unwrap_or_else(|| fallback_blend(first, second))
}

pub(crate) fn lookup_blend(first: Category, second: Category) -> Option<&'static str> {
    BLENDS
        .iter()
        .find(|(a, b, _)| (*a == first && *b == second) || (*a == second && *b == first))
        .map(|(_, _, label)| *label)
}

pub(crate) fn fallback_blend(first: Category, second: Category) -> String {
    format!("{}-{} Blend", first.label(), second.label())
}

pub fn energy_style(scores: &CategoryScores) -> EnergyStyle {
    let high: i64 = HIGH_STIMULATION
        .iter()
        .map(|category| percentage(scores, *category) as i64)
        .sum();
    let low: i64 = LOW_STIMULATION
        .iter()
        .map(|category| percentage(scores, *category) as i64)
        .sum();

    if high - low > 40 {
        EnergyStyle::HighStimulation
    } else if low - high > 40 {
        EnergyStyle::LowStimulation
    } else if (high - low).abs() < 20 {
        EnergyStyle::Variable
    } else {
        EnergyStyle::Moderate
    }
}

pub fn relationship_orientation(scores: &CategoryScores) -> RelationshipOrientation {
    first_match(&RELATIONSHIP_RULES, scores).unwrap_or(RelationshipOrientation::Balanced)
}

pub fn work_style(scores: &CategoryScores) -> WorkStyle {
    first_match(&WORK_RULES, scores).unwrap_or(WorkStyle::Adaptive)
}

fn first_match<T: Copy>(rules: &[Rule<T>], scores: &CategoryScores) -> Option<T> {
    rules.iter().find_map(|rule| rule.evaluate(scores))
}

/// Builds every pattern classification. An empty ranking falls back to the first two
/// declared categories for the blend.
pub fn analyze(scores: &CategoryScores, top_categories: &[Category]) -> Patterns {
    let ordered = Category::ordered();
    let first = top_categories.first().copied().unwrap_or(ordered[0]);
    let second = top_categories.get(1).copied().unwrap_or(ordered[1]);

    Patterns {
        blend_type: blend_type(first, second),
        energy_style: energy_style(scores),
        relationship_orientation: relationship_orientation(scores),
        work_style: work_style(scores),
    }
}
