use super::domain::{BurnoutRisk, Category};
use super::patterns::percentage;
use super::scoring::CategoryScores;
use serde::{Deserialize, Serialize};

const SHADOW_CEILING: u32 = 30;
const OPPOSITE_FLOOR: u32 = 70;
const SHADOW_CANDIDATES: usize = 3;
const GROWTH_AREA_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowIndicators {
    pub potential_shadows: Vec<Category>,
    pub growth_areas: Vec<Category>,
    pub burnout_risk: BurnoutRisk,
}

/// Categories ranked by ascending percentage; ties keep declaration order.
fn lowest_first(scores: &CategoryScores) -> Vec<Category> {
    let mut ranked = Category::ordered().to_vec();
    ranked.sort_by_key(|category| percentage(scores, *category));
    ranked
}

pub fn growth_areas(scores: &CategoryScores) -> Vec<Category> {
    let mut ranked = lowest_first(scores);
    ranked.truncate(GROWTH_AREA_COUNT);
    ranked
}

/// Low categories whose opposite dominates the profile.
pub fn potential_shadows(scores: &CategoryScores) -> Vec<Category> {
    lowest_first(scores)
        .into_iter()
        .take(SHADOW_CANDIDATES)
        .filter(|category| {
            percentage(scores, *category) < SHADOW_CEILING
                && percentage(scores, category.opposite()) > OPPOSITE_FLOOR
        })
        .collect()
}

pub fn burnout_risk(scores: &CategoryScores) -> BurnoutRisk {
    let percentages = Category::ordered().map(|category| percentage(scores, category));
    let highest = percentages.iter().copied().max().unwrap_or(0);
    let lowest = percentages.iter().copied().min().unwrap_or(0);

    match highest - lowest {
        spread if spread > 60 => BurnoutRisk::High,
        spread if spread > 40 => BurnoutRisk::Moderate,
        _ => BurnoutRisk::Low,
    }
}

pub fn analyze(scores: &CategoryScores) -> ShadowIndicators {
    ShadowIndicators {
        potential_shadows: potential_shadows(scores),
        growth_areas: growth_areas(scores),
        burnout_risk: burnout_risk(scores),
    }
}
