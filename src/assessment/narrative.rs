//! Static narrative copy keyed by category and classification.

use super::domain::{
    BurnoutRisk, Category, DominantStyle, EnergyStyle, RelationshipOrientation, WorkStyle,
};

pub(crate) struct CategoryCopy {
    pub essence: &'static str,
    pub strengths: [&'static str; 2],
    pub growth_tip: &'static str,
    pub shadow_note: &'static str,
}

pub(crate) const fn category_copy(category: Category) -> CategoryCopy {
    match category {
        Category::Electric => CategoryCopy {
            essence: "quick, inventive spark",
            strengths: [
                "Generates fresh ideas and momentum when a group stalls",
                "Adapts instantly to surprises and new information",
            ],
            growth_tip: "Practice finishing one small project before starting the next to build follow-through.",
            shadow_note: "Suppressed spontaneity can leave you stuck in routines that no longer serve you.",
        },
        Category::Fiery => CategoryCopy {
            essence: "driven, passionate intensity",
            strengths: [
                "Rallies people around a goal and pushes through resistance",
                "Makes decisive calls when others hesitate",
            ],
            growth_tip: "Name one thing you want badly this month and take a visible first step toward it.",
            shadow_note: "Muted drive may show up as quiet resentment when others set the direction.",
        },
        Category::Aquatic => CategoryCopy {
            essence: "deep emotional attunement",
            strengths: [
                "Reads the emotional temperature of a room accurately",
                "Builds trust and safety in close relationships",
            ],
            growth_tip: "Schedule a weekly check-in where you share how you feel, not just what you did.",
            shadow_note: "Pushing feelings aside can surface later as sudden overwhelm or detachment.",
        },
        Category::Earthly => CategoryCopy {
            essence: "steady, grounded reliability",
            strengths: [
                "Turns plans into consistent, dependable progress",
                "Provides stability others can lean on",
            ],
            growth_tip: "Anchor each day with one fixed routine, such as a regular wake time or evening walk.",
            shadow_note: "Neglecting rest and structure can let high energy burn through your reserves.",
        },
        Category::Airy => CategoryCopy {
            essence: "curious, free-ranging perspective",
            strengths: [
                "Connects ideas across fields and sees the big picture",
                "Brings lightness and openness to rigid situations",
            ],
            growth_tip: "Give yourself unstructured time each week to explore a topic purely out of curiosity.",
            shadow_note: "Holding too tightly to order can crowd out the perspective you need to adapt.",
        },
        Category::Metallic => CategoryCopy {
            essence: "precise, principled clarity",
            strengths: [
                "Sets clear standards and catches errors others miss",
                "Creates order and structure that make teams efficient",
            ],
            growth_tip: "Pick one recurring task and write down a simple checklist to bring more structure to it.",
            shadow_note: "Avoiding structure can make commitments slip and erode the trust others place in you.",
        },
    }
}

pub(crate) const fn style_headline(style: DominantStyle) -> &'static str {
    match style {
        DominantStyle::Dynamic => "You lead with action, energy, and momentum.",
        DominantStyle::Intuitive => "You lead with feeling, insight, and imagination.",
        DominantStyle::Grounded => "You lead with stability, structure, and follow-through.",
    }
}

pub(crate) const fn energy_summary(style: EnergyStyle) -> &'static str {
    match style {
        EnergyStyle::HighStimulation => {
            "You thrive on stimulation and variety; long quiet stretches can drain you faster than busy ones."
        }
        EnergyStyle::LowStimulation => {
            "You recharge through calm and consistency; constant stimulation wears you down."
        }
        EnergyStyle::Variable => {
            "Your energy needs shift with context, so you can move between bustle and calm."
        }
        EnergyStyle::Moderate => {
            "You prefer a moderate pace with some stimulation balanced by regular downtime."
        }
    }
}

pub(crate) const fn relationship_summary(orientation: RelationshipOrientation) -> &'static str {
    match orientation {
        RelationshipOrientation::Nurturing => {
            "In relationships you offer care and emotional presence, and you value deep mutual support."
        }
        RelationshipOrientation::Expressive => {
            "In relationships you bring warmth and passion, and you value honest, spirited connection."
        }
        RelationshipOrientation::Independent => {
            "In relationships you value space and shared ideas, and you connect best when both people stay free."
        }
        RelationshipOrientation::Balanced => {
            "In relationships you adapt to what each connection needs without one dominant pattern."
        }
    }
}

pub(crate) const fn work_summary(style: WorkStyle) -> &'static str {
    match style {
        WorkStyle::Structured => {
            "At work you excel with clear processes, defined standards, and measurable quality."
        }
        WorkStyle::Innovative => {
            "At work you excel at starting new initiatives and finding unconventional solutions."
        }
        WorkStyle::Steady => {
            "At work you excel at consistent delivery and long-term projects that reward patience."
        }
        WorkStyle::Adaptive => {
            "At work you shift approach to fit the task, moving between planning and improvising."
        }
    }
}

pub(crate) const fn burnout_guidance(risk: BurnoutRisk) -> &'static str {
    match risk {
        BurnoutRisk::Low => {
            "Your energies are fairly balanced; keep the habits that let you draw on several strengths."
        }
        BurnoutRisk::Moderate => {
            "You lean heavily on a few energies; build in recovery time for the ones you rarely use."
        }
        BurnoutRisk::High => {
            "Your profile is sharply imbalanced, which raises the risk of burnout; prioritize rest and support for your weakest areas."
        }
    }
}

pub(crate) const fn energy_recommendation(style: EnergyStyle) -> &'static str {
    match style {
        EnergyStyle::HighStimulation => {
            "Plan short, varied work sprints and protect at least one genuinely quiet hour each day."
        }
        EnergyStyle::LowStimulation => {
            "Batch social and high-noise commitments together so you keep long blocks of calm."
        }
        EnergyStyle::Variable => {
            "Track which settings energize you this week and schedule demanding tasks to match."
        }
        EnergyStyle::Moderate => {
            "Alternate focused sessions with brief breaks to keep a sustainable rhythm."
        }
    }
}

pub(crate) const fn relationship_recommendation(orientation: RelationshipOrientation) -> &'static str {
    match orientation {
        RelationshipOrientation::Nurturing => {
            "Let someone care for you this week; receiving support keeps your giving sustainable."
        }
        RelationshipOrientation::Expressive => {
            "Pause to ask questions before sharing your view in heated conversations."
        }
        RelationshipOrientation::Independent => {
            "Tell the people close to you when you need space so distance is not mistaken for disinterest."
        }
        RelationshipOrientation::Balanced => {
            "Notice which relationships energize you most and invest a little more in them."
        }
    }
}

pub(crate) const fn work_recommendation(style: WorkStyle) -> &'static str {
    match style {
        WorkStyle::Structured => {
            "Leave room in your plans for experiments that might not meet your usual standard."
        }
        WorkStyle::Innovative => {
            "Pair with a detail-oriented colleague to carry your best ideas through to delivery."
        }
        WorkStyle::Steady => {
            "Volunteer for one short, fast-moving project to stretch your comfort with change."
        }
        WorkStyle::Adaptive => {
            "Choose one long-term goal and review it weekly so flexibility does not scatter your effort."
        }
    }
}
