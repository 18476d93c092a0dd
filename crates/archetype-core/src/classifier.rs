//! Archetype classification.
//!
//! The decision logic is a priority-ordered rule list evaluated top to
//! bottom, first match wins. Two rules are deliberate carve-outs inside
//! broader industry groups (`wholesale-giant` before `industrial-regional`,
//! `information-scale` before `knowledge-regional`), so evaluation order is
//! part of the contract and must not be reordered.

use crate::normalize::normalize;
use crate::types::{
    AnswerSet, ArchetypeId, ClassificationInput, IndustryCategory, QuestionId, ResultTier,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single entry in the decision list.
struct Rule {
    name: &'static str,
    archetype: ArchetypeId,
    applies: fn(&ClassificationInput) -> bool,
}

fn is_consumer_services(input: &ClassificationInput) -> bool {
    matches!(
        input.industry,
        Some(
            IndustryCategory::AdministrativeAndWaste
                | IndustryCategory::RetailTrade
                | IndustryCategory::OtherServices
                | IndustryCategory::AccommodationAndFood
        )
    )
}

fn is_education_or_health(input: &ClassificationInput) -> bool {
    matches!(
        input.industry,
        Some(IndustryCategory::EducationalServices | IndustryCategory::HealthCareAndSocial)
    )
}

fn is_built_environment(input: &ClassificationInput) -> bool {
    matches!(
        input.industry,
        Some(IndustryCategory::Construction | IndustryCategory::RealEstate)
    )
}

fn is_industrial(input: &ClassificationInput) -> bool {
    matches!(
        input.industry,
        Some(
            IndustryCategory::Manufacturing
                | IndustryCategory::TransportationAndWarehousing
                | IndustryCategory::Utilities
                | IndustryCategory::WholesaleTrade
        )
    )
}

fn is_knowledge(input: &ClassificationInput) -> bool {
    matches!(
        input.industry,
        Some(IndustryCategory::ProfessionalScientificTechnical | IndustryCategory::Information)
    )
}

static RULES: &[Rule] = &[
    Rule {
        name: "consumer-services-regional",
        archetype: ArchetypeId::C2,
        applies: |i| is_consumer_services(i) && i.tot_states < 16,
    },
    Rule {
        name: "consumer-services-national",
        archetype: ArchetypeId::C1,
        applies: |i| is_consumer_services(i) && i.tot_states >= 16,
    },
    Rule {
        name: "education-health-regional",
        archetype: ArchetypeId::C3,
        applies: |i| is_education_or_health(i) && i.tot_states <= 29,
    },
    Rule {
        name: "education-health-national",
        archetype: ArchetypeId::B3,
        applies: |i| is_education_or_health(i) && i.tot_states > 29,
    },
    Rule {
        name: "built-environment-regional",
        archetype: ArchetypeId::B2,
        applies: |i| is_built_environment(i) && i.tot_states <= 19,
    },
    Rule {
        name: "built-environment-national",
        archetype: ArchetypeId::B3,
        applies: |i| is_built_environment(i) && i.tot_states > 19,
    },
    // Carve-out: very large regional wholesalers classify ahead of the
    // broader industrial group below.
    Rule {
        name: "wholesale-giant",
        archetype: ArchetypeId::A3,
        applies: |i| {
            matches!(i.industry, Some(IndustryCategory::WholesaleTrade))
                && i.tot_states <= 20
                && i.pct_female <= 0.49
                && i.employees >= 100_000
        },
    },
    Rule {
        name: "industrial-regional",
        archetype: ArchetypeId::B1,
        applies: |i| is_industrial(i) && i.tot_states <= 20 && i.pct_female <= 0.49,
    },
    Rule {
        name: "industrial-regional-female",
        archetype: ArchetypeId::C3,
        applies: |i| is_industrial(i) && i.tot_states <= 20 && i.pct_female > 0.49,
    },
    Rule {
        name: "industrial-national",
        archetype: ArchetypeId::B3,
        applies: |i| is_industrial(i) && i.tot_states > 20,
    },
    // Carve-out: information firms at scale classify ahead of the broader
    // knowledge group below, regardless of state count.
    Rule {
        name: "information-scale",
        archetype: ArchetypeId::A3,
        applies: |i| {
            matches!(i.industry, Some(IndustryCategory::Information)) && i.employees >= 250
        },
    },
    Rule {
        name: "knowledge-regional",
        archetype: ArchetypeId::A1,
        applies: |i| is_knowledge(i) && i.tot_states < 31,
    },
    Rule {
        name: "knowledge-national",
        archetype: ArchetypeId::A3,
        applies: |i| is_knowledge(i) && i.tot_states >= 31,
    },
    Rule {
        name: "finance-insurance",
        archetype: ArchetypeId::A2,
        applies: |i| matches!(i.industry, Some(IndustryCategory::FinanceAndInsurance)),
    },
];

/// Substituted when no rule matches; the system always answers.
pub const FALLBACK_ARCHETYPE: ArchetypeId = ArchetypeId::C3;

pub const MATCH_RANGE: std::ops::RangeInclusive<u8> = 75..=85;

/// Outcome of the rule-table walk alone.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub archetype: ArchetypeId,
    /// Name of the rule that fired, absent when the fallback was used.
    pub rule: Option<&'static str>,
    pub fallback: bool,
}

/// Walk the decision list. Never errors; unmatched inputs get the fallback.
pub fn classify(input: &ClassificationInput) -> Classification {
    for rule in RULES {
        if (rule.applies)(input) {
            debug!(rule = rule.name, archetype = %rule.archetype, "rule matched");
            return Classification {
                archetype: rule.archetype,
                rule: Some(rule.name),
                fallback: false,
            };
        }
    }
    debug!(archetype = %FALLBACK_ARCHETYPE, "no rule matched, using fallback");
    Classification {
        archetype: FALLBACK_ARCHETYPE,
        rule: None,
        fallback: true,
    }
}

/// Knobs for assessment assembly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentOptions {
    /// Pin the decorative percentage match instead of drawing it at random.
    /// Values are clamped into the 75..=85 range.
    #[serde(default)]
    pub pinned_match: Option<u8>,
}

/// Full assessment outcome handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub primary: ArchetypeId,
    pub secondary: ArchetypeId,
    pub tertiary: ArchetypeId,
    /// Decorative 75..=85 figure, not a computed confidence score.
    pub percentage_match: u8,
    pub tier: ResultTier,
    pub fallback: bool,
}

pub fn assess(answers: &AnswerSet) -> Assessment {
    assess_with(answers, &AssessmentOptions::default())
}

pub fn assess_with(answers: &AnswerSet, options: &AssessmentOptions) -> Assessment {
    let input = normalize(answers);
    let classification = classify(&input);
    let [secondary, tertiary] = classification.archetype.siblings();

    let percentage_match = match options.pinned_match {
        Some(pinned) => pinned.clamp(*MATCH_RANGE.start(), *MATCH_RANGE.end()),
        None => rand::rng().random_range(MATCH_RANGE),
    };

    Assessment {
        primary: classification.archetype,
        secondary,
        tertiary,
        percentage_match,
        tier: result_tier(answers),
        fallback: classification.fallback,
    }
}

/// Presence-based tier for the optional questions; display-only.
pub fn result_tier(answers: &AnswerSet) -> ResultTier {
    let gender = answers.is_answered(QuestionId::Gender);
    let priorities = answers.is_answered(QuestionId::Priorities);
    match (gender, priorities) {
        (true, true) => ResultTier::Comprehensive,
        (true, false) | (false, true) => ResultTier::Detailed,
        (false, false) => ResultTier::Basic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_targets_a_distinct_name() {
        for (i, rule) in RULES.iter().enumerate() {
            for other in &RULES[i + 1..] {
                assert_ne!(rule.name, other.name);
            }
        }
    }

    #[test]
    fn pinned_match_is_clamped_into_range() {
        let answers = AnswerSet::new();
        let low = assess_with(
            &answers,
            &AssessmentOptions {
                pinned_match: Some(10),
            },
        );
        assert_eq!(low.percentage_match, 75);
        let high = assess_with(
            &answers,
            &AssessmentOptions {
                pinned_match: Some(99),
            },
        );
        assert_eq!(high.percentage_match, 85);
    }
}
