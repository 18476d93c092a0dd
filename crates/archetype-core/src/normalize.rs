//! Turns raw survey option ids into the derived variables the rule table
//! reads. Unknown or missing answers fall back to baseline values instead of
//! erroring; classification always produces an archetype.

use crate::types::{AnswerSet, ClassificationInput, IndustryCategory, QuestionId};
use tracing::debug;

/// Derive the classification variables from a (possibly partial) answer set.
pub fn normalize(answers: &AnswerSet) -> ClassificationInput {
    let industry = answers
        .get(QuestionId::Industry)
        .and_then(map_industry);
    let tot_states = answers
        .get(QuestionId::Geography)
        .map(states_for)
        .unwrap_or(0);
    let employees = answers.get(QuestionId::Size).map(employees_for).unwrap_or(0);
    let pct_female = answers
        .get(QuestionId::Gender)
        .map(pct_female_for)
        .unwrap_or(0.5);

    let input = ClassificationInput {
        industry,
        tot_states,
        employees,
        pct_female,
    };
    debug!(?input, "normalized survey answers");
    input
}

/// Map a survey industry option to its rule-table category.
pub fn map_industry(raw: &str) -> Option<IndustryCategory> {
    let mut mapped = match raw.trim().to_lowercase().as_str() {
        "professional-services" => Some(IndustryCategory::ProfessionalScientificTechnical),
        "finance-insurance" => Some(IndustryCategory::FinanceAndInsurance),
        "information-technology" => Some(IndustryCategory::Information),
        "manufacturing" => Some(IndustryCategory::Manufacturing),
        "construction" => Some(IndustryCategory::Construction),
        "real-estate" => Some(IndustryCategory::RealEstate),
        "retail" => Some(IndustryCategory::RetailTrade),
        "wholesale" => Some(IndustryCategory::WholesaleTrade),
        "transportation" => Some(IndustryCategory::TransportationAndWarehousing),
        "utilities" => Some(IndustryCategory::Utilities),
        "education-healthcare" => Some(IndustryCategory::EducationalServices),
        "hospitality" => Some(IndustryCategory::AccommodationAndFood),
        "administrative" => Some(IndustryCategory::AdministrativeAndWaste),
        "other-services" => Some(IndustryCategory::OtherServices),
        other => {
            if !other.is_empty() {
                debug!(value = other, "unmapped industry answer");
            }
            None
        }
    };
    // Upstream behavior folds the education answer straight into health care,
    // so EducationalServices is unreachable from survey input. Both labels hit
    // the same rules today; revisit this fold before the table ever splits them.
    if mapped == Some(IndustryCategory::EducationalServices) {
        mapped = Some(IndustryCategory::HealthCareAndSocial);
    }
    mapped
}

/// Representative state count for a geography bucket.
pub fn states_for(raw: &str) -> u32 {
    match raw.trim().to_lowercase().as_str() {
        "1-5" => 5,
        "6-15" => 15,
        "16-30" => 30,
        "over-30" => 50,
        other => {
            if !other.is_empty() {
                debug!(value = other, "unmapped geography answer");
            }
            0
        }
    }
}

/// Representative headcount for a size bucket.
pub fn employees_for(raw: &str) -> u32 {
    match raw.trim().to_lowercase().as_str() {
        "under-500" => 250,
        "500-2500" => 1500,
        "2500-10000" => 5000,
        "over-10000" => 100_000,
        other => {
            if !other.is_empty() {
                debug!(value = other, "unmapped size answer");
            }
            0
        }
    }
}

/// Representative female-share fraction for a workforce-mix bucket.
pub fn pct_female_for(raw: &str) -> f64 {
    match raw.trim().to_lowercase().as_str() {
        "mostly-male" => 0.30,
        "balanced" => 0.50,
        "mostly-female" => 0.75,
        other => {
            if !other.is_empty() {
                debug!(value = other, "unmapped gender answer");
            }
            0.5
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnswerSet, QuestionId};

    #[test]
    fn empty_answers_normalize_to_baseline() {
        let input = normalize(&AnswerSet::new());
        assert_eq!(input, ClassificationInput::default());
    }

    #[test]
    fn buckets_map_to_representative_values() {
        let answers = AnswerSet::new()
            .with(QuestionId::Industry, "retail")
            .with(QuestionId::Geography, "6-15")
            .with(QuestionId::Size, "500-2500")
            .with(QuestionId::Gender, "mostly-female");
        let input = normalize(&answers);
        assert_eq!(input.industry, Some(IndustryCategory::RetailTrade));
        assert_eq!(input.tot_states, 15);
        assert_eq!(input.employees, 1500);
        assert!((input.pct_female - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn education_answer_folds_into_health_care() {
        assert_eq!(
            map_industry("education-healthcare"),
            Some(IndustryCategory::HealthCareAndSocial)
        );
    }

    #[test]
    fn unknown_answers_fall_back_silently() {
        assert_eq!(map_industry("agriculture"), None);
        assert_eq!(states_for("everywhere"), 0);
        assert_eq!(employees_for("a-few"), 0);
        assert!((pct_female_for("unsure") - 0.5).abs() < f64::EPSILON);
    }
}
