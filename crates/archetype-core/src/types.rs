use crate::error::ArchetypeError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One of the nine organizational-healthcare archetypes. The two-character
/// code carries the family letter and the position within the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchetypeId {
    A1,
    A2,
    A3,
    B1,
    B2,
    B3,
    C1,
    C2,
    C3,
}

impl ArchetypeId {
    pub const ALL: [ArchetypeId; 9] = [
        ArchetypeId::A1,
        ArchetypeId::A2,
        ArchetypeId::A3,
        ArchetypeId::B1,
        ArchetypeId::B2,
        ArchetypeId::B3,
        ArchetypeId::C1,
        ArchetypeId::C2,
        ArchetypeId::C3,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ArchetypeId::A1 => "a1",
            ArchetypeId::A2 => "a2",
            ArchetypeId::A3 => "a3",
            ArchetypeId::B1 => "b1",
            ArchetypeId::B2 => "b2",
            ArchetypeId::B3 => "b3",
            ArchetypeId::C1 => "c1",
            ArchetypeId::C2 => "c2",
            ArchetypeId::C3 => "c3",
        }
    }

    pub fn family(&self) -> FamilyId {
        match self {
            ArchetypeId::A1 | ArchetypeId::A2 | ArchetypeId::A3 => FamilyId::A,
            ArchetypeId::B1 | ArchetypeId::B2 | ArchetypeId::B3 => FamilyId::B,
            ArchetypeId::C1 | ArchetypeId::C2 | ArchetypeId::C3 => FamilyId::C,
        }
    }

    /// The other two archetypes in the same family, in catalog order.
    pub fn siblings(&self) -> [ArchetypeId; 2] {
        let members = self.family().members();
        let mut out = [*self; 2];
        let mut i = 0;
        for member in members {
            if member != *self {
                out[i] = member;
                i += 1;
            }
        }
        out
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ArchetypeId {
    type Err = ArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a1" => Ok(ArchetypeId::A1),
            "a2" => Ok(ArchetypeId::A2),
            "a3" => Ok(ArchetypeId::A3),
            "b1" => Ok(ArchetypeId::B1),
            "b2" => Ok(ArchetypeId::B2),
            "b3" => Ok(ArchetypeId::B3),
            "c1" => Ok(ArchetypeId::C1),
            "c2" => Ok(ArchetypeId::C2),
            "c3" => Ok(ArchetypeId::C3),
            other => Err(ArchetypeError::InvalidArchetype(other.to_string())),
        }
    }
}

/// One of the three archetype families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyId {
    A,
    B,
    C,
}

impl FamilyId {
    pub const ALL: [FamilyId; 3] = [FamilyId::A, FamilyId::B, FamilyId::C];

    pub fn code(&self) -> &'static str {
        match self {
            FamilyId::A => "a",
            FamilyId::B => "b",
            FamilyId::C => "c",
        }
    }

    pub fn members(&self) -> [ArchetypeId; 3] {
        match self {
            FamilyId::A => [ArchetypeId::A1, ArchetypeId::A2, ArchetypeId::A3],
            FamilyId::B => [ArchetypeId::B1, ArchetypeId::B2, ArchetypeId::B3],
            FamilyId::C => [ArchetypeId::C1, ArchetypeId::C2, ArchetypeId::C3],
        }
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for FamilyId {
    type Err = ArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" => Ok(FamilyId::A),
            "b" => Ok(FamilyId::B),
            "c" => Ok(FamilyId::C),
            other => Err(ArchetypeError::InvalidFamily(other.to_string())),
        }
    }
}

/// Identifier for one of the five survey questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Industry,
    Geography,
    Size,
    Gender,
    Priorities,
}

impl QuestionId {
    pub const ALL: [QuestionId; 5] = [
        QuestionId::Industry,
        QuestionId::Geography,
        QuestionId::Size,
        QuestionId::Gender,
        QuestionId::Priorities,
    ];
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionId::Industry => "industry",
            QuestionId::Geography => "geography",
            QuestionId::Size => "size",
            QuestionId::Gender => "gender",
            QuestionId::Priorities => "priorities",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for QuestionId {
    type Err = ArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "industry" => Ok(QuestionId::Industry),
            "geography" => Ok(QuestionId::Geography),
            "size" => Ok(QuestionId::Size),
            "gender" => Ok(QuestionId::Gender),
            "priorities" => Ok(QuestionId::Priorities),
            other => Err(ArchetypeError::InvalidQuestion(other.to_string())),
        }
    }
}

/// Normalized industry categories the rule table is written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryCategory {
    AdministrativeAndWaste,
    RetailTrade,
    OtherServices,
    AccommodationAndFood,
    EducationalServices,
    HealthCareAndSocial,
    Construction,
    RealEstate,
    WholesaleTrade,
    Manufacturing,
    TransportationAndWarehousing,
    Utilities,
    Information,
    ProfessionalScientificTechnical,
    FinanceAndInsurance,
}

impl IndustryCategory {
    /// Census-style sector label shown in reports.
    pub fn label(&self) -> &'static str {
        match self {
            IndustryCategory::AdministrativeAndWaste => {
                "Administrative and Support and Waste Management Services"
            }
            IndustryCategory::RetailTrade => "Retail Trade",
            IndustryCategory::OtherServices => "Other Services",
            IndustryCategory::AccommodationAndFood => "Accommodation and Food Services",
            IndustryCategory::EducationalServices => "Educational Services",
            IndustryCategory::HealthCareAndSocial => "Health Care and Social Assistance",
            IndustryCategory::Construction => "Construction",
            IndustryCategory::RealEstate => "Real Estate and Rental and Leasing",
            IndustryCategory::WholesaleTrade => "Wholesale Trade",
            IndustryCategory::Manufacturing => "Manufacturing",
            IndustryCategory::TransportationAndWarehousing => "Transportation and Warehousing",
            IndustryCategory::Utilities => "Utilities",
            IndustryCategory::Information => "Information",
            IndustryCategory::ProfessionalScientificTechnical => {
                "Professional, Scientific, and Technical Services"
            }
            IndustryCategory::FinanceAndInsurance => "Finance and Insurance",
        }
    }
}

impl fmt::Display for IndustryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Answers collected over one assessment attempt, keyed by question.
///
/// Every key is optional; classification substitutes baseline values for
/// anything missing instead of failing. The `priorities` answer is a
/// comma-joined list of option ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: HashMap<QuestionId, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, question: QuestionId, value: impl Into<String>) -> &mut Self {
        self.answers.insert(question, value.into());
        self
    }

    pub fn with(mut self, question: QuestionId, value: impl Into<String>) -> Self {
        self.answers.insert(question, value.into());
        self
    }

    pub fn get(&self, question: QuestionId) -> Option<&str> {
        self.answers.get(&question).map(String::as_str)
    }

    /// True when the question has a non-empty answer.
    pub fn is_answered(&self, question: QuestionId) -> bool {
        self.get(question).is_some_and(|v| !v.trim().is_empty())
    }

    /// The selected priority option ids, split out of the comma-joined form.
    pub fn priorities(&self) -> Vec<&str> {
        self.get(QuestionId::Priorities)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// The four derived variables classification is a pure function of.
///
/// `priorities` never appears here; it only influences the display tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationInput {
    pub industry: Option<IndustryCategory>,
    pub tot_states: u32,
    pub employees: u32,
    pub pct_female: f64,
}

impl Default for ClassificationInput {
    fn default() -> Self {
        Self {
            industry: None,
            tot_states: 0,
            employees: 0,
            pct_female: 0.5,
        }
    }
}

impl ClassificationInput {
    pub fn new(industry: Option<IndustryCategory>) -> Self {
        Self {
            industry,
            ..Self::default()
        }
    }

    pub fn with_states(mut self, tot_states: u32) -> Self {
        self.tot_states = tot_states;
        self
    }

    pub fn with_employees(mut self, employees: u32) -> Self {
        self.employees = employees;
        self
    }

    pub fn with_pct_female(mut self, pct_female: f64) -> Self {
        self.pct_female = pct_female;
        self
    }
}

/// Coarse label for how complete the optional answers were; display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultTier {
    Basic,
    Detailed,
    Comprehensive,
}

impl fmt::Display for ResultTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResultTier::Basic => "Basic",
            ResultTier::Detailed => "Detailed",
            ResultTier::Comprehensive => "Comprehensive",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archetype_codes_round_trip() {
        for id in ArchetypeId::ALL {
            let parsed: ArchetypeId = id.code().parse().unwrap();
            assert_eq!(parsed, id);
        }
        assert!("d1".parse::<ArchetypeId>().is_err());
        assert!("".parse::<ArchetypeId>().is_err());
    }

    #[test]
    fn family_matches_code_first_character() {
        for id in ArchetypeId::ALL {
            let family: FamilyId = id.code()[..1].parse().unwrap();
            assert_eq!(id.family(), family);
        }
    }

    #[test]
    fn siblings_are_the_rest_of_the_family() {
        let [second, third] = ArchetypeId::A1.siblings();
        assert_eq!(second, ArchetypeId::A2);
        assert_eq!(third, ArchetypeId::A3);

        let [second, third] = ArchetypeId::B2.siblings();
        assert_eq!(second, ArchetypeId::B1);
        assert_eq!(third, ArchetypeId::B3);
    }

    #[test]
    fn archetype_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&ArchetypeId::C2).unwrap();
        assert_eq!(json, "\"c2\"");
        let back: ArchetypeId = serde_json::from_str("\"b3\"").unwrap();
        assert_eq!(back, ArchetypeId::B3);
        assert!(serde_json::from_str::<ArchetypeId>("\"x9\"").is_err());
    }

    #[test]
    fn priorities_split_comma_joined_answers() {
        let answers = AnswerSet::new().with(QuestionId::Priorities, "cost, access,,quality");
        assert_eq!(answers.priorities(), vec!["cost", "access", "quality"]);
        assert!(AnswerSet::new().priorities().is_empty());
    }

    #[test]
    fn default_input_matches_missing_answer_baseline() {
        let input = ClassificationInput::default();
        assert_eq!(input.industry, None);
        assert_eq!(input.tot_states, 0);
        assert_eq!(input.employees, 0);
        assert!((input.pct_female - 0.5).abs() < f64::EPSILON);
    }
}
