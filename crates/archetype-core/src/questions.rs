//! The ordered survey question bank: five questions, their option ids and
//! display labels. The classifier only ever sees the four relevant answers;
//! `priorities` exists for the result tier alone.

use crate::types::QuestionId;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct QuestionOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    /// Multi-select answers are stored comma-joined.
    pub multi_select: bool,
    pub options: &'static [QuestionOption],
}

static QUESTIONS: [Question; 5] = [
    Question {
        id: QuestionId::Industry,
        prompt: "Which industry best describes your organization?",
        multi_select: false,
        options: &[
            QuestionOption {
                id: "professional-services",
                label: "Professional, Scientific & Technical Services",
            },
            QuestionOption {
                id: "finance-insurance",
                label: "Finance & Insurance",
            },
            QuestionOption {
                id: "information-technology",
                label: "Information & Technology",
            },
            QuestionOption {
                id: "manufacturing",
                label: "Manufacturing",
            },
            QuestionOption {
                id: "construction",
                label: "Construction",
            },
            QuestionOption {
                id: "real-estate",
                label: "Real Estate, Rental & Leasing",
            },
            QuestionOption {
                id: "retail",
                label: "Retail Trade",
            },
            QuestionOption {
                id: "wholesale",
                label: "Wholesale Trade",
            },
            QuestionOption {
                id: "transportation",
                label: "Transportation & Warehousing",
            },
            QuestionOption {
                id: "utilities",
                label: "Utilities",
            },
            QuestionOption {
                id: "education-healthcare",
                label: "Education & Healthcare",
            },
            QuestionOption {
                id: "hospitality",
                label: "Accommodation & Food Services",
            },
            QuestionOption {
                id: "administrative",
                label: "Administrative, Support & Waste Management",
            },
            QuestionOption {
                id: "other-services",
                label: "Other Services",
            },
        ],
    },
    Question {
        id: QuestionId::Geography,
        prompt: "In how many states does your organization operate?",
        multi_select: false,
        options: &[
            QuestionOption {
                id: "1-5",
                label: "1-5 states",
            },
            QuestionOption {
                id: "6-15",
                label: "6-15 states",
            },
            QuestionOption {
                id: "16-30",
                label: "16-30 states",
            },
            QuestionOption {
                id: "over-30",
                label: "More than 30 states",
            },
        ],
    },
    Question {
        id: QuestionId::Size,
        prompt: "How many employees does your organization have?",
        multi_select: false,
        options: &[
            QuestionOption {
                id: "under-500",
                label: "Fewer than 500",
            },
            QuestionOption {
                id: "500-2500",
                label: "500 to 2,500",
            },
            QuestionOption {
                id: "2500-10000",
                label: "2,500 to 10,000",
            },
            QuestionOption {
                id: "over-10000",
                label: "More than 10,000",
            },
        ],
    },
    Question {
        id: QuestionId::Gender,
        prompt: "How would you describe your workforce gender mix?",
        multi_select: false,
        options: &[
            QuestionOption {
                id: "mostly-male",
                label: "Mostly male",
            },
            QuestionOption {
                id: "balanced",
                label: "Roughly balanced",
            },
            QuestionOption {
                id: "mostly-female",
                label: "Mostly female",
            },
        ],
    },
    Question {
        id: QuestionId::Priorities,
        prompt: "Which healthcare priorities matter most to your organization?",
        multi_select: true,
        options: &[
            QuestionOption {
                id: "cost",
                label: "Controlling cost trend",
            },
            QuestionOption {
                id: "access",
                label: "Improving access to care",
            },
            QuestionOption {
                id: "quality",
                label: "Raising quality of care",
            },
            QuestionOption {
                id: "wellbeing",
                label: "Employee wellbeing & prevention",
            },
            QuestionOption {
                id: "behavioral-health",
                label: "Behavioral health support",
            },
        ],
    },
];

/// The five questions in presentation order.
pub fn question_bank() -> &'static [Question] {
    &QUESTIONS
}

/// The bank entry for a question; the array is laid out in `QuestionId::ALL`
/// order.
pub fn question(id: QuestionId) -> &'static Question {
    &QUESTIONS[id as usize]
}

/// Whether `value` names a known option for the question. For multi-select
/// questions every comma-separated part must be known.
pub fn is_valid_option(id: QuestionId, value: &str) -> bool {
    let q = question(id);
    let known = |part: &str| q.options.iter().any(|opt| opt.id == part);
    if q.multi_select {
        let mut parts = value.split(',').map(str::trim).filter(|p| !p.is_empty());
        let mut any = false;
        for part in parts.by_ref() {
            if !known(part) {
                return false;
            }
            any = true;
        }
        any
    } else {
        known(value.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::map_industry;

    #[test]
    fn bank_is_ordered_and_complete() {
        let ids: Vec<QuestionId> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids, QuestionId::ALL);
        for q in question_bank() {
            assert!(!q.options.is_empty());
        }
    }

    #[test]
    fn only_priorities_is_multi_select() {
        for q in question_bank() {
            assert_eq!(q.multi_select, q.id == QuestionId::Priorities);
        }
    }

    #[test]
    fn every_industry_option_maps_to_a_category() {
        for opt in question(QuestionId::Industry).options {
            assert!(map_industry(opt.id).is_some(), "unmapped option {}", opt.id);
        }
    }

    #[test]
    fn option_validation_handles_multi_select() {
        assert!(is_valid_option(QuestionId::Industry, "retail"));
        assert!(!is_valid_option(QuestionId::Industry, "mining"));
        assert!(is_valid_option(QuestionId::Priorities, "cost, access"));
        assert!(!is_valid_option(QuestionId::Priorities, "cost, snacks"));
        assert!(!is_valid_option(QuestionId::Priorities, ""));
    }
}
