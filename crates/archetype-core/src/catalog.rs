//! Static archetype and family catalog. Pure lookup data keyed by the id
//! enums; no logic lives here.

use crate::types::{ArchetypeId, FamilyId};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ArchetypeProfile {
    pub id: ArchetypeId,
    pub family: FamilyId,
    pub name: &'static str,
    pub summary: &'static str,
    pub characteristics: &'static [&'static str],
    /// Display color, hex RGB.
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FamilyProfile {
    pub id: FamilyId,
    pub name: &'static str,
    pub summary: &'static str,
    pub color: &'static str,
}

static ARCHETYPES: [ArchetypeProfile; 9] = [
    ArchetypeProfile {
        id: ArchetypeId::A1,
        family: FamilyId::A,
        name: "Concentrated Professionals",
        summary: "Regional professional-services firms with an office-based, benefits-literate \
                  workforce that engages early with preventive and digital care.",
        characteristics: &[
            "High plan engagement and portal adoption",
            "Preventive screening rates above population average",
            "Low emergency utilization, high specialist referral volume",
        ],
        color: "#2563eb",
    },
    ArchetypeProfile {
        id: ArchetypeId::A2,
        family: FamilyId::A,
        name: "Financial Stewards",
        summary: "Finance and insurance organizations with structured benefits programs, strong \
                  HSA uptake and cost-conscious plan selection.",
        characteristics: &[
            "Highest HSA/FSA participation of any archetype",
            "Deliberate network selection, low out-of-network spend",
            "Behavioral-health utilization trending up year over year",
        ],
        color: "#1d4ed8",
    },
    ArchetypeProfile {
        id: ArchetypeId::A3,
        family: FamilyId::A,
        name: "Distributed Innovators",
        summary: "Large multi-state information and technology employers whose dispersed knowledge \
                  workforce leans heavily on virtual-first care.",
        characteristics: &[
            "Telehealth share of visits well above average",
            "Wide geographic spread complicates network design",
            "Younger population, musculoskeletal and mental-health led spend",
        ],
        color: "#3b82f6",
    },
    ArchetypeProfile {
        id: ArchetypeId::B1,
        family: FamilyId::B,
        name: "Plant Communities",
        summary: "Regional manufacturing and industrial employers with a predominantly male, \
                  site-based workforce anchored to local health systems.",
        characteristics: &[
            "Occupational-health and musculoskeletal claims dominate",
            "Care concentrated in a small number of local systems",
            "Low digital-tool adoption, high reliance on onsite clinics",
        ],
        color: "#d97706",
    },
    ArchetypeProfile {
        id: ArchetypeId::B2,
        family: FamilyId::B,
        name: "Regional Builders",
        summary: "Construction and real-estate organizations operating in a compact footprint with \
                  a mobile field workforce.",
        characteristics: &[
            "Injury-driven utilization with seasonal peaks",
            "High deductible sensitivity and deferred elective care",
            "Workforce turnover complicates continuity of care",
        ],
        color: "#b45309",
    },
    ArchetypeProfile {
        id: ArchetypeId::B3,
        family: FamilyId::B,
        name: "National Operators",
        summary: "Industrial, logistics and service employers spread across many states, balancing \
                  site-based and distributed populations.",
        characteristics: &[
            "Multi-network strategy with uneven regional costs",
            "Shift-work patterns depress preventive-care completion",
            "Chronic-condition prevalence above population average",
        ],
        color: "#f59e0b",
    },
    ArchetypeProfile {
        id: ArchetypeId::C1,
        family: FamilyId::C,
        name: "National Service Network",
        summary: "Multi-state retail, hospitality and support-services employers with large \
                  hourly populations and thin margins for benefit spend.",
        characteristics: &[
            "High part-time share, variable plan eligibility",
            "Emergency-department utilization above average",
            "Price-sensitive population, strong response to navigation support",
        ],
        color: "#059669",
    },
    ArchetypeProfile {
        id: ArchetypeId::C2,
        family: FamilyId::C,
        name: "Hometown Services",
        summary: "Community-footprint retail and service businesses whose workforce lives and \
                  seeks care close to a handful of local markets.",
        characteristics: &[
            "Care anchored to community providers",
            "Low specialist density drives travel for complex care",
            "SDOH factors weigh heavily on outcomes",
        ],
        color: "#047857",
    },
    ArchetypeProfile {
        id: ArchetypeId::C3,
        family: FamilyId::C,
        name: "Community Caregivers",
        summary: "Education, health-care and social-assistance employers with a majority-female \
                  workforce that consumes care at high rates while delivering it.",
        characteristics: &[
            "Highest primary-care engagement of any archetype",
            "Maternity and family-care benefits heavily used",
            "Burnout-linked behavioral-health demand rising",
        ],
        color: "#10b981",
    },
];

static FAMILIES: [FamilyProfile; 3] = [
    FamilyProfile {
        id: FamilyId::A,
        name: "Knowledge Economy",
        summary: "Office-centric, benefits-engaged workforces with digital-first care habits and \
                  below-average acute utilization.",
        color: "#2563eb",
    },
    FamilyProfile {
        id: FamilyId::B,
        name: "Industrial Backbone",
        summary: "Site-based industrial workforces where occupational health, injury claims and \
                  local health systems shape the cost picture.",
        color: "#d97706",
    },
    FamilyProfile {
        id: FamilyId::C,
        name: "Service Frontline",
        summary: "Hourly and caregiving workforces with high acute utilization and strong \
                  sensitivity to access and affordability.",
        color: "#059669",
    },
];

pub fn all_archetypes() -> &'static [ArchetypeProfile] {
    &ARCHETYPES
}

pub fn all_families() -> &'static [FamilyProfile] {
    &FAMILIES
}

/// Catalog entry for an archetype. Total over the nine ids; the array is
/// laid out in `ArchetypeId::ALL` order.
pub fn archetype(id: ArchetypeId) -> &'static ArchetypeProfile {
    &ARCHETYPES[id as usize]
}

/// Catalog entry for a family. Total over the three ids.
pub fn family(id: FamilyId) -> &'static FamilyProfile {
    &FAMILIES[id as usize]
}

pub fn archetype_color(id: ArchetypeId) -> &'static str {
    archetype(id).color
}

pub fn family_color(id: FamilyId) -> &'static str {
    family(id).color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_family_matches_derived_family() {
        for profile in all_archetypes() {
            assert_eq!(profile.family, profile.id.family());
        }
    }

    #[test]
    fn every_id_has_an_entry_and_a_color() {
        for id in ArchetypeId::ALL {
            let profile = archetype(id);
            assert_eq!(profile.id, id);
            assert!(profile.color.starts_with('#') && profile.color.len() == 7);
            assert!(!profile.name.is_empty());
            assert!(!profile.characteristics.is_empty());
        }
        for id in FamilyId::ALL {
            let profile = family(id);
            assert_eq!(profile.id, id);
            assert!(profile.color.starts_with('#') && profile.color.len() == 7);
        }
    }

    #[test]
    fn families_hold_three_archetypes_each() {
        for fam in FamilyId::ALL {
            let count = all_archetypes()
                .iter()
                .filter(|profile| profile.family == fam)
                .count();
            assert_eq!(count, 3);
        }
    }
}
