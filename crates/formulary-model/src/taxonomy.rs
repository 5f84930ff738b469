//! Closed taxonomies for medication records.
//!
//! Dose forms, therapeutic categories, and South African regulatory
//! schedules are all fixed vocabularies. Representing them as enums keeps
//! every record inside the closed sets and makes tie-break ordering
//! explicit instead of depending on map iteration order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaxonomyParseError;

/// Pharmaceutical dose form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoseForm {
    #[default]
    Tablet,
    Capsule,
    Syrup,
    Injection,
    Cream,
    Drops,
    Inhaler,
    Patch,
}

impl DoseForm {
    /// All forms in table order. Earlier entries win keyword ties.
    pub const ALL: [DoseForm; 8] = [
        DoseForm::Tablet,
        DoseForm::Capsule,
        DoseForm::Syrup,
        DoseForm::Injection,
        DoseForm::Cream,
        DoseForm::Drops,
        DoseForm::Inhaler,
        DoseForm::Patch,
    ];

    /// Canonical lowercase name used in serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            DoseForm::Tablet => "tablet",
            DoseForm::Capsule => "capsule",
            DoseForm::Syrup => "syrup",
            DoseForm::Injection => "injection",
            DoseForm::Cream => "cream",
            DoseForm::Drops => "drops",
            DoseForm::Inhaler => "inhaler",
            DoseForm::Patch => "patch",
        }
    }
}

impl fmt::Display for DoseForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DoseForm {
    type Err = TaxonomyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DoseForm::ALL
            .into_iter()
            .find(|form| form.as_str() == value.trim().to_lowercase())
            .ok_or_else(|| TaxonomyParseError::form(value))
    }
}

/// Therapeutic category.
///
/// The declaration order doubles as resolution priority: when a line
/// matches keywords from more than one category, the earlier category wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Analgesics,
    Antibiotics,
    Cardiovascular,
    Diabetes,
    Respiratory,
    Gastrointestinal,
    #[serde(rename = "Mental Health")]
    MentalHealth,
    Allergy,
    Dermatology,
    Vitamins,
    #[default]
    Other,
}

impl Category {
    /// All categories in priority order, `Other` last.
    pub const ALL: [Category; 11] = [
        Category::Analgesics,
        Category::Antibiotics,
        Category::Cardiovascular,
        Category::Diabetes,
        Category::Respiratory,
        Category::Gastrointestinal,
        Category::MentalHealth,
        Category::Allergy,
        Category::Dermatology,
        Category::Vitamins,
        Category::Other,
    ];

    /// Display name as it appears in the formulary service.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Analgesics => "Analgesics",
            Category::Antibiotics => "Antibiotics",
            Category::Cardiovascular => "Cardiovascular",
            Category::Diabetes => "Diabetes",
            Category::Respiratory => "Respiratory",
            Category::Gastrointestinal => "Gastrointestinal",
            Category::MentalHealth => "Mental Health",
            Category::Allergy => "Allergy",
            Category::Dermatology => "Dermatology",
            Category::Vitamins => "Vitamins",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TaxonomyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| TaxonomyParseError::category(value))
    }
}

/// South African regulatory schedule (0 = unscheduled, 6 = most restricted).
///
/// `Ord` follows restriction level, so `max` picks the stricter schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Schedule {
    #[serde(rename = "Schedule 0")]
    S0,
    #[serde(rename = "Schedule 1")]
    S1,
    #[serde(rename = "Schedule 2")]
    S2,
    #[serde(rename = "Schedule 3")]
    S3,
    #[serde(rename = "Schedule 4")]
    S4,
    #[serde(rename = "Schedule 5")]
    S5,
    #[serde(rename = "Schedule 6")]
    S6,
}

impl Schedule {
    /// All schedules, ascending by restriction level.
    pub const ALL: [Schedule; 7] = [
        Schedule::S0,
        Schedule::S1,
        Schedule::S2,
        Schedule::S3,
        Schedule::S4,
        Schedule::S5,
        Schedule::S6,
    ];

    /// Display name, e.g. `"Schedule 3"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Schedule::S0 => "Schedule 0",
            Schedule::S1 => "Schedule 1",
            Schedule::S2 => "Schedule 2",
            Schedule::S3 => "Schedule 3",
            Schedule::S4 => "Schedule 4",
            Schedule::S5 => "Schedule 5",
            Schedule::S6 => "Schedule 6",
        }
    }

    /// Numeric restriction level (0..=6).
    pub fn level(self) -> u8 {
        match self {
            Schedule::S0 => 0,
            Schedule::S1 => 1,
            Schedule::S2 => 2,
            Schedule::S3 => 3,
            Schedule::S4 => 4,
            Schedule::S5 => 5,
            Schedule::S6 => 6,
        }
    }

    /// Schedule for a numeric level, if within 0..=6.
    pub fn from_level(level: u8) -> Option<Schedule> {
        Schedule::ALL.into_iter().find(|s| s.level() == level)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Schedule {
    type Err = TaxonomyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Schedule::ALL
            .into_iter()
            .find(|schedule| schedule.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| TaxonomyParseError::schedule(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_ordering_follows_restriction_level() {
        assert!(Schedule::S5 > Schedule::S0);
        assert_eq!(Schedule::S5.max(Schedule::S0), Schedule::S5);
        assert_eq!(Schedule::from_level(4), Some(Schedule::S4));
        assert_eq!(Schedule::from_level(7), None);
    }

    #[test]
    fn form_round_trips_through_canonical_name() {
        for form in DoseForm::ALL {
            assert_eq!(form.as_str().parse::<DoseForm>().unwrap(), form);
        }
        assert!("lozenge".parse::<DoseForm>().is_err());
    }

    #[test]
    fn category_parses_display_names() {
        assert_eq!(
            "Mental Health".parse::<Category>().unwrap(),
            Category::MentalHealth
        );
        assert_eq!("other".parse::<Category>().unwrap(), Category::Other);
    }
}
