//! Common domain type definitions
//!
//! This module contains the enum types shared by animal records, reproductive
//! events and the life-stage classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sex of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    /// Female (hembra)
    Female,
    /// Male (macho)
    Male,
    /// Missing or unrecognized code
    Unspecified,
}

impl Sex {
    /// Uppercase single-letter code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Female => "F",
            Self::Male => "M",
            Self::Unspecified => "",
        }
    }
}

impl From<&str> for Sex {
    fn from(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" | "MACHO" => Self::Male,
            "F" | "H" | "FEMALE" | "HEMBRA" => Self::Female,
            _ => Self::Unspecified,
        }
    }
}

impl From<String> for Sex {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        sex.code().to_string()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome recorded on a reproductive event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PregnancyOutcome {
    /// Pregnancy confirmed and ongoing
    Pregnant,
    /// Service did not result in a pregnancy
    NotPregnant,
    /// Pregnancy lost
    Abortion,
    /// Any other tag, kept verbatim
    Other(String),
}

impl PregnancyOutcome {
    /// Canonical tag for this outcome
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pregnant => "pregnant",
            Self::NotPregnant => "not pregnant",
            Self::Abortion => "abortion",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for PregnancyOutcome {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "pregnant" | "preñada" | "prenada" => Self::Pregnant,
            "not pregnant" | "not_pregnant" | "open" | "vacía" | "vacia" => Self::NotPregnant,
            "abortion" | "aborto" => Self::Abortion,
            _ => Self::Other(s.trim().to_string()),
        }
    }
}

impl From<String> for PregnancyOutcome {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<PregnancyOutcome> for String {
    fn from(outcome: PregnancyOutcome) -> Self {
        outcome.as_str().to_string()
    }
}

/// Production category derived by the life-stage rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeStage {
    /// Mature male
    Bull,
    /// Recently calved, registered calf, and pregnant again
    FreshenedPregnant,
    /// Recently calved, registered calf, not pregnant again
    FreshenedOpen,
    /// Confirmed pregnant
    Pregnant,
    /// Young animal of either sex
    Calf,
    /// Weaned female
    WeanedHeifer,
    /// Weaned male
    WeanedSteer,
    /// Female in rearing
    RearingHeifer,
    /// Male in rearing
    RearingSteer,
    /// Female old enough for breeding
    BreedingHeifer,
    /// Male in fattening
    FatteningSteer,
    /// Mature female, not pregnant
    OpenCow,
}

impl LifeStage {
    /// Every stage, in rule order
    pub const ALL: [Self; 12] = [
        Self::Bull,
        Self::FreshenedPregnant,
        Self::FreshenedOpen,
        Self::Pregnant,
        Self::Calf,
        Self::WeanedHeifer,
        Self::WeanedSteer,
        Self::RearingHeifer,
        Self::RearingSteer,
        Self::BreedingHeifer,
        Self::FatteningSteer,
        Self::OpenCow,
    ];

    /// Category label stored on the animal record
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bull => "Toro",
            Self::FreshenedPregnant => "Parida preñada",
            Self::FreshenedOpen => "Parida vacía",
            Self::Pregnant => "Preñada",
            Self::Calf => "Becerro",
            Self::WeanedHeifer => "Novillas destete",
            Self::WeanedSteer => "Novillos destete",
            Self::RearingHeifer => "Novillas levante",
            Self::RearingSteer => "Novillos levante",
            Self::BreedingHeifer => "Novillas vientre",
            Self::FatteningSteer => "Novillos ceba",
            Self::OpenCow => "Vacía",
        }
    }

    /// Parse a stored category label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.label() == label.trim())
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
