//! Medical specialties and their static lookup tables.
//!
//! A doctor's specialty drives two build-time tables:
//!
//! - **Keywords**: attached to each doctor when the directory is fetched and
//!   listed as "Treats" on the doctor detail view.
//! - **Diseases**: common conditions and symptoms searched by the doctor
//!   browser, so that typing "acne" finds dermatologists.
//!
//! The backend sends specialties as plain strings. Anything outside the known
//! set is preserved verbatim as [`Speciality::Other`] and has empty tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A category of medical practice.
///
/// Serialized as the exact display string the backend uses (for example
/// `"General physician"`), so equality against a route selector is a plain
/// case-sensitive string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Speciality {
    GeneralPhysician,
    Gynecologist,
    Dermatologist,
    Pediatricians,
    Neurologist,
    Gastroenterologist,
    /// A specialty the plugin has no tables for.
    Other(String),
}

impl Speciality {
    /// The selectable specialties, in sidebar order.
    pub const ALL: [Self; 6] = [
        Self::GeneralPhysician,
        Self::Gynecologist,
        Self::Dermatologist,
        Self::Pediatricians,
        Self::Neurologist,
        Self::Gastroenterologist,
    ];

    /// Returns the backend's display name for this specialty.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::GeneralPhysician => "General physician",
            Self::Gynecologist => "Gynecologist",
            Self::Dermatologist => "Dermatologist",
            Self::Pediatricians => "Pediatricians",
            Self::Neurologist => "Neurologist",
            Self::Gastroenterologist => "Gastroenterologist",
            Self::Other(name) => name,
        }
    }

    /// Returns the selectable specialty at a 1-based sidebar position.
    ///
    /// # Examples
    ///
    /// ```
    /// use docfinder::domain::Speciality;
    ///
    /// assert_eq!(Speciality::from_position(3), Some(Speciality::Dermatologist));
    /// assert_eq!(Speciality::from_position(0), None);
    /// assert_eq!(Speciality::from_position(7), None);
    /// ```
    #[must_use]
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).cloned())
    }

    /// Symptom keywords attached to doctors of this specialty at fetch time.
    ///
    /// Returns an empty slice for [`Speciality::Other`].
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::GeneralPhysician => &[
                "cough", "cold", "fever", "viral infection", "infection", "flu", "headache",
            ],
            Self::Gynecologist => &[
                "pregnancy", "menstruation", "fertility", "reproductive health", "periods",
                "gynecology",
            ],
            Self::Dermatologist => &[
                "acne", "eczema", "psoriasis", "skin rash", "itching", "skin infection",
            ],
            Self::Pediatricians => &[
                "child", "infant", "vaccination", "fever", "cough", "baby care",
            ],
            Self::Neurologist => &[
                "brain", "nerves", "spine", "seizures", "paralysis", "stroke", "headache",
            ],
            Self::Gastroenterologist => &[
                "stomach", "digestion", "liver", "ulcer", "gas", "bloating", "abdomen pain",
            ],
            Self::Other(_) => &[],
        }
    }

    /// Common diseases and symptoms searched by the doctor browser.
    ///
    /// Returns an empty slice for [`Speciality::Other`].
    #[must_use]
    pub const fn diseases(&self) -> &'static [&'static str] {
        match self {
            Self::GeneralPhysician => &[
                "cough", "cold", "fever", "flu", "viral infection", "headache", "body pain",
                "fatigue", "sore throat", "runny nose", "diarrhea", "vomiting", "nausea",
                "dizziness",
            ],
            Self::Gynecologist => &[
                "pregnancy", "menstrual problems", "pcos", "infertility", "menopause",
                "vaginal infection", "breast problems", "hormonal issues", "uterine problems",
            ],
            Self::Dermatologist => &[
                "acne", "rashes", "skin infection", "allergies", "eczema", "psoriasis",
                "hair loss", "nail problems", "skin cancer", "fungal infection", "vitiligo",
            ],
            Self::Pediatricians => &[
                "childhood fever", "vaccination", "growth problems", "childhood infections",
                "developmental issues", "childhood asthma", "childhood allergies",
                "nutrition problems", "behavioral issues",
            ],
            Self::Neurologist => &[
                "headache", "migraine", "seizures", "memory problems", "stroke", "parkinson's",
                "alzheimer's", "epilepsy", "nerve pain", "dizziness", "balance problems",
            ],
            Self::Gastroenterologist => &[
                "stomach pain", "acid reflux", "ulcer", "ibs", "constipation", "diarrhea",
                "liver problems", "gallbladder issues", "digestive problems", "food intolerance",
            ],
            Self::Other(_) => &[],
        }
    }
}

impl From<String> for Speciality {
    fn from(value: String) -> Self {
        Self::ALL
            .iter()
            .find(|known| known.as_str() == value)
            .cloned()
            .unwrap_or(Self::Other(value))
    }
}

impl From<&str> for Speciality {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Speciality> for String {
    fn from(value: Speciality) -> Self {
        match value {
            Speciality::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Speciality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_parse_to_variants() {
        for spec in Speciality::ALL {
            assert_eq!(Speciality::from(spec.as_str()), spec);
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            Speciality::from("dermatologist"),
            Speciality::Other("dermatologist".to_string())
        );
    }

    #[test]
    fn unknown_speciality_has_empty_tables() {
        let other = Speciality::from("Cardiologist");
        assert!(other.keywords().is_empty());
        assert!(other.diseases().is_empty());
        assert_eq!(other.to_string(), "Cardiologist");
    }

    #[test]
    fn serde_uses_display_name() {
        let json = serde_json::to_string(&Speciality::GeneralPhysician).unwrap();
        assert_eq!(json, "\"General physician\"");

        let parsed: Speciality = serde_json::from_str("\"Neurologist\"").unwrap();
        assert_eq!(parsed, Speciality::Neurologist);
    }

    #[test]
    fn every_known_speciality_has_tables() {
        for spec in Speciality::ALL {
            assert!(!spec.keywords().is_empty(), "{spec} has no keywords");
            assert!(!spec.diseases().is_empty(), "{spec} has no diseases");
        }
    }
}
