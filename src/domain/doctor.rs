//! Doctor records as served by the backend directory endpoint.
//!
//! The backend owns every field except `keywords`, which the client derives
//! from the static specialty table when the directory is fetched. Keywords are
//! never sent back to the server.

use super::speciality::Speciality;
use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a fee sent as a number, a numeric string, or `null`.
fn lenient_fee<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Fee {
        Number(f64),
        Text(String),
    }

    match Option::<Fee>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(Fee::Number(value)) => Ok(value),
        Some(Fee::Text(text)) => text
            .trim()
            .parse()
            .map_err(|_| <D::Error as serde::de::Error>::custom(format!("invalid fee {text:?}"))),
    }
}

/// Postal address of a practice.
///
/// The listing shows only `line2` (typically the locality); the detail view
/// shows both lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "null_as_default")]
    pub line1: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub line2: String,
}

/// A doctor in the directory.
///
/// Unknown JSON fields are ignored, and every optional display field defaults
/// when absent or `null`, so older or newer backends still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Backend identifier, unique within the directory.
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    pub speciality: Speciality,

    /// Whether the doctor currently accepts bookings.
    #[serde(default, deserialize_with = "null_as_default")]
    pub available: bool,

    /// Image URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub address: Address,

    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,

    /// Free-form experience text such as `"4 Years"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub about: String,

    /// Consultation fee in the backend's currency units.
    #[serde(default, deserialize_with = "lenient_fee")]
    pub fees: f64,

    /// Symptom keywords derived from `speciality`; attached client-side.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl Doctor {
    /// Creates a doctor with the given identity and every optional field empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        speciality: impl Into<Speciality>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            speciality: speciality.into(),
            available: false,
            image: String::new(),
            address: Address::default(),
            degree: String::new(),
            experience: String::new(),
            about: String::new(),
            fees: 0.0,
            keywords: Vec::new(),
        }
    }

    /// Returns this doctor with keywords attached from the specialty table.
    ///
    /// Any keywords already present are replaced. Specialties without a table
    /// get an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use docfinder::domain::Doctor;
    ///
    /// let doc = Doctor::new("d1", "Dr. A", "Dermatologist").with_keywords();
    /// assert!(doc.keywords.iter().any(|k| k == "acne"));
    /// ```
    #[must_use]
    pub fn with_keywords(mut self) -> Self {
        self.keywords = self
            .speciality
            .keywords()
            .iter()
            .map(|k| (*k).to_string())
            .collect();
        self
    }
}
