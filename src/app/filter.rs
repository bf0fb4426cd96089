//! Doctor directory filtering.
//!
//! [`filter_doctors`] is the pure filtering rule used by the browser.
//! [`DoctorQuery`] memoizes it so the result is recomputed only when one of
//! its inputs (directory, specialty selector, search text) has changed.

use crate::domain::{Doctor, Speciality};

/// Returns `true` if `doctor` matches a lowercased, non-empty search term.
///
/// A doctor matches when the term is a substring of its lowercased name, its
/// lowercased specialty, or any lowercased entry in its specialty's disease
/// table.
fn matches_term(doctor: &Doctor, term: &str) -> bool {
    doctor.name.to_lowercase().contains(term)
        || doctor.speciality.as_str().to_lowercase().contains(term)
        || doctor
            .speciality
            .diseases()
            .iter()
            .any(|disease| disease.to_lowercase().contains(term))
}

/// Filters a directory by specialty and free-text search.
///
/// 1. With `speciality` set, keep doctors whose specialty equals it exactly.
/// 2. With a search that is non-empty after trimming, lowercase it and keep
///    doctors whose name, specialty, or specialty disease table contains it.
///
/// Directory order is preserved and only directory entries are returned.
///
/// # Examples
///
/// ```
/// use docfinder::app::filter::filter_doctors;
/// use docfinder::domain::Doctor;
///
/// let directory = vec![
///     Doctor::new("a", "Dr. A", "Dermatologist"),
///     Doctor::new("b", "Dr. B", "General physician"),
/// ];
///
/// let acne = filter_doctors(&directory, None, "acne");
/// assert_eq!(acne.len(), 1);
/// assert_eq!(acne[0].name, "Dr. A");
/// ```
#[must_use]
pub fn filter_doctors(directory: &[Doctor], speciality: Option<&Speciality>, search: &str) -> Vec<Doctor> {
    let _span = tracing::debug_span!(
        "filter_doctors",
        directory_len = directory.len(),
        speciality = ?speciality,
        search_len = search.len()
    )
    .entered();

    let term = if search.trim().is_empty() {
        None
    } else {
        Some(search.to_lowercase())
    };

    let filtered: Vec<Doctor> = directory
        .iter()
        .filter(|doc| speciality.map_or(true, |spec| &doc.speciality == spec))
        .filter(|doc| term.as_deref().map_or(true, |t| matches_term(doc, t)))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "doctor filter applied");
    filtered
}

/// Memoization key: every input the filter depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QueryKey {
    directory_generation: u64,
    speciality: Option<Speciality>,
    search: String,
}

/// Memoized view of the filtered directory.
///
/// The directory is identified by a generation counter that the owner bumps
/// on every replacement, so the query never has to compare doctor lists.
#[derive(Debug, Clone, Default)]
pub struct DoctorQuery {
    key: Option<QueryKey>,
    results: Vec<Doctor>,
}

impl DoctorQuery {
    /// Recomputes the results if any dependency changed.
    ///
    /// Returns `true` when the filter actually ran.
    pub fn refresh(
        &mut self,
        directory: &[Doctor],
        directory_generation: u64,
        speciality: Option<&Speciality>,
        search: &str,
    ) -> bool {
        let key = QueryKey {
            directory_generation,
            speciality: speciality.cloned(),
            search: search.to_string(),
        };

        if self.key.as_ref() == Some(&key) {
            return false;
        }

        self.results = filter_doctors(directory, speciality, search);
        self.key = Some(key);
        true
    }

    /// Current filtered doctors, in directory order.
    #[must_use]
    pub fn results(&self) -> &[Doctor] {
        &self.results
    }
}
