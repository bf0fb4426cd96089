//! Doctor browser: route, search text, filtered results, and cursor.

use crate::app::context::AppContext;
use crate::app::filter::DoctorQuery;
use crate::app::route::Route;
use crate::domain::{Doctor, Speciality};

/// Listing and navigation state of the doctor browser.
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    pub route: Route,

    /// Free-text search, matched against name, specialty and disease table.
    pub search_query: String,

    query: DoctorQuery,

    /// Zero-based cursor within the filtered results.
    pub selected_index: usize,
}

impl BrowserState {
    /// Re-derives the filtered listing from `context` if any input changed.
    ///
    /// Returns `true` when the results were recomputed. The cursor is clamped
    /// to the new result range either way.
    pub fn refresh(&mut self, context: &AppContext) -> bool {
        let recomputed = self.query.refresh(
            context.doctors(),
            context.directory_generation(),
            self.route.speciality(),
            &self.search_query,
        );

        let len = self.query.results().len();
        self.selected_index = if len == 0 { 0 } else { self.selected_index.min(len - 1) };
        recomputed
    }

    /// Doctors matching the current specialty and search, in directory order.
    #[must_use]
    pub fn results(&self) -> &[Doctor] {
        self.query.results()
    }

    #[must_use]
    pub fn selected_doctor(&self) -> Option<&Doctor> {
        self.results().get(self.selected_index)
    }

    pub fn move_selection_down(&mut self) {
        let len = self.results().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    pub fn move_selection_up(&mut self) {
        let len = self.results().len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Toggles `speciality` as the listing filter and resets the cursor.
    pub fn toggle_speciality(&mut self, speciality: Speciality) {
        self.route = self.route.toggle_speciality(speciality);
        self.selected_index = 0;
        tracing::debug!(speciality = ?self.route.speciality(), "speciality filter changed");
    }

    /// Opens the detail page of the doctor under the cursor.
    ///
    /// Returns `false` when not on the listing or nothing is selected.
    pub fn open_selected(&mut self) -> bool {
        if self.route.doctor_id().is_some() {
            return false;
        }
        let Some(doctor) = self.selected_doctor() else {
            return false;
        };
        let id = doctor.id.clone();
        tracing::debug!(doctor_id = %id, "opening doctor");
        self.route = self.route.open(id);
        true
    }

    /// Returns from a detail page to the listing it came from.
    ///
    /// Returns `false` if already on the listing.
    pub fn back(&mut self) -> bool {
        if self.route.doctor_id().is_none() {
            return false;
        }
        self.route = self.route.back();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn context() -> AppContext {
        let mut ctx = AppContext::new("http://api.test");
        ctx.replace_directory_with(
            vec![
                Doctor::new("a", "Dr. A", "Dermatologist"),
                Doctor::new("b", "Dr. B", "General physician"),
                Doctor::new("c", "Dr. C", "Dermatologist"),
            ],
            &mut StdRng::seed_from_u64(5),
        );
        ctx
    }

    #[test]
    fn refresh_tracks_directory_and_filters() {
        let ctx = context();
        let mut browser = BrowserState::default();
        assert!(browser.refresh(&ctx));
        assert_eq!(browser.results().len(), 3);
        assert!(!browser.refresh(&ctx));

        browser.toggle_speciality(Speciality::Dermatologist);
        assert!(browser.refresh(&ctx));
        assert_eq!(browser.results().len(), 2);

        browser.search_query = "cold".to_string();
        browser.refresh(&ctx);
        assert!(browser.results().is_empty());
        assert_eq!(browser.selected_index, 0);
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let ctx = context();
        let mut browser = BrowserState::default();
        browser.refresh(&ctx);

        browser.move_selection_up();
        assert_eq!(browser.selected_index, 2);
        browser.move_selection_down();
        assert_eq!(browser.selected_index, 0);

        browser.selected_index = 2;
        browser.search_query = "dr. a".to_string();
        browser.refresh(&ctx);
        assert_eq!(browser.selected_index, 0);
        assert_eq!(browser.selected_doctor().map(|d| d.id.as_str()), Some("a"));
    }

    #[test]
    fn open_and_back_keep_filter() {
        let ctx = context();
        let mut browser = BrowserState::default();
        browser.toggle_speciality(Speciality::Dermatologist);
        browser.refresh(&ctx);
        browser.move_selection_down();

        assert!(browser.open_selected());
        assert_eq!(browser.route.doctor_id(), Some("c"));
        assert!(!browser.open_selected());

        assert!(browser.back());
        assert_eq!(browser.route.speciality(), Some(&Speciality::Dermatologist));
        assert!(!browser.back());
    }
}
