//! Navigation between the doctor listing and a doctor's detail page.

use crate::domain::Speciality;

/// Current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The directory listing, optionally narrowed to one specialty.
    Doctors { speciality: Option<Speciality> },

    /// Detail page for a single doctor.
    ///
    /// Remembers the listing's specialty so going back restores it.
    Appointment {
        doctor_id: String,
        return_to: Option<Speciality>,
    },
}

impl Default for Route {
    fn default() -> Self {
        Self::Doctors { speciality: None }
    }
}

impl Route {
    /// Specialty selector of the listing this route shows or returns to.
    #[must_use]
    pub const fn speciality(&self) -> Option<&Speciality> {
        match self {
            Self::Doctors { speciality } | Self::Appointment { return_to: speciality, .. } => {
                speciality.as_ref()
            }
        }
    }

    /// Route reached by picking `selected` in the specialty list.
    ///
    /// Picking the active specialty clears the filter; picking any other
    /// one switches to it. Always lands on the listing.
    #[must_use]
    pub fn toggle_speciality(&self, selected: Speciality) -> Self {
        let speciality = if self.speciality() == Some(&selected) {
            None
        } else {
            Some(selected)
        };
        Self::Doctors { speciality }
    }

    /// Route of the detail page for `doctor_id`.
    #[must_use]
    pub fn open(&self, doctor_id: impl Into<String>) -> Self {
        Self::Appointment {
            doctor_id: doctor_id.into(),
            return_to: self.speciality().cloned(),
        }
    }

    /// Route reached by going back. The listing is its own parent.
    #[must_use]
    pub fn back(&self) -> Self {
        Self::Doctors {
            speciality: self.speciality().cloned(),
        }
    }

    /// Id of the doctor shown, if this is a detail route.
    #[must_use]
    pub fn doctor_id(&self) -> Option<&str> {
        match self {
            Self::Appointment { doctor_id, .. } => Some(doctor_id),
            Self::Doctors { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        let start = Route::default();
        let neuro = start.toggle_speciality(Speciality::Neurologist);
        assert_eq!(neuro.speciality(), Some(&Speciality::Neurologist));
        assert_eq!(neuro.toggle_speciality(Speciality::Neurologist), start);
    }

    #[test]
    fn toggle_switches_between_specialities() {
        let route = Route::default()
            .toggle_speciality(Speciality::Neurologist)
            .toggle_speciality(Speciality::Dermatologist);
        assert_eq!(route.speciality(), Some(&Speciality::Dermatologist));
    }

    #[test]
    fn back_restores_listing_filter() {
        let listing = Route::default().toggle_speciality(Speciality::Gynecologist);
        let detail = listing.open("doc-1");
        assert_eq!(detail.doctor_id(), Some("doc-1"));
        assert_eq!(detail.back(), listing);
        assert_eq!(listing.back(), listing);
    }
}
