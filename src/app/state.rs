//! Application state and view model computation.
//!
//! [`AppState`] bundles the shared [`AppContext`] with the browser's own
//! state (route, search, cursor), the input mode, and presentation settings.
//! `compute_viewmodel` turns a snapshot of it into a
//! [`UIViewModel`](crate::ui::viewmodel::UIViewModel) sized for the terminal.

use super::browser::BrowserState;
use super::context::AppContext;
use super::modes::{InputMode, SearchFocus};
use crate::domain::{Doctor, ProfileState, Rating, Speciality};
use crate::ui::helpers::{match_ranges, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, DoctorDetail, DoctorRow, EmptyState, FooterInfo, HeaderInfo, InputBoxInfo, NoticeLine,
    SpecialityChip, UIViewModel,
};

/// Shown whenever the filtered listing is empty.
pub const NO_DOCTORS_MESSAGE: &str = "No doctors found.";

/// Rows taken by header, specialty bar, borders, table header, notice and footer.
const CHROME_ROWS: usize = 9;

/// Extra rows taken by the search box or token prompt.
const INPUT_BOX_ROWS: usize = 3;

const NAME_WIDTH: usize = 28;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Shared store: session, directory, profile, ratings, notices.
    pub context: AppContext,

    pub browser: BrowserState,

    pub input_mode: InputMode,

    /// Token being typed in the token prompt.
    pub token_input: String,

    pub theme: Theme,

    /// Prefix for consultation fees.
    pub currency_symbol: String,
}

impl AppState {
    #[must_use]
    pub fn new(context: AppContext, theme: Theme, currency_symbol: impl Into<String>) -> Self {
        let mut state = Self {
            context,
            browser: BrowserState::default(),
            input_mode: InputMode::Normal,
            token_input: String::new(),
            theme,
            currency_symbol: currency_symbol.into(),
        };
        state.refresh_view();
        state
    }

    /// Re-derives the filtered listing after the directory, the route or
    /// the search text may have changed.
    pub fn refresh_view(&mut self) -> bool {
        self.browser.refresh(&self.context)
    }

    /// Computes a renderable view model for a `rows` x `cols` terminal.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows = rows, cols = cols).entered();

        let body = match self.browser.route.doctor_id() {
            Some(id) => self.compute_detail(id),
            None => self.compute_listing(rows, cols),
        };

        UIViewModel {
            header: self.compute_header(),
            specialities: self.compute_specialities(),
            input_box: self.compute_input_box(),
            body,
            notice: self.context.notices.latest().map(|notice| NoticeLine {
                level: notice.level,
                text: format!("[{}] {}", notice.at.format("%H:%M:%S"), notice.message),
            }),
            footer: self.compute_footer(),
        }
    }

    fn compute_listing(&self, rows: usize, cols: usize) -> Body {
        let results = self.browser.results();
        if results.is_empty() {
            return Body::Empty(self.compute_empty_state());
        }

        let available_rows = self.calculate_available_rows(rows).max(1);
        let selected = self.browser.selected_index;

        let mut visible_start = selected.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(results.len());
        if visible_end - visible_start < available_rows && results.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let term = self.browser.search_query.trim();
        let rows = results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, doctor)| {
                self.compute_row(doctor, visible_start + offset == selected, term, cols)
            })
            .collect();

        Body::Listing {
            rows,
            selected_index: selected - visible_start,
        }
    }

    fn compute_row(&self, doctor: &Doctor, is_selected: bool, term: &str, cols: usize) -> DoctorRow {
        let name = truncate(&doctor.name, NAME_WIDTH);
        let highlight_ranges = if term.is_empty() {
            vec![]
        } else {
            match_ranges(&name, term)
        };

        DoctorRow {
            name,
            speciality: doctor.speciality.to_string(),
            locality: truncate(&doctor.address.line2, cols.saturating_sub(70).max(12)),
            rating: self.context.rating(&doctor.id).map(format_rating).unwrap_or_default(),
            available: doctor.available,
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.context.doctors().is_empty() {
            if self.context.is_loading {
                return EmptyState {
                    message: "Loading doctors...".to_string(),
                    subtitle: String::new(),
                };
            }
            return EmptyState {
                message: NO_DOCTORS_MESSAGE.to_string(),
                subtitle: "Press r to reload the directory".to_string(),
            };
        }
        EmptyState {
            message: NO_DOCTORS_MESSAGE.to_string(),
            subtitle: "Try another specialty or search".to_string(),
        }
    }

    fn compute_detail(&self, doctor_id: &str) -> Body {
        let Some(doctor) = self.context.doctor(doctor_id) else {
            return Body::Empty(EmptyState {
                message: "Doctor not found.".to_string(),
                subtitle: "Press Esc to go back".to_string(),
            });
        };

        let qualification = if doctor.degree.is_empty() {
            doctor.speciality.to_string()
        } else {
            format!("{} - {}", doctor.degree, doctor.speciality)
        };

        let address = [&doctor.address.line1, &doctor.address.line2]
            .into_iter()
            .filter(|line| !line.is_empty())
            .cloned()
            .collect();

        Body::Detail(DoctorDetail {
            name: doctor.name.clone(),
            qualification,
            experience: doctor.experience.clone(),
            about: doctor.about.clone(),
            fee: format!("{}{}", self.currency_symbol, format_fee(doctor.fees)),
            address,
            available: doctor.available,
            rating: self.context.rating(&doctor.id).map(format_rating),
            keywords: doctor.keywords.clone(),
        })
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.browser.route.doctor_id().is_some() {
            " Docfinder · Doctor profile ".to_string()
        } else {
            let scope = self
                .browser
                .route
                .speciality()
                .map_or("All specialities", Speciality::as_str);
            format!(" Docfinder · {scope} ({}) ", self.browser.results().len())
        };
        HeaderInfo { title }
    }

    fn compute_specialities(&self) -> Vec<SpecialityChip> {
        let active = self.browser.route.speciality();
        Speciality::ALL
            .iter()
            .enumerate()
            .map(|(idx, speciality)| SpecialityChip {
                key: idx + 1,
                label: speciality.to_string(),
                is_active: active == Some(speciality),
            })
            .collect()
    }

    fn compute_input_box(&self) -> Option<InputBoxInfo> {
        match self.input_mode {
            InputMode::Normal => None,
            InputMode::Search(focus) => Some(InputBoxInfo {
                label: "Search".to_string(),
                text: self.browser.search_query.clone(),
                is_focused: focus == SearchFocus::Typing,
            }),
            InputMode::TokenEntry => Some(InputBoxInfo {
                label: "Token".to_string(),
                text: "•".repeat(self.token_input.chars().count()),
                is_focused: true,
            }),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let on_detail = self.browser.route.doctor_id().is_some();
        let mut keybindings = match (self.input_mode, on_detail) {
            (InputMode::TokenEntry, _) => "Enter: apply  Esc: cancel  (empty signs out)".to_string(),
            (InputMode::Search(SearchFocus::Typing), _) => {
                "Esc: exit search  Enter: results  Type to filter".to_string()
            }
            (InputMode::Search(SearchFocus::Navigating), _) => {
                "Esc: exit search  /: edit query  j/k: navigate  Enter: open".to_string()
            }
            (InputMode::Normal, true) => "Esc: back  r: reload  t: token  L: sign out  q: quit".to_string(),
            (InputMode::Normal, false) => {
                "j/k: navigate  Enter: open  1-6: specialty  /: search  r: reload  t: token  L: sign out  q: quit"
                    .to_string()
            }
        };
        if self.input_mode == InputMode::Normal && !self.context.notices.is_empty() {
            keybindings.push_str("  c: dismiss");
        }

        let session = match &self.context.profile {
            ProfileState::Loaded(profile) if !profile.name.is_empty() => {
                format!("Signed in as {}", profile.name)
            }
            ProfileState::Loaded(profile) if !profile.email.is_empty() => {
                format!("Signed in as {}", profile.email)
            }
            _ if self.context.token.is_some() => "Signed in".to_string(),
            _ => "Guest".to_string(),
        };
        let status = if self.context.is_loading {
            format!("Loading…  {session}")
        } else {
            session
        };

        FooterInfo { keybindings, status }
    }

    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(CHROME_ROWS),
            InputMode::Search(_) | InputMode::TokenEntry => {
                total_rows.saturating_sub(CHROME_ROWS + INPUT_BOX_ROWS)
            }
        }
    }
}

fn format_rating(rating: Rating) -> String {
    format!("{:.1} ({})", rating.value, rating.review_count)
}

fn format_fee(fees: f64) -> String {
    if fees.fract() == 0.0 {
        format!("{fees:.0}")
    } else {
        format!("{fees:.2}")
    }
}
