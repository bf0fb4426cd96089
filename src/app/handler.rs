//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the plugin runtime (keys, HTTP results) or the worker
//! 2. [`handle_event`] mutates [`AppState`]
//! 3. The browser view is re-derived if its inputs changed
//! 4. Actions are returned for the runtime to execute
//!
//! # Example
//!
//! ```rust
//! use docfinder::app::{handle_event, AppState, Event};
//! use docfinder::app::context::AppContext;
//! use docfinder::ui::Theme;
//!
//! let mut state = AppState::new(AppContext::new("http://localhost:4000"), Theme::default(), "₹");
//! let (should_render, actions) = handle_event(&mut state, &Event::Start)?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 2);
//! # Ok::<(), docfinder::DocfinderError>(())
//! ```

use crate::api::RequestKind;
use crate::app::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Speciality;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, host callbacks, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down one doctor (wraps to top).
    KeyDown,
    /// Moves the cursor up one doctor (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Opens the detail page of the selected doctor.
    OpenDoctor,
    /// Leaves the detail page.
    Back,
    /// Toggles the specialty at a 1-based position in the specialty bar.
    ToggleSpeciality(usize),

    /// Enters search mode with typing focus.
    SearchMode,
    /// Returns focus to the search input.
    FocusSearchBar,
    /// Moves focus from the search input to the results.
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,
    /// Appends a character to the active text input.
    Char(char),
    /// Removes the last character from the active text input.
    Backspace,

    /// Re-fetches the doctor directory.
    Reload,
    /// Opens the token prompt.
    TokenEntry,
    /// Applies the typed token.
    SubmitToken,
    /// Closes the token prompt without applying it.
    CancelTokenEntry,
    /// Clears the session.
    SignOut,
    /// Dismisses the latest notice.
    DismissNotice,

    /// Host permissions were granted: load the directory and the saved session.
    Start,
    /// Host permissions were refused; nothing can be fetched.
    PermissionsDenied,

    /// An HTTP response for an earlier `Fetch`.
    WebResponse {
        kind: RequestKind,
        status: u16,
        body: Vec<u8>,
    },

    /// A response from the session worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates state, and returns `(should_render, actions)`.
///
/// # Errors
///
/// Reserved for failures that cannot be turned into a notice; every current
/// event handles its failures in place.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventName(event)).entered();

    let outcome = match event {
        Event::KeyDown => {
            state.browser.move_selection_down();
            (true, vec![])
        }
        Event::KeyUp => {
            state.browser.move_selection_up();
            (true, vec![])
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::OpenDoctor => {
            if state.browser.open_selected() {
                exit_search(state);
                (true, vec![])
            } else if state.input_mode.is_search() {
                tracing::debug!("no doctor selected, leaving search");
                exit_search(state);
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
        Event::Back => (state.browser.back(), vec![]),
        Event::ToggleSpeciality(position) => match Speciality::from_position(*position) {
            Some(speciality) => {
                state.browser.toggle_speciality(speciality);
                (true, vec![])
            }
            None => (false, vec![]),
        },
        Event::SearchMode => {
            if state.browser.route.doctor_id().is_some() {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.browser.search_query.clear();
            (true, vec![])
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            (true, vec![])
        }
        Event::FocusResults => {
            if state.browser.search_query.is_empty() {
                exit_search(state);
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            (true, vec![])
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.browser.search_query, "exiting search mode");
            exit_search(state);
            (true, vec![])
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search(_) => {
                state.browser.search_query.push(*c);
                tracing::trace!(query = %state.browser.search_query, "search query updated");
                (true, vec![])
            }
            InputMode::TokenEntry => {
                state.token_input.push(*c);
                (true, vec![])
            }
            InputMode::Normal => (false, vec![]),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(_) => {
                state.browser.search_query.pop();
                (true, vec![])
            }
            InputMode::TokenEntry => {
                state.token_input.pop();
                (true, vec![])
            }
            InputMode::Normal => (state.browser.back(), vec![]),
        },
        Event::Reload => (true, state.context.load_doctors()),
        Event::TokenEntry => {
            state.input_mode = InputMode::TokenEntry;
            state.token_input.clear();
            (true, vec![])
        }
        Event::SubmitToken => {
            if state.input_mode != InputMode::TokenEntry {
                return Ok((false, vec![]));
            }
            let token = std::mem::take(&mut state.token_input);
            state.input_mode = InputMode::Normal;
            (true, state.context.set_token(&token))
        }
        Event::CancelTokenEntry => {
            state.token_input.clear();
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::SignOut => (true, state.context.clear_session()),
        Event::DismissNotice => (state.context.notices.dismiss(), vec![]),
        Event::Start => {
            tracing::debug!("starting: loading directory and session");
            let mut actions = state.context.load_doctors();
            actions.push(Action::PostToWorker(WorkerMessage::load_session()));
            (true, actions)
        }
        Event::PermissionsDenied => {
            state
                .context
                .notices
                .error("Web access was denied; the doctor directory cannot be loaded");
            (true, vec![])
        }
        Event::WebResponse { kind, status, body } => {
            tracing::debug!(request = %kind, status = status, body_len = body.len(), "web response");
            state.context.apply_response(*kind, *status, body);
            (true, vec![])
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::SessionLoaded { token } => {
                (true, state.context.restore_session(token.clone()))
            }
            WorkerResponse::SessionSaved { signed_in } => {
                tracing::debug!(signed_in = signed_in, "session persisted");
                (false, vec![])
            }
            WorkerResponse::Error { message } => {
                state.context.notices.warn(format!("Session storage: {message}"));
                (true, vec![])
            }
        },
    };

    let (mut should_render, actions) = outcome;
    if state.refresh_view() {
        should_render = true;
    }
    Ok((should_render, actions))
}

fn exit_search(state: &mut AppState) {
    state.input_mode = InputMode::Normal;
    state.browser.search_query.clear();
}

/// Debug view of an event that keeps bodies and tokens out of the logs.
struct EventName<'a>(&'a Event);

impl std::fmt::Debug for EventName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::Char(_) => f.write_str("Char"),
            Event::WebResponse { kind, status, .. } => write!(f, "WebResponse({kind}, {status})"),
            Event::WorkerResponse(WorkerResponse::SessionLoaded { token }) => {
                write!(f, "SessionLoaded(signed_in: {})", token.is_some())
            }
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiRequest;
    use crate::app::context::AppContext;
    use crate::app::state::NO_DOCTORS_MESSAGE;
    use crate::domain::ProfileState;
    use crate::ui::viewmodel::Body;
    use crate::ui::Theme;

    const BASE: &str = "http://api.test";

    fn state() -> AppState {
        AppState::new(AppContext::new(BASE), Theme::default(), "₹")
    }

    fn deliver(state: &mut AppState, kind: RequestKind, body: &[u8]) {
        handle_event(
            state,
            &Event::WebResponse {
                kind,
                status: 200,
                body: body.to_vec(),
            },
        )
        .unwrap();
    }

    fn loaded() -> AppState {
        let mut state = state();
        handle_event(&mut state, &Event::Start).unwrap();
        deliver(
            &mut state,
            RequestKind::DoctorList,
            br#"{"success":true,"doctors":[
                {"_id":"a","name":"Dr. A","speciality":"Dermatologist"},
                {"_id":"b","name":"Dr. B","speciality":"General physician"}
            ]}"#,
        );
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn names(state: &AppState) -> Vec<&str> {
        state.browser.results().iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn start_fetches_directory_and_session() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Start).unwrap();
        assert!(render);
        assert_eq!(
            actions,
            vec![
                Action::Fetch(ApiRequest::doctor_list(BASE)),
                Action::PostToWorker(WorkerMessage::load_session()),
            ]
        );
        assert!(state.context.is_loading);
    }

    #[test]
    fn directory_response_populates_browser() {
        let state = loaded();
        assert!(!state.context.is_loading);
        assert_eq!(names(&state), vec!["Dr. A", "Dr. B"]);
    }

    #[test]
    fn search_by_symptom() {
        let mut state = loaded();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        type_text(&mut state, "acne");
        assert_eq!(names(&state), vec!["Dr. A"]);

        for _ in 0..4 {
            handle_event(&mut state, &Event::Backspace).unwrap();
        }
        type_text(&mut state, "cold");
        assert_eq!(names(&state), vec!["Dr. B"]);

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(names(&state), vec!["Dr. A", "Dr. B"]);
    }

    #[test]
    fn speciality_toggle_and_empty_result() {
        let mut state = loaded();
        // Neurologist is the fifth entry of the specialty bar.
        handle_event(&mut state, &Event::ToggleSpeciality(5)).unwrap();
        assert!(state.browser.results().is_empty());
        let vm = state.compute_viewmodel(24, 100);
        assert!(matches!(vm.body, Body::Empty(ref e) if e.message == NO_DOCTORS_MESSAGE));

        handle_event(&mut state, &Event::ToggleSpeciality(5)).unwrap();
        assert_eq!(state.browser.route.speciality(), None);
        assert_eq!(names(&state).len(), 2);

        let (render, _) = handle_event(&mut state, &Event::ToggleSpeciality(9)).unwrap();
        assert!(!render);
    }

    #[test]
    fn open_and_back() {
        let mut state = loaded();
        handle_event(&mut state, &Event::KeyDown).unwrap();
        handle_event(&mut state, &Event::OpenDoctor).unwrap();
        assert_eq!(state.browser.route.doctor_id(), Some("b"));

        let (render, _) = handle_event(&mut state, &Event::SearchMode).unwrap();
        assert!(!render);

        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.browser.route.doctor_id(), None);
        assert_eq!(state.browser.selected_index, 1);
    }

    #[test]
    fn enter_on_empty_search_leaves_search() {
        let mut state = loaded();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        type_text(&mut state, "zzz");
        handle_event(&mut state, &Event::OpenDoctor).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.browser.search_query.is_empty());
    }

    #[test]
    fn token_entry_flow() {
        let mut state = loaded();
        handle_event(&mut state, &Event::TokenEntry).unwrap();
        type_text(&mut state, "tok-9");
        let (_, actions) = handle_event(&mut state, &Event::SubmitToken).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.context.token.as_deref(), Some("tok-9"));
        assert_eq!(
            actions,
            vec![
                Action::persist_token(Some("tok-9".to_string())),
                Action::Fetch(ApiRequest::user_profile(BASE, "tok-9")),
            ]
        );

        deliver(
            &mut state,
            RequestKind::UserProfile,
            br#"{"success":true,"userData":{"name":"Asha"}}"#,
        );
        assert_eq!(state.context.profile.profile().map(|p| p.name.as_str()), Some("Asha"));

        let (_, actions) = handle_event(&mut state, &Event::SignOut).unwrap();
        assert_eq!(state.context.profile, ProfileState::NoUser);
        assert_eq!(actions, vec![Action::persist_token(None)]);
    }

    #[test]
    fn cancel_token_entry_keeps_session() {
        let mut state = loaded();
        handle_event(&mut state, &Event::TokenEntry).unwrap();
        type_text(&mut state, "x");
        handle_event(&mut state, &Event::CancelTokenEntry).unwrap();
        assert_eq!(state.context.token, None);
        assert!(state.token_input.is_empty());
    }

    #[test]
    fn restored_session_loads_profile() {
        let mut state = loaded();
        let (_, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::SessionLoaded {
                token: Some("saved".to_string()),
            }),
        )
        .unwrap();
        assert_eq!(actions, vec![Action::Fetch(ApiRequest::user_profile(BASE, "saved"))]);

        let mut state = loaded();
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::SessionLoaded { token: None }),
        )
        .unwrap();
        assert_eq!(state.context.profile, ProfileState::NoUser);
    }

    #[test]
    fn failures_become_notices() {
        let mut state = loaded();
        handle_event(
            &mut state,
            &Event::WebResponse {
                kind: RequestKind::DoctorList,
                status: 500,
                body: b"boom".to_vec(),
            },
        )
        .unwrap();
        assert_eq!(names(&state).len(), 2);
        assert_eq!(state.context.notices.len(), 1);

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error {
                message: "disk full".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(state.context.notices.len(), 2);

        let (render, _) = handle_event(&mut state, &Event::DismissNotice).unwrap();
        assert!(render);
        assert_eq!(state.context.notices.len(), 1);
    }

    #[test]
    fn reload_refetches() {
        let mut state = loaded();
        let (_, actions) = handle_event(&mut state, &Event::Reload).unwrap();
        assert_eq!(actions, vec![Action::Fetch(ApiRequest::doctor_list(BASE))]);
        assert!(state.context.is_loading);
    }
}
