//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Docfinder library and the Zellij host:
//! it turns host events into [`docfinder::Event`]s and carries out the
//! [`Action`]s the library returns.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │      web_request
//! │  │  State (plugin)  │───┼──────────────────▶ backend
//! │  └──────────────────┘   │◀─────────────────
//! │          │ IPC          │   WebRequestResult
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  SessionWorker   │   │  ← session file I/O
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! Global: `Ctrl+n` / `Ctrl+p` move down / up.
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: move
//! - `Enter`: open doctor
//! - `1`-`6`: toggle specialty
//! - `/`: search
//! - `r`: reload directory
//! - `t`: enter token, `L`: sign out
//! - `c`: dismiss notice
//! - `Esc`/`Backspace`: back from a doctor profile
//! - `q`: close
//!
//! Search mode: type to filter, `Enter` jumps to results (then opens the
//! selected doctor), `/` returns to the query, `Esc` leaves search.
//!
//! Token prompt: type, `Enter` applies, `Esc` cancels.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use docfinder::api::RequestKind;
use docfinder::worker::{SessionWorker, WorkerMessage, WorkerResponse};
use docfinder::{handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);
register_worker!(SessionWorker, session_worker, SESSION_WORKER);

/// Name shared by the worker registration and its IPC messages.
const WORKER_NAME: &str = "session";

/// Plugin state wrapper.
struct State {
    app: docfinder::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: docfinder::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, installs tracing, asks for web access and
    /// subscribes to events. Fetching waits for the permission result.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let (config, config_error) = match Config::from_zellij(&configuration) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        };
        docfinder::observability::init_tracing(&config);

        let _span = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(backend_url = %config.backend_url, "parsed configuration");

        self.app = docfinder::initialize(&config);
        if let Some(e) = config_error {
            self.app
                .context
                .notices
                .warn(format!("{e}; using {}", config.backend_url));
        }

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"));
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                tracing::debug!("web access granted");
                Event::Start
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                tracing::warn!("web access denied");
                Event::PermissionsDenied
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        docfinder::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(_) => "Key".to_string(),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps a key press to an application event for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::TokenEntry => Some(match key.bare_key {
                BareKey::Enter => Event::SubmitToken,
                BareKey::Esc => Event::CancelTokenEntry,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Search(SearchFocus::Typing) => Some(match key.bare_key {
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Enter => Event::FocusResults,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Search(SearchFocus::Navigating) => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter => Event::OpenDoctor,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Char('/') => Event::FocusSearchBar,
                BareKey::Backspace => Event::Backspace,
                _ => return None,
            }),
            InputMode::Normal => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter => Event::OpenDoctor,
                BareKey::Esc | BareKey::Backspace => Event::Back,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('r') => Event::Reload,
                BareKey::Char('t') => Event::TokenEntry,
                BareKey::Char('L') => Event::SignOut,
                BareKey::Char('c') => Event::DismissNotice,
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Char(c @ '1'..='9') => Event::ToggleSpeciality(c as usize - '0' as usize),
                _ => return None,
            }),
        }
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }
        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn map_web_result_event(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(kind) = RequestKind::from_context(context) else {
            tracing::warn!(status = status, "web response without a known request kind");
            return None;
        };
        Some(Event::WebResponse { kind, status, body })
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => post_message_to(PluginMessage {
                worker_name: Some(WORKER_NAME.to_string()),
                name: WORKER_NAME.to_string(),
                payload,
            }),
            Err(e) => tracing::warn!(error = %e, "failed to serialize worker message"),
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::Fetch(request) => {
                tracing::debug!(request = %request.kind, url = %request.url, "issuing web request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    request.headers.clone(),
                    vec![],
                    request.context(),
                );
            }
            Action::PostToWorker(message) => Self::post_worker_message(message),
        }
    }
}
