//! Shared application context.
//!
//! [`AppContext`] is the single store behind every screen: backend base URL,
//! session token, loading flag, doctor directory, user profile, ratings, and
//! notices. Operations never perform I/O. They return [`Action`]s that the
//! plugin runtime executes, and responses come back through
//! [`AppContext::apply_response`].

use crate::api::{self, ApiReply, ApiRequest, RequestKind};
use crate::app::notice::Notices;
use crate::app::Action;
use crate::domain::{generate_ratings, Doctor, ProfileState, Rating, RatingMap};
use rand::Rng;
use std::collections::HashSet;

/// Message shown when the backend rejects a directory fetch without a reason.
const DIRECTORY_REJECTED: &str = "Unable to load doctors";

/// Message shown when the backend rejects a profile fetch without a reason.
const PROFILE_REJECTED: &str = "Unable to load profile";

/// Shared state owned by the plugin for its whole lifetime.
#[derive(Debug, Clone)]
pub struct AppContext {
    base_url: String,

    /// Session token; `None` when signed out.
    pub token: Option<String>,

    /// `true` between issuing a request and receiving any response.
    ///
    /// Last writer wins: with overlapping requests the first response clears
    /// it.
    pub is_loading: bool,

    /// Doctor directory in backend order, keywords attached, ids unique.
    doctors: Vec<Doctor>,

    /// Bumped on every directory replacement.
    directory_generation: u64,

    pub profile: ProfileState,

    /// One cosmetic rating per directory entry.
    ratings: RatingMap,

    pub notices: Notices,
}

impl AppContext {
    /// Creates an empty, signed-out context for `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            is_loading: false,
            doctors: Vec::new(),
            directory_generation: 0,
            profile: ProfileState::NotLoaded,
            ratings: RatingMap::new(),
            notices: Notices::default(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Generation of the current directory, for memoized views.
    #[must_use]
    pub const fn directory_generation(&self) -> u64 {
        self.directory_generation
    }

    #[must_use]
    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|doc| doc.id == id)
    }

    #[must_use]
    pub fn rating(&self, id: &str) -> Option<Rating> {
        self.ratings.get(id).copied()
    }

    #[must_use]
    pub const fn ratings(&self) -> &RatingMap {
        &self.ratings
    }

    fn fetch(&mut self, request: ApiRequest) -> Action {
        tracing::debug!(request = %request.kind, url = %request.url, "issuing request");
        self.is_loading = true;
        Action::Fetch(request)
    }

    /// Requests the doctor directory.
    pub fn load_doctors(&mut self) -> Vec<Action> {
        let request = ApiRequest::doctor_list(&self.base_url);
        vec![self.fetch(request)]
    }

    /// Requests the profile for the current token.
    ///
    /// Without a token there is nothing to ask for and no action is returned.
    pub fn load_user_profile(&mut self) -> Vec<Action> {
        let Some(token) = self.token.as_deref() else {
            tracing::debug!("no token, skipping profile load");
            return vec![];
        };
        let request = ApiRequest::user_profile(&self.base_url, token);
        vec![self.fetch(request)]
    }

    /// Stores and persists a new token, then loads its profile.
    ///
    /// The value is stored exactly as given. A blank value signs out instead.
    pub fn set_token(&mut self, value: &str) -> Vec<Action> {
        if value.trim().is_empty() {
            return self.clear_session();
        }

        tracing::info!("session token set");
        self.token = Some(value.to_string());
        let mut actions = vec![Action::persist_token(self.token.clone())];
        actions.extend(self.load_user_profile());
        actions
    }

    /// Signs out: forgets and un-persists the token and marks the user absent.
    pub fn clear_session(&mut self) -> Vec<Action> {
        tracing::info!("session cleared");
        self.token = None;
        self.profile = ProfileState::NoUser;
        vec![Action::persist_token(None)]
    }

    /// Applies the token read from storage at startup, without persisting it again.
    pub fn restore_session(&mut self, token: Option<String>) -> Vec<Action> {
        match token.filter(|t| !t.trim().is_empty()) {
            Some(token) => {
                tracing::debug!("restored session token");
                self.token = Some(token);
                self.load_user_profile()
            }
            None => {
                tracing::debug!("no persisted session");
                self.token = None;
                self.profile = ProfileState::NoUser;
                vec![]
            }
        }
    }

    /// Replaces the directory using the thread RNG for ratings.
    pub fn replace_directory(&mut self, doctors: Vec<Doctor>) {
        self.replace_directory_with(doctors, &mut rand::thread_rng());
    }

    /// Replaces the directory and regenerates every rating from `rng`.
    ///
    /// Keywords are attached from the specialty table. Later entries that
    /// repeat an earlier id are dropped.
    pub fn replace_directory_with<R: Rng>(&mut self, doctors: Vec<Doctor>, rng: &mut R) {
        let received = doctors.len();
        let mut seen = HashSet::with_capacity(received);
        let doctors: Vec<Doctor> = doctors
            .into_iter()
            .filter(|doc| seen.insert(doc.id.clone()))
            .map(Doctor::with_keywords)
            .collect();

        if doctors.len() != received {
            tracing::warn!(
                received = received,
                kept = doctors.len(),
                "dropped doctors with duplicate ids"
            );
        }

        self.doctors = doctors;
        self.directory_generation += 1;
        self.regenerate_ratings(rng);

        tracing::debug!(
            doctor_count = self.doctors.len(),
            generation = self.directory_generation,
            "directory replaced"
        );
    }

    /// Draws a fresh rating for every doctor in the directory.
    pub fn regenerate_ratings<R: Rng>(&mut self, rng: &mut R) {
        self.ratings = generate_ratings(&self.doctors, rng);
    }

    /// Applies a backend response to the context.
    ///
    /// Clears the loading flag whatever the outcome. Failures only push a
    /// notice; the directory and profile keep their previous values.
    pub fn apply_response(&mut self, kind: RequestKind, status: u16, body: &[u8]) {
        let _span = tracing::debug_span!("apply_response", request = %kind, status = status).entered();
        self.is_loading = false;

        match kind {
            RequestKind::DoctorList => match api::parse_doctor_list(status, body) {
                Ok(ApiReply::Accepted(doctors)) => self.replace_directory(doctors),
                Ok(ApiReply::Rejected(message)) => {
                    self.notices
                        .error(message.unwrap_or_else(|| DIRECTORY_REJECTED.to_string()));
                }
                Err(e) => self.notices.error(format!("Failed to load doctors: {e}")),
            },
            RequestKind::UserProfile => match api::parse_profile(status, body) {
                Ok(ApiReply::Accepted(profile)) => {
                    tracing::debug!("profile loaded");
                    self.profile = ProfileState::Loaded(profile);
                }
                Ok(ApiReply::Rejected(message)) => {
                    self.notices
                        .error(message.unwrap_or_else(|| PROFILE_REJECTED.to_string()));
                }
                Err(e) => self.notices.error(format!("Failed to load profile: {e}")),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Speciality;
    use crate::worker::WorkerMessage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BASE: &str = "http://api.test";

    const DIRECTORY: &[u8] = br#"{"success":true,"doctors":[
        {"_id":"a","name":"Dr. A","speciality":"Dermatologist","available":true},
        {"_id":"b","name":"Dr. B","speciality":"General physician"},
        {"_id":"c","name":"Dr. C","speciality":"Cardiologist"}
    ]}"#;

    fn loaded() -> AppContext {
        let mut ctx = AppContext::new(BASE);
        ctx.load_doctors();
        ctx.apply_response(RequestKind::DoctorList, 200, DIRECTORY);
        ctx
    }

    fn ids(ctx: &AppContext) -> HashSet<String> {
        ctx.doctors().iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn load_doctors_fetches_and_sets_loading() {
        let mut ctx = AppContext::new(BASE);
        let actions = ctx.load_doctors();
        assert!(ctx.is_loading);
        assert_eq!(actions, vec![Action::Fetch(ApiRequest::doctor_list(BASE))]);
    }

    #[test]
    fn malformed_doctor_keeps_rest_of_directory() {
        let mut ctx = AppContext::new(BASE);
        ctx.apply_response(
            RequestKind::DoctorList,
            200,
            br#"{"success":true,"doctors":[
                {"_id":"x","name":"Dr. X","speciality":"Dermatologist","available":"maybe"},
                {"_id":"a","name":"Dr. A","speciality":"Dermatologist","image":null}
            ]}"#,
        );

        assert_eq!(ctx.doctors().len(), 1);
        assert_eq!(ctx.doctors()[0].id, "a");
        assert!(ctx.doctors()[0].keywords.iter().any(|k| k == "acne"));
        assert_eq!(ctx.ratings().len(), 1);
        assert!(ctx.notices.is_empty());
    }

    #[test]
    fn directory_response_enriches_and_rates() {
        let ctx = loaded();
        assert!(!ctx.is_loading);
        assert_eq!(ctx.doctors().len(), 3);
        assert_eq!(ctx.directory_generation(), 1);

        let derm = ctx.doctor("a").unwrap();
        assert!(derm.keywords.iter().any(|k| k == "acne"));
        assert!(ctx.doctor("c").unwrap().keywords.is_empty());
        assert_eq!(ctx.doctor("c").unwrap().speciality, Speciality::from("Cardiologist"));

        let rated: HashSet<String> = ctx.ratings().keys().cloned().collect();
        assert_eq!(rated, ids(&ctx));
    }

    #[test]
    fn replacement_regenerates_ratings_for_new_ids() {
        let mut ctx = loaded();
        let mut rng = StdRng::seed_from_u64(3);
        ctx.replace_directory_with(vec![Doctor::new("z", "Dr. Z", "Neurologist")], &mut rng);

        assert_eq!(ctx.ratings().len(), 1);
        assert!(ctx.rating("z").is_some());
        assert!(ctx.rating("a").is_none());
        assert_eq!(ctx.directory_generation(), 2);

        ctx.replace_directory_with(vec![], &mut rng);
        assert!(ctx.ratings().is_empty());
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let mut ctx = AppContext::new(BASE);
        let mut rng = StdRng::seed_from_u64(1);
        ctx.replace_directory_with(
            vec![
                Doctor::new("a", "First", "Dermatologist"),
                Doctor::new("a", "Second", "Neurologist"),
            ],
            &mut rng,
        );
        assert_eq!(ctx.doctors().len(), 1);
        assert_eq!(ctx.doctors()[0].name, "First");
    }

    #[test]
    fn rejected_directory_keeps_state_and_notifies() {
        let mut ctx = loaded();
        ctx.load_doctors();
        ctx.apply_response(RequestKind::DoctorList, 200, br#"{"success":false,"message":"Down"}"#);

        assert!(!ctx.is_loading);
        assert_eq!(ctx.doctors().len(), 3);
        assert_eq!(ctx.directory_generation(), 1);
        assert_eq!(ctx.notices.len(), 1);
        assert_eq!(ctx.notices.latest().unwrap().message, "Down");
    }

    #[test]
    fn rejected_directory_without_message_uses_default() {
        let mut ctx = AppContext::new(BASE);
        ctx.apply_response(RequestKind::DoctorList, 200, br#"{"success":false}"#);
        assert_eq!(ctx.notices.latest().unwrap().message, DIRECTORY_REJECTED);
    }

    #[test]
    fn transport_failure_keeps_state_and_notifies() {
        let mut ctx = loaded();
        ctx.apply_response(RequestKind::DoctorList, 503, b"connection refused");

        assert_eq!(ctx.doctors().len(), 3);
        assert_eq!(ctx.notices.len(), 1);
        assert!(ctx.notices.latest().unwrap().message.contains("connection refused"));
    }

    #[test]
    fn profile_requires_token() {
        let mut ctx = AppContext::new(BASE);
        assert!(ctx.load_user_profile().is_empty());
        assert!(!ctx.is_loading);
    }

    #[test]
    fn set_token_persists_and_loads_profile() {
        let mut ctx = AppContext::new(BASE);
        let actions = ctx.set_token("tok-1");

        assert_eq!(ctx.token.as_deref(), Some("tok-1"));
        assert_eq!(
            actions,
            vec![
                Action::PostToWorker(WorkerMessage::save_session(Some("tok-1".to_string()))),
                Action::Fetch(ApiRequest::user_profile(BASE, "tok-1")),
            ]
        );
        assert!(ctx.is_loading);

        ctx.apply_response(
            RequestKind::UserProfile,
            200,
            br#"{"success":true,"userData":{"name":"Asha"}}"#,
        );
        assert_eq!(ctx.profile.profile().map(|p| p.name.as_str()), Some("Asha"));
        assert!(!ctx.is_loading);
    }

    #[test]
    fn set_token_keeps_value_verbatim() {
        let mut ctx = AppContext::new(BASE);
        let actions = ctx.set_token(" tok-2 ");

        assert_eq!(ctx.token.as_deref(), Some(" tok-2 "));
        assert_eq!(
            actions[0],
            Action::PostToWorker(WorkerMessage::save_session(Some(" tok-2 ".to_string())))
        );
        assert_eq!(actions[1], Action::Fetch(ApiRequest::user_profile(BASE, " tok-2 ")));
    }

    #[test]
    fn blank_token_clears_session() {
        let mut ctx = AppContext::new(BASE);
        ctx.set_token("tok");
        let actions = ctx.set_token("   ");
        assert_eq!(ctx.token, None);
        assert_eq!(ctx.profile, ProfileState::NoUser);
        assert_eq!(actions, vec![Action::persist_token(None)]);
    }

    #[test]
    fn clear_session_marks_no_user() {
        let mut ctx = AppContext::new(BASE);
        ctx.set_token("tok");
        ctx.apply_response(
            RequestKind::UserProfile,
            200,
            br#"{"success":true,"userData":{"name":"Asha"}}"#,
        );

        let actions = ctx.clear_session();
        assert_eq!(ctx.token, None);
        assert_eq!(ctx.profile, ProfileState::NoUser);
        assert_eq!(actions, vec![Action::persist_token(None)]);
    }

    #[test]
    fn failed_profile_keeps_previous_profile() {
        let mut ctx = AppContext::new(BASE);
        ctx.set_token("tok");
        ctx.apply_response(
            RequestKind::UserProfile,
            200,
            br#"{"success":true,"userData":{"name":"Asha"}}"#,
        );

        ctx.apply_response(RequestKind::UserProfile, 401, br#"{"success":false,"message":"Not Authorized"}"#);
        assert_eq!(ctx.profile.profile().map(|p| p.name.as_str()), Some("Asha"));
        assert_eq!(ctx.notices.len(), 1);

        ctx.apply_response(RequestKind::UserProfile, 200, br#"{"success":false}"#);
        assert_eq!(ctx.notices.latest().unwrap().message, PROFILE_REJECTED);
    }

    #[test]
    fn restore_session_does_not_persist() {
        let mut ctx = AppContext::new(BASE);
        let actions = ctx.restore_session(Some("tok".to_string()));
        assert_eq!(actions, vec![Action::Fetch(ApiRequest::user_profile(BASE, "tok"))]);

        let mut ctx = AppContext::new(BASE);
        assert!(ctx.restore_session(None).is_empty());
        assert_eq!(ctx.profile, ProfileState::NoUser);
    }
}
