//! Outbound request descriptions.
//!
//! The application layer never performs HTTP itself. It produces an
//! [`ApiRequest`] and the plugin shim hands it to the host's `web_request`
//! call. The request kind travels in the host context map under
//! [`REQUEST_CONTEXT_KEY`] so the eventual response can be routed back.

use std::collections::BTreeMap;
use std::fmt;

/// Host context key carrying the [`RequestKind`] tag.
pub const REQUEST_CONTEXT_KEY: &str = "request";

/// Path of the doctor directory endpoint.
pub const DOCTOR_LIST_PATH: &str = "/api/doctor/list";

/// Path of the user profile endpoint.
pub const USER_PROFILE_PATH: &str = "/api/user/get-profile";

/// Header carrying the session token on authenticated calls.
pub const TOKEN_HEADER: &str = "token";

/// Which backend call a request or response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    DoctorList,
    UserProfile,
}

impl RequestKind {
    /// Stable tag used in the host context map.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::DoctorList => "doctor_list",
            Self::UserProfile => "user_profile",
        }
    }

    /// Parses a tag produced by [`RequestKind::tag`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "doctor_list" => Some(Self::DoctorList),
            "user_profile" => Some(Self::UserProfile),
            _ => None,
        }
    }

    /// Reads the kind back out of a host context map.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        context
            .get(REQUEST_CONTEXT_KEY)
            .and_then(|tag| Self::from_tag(tag))
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A GET request ready to be issued by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub kind: RequestKind,
    pub url: String,
    pub headers: BTreeMap<String, String>,
}

impl ApiRequest {
    /// Builds the directory listing request.
    #[must_use]
    pub fn doctor_list(base_url: &str) -> Self {
        Self {
            kind: RequestKind::DoctorList,
            url: format!("{base_url}{DOCTOR_LIST_PATH}"),
            headers: BTreeMap::new(),
        }
    }

    /// Builds the profile request, attaching the session token header.
    #[must_use]
    pub fn user_profile(base_url: &str, token: &str) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(TOKEN_HEADER.to_string(), token.to_string());
        Self {
            kind: RequestKind::UserProfile,
            url: format!("{base_url}{USER_PROFILE_PATH}"),
            headers,
        }
    }

    /// Context map to hand to the host so the response can be correlated.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(REQUEST_CONTEXT_KEY.to_string(), self.kind.tag().to_string());
        context
    }
}
