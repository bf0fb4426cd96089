//! Backend REST API surface.
//!
//! Request construction and response decoding for the two endpoints the
//! plugin consumes. Transport is owned by the Zellij host; this module only
//! describes requests and interprets what comes back.
//!
//! - [`request`]: URL, header, and correlation-tag construction
//! - [`response`]: Envelope decoding and failure classification

pub mod request;
pub mod response;

pub use request::{ApiRequest, RequestKind};
pub use response::{parse_doctor_list, parse_profile, ApiReply};
