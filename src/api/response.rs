//! Backend response envelopes and decoding.
//!
//! Every endpoint answers with `{ "success": bool, ... }`. A transport or
//! decoding problem becomes an `Err`; a well-formed `success: false` becomes
//! [`ApiReply::Rejected`] carrying the backend message.

use crate::domain::error::{DocfinderError, Result};
use crate::domain::{Doctor, UserProfile};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Envelope of `GET /api/doctor/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct DoctorListResponse {
    pub success: bool,
    /// Raw entries, decoded one by one so a malformed record only loses itself.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub doctors: Vec<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope of `GET /api/user/get-profile`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(default, rename = "userData")]
    pub user_data: Option<UserProfile>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Application-level outcome of a request that reached the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply<T> {
    Accepted(T),
    /// `success: false`, with the backend's message if it sent one.
    Rejected(Option<String>),
}

/// Minimal `{ message }` view used to read failure bodies.
#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    message: Option<String>,
}

/// Checks the host-reported status and returns the body as text.
///
/// The host reports transport failures (DNS, refused connections, timeouts)
/// with a non-2xx status and the error text as the body.
///
/// # Errors
///
/// Returns [`DocfinderError::Api`] for any non-2xx status.
fn ensure_success(status: u16, body: &[u8]) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    // Some backends still answer an error status with a JSON envelope.
    if let Ok(envelope) = serde_json::from_slice::<Envelope>(body) {
        if let Some(message) = envelope.message.filter(|m| !m.is_empty()) {
            return Err(DocfinderError::Api(format!("status {status}: {message}")));
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        Err(DocfinderError::Api(format!("status {status}")))
    } else {
        Err(DocfinderError::Api(format!("status {status}: {text}")))
    }
}

fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    ensure_success(status, body)?;
    Ok(serde_json::from_slice(body)?)
}

/// Decodes a directory response.
///
/// Entries that do not decode as a [`Doctor`] are skipped with a warning;
/// the rest of the directory is kept in order.
///
/// # Errors
///
/// Returns an error for non-2xx statuses or bodies that are not a valid envelope.
pub fn parse_doctor_list(status: u16, body: &[u8]) -> Result<ApiReply<Vec<Doctor>>> {
    let response: DoctorListResponse = decode(status, body)?;
    if !response.success {
        return Ok(ApiReply::Rejected(response.message));
    }

    let received = response.doctors.len();
    let doctors: Vec<Doctor> = response
        .doctors
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Doctor>(entry) {
            Ok(doctor) => Some(doctor),
            Err(e) => {
                tracing::warn!(index = index, error = %e, "skipping malformed doctor record");
                None
            }
        })
        .collect();

    if doctors.len() != received {
        tracing::warn!(received = received, kept = doctors.len(), "directory had malformed records");
    }
    Ok(ApiReply::Accepted(doctors))
}

/// Decodes a profile response.
///
/// A `success: true` body without `userData` is treated as a decode error,
/// since there is nothing to store.
///
/// # Errors
///
/// Returns an error for non-2xx statuses, invalid envelopes, or a missing profile.
pub fn parse_profile(status: u16, body: &[u8]) -> Result<ApiReply<UserProfile>> {
    let response: ProfileResponse = decode(status, body)?;
    if !response.success {
        return Ok(ApiReply::Rejected(response.message));
    }
    response
        .user_data
        .map(ApiReply::Accepted)
        .ok_or_else(|| DocfinderError::Api("profile response without userData".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Speciality;

    #[test]
    fn accepted_directory() {
        let body = br#"{"success":true,"doctors":[{"_id":"d1","name":"Dr. A","speciality":"Dermatologist"}]}"#;
        let ApiReply::Accepted(doctors) = parse_doctor_list(200, body).unwrap() else {
            panic!("expected accepted reply");
        };
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].speciality, Speciality::Dermatologist);
    }

    #[test]
    fn malformed_record_does_not_drop_directory() {
        let body = br#"{"success":true,"doctors":[
            {"_id":"bad","name":"Dr. Broken","speciality":"Dermatologist","fees":{"amount":50}},
            {"_id":"d1","name":"Dr. A","speciality":"Dermatologist","image":null},
            {"name":"Dr. No Id","speciality":"Neurologist"},
            {"_id":"d2","name":"Dr. B","speciality":"General physician","fees":"50"}
        ]}"#;
        let ApiReply::Accepted(doctors) = parse_doctor_list(200, body).unwrap() else {
            panic!("expected accepted reply");
        };
        let ids: Vec<&str> = doctors.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d2"]);
    }

    #[test]
    fn rejected_directory_keeps_message() {
        let body = br#"{"success":false,"message":"Database offline"}"#;
        assert_eq!(
            parse_doctor_list(200, body).unwrap(),
            ApiReply::Rejected(Some("Database offline".to_string()))
        );
    }

    #[test]
    fn transport_failure_is_an_error() {
        let err = parse_doctor_list(400, b"error sending request: connection refused").unwrap_err();
        assert!(matches!(err, DocfinderError::Api(ref m) if m.contains("connection refused")));
    }

    #[test]
    fn error_status_prefers_backend_message() {
        let err = parse_profile(401, br#"{"success":false,"message":"Not Authorized Login Again"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Request failed: status 401: Not Authorized Login Again");
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = parse_doctor_list(200, b"<html>").unwrap_err();
        assert!(matches!(err, DocfinderError::Decode(_)));
    }

    #[test]
    fn profile_reply() {
        let body = br#"{"success":true,"userData":{"name":"Asha","email":"asha@example.com"}}"#;
        let ApiReply::Accepted(profile) = parse_profile(200, body).unwrap() else {
            panic!("expected accepted reply");
        };
        assert_eq!(profile.name, "Asha");
        assert!(profile.phone.is_empty());
    }

    #[test]
    fn profile_success_without_data_is_an_error() {
        assert!(parse_profile(200, br#"{"success":true}"#).is_err());
    }
}
