use serde::{Deserialize, Serialize};

/// A prospective user's contact details, submitted in exchange for content
/// access.
///
/// This is the body of `POST /api/leads` exactly as the capture form sends
/// it. All fields deserialize with defaults so that an incomplete submission
/// still reaches the intake handler, which rejects it with the API's own
/// validation error shape instead of a bare deserialization failure.
///
/// Leads are never stored by this application; after validation they are
/// forwarded to the configured mailing platform, which owns durability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Must be `true` for the submission to be accepted.
    #[serde(default)]
    pub consent: bool,
    /// Optional attribution tag, e.g. which page hosted the capture form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// The record the client caches in localStorage after a successful
/// submission. A convenience for the UI only; the server-issued cookie is
/// the authoritative gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredLead {
    pub email: String,
    pub name: String,
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,
}
