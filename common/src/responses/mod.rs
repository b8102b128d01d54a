//! Response payloads shared between the backend handlers that produce them
//! and the frontend code that consumes them. Field names here are the wire
//! contract; renames keep the JSON camelCase the original API clients
//! expect.

use serde::{Deserialize, Serialize};

use crate::model::content::ContentSource;
use crate::model::syllabus::Level;

/// Success body of `POST /api/leads`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadSubmitted {
    pub success: bool,
    pub message: String,
    /// Which mailing platform accepted the contact, when one did. Omitted
    /// when none is configured or all forwarding attempts failed; the
    /// submission itself still succeeds in that case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Body of `GET /api/leads`: whether this client holds the gate cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateStatus {
    pub submitted: bool,
}

/// A freshly minted, time-limited download authorization.
///
/// `expires_in` always reports the signing window literally (in seconds) so
/// the client can plan a retry before the URL lapses. The grant is never
/// persisted anywhere; the expiry lives inside the signed URL itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadGrant {
    pub success: bool,
    pub url: String,
    pub level: Level,
    #[serde(rename = "expiresIn")]
    pub expires_in: u64,
}

/// Error body for every API endpoint.
///
/// The exact shape varies by endpoint: lead intake includes
/// `success: false`, the download issuer's 403 carries `requiresLead: true`
/// so the client knows to run the capture flow instead of retrying blindly.
/// Optional fields are omitted from the JSON when unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub error: String,
    #[serde(
        default,
        rename = "requiresLead",
        skip_serializing_if = "Option::is_none"
    )]
    pub requires_lead: Option<bool>,
}

/// A CMS-backed list payload, tagged with where the data came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentList<T> {
    pub data: Vec<T>,
    pub source: ContentSource,
}

/// A single CMS-backed record with the same source tag as [`ContentList`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem<T> {
    pub data: T,
    pub source: ContentSource,
}
