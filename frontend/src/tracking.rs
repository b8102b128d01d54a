//! Local consent marker.
//!
//! Remembers in `localStorage` that this browser already went through the
//! capture form, so the UI can skip straight to requesting a download. This
//! is a hint, nothing more: the download issuer only trusts its own cookie,
//! so a stale or hand-crafted marker buys an extra round trip and a 403,
//! never a download.
//!
//! Storage failures (private mode, disabled storage) are logged and
//! swallowed; the flow keeps working, the browser just forgets.

use gloo_console::error;
use web_sys::Storage;

use common::model::lead::StoredLead;

const LEAD_SUBMITTED_KEY: &str = "leadSubmitted";
const LEAD_DATA_KEY: &str = "leadData";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Whether this browser has completed the capture form before.
pub fn has_submitted_lead() -> bool {
    match local_storage().map(|storage| storage.get_item(LEAD_SUBMITTED_KEY)) {
        Some(Ok(value)) => value.as_deref() == Some("true"),
        _ => false,
    }
}

/// Records a successful submission together with a timestamped copy of the
/// submitted identity.
pub fn mark_lead_submitted(email: &str, name: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    if storage.set_item(LEAD_SUBMITTED_KEY, "true").is_err() {
        error!("failed to persist the consent marker");
        return;
    }

    let record = StoredLead {
        email: email.to_string(),
        name: name.to_string(),
        submitted_at: String::from(js_sys::Date::new_0().to_iso_string()),
    };
    match serde_json::to_string(&record) {
        Ok(json) => {
            if storage.set_item(LEAD_DATA_KEY, &json).is_err() {
                error!("failed to persist the lead record");
            }
        }
        Err(err) => error!("failed to encode the lead record:", err.to_string()),
    }
}

/// The cached record of the last submission, if this browser has one and it
/// still parses.
pub fn stored_lead() -> Option<StoredLead> {
    let json = local_storage()?.get_item(LEAD_DATA_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clears the marker and the cached record. The server-side cookie is
/// untouched; this only makes the UI forget.
pub fn clear_tracking_data() {
    let Some(storage) = local_storage() else {
        return;
    };
    for key in [LEAD_SUBMITTED_KEY, LEAD_DATA_KEY] {
        if storage.remove_item(key).is_err() {
            error!("failed to clear tracking key:", key);
        }
    }
}
