//! Lead intake.
//!
//! Flow:
//! 1. The capture modal POSTs the form here.
//! 2. The payload is validated (email shape, name, explicit consent).
//! 3. The contact is forwarded to the configured mailing platforms;
//!    forwarding failures are logged and swallowed, never surfaced.
//! 4. The response sets the long-lived gate cookie that unlocks downloads.
//!
//! GET on the same path reports whether the caller already holds the
//! cookie, which lets server-rendered pages skip the modal entirely.

mod status;
mod submit;

pub(crate) use submit::{GATE_COOKIE, GATE_VALUE};

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/leads";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(submit::process))
        .route("", get().to(status::process))
}
