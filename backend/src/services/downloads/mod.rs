//! Gated download issuing.
//!
//! Flow:
//! 1. The client asks for a syllabus level.
//! 2. The level must parse into a known paper code, otherwise 400.
//! 3. The gate cookie set by lead intake must be present, otherwise 403
//!    with `requiresLead: true` so the client opens the capture form.
//! 4. A presigned URL for the paper's PDF is minted and returned together
//!    with its validity window.
//!
//! Nothing is persisted per download; the authorization lives entirely in
//! the signed URL.

mod issue;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/download";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(issue::process))
}
