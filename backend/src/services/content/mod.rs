//! Read-only content endpoints backed by the CMS client.
//!
//! Lists always answer 200 and carry a `source` tag telling callers whether
//! they got live CMS data or the built-in fixtures. Detail lookups answer
//! 404 when neither the CMS nor the fixtures know the record.

mod posts;
mod syllabi;
mod timetables;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/content";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/syllabi", get().to(syllabi::list))
        .route("/syllabi/{level}", get().to(syllabi::detail))
        .route("/posts", get().to(posts::list))
        .route("/posts/{slug}", get().to(posts::detail))
        .route("/timetables", get().to(timetables::list))
}
