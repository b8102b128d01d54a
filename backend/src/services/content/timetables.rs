use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct TimetablesQuery {
    /// Optional session label filter, e.g. `June 2026`.
    session: Option<String>,
}

pub async fn list(
    query: web::Query<TimetablesQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let session = query.into_inner().session;
    HttpResponse::Ok().json(state.content.timetables(session.as_deref()).await)
}
