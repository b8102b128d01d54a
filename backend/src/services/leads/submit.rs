use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{web, HttpResponse};
use log::{error, info, warn};
use regex::Regex;

use common::model::lead::Lead;
use common::responses::LeadSubmitted;

use crate::error::ApiError;
use crate::mailing::MailingError;
use crate::state::AppState;

/// Cookie that marks a browser as having passed the lead gate. The download
/// issuer trusts this cookie, not anything the client stores locally.
pub(crate) const GATE_COOKIE: &str = "leadSubmitted";
pub(crate) const GATE_VALUE: &str = "true";
const GATE_MAX_AGE_SECS: i64 = 31_536_000; // one year

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<Lead>,
) -> Result<HttpResponse, ApiError> {
    let lead = payload.into_inner();
    validate(&lead)?;

    // Forwarding is best-effort: a mailing outage must not block downloads.
    let platform = match state.mailing.add_contact(&lead).await {
        Ok(platform) => {
            info!("lead forwarded to {platform}");
            Some(platform.to_string())
        }
        Err(MailingError::NotConfigured) => {
            warn!("no mailing platform configured, lead accepted without forwarding");
            None
        }
        Err(err) => {
            error!("lead forwarding failed: {err}");
            None
        }
    };

    let body = LeadSubmitted {
        success: true,
        message: "Lead submitted successfully".to_string(),
        platform,
    };
    Ok(HttpResponse::Ok()
        .cookie(gate_cookie(state.production))
        .json(body))
}

fn validate(lead: &Lead) -> Result<(), ApiError> {
    if lead.email.is_empty() || lead.name.is_empty() || !lead.consent {
        return Err(ApiError::Validation("Missing required fields".to_string()));
    }
    let email_shape = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_shape.is_match(&lead.email) {
        return Err(ApiError::Validation("Invalid email format".to_string()));
    }
    Ok(())
}

/// The gate credential set on every successful intake.
///
/// HttpOnly keeps scripts away from it, SameSite=Strict keeps it off
/// cross-site requests, and `Secure` is dropped outside production so the
/// flow works over plain http in development.
pub(crate) fn gate_cookie(production: bool) -> Cookie<'static> {
    Cookie::build(GATE_COOKIE, GATE_VALUE)
        .path("/")
        .max_age(Duration::seconds(GATE_MAX_AGE_SECS))
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(production)
        .finish()
}
