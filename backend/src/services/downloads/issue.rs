use actix_web::{web, HttpRequest, HttpResponse};
use log::{info, warn};
use serde::Deserialize;

use common::model::syllabus::Level;
use common::responses::DownloadGrant;

use crate::error::ApiError;
use crate::services::leads::{GATE_COOKIE, GATE_VALUE};
use crate::state::AppState;
use crate::storage::ObjectStore;

/// Validity window of every issued URL, in seconds. Long enough for a slow
/// connection to start the transfer, short enough that shared links go
/// stale quickly.
const DOWNLOAD_TTL_SECS: u64 = 900;

#[derive(Deserialize)]
pub struct DownloadQuery {
    #[serde(default)]
    level: String,
}

pub async fn process(
    req: HttpRequest,
    query: web::Query<DownloadQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let raw = query.into_inner().level;
    if raw.trim().is_empty() {
        return Err(ApiError::BadRequest("Syllabus level is required".to_string()));
    }
    let level: Level = raw
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Unknown syllabus level: {raw}")))?;

    // The cookie is the authority. A client-side marker that says otherwise
    // is simply wrong and gets a 403 like everyone else.
    let gated = req
        .cookie(GATE_COOKIE)
        .map(|cookie| cookie.value() == GATE_VALUE)
        .unwrap_or(false);
    if !gated {
        return Err(ApiError::LeadRequired);
    }

    let key = storage_key(level);
    let url = if state.storage.is_configured() {
        state.storage.signed_download_url(&key, DOWNLOAD_TTL_SECS)?
    } else {
        warn!("object store not configured, issuing placeholder URL for {key}");
        ObjectStore::placeholder_url(&key)
    };

    info!("download grant issued for {level}, valid {DOWNLOAD_TTL_SECS}s");

    Ok(HttpResponse::Ok().json(DownloadGrant {
        success: true,
        url,
        level,
        expires_in: DOWNLOAD_TTL_SECS,
    }))
}

/// Object key for a paper. Derived from the parsed level, never from raw
/// request input, so no request can address objects outside `syllabus/`.
fn storage_key(level: Level) -> String {
    format!("syllabus/{level}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::responses::ErrorBody;
    use serde_json::json;

    use crate::config::StorageSettings;
    use crate::state::test_state;

    fn r2_settings() -> StorageSettings {
        StorageSettings {
            endpoint: "https://acct-id.r2.cloudflarestorage.com".to_string(),
            access_key_id: "test-access-key".to_string(),
            secret_access_key: "test-secret-key".to_string(),
            bucket: "acca-syllabus".to_string(),
        }
    }

    fn gate() -> Cookie<'static> {
        Cookie::new(GATE_COOKIE, GATE_VALUE)
    }

    #[actix_web::test]
    async fn ungated_request_gets_403_with_lead_flag() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(Some(r2_settings())))
                .service(crate::services::downloads::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/download?level=f1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.requires_lead, Some(true));
        assert_eq!(body.error, "Please submit the lead form to access downloads");
    }

    #[actix_web::test]
    async fn gated_request_gets_a_signed_grant() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(Some(r2_settings())))
                .service(crate::services::downloads::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/download?level=F5")
            .cookie(gate())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let grant: DownloadGrant = test::read_body_json(resp).await;
        assert!(grant.success);
        assert_eq!(grant.level, Level::F5);
        assert_eq!(grant.expires_in, 900);
        // Level code is normalized before it reaches the object key.
        assert!(grant
            .url
            .starts_with("https://acct-id.r2.cloudflarestorage.com/acca-syllabus/syllabus/f5.pdf?"));
        assert!(grant.url.contains("X-Amz-Expires=900"));
    }

    #[actix_web::test]
    async fn level_is_checked_before_the_gate() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(Some(r2_settings())))
                .service(crate::services::downloads::configure_routes()),
        )
        .await;

        // Unknown level with no cookie: the 400 wins over the 403.
        for uri in [
            "/api/download",
            "/api/download?level=",
            "/api/download?level=f4",
            "/api/download?level=..%2F..%2Fetc%2Fpasswd",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");

            let body: ErrorBody = test::read_body_json(resp).await;
            assert_eq!(body.requires_lead, None, "{uri}");
        }
    }

    #[actix_web::test]
    async fn unconfigured_store_yields_placeholder_grant() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(None))
                .service(crate::services::downloads::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/download?level=p7")
            .cookie(gate())
            .to_request();
        let grant: DownloadGrant = test::call_and_read_body_json(&app, req).await;
        assert!(grant.success);
        assert_eq!(
            grant.url,
            "https://storage-not-configured.invalid/syllabus/p7.pdf"
        );
    }

    #[actix_web::test]
    async fn broken_store_config_yields_500() {
        let mut settings = r2_settings();
        settings.endpoint = "not-an-origin".to_string();
        let app = test::init_service(
            App::new()
                .app_data(test_state(Some(settings)))
                .service(crate::services::downloads::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/download?level=f1")
            .cookie(gate())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Failed to generate download URL");
    }

    #[actix_web::test]
    async fn intake_cookie_unlocks_the_download() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(Some(r2_settings())))
                .service(crate::services::leads::configure_routes())
                .service(crate::services::downloads::configure_routes()),
        )
        .await;

        // Locked before intake.
        let req = test::TestRequest::get()
            .uri("/api/download?level=f2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        // Submit the form, keep the cookie it sets.
        let req = test::TestRequest::post()
            .uri("/api/leads")
            .set_json(json!({
                "email": "student@example.com",
                "name": "Test Student",
                "consent": true
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == GATE_COOKIE)
            .expect("gate cookie missing")
            .into_owned();

        // Same request again, now carrying the credential.
        let req = test::TestRequest::get()
            .uri("/api/download?level=f2")
            .cookie(cookie)
            .to_request();
        let grant: DownloadGrant = test::call_and_read_body_json(&app, req).await;
        assert!(grant.success);
        assert_eq!(grant.level, Level::F2);
        assert!(grant.url.contains("/acca-syllabus/syllabus/f2.pdf?"));
    }
}
