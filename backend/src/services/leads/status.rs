use actix_web::{HttpRequest, HttpResponse, Responder};

use common::responses::GateStatus;

use super::{GATE_COOKIE, GATE_VALUE};

/// Reports whether this client already passed the gate. Reads the cookie
/// only; the browser's localStorage marker is invisible to us and
/// deliberately not consulted.
pub async fn process(req: HttpRequest) -> impl Responder {
    let submitted = req
        .cookie(GATE_COOKIE)
        .map(|cookie| cookie.value() == GATE_VALUE)
        .unwrap_or(false);
    HttpResponse::Ok().json(GateStatus { submitted })
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::responses::GateStatus;

    use crate::services::leads::{configure_routes, GATE_COOKIE};
    use crate::state::test_state;

    #[actix_web::test]
    async fn reports_cookie_presence() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(None))
                .service(configure_routes()),
        )
        .await;

        let bare = test::TestRequest::get().uri("/api/leads").to_request();
        let resp = test::call_service(&app, bare).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: GateStatus = test::read_body_json(resp).await;
        assert!(!body.submitted);

        let gated = test::TestRequest::get()
            .uri("/api/leads")
            .cookie(Cookie::new(GATE_COOKIE, "true"))
            .to_request();
        let body: GateStatus = test::call_and_read_body_json(&app, gated).await;
        assert!(body.submitted);
    }

    #[actix_web::test]
    async fn wrong_cookie_value_does_not_count() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(None))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/leads")
            .cookie(Cookie::new(GATE_COOKIE, "yes"))
            .to_request();
        let body: GateStatus = test::call_and_read_body_json(&app, req).await;
        assert!(!body.submitted);
    }
}
