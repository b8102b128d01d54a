use actix_web::{web, HttpResponse, Responder};

use common::model::syllabus::Level;
use common::responses::{ContentItem, ErrorBody};

use crate::state::AppState;

pub async fn list(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.content.syllabi().await)
}

/// Detail by paper code. An unknown code is a 404, not a 400: the path
/// names a resource that simply does not exist.
pub async fn detail(path: web::Path<String>, state: web::Data<AppState>) -> HttpResponse {
    let Ok(level) = path.into_inner().parse::<Level>() else {
        return not_found();
    };
    let (syllabus, source) = state.content.syllabus_by_level(level).await;
    match syllabus {
        Some(data) => HttpResponse::Ok().json(ContentItem { data, source }),
        None => not_found(),
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody {
        success: None,
        error: "Syllabus not found".to_string(),
        requires_lead: None,
    })
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::content::ContentSource;
    use common::model::syllabus::{Level, Syllabus};
    use common::responses::{ContentItem, ContentList, ErrorBody};

    use crate::services::content::configure_routes;
    use crate::state::test_state;

    #[actix_web::test]
    async fn list_serves_fixtures_when_cms_is_down() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(None))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/content/syllabi")
            .to_request();
        let list: ContentList<Syllabus> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list.source, ContentSource::Fixture);
        assert_eq!(list.data.len(), 7);
    }

    #[actix_web::test]
    async fn detail_finds_known_levels_case_insensitively() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(None))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/content/syllabi/F1")
            .to_request();
        let item: ContentItem<Syllabus> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(item.data.level, Level::F1);
        assert_eq!(item.source, ContentSource::Fixture);
    }

    #[actix_web::test]
    async fn unknown_level_is_a_404() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(None))
                .service(configure_routes()),
        )
        .await;

        // f9 parses but has no fixture; zz does not even parse.
        for code in ["f9", "zz"] {
            let req = test::TestRequest::get()
                .uri(&format!("/api/content/syllabi/{code}"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{code}");

            let body: ErrorBody = test::read_body_json(resp).await;
            assert_eq!(body.error, "Syllabus not found");
        }
    }
}
