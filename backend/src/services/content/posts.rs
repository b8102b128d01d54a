use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use common::responses::{ContentItem, ErrorBody};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct PostsQuery {
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

pub async fn list(query: web::Query<PostsQuery>, state: web::Data<AppState>) -> impl Responder {
    let query = query.into_inner();
    HttpResponse::Ok().json(state.content.posts(query.page, query.limit).await)
}

pub async fn detail(path: web::Path<String>, state: web::Data<AppState>) -> HttpResponse {
    let slug = path.into_inner();
    let (post, source) = state.content.post_by_slug(&slug).await;
    match post {
        Some(data) => HttpResponse::Ok().json(ContentItem { data, source }),
        None => HttpResponse::NotFound().json(ErrorBody {
            success: None,
            error: "Post not found".to_string(),
            requires_lead: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::content::ContentSource;
    use common::model::post::BlogPost;
    use common::responses::{ContentItem, ContentList};

    use crate::services::content::configure_routes;
    use crate::state::test_state;

    #[actix_web::test]
    async fn list_and_detail_fall_back_to_fixtures() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(None))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/content/posts?page=1&limit=5")
            .to_request();
        let list: ContentList<BlogPost> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list.source, ContentSource::Fixture);
        assert!(!list.data.is_empty());

        let slug = list.data[0].slug.clone();
        let req = test::TestRequest::get()
            .uri(&format!("/api/content/posts/{slug}"))
            .to_request();
        let item: ContentItem<BlogPost> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(item.data.slug, slug);
    }

    #[actix_web::test]
    async fn unknown_slug_is_a_404() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(None))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/content/posts/no-such-post")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
