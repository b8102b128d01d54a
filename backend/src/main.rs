mod cms;
mod config;
mod error;
mod fixtures;
mod mailing;
mod services;
mod state;
mod storage;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;

use crate::config::AppConfig;
use crate::state::AppState;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded frontend bundle. Unknown paths fall back to
/// `index.html` so client-side routes survive a hard refresh.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    let address = format!("{}:{}", config.host, config.port);
    if !config.production {
        info!("running in development mode, gate cookie is not marked Secure");
    }

    let state = web::Data::new(AppState::new(config));

    info!("Server running at http://{}", address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(16 * 1024)) // form payloads are small
            .app_data(state.clone())
            .service(services::leads::configure_routes())
            .service(services::downloads::configure_routes())
            .service(services::content::configure_routes())
            .route("/sitemap.xml", web::get().to(services::sitemap::process))
            .default_service(web::route().to(serve_embedded))
    })
    .bind(&address)?
    .run()
    .await
}
