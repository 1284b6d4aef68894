use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use std::sync::Arc;

use seminar_api::config::{EnvConfig, CONFIG};
use seminar_api::db::service::DbService;
use seminar_api::routes::configure_routes;
use seminar_api::state::AppState;
use seminar_api::types::error::{json_error_handler, path_error_handler};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = CONFIG.get_or_init(EnvConfig::from_env);
    let addr = format!("0.0.0.0:{}", config.port);

    // A missing or unreachable database keeps the server up; data
    // endpoints answer 503 until it comes back on the next boot.
    let db = match config.database_url.as_deref() {
        Some(url) => match DbService::new(url).await {
            Ok(service) => Some(Arc::new(service)),
            Err(err) => {
                log::error!("Storage bootstrap failed, serving degraded: {err}");
                None
            }
        },
        None => {
            log::warn!("DATABASE_URL not set, data endpoints will answer 503");
            None
        }
    };
    let state = AppState::new(db, config.google_form_secret.clone());

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
