use actix_web::{error, web, HttpResponse};
use serde_json::json;

pub mod app_state;
pub mod content_routes;
pub mod email_routes;
pub mod session_routes;

/// Registers every API route. Static files are mounted separately in `main`.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .configure(session_routes::init_routes)
        .configure(content_routes::init_routes)
        .configure(email_routes::init_routes);
}

// Extractor failures use the same `{"error": ...}` body as the handlers.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(json!({"error": message})))
            .into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(json!({"error": message})))
            .into()
    })
}
