use actix_web::{web, HttpResponse};
use actix_session::Session;
use serde::Deserialize;
use serde_json::json;
use log::{info, error};
use crate::models::content_category::ContentCategory;
use crate::routes::app_state::AppState;
use crate::services::content_service::{self, ContentError};
use super::session_handler::resolve_session_id;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub session_id: Option<String>,
    pub category: ContentCategory,
    #[serde(default)]
    pub description: String,
}

pub async fn handle_generate_request(
    data: web::Data<AppState>,
    session: Session,
    req_body: web::Json<GenerateRequest>
) -> HttpResponse {
    let request = req_body.into_inner();
    let Some(session_id) = resolve_session_id(&session, request.session_id.as_deref()) else {
        return HttpResponse::BadRequest().json(json!({"error": "Session not initialized"}));
    };

    let Some(mut user_session) = data.session_manager.get(&session_id) else {
        error!("Session \"{}\" not found!", session_id);
        return HttpResponse::BadRequest().json(json!({"error": "Session not initialized"}));
    };

    info!("Generating {} for session {}", request.category, session_id);
    match content_service::generate_content(
        &mut user_session,
        request.category,
        &request.description,
        data.generator.as_ref(),
    ).await {
        Ok(content) => {
            data.session_manager.insert(session_id, user_session);
            HttpResponse::Ok().json(json!({
                "category": request.category,
                "heading": request.category.heading(),
                "content": content,
            }))
        },
        Err(ContentError::Validation(message)) => {
            HttpResponse::BadRequest().json(json!({"error": message}))
        },
        Err(e) => {
            error!("Generation failed for session {}: {}", session_id, e);
            HttpResponse::BadGateway().json(json!({"error": e.to_string()}))
        }
    }
}
