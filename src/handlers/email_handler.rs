use actix_web::{web, HttpResponse};
use actix_session::Session;
use serde::Deserialize;
use serde_json::json;
use log::{info, error};
use crate::routes::app_state::AppState;
use crate::services::content_service::{self, ContentError};
use super::session_handler::resolve_session_id;

#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    pub session_id: Option<String>,
    #[serde(default)]
    pub recipient: String,
}

pub async fn handle_send_request(
    data: web::Data<AppState>,
    session: Session,
    req_body: web::Json<SendEmailRequest>
) -> HttpResponse {
    let request = req_body.into_inner();
    let Some(session_id) = resolve_session_id(&session, request.session_id.as_deref()) else {
        return HttpResponse::BadRequest().json(json!({"error": "Session not initialized"}));
    };

    let Some(user_session) = data.session_manager.get(&session_id) else {
        error!("Session \"{}\" not found!", session_id);
        return HttpResponse::BadRequest().json(json!({"error": "Session not initialized"}));
    };

    match content_service::send_generated_content(
        &user_session,
        &request.recipient,
        data.mailer.as_ref(),
    ).await {
        Ok(message) => {
            info!("Session {}: {}", session_id, message);
            HttpResponse::Ok().json(json!({"sent": true, "message": message}))
        },
        Err(ContentError::Validation(message)) => {
            HttpResponse::BadRequest().json(json!({"sent": false, "error": message}))
        },
        Err(e) => {
            error!("Email delivery failed for session {}: {}", session_id, e);
            HttpResponse::BadGateway().json(json!({"sent": false, "error": e.to_string()}))
        }
    }
}
