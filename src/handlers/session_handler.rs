use actix_session::Session;
use actix_web::web;
use uuid::Uuid;
use log::{info, warn, error};
use serde_json::json;
use crate::routes::app_state::AppState;
use crate::models::user_session::UserSession;

pub const SESSION_ID_KEY: &str = "session_id";

/// Session id from the cookie, falling back to the one sent in the body.
pub fn resolve_session_id(session: &Session, body_session_id: Option<&str>) -> Option<String> {
    match session.get::<String>(SESSION_ID_KEY) {
        Ok(Some(id)) => Some(id),
        _ => {
            warn!("No valid session_id found in cookie; falling back to request body");
            body_session_id
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
        }
    }
}

pub async fn initialize_session(
    data: web::Data<AppState>,
    session: Session
) -> serde_json::Value {
    if let Ok(Some(existing)) = session.get::<String>(SESSION_ID_KEY) {
        if data.session_manager.get(&existing).is_some() {
            info!("Reusing session {} from cookie", existing);
            return json!({ "initialized": true, "session_id": existing });
        }
    }

    let session_id = Uuid::new_v4().to_string();
    if let Err(e) = session.insert(SESSION_ID_KEY, session_id.clone()) {
        error!("Failed to insert session_id into cookie: {:?}", e);
    } else {
        info!("Stored session_id {} in cookie", session_id);
    }

    data.session_manager.insert(session_id.clone(), UserSession::default());
    info!(
        "Initialized user session: {} ({} active)",
        session_id,
        data.session_manager.active_sessions()
    );

    json!({ "initialized": true, "session_id": session_id })
}

pub fn describe_session(session_id: &str, user_session: &UserSession) -> serde_json::Value {
    json!({
        "session_id": session_id,
        "state": user_session.state(),
        "category": user_session.last_category,
        "heading": user_session.last_category.map(|c| c.heading()),
        "generated_content": user_session.generated_content,
    })
}
