use actix_web::{get, web, HttpResponse, Responder};
use crate::routes::app_state::AppState;
use crate::handlers::session_handler::{self, resolve_session_id};
use actix_session::Session;
use serde::Deserialize;
use serde_json::json;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(init_session)
        .service(current_session);
}

#[derive(Deserialize)]
struct SessionQuery {
    session_id: Option<String>,
}

#[get("/init_session")]
async fn init_session(data: web::Data<AppState>, session: Session) -> impl Responder {
    HttpResponse::Ok().json(session_handler::initialize_session(data, session).await)
}

#[get("/session")]
async fn current_session(
    data: web::Data<AppState>,
    session: Session,
    query: web::Query<SessionQuery>
) -> impl Responder {
    let user_session = resolve_session_id(&session, query.session_id.as_deref())
        .and_then(|id| data.session_manager.get(&id).map(|s| (id, s)));
    match user_session {
        Some((id, user_session)) => HttpResponse::Ok().json(session_handler::describe_session(&id, &user_session)),
        None => HttpResponse::BadRequest().json(json!({"error": "Session not initialized"})),
    }
}
