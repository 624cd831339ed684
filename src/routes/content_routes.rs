use actix_web::{post, web, Responder};
use actix_session::Session;
use crate::handlers::content_handler::{self, GenerateRequest};
use crate::routes::app_state::AppState;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(generate);
}

#[post("/generate")]
async fn generate(
    data: web::Data<AppState>,
    session: Session,
    req_body: web::Json<GenerateRequest>
) -> impl Responder {
    content_handler::handle_generate_request(data, session, req_body).await
}
