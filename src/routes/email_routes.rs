use actix_web::{post, web, Responder};
use actix_session::Session;
use crate::handlers::email_handler::{self, SendEmailRequest};
use crate::routes::app_state::AppState;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(send_email);
}

#[post("/send_email")]
async fn send_email(
    data: web::Data<AppState>,
    session: Session,
    req_body: web::Json<SendEmailRequest>
) -> impl Responder {
    email_handler::handle_send_request(data, session, req_body).await
}
