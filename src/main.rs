use std::sync::Arc;
use actix_files::Files;
use actix_web::{cookie::Key, middleware::Logger, web, App, HttpServer};
use log::{error, info};
use genai_content_app::config::{self, AppConfig};
use genai_content_app::routes::{self, app_state::AppState};
use genai_content_app::services::{llm_service, mail_service::SmtpMailer};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    config::init_logging();

    let app_config = match AppConfig::from_env() {
        Ok(app_config) => app_config,
        Err(e) => {
            error!("Error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e));
        }
    };
    info!("Loaded configuration: {:?}", app_config);

    let generator = llm_service::create_generator(&app_config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let mailer = Arc::new(SmtpMailer::from_config(&app_config));
    let state = web::Data::new(AppState::new(generator, mailer));
    let session_key = Key::generate();

    let bind = (app_config.server_host.clone(), app_config.server_port);
    info!("Starting server on http://{}:{}", bind.0, bind.1);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(genai_content_app::session_middleware(session_key.clone()))
            .app_data(state.clone())
            .configure(routes::init_routes)
            // Serve static files (including index.html) from the "./static" directory.
            .service(Files::new("/", "./static").index_file("index.html"))
    })
        .bind(bind)?
        .run()
        .await
}
