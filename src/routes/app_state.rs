use std::sync::Arc;
use crate::models::global_session_manager::GlobalSessionManager;
use crate::services::llm_service::TextGenerator;
use crate::services::mail_service::Mailer;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub mailer: Arc<dyn Mailer>,
    pub session_manager: GlobalSessionManager,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, mailer: Arc<dyn Mailer>) -> Self {
        AppState {
            generator,
            mailer,
            session_manager: GlobalSessionManager::new(),
        }
    }
}
