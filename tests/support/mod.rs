#![allow(dead_code)]

// Shared mocks for the service and HTTP tests.
use async_trait::async_trait;
use mockall::mock;

use genai_content_app::models::content_category::ContentCategory;
use genai_content_app::models::user_session::UserSession;
use genai_content_app::services::llm_service::{GenerationError, TextGenerator};
use genai_content_app::services::mail_service::{DeliveryError, Mailer};

mock! {
    pub Generator {}

    #[async_trait]
    impl TextGenerator for Generator {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
    }
}

mock! {
    pub SmtpRelay {}

    #[async_trait]
    impl Mailer for SmtpRelay {
        async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), DeliveryError>;
    }
}

pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A session that already holds generated content.
pub fn session_with_content(content: &str) -> UserSession {
    let mut session = UserSession::default();
    session.store_generated(ContentCategory::Email, content.to_string());
    session
}

/// Generator that fails every call the way an unreachable service would.
pub fn failing_generator() -> MockGenerator {
    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .returning(|_| Err(GenerationError::Api { status: 503, body: "model overloaded".to_string() }));
    generator
}
