use log::{info, warn};
use crate::config::EMAIL_SUBJECT;
use crate::models::content_category::ContentCategory;
use crate::models::user_session::{SessionState, UserSession};
use crate::services::llm_service::{GenerationError, TextGenerator};
use crate::services::mail_service::{DeliveryError, Mailer};
use crate::services::prompt_service;

pub const MISSING_SEND_INPUT: &str = "Please generate content and provide a valid email address.";
pub const MISSING_DESCRIPTION: &str = "Please enter a description or topic.";

/// Errors raised by a single user action. None of them touch the session.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Generation(#[from] GenerationError),

    #[error("Failed to send email: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Builds the category prompt, asks the model, and stores the result.
///
/// The session is only written after the model call succeeds.
pub async fn generate_content(
    user_session: &mut UserSession,
    category: ContentCategory,
    description: &str,
    generator: &dyn TextGenerator,
) -> Result<String, ContentError> {
    if description.trim().is_empty() {
        return Err(ContentError::Validation(MISSING_DESCRIPTION.to_string()));
    }

    let prompt = prompt_service::build(category, description);
    info!("Generating {} content", category);
    let response = generator.generate(&prompt).await?;

    user_session.store_generated(category, response.clone());
    Ok(response)
}

/// Emails the stored content and returns the message to show the user.
pub async fn send_generated_content(
    user_session: &UserSession,
    recipient: &str,
    mailer: &dyn Mailer,
) -> Result<String, ContentError> {
    let recipient = recipient.trim();
    if recipient.is_empty() || user_session.state() == SessionState::Idle {
        warn!("Send rejected: recipient or generated content missing");
        return Err(ContentError::Validation(MISSING_SEND_INPUT.to_string()));
    }

    mailer
        .send(recipient, EMAIL_SUBJECT, &user_session.generated_content)
        .await?;
    Ok(format!("Email successfully sent to {}", recipient))
}
