use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::{error, info};
use crate::config::{self, AppConfig};
use crate::models::email::OutgoingEmail;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("mail credentials are not configured (set {} and {})", config::EMAIL_USERNAME_VAR, config::EMAIL_PASSWORD_VAR)]
    MissingCredentials,

    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// Submits a plain-text message to a single recipient.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), DeliveryError>;
}

/// Builds a multipart message whose only part is the plain-text body.
pub fn build_message(email: &OutgoingEmail) -> Result<Message, DeliveryError> {
    let from: Mailbox = email
        .from
        .parse()
        .map_err(|_| DeliveryError::InvalidAddress(email.from.clone()))?;
    let to: Mailbox = email
        .to
        .trim()
        .parse()
        .map_err(|_| DeliveryError::InvalidAddress(email.to.clone()))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(&email.subject)
        .multipart(MultiPart::mixed().singlepart(SinglePart::plain(email.body.clone())))
        .map_err(|e| DeliveryError::Build(e.to_string()))
}

/// STARTTLS relay with username/password authentication.
///
/// A new connection is opened for every message; credentials are only
/// checked when a send is attempted.
#[derive(Clone)]
pub struct SmtpMailer {
    host: String,
    port: u16,
    username: Option<String>,
    password: Option<String>,
}

impl SmtpMailer {
    pub fn new(host: String, port: u16, username: Option<String>, password: Option<String>) -> Self {
        SmtpMailer { host, port, username, password }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config::smtp_host(),
            config::smtp_port(),
            config.email_username.clone(),
            config.email_password.clone(),
        )
    }

    fn credentials(&self) -> Result<(String, String), DeliveryError> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Ok((user.clone(), pass.clone())),
            _ => Err(DeliveryError::MissingCredentials),
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), DeliveryError> {
        let (username, password) = self.credentials()?;

        let email = OutgoingEmail {
            from: username.clone(),
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        };
        let message = build_message(&email)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)
            .map_err(|e| DeliveryError::Smtp(e.to_string()))?
            .port(self.port)
            .credentials(Credentials::new(username, password))
            .build();

        info!("Submitting message to {}:{}\n{}", self.host, self.port, email);
        transport.send(message).await.map_err(|e| {
            error!("SMTP submission to {} failed: {}", to, e);
            DeliveryError::Smtp(e.to_string())
        })?;

        info!("Email accepted by relay for {}", to);
        Ok(())
    }
}
