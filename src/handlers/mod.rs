pub mod content_handler;
pub mod email_handler;
pub mod session_handler;
