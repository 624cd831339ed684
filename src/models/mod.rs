pub mod content_category;
pub mod email;
pub mod global_session_manager;
pub mod user_session;
