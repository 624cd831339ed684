use serde::Serialize;
use crate::models::content_category::ContentCategory;

/// Observable state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    HasContent,
}

/// Per-session state. Only a successful generation writes to it.
#[derive(Debug, Clone, Default)]
pub struct UserSession {
    pub generated_content: String,
    pub last_category: Option<ContentCategory>,
}

impl UserSession {
    pub fn state(&self) -> SessionState {
        if self.generated_content.is_empty() {
            SessionState::Idle
        } else {
            SessionState::HasContent
        }
    }

    pub fn store_generated(&mut self, category: ContentCategory, content: String) {
        self.generated_content = content;
        self.last_category = Some(category);
    }
}
