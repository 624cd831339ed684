pub mod content_service;
pub mod llm_service;
pub mod mail_service;
pub mod prompt_service;
