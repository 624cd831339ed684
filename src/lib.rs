pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;

/// Cookie-backed session middleware carrying only the session id.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .build()
}
