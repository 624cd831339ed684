use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use crate::models::user_session::UserSession;

#[derive(Clone, Default)]
pub struct GlobalSessionManager {
    sessions: Arc<Mutex<HashMap<String, UserSession>>>,
}

impl GlobalSessionManager {
    pub fn new() -> Self {
        GlobalSessionManager {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    // A panic while holding the lock cannot leave a half-written session behind,
    // so the poisoned map is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, UserSession>> {
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Inserts or updates a session
    pub fn insert(&self, session_id: String, session: UserSession) {
        self.lock().insert(session_id, session);
    }

    /// Retrieves a session if it exists
    pub fn get(&self, session_id: &str) -> Option<UserSession> {
        self.lock().get(session_id).cloned()
    }

    pub fn active_sessions(&self) -> usize {
        self.lock().len()
    }
}
