//! Session Persistence
//!
//! One handle owning everything this app keeps in browser session
//! storage. Storage faults (quota, disabled storage, stale shapes)
//! degrade to "nothing saved" rather than surfacing errors.

use gloo_storage::{SessionStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::timer::TimerState;

const KEY_AUTH: &str = "studyflow_auth";
const KEY_TIMER: &str = "studyflow_timer";

/// Token pair plus the id of the user it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub refresh_token: String,
    pub user_id: i32,
}

/// Handle to the session-scoped storage area. Cheap to copy around;
/// everything that persists goes through one of these.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore;

impl SessionStore {
    pub fn new() -> Self {
        SessionStore
    }

    pub fn load_auth(&self) -> Option<AuthSession> {
        SessionStorage::get(KEY_AUTH).ok()
    }

    pub fn save_auth(&self, session: &AuthSession) {
        let _ = SessionStorage::set(KEY_AUTH, session);
    }

    pub fn clear_auth(&self) {
        SessionStorage::delete(KEY_AUTH);
    }

    pub fn load_timer(&self) -> Option<TimerState> {
        SessionStorage::get(KEY_TIMER).ok()
    }

    pub fn save_timer(&self, timer: &TimerState) {
        let _ = SessionStorage::set(KEY_TIMER, timer);
    }

    pub fn clear_timer(&self) {
        SessionStorage::delete(KEY_TIMER);
    }
}
