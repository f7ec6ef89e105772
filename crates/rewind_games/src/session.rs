//! Game session management.
//!
//! Each session owns one [`History`]. All sessions sit behind a single
//! mutex, so a move's truncate-then-append never interleaves with another
//! intent on the same session.

use derive_more::{Display, Error};
use rewind_tictactoe::History;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// A single game and its history.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session ID.
    pub id: SessionId,
    /// Snapshots and pointer.
    pub history: History,
}

impl GameSession {
    /// Creates a new game session.
    #[instrument]
    pub fn new(id: SessionId) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            history: History::new(),
        }
    }
}

/// Session lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// No session under this ID.
    #[display("Session '{}' not found", _0)]
    NotFound(#[error(not(source))] SessionId),

    /// ID already taken.
    #[display("Session '{}' already exists", _0)]
    AlreadyExists(#[error(not(source))] SessionId),

    /// A previous holder of the lock panicked.
    #[display("Session store is poisoned")]
    Poisoned,
}

/// Manages all game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    /// Creates a new game session.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId) -> Result<SessionId, SessionError> {
        let mut sessions = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }

        sessions.insert(id.clone(), GameSession::new(id.clone()));
        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Runs `f` on a session while holding the lock.
    #[instrument(skip(self, f))]
    pub fn with_session<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> R,
    ) -> Result<R, SessionError> {
        let mut sessions = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;
        let session = sessions.get_mut(id).ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            SessionError::NotFound(id.to_string())
        })?;
        Ok(f(session))
    }

    /// Removes a session, returning it.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<GameSession, SessionError> {
        let mut sessions = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;
        sessions
            .remove(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Lists all active session IDs.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Result<Vec<SessionId>, SessionError> {
        let sessions = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;
        let ids: Vec<_> = sessions.keys().cloned().collect();
        debug!(count = ids.len(), "Listed sessions");
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_create_and_use_session() {
        let manager = SessionManager::new();
        manager.create_session("a".to_string()).expect("new id");

        let outcome = manager
            .with_session("a", |s| s.history.submit_move(4))
            .expect("session exists")
            .expect("cell in range");
        assert!(!outcome.is_decided());
        let len = manager.with_session("a", |s| s.history.len()).expect("session exists");
        assert_eq!(len, 2);
    }

    #[test]
    fn test_duplicate_and_missing_sessions() {
        let manager = SessionManager::new();
        manager.create_session("a".to_string()).expect("new id");
        assert_eq!(
            manager.create_session("a".to_string()),
            Err(SessionError::AlreadyExists("a".to_string()))
        );
        assert_eq!(
            manager.with_session("b", |_| ()),
            Err(SessionError::NotFound("b".to_string()))
        );
        manager.remove_session("a").expect("session exists");
        assert!(manager.list_sessions().expect("lock").is_empty());
    }

    #[test]
    fn test_concurrent_intents_keep_history_consistent() {
        use rewind_tictactoe::{HistoryInvariants, InvariantSet};

        let manager = SessionManager::new();
        manager.create_session("shared".to_string()).expect("new id");

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let manager = manager.clone();
                thread::spawn(move || {
                    for i in 0..20 {
                        manager
                            .with_session("shared", |s| {
                                if i % 3 == 0 {
                                    let _ = s.history.jump_to(i % s.history.len());
                                } else {
                                    let _ = s.history.submit_move((t + i) % 9);
                                }
                            })
                            .expect("session exists");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker finished");
        }

        manager
            .with_session("shared", |s| {
                assert!(HistoryInvariants::check_all(&s.history).is_ok());
            })
            .expect("session exists");
    }
}
