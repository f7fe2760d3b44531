use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use riasec_core::model::SessionId;

use crate::error::QuizServiceError;
use crate::sessions::QuizSession;

/// In-memory store of active quiz sessions, keyed by session id.
///
/// Each session owns its tally; nothing here is shared between sessions, so
/// concurrent users can never corrupt each other's scores. Abandoned
/// sessions live until `remove` or process exit.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<SessionId, QuizSession>>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a freshly started session.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Poisoned` if the lock is poisoned.
    pub fn insert(&self, id: SessionId, session: QuizSession) -> Result<(), QuizServiceError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|_| QuizServiceError::Poisoned)?;
        guard.insert(id, session);
        Ok(())
    }

    /// Runs a closure against one session under the lock.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::UnknownSession` when the id is not
    /// registered, `QuizServiceError::Poisoned` if the lock is poisoned.
    pub fn with_session<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut QuizSession) -> T,
    ) -> Result<T, QuizServiceError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|_| QuizServiceError::Poisoned)?;
        let session = guard
            .get_mut(&id)
            .ok_or(QuizServiceError::UnknownSession(id))?;
        Ok(f(session))
    }

    /// Discards a session.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::UnknownSession` when the id is not
    /// registered.
    pub fn remove(&self, id: SessionId) -> Result<(), QuizServiceError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|_| QuizServiceError::Poisoned)?;
        guard
            .remove(&id)
            .map(|_| ())
            .ok_or(QuizServiceError::UnknownSession(id))
    }

    /// Number of live sessions.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Poisoned` if the lock is poisoned.
    pub fn len(&self) -> Result<usize, QuizServiceError> {
        let guard = self
            .sessions
            .lock()
            .map_err(|_| QuizServiceError::Poisoned)?;
        Ok(guard.len())
    }

    /// Returns true when no sessions are live.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Poisoned` if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, QuizServiceError> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riasec_core::QuizCatalog;
    use riasec_core::time::fixed_now;
    use std::sync::Arc;

    fn build_session() -> QuizSession {
        QuizSession::new(Arc::new(QuizCatalog::standard()), fixed_now())
    }

    #[test]
    fn insert_then_access_roundtrips() {
        let registry = SessionRegistry::new();
        let id = SessionId::new();
        registry.insert(id, build_session()).unwrap();

        let total = registry
            .with_session(id, |session| session.progress().total)
            .unwrap();
        assert_eq!(total, 50);
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn unknown_session_is_an_error() {
        let registry = SessionRegistry::new();
        let err = registry.with_session(SessionId::new(), |_| ()).unwrap_err();
        assert!(matches!(err, QuizServiceError::UnknownSession(_)));
    }

    #[test]
    fn remove_discards_the_session() {
        let registry = SessionRegistry::new();
        let id = SessionId::new();
        registry.insert(id, build_session()).unwrap();
        registry.remove(id).unwrap();

        assert!(registry.is_empty().unwrap());
        assert!(registry.remove(id).is_err());
    }
}
