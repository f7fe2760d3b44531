//! Shared error types for the services crate.

use thiserror::Error;

use riasec_core::catalog::CatalogError;
use riasec_core::model::SessionId;

/// Errors emitted by a single quiz session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz already completed; reset before answering again")]
    Completed,
}

/// Errors emitted by the quiz service layer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("unknown session: {0}")]
    UnknownSession(SessionId),

    #[error("session registry lock poisoned")]
    Poisoned,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
