#![forbid(unsafe_code)]

pub mod error;
pub mod registry;
pub mod sessions;

pub use riasec_core::Clock;
pub use sessions as session;

pub use error::{QuizServiceError, SessionError};
pub use registry::SessionRegistry;

pub use sessions::{
    AnswerMode, AnswerSubmission, QuizService, QuizSession, QuizStart, SessionProgress,
    SubmitOutcome, SubmitResult,
};
