mod progress;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::{AnswerRecord, QuizSession, SubmitOutcome};
pub use view::{
    AnswerSubmission, CareerView, QuizStart, RankingEntry, RecommendationView, StatementView,
    SubmitResult,
};
pub use workflow::{AnswerMode, QuizService};
