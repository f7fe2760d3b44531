use std::sync::Arc;

use log::{info, warn};

use riasec_core::model::{Category, SessionId};
use riasec_core::recommend::{RecommendationPolicy, TieBreak};
use riasec_core::{Clock, QuizCatalog};

use super::progress::SessionProgress;
use super::service::{QuizSession, SubmitOutcome};
use super::view::{AnswerSubmission, QuizStart, StatementView, SubmitResult};
use crate::error::QuizServiceError;
use crate::registry::SessionRegistry;

/// How a quiz surface collects answers, used to shape the start payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerMode {
    /// Typed answers matched against the keyword lexicon.
    #[default]
    FreeText,
    /// 1-5 agreement ratings.
    Likert,
    /// One button per category.
    Choice,
}

/// Orchestrates quiz sessions across users.
///
/// Owns the shared read-only catalog and the per-user session registry; all
/// scoring state lives inside the individual sessions.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    catalog: Arc<QuizCatalog>,
    registry: SessionRegistry,
    tie_break: TieBreak,
    policy: RecommendationPolicy,
    answer_mode: AnswerMode,
}

impl QuizService {
    #[must_use]
    pub fn new(catalog: Arc<QuizCatalog>) -> Self {
        Self {
            clock: Clock::default(),
            catalog,
            registry: SessionRegistry::new(),
            tie_break: TieBreak::default(),
            policy: RecommendationPolicy::default(),
            answer_mode: AnswerMode::default(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: RecommendationPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_answer_mode(mut self, answer_mode: AnswerMode) -> Self {
        self.answer_mode = answer_mode;
        self
    }

    /// Starts an isolated session and returns the fixed statement list.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Poisoned` if the registry lock is poisoned.
    pub fn start(&self) -> Result<QuizStart, QuizServiceError> {
        let session_id = SessionId::new();
        let session = QuizSession::new(Arc::clone(&self.catalog), self.clock.now())
            .with_tie_break(self.tie_break)
            .with_policy(self.policy);
        self.registry.insert(session_id, session)?;

        info!(
            "event=quiz_start session_id={session_id} statements={}",
            self.catalog.len()
        );

        let options = self.statement_options();
        let statements = self
            .catalog
            .statements()
            .iter()
            .map(|statement| StatementView {
                id: statement.id(),
                text: statement.text().to_owned(),
                options: options.clone(),
            })
            .collect();

        Ok(QuizStart {
            session_id,
            statements,
        })
    }

    /// Scores one submission against its session.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::UnknownSession` for an unregistered
    /// session id and `SessionError::Completed` (wrapped) when the quiz is
    /// already done.
    pub fn submit(
        &self,
        session_id: SessionId,
        submission: &AnswerSubmission,
    ) -> Result<SubmitResult, QuizServiceError> {
        if self.catalog.statement(submission.statement_id).is_none() {
            warn!(
                "event=unknown_statement session_id={session_id} statement_id={}",
                submission.statement_id
            );
        }

        let answered_at = self.clock.now();
        let outcome = self.registry.with_session(session_id, |session| {
            session.submit(submission.statement_id, &submission.response, answered_at)
        })??;

        if let SubmitOutcome::Complete { ranking, .. } = &outcome {
            info!(
                "event=quiz_complete session_id={session_id} top={} score={}",
                ranking.top(),
                ranking.entries()[0].1
            );
        }

        Ok(SubmitResult::from_outcome(&outcome))
    }

    /// Progress of one session.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::UnknownSession` for an unregistered id.
    pub fn progress(&self, session_id: SessionId) -> Result<SessionProgress, QuizServiceError> {
        self.registry
            .with_session(session_id, |session| session.progress())
    }

    /// Returns a completed (or abandoned) session to its initial state.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::UnknownSession` for an unregistered id.
    pub fn reset(&self, session_id: SessionId) -> Result<(), QuizServiceError> {
        let now = self.clock.now();
        self.registry
            .with_session(session_id, |session| session.reset(now))?;
        info!("event=quiz_reset session_id={session_id}");
        Ok(())
    }

    /// Discards a session entirely.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::UnknownSession` for an unregistered id.
    pub fn end(&self, session_id: SessionId) -> Result<(), QuizServiceError> {
        self.registry.remove(session_id)?;
        info!("event=quiz_end session_id={session_id}");
        Ok(())
    }

    fn statement_options(&self) -> Option<Vec<String>> {
        match self.answer_mode {
            AnswerMode::Choice => Some(
                Category::ALL
                    .iter()
                    .map(|category| category.name().to_owned())
                    .collect(),
            ),
            AnswerMode::FreeText | AnswerMode::Likert => None,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
