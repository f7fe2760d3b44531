use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use riasec_core::model::{CategoryTally, Response, Statement, StatementId};
use riasec_core::recommend::{
    CategoryRecommendation, Ranking, RecommendationPolicy, TieBreak, recommendations,
};
use riasec_core::scoring::{ScoreDelta, Scorer};
use riasec_core::QuizCatalog;

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── ANSWER RECORD ─────────────────────────────────────────────────────────────
//

/// What one consumed response contributed to the tally.
///
/// `delta` is empty when the response matched nothing (or named an unknown
/// statement); the record is kept anyway so the answer log always has one
/// entry per consumed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub statement_id: StatementId,
    pub delta: ScoreDelta,
}

/// Result of consuming one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// More statements remain; `next_index` is the next question position.
    Pending { next_index: usize },
    /// The quiz is finished.
    Complete {
        ranking: Ranking,
        recommendations: Vec<CategoryRecommendation>,
    },
}

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// One user's pass through the quiz.
///
/// Steps through the catalog's fixed statement order, consuming exactly one
/// response per step. Starts with every category at zero, completes once the
/// final statement is answered, and rejects further responses until reset.
pub struct QuizSession {
    catalog: Arc<QuizCatalog>,
    tally: CategoryTally,
    current: usize,
    answers: Vec<AnswerRecord>,
    tie_break: TieBreak,
    policy: RecommendationPolicy,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Starts a fresh session at the first statement with a zero tally.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    #[must_use]
    pub fn new(catalog: Arc<QuizCatalog>, started_at: DateTime<Utc>) -> Self {
        Self {
            catalog,
            tally: CategoryTally::new(),
            current: 0,
            answers: Vec::new(),
            tie_break: TieBreak::default(),
            policy: RecommendationPolicy::default(),
            started_at,
            completed_at: None,
        }
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
    pub fn catalog(&self) -> &QuizCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// The statement awaiting an answer, `None` once the quiz is done.
    #[must_use]
    pub fn current_statement(&self) -> Option<&Statement> {
        self.catalog.statement_at(self.current)
    }

    /// Per-category scores so far.
    #[must_use]
    pub fn tally(&self) -> &CategoryTally {
        &self.tally
    }

    /// One record per consumed response, in answer order.
    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.catalog.len(),
            answered: self.answers.len(),
            remaining: self.catalog.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    /// Consumes one response and advances the session.
    ///
    /// The response is scored against the statement named by `statement_id`.
    /// An unknown id scores nothing but still consumes the response and
    /// advances the index; free text with no keyword hits likewise just
    /// contributes no points. Answering the final statement completes the
    /// session and returns the ranking with career recommendations.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the quiz is already done.
    pub fn submit(
        &mut self,
        statement_id: StatementId,
        response: &Response,
        answered_at: DateTime<Utc>,
    ) -> Result<SubmitOutcome, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }

        let scorer = Scorer::new(self.catalog.lexicon());
        let delta = self
            .catalog
            .statement(statement_id)
            .map(|statement| scorer.score(statement, response))
            .unwrap_or_default();
        delta.apply_to(&mut self.tally);
        self.answers.push(AnswerRecord {
            statement_id,
            delta,
        });

        self.current += 1;
        if self.current >= self.catalog.len() {
            self.completed_at = Some(answered_at);
            let ranking = Ranking::from_tally(&self.tally, self.tie_break);
            let recommendations = recommendations(&ranking, &self.catalog, self.policy);
            Ok(SubmitOutcome::Complete {
                ranking,
                recommendations,
            })
        } else {
            Ok(SubmitOutcome::Pending {
                next_index: self.current,
            })
        }
    }

    /// The final ranking, available once the session is complete.
    #[must_use]
    pub fn ranking(&self) -> Option<Ranking> {
        self.is_complete()
            .then(|| Ranking::from_tally(&self.tally, self.tie_break))
    }

    /// Returns the session to its initial state: zero tally, first
    /// statement, completion cleared.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.tally.reset();
        self.current = 0;
        self.answers.clear();
        self.started_at = now;
        self.completed_at = None;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("statements", &self.catalog.len())
            .field("current", &self.current)
            .field("answered", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
