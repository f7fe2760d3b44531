use serde::{Deserialize, Serialize};

use riasec_core::model::{Category, Response, SessionId, StatementId};
use riasec_core::recommend::CategoryRecommendation;

use super::service::SubmitOutcome;

//
// ─── START PAYLOAD ─────────────────────────────────────────────────────────────
//

/// One statement as presented to the consumer.
///
/// `options` carries the selectable labels for choice-mode quizzes and is
/// omitted for Likert and free-text modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementView {
    pub id: StatementId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Payload returned when a quiz starts: the session key plus the fixed
/// ordered statement list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizStart {
    pub session_id: SessionId,
    pub statements: Vec<StatementView>,
}

//
// ─── ANSWER PAYLOADS ───────────────────────────────────────────────────────────
//

/// One submitted answer: which statement it targets and the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub statement_id: StatementId,
    pub response: Response,
}

/// One ranked category with its final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub category: Category,
    pub score: u32,
}

/// One career suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerView {
    pub title: String,
    pub description: String,
}

/// Career suggestions for one ranked category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationView {
    pub category: Category,
    pub score: u32,
    pub careers: Vec<CareerView>,
}

impl RecommendationView {
    #[must_use]
    pub fn from_recommendation(rec: &CategoryRecommendation) -> Self {
        Self {
            category: rec.category,
            score: rec.score,
            careers: rec
                .careers
                .iter()
                .map(|career| CareerView {
                    title: career.title().to_owned(),
                    description: career.description().to_owned(),
                })
                .collect(),
        }
    }
}

/// Wire-shaped result of an answer submission.
///
/// `done: false` carries only `next_index`; `done: true` carries the full
/// ranking and the career recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<Vec<RankingEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<RecommendationView>>,
}

impl SubmitResult {
    #[must_use]
    pub fn from_outcome(outcome: &SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Pending { next_index } => Self {
                done: false,
                next_index: Some(*next_index),
                ranking: None,
                recommendations: None,
            },
            SubmitOutcome::Complete {
                ranking,
                recommendations,
            } => Self {
                done: true,
                next_index: None,
                ranking: Some(
                    ranking
                        .entries()
                        .iter()
                        .map(|&(category, score)| RankingEntry { category, score })
                        .collect(),
                ),
                recommendations: Some(
                    recommendations
                        .iter()
                        .map(RecommendationView::from_recommendation)
                        .collect(),
                ),
            },
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_result_serializes_minimal_shape() {
        let result = SubmitResult::from_outcome(&SubmitOutcome::Pending { next_index: 7 });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "done": false, "next_index": 7 }));
    }

    #[test]
    fn submission_roundtrips_through_json() {
        let submission = AnswerSubmission {
            statement_id: StatementId::new(3),
            response: Response::free_text("I like to build things"),
        };
        let json = serde_json::to_string(&submission).unwrap();
        let back: AnswerSubmission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, submission);
    }
}
