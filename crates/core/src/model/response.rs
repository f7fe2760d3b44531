use serde::{Deserialize, Serialize};

use crate::model::Category;

//
// ─── LIKERT RATING ─────────────────────────────────────────────────────────────
//

/// A 1-5 agreement rating for a statement.
///
/// Numeric input is never an error: out-of-range values are clamped into
/// `[1, 5]` and unparseable text collapses to the zero rating, which simply
/// awards no points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct LikertRating(u8);

impl LikertRating {
    /// The rating awarded for input that could not be parsed as a number.
    pub const ZERO: LikertRating = LikertRating(0);

    /// Lowest and highest meaningful ratings.
    pub const MIN: LikertRating = LikertRating(1);
    pub const MAX: LikertRating = LikertRating(5);

    /// Builds a rating from a raw integer, clamping into `[1, 5]`.
    #[must_use]
    pub fn from_raw(raw: i64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(raw.clamp(1, 5) as u8)
    }

    /// Parses free-form numeric input.
    ///
    /// Unparseable text yields `LikertRating::ZERO` rather than an error.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .map_or(Self::ZERO, Self::from_raw)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Points this rating contributes to each tagged category.
    #[must_use]
    pub fn points(self) -> u32 {
        u32::from(self.0)
    }
}

impl From<i64> for LikertRating {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<LikertRating> for u8 {
    fn from(rating: LikertRating) -> Self {
        rating.0
    }
}

//
// ─── RESPONSE ──────────────────────────────────────────────────────────────────
//

/// One user answer to a statement.
///
/// The three variants cover the quiz's answer surfaces: a category button
/// click, a 1-5 agreement rating, and free text matched against the keyword
/// lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Response {
    /// The user picked a category directly.
    Choice(Category),
    /// The user rated the statement on a 1-5 scale.
    Likert(LikertRating),
    /// The user typed a free-form answer.
    FreeText(String),
}

impl Response {
    /// Builds a Likert response, clamping the raw value.
    #[must_use]
    pub fn likert(raw: i64) -> Self {
        Response::Likert(LikertRating::from_raw(raw))
    }

    /// Builds a free-text response.
    #[must_use]
    pub fn free_text(text: impl Into<String>) -> Self {
        Response::FreeText(text.into())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_clamps_into_scale() {
        assert_eq!(LikertRating::from_raw(3).value(), 3);
        assert_eq!(LikertRating::from_raw(9).value(), 5);
        assert_eq!(LikertRating::from_raw(-3).value(), 1);
        assert_eq!(LikertRating::from_raw(0).value(), 1);
    }

    #[test]
    fn parse_defaults_unparseable_input_to_zero() {
        assert_eq!(LikertRating::parse("abc"), LikertRating::ZERO);
        assert_eq!(LikertRating::parse(""), LikertRating::ZERO);
        assert_eq!(LikertRating::ZERO.points(), 0);
    }

    #[test]
    fn parse_accepts_padded_numbers() {
        assert_eq!(LikertRating::parse(" 4 ").value(), 4);
        assert_eq!(LikertRating::parse("12").value(), 5);
    }

    #[test]
    fn response_json_shape_is_tagged() {
        let choice = serde_json::to_value(Response::Choice(Category::Social)).unwrap();
        assert_eq!(choice["kind"], "choice");
        assert_eq!(choice["value"], "S");

        let likert = serde_json::to_value(Response::likert(4)).unwrap();
        assert_eq!(likert["kind"], "likert");
        assert_eq!(likert["value"], 4);

        let text = serde_json::to_value(Response::free_text("I love tools")).unwrap();
        assert_eq!(text["kind"], "free_text");
        assert_eq!(text["value"], "I love tools");
    }

    #[test]
    fn likert_deserialization_clamps() {
        let rating: LikertRating = serde_json::from_str("11").unwrap();
        assert_eq!(rating.value(), 5);
    }
}
