use crate::catalog::KeywordLexicon;
use crate::model::{Category, CategoryTally, Response, Statement};

//
// ─── SCORE DELTA ───────────────────────────────────────────────────────────────
//

/// Points awarded for a single answered statement.
///
/// Kept separate from the tally so callers can inspect or log what one
/// answer contributed before applying it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreDelta {
    awards: Vec<(Category, u32)>,
}

impl ScoreDelta {
    #[must_use]
    pub fn awards(&self) -> &[(Category, u32)] {
        &self.awards
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.awards.is_empty()
    }

    /// Sum of all points in this delta.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.awards
            .iter()
            .fold(0_u32, |acc, (_, p)| acc.saturating_add(*p))
    }

    /// Applies every award to the given tally.
    pub fn apply_to(&self, tally: &mut CategoryTally) {
        for (category, points) in &self.awards {
            tally.add(*category, *points);
        }
    }

    fn push(&mut self, category: Category, points: u32) {
        if points > 0 {
            self.awards.push((category, points));
        }
    }
}

//
// ─── SCORER ────────────────────────────────────────────────────────────────────
//

/// Pure scoring rule shared by every quiz surface.
///
/// Deterministic and side-effect free: the same statement and response always
/// produce the same delta, regardless of session state.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    lexicon: &'a KeywordLexicon,
}

impl<'a> Scorer<'a> {
    #[must_use]
    pub fn new(lexicon: &'a KeywordLexicon) -> Self {
        Self { lexicon }
    }

    /// Scores one response against one statement.
    ///
    /// - A category choice awards one point to the chosen category.
    /// - A Likert rating awards its point value to every category tagged on
    ///   the statement; the zero rating (unparseable input) awards nothing.
    /// - Free text is lowercased and awards one point per lexicon keyword
    ///   contained in it, per tagged category. Hits stack and are not
    ///   deduplicated; text with no hits awards nothing and is not an error.
    #[must_use]
    pub fn score(&self, statement: &Statement, response: &Response) -> ScoreDelta {
        let mut delta = ScoreDelta::default();
        match response {
            Response::Choice(category) => delta.push(*category, 1),
            Response::Likert(rating) => {
                for &category in statement.categories() {
                    delta.push(category, rating.points());
                }
            }
            Response::FreeText(text) => {
                let text = text.to_lowercase();
                for &category in statement.categories() {
                    let hits = self
                        .lexicon
                        .keywords(category)
                        .iter()
                        .filter(|keyword| text.contains(keyword.as_str()))
                        .count();
                    #[allow(clippy::cast_possible_truncation)]
                    delta.push(category, hits as u32);
                }
            }
        }
        delta
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LikertRating, StatementId};

    fn lexicon() -> KeywordLexicon {
        KeywordLexicon::standard()
    }

    fn statement(id: u32, categories: Vec<Category>) -> Statement {
        Statement::new(StatementId::new(id), "Do you enjoy this?", categories).unwrap()
    }

    #[test]
    fn choice_awards_one_point_to_the_chosen_category() {
        let lexicon = lexicon();
        let scorer = Scorer::new(&lexicon);
        let stmt = statement(1, vec![Category::Realistic]);

        let delta = scorer.score(&stmt, &Response::Choice(Category::Artistic));
        assert_eq!(delta.awards(), [(Category::Artistic, 1)]);
        assert_eq!(delta.total(), 1);
    }

    #[test]
    fn likert_awards_rating_to_every_tagged_category() {
        let lexicon = lexicon();
        let scorer = Scorer::new(&lexicon);
        let stmt = statement(49, vec![Category::Investigative, Category::Realistic]);

        let delta = scorer.score(&stmt, &Response::likert(4));
        assert_eq!(
            delta.awards(),
            [(Category::Investigative, 4), (Category::Realistic, 4)]
        );
    }

    #[test]
    fn zero_likert_awards_nothing() {
        let lexicon = lexicon();
        let scorer = Scorer::new(&lexicon);
        let stmt = statement(1, vec![Category::Realistic]);

        let delta = scorer.score(&stmt, &Response::Likert(LikertRating::parse("not a number")));
        assert!(delta.is_empty());
    }

    #[test]
    fn free_text_single_keyword_scores_one_point() {
        let lexicon = lexicon();
        let scorer = Scorer::new(&lexicon);
        let stmt = statement(13, vec![Category::Realistic]);

        let delta = scorer.score(&stmt, &Response::free_text("I love using tools"));
        assert_eq!(delta.awards(), [(Category::Realistic, 1)]);
    }

    #[test]
    fn free_text_hits_stack_without_deduplication() {
        let lexicon = lexicon();
        let scorer = Scorer::new(&lexicon);
        let stmt = statement(19, vec![Category::Realistic]);

        // "hands-on", "tools" and "build" all appear.
        let delta = scorer.score(
            &stmt,
            &Response::free_text("I like hands-on work, I build things with tools"),
        );
        assert_eq!(delta.awards(), [(Category::Realistic, 3)]);
    }

    #[test]
    fn free_text_scores_each_tagged_category_independently() {
        let lexicon = lexicon();
        let scorer = Scorer::new(&lexicon);
        let stmt = statement(50, vec![Category::Artistic, Category::Social]);

        let delta = scorer.score(
            &stmt,
            &Response::free_text("I express myself through art and help people"),
        );
        // Artistic: "art" + "express"; Social: "help".
        assert_eq!(
            delta.awards(),
            [(Category::Artistic, 2), (Category::Social, 1)]
        );
    }

    #[test]
    fn free_text_matching_is_case_insensitive() {
        let lexicon = lexicon();
        let scorer = Scorer::new(&lexicon);
        let stmt = statement(1, vec![Category::Realistic]);

        let delta = scorer.score(&stmt, &Response::free_text("I LOVE TOOLS"));
        assert_eq!(delta.total(), 1);
    }

    #[test]
    fn unmatched_text_awards_nothing() {
        let lexicon = lexicon();
        let scorer = Scorer::new(&lexicon);
        let stmt = statement(1, vec![Category::Realistic]);

        let delta = scorer.score(&stmt, &Response::free_text("no relevant words here"));
        assert!(delta.is_empty());
        assert_eq!(delta.total(), 0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let lexicon = lexicon();
        let scorer = Scorer::new(&lexicon);
        let first = statement(1, vec![Category::Social]);
        let second = statement(2, vec![Category::Social]);
        let response = Response::free_text("I help and mentor my community");

        let a = scorer.score(&first, &response);
        let b = scorer.score(&second, &response);
        assert_eq!(a, b);
        assert_eq!(a.total(), 3);
    }

    #[test]
    fn delta_applies_to_tally() {
        let lexicon = lexicon();
        let scorer = Scorer::new(&lexicon);
        let stmt = statement(49, vec![Category::Investigative, Category::Realistic]);
        let delta = scorer.score(&stmt, &Response::likert(5));

        let mut tally = CategoryTally::new();
        delta.apply_to(&mut tally);
        assert_eq!(tally.get(Category::Investigative), 5);
        assert_eq!(tally.get(Category::Realistic), 5);
        assert_eq!(tally.total(), delta.total());
    }
}
