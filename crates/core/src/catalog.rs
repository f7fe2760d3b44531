use std::collections::HashMap;

use thiserror::Error;

use crate::model::{
    CareerEntry, CareerError, Category, Statement, StatementError, StatementId,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one statement")]
    Empty,

    #[error("duplicate statement id: {0}")]
    DuplicateStatementId(StatementId),

    #[error("no careers defined for category {0}")]
    MissingCareers(Category),

    #[error(transparent)]
    Statement(#[from] StatementError),

    #[error(transparent)]
    Career(#[from] CareerError),
}

//
// ─── KEYWORD LEXICON ───────────────────────────────────────────────────────────
//

/// Per-category keyword lists used to score free-text answers.
///
/// Keywords are lowercased once at construction; matching is plain substring
/// containment against the lowercased answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordLexicon {
    keywords: [Vec<String>; Category::COUNT],
}

impl KeywordLexicon {
    /// Builds a lexicon from `(category, keywords)` pairs.
    ///
    /// Later pairs for the same category extend the earlier list.
    #[must_use]
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (Category, &'a [&'a str])>,
    ) -> Self {
        let mut keywords: [Vec<String>; Category::COUNT] = Default::default();
        for (category, words) in entries {
            keywords[category.index()]
                .extend(words.iter().map(|w| w.to_lowercase()));
        }
        Self { keywords }
    }

    /// Keywords for one category, already lowercased.
    #[must_use]
    pub fn keywords(&self, category: Category) -> &[String] {
        &self.keywords[category.index()]
    }

    /// The keyword table shipped with the standard catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_KEYWORDS.iter().copied())
    }
}

//
// ─── QUIZ CATALOG ──────────────────────────────────────────────────────────────
//

/// Immutable reference data for one quiz: the ordered statement list, the
/// keyword lexicon, and the career table.
///
/// Built once at startup and shared read-only across sessions.
#[derive(Debug, Clone)]
pub struct QuizCatalog {
    statements: Vec<Statement>,
    by_id: HashMap<StatementId, usize>,
    lexicon: KeywordLexicon,
    careers: [Vec<CareerEntry>; Category::COUNT],
}

impl QuizCatalog {
    /// Builds a validated catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` when no statements are given,
    /// `CatalogError::DuplicateStatementId` when two statements share an id,
    /// and `CatalogError::MissingCareers` when a category has no career
    /// entries to recommend.
    pub fn new(
        statements: Vec<Statement>,
        lexicon: KeywordLexicon,
        careers: impl IntoIterator<Item = (Category, CareerEntry)>,
    ) -> Result<Self, CatalogError> {
        if statements.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_id = HashMap::with_capacity(statements.len());
        for (i, statement) in statements.iter().enumerate() {
            if by_id.insert(statement.id(), i).is_some() {
                return Err(CatalogError::DuplicateStatementId(statement.id()));
            }
        }

        let mut career_table: [Vec<CareerEntry>; Category::COUNT] = Default::default();
        for (category, entry) in careers {
            career_table[category.index()].push(entry);
        }
        for category in Category::ALL {
            if career_table[category.index()].is_empty() {
                return Err(CatalogError::MissingCareers(category));
            }
        }

        Ok(Self {
            statements,
            by_id,
            lexicon,
            careers: career_table,
        })
    }

    /// The fixed ordered statement list.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Looks up a statement by id. `None` for unknown ids; submitting an
    /// unknown id is not an error, it just scores nothing.
    #[must_use]
    pub fn statement(&self, id: StatementId) -> Option<&Statement> {
        self.by_id.get(&id).map(|&i| &self.statements[i])
    }

    /// Statement at a given position in quiz order.
    #[must_use]
    pub fn statement_at(&self, index: usize) -> Option<&Statement> {
        self.statements.get(index)
    }

    /// Number of statements in the quiz.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    #[must_use]
    pub fn lexicon(&self) -> &KeywordLexicon {
        &self.lexicon
    }

    /// Career suggestions for one category.
    #[must_use]
    pub fn careers(&self, category: Category) -> &[CareerEntry] {
        &self.careers[category.index()]
    }

    /// The built-in 50-statement Holland-style inventory with its keyword
    /// table and career suggestions.
    #[must_use]
    pub fn standard() -> Self {
        let statements = STANDARD_STATEMENTS
            .iter()
            .enumerate()
            .map(|(i, (text, categories))| {
                #[allow(clippy::cast_possible_truncation)]
                let id = StatementId::new(i as u32 + 1);
                Statement::new(id, *text, categories.to_vec())
                    .expect("built-in statement is valid")
            })
            .collect();

        let careers = STANDARD_CAREERS.iter().map(|(category, title, blurb)| {
            (
                *category,
                CareerEntry::new(*title, *blurb).expect("built-in career is valid"),
            )
        });

        Self::new(statements, KeywordLexicon::standard(), careers)
            .expect("built-in catalog is valid")
    }
}

//
// ─── STANDARD DATA ─────────────────────────────────────────────────────────────
//

use crate::model::Category::{
    Artistic, Conventional, Enterprising, Investigative, Realistic, Social,
};

#[rustfmt::skip]
const STANDARD_STATEMENTS: &[(&str, &[Category])] = &[
    ("Do you enjoy fixing or building things with your hands?", &[Realistic]),
    ("Do you like investigating why things happen?", &[Investigative]),
    ("Do you enjoy painting, drawing, or other creative activities?", &[Artistic]),
    ("Do you find satisfaction in helping or teaching others?", &[Social]),
    ("Do you like leading projects or persuading people?", &[Enterprising]),
    ("Do you enjoy making lists, organizing, or planning tasks?", &[Conventional]),
    ("Would you rather work outdoors or in a workshop?", &[Realistic]),
    ("Do you enjoy solving puzzles or analyzing data?", &[Investigative]),
    ("Do you often express yourself through music or writing?", &[Artistic]),
    ("Do you feel fulfilled when helping someone improve?", &[Social]),
    ("Do you enjoy negotiating or pitching ideas?", &[Enterprising]),
    ("Do you prefer structured schedules over spontaneous activities?", &[Conventional]),
    ("Do you like working with tools or machinery?", &[Realistic]),
    ("Do you enjoy conducting experiments or research?", &[Investigative]),
    ("Do you enjoy designing or decorating spaces?", &[Artistic]),
    ("Do you volunteer to assist people in need?", &[Social]),
    ("Do you take initiative in leading groups?", &[Enterprising]),
    ("Do you enjoy keeping records or tracking details?", &[Conventional]),
    ("Do you like hands-on hobbies like gardening or carpentry?", &[Realistic]),
    ("Do you like asking questions to understand how things work?", &[Investigative]),
    ("Do you enjoy storytelling or performing arts?", &[Artistic]),
    ("Do you enjoy mentoring or coaching others?", &[Social]),
    ("Do you like organizing events or motivating people?", &[Enterprising]),
    ("Do you enjoy following rules and organizing tasks?", &[Conventional]),
    ("Do you prefer building or repairing objects over thinking abstractly?", &[Realistic]),
    ("Do you enjoy reading, researching, or solving logical problems?", &[Investigative]),
    ("Do you enjoy photography, crafts, or fashion?", &[Artistic]),
    ("Do you like working in teams to support others?", &[Social]),
    ("Do you enjoy persuading or selling ideas to others?", &[Enterprising]),
    ("Do you enjoy keeping spreadsheets or planning systems?", &[Conventional]),
    ("Do you enjoy outdoor projects or mechanical tasks?", &[Realistic]),
    ("Do you like studying patterns or trends?", &[Investigative]),
    ("Do you enjoy creative writing or designing visual art?", &[Artistic]),
    ("Do you enjoy helping friends solve personal problems?", &[Social]),
    ("Do you like inspiring others or leading a team?", &[Enterprising]),
    ("Do you enjoy maintaining order or following rules?", &[Conventional]),
    ("Do you enjoy assembling or constructing things?", &[Realistic]),
    ("Do you enjoy analyzing statistics or scientific data?", &[Investigative]),
    ("Do you enjoy performing, dancing, or composing music?", &[Artistic]),
    ("Do you enjoy guiding or advising others?", &[Social]),
    ("Do you like starting new initiatives or business projects?", &[Enterprising]),
    ("Do you enjoy documenting and organizing information?", &[Conventional]),
    ("Do you prefer building physical projects over planning?", &[Realistic]),
    ("Do you enjoy solving complex questions and research challenges?", &[Investigative]),
    ("Do you enjoy creating art or exploring imaginative ideas?", &[Artistic]),
    ("Do you enjoy teaching, mentoring, or counseling?", &[Social]),
    ("Do you like inspiring others or leading a team?", &[Enterprising]),
    ("Do you enjoy following procedures or schedules carefully?", &[Conventional]),
    ("Do you enjoy experimenting or inventing new solutions?", &[Investigative, Realistic]),
    ("Do you enjoy combining creativity with helping others?", &[Artistic, Social]),
];

#[rustfmt::skip]
const STANDARD_KEYWORDS: &[(Category, &[&str])] = &[
    (Realistic, &["hands-on", "build", "repair", "tools", "physical", "practical", "outdoors"]),
    (Investigative, &["analyze", "research", "logic", "math", "experiment", "think", "study", "question"]),
    (Artistic, &["art", "draw", "creative", "design", "music", "imagine", "express", "perform"]),
    (Social, &["help", "support", "teach", "care", "mentor", "community", "listen", "guide"]),
    (Enterprising, &["lead", "persuade", "motivate", "business", "sell", "organize people", "inspire"]),
    (Conventional, &["plan", "organize", "detail", "record", "structure", "systems", "schedule", "rules"]),
];

#[rustfmt::skip]
const STANDARD_CAREERS: &[(Category, &str, &str)] = &[
    (Realistic, "Technician", "Installs, maintains, and troubleshoots equipment and systems."),
    (Realistic, "Mechanic", "Diagnoses and repairs vehicles and machinery."),
    (Realistic, "Hands-on Engineer", "Builds and tests physical prototypes and installations."),
    (Investigative, "Data Scientist", "Finds patterns in data and builds predictive models."),
    (Investigative, "Researcher", "Designs studies and experiments to answer open questions."),
    (Investigative, "Software Developer", "Designs and writes programs to solve problems."),
    (Artistic, "Graphic Designer", "Creates visual identities, layouts, and illustrations."),
    (Artistic, "Musician", "Composes and performs music."),
    (Artistic, "Writer", "Crafts stories, articles, and copy."),
    (Artistic, "Animator", "Brings characters and scenes to life frame by frame."),
    (Social, "Teacher", "Plans lessons and helps students learn and grow."),
    (Social, "Counselor", "Listens to people and guides them through difficulties."),
    (Social, "Nurse", "Cares for patients and coordinates their treatment."),
    (Social, "Social Worker", "Connects people in need with community support."),
    (Enterprising, "Entrepreneur", "Starts and grows new business ventures."),
    (Enterprising, "Sales Manager", "Leads a sales team and closes key deals."),
    (Enterprising, "Project Leader", "Coordinates people and resources toward a goal."),
    (Conventional, "Accountant", "Keeps financial records accurate and compliant."),
    (Conventional, "Administrator", "Runs the processes that keep an organization moving."),
    (Conventional, "Operations Coordinator", "Schedules, tracks, and documents day-to-day operations."),
];

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_fifty_statements() {
        let catalog = QuizCatalog::standard();
        assert_eq!(catalog.len(), 50);
        assert_eq!(catalog.statements()[0].id(), StatementId::new(1));
        assert_eq!(catalog.statements()[49].id(), StatementId::new(50));
    }

    #[test]
    fn standard_catalog_tags_the_two_dual_statements() {
        let catalog = QuizCatalog::standard();
        let q49 = catalog.statement(StatementId::new(49)).unwrap();
        assert!(q49.is_tagged(Investigative) && q49.is_tagged(Realistic));
        let q50 = catalog.statement(StatementId::new(50)).unwrap();
        assert!(q50.is_tagged(Artistic) && q50.is_tagged(Social));
    }

    #[test]
    fn standard_catalog_covers_every_category_with_careers() {
        let catalog = QuizCatalog::standard();
        for category in Category::ALL {
            assert!(!catalog.careers(category).is_empty(), "{category} has no careers");
        }
    }

    #[test]
    fn unknown_statement_lookup_returns_none() {
        let catalog = QuizCatalog::standard();
        assert!(catalog.statement(StatementId::new(999)).is_none());
    }

    #[test]
    fn lexicon_lowercases_keywords() {
        let lexicon = KeywordLexicon::from_entries([(Realistic, ["Tools", "BUILD"].as_slice())]);
        assert_eq!(lexicon.keywords(Realistic), ["tools", "build"]);
        assert!(lexicon.keywords(Social).is_empty());
    }

    #[test]
    fn catalog_rejects_duplicate_statement_ids() {
        let statements = vec![
            Statement::new(StatementId::new(1), "One?", vec![Realistic]).unwrap(),
            Statement::new(StatementId::new(1), "Two?", vec![Social]).unwrap(),
        ];
        let careers = Category::ALL
            .map(|c| (c, CareerEntry::new("Anything", "").unwrap()));
        let err = QuizCatalog::new(statements, KeywordLexicon::standard(), careers).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateStatementId(id) if id == StatementId::new(1)));
    }

    #[test]
    fn catalog_rejects_missing_careers() {
        let statements =
            vec![Statement::new(StatementId::new(1), "One?", vec![Realistic]).unwrap()];
        let careers = [(Realistic, CareerEntry::new("Technician", "").unwrap())];
        let err = QuizCatalog::new(statements, KeywordLexicon::standard(), careers).unwrap_err();
        assert!(matches!(err, CatalogError::MissingCareers(_)));
    }

    #[test]
    fn catalog_rejects_empty_statement_list() {
        let careers = Category::ALL
            .map(|c| (c, CareerEntry::new("Anything", "").unwrap()));
        let err =
            QuizCatalog::new(Vec::new(), KeywordLexicon::standard(), careers).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }
}
