use crate::catalog::QuizCatalog;
use crate::model::{CareerEntry, Category, CategoryTally};

//
// ─── TIE BREAK ─────────────────────────────────────────────────────────────────
//

/// Explicit rule for ordering categories with equal scores.
///
/// Rankings never depend on incidental sort stability; ties are always
/// resolved by a named category order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The fixed `Category::ALL` priority order (R, I, A, S, E, C).
    #[default]
    Priority,
    /// A caller-supplied category order.
    Custom([Category; Category::COUNT]),
}

impl TieBreak {
    #[must_use]
    pub fn order(self) -> [Category; Category::COUNT] {
        match self {
            TieBreak::Priority => Category::ALL,
            TieBreak::Custom(order) => order,
        }
    }

    fn rank(self, category: Category) -> usize {
        self.order()
            .iter()
            .position(|&c| c == category)
            .unwrap_or(Category::COUNT)
    }
}

//
// ─── RANKING ───────────────────────────────────────────────────────────────────
//

/// Categories ordered by descending score.
///
/// Always contains all six categories, even those that scored zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    entries: Vec<(Category, u32)>,
}

impl Ranking {
    /// Ranks a tally with the given tie-break rule.
    #[must_use]
    pub fn from_tally(tally: &CategoryTally, tie_break: TieBreak) -> Self {
        let mut entries: Vec<(Category, u32)> = tally.iter().collect();
        entries.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| tie_break.rank(a.0).cmp(&tie_break.rank(b.0)))
        });
        Self { entries }
    }

    /// All `(category, score)` pairs, best first.
    #[must_use]
    pub fn entries(&self) -> &[(Category, u32)] {
        &self.entries
    }

    /// The dominant category.
    #[must_use]
    pub fn top(&self) -> Category {
        self.entries[0].0
    }

    /// The best `n` entries (or all six if `n` is larger).
    #[must_use]
    pub fn top_n(&self, n: usize) -> &[(Category, u32)] {
        &self.entries[..n.min(self.entries.len())]
    }
}

//
// ─── RECOMMENDATIONS ───────────────────────────────────────────────────────────
//

/// How many ranked categories feed the career suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecommendationPolicy {
    /// Careers for the single dominant category.
    #[default]
    TopCategory,
    /// Careers for the three best categories.
    TopThree,
    /// Careers pulled from successive ranked categories until the total
    /// entry count reaches the cap.
    CappedTotal(usize),
}

/// Career suggestions for one ranked category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecommendation {
    pub category: Category,
    pub score: u32,
    pub careers: Vec<CareerEntry>,
}

/// Resolves a ranking into career suggestions according to the policy.
#[must_use]
pub fn recommendations(
    ranking: &Ranking,
    catalog: &QuizCatalog,
    policy: RecommendationPolicy,
) -> Vec<CategoryRecommendation> {
    match policy {
        RecommendationPolicy::TopCategory => collect(ranking.top_n(1), catalog, usize::MAX),
        RecommendationPolicy::TopThree => collect(ranking.top_n(3), catalog, usize::MAX),
        RecommendationPolicy::CappedTotal(cap) => collect(ranking.entries(), catalog, cap),
    }
}

fn collect(
    entries: &[(Category, u32)],
    catalog: &QuizCatalog,
    cap: usize,
) -> Vec<CategoryRecommendation> {
    let mut out = Vec::new();
    let mut taken = 0;
    for &(category, score) in entries {
        if taken >= cap {
            break;
        }
        let careers: Vec<CareerEntry> = catalog
            .careers(category)
            .iter()
            .take(cap - taken)
            .cloned()
            .collect();
        taken += careers.len();
        out.push(CategoryRecommendation {
            category,
            score,
            careers,
        });
    }
    out
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
