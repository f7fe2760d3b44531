use crate::model::Category;

//
// ─── CATEGORY TALLY ────────────────────────────────────────────────────────────
//

/// Per-category running score for one quiz attempt.
///
/// Every category is always present, starting at zero; scores only grow and
/// saturate instead of wrapping. The tally itself knows nothing about how
/// points are awarded — that is the scorer's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTally {
    scores: [u32; Category::COUNT],
}

impl CategoryTally {
    /// Creates a tally with every category at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score for one category.
    #[must_use]
    pub fn get(&self, category: Category) -> u32 {
        self.scores[category.index()]
    }

    /// Awards `points` to a category, saturating at `u32::MAX`.
    pub fn add(&mut self, category: Category, points: u32) {
        let slot = &mut self.scores[category.index()];
        *slot = slot.saturating_add(points);
    }

    /// Sum of all category scores.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.scores.iter().fold(0_u32, |acc, s| acc.saturating_add(*s))
    }

    /// Resets every category back to zero.
    pub fn reset(&mut self) {
        self.scores = [0; Category::COUNT];
    }

    /// Returns true when no points have been awarded yet.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.scores.iter().all(|s| *s == 0)
    }

    /// Iterates `(category, score)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(|&c| (c, self.get(c)))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tally_is_all_zero() {
        let tally = CategoryTally::new();
        assert!(tally.is_zero());
        assert_eq!(tally.total(), 0);
        for category in Category::ALL {
            assert_eq!(tally.get(category), 0);
        }
    }

    #[test]
    fn add_accumulates_per_category() {
        let mut tally = CategoryTally::new();
        tally.add(Category::Realistic, 1);
        tally.add(Category::Realistic, 2);
        tally.add(Category::Artistic, 5);

        assert_eq!(tally.get(Category::Realistic), 3);
        assert_eq!(tally.get(Category::Artistic), 5);
        assert_eq!(tally.total(), 8);
    }

    #[test]
    fn add_saturates_instead_of_wrapping() {
        let mut tally = CategoryTally::new();
        tally.add(Category::Social, u32::MAX);
        tally.add(Category::Social, 10);
        assert_eq!(tally.get(Category::Social), u32::MAX);
    }

    #[test]
    fn reset_zeroes_every_category() {
        let mut tally = CategoryTally::new();
        for category in Category::ALL {
            tally.add(category, 4);
        }
        tally.reset();
        assert!(tally.is_zero());
    }

    #[test]
    fn iter_covers_all_categories_in_priority_order() {
        let tally = CategoryTally::new();
        let order: Vec<Category> = tally.iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }
}
