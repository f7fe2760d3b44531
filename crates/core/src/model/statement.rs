use thiserror::Error;

use crate::model::{Category, StatementId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StatementError {
    #[error("statement text cannot be blank")]
    BlankText,

    #[error("statement must be tagged with at least one category")]
    NoCategories,

    #[error("statement tagged twice with category {0}")]
    DuplicateCategory(Category),
}

//
// ─── STATEMENT ─────────────────────────────────────────────────────────────────
//

/// One quiz prompt, tagged with the categories it probes.
///
/// Statements are immutable reference data: a catalog builds them once at
/// startup and sessions only ever read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    id: StatementId,
    text: String,
    categories: Vec<Category>,
}

impl Statement {
    /// Creates a validated statement.
    ///
    /// # Errors
    ///
    /// Returns `StatementError::BlankText` for empty or whitespace-only text,
    /// `StatementError::NoCategories` when no tag is given, and
    /// `StatementError::DuplicateCategory` when a tag repeats.
    pub fn new(
        id: StatementId,
        text: impl Into<String>,
        categories: Vec<Category>,
    ) -> Result<Self, StatementError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(StatementError::BlankText);
        }
        if categories.is_empty() {
            return Err(StatementError::NoCategories);
        }
        for (i, category) in categories.iter().enumerate() {
            if categories[..i].contains(category) {
                return Err(StatementError::DuplicateCategory(*category));
            }
        }

        Ok(Self {
            id,
            text,
            categories,
        })
    }

    #[must_use]
    pub fn id(&self) -> StatementId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Categories this statement is tagged with, in declaration order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns true when the statement is tagged with `category`.
    #[must_use]
    pub fn is_tagged(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
