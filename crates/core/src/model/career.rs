use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CareerError {
    #[error("career title cannot be blank")]
    BlankTitle,
}

//
// ─── CAREER ENTRY ──────────────────────────────────────────────────────────────
//

/// One suggested career, associated with a single category in the catalog.
///
/// Immutable reference data; the description may be empty for terse catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerEntry {
    title: String,
    description: String,
}

impl CareerEntry {
    /// Creates a career entry.
    ///
    /// # Errors
    ///
    /// Returns `CareerError::BlankTitle` for an empty or whitespace title.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, CareerError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CareerError::BlankTitle);
        }
        Ok(Self {
            title,
            description: description.into(),
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn career_rejects_blank_title() {
        let err = CareerEntry::new("  ", "whatever").unwrap_err();
        assert!(matches!(err, CareerError::BlankTitle));
    }

    #[test]
    fn career_keeps_title_and_description() {
        let entry = CareerEntry::new("Data Scientist", "Works with data.").unwrap();
        assert_eq!(entry.title(), "Data Scientist");
        assert_eq!(entry.description(), "Works with data.");
    }
}
