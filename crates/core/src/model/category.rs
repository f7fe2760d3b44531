use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors raised when decoding a category code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("unknown category code: {0:?}")]
    UnknownCode(char),

    #[error("category code must be a single letter, got {0:?}")]
    NotASingleLetter(String),
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// One of the six Holland interest categories (RIASEC).
///
/// Serialized as the single-letter code (`"R"`, `"I"`, ...), which is also
/// the form used in quiz payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "R")]
    Realistic,
    #[serde(rename = "I")]
    Investigative,
    #[serde(rename = "A")]
    Artistic,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "E")]
    Enterprising,
    #[serde(rename = "C")]
    Conventional,
}

impl Category {
    /// All categories in fixed priority order.
    ///
    /// This order doubles as the default tie-break for rankings: when two
    /// categories hold equal scores, the one earlier in this array wins.
    pub const ALL: [Category; 6] = [
        Category::Realistic,
        Category::Investigative,
        Category::Artistic,
        Category::Social,
        Category::Enterprising,
        Category::Conventional,
    ];

    /// Number of categories in the taxonomy.
    pub const COUNT: usize = Self::ALL.len();

    /// Single-letter code for this category.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Category::Realistic => 'R',
            Category::Investigative => 'I',
            Category::Artistic => 'A',
            Category::Social => 'S',
            Category::Enterprising => 'E',
            Category::Conventional => 'C',
        }
    }

    /// Decodes a single-letter code, case insensitive.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::UnknownCode` for letters outside RIASEC.
    pub fn from_code(code: char) -> Result<Self, CategoryError> {
        match code.to_ascii_uppercase() {
            'R' => Ok(Category::Realistic),
            'I' => Ok(Category::Investigative),
            'A' => Ok(Category::Artistic),
            'S' => Ok(Category::Social),
            'E' => Ok(Category::Enterprising),
            'C' => Ok(Category::Conventional),
            other => Err(CategoryError::UnknownCode(other)),
        }
    }

    /// Human-readable category name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Realistic => "Realistic",
            Category::Investigative => "Investigative",
            Category::Artistic => "Artistic",
            Category::Social => "Social",
            Category::Enterprising => "Enterprising",
            Category::Conventional => "Conventional",
        }
    }

    /// Dense index into per-category arrays, following `Category::ALL`.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Category::Realistic => 0,
            Category::Investigative => 1,
            Category::Artistic => 2,
            Category::Social => 3,
            Category::Enterprising => 4,
            Category::Conventional => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Category::from_code(code),
            _ => Err(CategoryError::NotASingleLetter(trimmed.to_string())),
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
    fn all_lists_every_category_once() {
        assert_eq!(Category::ALL.len(), Category::COUNT);
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn code_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()).unwrap(), category);
        }
    }

    #[test]
    fn from_code_is_case_insensitive() {
        assert_eq!(Category::from_code('r').unwrap(), Category::Realistic);
        assert_eq!(Category::from_code('s').unwrap(), Category::Social);
    }

    #[test]
    fn from_code_rejects_unknown_letters() {
        let err = Category::from_code('X').unwrap_err();
        assert!(matches!(err, CategoryError::UnknownCode('X')));
    }

    #[test]
    fn from_str_accepts_single_letter_only() {
        assert_eq!(" e ".parse::<Category>().unwrap(), Category::Enterprising);
        assert!("RI".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn serializes_as_one_letter_code() {
        let json = serde_json::to_string(&Category::Artistic).unwrap();
        assert_eq!(json, "\"A\"");
        let back: Category = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(back, Category::Conventional);
    }
}
