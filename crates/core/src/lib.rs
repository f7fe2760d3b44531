#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod logging;
pub mod model;
pub mod recommend;
pub mod scoring;
pub mod time;

pub use catalog::{KeywordLexicon, QuizCatalog};
pub use error::Error;
pub use recommend::{
    CategoryRecommendation, Ranking, RecommendationPolicy, TieBreak, recommendations,
};
pub use scoring::{ScoreDelta, Scorer};
pub use time::Clock;
