mod career;
mod category;
mod ids;
mod response;
mod statement;
mod tally;

pub use career::{CareerEntry, CareerError};
pub use category::{Category, CategoryError};
pub use ids::{ParseIdError, SessionId, StatementId};
pub use response::{LikertRating, Response};
pub use statement::{Statement, StatementError};
pub use tally::CategoryTally;
