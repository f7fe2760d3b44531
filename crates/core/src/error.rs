use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{CareerError, CategoryError, StatementError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Statement(#[from] StatementError),
    #[error(transparent)]
    Career(#[from] CareerError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
