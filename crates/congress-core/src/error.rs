//! Error types for congress lookups

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Legislator not found: {0}")]
    LegislatorNotFound(String),

    #[error("Required table is missing: {0}")]
    SchemaMissing(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
