//! Congress Core - legislator lookups for the congress dashboard
//!
//! Provides:
//! - Typed rows for legislators, bills, vote comparisons and keyword scores
//! - A read-only SQL store with one parameterized lookup per display region
//! - Plotly-compatible figure builders for tables, scatter plots and bar charts

pub mod error;
pub mod figure;
pub mod models;
pub mod store;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{CoreError, Result};
pub use figure::{party_color, Figure};
pub use models::{
    Bill, BioField, Biography, KeywordScore, Legislator, MemberOption, VoteComparison,
    EXCLUDED_BIO_FIELDS, NO_TITLE_SENTINEL,
};
pub use store::{CongressStore, SCHEMA};
