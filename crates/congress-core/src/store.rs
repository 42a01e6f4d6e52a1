//! Read-only SQL store for legislator lookups
//!
//! One parameterized `SELECT` per display region. The store never creates,
//! updates or deletes rows; tables are populated by a separate ingestion job.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Row, ValueRef};
use tracing::{debug, info};

use crate::error::{CoreError, Result};
use crate::models::{Biography, Bill, KeywordScore, Legislator, VoteComparison, NO_TITLE_SENTINEL};

/// Tables every lookup depends on
const REQUIRED_TABLES: [&str; 4] = ["members", "bills", "vote_compare", "tfidf"];

/// Expected schema, as produced by the ingestion job
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS members (
    bioguide_id TEXT PRIMARY KEY,
    full_name TEXT NOT NULL,
    state_abbrev TEXT NOT NULL,
    district_code INTEGER,
    party TEXT,
    left_right_ideology REAL,
    image TEXT,
    fec_id TEXT,
    bioname TEXT,
    icpsr INTEGER
);

CREATE TABLE IF NOT EXISTS bills (
    bioguide_id TEXT NOT NULL,
    bill_title TEXT,
    introducedDate TEXT,
    url TEXT
);

CREATE TABLE IF NOT EXISTS vote_compare (
    bioname TEXT NOT NULL,
    comparison_member TEXT NOT NULL,
    agree REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS tfidf (
    bioguide_id TEXT NOT NULL,
    keyword TEXT NOT NULL,
    tf_idf REAL NOT NULL
);
"#;

#[derive(Debug, Clone)]
pub struct CongressStore {
    pool: SqlitePool,
}

impl CongressStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Fails with [`CoreError::SchemaMissing`] naming the first absent table.
    pub async fn verify_schema(&self) -> Result<()> {
        for table in REQUIRED_TABLES {
            let found: Option<(String,)> =
                sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
                    .bind(table)
                    .fetch_optional(&self.pool)
                    .await?;

            if found.is_none() {
                return Err(CoreError::SchemaMissing(table));
            }
        }

        info!("Schema verified: {}", REQUIRED_TABLES.join(", "));
        Ok(())
    }

    /// Every legislator in storage order
    pub async fn legislators(&self) -> Result<Vec<Legislator>> {
        let members: Vec<Legislator> = sqlx::query_as(
            r#"
            SELECT bioguide_id, full_name, state_abbrev, district_code, party,
                   left_right_ideology, image, bioname
            FROM members
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    /// All displayable `members` columns for one legislator
    pub async fn biography(&self, bioguide_id: &str) -> Result<Biography> {
        let row = sqlx::query("SELECT * FROM members WHERE bioguide_id = ?")
            .bind(bioguide_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| CoreError::LegislatorNotFound(bioguide_id.to_string()))?;

        let mut columns = Vec::with_capacity(row.columns().len());
        for column in row.columns() {
            columns.push((column.name().to_string(), cell_text(&row, column.ordinal())?));
        }

        let bio = Biography::from_columns(bioguide_id, columns);
        debug!(bioguide_id, fields = bio.fields.len(), "biography loaded");
        Ok(bio)
    }

    /// Portrait image reference. `None` when the member has no image on record.
    pub async fn portrait(&self, bioguide_id: &str) -> Result<Option<String>> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT image FROM members WHERE bioguide_id = ?")
                .bind(bioguide_id)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            None => Err(CoreError::LegislatorNotFound(bioguide_id.to_string())),
            Some((image,)) => Ok(image.filter(|i| !i.trim().is_empty())),
        }
    }

    /// Agreement with each comparison partner, joined back to the partner's
    /// ideology score and party.
    pub async fn vote_comparisons(&self, bioguide_id: &str) -> Result<Vec<VoteComparison>> {
        let comparisons: Vec<VoteComparison> = sqlx::query_as(
            r#"
            SELECT c.comparison_member, c.agree, m.left_right_ideology, m.party
            FROM members m
            INNER JOIN (
                SELECT vc.comparison_member, vc.agree
                FROM members s
                INNER JOIN vote_compare vc
                    ON s.bioname = vc.bioname
                WHERE s.bioguide_id = ?
            ) c
                ON m.bioname = c.comparison_member
            ORDER BY c.comparison_member
            "#,
        )
        .bind(bioguide_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(bioguide_id, points = comparisons.len(), "vote comparisons loaded");
        Ok(comparisons)
    }

    /// Sponsored bills in storage order, skipping untitled ones
    pub async fn bills(&self, bioguide_id: &str) -> Result<Vec<Bill>> {
        let bills: Vec<Bill> = sqlx::query_as(
            r#"
            SELECT bill_title, introducedDate AS introduced_date, url
            FROM bills
            WHERE bioguide_id = ? AND bill_title != ?
            ORDER BY rowid
            "#,
        )
        .bind(bioguide_id)
        .bind(NO_TITLE_SENTINEL)
        .fetch_all(&self.pool)
        .await?;

        debug!(bioguide_id, bills = bills.len(), "bills loaded");
        Ok(bills)
    }

    /// Keyword scores, lowest first
    pub async fn keywords(&self, bioguide_id: &str) -> Result<Vec<KeywordScore>> {
        let scores: Vec<KeywordScore> = sqlx::query_as(
            r#"
            SELECT keyword, tf_idf
            FROM tfidf
            WHERE bioguide_id = ?
            ORDER BY tf_idf ASC
            "#,
        )
        .bind(bioguide_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(bioguide_id, keywords = scores.len(), "keywords loaded");
        Ok(scores)
    }
}

/// Renders any SQLite cell for display. NULL becomes an empty string.
fn cell_text(row: &SqliteRow, index: usize) -> std::result::Result<String, sqlx::Error> {
    if row.try_get_raw(index)?.is_null() {
        return Ok(String::new());
    }
    if let Ok(value) = row.try_get::<i64, _>(index) {
        return Ok(value.to_string());
    }
    if let Ok(value) = row.try_get::<f64, _>(index) {
        return Ok(value.to_string());
    }
    row.try_get::<String, _>(index)
}
