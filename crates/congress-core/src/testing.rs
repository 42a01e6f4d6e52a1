//! In-memory stores for tests

use sqlx::sqlite::SqlitePoolOptions;

use crate::error::Result;
use crate::store::{CongressStore, SCHEMA};

/// Five members: three House seats, an independent senator without an
/// ideology score, and a senator with no bills, keywords or vote records.
pub const FIXTURE: &str = r#"
INSERT INTO members (bioguide_id, full_name, state_abbrev, district_code, party,
                     left_right_ideology, image, fec_id, bioname, icpsr) VALUES
    ('N000188', 'Donald Norcross', 'NJ', 1, 'Democrat', -0.38,
     'https://www.congress.gov/img/member/n000188_200.jpg', 'H4NJ01084', 'NORCROSS, Donald', 21559),
    ('P000034', 'Frank Pallone', 'NJ', 6, 'Democrat', -0.4,
     'https://www.congress.gov/img/member/p000034_200.jpg', 'H8NJ03073', 'PALLONE, Frank, Jr.', 15616),
    ('S000522', 'Christopher H. Smith', 'NJ', 4, 'Republican', 0.2,
     'https://www.congress.gov/img/member/s000522_200.jpg', 'H8NJ04014', 'SMITH, Christopher Henry', 14863),
    ('S000033', 'Bernard Sanders', 'VT', 0, 'Independent', NULL,
     'https://www.congress.gov/img/member/s000033_200.jpg', 'S4VT00033', 'SANDERS, Bernard', 29147),
    ('B001230', 'Tammy Baldwin', 'WI', 0, 'Democrat', -0.49,
     'https://www.congress.gov/img/member/b001230_200.jpg', 'S2WI00219', 'BALDWIN, Tammy', 29940);

INSERT INTO vote_compare (bioname, comparison_member, agree) VALUES
    ('NORCROSS, Donald', 'PALLONE, Frank, Jr.', 96.5),
    ('NORCROSS, Donald', 'SMITH, Christopher Henry', 42.0),
    ('NORCROSS, Donald', 'SANDERS, Bernard', 88.1),
    ('NORCROSS, Donald', 'GHOST, Former', 70.0),
    ('PALLONE, Frank, Jr.', 'NORCROSS, Donald', 96.5),
    ('SANDERS, Bernard', 'NORCROSS, Donald', 88.1);

INSERT INTO bills (bioguide_id, bill_title, introducedDate, url) VALUES
    ('N000188', 'National Apprenticeship Act', '2021-02-05',
     'https://www.congress.gov/bill/117th-congress/house-bill/447'),
    ('N000188', 'None', '2021-03-01', NULL),
    ('N000188', NULL, '2021-03-02', NULL),
    ('N000188', 'Butch Lewis Act', '2021-04-22',
     'https://www.congress.gov/bill/117th-congress/house-bill/423'),
    ('P000034', 'Clean Future Act', '2021-03-02',
     'https://www.congress.gov/bill/117th-congress/house-bill/1512');

INSERT INTO tfidf (bioguide_id, keyword, tf_idf) VALUES
    ('N000188', 'apprenticeship', 0.31),
    ('N000188', 'workforce', 0.12),
    ('N000188', 'labor', 0.25),
    ('N000188', 'pension', 0.05),
    ('P000034', 'energy', 0.44);
"#;

/// Single-connection in-memory database with no tables
pub async fn memory_store() -> Result<CongressStore> {
    // Each in-memory connection is its own database, so the pool must never
    // open a second one or recycle the first.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    Ok(CongressStore::from_pool(pool))
}

/// In-memory database with the schema and [`FIXTURE`] loaded
pub async fn fixture_store() -> Result<CongressStore> {
    let store = memory_store().await?;
    sqlx::raw_sql(SCHEMA).execute(store.pool()).await?;
    sqlx::raw_sql(FIXTURE).execute(store.pool()).await?;
    Ok(store)
}
