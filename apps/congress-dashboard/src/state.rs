//! Application state for the congress dashboard

use anyhow::Result;
use congress_core::{CongressStore, MemberOption};
use tracing::{info, warn};

/// Shared application state, immutable once the server starts
pub struct AppState {
    /// Read-only legislator store
    pub store: CongressStore,
    /// Dropdown choices, read once at startup
    pub roster: Vec<MemberOption>,
    /// Initially selected bioguide id
    pub default_member: String,
}

impl AppState {
    /// Connect to the database, check its tables and load the roster
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        default_member: String,
    ) -> Result<Self> {
        info!("Connecting to {} database", database_scheme(database_url));
        let store = CongressStore::connect(database_url, max_connections).await?;
        store.verify_schema().await?;

        Self::from_store(store, default_member).await
    }

    /// Build state over an existing store, reading every legislator once
    pub async fn from_store(store: CongressStore, default_member: String) -> Result<Self> {
        let roster: Vec<MemberOption> = store
            .legislators()
            .await?
            .iter()
            .map(|m| m.to_option())
            .collect();

        info!("Loaded {} legislators", roster.len());
        if !roster.iter().any(|o| o.value == default_member) {
            warn!(
                "Default member {} is not in the roster; the page will start on the first entry",
                default_member
            );
        }

        Ok(Self {
            store,
            roster,
            default_member,
        })
    }
}

/// Scheme of a connection string, e.g. `sqlite` or `postgres`.
///
/// Only this part is logged; the rest may carry credentials.
pub fn database_scheme(database_url: &str) -> &str {
    match database_url.split_once(':') {
        Some((scheme, _)) if !scheme.is_empty() => scheme,
        _ => "unknown",
    }
}
