//! HTTP handlers for the congress dashboard
//!
//! One handler per display region. Each is a pure function of the selected
//! bioguide id and re-queries the store on every request.

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use congress_core::{Bill, BioField, Figure, KeywordScore, MemberOption, VoteComparison};

use crate::error::ApiError;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Longest bioguide id accepted; real ids are 7 characters
const MAX_ID_LEN: usize = 16;

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LegislatorListResponse {
    /// Initially selected bioguide id, if the roster is not empty
    pub default: Option<String>,
    pub options: Vec<MemberOption>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct BiographyResponse {
    pub legislator_id: String,
    pub fields: Vec<BioField>,
    pub figure: Figure,
}

#[derive(Debug, Serialize)]
pub struct PortraitResponse {
    pub legislator_id: String,
    /// `null` when the legislator has no image on record
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VotesResponse {
    pub legislator_id: String,
    pub points: Vec<VoteComparison>,
    pub figure: Figure,
}

#[derive(Debug, Serialize)]
pub struct BillsResponse {
    pub legislator_id: String,
    pub bills: Vec<Bill>,
    pub count: usize,
    pub figure: Figure,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub legislator_id: String,
    pub keywords: Vec<KeywordScore>,
    pub figure: Figure,
}

// ============================================================================
// Handlers
// ============================================================================

/// Handler: GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handler: GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "congress-dashboard",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: GET /api/legislators
pub async fn list_legislators(State(state): State<Arc<AppState>>) -> Json<LegislatorListResponse> {
    let default = state
        .roster
        .iter()
        .find(|o| o.value == state.default_member)
        .or_else(|| state.roster.first())
        .map(|o| o.value.clone());

    Json(LegislatorListResponse {
        default,
        options: state.roster.clone(),
        count: state.roster.len(),
    })
}

/// Handler: GET /api/legislators/:id/biography
pub async fn biography(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BiographyResponse>, ApiError> {
    validate_id(&id)?;
    let bio = state.store.biography(&id).await?;
    let figure = Figure::biography(&bio);
    debug!("Biography for {}: {} rows", id, figure.point_count());

    Ok(Json(BiographyResponse {
        legislator_id: bio.legislator_id,
        fields: bio.fields,
        figure,
    }))
}

/// Handler: GET /api/legislators/:id/portrait
pub async fn portrait(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PortraitResponse>, ApiError> {
    validate_id(&id)?;
    let image = state.store.portrait(&id).await?;

    Ok(Json(PortraitResponse {
        legislator_id: id,
        image,
    }))
}

/// Handler: GET /api/legislators/:id/votes
pub async fn votes(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<VotesResponse>, ApiError> {
    validate_id(&id)?;
    let points = state.store.vote_comparisons(&id).await?;
    let figure = Figure::vote_scatter(&points);
    debug!(
        "Vote scatter for {}: {} points in {} traces",
        id,
        figure.point_count(),
        figure.data.len()
    );

    Ok(Json(VotesResponse {
        legislator_id: id,
        points,
        figure,
    }))
}

/// Handler: GET /api/legislators/:id/bills
pub async fn bills(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BillsResponse>, ApiError> {
    validate_id(&id)?;
    let bills = state.store.bills(&id).await?;
    let figure = Figure::bills(&bills);
    debug!("Bills table for {}: {} rows", id, figure.point_count());

    Ok(Json(BillsResponse {
        legislator_id: id,
        count: bills.len(),
        bills,
        figure,
    }))
}

/// Handler: GET /api/legislators/:id/keywords
pub async fn keywords(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<KeywordsResponse>, ApiError> {
    validate_id(&id)?;
    let keywords = state.store.keywords(&id).await?;
    let figure = Figure::keyword_bar(&keywords);
    debug!("Keyword chart for {}: {} bars", id, figure.point_count());

    Ok(Json(KeywordsResponse {
        legislator_id: id,
        keywords,
        figure,
    }))
}

/// Bioguide ids are short ASCII alphanumeric strings, e.g. `N000188`
pub fn validate_id(id: &str) -> Result<(), ApiError> {
    let valid = !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id.chars().all(|c| c.is_ascii_alphanumeric());

    if valid {
        Ok(())
    } else {
        Err(ApiError::InvalidId(id.to_string()))
    }
}
