use crate::comparison::Comparison;
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    /// Comma-separated listing ids
    pub ids: Option<String>,
}

/// GET /compare?ids=a,b: up to four distinct listings in request order.
/// Unknown ids are skipped rather than failing the whole comparison.
pub async fn compare(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompareParams>,
) -> Response {
    let mut comparison = Comparison::new();

    let ids = params.ids.unwrap_or_default();
    for id in ids.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if comparison.is_full() {
            break;
        }
        match state.store.find_by_id(id) {
            Some(listing) => {
                comparison.add(listing);
            }
            None => tracing::debug!("Skipping unknown listing {} in comparison", id),
        }
    }

    Json(&comparison).into_response()
}
