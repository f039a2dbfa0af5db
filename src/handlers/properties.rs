use super::params::FilterParams;
use crate::error::ApiError;
use crate::regions;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// GET /properties: listings matching the query-string filter, in store order
pub async fn list_properties(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let spec = params.to_filter()?;
    let listings = state.store.query(&spec);

    tracing::info!(
        "Query matched {} of {} listings",
        listings.len(),
        state.store.len()
    );

    Ok(Json(listings).into_response())
}

/// GET /properties/:id
pub async fn get_property(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match state.store.find_by_id(&id) {
        Some(listing) => Ok(Json(listing).into_response()),
        None => Err(ApiError::NotFound(id)),
    }
}

/// GET /districts/:district/properties: every listing in one district, unfiltered.
/// Districts outside the region table are a 404; a known district with no
/// listings is an empty array.
pub async fn list_by_district(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let Some((region, district)) = regions::find_district(&name) else {
        return Err(ApiError::UnknownDistrict(name));
    };

    let listings = state.store.by_district(district.name);
    tracing::info!("{} listings in {} {}", listings.len(), region.name, district.name);
    Ok(Json(listings).into_response())
}
