use crate::regions::{Region, REGIONS};
use axum::Json;

/// GET /regions: the region → district → neighborhood picker table
pub async fn list_regions() -> Json<&'static [Region]> {
    Json(REGIONS)
}
