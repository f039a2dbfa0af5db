mod compare;
mod dashboard;
mod export;
mod params;
mod properties;
mod regions;

use crate::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

/// All routes of the read-only listing API
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/properties", get(properties::list_properties))
        .route("/properties/:id", get(properties::get_property))
        .route("/districts/:district/properties", get(properties::list_by_district))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/export", get(export::export_csv))
        .route("/compare", get(compare::compare))
        .route("/regions", get(regions::list_regions))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::router;
    use crate::models::Listing;
    use crate::store::ListingStore;
    use crate::AppState;
    use axum::{
        body::{to_bytes, Body},
        http::{HeaderMap, Request, StatusCode},
        Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    pub fn app(listings: Vec<Listing>) -> Router {
        router(Arc::new(AppState {
            store: ListingStore::new(listings),
        }))
    }

    pub async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, body.to_vec())
    }

    pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, _, body) = get(app, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }
}
