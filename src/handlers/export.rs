use super::params::FilterParams;
use crate::error::ApiError;
use crate::export;
use crate::AppState;
use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    #[serde(flatten)]
    pub filter: FilterParams,
    pub filename: Option<String>,
}

/// GET /export: the filtered collection as a CSV download
pub async fn export_csv(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportParams>,
) -> Result<Response, ApiError> {
    let spec = params.filter.to_filter()?;
    let listings = state.store.query(&spec);
    let filename = export::export_filename(params.filename.as_deref());

    let disposition = HeaderValue::from_str(&export::content_disposition(&filename))
        .context("Failed to build Content-Disposition header")?;

    tracing::info!("Exporting {} listings as {}", listings.len(), filename);

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/csv; charset=utf-8")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export::to_csv(listings.iter().copied()),
    )
        .into_response())
}
