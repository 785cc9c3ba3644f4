use axum::{extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;

use crate::AppState;

/// Returns the configured GeoJSON file, re-read on every request.
pub async fn get_geojson(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let document = state.source.load().await.map_err(|e| {
        tracing::error!(
            error = %e,
            path = %state.source.path().display(),
            "Failed to load GeoJSON document"
        );
        e
    })?;

    Ok(Json(document))
}
