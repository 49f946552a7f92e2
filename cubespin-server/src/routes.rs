//! Request handlers
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use cubespin_core::{ProjectionResult, VertexService};
use tracing::{debug, warn};

use crate::error::ApiError;

const INDEX_HTML: &str = include_str!("../assets/index.html");

pub const HEALTH_BODY: &str = "Health : OK";

/// First value of `name` in the query, later repeats are ignored
fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// `GET /` - the browser animation page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /health`
pub async fn health() -> &'static str {
    HEALTH_BODY
}

/// `GET /computeVertices?angle=<int>`
pub async fn compute_vertices(
    State(service): State<Arc<VertexService>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ProjectionResult>, ApiError> {
    let angle = first_param(&params, "angle");
    let frame = service
        .compute_frame_from_text(angle)
        .map_err(|e| {
            warn!(angle = ?angle, "rejected frame request: {}", e);
            ApiError::from(e)
        })?;

    debug!(angle = frame.angle, "computed frame");
    Ok(Json(frame))
}
