//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::warn;

use crate::metrics::route_metrics;
use crate::render::MapRenderer;
use crate::requests::{StatReply, StatRequest, process_stats};

use super::dto::{ErrorResponse, RouteStatsDto, StopStatsDto};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes/:id", get(route_stats))
        .route("/stops/:name", get(stop_stats))
        .route("/map", get(map_svg))
        .route("/queries", post(batch_queries))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Aggregate metrics for one route.
async fn route_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RouteStatsDto>, AppError> {
    let metrics = route_metrics(&state.network, &id)
        .ok_or_else(|| AppError::NotFound(format!("route {id}")))?;
    Ok(Json(RouteStatsDto::from_metrics(&id, &metrics)))
}

/// The routes serving one stop.
///
/// A known stop that no route visits is reported as not found, matching
/// the batch adapter.
async fn stop_stats(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StopStatsDto>, AppError> {
    match state.network.routes_serving(&name) {
        Some(serving) if !serving.is_empty() => Ok(Json(StopStatsDto {
            name,
            buses: serving.iter().cloned().collect(),
        })),
        _ => Err(AppError::NotFound(format!("stop {name}"))),
    }
}

/// The SVG map of the whole network.
async fn map_svg(State(state): State<AppState>) -> impl IntoResponse {
    let document = MapRenderer::new(&state.network, &state.settings).render();
    (
        [(header::CONTENT_TYPE, "image/svg+xml")],
        document.render(),
    )
}

/// A batch of stat requests, answered in request order with the same
/// semantics as batch mode.
async fn batch_queries(
    State(state): State<AppState>,
    Json(requests): Json<Vec<StatRequest>>,
) -> Json<Vec<StatReply>> {
    Json(process_stats(&state.network, &state.settings, &requests))
}

/// Application error type.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    /// The requested route or stop is unknown.
    #[error("{0} not found")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        let message = self.to_string();
        warn!(%status, %message, "request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
