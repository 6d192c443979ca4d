//! Data transfer objects for web responses.

use serde::Serialize;

use crate::metrics::RouteMetrics;

/// Aggregate metrics for one route.
#[derive(Debug, Serialize)]
pub struct RouteStatsDto {
    /// Route id
    pub name: String,

    /// Stop visits on a full traversal
    pub stop_count: usize,

    /// Stored sequence length
    pub unique_stop_count: usize,

    /// Routed travel distance in meters
    pub route_length: f64,

    /// Routed over geometric length; `null` when degenerate
    pub curvature: f64,
}

impl RouteStatsDto {
    /// Build the response from computed metrics.
    pub fn from_metrics(name: &str, metrics: &RouteMetrics) -> Self {
        Self {
            name: name.to_string(),
            stop_count: metrics.stop_count,
            unique_stop_count: metrics.unique_stop_count,
            route_length: metrics.route_length,
            curvature: metrics.curvature,
        }
    }
}

/// The routes calling at one stop.
#[derive(Debug, Serialize)]
pub struct StopStatsDto {
    /// Stop name
    pub name: String,

    /// Serving route ids, in lexicographic order
    pub buses: Vec<String>,
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
