//! HTTP query surface over a built network.
//!
//! Thin read-only adapters: every handler queries the shared immutable
//! [`Network`](crate::network::Network) and serializes a typed response.

mod dto;
mod routes;
mod state;

pub use dto::{RouteStatsDto, StopStatsDto};
pub use routes::{AppError, create_router};
pub use state::AppState;
