//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::render::RenderSettings;

/// Shared application state.
///
/// The network is built once at startup and read-only afterwards, so
/// handlers share it through `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    /// The built transit network.
    pub network: Arc<Network>,

    /// Map rendering parameters.
    pub settings: Arc<RenderSettings>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, settings: RenderSettings) -> Self {
        Self {
            network: Arc::new(network),
            settings: Arc::new(settings),
        }
    }
}
