//! A single stop and its per-stop bookkeeping.

use std::collections::{BTreeSet, HashMap};

use crate::geo::Coordinate;

/// A named physical location on the network.
///
/// A stop can come into existence in two ways: directly, via
/// [`Network::add_stop`](super::Network::add_stop), or implicitly as a
/// placeholder when a route or a distance override mentions it before its
/// coordinates arrive. A later `add_stop` upgrades the placeholder in
/// place, leaving the serving-route set intact.
#[derive(Debug, Clone, Default)]
pub struct Stop {
    /// Geographic location. `(0, 0)` for placeholders.
    pub location: Coordinate,

    /// Ids of the routes calling at this stop, in lexicographic order.
    /// Maintained by `add_route`; never invalidated (routes are not
    /// removable).
    pub serving_routes: BTreeSet<String>,

    /// Directed real-world distance overrides to other stops, in meters.
    /// Partial and asymmetric: an entry for A→B says nothing about B→A.
    pub distances: HashMap<String, f64>,
}

impl Stop {
    /// Create a stop at a known location with its outgoing overrides.
    pub fn new(location: Coordinate, distances: HashMap<String, f64>) -> Self {
        Self {
            location,
            serving_routes: BTreeSet::new(),
            distances,
        }
    }

    /// The recorded override distance from this stop to `to`, if any.
    pub fn override_to(&self, to: &str) -> Option<f64> {
        self.distances.get(to).copied()
    }
}
