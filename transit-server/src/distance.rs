//! Pairwise stop-distance resolution.
//!
//! Explicit road distances are directional and may exist for only one
//! direction of a pair. The resolver applies an ordered fallback so a
//! recorded distance is never silently ignored: the forward override
//! wins, then the reverse override stands in for the missing direction,
//! and only then does geometry take over.

use crate::geo;
use crate::network::Network;

/// Resolves the authoritative travel distance between two stops.
///
/// Borrows the network read-only; cheap to construct per query.
#[derive(Debug, Clone, Copy)]
pub struct DistanceResolver<'a> {
    network: &'a Network,
}

impl<'a> DistanceResolver<'a> {
    /// Create a resolver over a built network.
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// Directed travel distance from `from` to `to`, in meters.
    ///
    /// Precedence, first match wins:
    /// 1. `from`'s explicit override to `to`;
    /// 2. `to`'s explicit override back to `from` (the reverse entry is
    ///    a deliberate stand-in for the missing direction, not an error);
    /// 3. great-circle distance, when both stops have known locations;
    /// 4. 0 for unknown stops.
    pub fn resolve(&self, from: &str, to: &str) -> f64 {
        if let Some(d) = self.network.stop(from).and_then(|s| s.override_to(to)) {
            return d;
        }
        if let Some(d) = self.network.stop(to).and_then(|s| s.override_to(from)) {
            return d;
        }
        self.geo_length(from, to)
    }

    /// Straight-line great-circle distance between two stops, in meters,
    /// ignoring overrides. 0 when either stop is unknown.
    pub fn geo_length(&self, from: &str, to: &str) -> f64 {
        match (self.network.stop(from), self.network.stop(to)) {
            (Some(a), Some(b)) => geo::distance(a.location, b.location),
            _ => 0.0,
        }
    }
}
