//! Per-route aggregate metrics.
//!
//! Walks a route's stop sequence through the [`DistanceResolver`] for the
//! routed distance and through pure great-circle geometry for the
//! straight-line length. The two traversals differ for linear routes:
//! resolution is directional, so the return trip is walked edge by edge,
//! while geometry is symmetric and the forward length is simply doubled.

use crate::distance::DistanceResolver;
use crate::network::{Network, Route};

/// Aggregate metrics for one route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMetrics {
    /// Stop visits on a full traversal: `len + 1` for circular routes
    /// (the closing leg arrives back at the start), `2·len − 1` for
    /// linear routes (the return trip revisits all but the last stop).
    pub stop_count: usize,

    /// Stored sequence length. Mid-route duplicates are counted as-is;
    /// only the circular closing duplicate is normalized away.
    pub unique_stop_count: usize,

    /// Travel distance over every edge actually traversed, in meters,
    /// via the resolver (overrides first).
    pub route_length: f64,

    /// The same traversal measured as straight-line great-circle
    /// distance, ignoring overrides.
    pub geometric_length: f64,

    /// `route_length / geometric_length`: how much the road winds
    /// compared to the crow-flies path. NaN when the geometric length is
    /// zero (single-stop or empty routes); the JSON layer serializes that
    /// as `null`.
    pub curvature: f64,
}

/// Compute the metrics for a route, or `None` if the id is unknown.
///
/// A route with an empty stop sequence yields zero for every count and
/// length (and NaN curvature from the degenerate 0/0 division).
pub fn route_metrics(network: &Network, id: &str) -> Option<RouteMetrics> {
    let route = network.route(id)?;
    let resolver = DistanceResolver::new(network);

    let route_length = routed_edge_sum(route, |from, to| resolver.resolve(from, to));
    let geometric_length = geometric_edge_sum(route, |from, to| resolver.geo_length(from, to));

    Some(RouteMetrics {
        stop_count: stop_count(route),
        unique_stop_count: route.len(),
        route_length,
        geometric_length,
        curvature: route_length / geometric_length,
    })
}

fn stop_count(route: &Route) -> usize {
    if route.is_empty() {
        0
    } else if route.is_circular {
        route.len() + 1
    } else {
        2 * route.len() - 1
    }
}

/// Sum `dist` over every directed edge actually traveled.
///
/// Circular: each consecutive pair plus the closing edge back to the
/// start. Linear: the forward edges, then every edge again in reverse
/// order with swapped endpoints. Resolution may differ by direction, so
/// this is not the forward sum doubled.
fn routed_edge_sum(route: &Route, mut dist: impl FnMut(&str, &str) -> f64) -> f64 {
    let stops = &route.stops;
    if stops.is_empty() {
        return 0.0;
    }
    let forward: f64 = stops.windows(2).map(|pair| dist(&pair[0], &pair[1])).sum();
    if route.is_circular {
        let closing = dist(stops.last().expect("non-empty"), &stops[0]);
        forward + closing
    } else {
        let backward: f64 = stops
            .windows(2)
            .rev()
            .map(|pair| dist(&pair[1], &pair[0]))
            .sum();
        forward + backward
    }
}

/// Same traversal measured symmetrically: the linear return trip equals
/// the forward trip, so the forward sum is doubled instead of re-walked.
fn geometric_edge_sum(route: &Route, mut dist: impl FnMut(&str, &str) -> f64) -> f64 {
    let stops = &route.stops;
    if stops.is_empty() {
        return 0.0;
    }
    let forward: f64 = stops.windows(2).map(|pair| dist(&pair[0], &pair[1])).sum();
    if route.is_circular {
        forward + dist(stops.last().expect("non-empty"), &stops[0])
    } else {
        forward * 2.0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::geo::Coordinate;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn stop_grid(count: usize) -> Network {
        let mut network = Network::new();
        for i in 0..count {
            network.add_stop(
                format!("S{i}"),
                Coordinate::new(i as f64 * 0.01, (i % 3) as f64 * 0.01),
                HashMap::new(),
            );
        }
        network
    }

    proptest! {
        /// Without overrides the routed and geometric lengths coincide,
        /// for circular and linear routes alike.
        #[test]
        fn no_overrides_means_unit_curvature(
            indices in proptest::collection::vec(0usize..8, 2..6),
            circular in any::<bool>(),
        ) {
            let mut network = stop_grid(8);
            let stops: Vec<String> = indices.iter().map(|i| format!("S{i}")).collect();
            network.add_route("r", stops, circular);

            let m = route_metrics(&network, "r").unwrap();
            prop_assert!((m.route_length - m.geometric_length).abs() < 1e-6);
        }

        /// Lengths are never negative and counts follow the traversal
        /// formulas.
        #[test]
        fn counts_match_traversal(
            indices in proptest::collection::vec(0usize..8, 1..6),
            circular in any::<bool>(),
        ) {
            let mut network = stop_grid(8);
            let stops: Vec<String> = indices.iter().map(|i| format!("S{i}")).collect();
            network.add_route("r", stops, circular);

            let m = route_metrics(&network, "r").unwrap();
            let len = m.unique_stop_count;
            if circular {
                prop_assert_eq!(m.stop_count, len + 1);
            } else {
                prop_assert_eq!(m.stop_count, 2 * len - 1);
            }
            prop_assert!(m.route_length >= 0.0);
            prop_assert!(m.geometric_length >= 0.0);
        }
    }
}
