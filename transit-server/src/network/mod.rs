//! The transit network model.
//!
//! [`Network`] owns every stop and route. It is built once by repeated
//! [`Network::add_stop`] / [`Network::add_route`] calls (in any order,
//! since a route may mention stops whose coordinates arrive later) and
//! is read-only for the rest of the process. All derived quantities
//! (resolved distances, route metrics, the map projection) are computed
//! on demand from this structure.

mod route;
mod stop;

pub use route::Route;
pub use stop::Stop;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::geo::Coordinate;

/// The owning aggregate of all stops and routes.
///
/// Routes are kept in a `BTreeMap` so every iteration order (query
/// listings, palette assignment, map drawing) is lexicographic in the
/// route id and therefore deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stops: HashMap<String, Stop>,
    routes: BTreeMap<String, Route>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a stop.
    ///
    /// On update the location and the outgoing override map are fully
    /// replaced (last write wins, no merge), while the serving-route set
    /// built up by `add_route` is preserved.
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        location: Coordinate,
        distances: HashMap<String, f64>,
    ) {
        let name = name.into();
        match self.stops.get_mut(&name) {
            Some(stop) => {
                stop.location = location;
                stop.distances = distances;
            }
            None => {
                self.stops.insert(name, Stop::new(location, distances));
            }
        }
    }

    /// Store a route and register it with every stop it visits.
    ///
    /// The input is normalized per [`Route::new`]. Stops not yet known
    /// are created as placeholders so the reverse index stays complete;
    /// a later `add_stop` fills in their coordinates.
    pub fn add_route(&mut self, id: impl Into<String>, stops: Vec<String>, is_circular: bool) {
        let id = id.into();
        let route = Route::new(stops, is_circular);
        for name in &route.stops {
            self.stops
                .entry(name.clone())
                .or_default()
                .serving_routes
                .insert(id.clone());
        }
        self.routes.insert(id, route);
    }

    /// Whether a stop with this name is known (including placeholders).
    pub fn stop_exists(&self, name: &str) -> bool {
        self.stops.contains_key(name)
    }

    /// Whether a route with this id is known.
    pub fn route_exists(&self, id: &str) -> bool {
        self.routes.contains_key(id)
    }

    /// Look up a stop by name.
    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stops.get(name)
    }

    /// Look up a route by id.
    pub fn route(&self, id: &str) -> Option<&Route> {
        self.routes.get(id)
    }

    /// The ids of all routes calling at a stop, in lexicographic order.
    ///
    /// `None` if the stop is unknown; an empty set if it is known but no
    /// route visits it.
    pub fn routes_serving(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.stops.get(name).map(|stop| &stop.serving_routes)
    }

    /// All route ids, in canonical (lexicographic) order.
    pub fn route_ids(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// All routes with their ids, in canonical order.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &Route)> {
        self.routes.iter().map(|(id, route)| (id.as_str(), route))
    }

    /// All stops with their names, in arbitrary order.
    pub fn stops(&self) -> impl Iterator<Item = (&str, &Stop)> {
        self.stops.iter().map(|(name, stop)| (name.as_str(), stop))
    }
}
