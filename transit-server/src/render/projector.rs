//! Geographic-to-canvas projection.

use crate::geo::Coordinate;
use crate::network::Network;

use super::RenderSettings;
use super::svg::Point;

/// Projects geographic coordinates onto the canvas.
///
/// The bounding box covers every stop served by at least one route;
/// unconnected stops do not anchor the visible map. Each axis is
/// interpolated independently into `[padding, dimension − padding]`,
/// with the canvas dimensions swapped: latitude is scaled against the
/// height budget and longitude against the width budget. The swap does
/// not preserve the geographic aspect ratio; it is kept as-is for
/// output compatibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Projector {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
    lat_span: f64,
    lng_span: f64,
    padding: f64,
}

impl Projector {
    /// Compute the projection for a built network.
    pub fn from_network(network: &Network, settings: &RenderSettings) -> Self {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        for (_, stop) in network.stops() {
            if stop.serving_routes.is_empty() {
                continue;
            }
            let Coordinate { lat, lng } = stop.location;
            bounds = Some(match bounds {
                None => (lat, lat, lng, lng),
                Some((min_lat, max_lat, min_lng, max_lng)) => (
                    min_lat.min(lat),
                    max_lat.max(lat),
                    min_lng.min(lng),
                    max_lng.max(lng),
                ),
            });
        }
        let (min_lat, max_lat, min_lng, max_lng) = bounds.unwrap_or((0.0, 0.0, 0.0, 0.0));

        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
            lat_span: settings.height - settings.padding * 2.0,
            lng_span: settings.width - settings.padding * 2.0,
            padding: settings.padding,
        }
    }

    /// Map a coordinate to a canvas point.
    ///
    /// A zero-width axis (all anchoring stops share that coordinate)
    /// centers the point on that axis instead of dividing by zero.
    pub fn project(&self, location: Coordinate) -> Point {
        Point::new(
            interpolate(
                location.lat,
                self.min_lat,
                self.max_lat,
                self.lat_span,
                self.padding,
            ),
            interpolate(
                location.lng,
                self.min_lng,
                self.max_lng,
                self.lng_span,
                self.padding,
            ),
        )
    }
}

fn interpolate(value: f64, min: f64, max: f64, span: f64, padding: f64) -> f64 {
    let range = max - min;
    if range == 0.0 {
        return padding + span / 2.0;
    }
    (value - min) / range * span + padding
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings() -> RenderSettings {
        RenderSettings {
            width: 600.0,
            height: 400.0,
            padding: 50.0,
            ..RenderSettings::default()
        }
    }

    fn connected_network(coords: &[(&str, f64, f64)]) -> Network {
        let mut network = Network::new();
        let mut stops = Vec::new();
        for (name, lat, lng) in coords {
            network.add_stop(*name, Coordinate::new(*lat, *lng), HashMap::new());
            stops.push(name.to_string());
        }
        network.add_route("r", stops, false);
        network
    }

    #[test]
    fn corners_map_to_padded_canvas() {
        let network = connected_network(&[("SW", 10.0, 20.0), ("NE", 11.0, 21.0)]);
        let projector = Projector::from_network(&network, &settings());

        // Minimum corner lands on the padding edge of both axes.
        let sw = projector.project(Coordinate::new(10.0, 20.0));
        assert_eq!(sw, Point::new(50.0, 50.0));

        // Latitude is scaled against the height budget (400 − 2·50),
        // longitude against the width budget (600 − 2·50).
        let ne = projector.project(Coordinate::new(11.0, 21.0));
        assert_eq!(ne, Point::new(350.0, 550.0));
    }

    #[test]
    fn axes_are_swapped() {
        let network = connected_network(&[("SW", 0.0, 0.0), ("NE", 1.0, 1.0)]);
        let projector = Projector::from_network(&network, &settings());

        // A latitude-only move travels the height budget; a
        // longitude-only move travels the width budget.
        let lat_only = projector.project(Coordinate::new(1.0, 0.0));
        assert_eq!(lat_only, Point::new(350.0, 50.0));
        let lng_only = projector.project(Coordinate::new(0.0, 1.0));
        assert_eq!(lng_only, Point::new(50.0, 550.0));
    }

    #[test]
    fn midpoint_interpolates_linearly() {
        let network = connected_network(&[("SW", 0.0, 0.0), ("NE", 2.0, 2.0)]);
        let projector = Projector::from_network(&network, &settings());

        let mid = projector.project(Coordinate::new(1.0, 1.0));
        assert_eq!(mid, Point::new(200.0, 300.0));
    }

    #[test]
    fn degenerate_latitude_axis_centers() {
        let network = connected_network(&[("A", 5.0, 20.0), ("B", 5.0, 21.0)]);
        let projector = Projector::from_network(&network, &settings());

        let p = projector.project(Coordinate::new(5.0, 20.0));
        // All stops share a latitude: that axis centers in its budget.
        assert_eq!(p.x, 50.0 + 300.0 / 2.0);
        assert_eq!(p.y, 50.0);
    }

    #[test]
    fn degenerate_longitude_axis_centers() {
        let network = connected_network(&[("A", 5.0, 20.0), ("B", 6.0, 20.0)]);
        let projector = Projector::from_network(&network, &settings());

        let p = projector.project(Coordinate::new(5.0, 20.0));
        assert_eq!(p.x, 50.0);
        assert_eq!(p.y, 50.0 + 500.0 / 2.0);
    }

    #[test]
    fn single_stop_centers_both_axes() {
        let network = connected_network(&[("Only", 5.0, 20.0)]);
        let projector = Projector::from_network(&network, &settings());

        let p = projector.project(Coordinate::new(5.0, 20.0));
        assert_eq!(p, Point::new(200.0, 300.0));
    }

    #[test]
    fn unconnected_stops_do_not_anchor_the_box() {
        let mut network = connected_network(&[("A", 0.0, 0.0), ("B", 1.0, 1.0)]);
        // Far-away stop with no serving routes must not stretch the box.
        network.add_stop("Faraway", Coordinate::new(80.0, 170.0), HashMap::new());

        let projector = Projector::from_network(&network, &settings());
        let ne = projector.project(Coordinate::new(1.0, 1.0));
        assert_eq!(ne, Point::new(350.0, 550.0));
    }

    #[test]
    fn empty_network_projects_to_center() {
        let network = Network::new();
        let projector = Projector::from_network(&network, &settings());

        let p = projector.project(Coordinate::new(12.0, 34.0));
        assert_eq!(p, Point::new(200.0, 300.0));
    }
}
