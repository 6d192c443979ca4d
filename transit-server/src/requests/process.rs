//! Applies base requests and answers stat requests.

use tracing::debug;

use crate::geo::Coordinate;
use crate::metrics::route_metrics;
use crate::network::Network;
use crate::render::{MapRenderer, RenderSettings};

use super::{
    BaseRequest, InputDocument, MapReply, NotFoundReply, RouteStatsReply, StatReply, StatRequest,
    StopStatsReply,
};

/// Build a network from base requests, applied in document order.
///
/// Order between requests does not matter: a route may mention stops
/// whose coordinates arrive in a later request.
pub fn build_network(requests: Vec<BaseRequest>) -> Network {
    let mut network = Network::new();
    for request in requests {
        match request {
            BaseRequest::Stop {
                name,
                latitude,
                longitude,
                road_distances,
            } => {
                network.add_stop(name, Coordinate::new(latitude, longitude), road_distances);
            }
            BaseRequest::Bus {
                name,
                stops,
                is_roundtrip,
            } => {
                network.add_route(name, stops, is_roundtrip);
            }
        }
    }
    debug!(
        routes = network.route_ids().count(),
        "network built from base requests"
    );
    network
}

/// Answer stat requests against a built network, in request order.
pub fn process_stats(
    network: &Network,
    settings: &RenderSettings,
    requests: &[StatRequest],
) -> Vec<StatReply> {
    requests
        .iter()
        .map(|request| match request {
            StatRequest::Bus { id, name } => bus_reply(network, *id, name),
            StatRequest::Stop { id, name } => stop_reply(network, *id, name),
            StatRequest::Map { id } => map_reply(network, settings, *id),
        })
        .collect()
}

/// Run a full document: build the network, then answer its queries.
pub fn process_document(document: InputDocument) -> Vec<StatReply> {
    let network = build_network(document.base_requests);
    let settings = document
        .render_settings
        .map(RenderSettings::from)
        .unwrap_or_default();
    process_stats(&network, &settings, &document.stat_requests)
}

fn bus_reply(network: &Network, id: i64, name: &str) -> StatReply {
    match route_metrics(network, name) {
        Some(metrics) => StatReply::Route(RouteStatsReply {
            request_id: id,
            stop_count: metrics.stop_count,
            unique_stop_count: metrics.unique_stop_count,
            route_length: metrics.route_length,
            curvature: metrics.curvature,
        }),
        None => {
            debug!(route = name, "route not found");
            StatReply::NotFound(NotFoundReply::new(id))
        }
    }
}

fn stop_reply(network: &Network, id: i64, name: &str) -> StatReply {
    match network.routes_serving(name) {
        // A known stop that no route visits answers "not found" as well.
        Some(serving) if !serving.is_empty() => StatReply::Stop(StopStatsReply {
            request_id: id,
            buses: serving.iter().cloned().collect(),
        }),
        _ => {
            debug!(stop = name, "stop not found");
            StatReply::NotFound(NotFoundReply::new(id))
        }
    }
}

fn map_reply(network: &Network, settings: &RenderSettings, id: i64) -> StatReply {
    let document = MapRenderer::new(network, settings).render();
    StatReply::Map(MapReply {
        request_id: id,
        map: document.render(),
    })
}
