//! Transit catalogue server.
//!
//! Ingests transit stops and bus routes from a JSON document, answers
//! aggregate queries about them (stop counts, routed distance, geometric
//! length, curvature, serving routes), and renders the whole network as
//! an SVG map. The network is built once and read-only afterwards; it
//! can be queried in one shot from a batch document or served over HTTP.

pub mod distance;
pub mod geo;
pub mod metrics;
pub mod network;
pub mod render;
pub mod requests;
pub mod web;
