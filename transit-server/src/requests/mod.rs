//! The JSON request/reply adapter.
//!
//! Wire types for the input document (`base_requests` build the
//! network, `stat_requests` query it, `render_settings` parameterize the
//! map) and the typed replies serialized back to the caller. The three
//! query kinds are a closed tagged variant: the kind set is fixed, so no
//! open registration mechanism is needed.

mod process;

pub use process::{build_network, process_document, process_stats};

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::render::RenderSettings;
use crate::render::svg::{Color, Point};

/// Errors from reading the input document.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The document is not valid JSON or does not match the wire format.
    #[error("invalid request document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// The full input document.
#[derive(Debug, Deserialize)]
pub struct InputDocument {
    /// Network construction requests, applied in order.
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Queries, answered in order.
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,

    /// Map parameters; defaults apply when absent.
    #[serde(default)]
    pub render_settings: Option<RenderSettingsDto>,
}

impl InputDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(input: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Read and parse a document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| RequestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&input)
    }
}

/// A network construction request.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    /// Declare a stop with its location and outgoing road distances.
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        road_distances: HashMap<String, f64>,
    },

    /// Declare a bus route over named stops.
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

/// A query against the built network.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    /// Aggregate metrics for one route.
    Bus { id: i64, name: String },

    /// The routes serving one stop.
    Stop { id: i64, name: String },

    /// The SVG map of the whole network.
    Map { id: i64 },
}

impl StatRequest {
    /// The caller-chosen id echoed back in the reply.
    pub fn request_id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. } | StatRequest::Stop { id, .. } | StatRequest::Map { id } => {
                *id
            }
        }
    }
}

/// One reply per stat request, in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatReply {
    Route(RouteStatsReply),
    Stop(StopStatsReply),
    Map(MapReply),
    NotFound(NotFoundReply),
}

/// Aggregate metrics for a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStatsReply {
    pub request_id: i64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub route_length: f64,
    /// NaN (a degenerate zero-length route) serializes as `null`.
    pub curvature: f64,
}

/// The routes calling at a stop, in lexicographic order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopStatsReply {
    pub request_id: i64,
    pub buses: Vec<String>,
}

/// The rendered SVG map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapReply {
    pub request_id: i64,
    pub map: String,
}

/// The reply for an unknown (or unserved) name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFoundReply {
    pub request_id: i64,
    pub error_message: String,
}

impl NotFoundReply {
    pub fn new(request_id: i64) -> Self {
        Self {
            request_id,
            error_message: "not found".to_string(),
        }
    }
}

/// A color on the wire: a name, `[r, g, b]`, or `[r, g, b, opacity]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorDto {
    Named(String),
    Channels(Vec<f64>),
}

impl From<ColorDto> for Color {
    fn from(dto: ColorDto) -> Self {
        match dto {
            ColorDto::Named(name) => Color::Named(name),
            ColorDto::Channels(channels) => match channels.as_slice() {
                [r, g, b] => Color::rgb(*r as u8, *g as u8, *b as u8),
                [r, g, b, opacity] => Color::rgba(*r as u8, *g as u8, *b as u8, *opacity),
                // Any other arity is treated as "no color".
                _ => Color::None,
            },
        }
    }
}

/// Render settings on the wire; offsets are `[dx, dy]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderSettingsDto {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: [f64; 2],
    pub stop_label_font_size: u32,
    pub stop_label_offset: [f64; 2],
    pub underlayer_color: ColorDto,
    pub underlayer_width: f64,
    pub color_palette: Vec<ColorDto>,
}

impl From<RenderSettingsDto> for RenderSettings {
    fn from(dto: RenderSettingsDto) -> Self {
        Self {
            width: dto.width,
            height: dto.height,
            padding: dto.padding,
            line_width: dto.line_width,
            stop_radius: dto.stop_radius,
            bus_label_font_size: dto.bus_label_font_size,
            bus_label_offset: Point::new(dto.bus_label_offset[0], dto.bus_label_offset[1]),
            stop_label_font_size: dto.stop_label_font_size,
            stop_label_offset: Point::new(dto.stop_label_offset[0], dto.stop_label_offset[1]),
            underlayer_color: dto.underlayer_color.into(),
            underlayer_width: dto.underlayer_width,
            color_palette: dto.color_palette.into_iter().map(Color::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stop_request() {
        let doc = InputDocument::from_json(
            r#"{
                "base_requests": [{
                    "type": "Stop",
                    "name": "Airport",
                    "latitude": 55.611087,
                    "longitude": 37.20829,
                    "road_distances": {"Depot": 3900}
                }]
            }"#,
        )
        .unwrap();

        let [BaseRequest::Stop {
            name,
            latitude,
            road_distances,
            ..
        }] = doc.base_requests.as_slice()
        else {
            panic!("expected one Stop request");
        };
        assert_eq!(name, "Airport");
        assert_eq!(*latitude, 55.611087);
        assert_eq!(road_distances.get("Depot"), Some(&3900.0));
    }

    #[test]
    fn road_distances_default_to_empty() {
        let doc = InputDocument::from_json(
            r#"{
                "base_requests": [{
                    "type": "Stop",
                    "name": "Airport",
                    "latitude": 1.0,
                    "longitude": 2.0
                }]
            }"#,
        )
        .unwrap();

        let [BaseRequest::Stop { road_distances, .. }] = doc.base_requests.as_slice() else {
            panic!("expected one Stop request");
        };
        assert!(road_distances.is_empty());
    }

    #[test]
    fn parse_bus_and_stat_requests() {
        let doc = InputDocument::from_json(
            r#"{
                "base_requests": [{
                    "type": "Bus",
                    "name": "114",
                    "stops": ["Harbour", "Airport"],
                    "is_roundtrip": false
                }],
                "stat_requests": [
                    {"id": 1, "type": "Stop", "name": "Harbour"},
                    {"id": 2, "type": "Bus", "name": "114"},
                    {"id": 3, "type": "Map"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.base_requests.len(), 1);
        assert_eq!(doc.stat_requests.len(), 3);
        assert_eq!(doc.stat_requests[0].request_id(), 1);
        assert!(matches!(doc.stat_requests[2], StatRequest::Map { id: 3 }));
    }

    #[test]
    fn unknown_request_type_is_a_parse_error() {
        let result = InputDocument::from_json(
            r#"{"stat_requests": [{"id": 1, "type": "Train", "name": "x"}]}"#,
        );
        assert!(matches!(result, Err(RequestError::Parse(_))));
    }

    #[test]
    fn color_dto_conversions() {
        let named: Color = ColorDto::Named("green".to_string()).into();
        assert_eq!(named, Color::named("green"));

        let rgb: Color = ColorDto::Channels(vec![255.0, 160.0, 0.0]).into();
        assert_eq!(rgb, Color::rgb(255, 160, 0));

        let rgba: Color = ColorDto::Channels(vec![255.0, 255.0, 255.0, 0.85]).into();
        assert_eq!(rgba, Color::rgba(255, 255, 255, 0.85));

        let bogus: Color = ColorDto::Channels(vec![1.0, 2.0]).into();
        assert_eq!(bogus, Color::None);
    }

    #[test]
    fn render_settings_conversion() {
        let doc = InputDocument::from_json(
            r#"{
                "render_settings": {
                    "width": 1200,
                    "height": 500,
                    "padding": 50,
                    "line_width": 14,
                    "stop_radius": 5,
                    "bus_label_font_size": 20,
                    "bus_label_offset": [7, 15],
                    "stop_label_font_size": 18,
                    "stop_label_offset": [7, -3],
                    "underlayer_color": [255, 255, 255, 0.85],
                    "underlayer_width": 3,
                    "color_palette": ["green", [255, 160, 0], "red"]
                }
            }"#,
        )
        .unwrap();

        let settings: RenderSettings = doc.render_settings.unwrap().into();
        assert_eq!(settings.width, 1200.0);
        assert_eq!(settings.bus_label_offset, Point::new(7.0, 15.0));
        assert_eq!(settings.stop_label_offset, Point::new(7.0, -3.0));
        assert_eq!(settings.underlayer_color, Color::rgba(255, 255, 255, 0.85));
        assert_eq!(
            settings.color_palette,
            vec![
                Color::named("green"),
                Color::rgb(255, 160, 0),
                Color::named("red"),
            ]
        );
    }

    #[test]
    fn replies_serialize_to_the_wire_format() {
        let reply = StatReply::Route(RouteStatsReply {
            request_id: 12,
            stop_count: 4,
            unique_stop_count: 3,
            route_length: 9300.0,
            curvature: 1.23,
        });
        assert_eq!(
            serde_json::to_string(&reply).unwrap(),
            r#"{"request_id":12,"stop_count":4,"unique_stop_count":3,"route_length":9300.0,"curvature":1.23}"#
        );

        let reply = StatReply::NotFound(NotFoundReply::new(7));
        assert_eq!(
            serde_json::to_string(&reply).unwrap(),
            r#"{"request_id":7,"error_message":"not found"}"#
        );
    }

    #[test]
    fn nan_curvature_serializes_as_null() {
        let reply = RouteStatsReply {
            request_id: 1,
            stop_count: 0,
            unique_stop_count: 0,
            route_length: 0.0,
            curvature: f64::NAN,
        };
        let json = serde_json::to_string(&reply).unwrap();
        assert!(json.contains(r#""curvature":null"#));
    }
}
