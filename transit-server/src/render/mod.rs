//! Map rendering: canvas projection and SVG composition.
//!
//! [`Projector`] maps geographic coordinates into bounded canvas space;
//! [`MapRenderer`] walks the network in canonical route order and emits
//! the drawable primitives for each route.

mod compositor;
mod projector;
pub mod svg;

pub use compositor::MapRenderer;
pub use projector::Projector;

use svg::{Color, Point};

/// Visual parameters for the network map.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Canvas width in pixels.
    pub width: f64,

    /// Canvas height in pixels.
    pub height: f64,

    /// Inner margin kept clear on every canvas edge.
    pub padding: f64,

    /// Stroke width of route polylines.
    pub line_width: f64,

    /// Radius of the stop markers.
    pub stop_radius: f64,

    /// Font size for route-name labels.
    pub bus_label_font_size: u32,

    /// Offset of route-name labels from their anchor stop.
    pub bus_label_offset: Point,

    /// Font size for stop-name labels.
    pub stop_label_font_size: u32,

    /// Offset of stop-name labels from the stop marker.
    pub stop_label_offset: Point,

    /// Color of the halo drawn underneath every label.
    pub underlayer_color: Color,

    /// Stroke width of the label halo.
    pub underlayer_width: f64,

    /// Route colors, assigned round-robin in canonical route order.
    pub color_palette: Vec<Color>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: Point::new(7.0, 15.0),
            stop_label_font_size: 20,
            stop_label_offset: Point::new(7.0, -3.0),
            underlayer_color: Color::rgba(255, 255, 255, 0.85),
            underlayer_width: 3.0,
            color_palette: vec![
                Color::named("green"),
                Color::rgb(255, 160, 0),
                Color::named("red"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = RenderSettings::default();

        assert_eq!(settings.width, 600.0);
        assert_eq!(settings.height, 400.0);
        assert_eq!(settings.padding, 50.0);
        assert_eq!(settings.color_palette.len(), 3);
    }
}
