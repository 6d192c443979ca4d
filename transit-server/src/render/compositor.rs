//! Composes the network picture from drawable primitives.

use crate::network::{Network, Route};

use super::svg::{Circle, Color, Document, Point, Polyline, StrokeLineCap, StrokeLineJoin, Text};
use super::{Projector, RenderSettings};

/// Draws every route of a network into an SVG [`Document`].
///
/// Routes are visited in canonical (lexicographic) id order and palette
/// colors are assigned round-robin in that same order, so identical
/// input always yields the identical picture. Empty routes are skipped
/// and do not consume a palette slot.
#[derive(Debug, Clone, Copy)]
pub struct MapRenderer<'a> {
    network: &'a Network,
    settings: &'a RenderSettings,
}

impl<'a> MapRenderer<'a> {
    /// Create a renderer over a built network.
    pub fn new(network: &'a Network, settings: &'a RenderSettings) -> Self {
        Self { network, settings }
    }

    /// Compose the full network picture.
    ///
    /// Per route: the polyline first, then stop markers and labels, then
    /// the route-name labels, so later layers draw on top.
    pub fn render(&self) -> Document {
        let projector = Projector::from_network(self.network, self.settings);
        let mut doc = Document::new();

        let mut color_index = 0;
        for (id, route) in self.network.routes() {
            if route.is_empty() {
                continue;
            }
            let color = self.palette_color(color_index);
            color_index += 1;

            self.draw_route_line(&mut doc, &projector, route, &color);
            self.draw_stops(&mut doc, &projector, route);
            self.draw_route_labels(&mut doc, &projector, id, route, &color);
        }

        doc
    }

    fn palette_color(&self, index: usize) -> Color {
        let palette = &self.settings.color_palette;
        if palette.is_empty() {
            // An empty palette still produces a visible map.
            return Color::named("black");
        }
        palette[index % palette.len()].clone()
    }

    /// Canvas position of a stop; placeholders project like any other
    /// stop, so degenerate input stays non-fatal.
    fn stop_point(&self, projector: &Projector, name: &str) -> Point {
        let location = self
            .network
            .stop(name)
            .map(|stop| stop.location)
            .unwrap_or_default();
        projector.project(location)
    }

    /// One polyline per route. A circular route closes back to its first
    /// stop; a linear route's return pass retraces the same geometry, so
    /// the forward polyline covers both legs.
    fn draw_route_line(
        &self,
        doc: &mut Document,
        projector: &Projector,
        route: &Route,
        color: &Color,
    ) {
        let mut line = Polyline::new()
            .fill(Color::None)
            .stroke(color.clone())
            .stroke_width(self.settings.line_width)
            .stroke_line_cap(StrokeLineCap::Round)
            .stroke_line_join(StrokeLineJoin::Round);

        for name in &route.stops {
            line = line.add_point(self.stop_point(projector, name));
        }
        if route.is_circular {
            line = line.add_point(self.stop_point(projector, &route.stops[0]));
        }

        doc.push(line);
    }

    /// Marker plus two-layer label per distinct stop of the route, in
    /// first-visit order.
    fn draw_stops(&self, doc: &mut Document, projector: &Projector, route: &Route) {
        for name in distinct_in_order(route) {
            let point = self.stop_point(projector, name);

            doc.push(
                Circle::new()
                    .center(point)
                    .radius(self.settings.stop_radius)
                    .fill(Color::named("white")),
            );

            doc.push(self.label_underlayer(
                point,
                self.settings.stop_label_offset,
                self.settings.stop_label_font_size,
                name,
                false,
            ));
            doc.push(
                self.label_base(
                    point,
                    self.settings.stop_label_offset,
                    self.settings.stop_label_font_size,
                    name,
                    false,
                )
                .fill(Color::named("black")),
            );
        }
    }

    /// Route-name labels: at the first stop always, and at the last stop
    /// of a linear route when it differs from the first.
    fn draw_route_labels(
        &self,
        doc: &mut Document,
        projector: &Projector,
        id: &str,
        route: &Route,
        color: &Color,
    ) {
        let first = &route.stops[0];
        let mut anchors = vec![first.as_str()];
        if !route.is_circular {
            let last = route.stops.last().expect("non-empty");
            if last != first {
                anchors.push(last.as_str());
            }
        }

        for name in anchors {
            let point = self.stop_point(projector, name);
            doc.push(self.label_underlayer(
                point,
                self.settings.bus_label_offset,
                self.settings.bus_label_font_size,
                id,
                true,
            ));
            doc.push(
                self.label_base(
                    point,
                    self.settings.bus_label_offset,
                    self.settings.bus_label_font_size,
                    id,
                    true,
                )
                .fill(color.clone()),
            );
        }
    }

    fn label_base(&self, point: Point, offset: Point, size: u32, content: &str, bold: bool) -> Text {
        let mut text = Text::new()
            .position(point)
            .offset(offset)
            .font_size(size)
            .font_family("Verdana")
            .content(content);
        if bold {
            text = text.font_weight("bold");
        }
        text
    }

    fn label_underlayer(
        &self,
        point: Point,
        offset: Point,
        size: u32,
        content: &str,
        bold: bool,
    ) -> Text {
        self.label_base(point, offset, size, content, bold)
            .fill(self.settings.underlayer_color.clone())
            .stroke(self.settings.underlayer_color.clone())
            .stroke_width(self.settings.underlayer_width)
            .stroke_line_cap(StrokeLineCap::Round)
            .stroke_line_join(StrokeLineJoin::Round)
    }
}

/// Distinct stop names of a route in order of first visit.
fn distinct_in_order(route: &Route) -> Vec<&str> {
    let mut seen = Vec::new();
    for name in &route.stops {
        if !seen.contains(&name.as_str()) {
            seen.push(name.as_str());
        }
    }
    seen
}
