//! A minimal SVG primitive vocabulary.
//!
//! Only what the map compositor needs: circles, polylines and text with
//! stroke/fill attributes, collected into a [`Document`] that renders to
//! a string. Setters chain builder-style; unset attributes are simply not
//! emitted, so output stays compact and byte-deterministic.

use std::fmt::{self, Write};

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A stroke or fill color.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Color {
    /// Explicit absence, rendered as `none`.
    #[default]
    None,
    /// A named or hex color string, passed through verbatim.
    Named(String),
    Rgb {
        red: u8,
        green: u8,
        blue: u8,
    },
    Rgba {
        red: u8,
        green: u8,
        blue: u8,
        opacity: f64,
    },
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }

    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color::Rgb { red, green, blue }
    }

    pub fn rgba(red: u8, green: u8, blue: u8, opacity: f64) -> Self {
        Color::Rgba {
            red,
            green,
            blue,
            opacity,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Named(name) => f.write_str(name),
            Color::Rgb { red, green, blue } => write!(f, "rgb({red},{green},{blue})"),
            Color::Rgba {
                red,
                green,
                blue,
                opacity,
            } => write!(f, "rgba({red},{green},{blue},{opacity})"),
        }
    }
}

/// Shape of a stroke's endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for StrokeLineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineCap::Butt => "butt",
            StrokeLineCap::Round => "round",
            StrokeLineCap::Square => "square",
        })
    }
}

/// Shape of a stroke's corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl fmt::Display for StrokeLineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineJoin::Arcs => "arcs",
            StrokeLineJoin::Bevel => "bevel",
            StrokeLineJoin::Miter => "miter",
            StrokeLineJoin::MiterClip => "miter-clip",
            StrokeLineJoin::Round => "round",
        })
    }
}

/// Stroke and fill attributes shared by every shape.
#[derive(Debug, Clone, PartialEq, Default)]
struct PathProps {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: Option<f64>,
    stroke_line_cap: Option<StrokeLineCap>,
    stroke_line_join: Option<StrokeLineJoin>,
}

impl PathProps {
    /// Emit the set attributes in a fixed order.
    fn render(&self, out: &mut impl Write) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(out, " fill=\"{fill}\"")?;
        }
        if let Some(stroke) = &self.stroke {
            write!(out, " stroke=\"{stroke}\"")?;
        }
        if let Some(width) = self.stroke_width {
            write!(out, " stroke-width=\"{width}\"")?;
        }
        if let Some(cap) = self.stroke_line_cap {
            write!(out, " stroke-linecap=\"{cap}\"")?;
        }
        if let Some(join) = self.stroke_line_join {
            write!(out, " stroke-linejoin=\"{join}\"")?;
        }
        Ok(())
    }
}

macro_rules! path_props_setters {
    () => {
        pub fn fill(mut self, color: Color) -> Self {
            self.props.fill = Some(color);
            self
        }

        pub fn stroke(mut self, color: Color) -> Self {
            self.props.stroke = Some(color);
            self
        }

        pub fn stroke_width(mut self, width: f64) -> Self {
            self.props.stroke_width = Some(width);
            self
        }

        pub fn stroke_line_cap(mut self, cap: StrokeLineCap) -> Self {
            self.props.stroke_line_cap = Some(cap);
            self
        }

        pub fn stroke_line_join(mut self, join: StrokeLineJoin) -> Self {
            self.props.stroke_line_join = Some(join);
            self
        }
    };
}

/// A filled circle marker.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Circle {
    center: Point,
    radius: f64,
    props: PathProps,
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    path_props_setters!();

    fn render(&self, out: &mut impl Write) -> fmt::Result {
        write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
            self.center.x, self.center.y, self.radius
        )?;
        self.props.render(out)?;
        out.write_str("/>")
    }
}

/// An open polyline through a point sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    points: Vec<Point>,
    props: PathProps,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    path_props_setters!();

    fn render(&self, out: &mut impl Write) -> fmt::Result {
        out.write_str("<polyline points=\"")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                out.write_str(" ")?;
            }
            write!(out, "{},{}", point.x, point.y)?;
        }
        out.write_str("\"")?;
        self.props.render(out)?;
        out.write_str("/>")
    }
}

/// A text label anchored at a position with an offset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    position: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    content: String,
    props: PathProps,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Offset relative to the anchor position (`dx`/`dy`).
    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    path_props_setters!();

    fn render(&self, out: &mut impl Write) -> fmt::Result {
        write!(
            out,
            "<text x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.position.x, self.position.y, self.offset.x, self.offset.y, self.font_size
        )?;
        if let Some(family) = &self.font_family {
            write!(out, " font-family=\"{family}\"")?;
        }
        if let Some(weight) = &self.font_weight {
            write!(out, " font-weight=\"{weight}\"")?;
        }
        self.props.render(out)?;
        out.write_str(">")?;
        escape_into(out, &self.content)?;
        out.write_str("</text>")
    }
}

/// Escape text content for embedding in XML.
fn escape_into(out: &mut impl Write, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

/// Any drawable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polyline> for Shape {
    fn from(polyline: Polyline) -> Self {
        Shape::Polyline(polyline)
    }
}

impl From<Text> for Shape {
    fn from(text: Text) -> Self {
        Shape::Text(text)
    }
}

/// An ordered collection of shapes, rendered in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape; later shapes draw on top of earlier ones.
    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in drawing order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Write the full SVG document.
    pub fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        out.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n")?;
        out.write_str("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n")?;
        for shape in &self.shapes {
            match shape {
                Shape::Circle(c) => c.render(out)?,
                Shape::Polyline(p) => p.render(out)?,
                Shape::Text(t) => t.render(out)?,
            }
            out.write_str("\n")?;
        }
        out.write_str("</svg>")
    }

    /// Render the full SVG document to a string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out)
            .expect("writing to a String cannot fail");
        out
    }
}
