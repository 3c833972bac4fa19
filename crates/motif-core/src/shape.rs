//! Shape definitions and rendering.
//!
//! This module provides the [`Drawable`] trait and the closed [`Shape`] sum
//! type over the two supported variants, [`Circle`] and [`Rectangle`].
//! Shapes are immutable once constructed; each one knows how to render
//! itself as a single indented markup element.

use std::{fmt, io};

use crate::{
    document,
    geometry::{Extent, Point, Size},
};

/// The variant a sampled configuration instantiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl ShapeKind {
    /// Maps a sampled kind index to a variant: `0` is a circle, anything
    /// else is a rectangle.
    pub fn from_index(index: u32) -> Self {
        if index == 0 {
            Self::Circle
        } else {
            Self::Rectangle
        }
    }
}

/// Fill color and opacity shared by every shape variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    red: u8,
    green: u8,
    blue: u8,
    opacity: f64,
}

impl Fill {
    /// Creates a new fill. Opacity is clamped into `[0, 1]`; NaN becomes `0`.
    pub fn new(red: u8, green: u8, blue: u8, opacity: f64) -> Self {
        let opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }

    /// Returns the `(red, green, blue)` channels
    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn opacity(self) -> f64 {
        self.opacity
    }

    /// Formats the `fill` and `fill-opacity` attributes.
    fn to_attributes(self) -> String {
        format!(
            r#"fill="rgb({}, {}, {})" fill-opacity="{}""#,
            self.red,
            self.green,
            self.blue,
            format_opacity(self.opacity)
        )
    }
}

/// Shortest round-trip decimal form, always with a fractional part.
fn format_opacity(opacity: f64) -> String {
    let text = opacity.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

/// Capabilities every shape variant provides.
///
/// Position, extent and color are exposed through accessors so that
/// consumers can query any shape uniformly without matching on the variant.
pub trait Drawable {
    /// The anchor point: a circle's center or a rectangle's top-left corner.
    fn position(&self) -> Point;

    /// The visual extent: a radius or a width/height pair.
    fn extent(&self) -> Extent;

    /// The fill color and opacity.
    fn fill(&self) -> Fill;

    /// Returns the `(red, green, blue)` fill channels.
    fn color(&self) -> (u8, u8, u8) {
        self.fill().rgb()
    }

    /// Writes this shape as one markup element on its own line at `level`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the sink.
    fn render<W: io::Write + ?Sized>(&self, sink: &mut W, level: usize) -> io::Result<()>;
}

/// A circle described by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: u32,
    fill: Fill,
}

impl Circle {
    pub fn new(center: Point, radius: u32, fill: Fill) -> Self {
        Self {
            center,
            radius,
            fill,
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }
}

impl Drawable for Circle {
    fn position(&self) -> Point {
        self.center
    }

    fn extent(&self) -> Extent {
        Extent::Radius(self.radius)
    }

    fn fill(&self) -> Fill {
        self.fill
    }

    fn render<W: io::Write + ?Sized>(&self, sink: &mut W, level: usize) -> io::Result<()> {
        let line = format!(
            r#"<circle cx="{}" cy="{}" r="{}" {}></circle>"#,
            self.center.x(),
            self.center.y(),
            self.radius,
            self.fill.to_attributes()
        );
        document::write_line(sink, level, &line)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (red, green, blue) = self.fill.rgb();
        write!(
            f,
            "Circle(({},{},{}), ({red},{green},{blue},{:.1}))",
            self.center.x(),
            self.center.y(),
            self.radius,
            self.fill.opacity
        )
    }
}

/// An axis-aligned rectangle described by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    top_left: Point,
    size: Size,
    fill: Fill,
}

impl Rectangle {
    pub fn new(top_left: Point, size: Size, fill: Fill) -> Self {
        Self {
            top_left,
            size,
            fill,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Drawable for Rectangle {
    fn position(&self) -> Point {
        self.top_left
    }

    fn extent(&self) -> Extent {
        Extent::Size(self.size)
    }

    fn fill(&self) -> Fill {
        self.fill
    }

    fn render<W: io::Write + ?Sized>(&self, sink: &mut W, level: usize) -> io::Result<()> {
        let line = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" {}></rect>"#,
            self.top_left.x(),
            self.top_left.y(),
            self.size.width(),
            self.size.height(),
            self.fill.to_attributes()
        );
        document::write_line(sink, level, &line)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (red, green, blue) = self.fill.rgb();
        write!(
            f,
            "Rectangle(({},{},{},{}), ({red},{green},{blue},{:.1}))",
            self.top_left.x(),
            self.top_left.y(),
            self.size.width(),
            self.size.height(),
            self.fill.opacity
        )
    }
}

/// A concrete shape: the closed set of drawable variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Rectangle(_) => ShapeKind::Rectangle,
        }
    }
}

impl Drawable for Shape {
    fn position(&self) -> Point {
        match self {
            Self::Circle(circle) => circle.position(),
            Self::Rectangle(rectangle) => rectangle.position(),
        }
    }

    fn extent(&self) -> Extent {
        match self {
            Self::Circle(circle) => circle.extent(),
            Self::Rectangle(rectangle) => rectangle.extent(),
        }
    }

    fn fill(&self) -> Fill {
        match self {
            Self::Circle(circle) => circle.fill(),
            Self::Rectangle(rectangle) => rectangle.fill(),
        }
    }

    fn render<W: io::Write + ?Sized>(&self, sink: &mut W, level: usize) -> io::Result<()> {
        match self {
            Self::Circle(circle) => circle.render(sink, level),
            Self::Rectangle(rectangle) => rectangle.render(sink, level),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangle(rectangle)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle(circle) => fmt::Display::fmt(circle, f),
            Self::Rectangle(rectangle) => fmt::Display::fmt(rectangle, f),
        }
    }
}
