//! Randomised shape parameters.
//!
//! A [`ShapeConfig`] is one complete draw of every parameter a shape needs.
//! It is sampled from a [`ShapeRanges`], turned into a [`Shape`] with
//! [`ShapeConfig::build_shape`], and then discarded.
//!
//! ```
//! use motif_core::{
//!     geometry::Size,
//!     params::{RgbMax, ShapeConfig, ShapeRanges},
//!     sampler::{RandomSampler, Range},
//!     shape::{Drawable, ShapeKind},
//! };
//!
//! let ranges = ShapeRanges::new(Size::new(300, 500))
//!     .with_kind(Range::single(1))
//!     .with_rgb(RgbMax::new(10, 255, 100));
//!
//! let mut sampler = RandomSampler::seeded(5);
//! let config = ShapeConfig::sample(&mut sampler, &ranges);
//! let shape = config.build_shape();
//!
//! assert_eq!(shape.kind(), ShapeKind::Rectangle);
//! assert!(shape.position().x() <= 300);
//! ```

use std::fmt;

use rand::Rng;
use serde::Deserialize;

use crate::{
    geometry::{Point, Size},
    sampler::{RandomSampler, Range},
    shape::{Circle, Fill, Rectangle, Shape, ShapeKind},
};

/// Per-channel maxima for color draws. Each channel is drawn from `[0, max]`.
///
/// Deserializes from a `[red, green, blue]` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "(u8, u8, u8)")]
pub struct RgbMax {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbMax {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn red(self) -> u8 {
        self.red
    }

    pub fn green(self) -> u8 {
        self.green
    }

    pub fn blue(self) -> u8 {
        self.blue
    }
}

impl Default for RgbMax {
    fn default() -> Self {
        Self::new(u8::MAX, u8::MAX, u8::MAX)
    }
}

impl From<(u8, u8, u8)> for RgbMax {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

/// The ranges a [`ShapeConfig`] is sampled from.
///
/// Positions are drawn from `[0, frame.width]` and `[0, frame.height]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeRanges {
    kind: Range,
    frame: Size,
    radius: Range,
    width: Range,
    height: Range,
    rgb: RgbMax,
}

impl ShapeRanges {
    /// Creates ranges for a frame, with every other range at its default:
    /// kind `[0, 1]`, radius `[0, 100]`, width and height `[10, 100]`, and
    /// full-intensity color channels.
    pub fn new(frame: Size) -> Self {
        Self {
            kind: Range::up_to(1),
            frame,
            radius: Range::up_to(100),
            width: Range::spanning(10, 100),
            height: Range::spanning(10, 100),
            rgb: RgbMax::default(),
        }
    }

    pub fn with_kind(mut self, kind: Range) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_radius(mut self, radius: Range) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_width(mut self, width: Range) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: Range) -> Self {
        self.height = height;
        self
    }

    pub fn with_rgb(mut self, rgb: RgbMax) -> Self {
        self.rgb = rgb;
        self
    }

    pub fn frame(&self) -> Size {
        self.frame
    }

    pub fn kind(&self) -> Range {
        self.kind
    }

    pub fn radius(&self) -> Range {
        self.radius
    }

    pub fn width(&self) -> Range {
        self.width
    }

    pub fn height(&self) -> Range {
        self.height
    }

    pub fn rgb(&self) -> RgbMax {
        self.rgb
    }
}

/// One complete draw of shape parameters.
///
/// Every field is sampled, even those the resulting variant ignores, so the
/// number of draws per shape is constant and seeded runs stay aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeConfig {
    kind: u32,
    x: u32,
    y: u32,
    radius: u32,
    width: u32,
    height: u32,
    red: u8,
    green: u8,
    blue: u8,
    opacity: f64,
}

impl ShapeConfig {
    /// Samples a configuration.
    ///
    /// Draws happen in a fixed order: kind, x, y, radius, width, height,
    /// red, green, blue, opacity.
    pub fn sample<R: Rng>(sampler: &mut RandomSampler<R>, ranges: &ShapeRanges) -> Self {
        Self {
            kind: sampler.integer(ranges.kind),
            x: sampler.integer(Range::up_to(ranges.frame.width())),
            y: sampler.integer(Range::up_to(ranges.frame.height())),
            radius: sampler.integer(ranges.radius),
            width: sampler.integer(ranges.width),
            height: sampler.integer(ranges.height),
            red: sampler.channel(ranges.rgb.red),
            green: sampler.channel(ranges.rgb.green),
            blue: sampler.channel(ranges.rgb.blue),
            opacity: sampler.fraction(),
        }
    }

    /// The variant this configuration instantiates
    pub fn kind(&self) -> ShapeKind {
        ShapeKind::from_index(self.kind)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn fill(&self) -> Fill {
        Fill::new(self.red, self.green, self.blue, self.opacity)
    }

    /// Builds the concrete shape for this configuration.
    pub fn build_shape(&self) -> Shape {
        match self.kind() {
            ShapeKind::Circle => Circle::new(self.position(), self.radius, self.fill()).into(),
            ShapeKind::Rectangle => Rectangle::new(
                self.position(),
                Size::new(self.width, self.height),
                self.fill(),
            )
            .into(),
        }
    }
}

impl fmt::Display for ShapeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4.3}",
            self.kind,
            self.x,
            self.y,
            self.radius,
            self.width,
            self.height,
            self.red,
            self.green,
            self.blue,
            self.opacity
        )
    }
}
