//! Configuration types for Motif document generation.
//!
//! This module provides the structures that describe a generation run.
//! Configuration files deserialize into [`ConfigFile`], a raw form whose
//! ranges are plain `[lo, hi]` pairs. Converting it into an [`AppConfig`]
//! with [`TryFrom`] validates every range and reports the first inverted
//! one as [`InvalidRange`].
//!
//! # Overview
//!
//! - [`AppConfig`] - Document title, optional seed, and the frames to draw.
//! - [`FrameConfig`] - Size, shape count, and sampling ranges for one frame.
//! - [`ConfigFile`] / [`FrameEntry`] - The on-disk form of the above.
//!
//! # Example
//!
//! ```
//! # use motif::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.title(), "My Art");
//! assert_eq!(config.frames().len(), 3);
//! ```

use serde::Deserialize;

use motif_core::{
    geometry::Size,
    params::{RgbMax, ShapeRanges},
    sampler::{InvalidRange, Range},
};

const DEFAULT_TITLE: &str = "My Art";

/// Top-level configuration for one generated document.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Document title, written into the page header.
    title: String,

    /// Seed for reproducible output. `None` draws from OS entropy.
    seed: Option<u64>,

    /// Frames in document order.
    frames: Vec<FrameConfig>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`].
    ///
    /// # Arguments
    ///
    /// * `title` - Document title.
    /// * `frames` - Frames to generate, in order.
    pub fn new(title: impl Into<String>, frames: Vec<FrameConfig>) -> Self {
        Self {
            title: title.into(),
            seed: None,
            frames,
        }
    }

    /// Returns a copy with the title replaced.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns a copy with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn frames(&self) -> &[FrameConfig] {
        &self.frames
    }

    /// Total number of shapes across all frames, saturating at `usize::MAX`.
    pub fn shape_count(&self) -> usize {
        self.frames
            .iter()
            .map(FrameConfig::count)
            .fold(0, usize::saturating_add)
    }
}

impl Default for AppConfig {
    /// Three frames: a wide reddish frame of mixed shapes, a bluish frame of
    /// circles only, and a narrow greenish frame of rectangles only.
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, default_frames())
    }
}

fn default_frames() -> Vec<FrameConfig> {
    let red = FrameConfig::new(Size::new(1300, 500), 300)
        .with_kinds(Range::spanning(0, 1))
        .with_radius(Range::spanning(20, 200))
        .with_width(Range::spanning(10, 30))
        .with_height(Range::spanning(50, 200))
        .with_rgb(RgbMax::new(255, 5, 50));
    let blue = FrameConfig::new(Size::new(1000, 500), 50)
        .with_kinds(Range::single(0))
        .with_radius(Range::spanning(50, 100))
        .with_width(Range::spanning(100, 300))
        .with_height(Range::spanning(20, 50))
        .with_rgb(RgbMax::new(100, 10, 255));
    let green = FrameConfig::new(Size::new(300, 500), 100)
        .with_kinds(Range::single(1))
        .with_radius(Range::spanning(50, 100))
        .with_width(Range::spanning(50, 100))
        .with_height(Range::spanning(50, 100))
        .with_rgb(RgbMax::new(10, 255, 100));

    vec![red, blue, green]
}

/// One drawing region: its size, how many shapes it holds, and the ranges
/// each shape is sampled from.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameConfig {
    /// Frame dimensions; also bounds shape positions.
    size: Size,

    /// Number of shapes to generate.
    count: usize,

    /// Shape kind range; `0` draws a circle, anything else a rectangle.
    kinds: Range,
    radius: Range,
    width: Range,
    height: Range,

    /// Per-channel color maxima.
    rgb: RgbMax,
}

fn default_kinds() -> Range {
    Range::up_to(1)
}

fn default_radius() -> Range {
    Range::up_to(100)
}

fn default_side() -> Range {
    Range::spanning(10, 100)
}

impl FrameConfig {
    /// Creates a frame with default sampling ranges.
    pub fn new(size: Size, count: usize) -> Self {
        Self {
            size,
            count,
            kinds: default_kinds(),
            radius: default_radius(),
            width: default_side(),
            height: default_side(),
            rgb: RgbMax::default(),
        }
    }

    pub fn with_kinds(mut self, kinds: Range) -> Self {
        self.kinds = kinds;
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

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the ranges shapes in this frame are sampled from.
    pub fn shape_ranges(&self) -> ShapeRanges {
        ShapeRanges::new(self.size)
            .with_kind(self.kinds)
            .with_radius(self.radius)
            .with_width(self.width)
            .with_height(self.height)
            .with_rgb(self.rgb)
    }
}

/// The deserialized form of a configuration file.
///
/// Every field is optional. A missing title or frame list falls back to
/// the values of [`AppConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub title: Option<String>,
    pub seed: Option<u64>,
    pub frames: Option<Vec<FrameEntry>>,
}

/// One `[[frames]]` table of a configuration file.
///
/// Ranges are `[lo, hi]` pairs and are not checked until conversion into
/// a [`FrameConfig`].
#[derive(Debug, Clone, Deserialize)]
pub struct FrameEntry {
    /// `[width, height]`
    pub size: Size,
    pub count: usize,
    pub kinds: Option<(u32, u32)>,
    pub radius: Option<(u32, u32)>,
    pub width: Option<(u32, u32)>,
    pub height: Option<(u32, u32)>,
    /// `[red, green, blue]`
    pub rgb: Option<RgbMax>,
}

/// Validates an optional `[lo, hi]` pair, falling back to `default`.
fn checked_range(pair: Option<(u32, u32)>, default: Range) -> Result<Range, InvalidRange> {
    pair.map_or(Ok(default), Range::try_from)
}

impl TryFrom<FrameEntry> for FrameConfig {
    type Error = InvalidRange;

    fn try_from(entry: FrameEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            size: entry.size,
            count: entry.count,
            kinds: checked_range(entry.kinds, default_kinds())?,
            radius: checked_range(entry.radius, default_radius())?,
            width: checked_range(entry.width, default_side())?,
            height: checked_range(entry.height, default_side())?,
            rgb: entry.rgb.unwrap_or_default(),
        })
    }
}

impl TryFrom<ConfigFile> for AppConfig {
    type Error = InvalidRange;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let frames = match file.frames {
            Some(entries) => entries
                .into_iter()
                .map(FrameConfig::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            None => default_frames(),
        };

        Ok(Self {
            title: file.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            seed: file.seed,
            frames,
        })
    }
}
