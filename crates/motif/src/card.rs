//! Frame population.
//!
//! A card is one drawing region filled with independently sampled shapes.
//! Shapes are written in sampling order with no sorting or overlap
//! resolution.

use std::io;

use log::{debug, trace};
use rand::Rng;

use motif_core::{
    document,
    params::{ShapeConfig, ShapeRanges},
    sampler::RandomSampler,
    shape::Drawable,
};

use crate::config::FrameConfig;

/// Indentation level of a drawing region inside the document body.
pub const CANVAS_INDENT: usize = 1;

/// Indentation level of shapes, one level inside their region.
pub const SHAPE_INDENT: usize = CANVAS_INDENT + 1;

/// Samples and renders `count` shapes into `sink`.
///
/// # Errors
///
/// Returns the first write error; shapes already written stay in the sink.
pub fn populate<W, R>(
    sink: &mut W,
    sampler: &mut RandomSampler<R>,
    count: usize,
    ranges: &ShapeRanges,
) -> io::Result<()>
where
    W: io::Write + ?Sized,
    R: Rng,
{
    for index in 0..count {
        let config = ShapeConfig::sample(sampler, ranges);
        trace!(index, config:%; "Sampled shape parameters");

        let shape = config.build_shape();
        shape.render(sink, SHAPE_INDENT)?;
    }
    Ok(())
}

/// Writes one complete frame: the opening region tag, its shapes, and the
/// closing tag.
pub fn compose_frame<W, R>(
    sink: &mut W,
    sampler: &mut RandomSampler<R>,
    frame: &FrameConfig,
) -> io::Result<()>
where
    W: io::Write + ?Sized,
    R: Rng,
{
    debug!(
        width = frame.size().width(),
        height = frame.size().height(),
        count = frame.count();
        "Composing frame"
    );

    document::open_canvas(sink, CANVAS_INDENT, frame.size())?;
    populate(sink, sampler, frame.count(), &frame.shape_ranges())?;
    document::close_canvas(sink, CANVAS_INDENT)
}

#[cfg(test)]
mod tests {
    use motif_core::{geometry::Size, sampler::Range};

    use super::*;

    fn populate_to_string(count: usize, ranges: &ShapeRanges, seed: u64) -> String {
        let mut out = Vec::new();
        let mut sampler = RandomSampler::seeded(seed);
        populate(&mut out, &mut sampler, count, ranges).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_populate_writes_count_lines() {
        let ranges = ShapeRanges::new(Size::new(1300, 500));
        let text = populate_to_string(37, &ranges, 1);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 37);
        for line in lines {
            assert!(line.starts_with("      <"), "bad indent: {line:?}");
            assert!(
                (line.contains("<circle ") && line.ends_with("></circle>"))
                    || (line.contains("<rect ") && line.ends_with("></rect>")),
                "unexpected element: {line:?}"
            );
        }
    }

    #[test]
    fn test_populate_zero_writes_nothing() {
        let ranges = ShapeRanges::new(Size::new(10, 10));
        assert_eq!(populate_to_string(0, &ranges, 1), "");
    }

    #[test]
    fn test_populate_circles_only() {
        let ranges = ShapeRanges::new(Size::new(1000, 500)).with_kind(Range::single(0));
        let text = populate_to_string(25, &ranges, 2);
        assert_eq!(text.matches("<circle ").count(), 25);
        assert_eq!(text.matches("<rect ").count(), 0);
    }

    #[test]
    fn test_populate_is_reproducible() {
        let ranges = ShapeRanges::new(Size::new(300, 500));
        assert_eq!(
            populate_to_string(20, &ranges, 8),
            populate_to_string(20, &ranges, 8)
        );
    }

    #[test]
    fn test_compose_frame_brackets_shapes() {
        let frame = FrameConfig::new(Size::new(300, 500), 3).with_kinds(Range::single(1));
        let mut out = Vec::new();
        let mut sampler = RandomSampler::seeded(4);
        compose_frame(&mut out, &mut sampler, &frame).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "   <!--Define SVG drawing box-->");
        assert_eq!(lines[1], "   <svg width=\"300\" height=\"500\">");
        assert!(lines[2..5].iter().all(|line| line.starts_with("      <rect ")));
        assert_eq!(lines[5], "   </svg>");
    }
}
