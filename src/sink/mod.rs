//! Device sinks: where rasterized pixels end up.
//!
//! The core pushes integer world coordinates; each sink decides how to turn
//! them into marks on a surface. [`Canvas`] paints a grid canvas backed by a
//! [`Framebuffer`](crate::framebuffer::Framebuffer); [`Recorder`] keeps the
//! raw events for inspection and tests.

mod canvas;

pub use canvas::Canvas;

use crate::color::Rgb;
use crate::error::Result;
use crate::render::Pixel;

/// Receiver of rasterized output.
pub trait DeviceSink {
    /// Mark one world pixel.
    fn plot(&mut self, pixel: Pixel) -> Result<()>;

    /// Draw an arrow between two world pixels.
    fn arrow(&mut self, arrow: &Arrow) -> Result<()>;
}

/// An arrow between two integer world points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrow {
    /// Tail.
    pub from: (i32, i32),
    /// Head.
    pub to: (i32, i32),
    /// Stroke color.
    pub color: Rgb,
    /// Stroke width in device pixels; `None` means 1.
    pub width: Option<u32>,
}

impl Arrow {
    /// Create a 1-pixel-wide arrow.
    #[must_use]
    pub const fn new(from: (i32, i32), to: (i32, i32), color: Rgb) -> Self {
        Self { from, to, color, width: None }
    }

    /// Set the stroke width.
    #[must_use]
    pub const fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Effective stroke width.
    #[must_use]
    pub fn stroke_width(&self) -> u32 {
        self.width.unwrap_or(1)
    }
}

/// Sink that records every event in arrival order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pixels: Vec<Pixel>,
    arrows: Vec<Arrow>,
}

impl Recorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plotted pixels so far.
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Arrows so far.
    #[must_use]
    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    /// Forget everything recorded.
    pub fn clear(&mut self) {
        self.pixels.clear();
        self.arrows.clear();
    }
}

impl DeviceSink for Recorder {
    fn plot(&mut self, pixel: Pixel) -> Result<()> {
        self.pixels.push(pixel);
        Ok(())
    }

    fn arrow(&mut self, arrow: &Arrow) -> Result<()> {
        self.arrows.push(*arrow);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_keeps_order() {
        let mut rec = Recorder::new();
        rec.plot(Pixel::new(1, 2, Rgb::RED)).unwrap();
        rec.plot(Pixel::new(0, 0, Rgb::BLUE)).unwrap();
        rec.arrow(&Arrow::new((0, 0), (1, 1), Rgb::BLACK).width(3)).unwrap();

        assert_eq!(rec.pixels(), &[Pixel::new(1, 2, Rgb::RED), Pixel::new(0, 0, Rgb::BLUE)]);
        assert_eq!(rec.arrows()[0].stroke_width(), 3);

        rec.clear();
        assert!(rec.pixels().is_empty() && rec.arrows().is_empty());
    }

    #[test]
    fn test_sink_as_trait_object() {
        let mut rec = Recorder::new();
        let sink: &mut dyn DeviceSink = &mut rec;
        sink.plot(Pixel::new(4, 4, Rgb::GREEN)).unwrap();
        assert_eq!(rec.pixels().len(), 1);
    }
}
