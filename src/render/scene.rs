//! Scene primitives and the scene renderer.

use log::{debug, trace};

use super::raster::{CirclePixels, LinePixels, Pixel};
use crate::algebra::Vector;
use crate::color::Rgb;
use crate::error::Result;
use crate::sink::DeviceSink;

/// A drawable scene element in world coordinates.
///
/// With the `serde` feature the enum is internally tagged by a `type` field
/// (`point`, `line`, `circle`). Any other tag decodes to
/// [`Primitive::Unknown`], which rendering skips.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Primitive {
    /// A single pixel.
    Point {
        /// Position.
        p: Vector,
        /// Paint color.
        #[cfg_attr(feature = "serde", serde(default))]
        color: Rgb,
    },
    /// A Bresenham line segment.
    Line {
        /// Start point.
        p1: Vector,
        /// End point.
        p2: Vector,
        /// Paint color.
        #[cfg_attr(feature = "serde", serde(default))]
        color: Rgb,
    },
    /// A midpoint circle outline.
    Circle {
        /// Centre point.
        #[cfg_attr(feature = "serde", serde(alias = "c"))]
        center: Vector,
        /// Radius in world pixels.
        #[cfg_attr(feature = "serde", serde(alias = "r"))]
        radius: u32,
        /// Paint color.
        #[cfg_attr(feature = "serde", serde(default))]
        color: Rgb,
    },
    /// A primitive whose tag this renderer does not recognize.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl Primitive {
    /// Point primitive.
    #[must_use]
    pub fn point(p: Vector, color: Rgb) -> Self {
        Self::Point { p, color }
    }

    /// Line primitive.
    #[must_use]
    pub fn line(p1: Vector, p2: Vector, color: Rgb) -> Self {
        Self::Line { p1, p2, color }
    }

    /// Circle primitive.
    #[must_use]
    pub fn circle(center: Vector, radius: u32, color: Rgb) -> Self {
        Self::Circle { center, radius, color }
    }

    /// Tag name, as used in scene files.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Point { .. } => "point",
            Self::Line { .. } => "line",
            Self::Circle { .. } => "circle",
            Self::Unknown => "unknown",
        }
    }

    /// Round the primitive's coordinates and start its pixel stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`](crate::Error::DimensionMismatch)
    /// if a coordinate vector has fewer than two components.
    pub fn pixels(&self) -> Result<PrimitivePixels> {
        Ok(match self {
            Self::Point { p, color } => {
                let (x, y) = p.to_pixel()?;
                PrimitivePixels::Point(Some(Pixel::new(x, y, *color)).into_iter())
            }
            Self::Line { p1, p2, color } => {
                PrimitivePixels::Line(LinePixels::new(p1.to_pixel()?, p2.to_pixel()?, *color))
            }
            Self::Circle { center, radius, color } => {
                PrimitivePixels::Circle(CirclePixels::new(center.to_pixel()?, *radius, *color))
            }
            Self::Unknown => PrimitivePixels::Empty,
        })
    }
}

/// Pixel stream of a single [`Primitive`].
#[derive(Debug, Clone)]
pub enum PrimitivePixels {
    /// One pixel.
    Point(std::option::IntoIter<Pixel>),
    /// Line pixels.
    Line(LinePixels),
    /// Circle pixels.
    Circle(CirclePixels),
    /// Nothing to draw.
    Empty,
}

impl Iterator for PrimitivePixels {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        match self {
            Self::Point(it) => it.next(),
            Self::Line(it) => it.next(),
            Self::Circle(it) => it.next(),
            Self::Empty => None,
        }
    }
}

/// An ordered list of primitives. Draw order is list order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive (builder style).
    #[must_use]
    pub fn with(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    /// Append a primitive.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Number of primitives, unknown ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// True if the scene has no primitives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Iterate over the primitives in draw order.
    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    /// Pixel stream of the whole scene, primitives in draw order.
    ///
    /// All coordinates are checked before the stream is returned.
    ///
    /// # Errors
    ///
    /// Returns the first coordinate error of any primitive.
    pub fn pixels(&self) -> Result<impl Iterator<Item = Pixel>> {
        let streams = self.iter().map(Primitive::pixels).collect::<Result<Vec<_>>>()?;
        Ok(streams.into_iter().flatten())
    }

    /// Parse a YAML list of tagged primitives.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SceneFormat`](crate::Error::SceneFormat) if the text
    /// is not a valid scene.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml_ng::from_str(text).map_err(|e| crate::Error::SceneFormat(e.to_string()))
    }
}

impl From<Vec<Primitive>> for Scene {
    fn from(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self { primitives: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Render every primitive of `scene` into `sink`, in order.
///
/// Primitives tagged [`Primitive::Unknown`] are skipped. Coordinates are
/// validated for the whole scene first, so a malformed scene delivers no
/// pixels at all.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if
/// any primitive has a coordinate vector shorter than two components, and
/// passes on the first error the sink reports.
pub fn render_scene<S: DeviceSink + ?Sized>(scene: &Scene, sink: &mut S) -> Result<()> {
    let streams = scene
        .iter()
        .map(|primitive| primitive.pixels().map(|stream| (primitive, stream)))
        .collect::<Result<Vec<_>>>()?;

    for (index, (primitive, stream)) in streams.into_iter().enumerate() {
        match primitive {
            Primitive::Unknown => {
                debug!("scene[{index}]: skipping primitive with unrecognized tag");
                continue;
            }
            Primitive::Point { .. } | Primitive::Line { .. } | Primitive::Circle { .. } => {
                trace!("scene[{index}]: drawing {}", primitive.kind());
            }
        }
        for pixel in stream {
            sink.plot(pixel)?;
        }
    }
    Ok(())
}
