//! Immediate-mode drawing onto a [`DeviceSink`].
//!
//! Thin wrappers that round world coordinates, rasterize and push the result
//! into a sink without building a [`Scene`](super::Scene) first.

use super::raster::{CirclePixels, LinePixels, Pixel};
use crate::algebra::{add_point_vector, Vector};
use crate::color::Rgb;
use crate::error::Result;
use crate::sink::{Arrow, DeviceSink};

/// Draw a single point.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if
/// `p` has fewer than two components.
pub fn draw_point<S: DeviceSink + ?Sized>(sink: &mut S, p: &Vector, color: Rgb) -> Result<()> {
    let (x, y) = p.to_pixel()?;
    sink.plot(Pixel::new(x, y, color))
}

/// Draw a Bresenham line from `p1` to `p2`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if
/// either point has fewer than two components.
pub fn draw_line<S: DeviceSink + ?Sized>(
    sink: &mut S,
    p1: &Vector,
    p2: &Vector,
    color: Rgb,
) -> Result<()> {
    for pixel in LinePixels::new(p1.to_pixel()?, p2.to_pixel()?, color) {
        sink.plot(pixel)?;
    }
    Ok(())
}

/// Draw a midpoint circle outline.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if
/// `center` has fewer than two components.
pub fn draw_circle<S: DeviceSink + ?Sized>(
    sink: &mut S,
    center: &Vector,
    radius: u32,
    color: Rgb,
) -> Result<()> {
    for pixel in CirclePixels::new(center.to_pixel()?, radius, color) {
        sink.plot(pixel)?;
    }
    Ok(())
}

/// Draw an arrow from point `p1` to point `p2`.
///
/// Both endpoints are rounded to integer world coordinates. `width` is the
/// stroke width; `None` means 1.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if
/// either point has fewer than two components.
pub fn draw_arrow_between<S: DeviceSink + ?Sized>(
    sink: &mut S,
    p1: &Vector,
    p2: &Vector,
    color: Rgb,
    width: Option<u32>,
) -> Result<()> {
    let mut arrow = Arrow::new(p1.to_pixel()?, p2.to_pixel()?, color);
    if let Some(width) = width {
        arrow = arrow.width(width);
    }
    sink.arrow(&arrow)
}

/// Draw vector `v` as an arrow anchored at point `p`.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`](crate::Error::TypeMismatch) unless `p` is a
/// point and `v` a vector, and
/// [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if their
/// lengths differ.
pub fn draw_arrow_along<S: DeviceSink + ?Sized>(
    sink: &mut S,
    p: &Vector,
    v: &Vector,
    color: Rgb,
    width: Option<u32>,
) -> Result<()> {
    let tip = add_point_vector(p, v)?;
    draw_arrow_between(sink, p, &tip, color, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{point, vector};
    use crate::error::Error;
    use crate::sink::Recorder;

    #[test]
    fn test_draw_point_and_line() {
        let mut rec = Recorder::new();
        draw_point(&mut rec, &point(2.0, 2.0), Rgb::RED).unwrap();
        draw_line(&mut rec, &point(0.0, 0.0), &point(0.0, 2.0), Rgb::BLUE).unwrap();

        let got: Vec<_> = rec.pixels().iter().map(|p| (p.x, p.y, p.color)).collect();
        assert_eq!(
            got,
            vec![(2, 2, Rgb::RED), (0, 0, Rgb::BLUE), (0, 1, Rgb::BLUE), (0, 2, Rgb::BLUE)]
        );
    }

    #[test]
    fn test_draw_circle() {
        let mut rec = Recorder::new();
        draw_circle(&mut rec, &point(5.0, 5.0), 3, Rgb::GREEN).unwrap();
        assert!(rec.pixels().iter().any(|p| p.position() == (5, 8)));
        assert!(rec.pixels().iter().any(|p| p.position() == (2, 5)));
    }

    #[test]
    fn test_arrow_between_rounds_endpoints() {
        let mut rec = Recorder::new();
        draw_arrow_between(&mut rec, &point(0.4, 0.6), &point(3.5, -1.2), Rgb::BLACK, None)
            .unwrap();
        let arrow = &rec.arrows()[0];
        assert_eq!((arrow.from, arrow.to), ((0, 1), (4, -1)));
        assert_eq!(arrow.stroke_width(), 1);
    }

    #[test]
    fn test_arrow_along_vector() {
        let mut rec = Recorder::new();
        draw_arrow_along(&mut rec, &point(1.0, 1.0), &vector(2.0, 3.0), Rgb::BLUE, Some(2))
            .unwrap();
        let arrow = &rec.arrows()[0];
        assert_eq!((arrow.from, arrow.to), ((1, 1), (3, 4)));
        assert_eq!(arrow.stroke_width(), 2);
    }

    #[test]
    fn test_arrow_along_rejects_point_as_vector() {
        let mut rec = Recorder::new();
        let err = draw_arrow_along(&mut rec, &point(1.0, 1.0), &point(2.0, 3.0), Rgb::BLUE, None)
            .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
        assert!(rec.arrows().is_empty());
    }
}
