//! Integer rasterization of lines and circles.
//!
//! Both algorithms are exposed as lazy iterators of [`Pixel`] events so the
//! same stream can feed a framebuffer, a recorder or any other sink. An
//! iterator is finite and single-pass; call the constructor again to
//! restart it.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

use std::iter::FusedIterator;

use crate::color::Rgb;

/// One rasterized pixel: integer coordinates plus the color to paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Paint color.
    pub color: Rgb,
}

impl Pixel {
    /// Create a pixel event.
    #[must_use]
    pub const fn new(x: i32, y: i32, color: Rgb) -> Self {
        Self { x, y, color }
    }

    /// Coordinates as a tuple.
    #[must_use]
    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Bresenham line between two integer points.
///
/// Yields exactly `max(|dx|, |dy|) + 1` pixels, both endpoints included.
/// Endpoints are normalized so the driving axis advances in the positive
/// direction; as a result the pixel set does not depend on which endpoint
/// comes first.
#[derive(Debug, Clone)]
pub struct LinePixels {
    x0: i64,
    y0: i64,
    inc_x: i64,
    inc_y: i64,
    x_major: bool,
    d: i64,
    delta_a: i64,
    delta_b: i64,
    x: i64,
    y: i64,
    remaining: u64,
    color: Rgb,
}

impl LinePixels {
    /// Rasterize the segment `from → to`.
    #[must_use]
    pub fn new(from: (i32, i32), to: (i32, i32), color: Rgb) -> Self {
        let (mut x0, mut y0) = (i64::from(from.0), i64::from(from.1));
        let (mut x1, mut y1) = (i64::from(to.0), i64::from(to.1));

        let x_major = (x1 - x0).abs() >= (y1 - y0).abs();
        let driving = if x_major { x1 - x0 } else { y1 - y0 };
        if driving < 0 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = y1 - y0;
        let inc_x = if dx >= 0 { 1 } else { -1 };
        let inc_y = if dy >= 0 { 1 } else { -1 };
        let (major, minor) =
            if x_major { (dx.abs(), dy.abs()) } else { (dy.abs(), dx.abs()) };

        Self {
            x0,
            y0,
            inc_x,
            inc_y,
            x_major,
            d: 2 * minor - major,
            delta_a: 2 * minor,
            delta_b: 2 * minor - 2 * major,
            x: 0,
            y: 0,
            remaining: major.unsigned_abs() + 1,
            color,
        }
    }
}

impl Iterator for LinePixels {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let pixel = Pixel::new((self.x0 + self.x) as i32, (self.y0 + self.y) as i32, self.color);

        if self.d > 0 {
            self.d += self.delta_b;
            self.x += self.inc_x;
            self.y += self.inc_y;
        } else {
            self.d += self.delta_a;
            if self.x_major {
                self.x += self.inc_x;
            } else {
                self.y += self.inc_y;
            }
        }

        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePixels {}
impl FusedIterator for LinePixels {}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Midpoint circle outline with 8-way symmetry.
///
/// Every step yields the 8 reflections `(±x, ±y)`, `(±y, ±x)` of the current
/// octant point, so pixels on the octant boundaries come out more than once.
/// Duplicates are kept. A zero radius yields the centre 8 times and stops.
///
/// Reflections that fall outside the `i32` plane are skipped, so a circle
/// centred near the edge of the coordinate range yields only its in-range
/// part.
#[derive(Debug, Clone)]
pub struct CirclePixels {
    cx: i64,
    cy: i64,
    x: i64,
    y: i64,
    d: i64,
    reflection: u8,
    zero_radius: bool,
    done: bool,
    color: Rgb,
}

impl CirclePixels {
    /// Rasterize the circle of `radius` around `center`.
    #[must_use]
    pub fn new(center: (i32, i32), radius: u32, color: Rgb) -> Self {
        let r = i64::from(radius);
        Self {
            cx: i64::from(center.0),
            cy: i64::from(center.1),
            x: 0,
            y: r,
            d: 3 - 2 * r,
            reflection: 0,
            zero_radius: radius == 0,
            done: false,
            color,
        }
    }

    fn reflect(&self, index: u8) -> (i64, i64) {
        let (x, y) = (self.x, self.y);
        let (ox, oy) = match index {
            0 => (x, y),
            1 => (-x, y),
            2 => (x, -y),
            3 => (-x, -y),
            4 => (y, x),
            5 => (-y, x),
            6 => (y, -x),
            _ => (-y, -x),
        };
        (self.cx + ox, self.cy + oy)
    }

    /// Advance to the next octant point. Returns false once the arc is done.
    fn step(&mut self) -> bool {
        if self.zero_radius || self.y < self.x {
            return false;
        }
        self.x += 1;
        if self.d > 0 {
            self.y -= 1;
            self.d += 4 * (self.x - self.y) + 10;
        } else {
            self.d += 4 * self.x + 6;
        }
        true
    }
}

impl Iterator for CirclePixels {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        loop {
            if self.done {
                return None;
            }
            if self.reflection == 8 {
                if !self.step() {
                    self.done = true;
                    return None;
                }
                self.reflection = 0;
            }
            let (px, py) = self.reflect(self.reflection);
            self.reflection += 1;
            if let (Ok(x), Ok(y)) = (i32::try_from(px), i32::try_from(py)) {
                return Some(Pixel::new(x, y, self.color));
            }
        }
    }
}

impl FusedIterator for CirclePixels {}

/// Rasterize a line. Shorthand for [`LinePixels::new`].
#[must_use]
pub fn line(from: (i32, i32), to: (i32, i32), color: Rgb) -> LinePixels {
    LinePixels::new(from, to, color)
}

/// Rasterize a circle outline. Shorthand for [`CirclePixels::new`].
#[must_use]
pub fn circle(center: (i32, i32), radius: u32, color: Rgb) -> CirclePixels {
    CirclePixels::new(center, radius, color)
}

// ============================================================================
// Tests
// ============================================================================
