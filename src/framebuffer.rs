//! RGB pixel buffer backing the canvas sink.

use crate::color::Rgb;
use crate::error::{Error, Result};

/// Bytes per pixel (`[R, G, B]`).
const BYTES_PER_PIXEL: usize = 3;

/// Tightly packed RGB framebuffer, row-major, origin at the top-left.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGB pixels in row-major order, 3 bytes each.
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a black framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use affine_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
        Ok(Self { width, height, pixels: vec![0; size] })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let row_bytes = (self.width as usize) * BYTES_PER_PIXEL;
        let start = (y as usize) * row_bytes;
        Some(&self.pixels[start..start + row_bytes])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgb) {
        let rgb = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&rgb);
        }
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        let clamp_x = |v: i64| v.clamp(0, i64::from(self.width)) as u32;
        let clamp_y = |v: i64| v.clamp(0, i64::from(self.height)) as u32;
        let x1 = clamp_x(i64::from(x));
        let y1 = clamp_y(i64::from(y));
        let x2 = clamp_x(i64::from(x) + i64::from(w));
        let y2 = clamp_y(i64::from(y) + i64::from(h));

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let rgb = color.to_array();
        for row_y in y1..y2 {
            let start = self.pixel_index(x1, row_y);
            let end = self.pixel_index(x2 - 1, row_y) + BYTES_PER_PIXEL;
            for chunk in self.pixels[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                chunk.copy_from_slice(&rgb);
            }
        }
    }

    /// Fill a disc of `radius` around `(cx, cy)` with horizontal spans.
    ///
    /// Uses the midpoint circle walk; a zero radius sets one pixel.
    pub fn fill_disc(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb) {
        let mut x = i64::from(radius);
        let mut y = 0i64;
        let mut err = 1 - x;
        let (cx, cy) = (i64::from(cx), i64::from(cy));

        while x >= y {
            self.span(cx - x, cx + x, cy + y, color);
            self.span(cx - x, cx + x, cy - y, color);
            self.span(cx - y, cx + y, cy + x, color);
            self.span(cx - y, cx + y, cy - x, color);

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.pixel_index(x, y);
        Some(Rgb::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&color.to_array());
    }

    /// Set a pixel given signed coordinates; negative or out-of-range
    /// coordinates are ignored.
    pub fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }

    /// Inclusive horizontal span `x1..=x2` on row `y`, clipped.
    fn span(&mut self, x1: i64, x2: i64, y: i64, color: Rgb) {
        if y < 0 || y >= i64::from(self.height) {
            return;
        }
        let start = x1.max(0);
        let end = (x2 + 1).min(i64::from(self.width));
        if start < end {
            self.fill_rect(start as i32, y as i32, (end - start) as u32, 1, color);
        }
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * BYTES_PER_PIXEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert_eq!(fb.pixels().len(), 15000);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgb::BLACK));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgb::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgb::RED));
            }
        }
    }

    #[test]
    fn test_fill_rect_clamps() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.clear(Rgb::WHITE);
        fb.fill_rect(-5, 15, 10, 10, Rgb::RED);

        assert_eq!(fb.get_pixel(0, 19), Some(Rgb::RED));
        assert_eq!(fb.get_pixel(4, 15), Some(Rgb::RED));
        assert_eq!(fb.get_pixel(5, 15), Some(Rgb::WHITE));
        assert_eq!(fb.get_pixel(0, 14), Some(Rgb::WHITE));
    }

    #[test]
    fn test_fill_disc() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.clear(Rgb::WHITE);
        fb.fill_disc(10, 10, 4, Rgb::BLUE);

        assert_eq!(fb.get_pixel(10, 10), Some(Rgb::BLUE));
        assert_eq!(fb.get_pixel(14, 10), Some(Rgb::BLUE));
        assert_eq!(fb.get_pixel(10, 6), Some(Rgb::BLUE));
        assert_eq!(fb.get_pixel(15, 10), Some(Rgb::WHITE));
        assert_eq!(fb.get_pixel(14, 14), Some(Rgb::WHITE));
    }

    #[test]
    fn test_fill_disc_partly_offscreen() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.fill_disc(0, 0, 3, Rgb::GREEN);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgb::GREEN));
        assert_eq!(fb.get_pixel(3, 0), Some(Rgb::GREEN));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgb::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgb::BLUE));

        // Out of bounds
        assert_eq!(fb.get_pixel(100, 100), None);
        fb.plot(-1, 3, Rgb::RED);
        fb.plot(3, 10, Rgb::RED);
        assert_eq!(fb.pixels().iter().filter(|&&b| b == 255).count(), 1);
    }

    #[test]
    fn test_row_access() {
        let mut fb = Framebuffer::new(10, 5).unwrap();
        fb.set_pixel(4, 2, Rgb::new(1, 2, 3));

        let row = fb.row(2).unwrap();
        assert_eq!(row.len(), 30);
        assert_eq!(&row[12..15], &[1, 2, 3]);
        assert!(fb.row(5).is_none());
    }
}
