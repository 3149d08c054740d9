//! Grid canvas backed by a framebuffer.

use std::f64::consts::FRAC_PI_6;
use std::path::Path;

use log::debug;

use super::{Arrow, DeviceSink};
use crate::algebra::{difference, mat_vec, point, Matrix, Vector};
use crate::color::Rgb;
use crate::config::CanvasConfig;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::output::PngEncoder;
use crate::render::{LinePixels, Pixel};

/// Length of an arrow head stroke in device pixels.
const ARROW_HEAD_LEN: f64 = 10.0;

/// A grid canvas.
///
/// Every world pixel becomes a filled disc centred in its grid cell. The
/// display transform comes from the [`CanvasConfig`] the canvas was built
/// with and is applied to every incoming coordinate.
#[derive(Debug, Clone)]
pub struct Canvas {
    config: CanvasConfig,
    display: Matrix,
    framebuffer: Framebuffer,
}

impl Canvas {
    /// Create a canvas, paint its background and grid and, if enabled, the
    /// X and Y axis arrows.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn new(config: CanvasConfig) -> Result<Self> {
        config.validate()?;
        let mut framebuffer = Framebuffer::new(config.width(), config.height())?;
        framebuffer.clear(config.background_color());

        let mut canvas = Self { display: config.display_matrix(), config, framebuffer };
        canvas.draw_grid();

        if canvas.config.draws_axes() {
            let (cols, rows) = canvas.config.world_size();
            let color = canvas.config.axis_arrow_color();
            let x_end = cols.saturating_sub(1) as i32;
            let y_end = rows.saturating_sub(1) as i32;
            canvas.arrow(&Arrow::new((0, 0), (x_end, 0), color).width(CanvasConfig::AXIS_WIDTH))?;
            canvas.arrow(&Arrow::new((0, 0), (0, y_end), color).width(CanvasConfig::AXIS_WIDTH))?;
        }

        debug!(
            "canvas {}x{} created, grid {} ({}x{} world pixels)",
            canvas.config.width(),
            canvas.config.height(),
            canvas.config.grid_size(),
            canvas.config.world_size().0,
            canvas.config.world_size().1,
        );
        Ok(canvas)
    }

    /// Configuration this canvas was built with.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// World → device transform.
    #[must_use]
    pub fn display_matrix(&self) -> &Matrix {
        &self.display
    }

    /// Rendered pixels.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Consume the canvas, keeping its pixels.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.framebuffer
    }

    /// Device position of a world pixel's cell centre.
    ///
    /// # Errors
    ///
    /// Propagates algebra errors from applying the display transform.
    pub fn to_device(&self, world: (i32, i32)) -> Result<Vector> {
        mat_vec(&self.display, &point(f64::from(world.0), f64::from(world.1)))
    }

    /// Encode the canvas as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        PngEncoder::to_bytes(&self.framebuffer)
    }

    /// Write the canvas to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PngEncoder::write_to_file(&self.framebuffer, path)
    }

    /// Light grid lines on every cell boundary.
    fn draw_grid(&mut self) {
        let (w, h, g) = (self.config.width(), self.config.height(), self.config.grid_size());
        let color = self.config.grid_line_color();
        for y in (0..=h).step_by(g as usize) {
            self.framebuffer.fill_rect(0, y as i32, w, 1, color);
        }
        for x in (0..=w).step_by(g as usize) {
            self.framebuffer.fill_rect(x as i32, 0, 1, h, color);
        }
    }

    /// Device-space segment with a square pen of `width` pixels.
    ///
    /// The pen is never wider than the canvas itself.
    fn stroke(&mut self, from: &Vector, to: &Vector, color: Rgb, width: u32) -> Result<()> {
        let width = width.min(self.config.width().max(self.config.height()));
        let half = (width / 2) as i32;
        for pixel in LinePixels::new(from.to_pixel()?, to.to_pixel()?, color) {
            if width <= 1 {
                self.framebuffer.plot(pixel.x, pixel.y, color);
            } else {
                let (x, y) = (pixel.x.saturating_sub(half), pixel.y.saturating_sub(half));
                self.framebuffer.fill_rect(x, y, width, width, color);
            }
        }
        Ok(())
    }
}

impl DeviceSink for Canvas {
    fn plot(&mut self, pixel: Pixel) -> Result<()> {
        let (x, y) = self.to_device(pixel.position())?.to_pixel()?;
        self.framebuffer.fill_disc(x, y, self.config.mark_radius(), pixel.color);
        Ok(())
    }

    fn arrow(&mut self, arrow: &Arrow) -> Result<()> {
        let from = self.to_device(arrow.from)?;
        let to = self.to_device(arrow.to)?;
        let delta = difference(&to, &from)?;
        let angle = delta[1].atan2(delta[0]);

        let barb = |side: f64| {
            let a = angle + side * FRAC_PI_6;
            point(to[0] - ARROW_HEAD_LEN * a.cos(), to[1] - ARROW_HEAD_LEN * a.sin())
        };

        let width = arrow.stroke_width();
        self.stroke(&from, &to, arrow.color, width)?;
        self.stroke(&barb(-1.0), &to, arrow.color, width)?;
        self.stroke(&barb(1.0), &to, arrow.color, width)
    }
}
