//! Canvas configuration.

use crate::algebra::Matrix;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::transform;

/// Default canvas width in device pixels.
pub const DEFAULT_WIDTH: u32 = 500;
/// Default canvas height in device pixels.
pub const DEFAULT_HEIGHT: u32 = 500;
/// Default grid cell size in device pixels.
pub const DEFAULT_GRID: u32 = 10;

/// Geometry and styling of a grid canvas.
///
/// One world pixel is drawn as a `grid × grid` cell. World `(0, 0)` sits in
/// the bottom-left cell and world Y grows upwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasConfig {
    width: u32,
    height: u32,
    grid: u32,
    background: Rgb,
    grid_color: Rgb,
    axis_color: Rgb,
    axes: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasConfig {
    /// Width of the axis arrows drawn at construction.
    pub const AXIS_WIDTH: u32 = 2;

    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            grid: DEFAULT_GRID,
            background: Rgb::WHITE,
            grid_color: Rgb::GRID_GRAY,
            axis_color: Rgb::BLUE,
            axes: true,
        }
    }

    /// Set the canvas size in device pixels.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the grid cell size in device pixels.
    #[must_use]
    pub fn grid(mut self, grid: u32) -> Self {
        self.grid = grid;
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }

    /// Set the grid line color.
    #[must_use]
    pub fn grid_color(mut self, color: Rgb) -> Self {
        self.grid_color = color;
        self
    }

    /// Set the axis arrow color.
    #[must_use]
    pub fn axis_color(mut self, color: Rgb) -> Self {
        self.axis_color = color;
        self
    }

    /// Draw the X and Y axis arrows at construction.
    #[must_use]
    pub fn axes(mut self, axes: bool) -> Self {
        self.axes = axes;
        self
    }

    /// Canvas width in device pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in device pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Grid cell size in device pixels.
    #[must_use]
    pub const fn grid_size(&self) -> u32 {
        self.grid
    }

    /// Background color.
    #[must_use]
    pub const fn background_color(&self) -> Rgb {
        self.background
    }

    /// Grid line color.
    #[must_use]
    pub const fn grid_line_color(&self) -> Rgb {
        self.grid_color
    }

    /// Axis arrow color.
    #[must_use]
    pub const fn axis_arrow_color(&self) -> Rgb {
        self.axis_color
    }

    /// Whether axis arrows are drawn.
    #[must_use]
    pub const fn draws_axes(&self) -> bool {
        self.axes
    }

    /// Number of world columns and rows that fit on the canvas.
    #[must_use]
    pub fn world_size(&self) -> (u32, u32) {
        (
            self.width.checked_div(self.grid).unwrap_or(0),
            self.height.checked_div(self.grid).unwrap_or(0),
        )
    }

    /// Radius of the disc that marks one world pixel.
    #[must_use]
    pub const fn mark_radius(&self) -> u32 {
        (self.grid / 2).saturating_sub(1)
    }

    /// World → device transform for this canvas.
    #[must_use]
    pub fn display_matrix(&self) -> Matrix {
        transform::display(self.grid, self.height)
    }

    /// Check that the configuration describes a drawable canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero width or height and
    /// [`Error::InvalidGrid`] for a grid smaller than 2 pixels.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions { width: self.width, height: self.height });
        }
        if self.grid < 2 {
            return Err(Error::InvalidGrid(self.grid));
        }
        Ok(())
    }
}
