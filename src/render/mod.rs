//! Rasterization and scene rendering.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer line drawing with 8-way octant symmetry
//! - **Midpoint Circle**: circle outlines from one octant plus 7 reflections
//!
//! Rasterizers produce lazy [`Pixel`] streams; [`render_scene`] and the
//! `draw_*` helpers deliver them to a [`DeviceSink`](crate::sink::DeviceSink).

mod draw;
mod raster;
mod scene;

pub use draw::{draw_arrow_along, draw_arrow_between, draw_circle, draw_line, draw_point};
pub use raster::{circle, line, CirclePixels, LinePixels, Pixel};
pub use scene::{render_scene, Primitive, PrimitivePixels, Scene};
