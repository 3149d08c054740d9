//! # affine-raster
//!
//! A small 2D rendering toolkit for teaching affine geometry and
//! rasterization.
//!
//! Points and vectors live in homogeneous coordinates and are moved around
//! with 3x3 matrices. Lines and circles are turned into integer pixels with
//! Bresenham's and the midpoint algorithm, and the resulting pixel streams
//! are handed to a device sink, typically a grid canvas that shows every
//! world pixel as a disc in its own cell.
//!
//! ## Quick Start
//!
//! ```rust
//! use affine_raster::prelude::*;
//!
//! let scene = Scene::new()
//!     .with(Primitive::line(point(0.0, 0.0), point(8.0, 3.0), Rgb::RED))
//!     .with(Primitive::circle(point(20.0, 20.0), 6, Rgb::BLUE));
//!
//! let mut canvas = Canvas::new(CanvasConfig::default())?;
//! render_scene(&scene, &mut canvas)?;
//! let png = canvas.to_png_bytes()?;
//! assert!(!png.is_empty());
//! # Ok::<(), affine_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for colors, vectors and primitives
//! - `yaml`: load scenes from YAML text
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.
//! - Foley, J. D., van Dam, A., Feiner, S. K., & Hughes, J. F. (1990).
//!   *Computer Graphics: Principles and Practice*, 2nd ed., ch. 3 and 5.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Homogeneous-coordinate vectors and matrices.
pub mod algebra;

/// Affine transform builders.
pub mod transform;

/// Color type.
pub mod color;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization algorithms and the scene renderer.
pub mod render;

/// Device sinks (canvas, recorder).
pub mod sink;

/// RGB pixel buffer.
pub mod framebuffer;

/// Canvas configuration.
pub mod config;

/// Output encoders (PNG).
pub mod output;

/// Logger initialization.
pub mod logging;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for affine-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use affine_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::{
        add_point_vector, add_vectors, difference, make_matrix, make_vector, mat_mat, mat_vec,
        point, round, scale, vector, Matrix, Vector,
    };
    pub use crate::color::Rgb;
    pub use crate::config::CanvasConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::output::PngEncoder;
    pub use crate::render::{
        draw_arrow_along, draw_arrow_between, draw_circle, draw_line, draw_point, render_scene,
        Pixel, Primitive, Scene,
    };
    pub use crate::sink::{Arrow, Canvas, DeviceSink, Recorder};
    pub use crate::transform::{display, identity, rotation, translation};
}
