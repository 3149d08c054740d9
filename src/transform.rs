//! Affine transform builders.
//!
//! Each builder returns a 3x3 [`Matrix`] acting on homogeneous points and
//! vectors. Compose them with [`mat_mat`](crate::algebra::mat_mat): the
//! right-most factor is applied first.

use crate::algebra::Matrix;

/// 3x3 identity.
#[must_use]
pub fn identity() -> Matrix {
    Matrix::from_array([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
}

/// Translation by `(dx, dy)`.
///
/// Vectors are unaffected since their homogeneous coordinate is 0.
#[must_use]
pub fn translation(dx: f64, dy: f64) -> Matrix {
    Matrix::from_array([[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]])
}

/// Counter-clockwise rotation about the origin, angle in degrees.
#[must_use]
pub fn rotation(theta_degrees: f64) -> Matrix {
    let (sin, cos) = theta_degrees.to_radians().sin_cos();
    Matrix::from_array([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
}

/// Display transform of a grid canvas.
///
/// Maps world cell `(i, j)` to the centre of the device cell `i` columns
/// from the left and `j` rows from the bottom of a canvas `height` pixels
/// tall, where each cell is `grid` pixels square. The Y axis is flipped so
/// world Y grows upwards.
#[must_use]
pub fn display(grid: u32, height: u32) -> Matrix {
    let g = f64::from(grid);
    let h = f64::from(height);
    Matrix::from_array([[g, 0.0, g / 2.0], [0.0, -g, h - g / 2.0], [0.0, 0.0, 1.0]])
}
