//! Homogeneous-coordinate linear algebra.
//!
//! Points and vectors share one representation, a [`Vector`] whose trailing
//! component is the homogeneous coordinate: `1` for points, `0` for vectors.
//! Affine transforms are 3x3 [`Matrix`] values applied with [`mat_vec`] and
//! composed with [`mat_mat`].
//!
//! Every operation is pure. Shape errors surface as
//! [`Error::DimensionMismatch`], role errors (adding two points, say) as
//! [`Error::TypeMismatch`].

use std::ops::Index;

use crate::error::{Error, Result};

/// An ordered sequence of `N` real numbers.
///
/// No typing is implied by the struct itself; see [`Vector::is_point`] and
/// [`Vector::is_vector`] for the homogeneous convention.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Create a vector from its components.
    #[must_use]
    pub fn new(components: Vec<f64>) -> Self {
        Self { components }
    }

    /// The point `(0, 0, 1)`.
    #[must_use]
    pub fn origin() -> Self {
        point(0.0, 0.0)
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True for a zero-length vector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    /// Trailing (homogeneous) component, if any.
    #[must_use]
    pub fn homogeneous(&self) -> Option<f64> {
        self.components.last().copied()
    }

    /// True when the trailing component is exactly 1.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_point(&self) -> bool {
        self.homogeneous() == Some(1.0)
    }

    /// True when the trailing component is exactly 0.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_vector(&self) -> bool {
        self.homogeneous() == Some(0.0)
    }

    /// Round the first two components to an integer pixel coordinate.
    ///
    /// Rounding goes through [`round`]; values beyond the `i32` range
    /// saturate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vector has fewer than two
    /// components.
    pub fn to_pixel(&self) -> Result<(i32, i32)> {
        match round(self).as_slice() {
            [x, y, ..] => Ok((*x as i32, *y as i32)),
            _ => Err(Error::DimensionMismatch { op: "to_pixel", expected: 2, found: self.len() }),
        }
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self::new(components.to_vec())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}

/// A rectangular `rows × cols` matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from fixed-size rows.
    #[must_use]
    pub fn from_array<const R: usize, const C: usize>(rows: [[f64; C]; R]) -> Self {
        Self { rows: R, cols: C, data: rows.iter().flatten().copied().collect() }
    }

    /// Build a matrix from row vectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in &rows {
            if row.len() != cols {
                return Err(Error::DimensionMismatch {
                    op: "from_rows",
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { rows: rows.len(), cols, data })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `r` is out of range.
    #[must_use]
    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// All entries in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        &self.data[r * self.cols + c]
    }
}

/// Zero vector of length `n`.
#[must_use]
pub fn make_vector(n: usize) -> Vector {
    Vector::new(vec![0.0; n])
}

/// Zero matrix of shape `rows × cols`.
#[must_use]
pub fn make_matrix(rows: usize, cols: usize) -> Matrix {
    Matrix { rows, cols, data: vec![0.0; rows * cols] }
}

/// 2D point in homogeneous coordinates: `(x, y, 1)`.
#[must_use]
pub fn point(x: f64, y: f64) -> Vector {
    Vector::new(vec![x, y, 1.0])
}

/// 2D vector in homogeneous coordinates: `(dx, dy, 0)`.
#[must_use]
pub fn vector(dx: f64, dy: f64) -> Vector {
    Vector::new(vec![dx, dy, 0.0])
}

/// Matrix-vector product `m · v`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `m.cols() != v.len()`.
pub fn mat_vec(m: &Matrix, v: &Vector) -> Result<Vector> {
    if m.cols != v.len() {
        return Err(Error::DimensionMismatch { op: "mat_vec", expected: m.cols, found: v.len() });
    }
    let out = (0..m.rows)
        .map(|r| m.row(r).iter().zip(v.as_slice()).map(|(a, b)| a * b).sum())
        .collect();
    Ok(Vector::new(out))
}

/// Matrix-matrix product `a · b`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `a.cols() != b.rows()`.
pub fn mat_mat(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols != b.rows {
        return Err(Error::DimensionMismatch { op: "mat_mat", expected: a.cols, found: b.rows });
    }
    let mut out = make_matrix(a.rows, b.cols);
    for i in 0..a.rows {
        for j in 0..b.cols {
            out.data[i * b.cols + j] = (0..a.cols).map(|k| a[(i, k)] * b[(k, j)]).sum();
        }
    }
    Ok(out)
}

/// Componentwise difference `a - b`.
///
/// Point minus point and vector minus vector both give a vector. Mixed or
/// untyped operands are rejected.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] on unequal lengths and
/// [`Error::TypeMismatch`] unless both operands are points or both are
/// vectors.
pub fn difference(a: &Vector, b: &Vector) -> Result<Vector> {
    check_same_len("difference", a, b)?;
    let same_role = (a.is_point() && b.is_point()) || (a.is_vector() && b.is_vector());
    if !same_role {
        return Err(Error::TypeMismatch {
            op: "difference",
            reason: "operands must both be points or both be vectors",
        });
    }
    Ok(zip_with(a, b, |x, y| x - y))
}

/// Componentwise scaling `v * k`.
#[must_use]
pub fn scale(v: &Vector, k: f64) -> Vector {
    Vector::new(v.as_slice().iter().map(|c| c * k).collect())
}

/// Componentwise sum of two vectors.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] on unequal lengths.
pub fn add_vectors(v1: &Vector, v2: &Vector) -> Result<Vector> {
    check_same_len("add_vectors", v1, v2)?;
    Ok(zip_with(v1, v2, |x, y| x + y))
}

/// Translate point `p` by vector `v`. The result is a point.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] on unequal lengths, then
/// [`Error::TypeMismatch`] unless `p` ends in exactly 1 and `v` in exactly 0.
pub fn add_point_vector(p: &Vector, v: &Vector) -> Result<Vector> {
    check_same_len("add_point_vector", p, v)?;
    if !p.is_point() {
        return Err(Error::TypeMismatch { op: "add_point_vector", reason: "p is not a point" });
    }
    if !v.is_vector() {
        return Err(Error::TypeMismatch { op: "add_point_vector", reason: "v is not a vector" });
    }
    Ok(zip_with(p, v, |x, y| x + y))
}

/// Round every component to the nearest integer, halves away from zero.
#[must_use]
pub fn round(v: &Vector) -> Vector {
    Vector::new(v.as_slice().iter().map(|c| c.round()).collect())
}

fn check_same_len(op: &'static str, a: &Vector, b: &Vector) -> Result<()> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { op, expected: a.len(), found: b.len() })
    }
}

fn zip_with(a: &Vector, b: &Vector, f: impl Fn(f64, f64) -> f64) -> Vector {
    Vector::new(a.as_slice().iter().zip(b.as_slice()).map(|(&x, &y)| f(x, y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_make_vector_and_matrix_are_zeroed() {
        assert_eq!(make_vector(4).as_slice(), &[0.0; 4]);

        let m = make_matrix(2, 3);
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_point_and_vector_roles() {
        let p = point(3.0, 4.0);
        let v = vector(3.0, 4.0);
        assert!(p.is_point() && !p.is_vector());
        assert!(v.is_vector() && !v.is_point());
        assert_eq!(Vector::origin(), point(0.0, 0.0));
        assert!(!Vector::default().is_point());
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { expected: 2, found: 1, .. }));
    }

    #[test]
    fn test_mat_vec_rejects_wrong_width() {
        let m = Matrix::from_array([[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]);
        let err = mat_vec(&m, &point(1.0, 2.0)).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { op: "mat_vec", expected: 2, found: 3 }));
    }

    #[test]
    fn test_mat_vec_rectangular() {
        let m = Matrix::from_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let out = mat_vec(&m, &Vector::from([1.0, 0.0, -1.0])).unwrap();
        assert_eq!(out.as_slice(), &[-2.0, -2.0]);
    }

    #[test]
    fn test_mat_mat_rectangular() {
        let a = Matrix::from_array([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let b = Matrix::from_array([[1.0, 0.0, 2.0], [0.0, 1.0, 1.0]]);
        let c = mat_mat(&a, &b).unwrap();
        assert_eq!((c.rows(), c.cols()), (3, 3));
        assert_eq!(c.row(0), &[1.0, 2.0, 4.0]);
        assert_eq!(c.row(2), &[5.0, 6.0, 16.0]);

        assert!(matches!(mat_mat(&a, &a), Err(Error::DimensionMismatch { op: "mat_mat", .. })));
    }

    #[test]
    fn test_difference_of_points_is_vector() {
        let d = difference(&point(5.0, 7.0), &point(2.0, 3.0)).unwrap();
        assert_eq!(d, vector(3.0, 4.0));
        assert!(d.is_vector());
    }

    #[test]
    fn test_difference_rejects_mixed_roles() {
        let p = point(1.0, 1.0);
        let v = vector(1.0, 1.0);
        assert!(matches!(difference(&v, &p), Err(Error::TypeMismatch { .. })));
        assert!(matches!(difference(&p, &v), Err(Error::TypeMismatch { .. })));
        assert!(matches!(
            difference(&p, &Vector::from([1.0, 1.0])),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_scale_and_add_vectors() {
        assert_eq!(scale(&vector(1.5, -2.0), 2.0), vector(3.0, -4.0));
        assert_eq!(add_vectors(&vector(1.0, 2.0), &vector(3.0, 4.0)).unwrap(), vector(4.0, 6.0));
        assert!(matches!(
            add_vectors(&vector(1.0, 2.0), &Vector::from([1.0])),
            Err(Error::DimensionMismatch { op: "add_vectors", expected: 3, found: 1 })
        ));
    }

    #[test]
    fn test_add_point_vector() {
        let q = add_point_vector(&point(1.0, 2.0), &vector(3.0, -1.0)).unwrap();
        assert_eq!(q, point(4.0, 1.0));
        assert!(q.is_point());
    }

    #[test]
    fn test_add_point_vector_rejects_two_points() {
        let err = add_point_vector(&point(1.0, 2.0), &point(3.0, 4.0)).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { reason: "v is not a vector", .. }));

        let err = add_point_vector(&vector(1.0, 2.0), &vector(3.0, 4.0)).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { reason: "p is not a point", .. }));
    }

    #[test]
    fn test_add_point_vector_checks_length_first() {
        let err = add_point_vector(&point(1.0, 2.0), &Vector::from([1.0, 0.0])).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch { op: "add_point_vector", expected: 3, found: 2 }
        ));
    }

    #[test]
    fn test_round_halves_away_from_zero() {
        let r = round(&Vector::from([0.5, -0.5, 1.49, -2.51]));
        assert_eq!(r.as_slice(), &[1.0, -1.0, 1.0, -3.0]);
    }

    #[test]
    fn test_to_pixel() {
        assert_eq!(point(2.6, -1.2).to_pixel().unwrap(), (3, -1));
        assert_eq!(point(-0.5, 2.5).to_pixel().unwrap(), (-1, 3));
        assert_eq!(point(1e12, -1e12).to_pixel().unwrap(), (i32::MAX, i32::MIN));
        assert!(matches!(
            Vector::from([1.0]).to_pixel(),
            Err(Error::DimensionMismatch { op: "to_pixel", .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_difference_then_add_recovers_point(
            ax in -1e3f64..1e3, ay in -1e3f64..1e3,
            bx in -1e3f64..1e3, by in -1e3f64..1e3,
        ) {
            let a = point(ax, ay);
            let b = point(bx, by);
            let v = difference(&a, &b).unwrap();
            let back = add_point_vector(&b, &v).unwrap();
            for (got, want) in back.as_slice().iter().zip(a.as_slice()) {
                assert_abs_diff_eq!(got, want, epsilon = 1e-9);
            }
        }

        #[test]
        fn prop_scale_by_zero_keeps_length(values in prop::collection::vec(-1e6f64..1e6, 0..8)) {
            let v = Vector::new(values.clone());
            let z = scale(&v, 0.0);
            prop_assert_eq!(z.len(), values.len());
            prop_assert!(z.as_slice().iter().all(|&c| c == 0.0));
        }
    }
}
