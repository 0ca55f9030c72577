//! Transform matrices.
//!
//! Factories for scale, translation, rotation and projection matrices.
//! Vectors are columns: a point `p` is transformed as `m * p`, and the
//! homogeneous 4x4 forms keep the translation in column 3.

use tessera_scalar::{is_zero, FloatScalar, Scalar};

use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;
use crate::vector::FixedVector;

fn two<T: Scalar>() -> T {
    T::one() + T::one()
}

/// Diagonal matrix scaling axis `i` by `factors[i]`.
#[must_use]
pub fn scale<T: Scalar, const N: usize>(factors: FixedVector<T, N>) -> Matrix<T, N, N> {
    Matrix::from_fn(|x, y| if x == y { factors[x] } else { T::zero() })
}

/// Homogeneous 3D scaling.
#[must_use]
pub fn scaling<T: Scalar>(factors: FixedVector<T, 3>) -> Matrix<T, 4, 4> {
    Matrix::from_fn(|x, y| match (x, y) {
        (3, 3) => T::one(),
        (x, y) if x == y => factors[x],
        _ => T::zero(),
    })
}

/// Homogeneous 3D translation by `offset`.
#[must_use]
pub fn translation<T: Scalar>(offset: FixedVector<T, 3>) -> Matrix<T, 4, 4> {
    let mut m = Matrix::identity();
    for y in 0..3 {
        m[(3, y)] = offset[y];
    }
    m
}

/// Counter-clockwise rotation of the plane by `angle` radians.
#[must_use]
pub fn rotation_2d<T: FloatScalar>(angle: T) -> Matrix<T, 2, 2> {
    let (s, c) = angle.sin_cos();
    Matrix::from_rows([[c, -s], [s, c]])
}

/// Homogeneous rotation about the x axis.
#[must_use]
pub fn rotation_x<T: FloatScalar>(angle: T) -> Matrix<T, 4, 4> {
    let (s, c) = angle.sin_cos();
    let (o, i) = (T::zero(), T::one());
    Matrix::from_rows([[i, o, o, o], [o, c, -s, o], [o, s, c, o], [o, o, o, i]])
}

/// Homogeneous rotation about the y axis.
#[must_use]
pub fn rotation_y<T: FloatScalar>(angle: T) -> Matrix<T, 4, 4> {
    let (s, c) = angle.sin_cos();
    let (o, i) = (T::zero(), T::one());
    Matrix::from_rows([[c, o, s, o], [o, i, o, o], [-s, o, c, o], [o, o, o, i]])
}

/// Homogeneous rotation about the z axis.
#[must_use]
pub fn rotation_z<T: FloatScalar>(angle: T) -> Matrix<T, 4, 4> {
    let (s, c) = angle.sin_cos();
    let (o, i) = (T::zero(), T::one());
    Matrix::from_rows([[c, -s, o, o], [s, c, o, o], [o, o, i, o], [o, o, o, i]])
}

/// Homogeneous rotation by `angle` radians about `axis` (Rodrigues).
///
/// # Errors
///
/// Returns [`LinalgError::ZeroAxis`] if `axis` has zero length.
pub fn rotation<T: FloatScalar>(axis: FixedVector<T, 3>, angle: T) -> Result<Matrix<T, 4, 4>> {
    let length = axis.dot(&axis).sqrt();
    if is_zero(&length) {
        return Err(LinalgError::ZeroAxis);
    }
    let [ux, uy, uz] = (axis / length).into_array();
    let (s, c) = angle.sin_cos();
    let t = T::one() - c;
    let (o, i) = (T::zero(), T::one());

    Ok(Matrix::from_rows([
        [t * ux * ux + c, t * ux * uy - s * uz, t * ux * uz + s * uy, o],
        [t * ux * uy + s * uz, t * uy * uy + c, t * uy * uz - s * ux, o],
        [t * ux * uz - s * uy, t * uy * uz + s * ux, t * uz * uz + c, o],
        [o, o, o, i],
    ]))
}

/// Perspective projection with vertical field of view `fovy` (radians).
///
/// Maps the view frustum to the clip cube, with `-near` to depth -1 and
/// `-far` to depth 1.
#[must_use]
pub fn perspective<T: FloatScalar>(fovy: T, aspect: T, near: T, far: T) -> Matrix<T, 4, 4> {
    let f = T::one() / (fovy / two()).tan();
    let o = T::zero();
    let depth = near - far;
    Matrix::from_rows([
        [f / aspect, o, o, o],
        [o, f, o, o],
        [o, o, (far + near) / depth, two::<T>() * far * near / depth],
        [o, o, -T::one(), o],
    ])
}

/// Orthographic projection of the given box onto the clip cube.
#[must_use]
pub fn orthographic<T: FloatScalar>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Matrix<T, 4, 4> {
    let o = T::zero();
    let (w, h, d) = (right - left, top - bottom, far - near);
    Matrix::from_rows([
        [two::<T>() / w, o, o, -(right + left) / w],
        [o, two::<T>() / h, o, -(top + bottom) / h],
        [o, o, -two::<T>() / d, -(far + near) / d],
        [o, o, o, T::one()],
    ])
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

    use tessera_scalar::is_equal;

    use super::*;

    fn point(x: f64, y: f64, z: f64) -> FixedVector<f64, 4> {
        FixedVector::new([x, y, z, 1.0])
    }

    #[test]
    fn test_scale() {
        let m = scale(FixedVector::new([2.0, 3.0]));
        assert_eq!(m * FixedVector::new([1.0, 1.0]), FixedVector::new([2.0, 3.0]));
        let h = scaling(FixedVector::new([2.0, 3.0, 4.0]));
        assert_eq!(h * point(1.0, 1.0, 1.0), point(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_translation() {
        let m = translation(FixedVector::new([1.0, -2.0, 3.0]));
        assert_eq!(m * point(1.0, 1.0, 1.0), point(2.0, -1.0, 4.0));
        // directions are not translated
        let d = FixedVector::new([1.0, 0.0, 0.0, 0.0]);
        assert_eq!(m * d, d);
        assert_eq!(m.inverse().unwrap(), translation(FixedVector::new([-1.0, 2.0, -3.0])));
    }

    #[test]
    fn test_rotation_2d() {
        let m = rotation_2d(FRAC_PI_2);
        assert_eq!(m * FixedVector::new([1.0, 0.0]), FixedVector::new([0.0, 1.0]));
        assert!(is_equal(&m.det(), &1.0));
    }

    #[test]
    fn test_axis_rotations() {
        assert_eq!(rotation_z(FRAC_PI_2) * point(1.0, 0.0, 0.0), point(0.0, 1.0, 0.0));
        assert_eq!(rotation_x(FRAC_PI_2) * point(0.0, 1.0, 0.0), point(0.0, 0.0, 1.0));
        assert_eq!(rotation_y(FRAC_PI_2) * point(0.0, 0.0, 1.0), point(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotation_about_axis() {
        let z = FixedVector::new([0.0, 0.0, 2.0]);
        assert_eq!(rotation(z, FRAC_PI_3).unwrap(), rotation_z(FRAC_PI_3));
        let x = FixedVector::new([5.0, 0.0, 0.0]);
        assert_eq!(rotation(x, FRAC_PI_3).unwrap(), rotation_x(FRAC_PI_3));

        let m = rotation(FixedVector::new([1.0, 1.0, 1.0]), 1.0).unwrap();
        assert!(is_equal(&m.det(), &1.0));
        assert_eq!(m.inverse().unwrap(), m.transpose());

        assert_eq!(
            rotation(FixedVector::new([0.0, 0.0, 0.0]), 1.0),
            Err(LinalgError::ZeroAxis)
        );
    }

    #[test]
    fn test_perspective_depth_range() {
        let m = perspective(FRAC_PI_2, 1.0, 1.0, 10.0);
        let near = m * point(0.0, 0.0, -1.0);
        let far = m * point(0.0, 0.0, -10.0);
        assert!(is_zero(&(near[2] / near[3] + 1.0)));
        assert!(is_zero(&(far[2] / far[3] - 1.0)));
    }

    #[test]
    fn test_orthographic_corners() {
        let m = orthographic(-2.0, 2.0, -1.0, 1.0, 0.5, 5.0);
        assert_eq!(m * point(-2.0, -1.0, -0.5), point(-1.0, -1.0, -1.0));
        assert_eq!(m * point(2.0, 1.0, -5.0), point(1.0, 1.0, 1.0));
    }
}
