//! Canonical decomposition into translation, scale, skew, and rotation.

use super::AffineTransform;
use num_traits::Float;

/// Human-meaningful parameters recovered from six coefficients.
///
/// All angles are in degrees. `scale_x`, `scale_y`, and `rotation` are
/// exact for matrices built from rotations, translations, and scales;
/// `scale_y` keeps the sign of the determinant, so reflections come back
/// negative. `skew_x` is the combined shear angle. `skew_y` is
/// best-effort: the linear part has four coefficients, and recovering five
/// shape parameters from them collapses general shear into a single x-axis
/// component plus rotation, leaving `skew_y` at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposition<F> {
    /// Translation x component.
    pub x: F,
    /// Translation y component.
    pub y: F,
    /// Length of the first basis column.
    pub scale_x: F,
    /// Residual length of the second basis column, signed by orientation.
    pub scale_y: F,
    /// Combined shear angle in degrees.
    pub skew_x: F,
    /// Always zero; see the type-level note.
    pub skew_y: F,
    /// Rotation angle in degrees.
    pub rotation: F,
}

impl<F: Float> AffineTransform<F> {
    /// Decomposes this transform into translation, scale, skew, and
    /// rotation.
    ///
    /// The separation is QR-like: the rotation is read off the first basis
    /// column, the shear is whatever remains of the second column once that
    /// rotation is removed.
    ///
    /// # Example
    ///
    /// ```
    /// use affinum::AffineTransform;
    ///
    /// let m: AffineTransform<f64> = AffineTransform::identity()
    ///     .rotate(-10.0)
    ///     .scale(2.0);
    /// let parts = m.extract();
    /// assert!((parts.rotation - -10.0).abs() < 1e-9);
    /// assert!((parts.scale_x - 2.0).abs() < 1e-9);
    /// assert!((parts.scale_y - 2.0).abs() < 1e-9);
    /// ```
    pub fn extract(&self) -> Decomposition<F> {
        let det = self.determinant();
        let scale_x = self.a.hypot(self.b);

        Decomposition {
            x: self.e,
            y: self.f,
            scale_x,
            scale_y: det / scale_x,
            skew_x: (self.a * self.c + self.b * self.d).atan2(det).to_degrees(),
            skew_y: F::zero(),
            rotation: self.b.atan2(self.a).to_degrees(),
        }
    }
}
