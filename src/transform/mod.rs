//! 2D affine transformation type and its operations.
//!
//! The core value is [`AffineTransform`], six coefficients `(a, b, c, d, e, f)`
//! mapping a point as:
//!
//! ```text
//! x' = a*x + c*y + e
//! y' = b*x + d*y + f
//! ```
//!
//! The implicit homogeneous row `[0 0 1]` is never stored. Every operation
//! that produces a transform returns a new value; the receiver is never
//! mutated. The one piece of private state is the interpolation destination
//! set by [`AffineTransform::morph`], which does not participate in the
//! coefficient algebra.

mod decompose;
mod morph;
mod parse;
mod source;

pub use decompose::Decomposition;
pub use source::TransformSource;

use crate::error::AffineError;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use std::ops::Mul;

use self::morph::MorphState;

/// A 2D affine transformation matrix.
///
/// Stored as the six free coefficients of a 2x3 matrix in column order:
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// ```
///
/// Singular matrices (zero determinant) are legal values; only
/// [`inverse`](Self::inverse) rejects them.
///
/// # Example
///
/// ```
/// use affinum::{AffineTransform, Point2};
///
/// // Rotate 90 degrees, then shift within the rotated frame.
/// let m: AffineTransform<f64> = AffineTransform::identity()
///     .rotate(90.0)
///     .translate(10.0, 0.0);
///
/// // The translation runs first in local space: (10, 0) rotated 90
/// // degrees lands at (0, 10).
/// let p = m.apply_point(Point2::origin());
/// assert!(p.x.abs() < 1e-9);
/// assert!((p.y - 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform<F> {
    /// X-scale / rotation component (first column, x).
    pub a: F,
    /// Y-shear / rotation component (first column, y).
    pub b: F,
    /// X-shear / rotation component (second column, x).
    pub c: F,
    /// Y-scale / rotation component (second column, y).
    pub d: F,
    /// Translation x component.
    pub e: F,
    /// Translation y component.
    pub f: F,
    /// Interpolation target set by `morph`, read by `at`.
    destination: Option<MorphState<F>>,
}

impl<F: Float> AffineTransform<F> {
    /// Creates a transform from six coefficients, stored verbatim.
    #[inline]
    pub fn new(a: F, b: F, c: F, d: F, e: F, f: F) -> Self {
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            destination: None,
        }
    }

    /// Creates the identity transform `(1, 0, 0, 1, 0, 0)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(
            F::one(),
            F::zero(),
            F::zero(),
            F::one(),
            F::zero(),
            F::zero(),
        )
    }

    /// Returns the six coefficients in `(a, b, c, d, e, f)` order.
    #[inline]
    pub fn coefficients(&self) -> [F; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Creates a pure translation transform.
    #[inline]
    pub fn translation(dx: F, dy: F) -> Self {
        Self::new(F::one(), F::zero(), F::zero(), F::one(), dx, dy)
    }

    /// Creates a pure scaling transform about the origin.
    #[inline]
    pub fn scaling(sx: F, sy: F) -> Self {
        Self::new(sx, F::zero(), F::zero(), sy, F::zero(), F::zero())
    }

    /// Creates a pure rotation transform about the origin.
    ///
    /// Angle is in degrees, positive is counter-clockwise.
    #[inline]
    pub fn rotation(degrees: F) -> Self {
        let theta = degrees.to_radians();
        let cos_t = theta.cos();
        let sin_t = theta.sin();
        Self::new(cos_t, sin_t, -sin_t, cos_t, F::zero(), F::zero())
    }

    /// Creates a pure shear transform about the origin.
    ///
    /// `ax_degrees` shifts x by `tan(ax) * y`; `ay_degrees` shifts y by
    /// `tan(ay) * x`.
    #[inline]
    pub fn shearing(ax_degrees: F, ay_degrees: F) -> Self {
        Self::new(
            F::one(),
            ay_degrees.to_radians().tan(),
            ax_degrees.to_radians().tan(),
            F::one(),
            F::zero(),
            F::zero(),
        )
    }

    /// Composes this transform with another (`self` ∘ `other`).
    ///
    /// The resulting transform applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.a * other.a + self.c * other.b,
            self.b * other.a + self.d * other.b,
            self.a * other.c + self.c * other.d,
            self.b * other.c + self.d * other.d,
            self.a * other.e + self.c * other.f + self.e,
            self.b * other.e + self.d * other.f + self.f,
        )
    }

    /// Multiplies with a matrix given in any constructible form.
    ///
    /// Accepts an instance, six coefficients as an array or tuple, or a
    /// matrix string. String sources that fail to parse surface
    /// [`AffineError::Parse`]; every other form cannot fail.
    ///
    /// # Example
    ///
    /// ```
    /// use affinum::AffineTransform;
    ///
    /// let m: AffineTransform<f64> = AffineTransform::new(2.0, 0.0, 0.0, 5.0, 0.0, 0.0);
    /// let product = m.multiply("1,0,0,1,4,3").unwrap();
    /// assert_eq!(product.coefficients(), [2.0, 0.0, 0.0, 5.0, 8.0, 15.0]);
    /// ```
    pub fn multiply<S: TransformSource<F>>(&self, other: S) -> Result<Self, AffineError> {
        Ok(self.compose(&other.resolve()?))
    }

    /// Blends with another matrix elementwise.
    ///
    /// Not a matrix sum: `a` and `d` encode scale where 1 means "no
    /// change", so their identity contribution is subtracted once to keep
    /// the neutral element from being counted twice. The remaining
    /// coefficients are neutral at 0 and sum directly:
    ///
    /// ```text
    /// a' = a + A - 1    d' = d + D - 1
    /// b' = b + B        c' = c + C
    /// e' = e + E        f' = f + F
    /// ```
    ///
    /// Accepts the same argument forms as [`multiply`](Self::multiply).
    pub fn add<S: TransformSource<F>>(&self, other: S) -> Result<Self, AffineError> {
        let other = other.resolve()?;
        Ok(Self::new(
            self.a + other.a - F::one(),
            self.b + other.b,
            self.c + other.c,
            self.d + other.d - F::one(),
            self.e + other.e,
            self.f + other.f,
        ))
    }

    /// Returns the determinant of the linear part, `a*d - b*c`.
    ///
    /// - Positive: preserves orientation
    /// - Negative: flips orientation (reflection)
    /// - Zero: singular (collapses to a line or point)
    #[inline]
    pub fn determinant(&self) -> F {
        self.a * self.d - self.b * self.c
    }

    /// Returns true if this transform has a nonzero determinant.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.determinant() != F::zero()
    }

    /// Returns true if this is approximately the identity transform.
    pub fn is_identity(&self, epsilon: F) -> bool {
        (self.a - F::one()).abs() < epsilon
            && self.b.abs() < epsilon
            && self.c.abs() < epsilon
            && (self.d - F::one()).abs() < epsilon
            && self.e.abs() < epsilon
            && self.f.abs() < epsilon
    }

    /// Returns the inverse transform.
    ///
    /// Errors with [`AffineError::Singular`] when the determinant is zero.
    pub fn inverse(&self) -> Result<Self, AffineError> {
        let det = self.determinant();
        if det == F::zero() {
            return Err(AffineError::Singular);
        }

        Ok(Self::new(
            self.d / det,
            -self.b / det,
            -self.c / det,
            self.a / det,
            (self.c * self.f - self.d * self.e) / det,
            (self.b * self.e - self.a * self.f) / det,
        ))
    }

    /// Wraps a primitive so it acts about `center` instead of the origin.
    ///
    /// A point is shifted into center-relative space, mapped by the
    /// primitive, then shifted back.
    fn about(center: Point2<F>, primitive: &Self) -> Self {
        Self::translation(center.x, center.y)
            .compose(primitive)
            .compose(&Self::translation(-center.x, -center.y))
    }

    /// Translates by `(dx, dy)` in the pre-transform coordinate space.
    ///
    /// Like all directional builders, the primitive is prepended: it is
    /// applied first, `self` second, so the displacement is measured in
    /// the object's local frame rather than the final rendered one.
    #[inline]
    pub fn translate(&self, dx: F, dy: F) -> Self {
        self.compose(&Self::translation(dx, dy))
    }

    /// Scales uniformly about the origin.
    #[inline]
    pub fn scale(&self, factor: F) -> Self {
        self.compose(&Self::scaling(factor, factor))
    }

    /// Scales non-uniformly about the origin.
    #[inline]
    pub fn scale_xy(&self, sx: F, sy: F) -> Self {
        self.compose(&Self::scaling(sx, sy))
    }

    /// Scales uniformly about an arbitrary center point.
    #[inline]
    pub fn scale_around(&self, factor: F, center: Point2<F>) -> Self {
        self.scale_xy_around(factor, factor, center)
    }

    /// Scales non-uniformly about an arbitrary center point.
    pub fn scale_xy_around(&self, sx: F, sy: F, center: Point2<F>) -> Self {
        self.compose(&Self::about(center, &Self::scaling(sx, sy)))
    }

    /// Rotates counter-clockwise about the origin.
    ///
    /// Angle is in degrees.
    #[inline]
    pub fn rotate(&self, degrees: F) -> Self {
        self.compose(&Self::rotation(degrees))
    }

    /// Rotates counter-clockwise about an arbitrary center point.
    pub fn rotate_around(&self, degrees: F, center: Point2<F>) -> Self {
        self.compose(&Self::about(center, &Self::rotation(degrees)))
    }

    /// Skews along both axes about the origin.
    ///
    /// Angles are in degrees; `ax` shears x by `tan(ax) * y`, `ay` shears
    /// y by `tan(ay) * x`.
    #[inline]
    pub fn skew(&self, ax_degrees: F, ay_degrees: F) -> Self {
        self.compose(&Self::shearing(ax_degrees, ay_degrees))
    }

    /// Skews along the x axis only.
    #[inline]
    pub fn skew_x(&self, degrees: F) -> Self {
        self.skew(degrees, F::zero())
    }

    /// Skews along the y axis only.
    #[inline]
    pub fn skew_y(&self, degrees: F) -> Self {
        self.skew(F::zero(), degrees)
    }

    /// Skews about an arbitrary center point.
    pub fn skew_around(&self, ax_degrees: F, ay_degrees: F, center: Point2<F>) -> Self {
        self.compose(&Self::about(center, &Self::shearing(ax_degrees, ay_degrees)))
    }

    /// Mirrors across the vertical axis (negates x).
    #[inline]
    pub fn flip_x(&self) -> Self {
        self.compose(&Self::scaling(-F::one(), F::one()))
    }

    /// Mirrors across the horizontal axis (negates y).
    #[inline]
    pub fn flip_y(&self) -> Self {
        self.compose(&Self::scaling(F::one(), -F::one()))
    }

    /// Applies this transform to a point.
    #[inline]
    pub fn apply_point(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Applies this transform to a vector (translation is ignored).
    #[inline]
    pub fn apply_vec(&self, v: Vec2<F>) -> Vec2<F> {
        Vec2::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }
}

impl<F: Float> Default for AffineTransform<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> From<[F; 6]> for AffineTransform<F> {
    fn from(m: [F; 6]) -> Self {
        Self::new(m[0], m[1], m[2], m[3], m[4], m[5])
    }
}

impl<F: Float> From<(F, F, F, F, F, F)> for AffineTransform<F> {
    fn from(m: (F, F, F, F, F, F)) -> Self {
        Self::new(m.0, m.1, m.2, m.3, m.4, m.5)
    }
}

impl<F: Float> Mul for AffineTransform<F> {
    type Output = Self;

    /// Multiplies two transforms (`self * rhs`).
    ///
    /// The result applies `rhs` first, then `self`.
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl<F: Float> Mul<Point2<F>> for AffineTransform<F> {
    type Output = Point2<F>;

    fn mul(self, rhs: Point2<F>) -> Point2<F> {
        self.apply_point(rhs)
    }
}

impl<F: Float> Mul<Vec2<F>> for AffineTransform<F> {
    type Output = Vec2<F>;

    fn mul(self, rhs: Vec2<F>) -> Vec2<F> {
        self.apply_vec(rhs)
    }
}
