//! Coefficient-wise interpolation between two transforms.

use super::{AffineTransform, TransformSource};
use crate::error::AffineError;
use num_traits::Float;

/// Interpolation target stored inside a transform by
/// [`AffineTransform::morph`].
///
/// Holds a snapshot of the destination's coefficients, never a shared
/// handle, so later changes to the argument cannot leak into stored state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct MorphState<F> {
    a: F,
    b: F,
    c: F,
    d: F,
    e: F,
    f: F,
}

impl<F: Float> MorphState<F> {
    fn snapshot(m: &AffineTransform<F>) -> Self {
        Self {
            a: m.a,
            b: m.b,
            c: m.c,
            d: m.d,
            e: m.e,
            f: m.f,
        }
    }
}

impl<F: Float> AffineTransform<F> {
    /// Stores a destination for later [`at`](Self::at) calls.
    ///
    /// The destination is copied at call time; the receiver's own
    /// coefficients are untouched. A later `morph` overwrites the stored
    /// destination. Accepts the same argument forms as
    /// [`multiply`](Self::multiply); only string sources can fail.
    ///
    /// # Example
    ///
    /// ```
    /// use affinum::AffineTransform;
    ///
    /// let mut start: AffineTransform<f64> = AffineTransform::new(2.0, 0.0, 0.0, 5.0, 0.0, 0.0);
    /// let halfway = start
    ///     .morph((1.0, 0.0, 0.0, 1.0, 4.0, 3.0))
    ///     .unwrap()
    ///     .at(0.5)
    ///     .unwrap();
    /// assert_eq!(halfway.coefficients(), [1.5, 0.0, 0.0, 3.0, 2.0, 1.5]);
    /// ```
    pub fn morph<S: TransformSource<F>>(&mut self, destination: S) -> Result<&mut Self, AffineError> {
        let destination = destination.resolve()?;
        self.destination = Some(MorphState::snapshot(&destination));
        Ok(self)
    }

    /// Returns a new transform interpolated towards the stored destination.
    ///
    /// Each coefficient is lerped independently as `start + (end - start) * t`;
    /// there is no rotation-aware blending. `t` is not clamped, so values
    /// outside `[0, 1]` extrapolate. Errors with
    /// [`AffineError::NoDestination`] when no `morph` call preceded this one.
    pub fn at(&self, t: F) -> Result<Self, AffineError> {
        let dest = self.destination.ok_or(AffineError::NoDestination)?;
        Ok(Self::new(
            self.a + (dest.a - self.a) * t,
            self.b + (dest.b - self.b) * t,
            self.c + (dest.c - self.c) * t,
            self.d + (dest.d - self.d) * t,
            self.e + (dest.e - self.e) * t,
            self.f + (dest.f - self.f) * t,
        ))
    }
}
