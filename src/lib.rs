//! affinum - 2D affine transform algebra
//!
//! Six coefficients are enough for every flat-plane mapping that matters:
//! translation, scale, rotation, shear, and any composition of them. This
//! library provides that value type, along with the numerically delicate
//! operations around it: inversion, canonical decomposition, and
//! coefficient-wise interpolation.

pub mod bridge;
pub mod error;
pub mod primitives;
pub mod transform;

pub use bridge::NativeTransform;
pub use error::AffineError;
pub use primitives::{Point2, Vec2};
pub use transform::{AffineTransform, Decomposition, TransformSource};
