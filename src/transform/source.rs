//! Coercion from the forms collaborators hand matrices around in.

use super::AffineTransform;
use crate::error::AffineError;
use num_traits::Float;
use std::str::FromStr;

/// A value that can be resolved into an [`AffineTransform`].
///
/// This is the crate's single interop surface: operations that accept "a
/// matrix in any form" take any `TransformSource`, so callers can hand over
/// an existing instance, six raw coefficients, or a stored matrix string
/// interchangeably. Only string sources can fail.
pub trait TransformSource<F: Float> {
    /// Resolves this value into a transform.
    fn resolve(self) -> Result<AffineTransform<F>, AffineError>;
}

impl<F: Float> TransformSource<F> for AffineTransform<F> {
    fn resolve(self) -> Result<AffineTransform<F>, AffineError> {
        Ok(self)
    }
}

impl<F: Float> TransformSource<F> for &AffineTransform<F> {
    fn resolve(self) -> Result<AffineTransform<F>, AffineError> {
        Ok(*self)
    }
}

impl<F: Float> TransformSource<F> for [F; 6] {
    fn resolve(self) -> Result<AffineTransform<F>, AffineError> {
        Ok(AffineTransform::from(self))
    }
}

impl<F: Float> TransformSource<F> for (F, F, F, F, F, F) {
    fn resolve(self) -> Result<AffineTransform<F>, AffineError> {
        Ok(AffineTransform::from(self))
    }
}

impl<F: Float + FromStr> TransformSource<F> for &str {
    fn resolve(self) -> Result<AffineTransform<F>, AffineError> {
        self.parse()
    }
}

impl<F: Float + FromStr> TransformSource<F> for String {
    fn resolve(self) -> Result<AffineTransform<F>, AffineError> {
        self.as_str().parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_instance_and_reference() {
        let m: AffineTransform<f64> = AffineTransform::new(2.0, 0.0, 0.0, 5.0, 4.0, 3.0);
        assert_eq!(m.resolve().unwrap().coefficients(), m.coefficients());
        assert_eq!((&m).resolve().unwrap().coefficients(), m.coefficients());
    }

    #[test]
    fn test_resolve_raw_coefficients() {
        let expected = [2.0, 0.0, 0.0, 5.0, 4.0, 3.0];

        let from_array: AffineTransform<f64> = expected.resolve().unwrap();
        assert_eq!(from_array.coefficients(), expected);

        let from_tuple: AffineTransform<f64> =
            (2.0, 0.0, 0.0, 5.0, 4.0, 3.0).resolve().unwrap();
        assert_eq!(from_tuple.coefficients(), expected);
    }

    #[test]
    fn test_resolve_strings() {
        let from_str: AffineTransform<f64> = "2,0,0,5,4,3".resolve().unwrap();
        assert_eq!(from_str.coefficients(), [2.0, 0.0, 0.0, 5.0, 4.0, 3.0]);

        let from_string: AffineTransform<f64> =
            String::from("matrix(2,0,0,5,4,3)").resolve().unwrap();
        assert_eq!(from_string.coefficients(), [2.0, 0.0, 0.0, 5.0, 4.0, 3.0]);
    }

    #[test]
    fn test_resolve_bad_string() {
        let result: Result<AffineTransform<f64>, _> = "2,0".resolve();
        assert!(matches!(result, Err(AffineError::Parse(_))));
    }
}
