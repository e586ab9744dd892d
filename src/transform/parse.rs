//! Matrix string parsing and the canonical textual form.

use super::AffineTransform;
use crate::error::AffineError;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

impl<F: Float + FromStr> FromStr for AffineTransform<F> {
    type Err = AffineError;

    /// Parses six comma/space-separated numbers into `(a, b, c, d, e, f)`.
    ///
    /// An optional `matrix( ... )` wrapper is stripped first, so the
    /// canonical form produced by `Display` parses back. Tokens beyond the
    /// sixth are ignored. Errors with [`AffineError::Parse`] when fewer
    /// than six numeric tokens are present or a token is not a finite
    /// number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim();
        let body = body.strip_prefix("matrix(").unwrap_or(body);
        let body = body.strip_suffix(')').unwrap_or(body);

        let mut values = [F::zero(); 6];
        let mut count = 0;
        for token in body
            .split(|ch: char| ch == ',' || ch.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            if count == 6 {
                break;
            }
            let value: F = token
                .parse()
                .map_err(|_| AffineError::Parse(format!("invalid number '{}'", token)))?;
            if !value.is_finite() {
                return Err(AffineError::Parse(format!("non-finite number '{}'", token)));
            }
            values[count] = value;
            count += 1;
        }

        if count < 6 {
            return Err(AffineError::Parse(format!(
                "expected 6 numeric values, found {}",
                count
            )));
        }

        Ok(Self::from(values))
    }
}

impl<F: Float + fmt::Display> fmt::Display for AffineTransform<F> {
    /// Renders the canonical form `matrix(a,b,c,d,e,f)`.
    ///
    /// Coefficients use the default shortest round-trip formatting, so
    /// re-parsing the string reproduces them bit-identically.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matrix({},{},{},{},{},{})",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }
}
