//! The three stages a computed value moves through.
//!
//! An expression starts as a coefficient (`Scalar`), becomes a
//! `RationalFunction` once the variable `z` enters, and is expanded into a
//! truncated `Series` when an operation needs it. Binary operations promote
//! both operands to the later stage.

use genfun_core::{GfError, Result};
use genfun_rational_func::RationalFunction;
use genfun_rings::{Ring, Transcendental};
use genfun_series::{apply_transcendental, PowerSeries};
use std::fmt;

/// A value at one of the three stages.
#[derive(Clone)]
pub enum Value<T> {
    /// A plain coefficient.
    Scalar(T),
    /// An exact quotient of polynomials in `z`.
    Rational(RationalFunction<T>),
    /// A truncated power series in `z`.
    Series(PowerSeries<T>),
}

impl<T: Ring> Value<T> {
    fn stage(&self) -> u8 {
        match self {
            Self::Scalar(_) => 0,
            Self::Rational(_) => 1,
            Self::Series(_) => 2,
        }
    }

    fn sample(&self) -> T {
        match self {
            Self::Scalar(c) => c.zero_like(),
            Self::Rational(r) => r.numerator().sample().clone(),
            Self::Series(s) => s.sample().clone(),
        }
    }

    /// The series length, if this value is a series.
    #[must_use]
    pub fn series_len(&self) -> Option<usize> {
        match self {
            Self::Series(s) => Some(s.len()),
            _ => None,
        }
    }

    /// Converts to a rational function.
    ///
    /// # Errors
    ///
    /// [`GfError::TypeMismatch`] for a series: expansion is one-way.
    pub fn into_rational(self) -> Result<RationalFunction<T>> {
        match self {
            Self::Scalar(c) => Ok(RationalFunction::constant(c)),
            Self::Rational(r) => Ok(r),
            Self::Series(_) => Err(GfError::mismatch(
                "a power series cannot be turned back into a rational function",
            )),
        }
    }

    /// Converts to a series; scalars and rational functions are expanded to
    /// length `n`, series are returned as they are.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] if a rational function has a pole at 0.
    pub fn into_series(self, n: usize) -> Result<PowerSeries<T>> {
        match self {
            Self::Scalar(c) => Ok(PowerSeries::constant(c, n)),
            Self::Rational(r) => r.to_series(n),
            Self::Series(s) => Ok(s),
        }
    }

    /// Brings both operands to the same stage.
    fn promote(self, other: Self, default_length: usize) -> Result<(Self, Self)> {
        self.sample().check_compatible(&other.sample())?;

        let stage = self.stage().max(other.stage());
        let length = self
            .series_len()
            .or_else(|| other.series_len())
            .unwrap_or(default_length);
        let lift = |v: Self| -> Result<Self> {
            Ok(match stage {
                0 => v,
                1 => Self::Rational(v.into_rational()?),
                _ => Self::Series(v.into_series(length)?),
            })
        };
        Ok((lift(self)?, lift(other)?))
    }

    /// `self + other`.
    ///
    /// # Errors
    ///
    /// [`GfError::TypeMismatch`] for incompatible operands.
    pub fn try_add(self, other: Self, default_length: usize) -> Result<Self> {
        Ok(match self.promote(other, default_length)? {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(a + b),
            (Self::Rational(a), Self::Rational(b)) => Self::Rational(&a + &b),
            (Self::Series(a), Self::Series(b)) => Self::Series(&a + &b),
            _ => return Err(stage_mismatch()),
        })
    }

    /// `self - other`.
    ///
    /// # Errors
    ///
    /// [`GfError::TypeMismatch`] for incompatible operands.
    pub fn try_sub(self, other: Self, default_length: usize) -> Result<Self> {
        Ok(match self.promote(other, default_length)? {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(a - b),
            (Self::Rational(a), Self::Rational(b)) => Self::Rational(&a - &b),
            (Self::Series(a), Self::Series(b)) => Self::Series(&a - &b),
            _ => return Err(stage_mismatch()),
        })
    }

    /// `self * other`, using `threshold` for series multiplication.
    ///
    /// # Errors
    ///
    /// [`GfError::TypeMismatch`] for incompatible operands.
    pub fn try_mul(self, other: Self, default_length: usize, threshold: usize) -> Result<Self> {
        Ok(match self.promote(other, default_length)? {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(a * b),
            (Self::Rational(a), Self::Rational(b)) => Self::Rational(&a * &b),
            (Self::Series(a), Self::Series(b)) => Self::Series(a.mul_with_threshold(&b, threshold)),
            _ => return Err(stage_mismatch()),
        })
    }

    /// `self / other`.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] when the divisor cannot be inverted,
    /// [`GfError::TypeMismatch`] for incompatible operands.
    pub fn try_div(self, other: Self, default_length: usize, threshold: usize) -> Result<Self> {
        Ok(match self.promote(other, default_length)? {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(a.try_div(&b)?),
            (Self::Rational(a), Self::Rational(b)) => Self::Rational(a.try_div(&b)?),
            (Self::Series(a), Self::Series(b)) => {
                Self::Series(a.try_div_with_threshold(&b, threshold)?)
            }
            _ => return Err(stage_mismatch()),
        })
    }

    /// `-self`.
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Scalar(a) => Self::Scalar(-a),
            Self::Rational(a) => Self::Rational(-a),
            Self::Series(a) => Self::Series(-a),
        }
    }

    /// `self^n`; negative exponents go through inversion.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] for a negative power of a non-unit.
    pub fn try_pow(self, n: i64) -> Result<Self> {
        Ok(match self {
            Self::Scalar(a) => Self::Scalar(a.try_pow(n)?),
            Self::Rational(a) => Self::Rational(a.try_pow(n)?),
            Self::Series(a) => Self::Series(a.try_pow(n)?),
        })
    }

    /// Applies a built-in transcendental function.
    ///
    /// Scalars are evaluated numerically when the ring can; everything else
    /// is expanded to a series (rational functions and scalars at length
    /// `default_length`).
    ///
    /// # Errors
    ///
    /// See [`apply_transcendental`].
    pub fn apply(self, f: Transcendental, default_length: usize) -> Result<Self> {
        if let Self::Scalar(c) = &self {
            if let Some(v) = c.eval_transcendental(f) {
                return Ok(Self::Scalar(v));
            }
        }
        let series = self.into_series(default_length)?;
        Ok(Self::Series(apply_transcendental(f, &series)?))
    }
}

fn stage_mismatch() -> GfError {
    GfError::mismatch("operands could not be brought to a common stage")
}

impl<T: Ring> PartialEq for Value<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            (Self::Rational(a), Self::Rational(b)) => a == b,
            (Self::Series(a), Self::Series(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Ring> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(c) => f.debug_tuple("Scalar").field(c).finish(),
            Self::Rational(r) => f.debug_tuple("Rational").field(r).finish(),
            Self::Series(s) => f.debug_tuple("Series").field(s).finish(),
        }
    }
}

impl<T: Ring> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(c) => write!(f, "{c}"),
            Self::Rational(r) => write!(f, "{r}"),
            Self::Series(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genfun_integers::{ModInt, Rational};

    fn q(n: i64) -> Rational {
        Rational::from(n)
    }

    fn z() -> Value<Rational> {
        Value::Rational(RationalFunction::variable(&q(0)))
    }

    #[test]
    fn test_scalar_arithmetic_stays_scalar() {
        let v = Value::Scalar(q(3)).try_add(Value::Scalar(q(4)), 8).unwrap();
        assert_eq!(v, Value::Scalar(q(7)));
        let v = Value::Scalar(q(1)).try_div(Value::Scalar(q(4)), 8, 100).unwrap();
        assert_eq!(v, Value::Scalar(Rational::from_i64(1, 4)));
    }

    #[test]
    fn test_promotion_to_rational() {
        // 1 / (1 - z)
        let den = Value::Scalar(q(1)).try_sub(z(), 8).unwrap();
        let f = Value::Scalar(q(1)).try_div(den, 8, 100).unwrap();
        assert!(matches!(f, Value::Rational(_)));
        let s = f.into_series(4).unwrap();
        assert_eq!(s.coeffs(), &[q(1), q(1), q(1), q(1)]);
    }

    #[test]
    fn test_promotion_to_series_keeps_series_length() {
        let s = Value::Series(PowerSeries::one(&q(0), 5));
        let v = s.try_add(z(), 20).unwrap();
        assert_eq!(v.series_len(), Some(5));
    }

    #[test]
    fn test_series_cannot_become_rational() {
        let s = Value::Series(PowerSeries::one(&q(0), 3));
        assert!(matches!(s.into_rational(), Err(GfError::TypeMismatch(_))));
    }

    #[test]
    fn test_modulus_mismatch() {
        let a = Value::Scalar(ModInt::new(1, 7).unwrap());
        let b = Value::Scalar(ModInt::new(1, 11).unwrap());
        assert!(matches!(a.try_add(b, 4), Err(GfError::TypeMismatch(_))));
    }

    #[test]
    fn test_pow_and_negate() {
        let v = Value::Scalar(q(2)).try_pow(-3).unwrap();
        assert_eq!(v, Value::Scalar(Rational::from_i64(1, 8)));
        let v = z().negate().try_pow(2).unwrap();
        assert_eq!(v.into_series(3).unwrap().coeffs(), &[q(0), q(0), q(1)]);
    }

    #[test]
    fn test_apply_expands_rational() {
        // exp(z) as a series of the default length
        let v = z().apply(Transcendental::Exp, 4).unwrap();
        assert_eq!(v.series_len(), Some(4));
        assert!(Value::Scalar(q(2)).apply(Transcendental::Exp, 4).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Scalar(q(3)).to_string(), "3");
        assert_eq!(z().to_string(), "z");
    }
}
