//! Double-precision floating point coefficients.
//!
//! The only approximate coefficient family, and the only one able to
//! evaluate transcendental functions at an arbitrary point.

use crate::traits::{Ring, Transcendental};
use genfun_core::{GfError, Result};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Default tolerance for [`Double::approx_eq`].
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// An IEEE double used as a ring element.
///
/// Equality is exact; use [`Double::approx_eq`] for tolerant comparison.
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Double(pub f64);

impl Double {
    /// Wraps a float.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the wrapped float.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Compares with a mixed absolute / relative tolerance.
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        let diff = (self.0 - other.0).abs();
        diff <= tolerance || diff <= tolerance * self.0.abs().max(other.0.abs())
    }
}

impl fmt::Debug for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Double({})", self.0)
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Double {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Double {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Double {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Double {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Ring for Double {
    fn zero_like(&self) -> Self {
        Self(0.0)
    }

    fn one_like(&self) -> Self {
        Self(1.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    fn is_one(&self) -> bool {
        self.0 == 1.0
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_i64_like(&self, n: i64) -> Self {
        Self(n as f64)
    }

    fn parse_like(&self, text: &str) -> Result<Self> {
        text.trim()
            .parse::<f64>()
            .map(Self)
            .map_err(|e| GfError::parse(format!("invalid floating point literal {text:?}: {e}")))
    }

    fn try_inv(&self) -> Result<Self> {
        if self.0 == 0.0 {
            return Err(GfError::not_invertible("division by floating point zero"));
        }
        Ok(Self(1.0 / self.0))
    }

    fn eval_transcendental(&self, f: Transcendental) -> Option<Self> {
        let x = self.0;
        let y = match f {
            Transcendental::Exp => x.exp(),
            Transcendental::Log if x > 0.0 => x.ln(),
            Transcendental::Sqrt if x >= 0.0 => x.sqrt(),
            Transcendental::Sin => x.sin(),
            Transcendental::Cos => x.cos(),
            Transcendental::Log | Transcendental::Sqrt => return None,
        };
        Some(Self(y))
    }
}
