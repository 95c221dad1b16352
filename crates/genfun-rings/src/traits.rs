//! The coefficient ring contract.
//!
//! Power series, polynomials and rational functions are generic over
//! [`Ring`], and each of them implements [`Ring`] in turn, so coefficients
//! can nest (a series whose coefficients are series).

use genfun_core::{GfError, Result};
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// The built-in transcendental functions with closed-form expansions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transcendental {
    /// exp(x)
    Exp,
    /// Natural logarithm.
    Log,
    /// Square root.
    Sqrt,
    /// sin(x)
    Sin,
    /// cos(x)
    Cos,
}

impl Display for Transcendental {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
        };
        write!(f, "{name}")
    }
}

/// A commutative ring with unit, usable as a series coefficient.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero_like()`
/// - Multiplication is associative and commutative with identity `one_like()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// The operator impls assume both operands come from the same ring
/// instance (same modulus, same nesting shape). Callers combining values
/// of unknown provenance call [`Ring::check_compatible`] first.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity of the ring `self` belongs to.
    #[must_use]
    fn zero_like(&self) -> Self;

    /// The multiplicative identity of the ring `self` belongs to.
    #[must_use]
    fn one_like(&self) -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// The image of a machine integer in the ring `self` belongs to.
    #[must_use]
    fn from_i64_like(&self, n: i64) -> Self;

    /// Parses a literal into the ring `self` belongs to.
    ///
    /// # Errors
    ///
    /// [`GfError::Parse`] for malformed text, [`GfError::TypeMismatch`] for
    /// text that is well formed but cannot denote an element of this ring.
    fn parse_like(&self, text: &str) -> Result<Self>;

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] if `self` is not a unit.
    fn try_inv(&self) -> Result<Self>;

    /// Division, defined whenever the divisor is invertible.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] if `other` is not a unit.
    fn try_div(&self, other: &Self) -> Result<Self> {
        Ok(self.clone() * other.try_inv()?)
    }

    /// Division by a machine integer.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] if `n` is not a unit in this ring.
    fn div_i64(&self, n: i64) -> Result<Self> {
        self.try_div(&self.from_i64_like(n))
    }

    /// Checks that `self` and `other` belong to the same ring instance.
    ///
    /// # Errors
    ///
    /// [`GfError::TypeMismatch`] when they do not.
    fn check_compatible(&self, _other: &Self) -> Result<()> {
        Ok(())
    }

    /// True when polynomial gcds over this ring are exact (a field).
    fn exact_division(&self) -> bool {
        false
    }

    /// Numeric value of a transcendental function at `self`.
    ///
    /// Only approximate rings can evaluate transcendentals at arbitrary
    /// points; exact rings return `None`.
    fn eval_transcendental(&self, _f: Transcendental) -> Option<Self> {
        None
    }

    /// Computes n * self.
    #[must_use]
    fn mul_by_scalar(&self, n: i64) -> Self {
        match n {
            0 => self.zero_like(),
            1 => self.clone(),
            -1 => -self.clone(),
            _ => self.clone() * self.from_i64_like(n),
        }
    }

    /// Computes self^n for non-negative n by binary exponentiation.
    #[must_use]
    fn pow(&self, n: u32) -> Self {
        let mut result = self.one_like();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }

        result
    }

    /// Computes self^n; negative exponents go through [`Ring::try_inv`].
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] for a negative exponent of a non-unit,
    /// [`GfError::Range`] if `|n|` exceeds `u32::MAX`.
    fn try_pow(&self, n: i64) -> Result<Self> {
        let magnitude = u32::try_from(n.unsigned_abs())
            .map_err(|_| GfError::range(format!("exponent {n} is too large")))?;
        if n < 0 {
            Ok(self.try_inv()?.pow(magnitude))
        } else {
            Ok(self.pow(magnitude))
        }
    }
}
