//! Arbitrary precision rational numbers.
//!
//! This module provides exact rational arithmetic over [`Integer`].

use genfun_core::{GfError, Result};
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::Integer;

/// An arbitrary precision rational number.
///
/// # Invariants
///
/// - `gcd(numerator, denominator) == 1`
/// - `denominator > 0`
/// - Zero is represented as `0 / 1`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a new rational from numerator and denominator, reduced to
    /// lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::NotInvertible`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self> {
        if denominator.is_zero() {
            return Err(GfError::not_invertible("rational with zero denominator"));
        }
        Ok(Self::reduced(numerator, denominator))
    }

    /// Reduces a pair whose denominator is known to be non-zero.
    fn reduced(numerator: Integer, denominator: Integer) -> Self {
        if numerator.is_zero() {
            return Self::zero();
        }

        let g = numerator.gcd(&denominator);
        let (mut num, mut den) = if g.is_one() {
            (numerator, denominator)
        } else {
            (&numerator / &g, &denominator / &g)
        };

        if den.is_negative() {
            num = -num;
            den = -den;
        }

        Self {
            numerator: num,
            denominator: den,
        }
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Integer::one(),
        }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        Self::reduced(Integer::new(numerator), Integer::new(denominator))
    }

    /// Parses `a`, `a/b` or a decimal `a.b` into an exact rational.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::Parse`] on malformed text and
    /// [`GfError::NotInvertible`] for a zero denominator.
    pub fn parse(text: &str) -> Result<Self> {
        let t = text.trim();

        if let Some((num, den)) = t.split_once('/') {
            return Self::new(Integer::parse(num)?, Integer::parse(den)?);
        }

        if let Some((int_part, frac_part)) = t.split_once('.') {
            let (negative, int_digits) = match int_part.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, int_part.strip_prefix('+').unwrap_or(int_part)),
            };
            let well_formed = !(int_digits.is_empty() && frac_part.is_empty())
                && int_digits.bytes().all(|b| b.is_ascii_digit())
                && frac_part.bytes().all(|b| b.is_ascii_digit());
            if !well_formed {
                return Err(GfError::parse(format!("invalid decimal literal {text:?}")));
            }

            let digits = format!("{int_digits}{frac_part}");
            let mut num = Integer::parse(if digits.is_empty() { "0" } else { &digits })?;
            if negative {
                num = -num;
            }
            let exponent = u32::try_from(frac_part.len())
                .map_err(|_| GfError::range(format!("decimal literal {text:?} is too long")))?;
            return Self::new(num, Integer::new(10).pow(exponent));
        }

        Ok(Self::from_integer(Integer::parse(t)?))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.numerator.clone())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`GfError::NotInvertible`] if the rational is zero.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(GfError::not_invertible("reciprocal of zero"));
        }
        Ok(Self::reduced(
            self.denominator.clone(),
            self.numerator.clone(),
        ))
    }

    /// Divides by another rational.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::NotInvertible`] if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        Ok(self * &other.recip()?)
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self {
            numerator: self.numerator.pow(exp),
            denominator: self.denominator.pow(exp),
        }
    }

    /// Lossy conversion to `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let n = self.numerator.as_inner().to_f64().value();
        let d = self.denominator.as_inner().to_f64().value();
        n / d
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            numerator: Integer::zero(),
            denominator: Integer::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive, so cross-multiplication preserves order
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

// Arithmetic operations
impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        if self.denominator == rhs.denominator {
            return Rational::reduced(
                &self.numerator + &rhs.numerator,
                self.denominator.clone(),
            );
        }
        Rational::reduced(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        &self + rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        &self - rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Rational::zero();
        }
        Rational::reduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Rational::from_i64(1, 2);
        let b = Rational::from_i64(1, 3);

        // 1/2 + 1/3 = 5/6
        let sum = a.clone() + b.clone();
        assert_eq!(sum.numerator().to_i64(), Some(5));
        assert_eq!(sum.denominator().to_i64(), Some(6));

        // 1/2 * 1/3 = 1/6
        let prod = a.clone() * b.clone();
        assert_eq!(prod.numerator().to_i64(), Some(1));
        assert_eq!(prod.denominator().to_i64(), Some(6));

        // 1/2 - 1/2 = 0/1
        let diff = a.clone() - a;
        assert!(diff.is_zero());
        assert!(diff.denominator().is_one());
    }

    #[test]
    fn test_reduction() {
        // 4/6 should reduce to 2/3
        let r = Rational::from_i64(4, 6);
        assert_eq!(r.numerator().to_i64(), Some(2));
        assert_eq!(r.denominator().to_i64(), Some(3));

        // sign moves onto the numerator
        let r = Rational::from_i64(3, -9);
        assert_eq!(r.numerator().to_i64(), Some(-1));
        assert_eq!(r.denominator().to_i64(), Some(3));
    }

    #[test]
    fn test_zero_denominator() {
        assert!(matches!(
            Rational::new(Integer::new(1), Integer::new(0)),
            Err(GfError::NotInvertible(_))
        ));
        assert!(Rational::zero().recip().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::from_i64(3, 1).to_string(), "3");
        assert_eq!(Rational::from_i64(2, 3).to_string(), "2/3");
        assert_eq!(Rational::from_i64(-2, 3).to_string(), "-2/3");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Rational::parse("7").unwrap(), Rational::from(7));
        assert_eq!(Rational::parse("-6/4").unwrap(), Rational::from_i64(-3, 2));
        assert_eq!(Rational::parse("1.25").unwrap(), Rational::from_i64(5, 4));
        assert_eq!(Rational::parse("-0.5").unwrap(), Rational::from_i64(-1, 2));
        assert_eq!(Rational::parse(".5").unwrap(), Rational::from_i64(1, 2));
        assert!(matches!(Rational::parse("1.2.3"), Err(GfError::Parse(_))));
        assert!(matches!(Rational::parse("abc"), Err(GfError::Parse(_))));
        assert!(matches!(Rational::parse("."), Err(GfError::Parse(_))));
        assert!(matches!(Rational::parse("1/0"), Err(GfError::NotInvertible(_))));
    }

    #[test]
    fn test_ordering() {
        assert!(Rational::from_i64(1, 3) < Rational::from_i64(1, 2));
        assert!(Rational::from_i64(-1, 2) < Rational::zero());
    }

    #[test]
    fn test_to_f64() {
        assert!((Rational::from_i64(1, 4).to_f64() - 0.25).abs() < 1e-15);
    }
}
