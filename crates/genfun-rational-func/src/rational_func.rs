//! Core rational function type.
//!
//! A rational function is a quotient of two polynomials P(z)/Q(z), the
//! form an expression takes before it is expanded into a power series.
//! The representation is kept canonical as far as the coefficient ring
//! allows:
//! - Zero is represented as `0 / 1`
//! - A power of `z` dividing both sides is cancelled
//! - Over rings with exact division, numerator and denominator are coprime
//!   and the denominator is monic

use genfun_core::{GfError, Result};
use genfun_poly::{make_monic, poly_div_rem, poly_gcd, Polynomial};
use genfun_rings::traits::Ring;
use genfun_series::PowerSeries;
use log::trace;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A rational function P(z)/Q(z) over a ring.
///
/// # Example
///
/// ```ignore
/// use genfun_rational_func::RationalFunction;
/// use genfun_poly::Polynomial;
/// use genfun_integers::Rational;
///
/// // (z + 1) / (z^2 - 1) = 1 / (z - 1) after normalization
/// let zero = Rational::from(0);
/// let num = Polynomial::from_coeffs(&zero, vec![Rational::from(1), Rational::from(1)]);
/// let den = Polynomial::from_coeffs(&zero, vec![Rational::from(-1), Rational::from(0), Rational::from(1)]);
/// let f = RationalFunction::new(num, den)?;
/// ```
#[derive(Clone)]
pub struct RationalFunction<T> {
    numerator: Polynomial<T>,
    denominator: Polynomial<T>,
}

impl<T: Ring> RationalFunction<T> {
    /// Creates a normalized rational function.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] if the denominator is zero.
    pub fn new(numerator: Polynomial<T>, denominator: Polynomial<T>) -> Result<Self> {
        if denominator.is_zero() {
            return Err(GfError::not_invertible(
                "rational function with zero denominator",
            ));
        }
        Ok(Self::normalized(numerator, denominator))
    }

    /// Creates a rational function from a polynomial (denominator = 1).
    #[must_use]
    pub fn from_polynomial(p: Polynomial<T>) -> Self {
        let denominator = Polynomial::one(p.sample());
        Self {
            numerator: p,
            denominator,
        }
    }

    /// Creates the zero rational function (0/1).
    #[must_use]
    pub fn zero(sample: &T) -> Self {
        Self::from_polynomial(Polynomial::zero(sample))
    }

    /// Creates the constant rational function 1/1.
    #[must_use]
    pub fn one(sample: &T) -> Self {
        Self::from_polynomial(Polynomial::one(sample))
    }

    /// Creates a constant rational function c/1.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self::from_polynomial(Polynomial::constant(c))
    }

    /// Creates the rational function `z`.
    #[must_use]
    pub fn variable(sample: &T) -> Self {
        Self::from_polynomial(Polynomial::variable(sample))
    }

    /// Returns the numerator polynomial.
    #[must_use]
    pub fn numerator(&self) -> &Polynomial<T> {
        &self.numerator
    }

    /// Returns the denominator polynomial.
    #[must_use]
    pub fn denominator(&self) -> &Polynomial<T> {
        &self.denominator
    }

    /// Returns true if this is the zero rational function.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns true if the denominator is the constant 1.
    #[must_use]
    pub fn is_polynomial(&self) -> bool {
        Ring::is_one(&self.denominator)
    }

    /// Evaluates at a point.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] if the denominator vanishes at `x` (or is
    /// not a unit there).
    pub fn eval(&self, x: &T) -> Result<T> {
        self.numerator.eval(x).try_div(&self.denominator.eval(x))
    }

    /// Expands into a power series of length `n`.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] if the denominator has a zero constant
    /// term, i.e. the function has a pole at `z = 0`.
    pub fn to_series(&self, n: usize) -> Result<PowerSeries<T>> {
        let num = PowerSeries::from_polynomial(&self.numerator, n);
        let den = PowerSeries::from_polynomial(&self.denominator, n);
        Ring::try_div(&num, &den)
    }

    fn normalized(numerator: Polynomial<T>, denominator: Polynomial<T>) -> Self {
        if numerator.is_zero() {
            return Self::zero(numerator.sample());
        }

        let common = numerator
            .leading_zero_count()
            .min(denominator.leading_zero_count());
        let mut numerator = numerator.unshift(common);
        let mut denominator = denominator.unshift(common);

        if numerator.sample().exact_division() {
            match reduce_by_gcd(&numerator, &denominator) {
                Ok((num, den)) => {
                    numerator = num;
                    denominator = den;
                }
                Err(e) => trace!("rational function left unreduced: {e}"),
            }
        }

        Self {
            numerator,
            denominator,
        }
    }
}

/// Divides out the gcd and makes the denominator monic.
fn reduce_by_gcd<T: Ring>(
    numerator: &Polynomial<T>,
    denominator: &Polynomial<T>,
) -> Result<(Polynomial<T>, Polynomial<T>)> {
    let g = poly_gcd(numerator, denominator)?;
    let (mut num, mut den) = if g.degree() > 0 {
        (poly_div_rem(numerator, &g)?.0, poly_div_rem(denominator, &g)?.0)
    } else {
        (numerator.clone(), denominator.clone())
    };

    if let Some(lead) = den.leading_coeff() {
        if !lead.is_one() {
            let inv = lead.try_inv()?;
            num = num.scale(&inv);
            den = make_monic(&den)?;
        }
    }
    Ok((num, den))
}

impl<T: Ring> PartialEq for RationalFunction<T> {
    fn eq(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

impl<T: Ring> fmt::Debug for RationalFunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RationalFunction")
            .field("numerator", &self.numerator)
            .field("denominator", &self.denominator)
            .finish()
    }
}

impl<T: Ring> fmt::Display for RationalFunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_polynomial() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "({}) / ({})", self.numerator, self.denominator)
        }
    }
}

impl<T: Ring> Add for &RationalFunction<T> {
    type Output = RationalFunction<T>;

    fn add(self, rhs: Self) -> Self::Output {
        // a/b + c/d = (ad + bc) / bd
        let num = &(&self.numerator * &rhs.denominator) + &(&rhs.numerator * &self.denominator);
        let den = &self.denominator * &rhs.denominator;
        RationalFunction::normalized(num, den)
    }
}

impl<T: Ring> Add for RationalFunction<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<T: Ring> Sub for &RationalFunction<T> {
    type Output = RationalFunction<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        let num = &(&self.numerator * &rhs.denominator) - &(&rhs.numerator * &self.denominator);
        let den = &self.denominator * &rhs.denominator;
        RationalFunction::normalized(num, den)
    }
}

impl<T: Ring> Sub for RationalFunction<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<T: Ring> Mul for &RationalFunction<T> {
    type Output = RationalFunction<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        let num = &self.numerator * &rhs.numerator;
        let den = &self.denominator * &rhs.denominator;
        RationalFunction::normalized(num, den)
    }
}

impl<T: Ring> Mul for RationalFunction<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<T: Ring> Neg for &RationalFunction<T> {
    type Output = RationalFunction<T>;

    fn neg(self) -> Self::Output {
        RationalFunction {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl<T: Ring> Neg for RationalFunction<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<T: Ring> Ring for RationalFunction<T> {
    fn zero_like(&self) -> Self {
        Self::zero(self.numerator.sample())
    }

    fn one_like(&self) -> Self {
        Self::one(self.numerator.sample())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }

    fn from_i64_like(&self, n: i64) -> Self {
        Self::constant(self.numerator.sample().from_i64_like(n))
    }

    fn parse_like(&self, text: &str) -> Result<Self> {
        Ok(Self::constant(self.numerator.sample().parse_like(text)?))
    }

    fn try_inv(&self) -> Result<Self> {
        if self.numerator.is_zero() {
            return Err(GfError::not_invertible("inverse of the zero rational function"));
        }
        Ok(Self::normalized(
            self.denominator.clone(),
            self.numerator.clone(),
        ))
    }

    fn try_div(&self, other: &Self) -> Result<Self> {
        if other.numerator.is_zero() {
            return Err(GfError::not_invertible("division by the zero rational function"));
        }
        let num = &self.numerator * &other.denominator;
        let den = &self.denominator * &other.numerator;
        Ok(Self::normalized(num, den))
    }

    fn check_compatible(&self, other: &Self) -> Result<()> {
        self.numerator.check_compatible(&other.numerator)
    }
}
