//! Dense univariate polynomials in `z`.

use crate::algorithms::karatsuba::{mul_full, KARATSUBA_THRESHOLD};
use genfun_core::{GfError, Result};
use genfun_rings::traits::Ring;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order with no trailing
/// zeros, so the zero polynomial has no coefficients at all. A zero of the
/// coefficient ring is kept alongside so identities can still be derived
/// from it.
#[derive(Clone)]
pub struct Polynomial<T> {
    coeffs: Vec<T>,
    zero: T,
}

impl<T: Ring> Polynomial<T> {
    /// Creates a polynomial from coefficients, dropping trailing zeros.
    ///
    /// # Errors
    ///
    /// [`GfError::Argument`] if `coeffs` is empty (no ring to take the zero
    /// from); use [`Polynomial::zero`] for the zero polynomial.
    pub fn new(coeffs: Vec<T>) -> Result<Self> {
        let zero = coeffs
            .first()
            .map(Ring::zero_like)
            .ok_or_else(|| GfError::argument("polynomial needs at least one coefficient"))?;
        Ok(Self::from_parts(coeffs, zero))
    }

    /// Creates a polynomial whose ring is given by `sample`.
    #[must_use]
    pub fn from_coeffs(sample: &T, coeffs: Vec<T>) -> Self {
        Self::from_parts(coeffs, sample.zero_like())
    }

    fn from_parts(mut coeffs: Vec<T>, zero: T) -> Self {
        while coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }
        Self { coeffs, zero }
    }

    /// The zero polynomial over the ring of `sample`.
    #[must_use]
    pub fn zero(sample: &T) -> Self {
        Self {
            coeffs: Vec::new(),
            zero: sample.zero_like(),
        }
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one(sample: &T) -> Self {
        Self::constant(sample.one_like())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: T) -> Self {
        let zero = c.zero_like();
        Self::from_parts(vec![c], zero)
    }

    /// The polynomial `z`.
    #[must_use]
    pub fn variable(sample: &T) -> Self {
        Self::monomial(sample.one_like(), 1)
    }

    /// Creates the monomial `c * z^n`.
    #[must_use]
    pub fn monomial(c: T, n: usize) -> Self {
        let zero = c.zero_like();
        let mut coeffs = vec![zero.clone(); n + 1];
        coeffs[n] = c;
        Self::from_parts(coeffs, zero)
    }

    /// Degree of the polynomial; -1 for the zero polynomial.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn degree(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the leading coefficient, `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&T> {
        self.coeffs.last()
    }

    /// Returns the coefficient of `z^i` (zero past the degree).
    #[must_use]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(|| self.zero.clone())
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }

    /// A zero of the coefficient ring.
    #[must_use]
    pub fn sample(&self) -> &T {
        &self.zero
    }

    /// Index of the lowest nonzero coefficient; 0 for the zero polynomial.
    #[must_use]
    pub fn leading_zero_count(&self) -> usize {
        self.coeffs.iter().position(|c| !c.is_zero()).unwrap_or(0)
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(self.zero.clone(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &T) -> Self {
        let coeffs = self.coeffs.iter().map(|x| x.clone() * c.clone()).collect();
        Self::from_parts(coeffs, self.zero.clone())
    }

    /// Formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.mul_by_scalar(i64::try_from(i).unwrap_or(i64::MAX)))
            .collect();
        Self::from_parts(coeffs, self.zero.clone())
    }

    /// Multiplies by `z^k`.
    #[must_use]
    pub fn shift(&self, k: usize) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let mut coeffs = vec![self.zero.clone(); k];
        coeffs.extend(self.coeffs.iter().cloned());
        Self::from_parts(coeffs, self.zero.clone())
    }

    /// Divides by `z^k`, dropping the `k` lowest coefficients.
    #[must_use]
    pub fn unshift(&self, k: usize) -> Self {
        let coeffs = self.coeffs.iter().skip(k).cloned().collect();
        Self::from_parts(coeffs, self.zero.clone())
    }

    /// Multiplies, switching to Karatsuba at `threshold` coefficients.
    #[must_use]
    pub fn mul_with_threshold(&self, other: &Self, threshold: usize) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero(&self.zero);
        }
        Self::from_parts(
            mul_full(&self.coeffs, &other.coeffs, threshold),
            self.zero.clone(),
        )
    }

    /// Raises to a non-negative power by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        Ring::pow(self, n)
    }
}

impl<T: Ring> PartialEq for Polynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

impl<T: Ring> fmt::Debug for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial({self})")
    }
}

impl<T: Ring> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match i {
                0 => write!(f, "{c}")?,
                1 if c.is_one() => write!(f, "z")?,
                1 => write!(f, "({c})*z")?,
                _ if c.is_one() => write!(f, "z^{i}")?,
                _ => write!(f, "({c})*z^{i}")?,
            }
        }
        Ok(())
    }
}

impl<T: Ring> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Self) -> Self::Output {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len).map(|i| self.coeff(i) + rhs.coeff(i)).collect();
        Polynomial::from_parts(coeffs, self.zero.clone())
    }
}

impl<T: Ring> Add for Polynomial<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<T: Ring> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len).map(|i| self.coeff(i) - rhs.coeff(i)).collect();
        Polynomial::from_parts(coeffs, self.zero.clone())
    }
}

impl<T: Ring> Sub for Polynomial<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<T: Ring> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_with_threshold(rhs, KARATSUBA_THRESHOLD)
    }
}

impl<T: Ring> Mul for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<T: Ring> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Self::Output {
        Polynomial {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
            zero: self.zero.clone(),
        }
    }
}

impl<T: Ring> Neg for Polynomial<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<T: Ring> Ring for Polynomial<T> {
    fn zero_like(&self) -> Self {
        Self::zero(&self.zero)
    }

    fn one_like(&self) -> Self {
        Self::one(&self.zero)
    }

    fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    fn from_i64_like(&self, n: i64) -> Self {
        Self::from_parts(vec![self.zero.from_i64_like(n)], self.zero.clone())
    }

    fn parse_like(&self, text: &str) -> Result<Self> {
        let c = self.zero.parse_like(text)?;
        Ok(Self::from_parts(vec![c], self.zero.clone()))
    }

    /// Only nonzero constants with an invertible value are units.
    fn try_inv(&self) -> Result<Self> {
        match self.coeffs.as_slice() {
            [c] => Ok(Self::constant(c.try_inv()?)),
            _ => Err(GfError::not_invertible(format!(
                "polynomial {self} of degree {} is not a unit",
                self.degree()
            ))),
        }
    }

    fn check_compatible(&self, other: &Self) -> Result<()> {
        self.zero.check_compatible(&other.zero)
    }
}
