//! Arithmetic operations on power series.
//!
//! Provides addition, multiplication, inversion, division, and composition.

use crate::power_series::PowerSeries;
use genfun_core::{GfError, Result};
use genfun_poly::algorithms::karatsuba::{mul_truncated, select_kernel, KARATSUBA_THRESHOLD};
use genfun_rings::traits::Ring;
use log::{debug, trace};
use std::ops::{Add, Mul, Neg, Sub};

impl<T: Ring> PowerSeries<T> {
    /// Multiplies two series, switching to Karatsuba at `threshold`.
    ///
    /// The result has the length of the shorter operand.
    #[must_use]
    pub fn mul_with_threshold(&self, other: &Self, threshold: usize) -> Self {
        let n = self.len().min(other.len());
        if n == 0 {
            return Self::zero(&self.zero, 0);
        }
        trace!(
            "series mul: n={n} kernel={:?}",
            select_kernel(&self.coeffs, &other.coeffs, n, threshold)
        );
        Self {
            coeffs: mul_truncated(&self.coeffs, &other.coeffs, n, threshold),
            zero: self.zero.clone(),
        }
    }

    /// Multiplicative inverse modulo `z^len`.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] if the constant term is not a unit.
    pub fn invert(&self) -> Result<Self> {
        self.invert_with_threshold(KARATSUBA_THRESHOLD)
    }

    /// [`invert`](Self::invert) with an explicit multiplication threshold.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] if the constant term is not a unit.
    pub fn invert_with_threshold(&self, threshold: usize) -> Result<Self> {
        if self.len() == 0 {
            return Ok(self.clone());
        }
        let coeffs = invert_prefix(&self.coeffs, self.len(), threshold, &self.zero, 0)?;
        Ok(Self {
            coeffs,
            zero: self.zero.clone(),
        })
    }

    /// Divides by `other`.
    ///
    /// A leading run of zeros shared by numerator and denominator is
    /// cancelled first, so `z / (2z)` is fine. Cancelling `v` zeros shortens
    /// the result to `min(len) - v` coefficients, the part that is exact.
    /// An operand of length 0 gives the empty series.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] if the denominator is zero, has a longer
    /// zero run than the numerator, or its first nonzero coefficient is not
    /// a unit.
    pub fn try_div_with_threshold(&self, other: &Self, threshold: usize) -> Result<Self> {
        let n = self.len().min(other.len());
        if n == 0 {
            return Ok(self.resize(0));
        }
        let num = self.resize(n);
        let den = other.resize(n);

        let den_zeros = den.valuation();
        if den_zeros == n {
            return Err(GfError::not_invertible(
                "division by a series with no nonzero coefficient",
            ));
        }
        let num_zeros = num.valuation();
        if den_zeros > num_zeros {
            return Err(GfError::not_invertible(format!(
                "denominator has {den_zeros} leading zeros, numerator only {num_zeros}"
            )));
        }
        if den_zeros > 0 {
            debug!("series division: cancelling {den_zeros} leading zeros");
        }

        let num = num.shift_right(den_zeros)?;
        let den = den.shift_right(den_zeros)?;
        Ok(num.mul_with_threshold(&den.invert_with_threshold(threshold)?, threshold))
    }

    /// Composition `self(g(z))` by Horner evaluation.
    ///
    /// # Errors
    ///
    /// [`GfError::Argument`] if `g` has a nonzero constant term.
    pub fn substitute(&self, g: &Self) -> Result<Self> {
        if !g.constant_term().is_zero() {
            return Err(GfError::argument(
                "substituted series must have zero constant term",
            ));
        }
        Ok(self.substitute_unchecked(g, KARATSUBA_THRESHOLD))
    }

    /// Composition that also accepts a nonzero constant term in `g`.
    ///
    /// The result is only exact when `self` has no nonzero coefficient past
    /// the truncation length, i.e. when it is really a polynomial.
    #[must_use]
    pub fn substitute_allowing_constant(&self, g: &Self) -> Self {
        self.substitute_unchecked(g, KARATSUBA_THRESHOLD)
    }

    /// Composition with an explicit multiplication threshold.
    ///
    /// # Errors
    ///
    /// [`GfError::Argument`] if `g` has a nonzero constant term.
    pub fn substitute_with_threshold(&self, g: &Self, threshold: usize) -> Result<Self> {
        if !g.constant_term().is_zero() {
            return Err(GfError::argument(
                "substituted series must have zero constant term",
            ));
        }
        Ok(self.substitute_unchecked(g, threshold))
    }

    fn substitute_unchecked(&self, g: &Self, threshold: usize) -> Self {
        let n = self.len().min(g.len());
        let mut result = Self::zero(&self.zero, n);
        for c in self.coeffs[..n].iter().rev() {
            result = result.mul_with_threshold(g, threshold).add_constant(c);
        }
        result
    }

    /// Raises to a non-negative power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        Ring::pow(self, n)
    }
}

/// Newton doubling: invert to `ceil(n/2)`, then `y <- y + y(1 - y a)`.
fn invert_prefix<T: Ring>(
    a: &[T],
    n: usize,
    threshold: usize,
    zero: &T,
    depth: usize,
) -> Result<Vec<T>> {
    if n == 1 {
        return Ok(vec![a[0].try_inv()?]);
    }

    let half = n.div_ceil(2);
    let mut y = invert_prefix(a, half, threshold, zero, depth + 1)?;
    trace!("series inversion: depth={depth} {half} -> {n}");
    y.resize(n, zero.clone());

    let ya = mul_truncated(&y, a, n, threshold);
    let mut error: Vec<T> = ya.into_iter().map(|c| -c).collect();
    error[0] = error[0].clone() + zero.one_like();

    let correction = mul_truncated(&y, &error, n, threshold);
    Ok(y.into_iter()
        .zip(correction)
        .map(|(y, c)| y + c)
        .collect())
}

impl<T: Ring> Add for &PowerSeries<T> {
    type Output = PowerSeries<T>;

    fn add(self, rhs: Self) -> Self::Output {
        PowerSeries {
            coeffs: self
                .coeffs
                .iter()
                .zip(&rhs.coeffs)
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
            zero: self.zero.clone(),
        }
    }
}

impl<T: Ring> Add for PowerSeries<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<T: Ring> Sub for &PowerSeries<T> {
    type Output = PowerSeries<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        PowerSeries {
            coeffs: self
                .coeffs
                .iter()
                .zip(&rhs.coeffs)
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
            zero: self.zero.clone(),
        }
    }
}

impl<T: Ring> Sub for PowerSeries<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<T: Ring> Mul for &PowerSeries<T> {
    type Output = PowerSeries<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_with_threshold(rhs, KARATSUBA_THRESHOLD)
    }
}

impl<T: Ring> Mul for PowerSeries<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<T: Ring> Neg for &PowerSeries<T> {
    type Output = PowerSeries<T>;

    fn neg(self) -> Self::Output {
        self.map(|c| -c.clone())
    }
}

impl<T: Ring> Neg for PowerSeries<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

/// Power series are themselves coefficients, which gives bivariate
/// generating functions as `PowerSeries<PowerSeries<T>>`.
impl<T: Ring> Ring for PowerSeries<T> {
    fn zero_like(&self) -> Self {
        Self::zero(&self.zero, self.len())
    }

    fn one_like(&self) -> Self {
        Self::one(&self.zero, self.len())
    }

    fn is_zero(&self) -> bool {
        PowerSeries::is_zero(self)
    }

    fn is_one(&self) -> bool {
        self.coeffs.first().is_some_and(Ring::is_one) && self.coeffs[1..].iter().all(Ring::is_zero)
    }

    fn from_i64_like(&self, n: i64) -> Self {
        Self::constant(self.zero.from_i64_like(n), self.len())
    }

    fn parse_like(&self, text: &str) -> Result<Self> {
        Ok(Self::constant(self.zero.parse_like(text)?, self.len()))
    }

    fn try_inv(&self) -> Result<Self> {
        self.invert()
    }

    fn try_div(&self, other: &Self) -> Result<Self> {
        self.try_div_with_threshold(other, KARATSUBA_THRESHOLD)
    }

    fn div_i64(&self, n: i64) -> Result<Self> {
        let inv = self.zero.from_i64_like(n).try_inv()?;
        Ok(self.scale(&inv))
    }

    fn check_compatible(&self, other: &Self) -> Result<()> {
        self.zero.check_compatible(&other.zero)
    }
}
