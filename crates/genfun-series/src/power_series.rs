//! The truncated power series type.
//!
//! A `PowerSeries<T>` of length `N` holds the coefficients of `z^0` up to
//! `z^(N-1)` and means "exact modulo `z^N`". Binary operations truncate to
//! the shorter operand; nothing at or past the length is ever meaningful.

use genfun_core::{GfError, Result};
use genfun_poly::Polynomial;
use genfun_rings::traits::Ring;
use std::fmt;

/// A formal power series truncated to a fixed length.
#[derive(Clone)]
pub struct PowerSeries<T> {
    pub(crate) coeffs: Vec<T>,
    pub(crate) zero: T,
}

impl<T: Ring> PowerSeries<T> {
    /// Creates a series from its coefficients; the length is `coeffs.len()`.
    ///
    /// # Errors
    ///
    /// [`GfError::Argument`] if `coeffs` is empty.
    pub fn new(coeffs: Vec<T>) -> Result<Self> {
        let zero = coeffs
            .first()
            .map(Ring::zero_like)
            .ok_or_else(|| GfError::argument("power series needs at least one coefficient"))?;
        Ok(Self { coeffs, zero })
    }

    /// Creates a series whose ring is given by `sample`.
    #[must_use]
    pub fn from_coeffs(sample: &T, coeffs: Vec<T>) -> Self {
        Self {
            coeffs,
            zero: sample.zero_like(),
        }
    }

    /// The zero series of length `n`.
    #[must_use]
    pub fn zero(sample: &T, n: usize) -> Self {
        let zero = sample.zero_like();
        Self {
            coeffs: vec![zero.clone(); n],
            zero,
        }
    }

    /// The unit series of length `n`.
    #[must_use]
    pub fn one(sample: &T, n: usize) -> Self {
        Self::constant(sample.one_like(), n)
    }

    /// The constant series `c` of length `n`.
    #[must_use]
    pub fn constant(c: T, n: usize) -> Self {
        let mut series = Self::zero(&c, n);
        if let Some(first) = series.coeffs.first_mut() {
            *first = c;
        }
        series
    }

    /// The series `value * z^index` of length `n`.
    ///
    /// # Errors
    ///
    /// [`GfError::Range`] if `index >= n`.
    pub fn atom(value: T, index: usize, n: usize) -> Result<Self> {
        if index >= n {
            return Err(GfError::range(format!(
                "atom index {index} outside series of length {n}"
            )));
        }
        let mut series = Self::zero(&value, n);
        series.coeffs[index] = value;
        Ok(series)
    }

    /// The series `z` of length `n` (zero when `n < 2`).
    #[must_use]
    pub fn variable(sample: &T, n: usize) -> Self {
        let mut series = Self::zero(sample, n);
        if let Some(c) = series.coeffs.get_mut(1) {
            *c = sample.one_like();
        }
        series
    }

    /// Builds a series of length `n` from a coefficient function.
    #[must_use]
    pub fn from_fn(sample: &T, n: usize, f: impl FnMut(usize) -> T) -> Self {
        Self::from_coeffs(sample, (0..n).map(f).collect())
    }

    /// Expands a polynomial to a series of length `n`.
    #[must_use]
    pub fn from_polynomial(p: &Polynomial<T>, n: usize) -> Self {
        Self::from_fn(p.sample(), n, |i| p.coeff(i))
    }

    /// The truncation length.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// All coefficients, lowest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Consumes the series, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }

    /// A zero of the coefficient ring.
    #[must_use]
    pub fn sample(&self) -> &T {
        &self.zero
    }

    /// The coefficient of `z^i`.
    ///
    /// # Errors
    ///
    /// [`GfError::Range`] if `i` is at or past the truncation length.
    pub fn coeff(&self, i: usize) -> Result<&T> {
        self.coeffs.get(i).ok_or_else(|| {
            GfError::range(format!(
                "coefficient {i} requested from series of length {}",
                self.len()
            ))
        })
    }

    /// The constant term (the ring zero for an empty series).
    #[must_use]
    pub fn constant_term(&self) -> &T {
        self.coeffs.first().unwrap_or(&self.zero)
    }

    /// True when every stored coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Ring::is_zero)
    }

    /// Length of the leading run of zero coefficients.
    ///
    /// Equals [`len`](Self::len) for the zero series.
    #[must_use]
    pub fn valuation(&self) -> usize {
        self.coeffs
            .iter()
            .position(|c| !c.is_zero())
            .unwrap_or(self.coeffs.len())
    }

    /// Truncates or zero-pads to length `n`.
    #[must_use]
    pub fn resize(&self, n: usize) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs.resize(n, self.zero.clone());
        Self {
            coeffs,
            zero: self.zero.clone(),
        }
    }

    /// Multiplies by `z^k`, growing the length by `k`.
    #[must_use]
    pub fn shift_left(&self, k: usize) -> Self {
        let mut coeffs = vec![self.zero.clone(); k];
        coeffs.extend(self.coeffs.iter().cloned());
        Self {
            coeffs,
            zero: self.zero.clone(),
        }
    }

    /// Divides by `z^k`, dropping the first `k` coefficients.
    ///
    /// # Errors
    ///
    /// [`GfError::Range`] if `k >= len`.
    pub fn shift_right(&self, k: usize) -> Result<Self> {
        if k >= self.len() {
            return Err(GfError::range(format!(
                "cannot shift a series of length {} right by {k}",
                self.len()
            )));
        }
        Ok(Self {
            coeffs: self.coeffs[k..].to_vec(),
            zero: self.zero.clone(),
        })
    }

    /// Replaces `z` by `z^k`.
    ///
    /// # Errors
    ///
    /// [`GfError::Argument`] if `k == 0`.
    pub fn substitute_exponent(&self, k: usize) -> Result<Self> {
        if k == 0 {
            return Err(GfError::argument("substitute_exponent needs k >= 1"));
        }
        let mut result = Self::zero(&self.zero, self.len());
        for (i, c) in self.coeffs.iter().enumerate() {
            match i.checked_mul(k) {
                Some(j) if j < self.len() => result.coeffs[j] = c.clone(),
                _ => break,
            }
        }
        Ok(result)
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &T) -> Self {
        self.map(|x| x.clone() * c.clone())
    }

    /// Divides every coefficient by `c`.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] if `c` is not a unit.
    pub fn div_scalar(&self, c: &T) -> Result<Self> {
        let inv = c.try_inv()?;
        Ok(self.scale(&inv))
    }

    /// Adds `c` to the constant term.
    #[must_use]
    pub fn add_constant(&self, c: &T) -> Self {
        let mut result = self.clone();
        if let Some(first) = result.coeffs.first_mut() {
            *first = first.clone() + c.clone();
        }
        result
    }

    /// Formal derivative; the length drops by one.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.mul_by_scalar(i64::try_from(i).unwrap_or(i64::MAX)))
            .collect();
        Self {
            coeffs,
            zero: self.zero.clone(),
        }
    }

    /// Formal integral with zero constant term, at the same length.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] if some `i < len` is not a unit of the
    /// coefficient ring.
    pub fn integral(&self) -> Result<Self> {
        let mut coeffs = Vec::with_capacity(self.len());
        if !self.coeffs.is_empty() {
            coeffs.push(self.zero.clone());
        }
        for (i, c) in self.coeffs.iter().enumerate().take(self.len().saturating_sub(1)) {
            coeffs.push(c.div_i64(index_to_i64(i + 1)?)?);
        }
        Ok(Self {
            coeffs,
            zero: self.zero.clone(),
        })
    }

    /// The stored coefficients as a polynomial.
    #[must_use]
    pub fn to_polynomial(&self) -> Polynomial<T> {
        Polynomial::from_coeffs(&self.zero, self.coeffs.clone())
    }

    pub(crate) fn map(&self, f: impl FnMut(&T) -> T) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(f).collect(),
            zero: self.zero.clone(),
        }
    }
}

/// Converts a coefficient index to the machine integer used by `div_i64`.
pub(crate) fn index_to_i64(i: usize) -> Result<i64> {
    i64::try_from(i).map_err(|_| GfError::range(format!("index {i} does not fit in i64")))
}

impl<T: Ring> PartialEq for PowerSeries<T> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

impl<T: Ring> fmt::Debug for PowerSeries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PowerSeries({self})")
    }
}

impl<T: Ring> fmt::Display for PowerSeries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
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
        if first {
            write!(f, "0")?;
        }
        write!(f, " + O(z^{})", self.len())
    }
}
