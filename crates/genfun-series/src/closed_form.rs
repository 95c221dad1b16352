//! Closed-form expansions of the elementary functions.
//!
//! Each generator takes a coefficient sample and a length. Generators that
//! divide by `i` fail with [`GfError::NotInvertible`] when some `i` below
//! the length is not a unit, e.g. modulo a small prime.

use crate::power_series::{index_to_i64, PowerSeries};
use genfun_core::{GfError, Result};
use genfun_rings::traits::Ring;

/// `1/(1 - z) = 1 + z + z^2 + ...`
#[must_use]
pub fn geometric_series<T: Ring>(sample: &T, n: usize) -> PowerSeries<T> {
    PowerSeries::from_fn(sample, n, |_| sample.one_like())
}

/// `exp(z)`, from `e_i = e_(i-1) / i`.
///
/// # Errors
///
/// [`GfError::NotInvertible`] if some `i < n` is not a unit.
pub fn exp_series<T: Ring>(sample: &T, n: usize) -> Result<PowerSeries<T>> {
    let mut coeffs = Vec::with_capacity(n);
    let mut term = sample.one_like();
    for i in 0..n {
        if i > 0 {
            term = term.div_i64(index_to_i64(i)?)?;
        }
        coeffs.push(term.clone());
    }
    Ok(PowerSeries::from_coeffs(sample, coeffs))
}

/// `log(1 + z) = z - z^2/2 + z^3/3 - ...`
///
/// # Errors
///
/// [`GfError::NotInvertible`] if some `i < n` is not a unit.
pub fn log1p_series<T: Ring>(sample: &T, n: usize) -> Result<PowerSeries<T>> {
    let mut coeffs = Vec::with_capacity(n);
    for i in 0..n {
        let c = if i == 0 {
            sample.zero_like()
        } else {
            let sign = if i % 2 == 1 { 1 } else { -1 };
            sample.from_i64_like(sign).div_i64(index_to_i64(i)?)?
        };
        coeffs.push(c);
    }
    Ok(PowerSeries::from_coeffs(sample, coeffs))
}

/// `sqrt(1 + z)`, from `s_i = s_(i-1) * (3 - 2i) / (2i)`.
///
/// # Errors
///
/// [`GfError::NotInvertible`] if some `2i` with `i < n` is not a unit.
pub fn sqrt1p_series<T: Ring>(sample: &T, n: usize) -> Result<PowerSeries<T>> {
    let mut coeffs = Vec::with_capacity(n);
    let mut term = sample.one_like();
    for i in 0..n {
        if i > 0 {
            let i = index_to_i64(i)?;
            let factor = (3i64)
                .checked_sub(2 * i)
                .ok_or_else(|| GfError::range("sqrt expansion index overflow"))?;
            term = term.mul_by_scalar(factor).div_i64(2 * i)?;
        }
        coeffs.push(term.clone());
    }
    Ok(PowerSeries::from_coeffs(sample, coeffs))
}

/// `sin(z) = z - z^3/3! + z^5/5! - ...`
///
/// # Errors
///
/// [`GfError::NotInvertible`] if some `i < n` is not a unit.
pub fn sin_series<T: Ring>(sample: &T, n: usize) -> Result<PowerSeries<T>> {
    trig_series(sample, n, 1)
}

/// `cos(z) = 1 - z^2/2! + z^4/4! - ...`
///
/// # Errors
///
/// [`GfError::NotInvertible`] if some `i < n` is not a unit.
pub fn cos_series<T: Ring>(sample: &T, n: usize) -> Result<PowerSeries<T>> {
    trig_series(sample, n, 0)
}

/// Alternating `±1/i!` on indices of the given parity.
fn trig_series<T: Ring>(sample: &T, n: usize, parity: usize) -> Result<PowerSeries<T>> {
    let mut coeffs = Vec::with_capacity(n);
    let mut inv_fact = sample.one_like();
    for i in 0..n {
        if i > 0 {
            inv_fact = inv_fact.div_i64(index_to_i64(i)?)?;
        }
        let c = if i % 2 == parity {
            if (i / 2) % 2 == 0 {
                inv_fact.clone()
            } else {
                -inv_fact.clone()
            }
        } else {
            sample.zero_like()
        };
        coeffs.push(c);
    }
    Ok(PowerSeries::from_coeffs(sample, coeffs))
}
