//! Evaluating the built-in transcendental functions at a series.
//!
//! Every function is its closed-form expansion substituted into the
//! argument minus its expansion point, so composition lives in one place.

use crate::closed_form::{cos_series, exp_series, log1p_series, sin_series, sqrt1p_series};
use crate::power_series::PowerSeries;
use genfun_core::{GfError, Result};
use genfun_rings::traits::{Ring, Transcendental};
use log::debug;

/// Computes `f(g)` truncated to the length of `g`.
///
/// The expansion point is the constant term `c` of `g`. The natural points
/// (`c = 0` for exp/sin/cos, `c = 1` for log/sqrt) work over every ring;
/// other points need the ring to evaluate `f(c)` numerically.
///
/// # Errors
///
/// [`GfError::Argument`] when `f(c)` cannot be evaluated in the coefficient
/// ring (for instance `exp(1)` over the rationals), plus any error of the
/// underlying expansion.
pub fn apply_transcendental<T: Ring>(
    f: Transcendental,
    g: &PowerSeries<T>,
) -> Result<PowerSeries<T>> {
    let n = g.len();
    if n == 0 {
        return Ok(g.clone());
    }
    let sample = g.sample();
    let c = g.constant_term().clone();
    let h = g.add_constant(&-c.clone());

    match f {
        Transcendental::Exp if c.is_zero() => exp_series(sample, n)?.substitute(g),
        Transcendental::Exp => {
            let ec = numeric(&c, f)?;
            Ok(exp_series(sample, n)?.substitute(&h)?.scale(&ec))
        }
        Transcendental::Log if c.is_one() => log1p_series(sample, n)?.substitute(&h),
        Transcendental::Log => {
            let lc = numeric(&c, f)?;
            let rel = h.div_scalar(&c)?;
            Ok(log1p_series(sample, n)?.substitute(&rel)?.add_constant(&lc))
        }
        Transcendental::Sqrt if c.is_one() => sqrt1p_series(sample, n)?.substitute(&h),
        Transcendental::Sqrt => {
            let sc = numeric(&c, f)?;
            let rel = h.div_scalar(&c)?;
            Ok(sqrt1p_series(sample, n)?.substitute(&rel)?.scale(&sc))
        }
        Transcendental::Sin if c.is_zero() => sin_series(sample, n)?.substitute(g),
        Transcendental::Cos if c.is_zero() => cos_series(sample, n)?.substitute(g),
        Transcendental::Sin | Transcendental::Cos => {
            // sin(c + h) = sin c cos h + cos c sin h
            // cos(c + h) = cos c cos h - sin c sin h
            let sin_c = numeric(&c, Transcendental::Sin)?;
            let cos_c = numeric(&c, Transcendental::Cos)?;
            let sin_h = sin_series(sample, n)?.substitute(&h)?;
            let cos_h = cos_series(sample, n)?.substitute(&h)?;
            if f == Transcendental::Sin {
                Ok(&cos_h.scale(&sin_c) + &sin_h.scale(&cos_c))
            } else {
                Ok(&cos_h.scale(&cos_c) - &sin_h.scale(&sin_c))
            }
        }
    }
}

fn numeric<T: Ring>(c: &T, f: Transcendental) -> Result<T> {
    debug!("evaluating {f} numerically at expansion point {c}");
    c.eval_transcendental(f).ok_or_else(|| {
        GfError::argument(format!(
            "{f} cannot be expanded around {c} in this coefficient ring"
        ))
    })
}

impl<T: Ring> PowerSeries<T> {
    /// `exp(self)`.
    ///
    /// # Errors
    ///
    /// See [`apply_transcendental`].
    pub fn exp(&self) -> Result<Self> {
        apply_transcendental(Transcendental::Exp, self)
    }

    /// `log(self)`.
    ///
    /// # Errors
    ///
    /// See [`apply_transcendental`].
    pub fn log(&self) -> Result<Self> {
        apply_transcendental(Transcendental::Log, self)
    }

    /// `sqrt(self)`.
    ///
    /// # Errors
    ///
    /// See [`apply_transcendental`].
    pub fn sqrt(&self) -> Result<Self> {
        apply_transcendental(Transcendental::Sqrt, self)
    }

    /// `sin(self)`.
    ///
    /// # Errors
    ///
    /// See [`apply_transcendental`].
    pub fn sin(&self) -> Result<Self> {
        apply_transcendental(Transcendental::Sin, self)
    }

    /// `cos(self)`.
    ///
    /// # Errors
    ///
    /// See [`apply_transcendental`].
    pub fn cos(&self) -> Result<Self> {
        apply_transcendental(Transcendental::Cos, self)
    }
}
