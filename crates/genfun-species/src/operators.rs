//! The symbolic-method operators.
//!
//! Each operator maps the generating function `a` of a component class to
//! the generating function of the structures assembled from it:
//!
//! | operator   | structures                  | complete form                          |
//! |------------|-----------------------------|----------------------------------------|
//! | `seq`      | sequences                   | `1 / (1 - a)`                          |
//! | `mset`     | multisets                   | `exp(sum a(z^k) / k)`                  |
//! | `pset`     | sets                        | `exp(sum (-1)^(k-1) a(z^k) / k)`       |
//! | `cyc`      | cycles                      | `sum phi(k)/k * -log(1 - a(z^k))`      |
//! | `lset`     | labelled sets               | `exp(a)`                               |
//! | `lcyc`     | labelled cycles             | `-log(1 - a)`                          |
//! | `inv_mset` | components of multisets     | `sum mu(k)/k * log(a(z^k))`            |
//!
//! A [`Subset`] restricts the number of components. Restricted forms are
//! computed as a direct sum of admitted terms when the subset is finite,
//! and as the complete form minus the rejected terms when it is co-finite.

use crate::cycle_index::{cyclic, signed_symmetric, symmetric};
use crate::partition::to_i64;
use crate::subset::Subset;
use genfun_core::{GfError, Result};
use genfun_integers::sieve::{mobius, totients};
use genfun_rings::{Factorials, Ring};
use genfun_series::{exp_series, log1p_series, PowerSeries};
use log::debug;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A species operator, by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Sequences.
    Seq,
    /// Multisets.
    Mset,
    /// Sets of distinct components.
    Pset,
    /// Cycles.
    Cyc,
    /// Labelled sets.
    Lset,
    /// Labelled cycles.
    Lcyc,
    /// Inverse of `Mset`.
    InvMset,
}

impl Operator {
    /// The operator's conventional upper-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Seq => "SEQ",
            Self::Mset => "MSET",
            Self::Pset => "PSET",
            Self::Cyc => "CYC",
            Self::Lset => "LSET",
            Self::Lcyc => "LCYC",
            Self::InvMset => "INV_MSET",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = GfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SEQ" => Ok(Self::Seq),
            "MSET" => Ok(Self::Mset),
            "PSET" => Ok(Self::Pset),
            "CYC" => Ok(Self::Cyc),
            "LSET" => Ok(Self::Lset),
            "LCYC" => Ok(Self::Lcyc),
            "INV_MSET" => Ok(Self::InvMset),
            _ => Err(GfError::argument(format!("unknown species operator {s:?}"))),
        }
    }
}

/// How a restricted operator is evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dispatch {
    Complete,
    Direct,
    CompleteMinusRejected,
}

fn dispatch(subset: &Subset) -> Dispatch {
    if subset.is_all() {
        Dispatch::Complete
    } else if subset.is_cofinite() {
        Dispatch::CompleteMinusRejected
    } else {
        Dispatch::Direct
    }
}

/// Species operators over one coefficient ring.
///
/// Holds the shared factorial table used by the cycle-index weights and
/// the labelled operators.
#[derive(Clone, Debug)]
pub struct SymbolicMethod<T> {
    factorials: Arc<Factorials<T>>,
    threshold: usize,
}

impl<T: Ring> SymbolicMethod<T> {
    /// Creates the operator set.
    #[must_use]
    pub fn new(factorials: Arc<Factorials<T>>, threshold: usize) -> Self {
        Self {
            factorials,
            threshold,
        }
    }

    /// The shared factorial table.
    #[must_use]
    pub fn factorials(&self) -> &Arc<Factorials<T>> {
        &self.factorials
    }

    /// Applies `op` to `a` under `subset`.
    ///
    /// # Errors
    ///
    /// [`GfError::Argument`] if `INV_MSET` is given a restriction,
    /// [`GfError::TypeMismatch`] if `a` is over a different ring instance
    /// than the factorial table; otherwise the errors of the individual
    /// operator.
    pub fn apply(
        &self,
        op: Operator,
        a: &PowerSeries<T>,
        subset: &Subset,
    ) -> Result<PowerSeries<T>> {
        match op {
            Operator::Seq => self.seq(a, subset),
            Operator::Mset => self.mset(a, subset),
            Operator::Pset => self.pset(a, subset),
            Operator::Cyc => self.cyc(a, subset),
            Operator::Lset => self.lset(a, subset),
            Operator::Lcyc => self.lcyc(a, subset),
            Operator::InvMset if subset.is_all() => self.inv_mset(a),
            Operator::InvMset => Err(GfError::argument(format!(
                "INV_MSET takes no size restriction, got {subset}"
            ))),
        }
    }

    /// `SEQ(a)` restricted to the admitted sequence lengths.
    ///
    /// # Errors
    ///
    /// [`GfError::NotInvertible`] for the complete form when `1 - a(0)` is
    /// not a unit; [`GfError::Argument`] for a co-finite restriction when
    /// `a(0) != 0`.
    pub fn seq(&self, a: &PowerSeries<T>, subset: &Subset) -> Result<PowerSeries<T>> {
        self.restricted(
            "SEQ",
            a,
            subset,
            false,
            |k, powers| Ok(powers.get(k).clone()),
            |a| a.one_like().try_div_with_threshold(&(&a.one_like() - a), self.threshold),
        )
    }

    /// `MSET(a)`: multisets, via the symmetric cycle index.
    ///
    /// # Errors
    ///
    /// [`GfError::Argument`] when `a(0) != 0` for the complete or a co-finite
    /// form; [`GfError::NotInvertible`] when the ring cannot divide by the
    /// cycle lengths involved.
    pub fn mset(&self, a: &PowerSeries<T>, subset: &Subset) -> Result<PowerSeries<T>> {
        let args = |k: usize| exponent_args(a, k);
        self.restricted(
            "MSET",
            a,
            subset,
            true,
            |k, _| symmetric(k, &args(k)?, &self.factorials, self.threshold),
            |a| self.euler_transform(a, false),
        )
    }

    /// `PSET(a)`: sets of distinct components, via the signed cycle index.
    ///
    /// # Errors
    ///
    /// As [`mset`](Self::mset).
    pub fn pset(&self, a: &PowerSeries<T>, subset: &Subset) -> Result<PowerSeries<T>> {
        let args = |k: usize| exponent_args(a, k);
        self.restricted(
            "PSET",
            a,
            subset,
            true,
            |k, _| signed_symmetric(k, &args(k)?, &self.factorials, self.threshold),
            |a| self.euler_transform(a, true),
        )
    }

    /// `CYC(a)`: cycles, via the cyclic cycle index.
    ///
    /// # Errors
    ///
    /// As [`mset`](Self::mset).
    pub fn cyc(&self, a: &PowerSeries<T>, subset: &Subset) -> Result<PowerSeries<T>> {
        let phi = totients(a.len().max(subset.exclusive_max()));
        let args = |k: usize| exponent_args(a, k);
        self.restricted(
            "CYC",
            a,
            subset,
            true,
            |k, _| cyclic(k, &args(k)?, &phi, self.threshold),
            |a| {
                let n = a.len();
                let mut total = a.zero_like();
                for k in 1..n {
                    let ak = a.substitute_exponent(k)?;
                    if ak.is_zero() {
                        continue;
                    }
                    let weight = a.sample().from_i64_like(to_i64_u64(phi[k])?).div_i64(to_i64(k)?)?;
                    total = &total + &neg_log_one_minus(&ak, self.threshold)?.scale(&weight);
                }
                Ok(total)
            },
        )
    }

    /// `LSET(a)`: labelled sets, `sum a^k / k!` over admitted `k`.
    ///
    /// # Errors
    ///
    /// [`GfError::Argument`] when `a(0) != 0` for the complete or a co-finite
    /// form; [`GfError::Range`] when `k` is past the factorial table.
    pub fn lset(&self, a: &PowerSeries<T>, subset: &Subset) -> Result<PowerSeries<T>> {
        self.restricted(
            "LSET",
            a,
            subset,
            true,
            |k, powers| Ok(powers.get(k).scale(self.factorials.inverse_factorial(k)?)),
            |a| exp_series(a.sample(), a.len())?.substitute_with_threshold(a, self.threshold),
        )
    }

    /// `LCYC(a)`: labelled cycles, `sum a^k / k` over admitted `k >= 1`.
    ///
    /// # Errors
    ///
    /// As [`lset`](Self::lset), with [`GfError::NotInvertible`] when some
    /// admitted `k` is not a unit.
    pub fn lcyc(&self, a: &PowerSeries<T>, subset: &Subset) -> Result<PowerSeries<T>> {
        self.restricted(
            "LCYC",
            a,
            subset,
            true,
            |k, powers| {
                if k == 0 {
                    Ok(a.zero_like())
                } else {
                    powers.get(k).div_i64(to_i64(k)?)
                }
            },
            |a| neg_log_one_minus(a, self.threshold),
        )
    }

    /// `INV_MSET(a)`: the series `b` with `MSET(b) = a`.
    ///
    /// # Errors
    ///
    /// [`GfError::Argument`] unless `a(0) = 1`.
    pub fn inv_mset(&self, a: &PowerSeries<T>) -> Result<PowerSeries<T>> {
        self.check_ring(a)?;
        let n = a.len();
        if n == 0 {
            return Ok(a.clone());
        }
        if !a.constant_term().is_one() {
            return Err(GfError::argument(
                "INV_MSET needs a series with constant term 1",
            ));
        }

        let mu = mobius(n);
        let log1p = log1p_series(a.sample(), n)?;
        let mut total = a.zero_like();
        for k in 1..n {
            if mu[k] == 0 {
                continue;
            }
            // log(a(z^k)) = log1p(a(z^k) - 1)
            let shifted = a.substitute_exponent(k)?.add_constant(&-a.sample().one_like());
            let log = log1p.substitute_with_threshold(&shifted, self.threshold)?;
            let weight = a.sample().from_i64_like(i64::from(mu[k])).div_i64(to_i64(k)?)?;
            total = &total + &log.scale(&weight);
        }
        debug!("INV_MSET: n={n}");
        Ok(total)
    }

    /// The factorial table and `a` must come from the same ring instance.
    fn check_ring(&self, a: &PowerSeries<T>) -> Result<()> {
        self.factorials.sample().check_compatible(a.sample())
    }

    /// `exp(sum_{k>=1} s_k a(z^k) / k)` with `s_k = 1` or `(-1)^(k-1)`.
    fn euler_transform(&self, a: &PowerSeries<T>, alternate: bool) -> Result<PowerSeries<T>> {
        let n = a.len();
        let mut sum = a.zero_like();
        for k in 1..n {
            let ak = a.substitute_exponent(k)?;
            if ak.is_zero() {
                continue;
            }
            let sign = if alternate && k % 2 == 0 { -1 } else { 1 };
            sum = &sum + &ak.scale(&a.sample().from_i64_like(sign)).div_i64(to_i64(k)?)?;
        }
        exp_series(a.sample(), n)?.substitute_with_threshold(&sum, self.threshold)
    }

    /// Shared subset dispatch.
    ///
    /// `term(k, powers)` is the contribution of exactly `k` components;
    /// `complete(a)` is the unrestricted operator. Co-finite forms always
    /// need `a(0) = 0`, so that sizes past the bound contribute nothing.
    fn restricted(
        &self,
        name: &str,
        a: &PowerSeries<T>,
        subset: &Subset,
        complete_needs_zero_constant: bool,
        mut term: impl FnMut(usize, &mut Powers<'_, T>) -> Result<PowerSeries<T>>,
        complete: impl FnOnce(&PowerSeries<T>) -> Result<PowerSeries<T>>,
    ) -> Result<PowerSeries<T>> {
        self.check_ring(a)?;
        let mode = dispatch(subset);
        debug!("{name}{subset}: {mode:?} on length {}", a.len());

        let needs_zero_constant = match mode {
            Dispatch::Direct => false,
            Dispatch::Complete => complete_needs_zero_constant,
            Dispatch::CompleteMinusRejected => true,
        };
        if needs_zero_constant && !a.constant_term().is_zero() {
            return Err(GfError::argument(format!(
                "{name}{subset} needs a series with zero constant term"
            )));
        }

        let mut powers = Powers::new(a, self.threshold);
        match mode {
            Dispatch::Complete => complete(a),
            Dispatch::Direct => {
                let mut total = a.zero_like();
                for k in subset.admitted() {
                    total = &total + &term(k, &mut powers)?;
                }
                Ok(total)
            }
            Dispatch::CompleteMinusRejected => {
                let mut total = complete(a)?;
                for k in subset.rejected() {
                    total = &total - &term(k, &mut powers)?;
                }
                Ok(total)
            }
        }
    }
}

/// Successive powers `a^0, a^1, ...`, computed on demand.
struct Powers<'a, T> {
    base: &'a PowerSeries<T>,
    cache: Vec<PowerSeries<T>>,
    threshold: usize,
}

impl<'a, T: Ring> Powers<'a, T> {
    fn new(base: &'a PowerSeries<T>, threshold: usize) -> Self {
        Self {
            base,
            cache: vec![base.one_like()],
            threshold,
        }
    }

    fn get(&mut self, k: usize) -> &PowerSeries<T> {
        while self.cache.len() <= k {
            let next = self.cache[self.cache.len() - 1].mul_with_threshold(self.base, self.threshold);
            self.cache.push(next);
        }
        &self.cache[k]
    }
}

/// `[a(z), a(z^2), ..., a(z^k)]`, at least one entry.
fn exponent_args<T: Ring>(a: &PowerSeries<T>, k: usize) -> Result<Vec<PowerSeries<T>>> {
    (1..=k.max(1)).map(|j| a.substitute_exponent(j)).collect()
}

/// `-log(1 - b) = sum_{k>=1} b^k / k` for `b(0) = 0`.
fn neg_log_one_minus<T: Ring>(b: &PowerSeries<T>, threshold: usize) -> Result<PowerSeries<T>> {
    let log1p = log1p_series(b.sample(), b.len())?;
    Ok(-log1p.substitute_with_threshold(&-b, threshold)?)
}

fn to_i64_u64(v: u64) -> Result<i64> {
    i64::try_from(v).map_err(|_| GfError::range(format!("{v} does not fit in i64")))
}
