//! Cycle indices of the symmetric, alternating and cyclic groups,
//! evaluated at power series arguments (Pólya enumeration).
//!
//! Evaluators take `args = [a(z), a(z^2), ..., a(z^n)]`, so `args[k - 1]`
//! stands for the cycle-length-`k` variable.

use crate::partition::{class_weight, for_each_partition, partition_sign, to_i64, PartitionCount};
use genfun_core::{GfError, Result};
use genfun_integers::sieve::divisors;
use genfun_rings::{Factorials, Ring};
use genfun_series::PowerSeries;
use log::trace;

/// Lazily filled table of `args[s - 1]^m`.
struct PowerTable<'a, T> {
    args: &'a [PowerSeries<T>],
    powers: Vec<Vec<PowerSeries<T>>>,
    threshold: usize,
}

impl<'a, T: Ring> PowerTable<'a, T> {
    fn new(args: &'a [PowerSeries<T>], threshold: usize) -> Self {
        Self {
            args,
            powers: vec![Vec::new(); args.len()],
            threshold,
        }
    }

    fn get(&mut self, size: usize, multiplicity: usize) -> &PowerSeries<T> {
        let base = &self.args[size - 1];
        let row = &mut self.powers[size - 1];
        if row.is_empty() {
            row.push(base.one_like());
        }
        while row.len() <= multiplicity {
            let next = row[row.len() - 1].mul_with_threshold(base, self.threshold);
            row.push(next);
        }
        &row[multiplicity]
    }

    fn monomial(&mut self, partition: &[PartitionCount]) -> PowerSeries<T> {
        let threshold = self.threshold;
        let mut term = self.args[0].one_like();
        for p in partition {
            term = term.mul_with_threshold(self.get(p.size, p.multiplicity), threshold);
        }
        term
    }
}

fn check_args<T>(n: usize, args: &[PowerSeries<T>]) -> Result<()> {
    if args.len() < n.max(1) {
        return Err(GfError::argument(format!(
            "cycle index of degree {n} needs {} arguments, got {}",
            n.max(1),
            args.len()
        )));
    }
    Ok(())
}

/// `Z(S_n)` evaluated at `args`, optionally weighted by permutation sign.
fn symmetric_impl<T: Ring>(
    n: usize,
    args: &[PowerSeries<T>],
    factorials: &Factorials<T>,
    threshold: usize,
    signed: bool,
) -> Result<PowerSeries<T>> {
    check_args(n, args)?;
    let mut table = PowerTable::new(args, threshold);
    let mut total = args[0].zero_like();
    let mut failure = None;
    let mut count = 0usize;

    for_each_partition(n, |partition| {
        if failure.is_some() {
            return;
        }
        count += 1;
        match class_weight(partition, factorials) {
            Ok(mut weight) => {
                if signed && partition_sign(partition) < 0 {
                    weight = -weight;
                }
                let term = table.monomial(partition).scale(&weight);
                total = &total + &term;
            }
            Err(e) => failure = Some(e),
        }
    });

    if let Some(e) = failure {
        return Err(e);
    }
    trace!("cycle index S_{n}: {count} partitions (signed={signed})");
    Ok(total)
}

/// `Z(S_n)(a(z), ..., a(z^n))`: multisets of exactly `n` components.
///
/// # Errors
///
/// [`GfError::Argument`] if `args` is shorter than `n`; factorial table and
/// inversion errors from the class weights.
pub fn symmetric<T: Ring>(
    n: usize,
    args: &[PowerSeries<T>],
    factorials: &Factorials<T>,
    threshold: usize,
) -> Result<PowerSeries<T>> {
    symmetric_impl(n, args, factorials, threshold, false)
}

/// The sign-weighted symmetric cycle index: sets of exactly `n` distinct
/// components.
///
/// # Errors
///
/// As [`symmetric`].
pub fn signed_symmetric<T: Ring>(
    n: usize,
    args: &[PowerSeries<T>],
    factorials: &Factorials<T>,
    threshold: usize,
) -> Result<PowerSeries<T>> {
    symmetric_impl(n, args, factorials, threshold, true)
}

/// `Z(A_n) = Z(S_n) + Z_sgn(S_n)` for `n >= 2`; `A_0` and `A_1` are trivial
/// and coincide with `S_0`, `S_1`.
///
/// # Errors
///
/// As [`symmetric`].
pub fn alternating<T: Ring>(
    n: usize,
    args: &[PowerSeries<T>],
    factorials: &Factorials<T>,
    threshold: usize,
) -> Result<PowerSeries<T>> {
    let plain = symmetric(n, args, factorials, threshold)?;
    if n < 2 {
        return Ok(plain);
    }
    Ok(&plain + &signed_symmetric(n, args, factorials, threshold)?)
}

/// `Z(C_n) = (1/n) * sum_{d | n} phi(d) * a(z^d)^(n/d)`: cycles of exactly
/// `n` components. `Z(C_0)` is zero (there is no empty cycle).
///
/// `totients` must cover `0..=n`.
///
/// # Errors
///
/// [`GfError::Argument`] if `args` or `totients` is too short,
/// [`GfError::NotInvertible`] if `n` is not a unit.
pub fn cyclic<T: Ring>(
    n: usize,
    args: &[PowerSeries<T>],
    totients: &[u64],
    threshold: usize,
) -> Result<PowerSeries<T>> {
    check_args(n, args)?;
    if n == 0 {
        return Ok(args[0].zero_like());
    }
    if totients.len() <= n {
        return Err(GfError::argument(format!(
            "totient table of length {} cannot serve degree {n}",
            totients.len()
        )));
    }

    let mut table = PowerTable::new(args, threshold);
    let mut total = args[0].zero_like();
    for d in divisors(n) {
        let phi = i64::try_from(totients[d])
            .map_err(|_| GfError::range(format!("phi({d}) does not fit in i64")))?;
        let power = table.get(d, n / d);
        let term = power.scale(&power.sample().from_i64_like(phi));
        total = &total + &term;
    }
    total.div_i64(to_i64(n)?)
}
