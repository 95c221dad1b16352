//! Precomputed factorial and inverse-factorial tables.

use crate::traits::Ring;
use genfun_core::{GfError, Result};
use log::debug;

/// Factorials `k!` and their inverses `1/k!` for `k < bound`, over any ring.
///
/// Built once and then only read; share it behind an `Arc`.
///
/// When some `k!` is not a unit (for instance `k >= p` modulo a prime `p`)
/// the table stops just before it, and lookups past the stored prefix
/// fail with [`GfError::Range`].
#[derive(Clone, Debug)]
pub struct Factorials<T> {
    factorials: Vec<T>,
    inverses: Vec<T>,
    sample: T,
}

impl<T: Ring> Factorials<T> {
    /// Builds the tables up to (but excluding) `bound`.
    #[must_use]
    pub fn new(sample: &T, bound: usize) -> Self {
        let mut factorials = Vec::with_capacity(bound);
        let mut inverses = Vec::with_capacity(bound);
        let mut current = sample.one_like();

        for k in 0..bound {
            if k > 0 {
                let Ok(k_i64) = i64::try_from(k) else { break };
                current = current * sample.from_i64_like(k_i64);
            }
            match current.try_inv() {
                Ok(inv) => {
                    factorials.push(current.clone());
                    inverses.push(inv);
                }
                Err(_) => {
                    debug!("factorial table truncated at {k}: {k}! is not invertible");
                    break;
                }
            }
        }

        Self {
            factorials,
            inverses,
            sample: sample.zero_like(),
        }
    }

    /// The zero of the ring the table was built over.
    #[must_use]
    pub fn sample(&self) -> &T {
        &self.sample
    }

    /// Number of stored entries.
    #[must_use]
    pub fn bound(&self) -> usize {
        self.factorials.len()
    }

    /// Returns `k!`.
    ///
    /// # Errors
    ///
    /// [`GfError::Range`] if `k` is past the stored prefix.
    pub fn factorial(&self, k: usize) -> Result<&T> {
        self.factorials.get(k).ok_or_else(|| self.out_of_range(k))
    }

    /// Returns `1/k!`.
    ///
    /// # Errors
    ///
    /// [`GfError::Range`] if `k` is past the stored prefix.
    pub fn inverse_factorial(&self, k: usize) -> Result<&T> {
        self.inverses.get(k).ok_or_else(|| self.out_of_range(k))
    }

    /// Binomial coefficient `C(n, k)`; zero when `k > n`.
    ///
    /// # Errors
    ///
    /// [`GfError::Range`] if `n` is past the stored prefix.
    pub fn binomial(&self, n: usize, k: usize) -> Result<T> {
        let n_fact = self.factorial(n)?;
        if k > n {
            return Ok(n_fact.zero_like());
        }
        Ok(n_fact.clone() * self.inverse_factorial(k)?.clone() * self.inverse_factorial(n - k)?.clone())
    }

    fn out_of_range(&self, k: usize) -> GfError {
        GfError::range(format!(
            "factorial index {k} beyond precomputed bound {}",
            self.bound()
        ))
    }
}
