//! Per-ring evaluation context.
//!
//! A [`Context`] fixes one coefficient ring (through a sample element),
//! the kernel tuning, and the factorial table shared by every operation
//! evaluated in it.

use crate::value::Value;
use genfun_core::{KernelConfig, Result};
use genfun_rational_func::RationalFunction;
use genfun_rings::{Factorials, Ring};
use genfun_series::PowerSeries;
use genfun_species::{Operator, Subset, SymbolicMethod};
use log::debug;
use std::sync::Arc;

/// Everything needed to evaluate expressions over one coefficient ring.
#[derive(Clone, Debug)]
pub struct Context<T> {
    config: KernelConfig,
    sample: T,
    species: SymbolicMethod<T>,
}

impl<T: Ring> Context<T> {
    /// Creates a context; builds the factorial table once.
    #[must_use]
    pub fn new(sample: T, config: KernelConfig) -> Self {
        let sample = sample.zero_like();
        let factorials = Arc::new(Factorials::new(&sample, config.factorial_bound));
        debug!(
            "context: length={} threshold={} factorials={}",
            config.default_length,
            config.karatsuba_threshold,
            factorials.bound()
        );
        let species = SymbolicMethod::new(factorials, config.karatsuba_threshold);
        Self {
            config,
            sample,
            species,
        }
    }

    /// Creates a context with the default configuration.
    #[must_use]
    pub fn with_defaults(sample: T) -> Self {
        Self::new(sample, KernelConfig::default())
    }

    /// The tuning configuration.
    #[must_use]
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// The shared factorial table.
    #[must_use]
    pub fn factorials(&self) -> &Arc<Factorials<T>> {
        self.species.factorials()
    }

    /// The species operators.
    #[must_use]
    pub fn species(&self) -> &SymbolicMethod<T> {
        &self.species
    }

    /// The ring zero.
    #[must_use]
    pub fn zero(&self) -> T {
        self.sample.zero_like()
    }

    /// The ring unit.
    #[must_use]
    pub fn one(&self) -> T {
        self.sample.one_like()
    }

    /// Parses a literal in this ring.
    ///
    /// # Errors
    ///
    /// [`GfError::Parse`](genfun_core::GfError::Parse) or
    /// [`GfError::TypeMismatch`](genfun_core::GfError::TypeMismatch).
    pub fn parse(&self, text: &str) -> Result<T> {
        self.sample.parse_like(text)
    }

    /// `value * z^index` at the given length (default length if `None`).
    ///
    /// # Errors
    ///
    /// [`GfError::Range`](genfun_core::GfError::Range) if `index` is not
    /// below the length.
    pub fn series_atom(&self, value: T, index: usize, length: Option<usize>) -> Result<PowerSeries<T>> {
        PowerSeries::atom(value, index, self.length(length))
    }

    /// The zero series at the given length (default length if `None`).
    #[must_use]
    pub fn series_zero(&self, length: Option<usize>) -> PowerSeries<T> {
        PowerSeries::zero(&self.sample, self.length(length))
    }

    /// The variable `z` as an exact rational function.
    #[must_use]
    pub fn variable(&self) -> Value<T> {
        Value::Rational(RationalFunction::variable(&self.sample))
    }

    /// A scalar value.
    #[must_use]
    pub fn scalar(&self, value: T) -> Value<T> {
        Value::Scalar(value)
    }

    /// Series product honouring the configured Karatsuba threshold.
    ///
    /// # Errors
    ///
    /// [`GfError::TypeMismatch`](genfun_core::GfError::TypeMismatch) if an
    /// operand is over a different ring instance than the context.
    pub fn multiply(&self, a: &PowerSeries<T>, b: &PowerSeries<T>) -> Result<PowerSeries<T>> {
        self.check_series(a)?;
        self.check_series(b)?;
        Ok(a.mul_with_threshold(b, self.config.karatsuba_threshold))
    }

    /// Series quotient honouring the configured Karatsuba threshold.
    ///
    /// # Errors
    ///
    /// [`GfError::TypeMismatch`](genfun_core::GfError::TypeMismatch) as for
    /// [`multiply`](Self::multiply);
    /// [`GfError::NotInvertible`](genfun_core::GfError::NotInvertible) when
    /// the denominator cannot be inverted.
    pub fn divide(&self, a: &PowerSeries<T>, b: &PowerSeries<T>) -> Result<PowerSeries<T>> {
        self.check_series(a)?;
        self.check_series(b)?;
        a.try_div_with_threshold(b, self.config.karatsuba_threshold)
    }

    /// `a + b` on values.
    ///
    /// # Errors
    ///
    /// See [`Value::try_add`].
    pub fn add(&self, a: Value<T>, b: Value<T>) -> Result<Value<T>> {
        a.try_add(b, self.config.default_length)
    }

    /// `a - b` on values.
    ///
    /// # Errors
    ///
    /// See [`Value::try_sub`].
    pub fn sub(&self, a: Value<T>, b: Value<T>) -> Result<Value<T>> {
        a.try_sub(b, self.config.default_length)
    }

    /// `a * b` on values.
    ///
    /// # Errors
    ///
    /// See [`Value::try_mul`].
    pub fn mul(&self, a: Value<T>, b: Value<T>) -> Result<Value<T>> {
        a.try_mul(b, self.config.default_length, self.config.karatsuba_threshold)
    }

    /// `a / b` on values.
    ///
    /// # Errors
    ///
    /// See [`Value::try_div`].
    pub fn div(&self, a: Value<T>, b: Value<T>) -> Result<Value<T>> {
        a.try_div(b, self.config.default_length, self.config.karatsuba_threshold)
    }

    /// Applies a species operator to a value, parsing the subset text.
    ///
    /// The value is expanded to a series first; the subset is bounded by
    /// the series length.
    ///
    /// # Errors
    ///
    /// [`GfError::Argument`](genfun_core::GfError::Argument) for a malformed
    /// subset, [`GfError::TypeMismatch`](genfun_core::GfError::TypeMismatch)
    /// for a value over another ring instance, plus the operator's own
    /// errors.
    pub fn species_op(&self, op: Operator, a: Value<T>, subset: &str) -> Result<Value<T>> {
        let series = a.into_series(self.config.default_length)?;
        self.check_series(&series)?;
        let subset = Subset::parse(subset, series.len())?;
        Ok(Value::Series(self.species.apply(op, &series, &subset)?))
    }

    fn check_series(&self, s: &PowerSeries<T>) -> Result<()> {
        self.sample.check_compatible(s.sample())
    }

    fn length(&self, length: Option<usize>) -> usize {
        length.unwrap_or(self.config.default_length)
    }
}
