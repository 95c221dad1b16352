//! Truncated formal power series for the genfun kernel.
//!
//! This crate provides:
//! - [`PowerSeries`]: coefficients exact modulo `z^N`
//! - Arithmetic with complexity-adaptive multiplication
//! - Newton inversion and division with leading-zero cancellation
//! - Composition (`substitute`) and `substitute_exponent`
//! - Closed forms for exp, log(1+z), sqrt(1+z), sin, cos
//!
//! # Key algorithms
//!
//! - Multiplication: schoolbook, sparse schoolbook, or truncated Karatsuba
//! - Inversion: Newton doubling, O(log N) refinement rounds
//! - Composition: Horner evaluation

pub mod closed_form;
pub mod ops;
pub mod power_series;
pub mod transcendental;

#[cfg(test)]
mod proptests;

pub use closed_form::{
    cos_series, exp_series, geometric_series, log1p_series, sin_series, sqrt1p_series,
};
pub use power_series::PowerSeries;
pub use transcendental::apply_transcendental;
