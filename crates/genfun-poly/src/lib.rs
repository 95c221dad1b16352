//! # genfun-poly
//!
//! Dense univariate polynomials over any [`Ring`](genfun_rings::Ring).
//!
//! This crate provides:
//! - [`Polynomial`], sanitized dense polynomials in `z`
//! - Truncated multiplication kernels shared with power series
//! - Long division and Euclidean gcd
//!
//! ## Algorithm Selection
//!
//! Multiplication selects its kernel from the operand shape:
//! - At least half the coefficients zero: sparse schoolbook
//! - Length below the threshold (default 100): schoolbook O(n²)
//! - Otherwise: Karatsuba O(n^1.58)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;

#[cfg(test)]
mod proptests;

pub use algorithms::gcd::{make_monic, poly_div_rem, poly_gcd};
pub use algorithms::karatsuba::{mul_truncated, MulKernel, KARATSUBA_THRESHOLD};
pub use dense::Polynomial;
