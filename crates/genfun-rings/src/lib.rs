//! # genfun-rings
//!
//! Coefficient rings for the genfun kernel.
//!
//! This crate provides:
//! - The [`Ring`] capability contract every coefficient type implements
//! - Ring impls for exact rationals and modular integers
//! - [`Double`], the approximate family with numeric transcendentals
//! - [`Factorials`], shared read-only factorial / binomial tables
//!
//! Identities are always derived from an existing sample (`zero_like`,
//! `one_like`) rather than from a bare constructor: the zero of a modular
//! ring needs its modulus, the zero of a power series needs its length.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod factorial;
pub mod float;
pub mod modular;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use factorial::Factorials;
pub use float::Double;
pub use genfun_core::{GfError, Result};
pub use genfun_integers::{Integer, ModInt, Rational};
pub use traits::{Ring, Transcendental};
