//! # genfun-integers
//!
//! Exact scalar arithmetic for the genfun kernel.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Rationals over `Integer`, kept in lowest terms (`Rational`)
//! - Integers modulo a runtime modulus (`ModInt`)
//! - Euler totient and Möbius sieves (`sieve`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;
pub mod rational;
pub mod sieve;

#[cfg(test)]
mod proptests;

pub use genfun_core::{GfError, Result};
pub use integer::Integer;
pub use modular::ModInt;
pub use rational::Rational;
