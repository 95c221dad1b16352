//! Rational functions P(z)/Q(z) for the genfun kernel.
//!
//! This crate provides:
//! - [`RationalFunction`] type for representing P(z)/Q(z)
//! - Arithmetic operations (add, sub, mul, div)
//! - Expansion into a truncated [`PowerSeries`](genfun_series::PowerSeries)
//!
//! A rational function is the exact form of an expression built from
//! polynomials by the four operations; it is expanded into a generating
//! function only when something forces it (a transcendental, a species
//! operator, a coefficient lookup).

mod rational_func;

pub use rational_func::RationalFunction;
