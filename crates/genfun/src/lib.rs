//! # genfun
//!
//! A generating-function kernel: truncated formal power series over
//! interchangeable coefficient rings, plus the symbolic method for counting
//! unlabelled and labelled combinatorial structures.
//!
//! ## Features
//!
//! - **Coefficient rings**: exact rationals over big integers, doubles,
//!   integers modulo m, polynomials, rational functions, and series of any
//!   of these
//! - **Series arithmetic**: sparse / schoolbook / Karatsuba multiplication,
//!   Newton inversion, composition, closed-form elementary functions
//! - **Pólya enumeration**: partitions, symmetric / alternating / cyclic
//!   cycle indices
//! - **Symbolic method**: SEQ, MSET, PSET, CYC, LSET, LCYC, INV_MSET with
//!   size restrictions
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use genfun::prelude::*;
//!
//! // integer partitions: MSET(SEQ_{>=1}(z))
//! let ctx = Context::with_defaults(Rational::from(0));
//! let parts = ctx.species_op(Operator::Seq, ctx.variable(), ">=1")?;
//! let p = ctx.species_op(Operator::Mset, parts, "")?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod value;

pub use genfun_core as core;
pub use genfun_integers as integers;
pub use genfun_poly as poly;
pub use genfun_rational_func as rational_func;
pub use genfun_rings as rings;
pub use genfun_series as series;
pub use genfun_species as species;

pub use context::Context;
pub use value::Value;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::context::Context;
    pub use crate::value::Value;
    pub use genfun_core::{GfError, KernelConfig, Result};
    pub use genfun_integers::{Integer, ModInt, Rational};
    pub use genfun_poly::Polynomial;
    pub use genfun_rational_func::RationalFunction;
    pub use genfun_rings::{Double, Factorials, Ring, Transcendental};
    pub use genfun_series::PowerSeries;
    pub use genfun_species::{Operator, Subset, SymbolicMethod};
}
