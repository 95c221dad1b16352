//! # genfun-core
//!
//! Shared foundations for the genfun generating-function kernel.
//!
//! This crate provides:
//! - The error taxonomy every kernel operation reports ([`GfError`])
//! - Tuning configuration for the arithmetic engine ([`KernelConfig`])
//!
//! Errors carry no source positions. The caller evaluating an expression
//! is expected to attach that context when it catches a [`GfError`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;

pub use config::KernelConfig;
pub use error::{GfError, Result};
