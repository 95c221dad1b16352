//! Error taxonomy for the kernel.

use thiserror::Error;

/// Errors raised by kernel operations.
///
/// Every variant is unrecoverable at the point of detection and is
/// propagated to the immediate caller; no operation substitutes a default
/// value for a failed computation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GfError {
    /// A numeric literal is malformed for the active coefficient type.
    #[error("parse error: {0}")]
    Parse(String),

    /// Operands belong to incompatible ring instances (e.g. differing moduli).
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A division or inversion needs a leading coefficient that is not a unit.
    #[error("not invertible: {0}")]
    NotInvertible(String),

    /// A value does not fit, or an index exceeds a table or truncation length.
    #[error("out of range: {0}")]
    Range(String),

    /// A malformed argument (subset specification, modulus, operand vector).
    #[error("invalid argument: {0}")]
    Argument(String),
}

impl GfError {
    /// Shorthand for [`GfError::Parse`].
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Shorthand for [`GfError::TypeMismatch`].
    pub fn mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }

    /// Shorthand for [`GfError::NotInvertible`].
    pub fn not_invertible(msg: impl Into<String>) -> Self {
        Self::NotInvertible(msg.into())
    }

    /// Shorthand for [`GfError::Range`].
    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }

    /// Shorthand for [`GfError::Argument`].
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::Argument(msg.into())
    }
}

/// Result alias used throughout the kernel.
pub type Result<T> = std::result::Result<T, GfError>;
