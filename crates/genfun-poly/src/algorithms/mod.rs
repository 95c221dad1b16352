//! Coefficient-slice algorithms shared by polynomials and power series.
//!
//! - Schoolbook and sparse truncated multiplication
//! - Truncated Karatsuba multiplication
//! - Polynomial long division and gcd

pub mod gcd;
pub mod karatsuba;
