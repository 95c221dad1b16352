//! Integers modulo m as a coefficient ring.
//!
//! Inversion uses the extended Euclidean algorithm, so the ring is usable
//! for any modulus; division fails exactly when gcd(divisor, m) != 1.

use crate::traits::Ring;
use genfun_core::Result;
use genfun_integers::ModInt;

impl Ring for ModInt {
    fn zero_like(&self) -> Self {
        ModInt::zero_like(*self)
    }

    fn one_like(&self) -> Self {
        ModInt::one_like(*self)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0
    }

    fn is_one(&self) -> bool {
        self.value() == 1 % self.modulus()
    }

    fn from_i64_like(&self, n: i64) -> Self {
        ModInt::from_i64_like(*self, n)
    }

    fn parse_like(&self, text: &str) -> Result<Self> {
        ModInt::parse(text, self.modulus())
    }

    fn try_inv(&self) -> Result<Self> {
        self.inv()
    }

    fn try_div(&self, other: &Self) -> Result<Self> {
        self.checked_div(*other)
    }

    fn check_compatible(&self, other: &Self) -> Result<()> {
        self.check_modulus(*other)
    }

    fn exact_division(&self) -> bool {
        true
    }
}
