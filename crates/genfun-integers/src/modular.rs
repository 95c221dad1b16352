//! Modular arithmetic.
//!
//! Integers modulo a modulus fixed at run time. Every value carries its
//! modulus, so mixing values from different rings is detected.

use genfun_core::{GfError, Result};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::Integer;

/// A modular integer with a runtime modulus.
///
/// # Invariants
///
/// - `modulus > 0`
/// - `0 <= value < modulus`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModInt {
    value: u64,
    modulus: u64,
}

impl ModInt {
    /// Creates a new modular integer from a signed value and modulus.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::Argument`] if the modulus is not positive.
    pub fn new(value: i64, modulus: i64) -> Result<Self> {
        if modulus <= 0 {
            return Err(GfError::argument(format!(
                "modulus must be positive, got {modulus}"
            )));
        }
        let m = modulus.unsigned_abs();
        let v = i128::from(value).rem_euclid(i128::from(modulus));
        Ok(Self {
            // 0 <= v < m <= i64::MAX
            value: v.unsigned_abs() as u64,
            modulus: m,
        })
    }

    /// Creates a modular integer from an unsigned value.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::Argument`] if the modulus is zero.
    pub fn from_u64(value: u64, modulus: u64) -> Result<Self> {
        if modulus == 0 {
            return Err(GfError::argument("modulus must be positive, got 0"));
        }
        Ok(Self {
            value: value % modulus,
            modulus,
        })
    }

    /// Reduces an arbitrary precision integer modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::Argument`] if the modulus is zero.
    pub fn from_integer(n: &Integer, modulus: u64) -> Result<Self> {
        if modulus == 0 {
            return Err(GfError::argument("modulus must be positive, got 0"));
        }
        Ok(Self {
            value: n.rem_euclid_u64(modulus),
            modulus,
        })
    }

    /// Parses an integer literal and reduces it modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::TypeMismatch`] if the literal denotes a fraction
    /// or decimal, and [`GfError::Parse`] if it is otherwise malformed.
    pub fn parse(text: &str, modulus: u64) -> Result<Self> {
        if text.contains(['.', '/']) {
            return Err(GfError::mismatch(format!(
                "literal {text:?} is not an integer modulo {modulus}"
            )));
        }
        Self::from_integer(&Integer::parse(text)?, modulus)
    }

    /// Returns the canonical residue.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.value
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus(self) -> u64 {
        self.modulus
    }

    /// Same modulus, value zero.
    #[must_use]
    pub const fn zero_like(self) -> Self {
        Self {
            value: 0,
            modulus: self.modulus,
        }
    }

    /// Same modulus, value one (zero when the modulus is 1).
    #[must_use]
    pub const fn one_like(self) -> Self {
        Self {
            value: 1 % self.modulus,
            modulus: self.modulus,
        }
    }

    /// Embeds a machine integer into this value's ring.
    #[must_use]
    pub fn from_i64_like(self, n: i64) -> Self {
        let v = i128::from(n).rem_euclid(i128::from(self.modulus));
        Self {
            value: v.unsigned_abs() as u64,
            modulus: self.modulus,
        }
    }

    /// Checks that both operands live in the same ring.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::TypeMismatch`] when the moduli differ.
    pub fn check_modulus(self, other: Self) -> Result<()> {
        if self.modulus == other.modulus {
            Ok(())
        } else {
            Err(GfError::mismatch(format!(
                "modulus mismatch: {} vs {}",
                self.modulus, other.modulus
            )))
        }
    }

    /// Computes the modular inverse using the extended Euclidean algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::NotInvertible`] when gcd(self, modulus) != 1.
    pub fn inv(self) -> Result<Self> {
        let m = i128::from(self.modulus);
        let mut t = 0i128;
        let mut new_t = 1i128;
        let mut r = m;
        let mut new_r = i128::from(self.value);

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r != 1 {
            return Err(GfError::not_invertible(format!(
                "{} is not invertible modulo {}",
                self.value, self.modulus
            )));
        }

        Ok(Self {
            value: t.rem_euclid(m).unsigned_abs() as u64,
            modulus: self.modulus,
        })
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::TypeMismatch`] when the moduli differ.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.check_modulus(rhs)?;
        Ok(self + rhs)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::TypeMismatch`] when the moduli differ.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        self.check_modulus(rhs)?;
        Ok(self - rhs)
    }

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::TypeMismatch`] when the moduli differ.
    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        self.check_modulus(rhs)?;
        Ok(self * rhs)
    }

    /// Checked division.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::TypeMismatch`] when the moduli differ and
    /// [`GfError::NotInvertible`] when the divisor is not a unit.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        self.check_modulus(rhs)?;
        Ok(self * rhs.inv()?)
    }

    /// Computes self^exp using binary exponentiation.
    #[must_use]
    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut result = self.one_like();

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            exp >>= 1;
        }

        result
    }

    fn assert_same_ring(self, rhs: Self) {
        assert_eq!(
            self.modulus, rhs.modulus,
            "modulus mismatch in modular arithmetic"
        );
    }
}

impl fmt::Debug for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

impl fmt::Display for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// The operator impls assume matching moduli and panic otherwise; callers
// that cannot guarantee this use the checked_* methods.
impl Add for ModInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.assert_same_ring(rhs);
        let sum = (u128::from(self.value) + u128::from(rhs.value)) % u128::from(self.modulus);
        Self {
            value: sum as u64,
            modulus: self.modulus,
        }
    }
}

impl Sub for ModInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for ModInt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.assert_same_ring(rhs);
        // Use u128 to avoid overflow
        let prod = (u128::from(self.value) * u128::from(rhs.value)) % u128::from(self.modulus);
        Self {
            value: prod as u64,
            modulus: self.modulus,
        }
    }
}

impl Neg for ModInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.value == 0 {
            self
        } else {
            Self {
                value: self.modulus - self.value,
                modulus: self.modulus,
            }
        }
    }
}

/// Common prime moduli.
pub mod primes {
    /// 2^23 * 7 * 17 + 1 = 998244353
    pub const P998244353: u64 = 998_244_353;

    /// 10^9 + 7
    pub const P1000000007: u64 = 1_000_000_007;

    /// Large prime for general use: 2^61 - 1 (Mersenne prime)
    pub const MERSENNE_61: u64 = (1 << 61) - 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m7(v: i64) -> ModInt {
        ModInt::new(v, 7).unwrap()
    }

    #[test]
    fn test_basic_ops() {
        let a = m7(5);
        let b = m7(4);

        assert_eq!((a + b).value(), 2); // 5 + 4 = 9 ≡ 2 (mod 7)
        assert_eq!((a - b).value(), 1); // 5 - 4 = 1
        assert_eq!((b - a).value(), 6);
        assert_eq!((a * b).value(), 6); // 5 * 4 = 20 ≡ 6 (mod 7)
    }

    #[test]
    fn test_inverse() {
        // 3 * 5 = 15 ≡ 1 (mod 7), so inv(3) = 5
        assert_eq!(m7(3).inv().unwrap(), m7(5));

        // 0 has no inverse
        assert!(matches!(m7(0).inv(), Err(GfError::NotInvertible(_))));

        // gcd(4, 6) = 2
        let four = ModInt::new(4, 6).unwrap();
        assert!(four.inv().is_err());
    }

    #[test]
    fn test_pow() {
        let a = m7(3);
        assert_eq!(a.pow(0).value(), 1);
        assert_eq!(a.pow(1).value(), 3);
        assert_eq!(a.pow(2).value(), 2); // 9 mod 7 = 2
        assert_eq!(a.pow(6).value(), 1); // Fermat's little theorem: a^(p-1) ≡ 1
    }

    #[test]
    fn test_negative() {
        assert_eq!(m7(-3).value(), 4); // -3 ≡ 4 (mod 7)
    }

    #[test]
    fn test_invalid_modulus() {
        assert!(matches!(ModInt::new(1, 0), Err(GfError::Argument(_))));
        assert!(matches!(ModInt::new(1, -5), Err(GfError::Argument(_))));
    }

    #[test]
    fn test_modulus_mismatch() {
        let a = m7(1);
        let b = ModInt::new(1, 11).unwrap();
        assert!(matches!(a.checked_add(b), Err(GfError::TypeMismatch(_))));
        assert!(matches!(a.checked_div(b), Err(GfError::TypeMismatch(_))));
    }

    #[test]
    #[should_panic(expected = "modulus mismatch")]
    fn test_operator_mismatch_panics() {
        let _ = m7(1) + ModInt::new(1, 11).unwrap();
    }

    #[test]
    fn test_parse() {
        assert_eq!(ModInt::parse("10", 7).unwrap(), m7(3));
        assert_eq!(ModInt::parse("-1", 7).unwrap(), m7(6));
        assert_eq!(
            ModInt::parse("123456789012345678901234567890", 7).unwrap(),
            m7(0) + ModInt::from_integer(
                &crate::Integer::parse("123456789012345678901234567890").unwrap(),
                7
            )
            .unwrap()
        );
        assert!(matches!(ModInt::parse("1.5", 7), Err(GfError::TypeMismatch(_))));
        assert!(matches!(ModInt::parse("1/2", 7), Err(GfError::TypeMismatch(_))));
        assert!(matches!(ModInt::parse("x", 7), Err(GfError::Parse(_))));
    }

    #[test]
    fn test_large_modulus() {
        let p = primes::MERSENNE_61;
        let a = ModInt::from_u64(p - 1, p).unwrap();
        // (-1)^2 = 1
        assert_eq!((a * a).value(), 1);
        assert_eq!((a * a.inv().unwrap()).value(), 1);
    }

    #[test]
    fn test_modulus_one() {
        let z = ModInt::new(5, 1).unwrap();
        assert_eq!(z.value(), 0);
        assert_eq!(z.one_like().value(), 0);
    }
}
