//! The field of rational numbers Q as a coefficient ring.

use crate::traits::Ring;
use genfun_core::Result;
use genfun_integers::Rational;
use num_traits::{One, Zero};

impl Ring for Rational {
    fn zero_like(&self) -> Self {
        Rational::zero()
    }

    fn one_like(&self) -> Self {
        Rational::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }

    fn from_i64_like(&self, n: i64) -> Self {
        Rational::from(n)
    }

    fn parse_like(&self, text: &str) -> Result<Self> {
        Rational::parse(text)
    }

    fn try_inv(&self) -> Result<Self> {
        self.recip()
    }

    fn try_div(&self, other: &Self) -> Result<Self> {
        self.checked_div(other)
    }

    fn exact_division(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genfun_core::GfError;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    #[test]
    fn test_field_laws() {
        let a = q(2, 3);
        let b = q(3, 4);

        // 2/3 + 3/4 = 17/12
        assert_eq!(a.clone() + b.clone(), q(17, 12));
        // 2/3 * 3/4 = 1/2
        assert_eq!(a.clone() * b.clone(), q(1, 2));
        assert_eq!(a.clone() + a.zero_like(), a);
        assert_eq!(a.clone() * a.one_like(), a);
    }

    #[test]
    fn test_inverse() {
        let a = q(3, 5);
        let inv = a.try_inv().unwrap();
        assert!(Ring::is_one(&(a * inv)));
        assert!(matches!(q(0, 1).try_inv(), Err(GfError::NotInvertible(_))));
    }

    #[test]
    fn test_division() {
        // (1/2) / (1/3) = 3/2
        assert_eq!(q(1, 2).try_div(&q(1, 3)).unwrap(), q(3, 2));
        assert_eq!(q(1, 2).div_i64(4).unwrap(), q(1, 8));
    }

    #[test]
    fn test_pow() {
        assert_eq!(Ring::pow(&q(2, 3), 3), q(8, 27));
        assert_eq!(q(2, 3).try_pow(-2).unwrap(), q(9, 4));
        assert_eq!(q(2, 3).try_pow(0).unwrap(), q(1, 1));
        assert!(q(0, 1).try_pow(-1).is_err());
    }

    #[test]
    fn test_parse_like() {
        let sample = q(0, 1);
        assert_eq!(sample.parse_like("2.5").unwrap(), q(5, 2));
        assert!(matches!(sample.parse_like("2x"), Err(GfError::Parse(_))));
    }
}
