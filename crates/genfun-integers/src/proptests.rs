//! Property-based tests for exact scalar arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, ModInt, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g).is_zero());
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_stays_reduced(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            for r in [a.clone() + b.clone(), a.clone() - b.clone(), a * b] {
                prop_assert!(r.numerator().gcd(r.denominator()).is_one());
                prop_assert!(!r.denominator().is_negative());
            }
        }

        #[test]
        fn rational_multiplicative_inverse(
            num in non_zero_int(),
            den in non_zero_int()
        ) {
            let a = Rational::from_i64(num, den);
            let inv = a.recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        // ModInt properties

        #[test]
        fn modint_division_round_trip(m in 2i64..500, a in small_int(), b in small_int()) {
            let a = ModInt::new(a, m).unwrap();
            let b = ModInt::new(b, m).unwrap();
            let coprime = gcd_u64(b.value(), b.modulus()) == 1;
            match a.checked_div(b) {
                Ok(q) => {
                    prop_assert!(coprime);
                    prop_assert_eq!(q * b, a);
                }
                Err(_) => prop_assert!(!coprime),
            }
        }

        #[test]
        fn modint_fermat_little_theorem(a in 1u64..1000u64) {
            const P: u64 = crate::modular::primes::P998244353;
            let a = ModInt::from_u64(a, P).unwrap();
            prop_assert_eq!(a.pow(P - 1).value(), 1);
        }
    }
}
