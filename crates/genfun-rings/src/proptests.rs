//! Property-based tests for the ring laws of the scalar families.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Double, ModInt, Ring};

    // Moduli from 1 (the zero ring, where one_like is 0) upwards
    fn modulus() -> impl Strategy<Value = i64> {
        prop_oneof![Just(1i64), Just(2i64), 3i64..10_000]
    }

    fn residues(m: i64) -> impl Strategy<Value = (ModInt, ModInt, ModInt)> {
        let r = move |v: i64| ModInt::new(v, m).unwrap();
        (-50_000i64..50_000, -50_000i64..50_000, -50_000i64..50_000)
            .prop_map(move |(a, b, c)| (r(a), r(b), r(c)))
    }

    fn modint_triple() -> impl Strategy<Value = (ModInt, ModInt, ModInt)> {
        modulus().prop_flat_map(residues)
    }

    fn double() -> impl Strategy<Value = f64> {
        -1000.0f64..1000.0
    }

    proptest! {
        #[test]
        fn modint_add_commutative((a, b, _) in modint_triple()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn modint_mul_commutative((a, b, _) in modint_triple()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn modint_distributive((a, b, c) in modint_triple()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn modint_identities((a, _, _) in modint_triple()) {
            prop_assert_eq!(a + Ring::zero_like(&a), a);
            prop_assert_eq!(a * Ring::one_like(&a), a);
            prop_assert!(Ring::is_zero(&(a + (-a))));
            prop_assert!(Ring::is_one(&Ring::one_like(&a)));
        }

        #[test]
        fn modint_unit_division((a, b, _) in modint_triple()) {
            prop_assume!(b.try_inv().is_ok());
            prop_assert_eq!(Ring::try_div(&a, &b).unwrap() * b, a);
        }

        #[test]
        fn double_add_commutative(a in double(), b in double()) {
            prop_assert_eq!(Double(a) + Double(b), Double(b) + Double(a));
        }

        #[test]
        fn double_distributive(a in double(), b in double(), c in double()) {
            let (x, y, w) = (Double(a), Double(b), Double(c));
            // rounding error scales with the operands, not the result
            let tolerance = 1e-12 * (1.0 + a.abs() * (b.abs() + c.abs()));
            prop_assert!((x * (y + w)).approx_eq(x * y + x * w, tolerance));
        }

        #[test]
        fn double_identities(a in double()) {
            let x = Double(a);
            prop_assert_eq!(x + Ring::zero_like(&x), x);
            prop_assert_eq!(x * Ring::one_like(&x), x);
        }

        #[test]
        fn double_inverse(a in double()) {
            prop_assume!(a.abs() > 1e-6);
            let x = Double(a);
            prop_assert!((x * x.try_inv().unwrap()).approx_eq(Double(1.0), 1e-10));
        }
    }
}
