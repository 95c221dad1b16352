//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::gcd::poly_div_rem;
    use crate::algorithms::karatsuba::{
        karatsuba_mul_truncated, schoolbook_mul_truncated, sparse_mul_truncated,
    };
    use crate::dense::Polynomial;
    use genfun_integers::Rational;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Rational> {
        (-100i64..100i64).prop_map(Rational::from)
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Polynomial<Rational>> {
        proptest::collection::vec(small_coeff(), 1..=5)
            .prop_map(|c| Polynomial::from_coeffs(&Rational::from(0), c))
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial<Rational>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Coefficient vectors for kernel cross-checks
    fn coeff_vec(max: usize) -> impl Strategy<Value = Vec<Rational>> {
        proptest::collection::vec((-20i64..20i64).prop_map(Rational::from), 1..=max)
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_degree_of_product(a in nonzero_poly(), b in nonzero_poly()) {
            prop_assert_eq!((&a * &b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_division_identity(a in small_poly(), b in nonzero_poly()) {
            // a = q * b + r with deg r < deg b
            let (q, r) = poly_div_rem(&a, &b).unwrap();
            prop_assert!(r.degree() < b.degree());
            prop_assert_eq!(&(&q * &b) + &r, a);
        }

        #[test]
        fn karatsuba_matches_schoolbook(
            a in coeff_vec(200),
            b in coeff_vec(200),
            threshold in 2usize..40,
        ) {
            let n = a.len().min(b.len());
            prop_assert_eq!(
                karatsuba_mul_truncated(&a, &b, n, threshold),
                schoolbook_mul_truncated(&a, &b, n)
            );
        }

        #[test]
        fn sparse_matches_schoolbook(a in coeff_vec(60), b in coeff_vec(60)) {
            let n = a.len() + b.len() - 1;
            prop_assert_eq!(
                sparse_mul_truncated(&a, &b, n),
                schoolbook_mul_truncated(&a, &b, n)
            );
        }
    }
}
