//! Property-based tests for power series arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::power_series::PowerSeries;
    use genfun_integers::{ModInt, Rational};
    use genfun_rings::{Double, Ring};

    fn rational_series(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = PowerSeries<Rational>> {
        proptest::collection::vec((-9i64..10).prop_map(Rational::from), len)
            .prop_map(|c| PowerSeries::from_coeffs(&Rational::from(0), c))
    }

    // Series with zero constant term
    fn rational_series_vanishing(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = PowerSeries<Rational>> {
        rational_series(len).prop_map(|s| {
            let c = s.constant_term().clone();
            s.add_constant(&-c)
        })
    }

    // Bivariate series: coefficients in z are series in u
    fn nested_series() -> impl Strategy<Value = PowerSeries<PowerSeries<Rational>>> {
        proptest::collection::vec(rational_series(4..=4), 1..=6)
            .prop_map(|c| PowerSeries::from_coeffs(&PowerSeries::zero(&Rational::from(0), 4), c))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn mul_length_is_min(a in rational_series(1..=12), b in rational_series(1..=12)) {
            prop_assert_eq!((&a * &b).len(), a.len().min(b.len()));
        }

        #[test]
        fn karatsuba_threshold_does_not_change_products(
            a in rational_series(1..=200),
            b in rational_series(1..=200),
        ) {
            prop_assert_eq!(a.mul_with_threshold(&b, 2), a.mul_with_threshold(&b, usize::MAX));
        }

        #[test]
        fn mul_distributes(a in rational_series(1..=10), b in rational_series(1..=10), c in rational_series(1..=10)) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn inversion_round_trip(a in rational_series(1..=25)) {
            prop_assume!(!a.constant_term().is_zero());
            let inv = a.invert().unwrap();
            prop_assert!(Ring::is_one(&(&a * &inv)));
        }

        #[test]
        fn inversion_round_trip_modular(values in proptest::collection::vec(0i64..998_244_353, 1..=40)) {
            let p = 998_244_353;
            let coeffs: Vec<ModInt> = values.iter().map(|&v| ModInt::new(v, p).unwrap()).collect();
            let a = PowerSeries::new(coeffs).unwrap();
            prop_assume!(!a.constant_term().is_zero());
            prop_assert!(Ring::is_one(&(&a * &a.invert().unwrap())));
        }

        #[test]
        fn exp_log_identities(a in rational_series_vanishing(1..=10)) {
            prop_assert_eq!(a.exp().unwrap().log().unwrap(), a.clone());
            let one_plus_a = a.add_constant(&Rational::from(1));
            prop_assert_eq!(one_plus_a.log().unwrap().exp().unwrap(), one_plus_a);
        }

        #[test]
        fn exp_log_identities_double(values in proptest::collection::vec(-1.0f64..1.0, 1..=10)) {
            let mut coeffs: Vec<Double> = values.into_iter().map(Double).collect();
            coeffs[0] = Double(0.0);
            let a = PowerSeries::new(coeffs).unwrap();
            let back = a.exp().unwrap().log().unwrap();
            for (x, y) in back.coeffs().iter().zip(a.coeffs()) {
                prop_assert!(x.approx_eq(*y, 1e-10), "{} vs {}", x, y);
            }
        }

        #[test]
        fn substitute_exponent_matches_composition(a in rational_series(1..=12), k in 1usize..4) {
            // a(z^k) equals composing with the monomial z^k
            let n = a.len();
            let zk = if k < n {
                PowerSeries::atom(Rational::from(1), k, n).unwrap()
            } else {
                PowerSeries::zero(&Rational::from(0), n)
            };
            prop_assert_eq!(a.substitute_exponent(k).unwrap(), a.substitute(&zk).unwrap());
        }

        #[test]
        fn nested_series_distributes(
            a in nested_series(),
            b in nested_series(),
            c in nested_series(),
        ) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
            prop_assert_eq!(&a + &a.zero_like(), a.clone());
            prop_assert_eq!(&a * &a.one_like(), a);
        }
    }
}
