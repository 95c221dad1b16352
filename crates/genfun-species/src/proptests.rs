//! Property-based tests for the partition enumerator and species operators.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::sync::Arc;

    use crate::operators::SymbolicMethod;
    use crate::partition::{for_each_partition, partition_total};
    use crate::subset::Subset;
    use genfun_integers::Rational;
    use genfun_rings::Factorials;
    use genfun_series::PowerSeries;

    const N: usize = 8;

    fn ops() -> SymbolicMethod<Rational> {
        SymbolicMethod::new(Arc::new(Factorials::new(&Rational::from(0), 32)), 100)
    }

    // Series with zero constant term and small non-negative coefficients
    fn shape() -> impl Strategy<Value = PowerSeries<Rational>> {
        proptest::collection::vec(0i64..4, N - 1).prop_map(|tail| {
            let mut coeffs = vec![Rational::from(0)];
            coeffs.extend(tail.into_iter().map(Rational::from));
            PowerSeries::new(coeffs).unwrap()
        })
    }

    fn split_point() -> impl Strategy<Value = usize> {
        0usize..N
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn partitions_sum_to_n(n in 0usize..16) {
            let mut ok = true;
            for_each_partition(n, |p| ok &= partition_total(p) == n);
            prop_assert!(ok);
        }

        #[test]
        fn mset_subsets_partition_the_complete_form(a in shape(), k in split_point()) {
            let ops = ops();
            let below = ops.mset(&a, &Subset::parse(&format!("<{k}"), N).unwrap()).unwrap();
            let above = ops.mset(&a, &Subset::parse(&format!(">={k}"), N).unwrap()).unwrap();
            let all = ops.mset(&a, &Subset::all(N)).unwrap();
            prop_assert_eq!(&below + &above, all);
        }

        #[test]
        fn cyc_subsets_partition_the_complete_form(a in shape(), k in split_point()) {
            let ops = ops();
            let listed = ops.cyc(&a, &Subset::parse(&format!("{{{k}}}"), N).unwrap()).unwrap();
            let rest = ops.cyc(&a, &Subset::parse(&format!("~{{{k}}}"), N).unwrap()).unwrap();
            let all = ops.cyc(&a, &Subset::all(N)).unwrap();
            prop_assert_eq!(&listed + &rest, all);
        }

        #[test]
        fn labelled_subsets_partition_the_complete_form(a in shape(), k in split_point()) {
            let ops = ops();
            let low = ops.lset(&a, &Subset::parse(&format!("<={k}"), N).unwrap()).unwrap();
            let high = ops.lset(&a, &Subset::parse(&format!(">{k}"), N).unwrap()).unwrap();
            prop_assert_eq!(&low + &high, ops.lset(&a, &Subset::all(N)).unwrap());

            let low = ops.lcyc(&a, &Subset::parse(&format!("<={k}"), N).unwrap()).unwrap();
            let high = ops.lcyc(&a, &Subset::parse(&format!(">{k}"), N).unwrap()).unwrap();
            prop_assert_eq!(&low + &high, ops.lcyc(&a, &Subset::all(N)).unwrap());
        }

        #[test]
        fn inv_mset_inverts_mset(a in shape()) {
            let ops = ops();
            let m = ops.mset(&a, &Subset::all(N)).unwrap();
            prop_assert_eq!(ops.inv_mset(&m).unwrap(), a);
        }

        #[test]
        fn seq_matches_geometric_sum(a in shape()) {
            // 1 / (1 - a) = sum_{k < N} a^k when a(0) = 0
            let ops = ops();
            let complete = ops.seq(&a, &Subset::all(N)).unwrap();
            let direct = ops.seq(&a, &Subset::parse("<100", N).unwrap()).unwrap();
            prop_assert_eq!(complete, direct);
        }
    }
}
