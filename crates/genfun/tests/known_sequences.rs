//! End-to-end checks against well-known counting sequences.

use genfun::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rationals(values: &[i64]) -> Vec<Rational> {
    values.iter().map(|&v| Rational::from(v)).collect()
}

fn prefix<T: Ring>(value: Value<T>, n: usize) -> Vec<T> {
    let series = value.into_series(0).expect("value expands");
    series.coeffs()[..n].to_vec()
}

#[test]
fn fibonacci_from_seq() {
    init();
    let ctx = Context::with_defaults(Rational::from(0));
    let z = ctx.variable();
    let a = ctx.add(z.clone(), ctx.mul(z.clone(), z).unwrap()).unwrap();
    let fib = ctx.species_op(Operator::Seq, a, "").unwrap();
    assert_eq!(prefix(fib, 8), rationals(&[1, 1, 2, 3, 5, 8, 13, 21]));
}

#[test]
fn integer_partitions_from_mset() {
    init();
    let ctx = Context::with_defaults(Rational::from(0));
    let ones = ctx.species_op(Operator::Seq, ctx.variable(), ">=1").unwrap();
    let p = ctx.species_op(Operator::Mset, ones, "").unwrap();
    assert_eq!(prefix(p, 10), rationals(&[1, 1, 2, 3, 5, 7, 11, 15, 22, 30]));
}

#[test]
fn derangements_from_labelled_sets() {
    init();
    let ctx = Context::with_defaults(Rational::from(0));
    let cycles = ctx.species_op(Operator::Lcyc, ctx.variable(), ">1").unwrap();
    let d = ctx.species_op(Operator::Lset, cycles, "").unwrap();

    let coeffs = prefix(d, 8);
    let factorials = ctx.factorials();
    let scaled: Vec<Rational> = coeffs
        .iter()
        .enumerate()
        .map(|(i, c)| c.clone() * factorials.factorial(i).unwrap().clone())
        .collect();
    assert_eq!(scaled, rationals(&[1, 0, 1, 2, 9, 44, 265, 1854]));
}

#[test]
fn catalan_from_closed_form() {
    init();
    let ctx = Context::with_defaults(Rational::from(0));
    let one = ctx.scalar(ctx.one());
    let four_z = ctx.mul(ctx.scalar(Rational::from(4)), ctx.variable()).unwrap();
    let root = ctx
        .sub(one.clone(), four_z)
        .unwrap()
        .apply(Transcendental::Sqrt, ctx.config().default_length)
        .unwrap();
    let two_z = ctx.mul(ctx.scalar(Rational::from(2)), ctx.variable()).unwrap();
    let catalan = ctx.div(ctx.sub(one, root).unwrap(), two_z).unwrap();
    assert_eq!(prefix(catalan, 8), rationals(&[1, 1, 2, 5, 14, 42, 132, 429]));
}

#[test]
fn partitions_modulo_a_prime() {
    init();
    let ctx = Context::with_defaults(ModInt::new(0, 998_244_353).unwrap());
    let ones = ctx.species_op(Operator::Seq, ctx.variable(), ">=1").unwrap();
    let p = ctx.species_op(Operator::Mset, ones, "").unwrap();
    let values: Vec<u64> = prefix(p, 10).iter().map(|c| c.value()).collect();
    assert_eq!(values, vec![1, 1, 2, 3, 5, 7, 11, 15, 22, 30]);
}

#[test]
fn partitions_in_doubles() {
    init();
    let ctx = Context::with_defaults(Double(0.0));
    let ones = ctx.species_op(Operator::Seq, ctx.variable(), ">=1").unwrap();
    let p = ctx.species_op(Operator::Mset, ones, "").unwrap();
    let expected = [1.0, 1.0, 2.0, 3.0, 5.0, 7.0, 11.0, 15.0, 22.0, 30.0];
    for (c, e) in prefix(p, 10).iter().zip(expected) {
        assert!(c.approx_eq(Double(e), 1e-10), "{c} vs {e}");
    }
}

#[test]
fn inv_mset_undoes_mset() {
    // INV_MSET(MSET(a)) = a for a = SEQ_{>=1}(z)
    init();
    let ctx = Context::with_defaults(Rational::from(0));
    let ones = ctx.species_op(Operator::Seq, ctx.variable(), ">=1").unwrap();
    let p = ctx.species_op(Operator::Mset, ones.clone(), "").unwrap();
    let back = ctx.species_op(Operator::InvMset, p, "").unwrap();
    assert_eq!(back, ones);
}

#[test]
fn bivariate_parts_counted_by_size_and_number() {
    // MSET over series-of-series: the coefficient of z^n u^k counts
    // partitions of n into k parts.
    init();
    let n = 8;
    let inner_zero = PowerSeries::zero(&Rational::from(0), n);
    let u = PowerSeries::variable(&Rational::from(0), n);
    let ctx = Context::with_defaults(inner_zero.clone());

    // a(z) = u z + u z^2 + u z^3 + ...
    let mut coeffs = vec![inner_zero.clone()];
    coeffs.extend((1..n).map(|_| u.clone()));
    let a = PowerSeries::new(coeffs).unwrap();

    let bag = ctx.species().mset(&a, &Subset::all(n)).unwrap();
    // partitions of 6 into 2 parts: 5+1, 4+2, 3+3
    assert_eq!(*bag.coeffs()[6].coeff(2).unwrap(), Rational::from(3));
    // partitions of 7 into 3 parts: 5+1+1, 4+2+1, 3+3+1, 3+2+2
    assert_eq!(*bag.coeffs()[7].coeff(3).unwrap(), Rational::from(4));
}

#[test]
fn partition_enumerator_matches_counts() {
    let expected = [1, 1, 2, 3, 5, 7, 11, 15, 22, 30];
    for (n, &p) in expected.iter().enumerate() {
        assert_eq!(genfun::species::partition_count(n), p);
    }
}

#[test]
fn errors_cross_the_boundary_typed() {
    init();
    let ctx = Context::with_defaults(ModInt::new(0, 7).unwrap());
    assert!(matches!(ctx.parse("3.5"), Err(GfError::TypeMismatch(_))));
    assert!(matches!(ctx.parse("x"), Err(GfError::Parse(_))));

    let ctx = Context::with_defaults(Rational::from(0));
    let z = ctx.variable();
    assert!(matches!(
        ctx.div(ctx.scalar(ctx.one()), z.clone()).unwrap().into_series(4),
        Err(GfError::NotInvertible(_))
    ));
    assert!(matches!(
        ctx.species_op(Operator::Mset, z, "=>2"),
        Err(GfError::Argument(_))
    ));
}

#[test]
fn configured_length_flows_through() {
    init();
    let dir = std::env::temp_dir().join("genfun-known-sequences");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("genfun.toml");
    std::fs::write(&path, "default_length = 7\nkaratsuba_threshold = 2\n").unwrap();

    let config = KernelConfig::load_from_file(&path).unwrap();
    let ctx = Context::new(Rational::from(0), config);
    let ones = ctx.species_op(Operator::Seq, ctx.variable(), ">=1").unwrap();
    let p = ctx.species_op(Operator::Mset, ones, "").unwrap();
    assert_eq!(p.series_len(), Some(7));
    assert_eq!(prefix(p, 7), rationals(&[1, 1, 2, 3, 5, 7, 11]));
}
