//! Truncated multiplication kernels.
//!
//! Every kernel computes the first `n` coefficients of the product of two
//! coefficient slices and returns exactly `n` values. Karatsuba and the
//! sparse path are pure speedups over the schoolbook convolution and
//! produce identical results.

use genfun_rings::traits::Ring;
use log::trace;

/// Default length at which Karatsuba takes over from schoolbook.
pub const KARATSUBA_THRESHOLD: usize = 100;

/// Which kernel [`mul_truncated`] chose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MulKernel {
    /// Direct O(n²) convolution.
    Schoolbook,
    /// Convolution driven by the nonzero entries of the sparser operand.
    Sparse,
    /// Midpoint-split divide and conquer.
    Karatsuba,
}

/// Picks a kernel for operands of the given shape.
///
/// Sparse wins when at least half of the shorter operand's coefficients
/// are zero.
#[must_use]
pub fn select_kernel<R: Ring>(a: &[R], b: &[R], n: usize, threshold: usize) -> MulKernel {
    let zeros_a = count_zeros(a, n);
    let zeros_b = count_zeros(b, n);
    let len = a.len().min(b.len()).min(n);

    if 2 * zeros_a.max(zeros_b) >= len && len > 0 {
        MulKernel::Sparse
    } else if len >= threshold.max(2) {
        MulKernel::Karatsuba
    } else {
        MulKernel::Schoolbook
    }
}

/// Multiplies `a` and `b` modulo `z^n`, choosing a kernel automatically.
///
/// Both slices must be non-empty; their first element supplies the zero.
#[must_use]
pub fn mul_truncated<R: Ring>(a: &[R], b: &[R], n: usize, threshold: usize) -> Vec<R> {
    if n == 0 {
        return Vec::new();
    }
    match select_kernel(a, b, n, threshold) {
        MulKernel::Sparse => sparse_mul_truncated(a, b, n),
        MulKernel::Karatsuba => karatsuba_mul_truncated(a, b, n, threshold),
        MulKernel::Schoolbook => schoolbook_mul_truncated(a, b, n),
    }
}

/// Full product `a * b` of length `len(a) + len(b) - 1`.
#[must_use]
pub fn mul_full<R: Ring>(a: &[R], b: &[R], threshold: usize) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    mul_truncated(a, b, a.len() + b.len() - 1, threshold)
}

/// Schoolbook multiplication modulo `z^n`: O(n²).
#[must_use]
pub fn schoolbook_mul_truncated<R: Ring>(a: &[R], b: &[R], n: usize) -> Vec<R> {
    let Some(zero) = sample_zero(a, b) else {
        return Vec::new();
    };
    let mut result = vec![zero; n];

    for (i, x) in a.iter().enumerate().take(n) {
        for (j, y) in b.iter().enumerate().take(n - i) {
            result[i + j] = result[i + j].clone() + x.clone() * y.clone();
        }
    }

    result
}

/// Schoolbook multiplication that iterates the sparser operand on the
/// outside and skips its zero coefficients.
#[must_use]
pub fn sparse_mul_truncated<R: Ring>(a: &[R], b: &[R], n: usize) -> Vec<R> {
    let Some(zero) = sample_zero(a, b) else {
        return Vec::new();
    };
    let (outer, inner) = if count_zeros(a, n) >= count_zeros(b, n) {
        (a, b)
    } else {
        (b, a)
    };
    let mut result = vec![zero; n];

    for (i, x) in outer.iter().enumerate().take(n) {
        if x.is_zero() {
            continue;
        }
        for (j, y) in inner.iter().enumerate().take(n - i) {
            result[i + j] = result[i + j].clone() + x.clone() * y.clone();
        }
    }

    result
}

/// Karatsuba multiplication modulo `z^n`.
///
/// Operands are split at the midpoint of the longer one; the high half
/// products are only requested up to the truncation length, so no
/// coefficient at or past `n` is ever formed.
#[must_use]
pub fn karatsuba_mul_truncated<R: Ring>(a: &[R], b: &[R], n: usize, threshold: usize) -> Vec<R> {
    let Some(zero) = sample_zero(a, b) else {
        return Vec::new();
    };
    karatsuba_rec(a, b, n, threshold.max(2), &zero)
}

fn karatsuba_rec<R: Ring>(a: &[R], b: &[R], n: usize, threshold: usize, zero: &R) -> Vec<R> {
    let a = &a[..a.len().min(n)];
    let b = &b[..b.len().min(n)];

    if a.len() < threshold || b.len() < threshold {
        return schoolbook_mul_truncated(a, b, n);
    }

    let size = a.len().max(b.len());
    let half = size.div_ceil(2);
    trace!("karatsuba split: size={size} half={half} n={n}");

    let mut a_ext = a.to_vec();
    let mut b_ext = b.to_vec();
    a_ext.resize(2 * half, zero.clone());
    b_ext.resize(2 * half, zero.clone());

    // a = a0 + a1*z^half, b = b0 + b1*z^half
    let (a0, a1) = a_ext.split_at(half);
    let (b0, b1) = b_ext.split_at(half);

    let low = karatsuba_rec(a0, b0, n, threshold, zero);
    if n <= half {
        return low;
    }

    let m = n - half;
    let high = karatsuba_rec(a1, b1, m, threshold, zero);

    let a01: Vec<R> = a0.iter().zip(a1).map(|(x, y)| x.clone() + y.clone()).collect();
    let b01: Vec<R> = b0.iter().zip(b1).map(|(x, y)| x.clone() + y.clone()).collect();
    let mid = karatsuba_rec(&a01, &b01, m, threshold, zero);

    let mut result = low.clone();
    for i in 0..m {
        let cross = mid[i].clone() - low[i].clone() - high[i].clone();
        result[half + i] = result[half + i].clone() + cross;
    }
    for i in 0..n.saturating_sub(2 * half) {
        result[2 * half + i] = result[2 * half + i].clone() + high[i].clone();
    }

    result
}

fn count_zeros<R: Ring>(coeffs: &[R], n: usize) -> usize {
    coeffs.iter().take(n).filter(|c| c.is_zero()).count()
}

fn sample_zero<R: Ring>(a: &[R], b: &[R]) -> Option<R> {
    a.first().or_else(|| b.first()).map(Ring::zero_like)
}

#[cfg(test)]
mod tests {
    use super::*;
    use genfun_integers::Rational;

    fn q(n: i64) -> Rational {
        Rational::from(n)
    }

    #[test]
    fn test_schoolbook() {
        let a = vec![q(1), q(2)]; // 1 + 2z
        let b = vec![q(3), q(4)]; // 3 + 4z

        let c = schoolbook_mul_truncated(&a, &b, 3);
        // (1 + 2z)(3 + 4z) = 3 + 10z + 8z^2
        assert_eq!(c, vec![q(3), q(10), q(8)]);

        let t = schoolbook_mul_truncated(&a, &b, 2);
        assert_eq!(t, vec![q(3), q(10)]);
    }

    #[test]
    fn test_padding_past_product() {
        let c = schoolbook_mul_truncated(&[q(2)], &[q(3)], 4);
        assert_eq!(c, vec![q(6), q(0), q(0), q(0)]);
    }

    #[test]
    fn test_sparse_matches_schoolbook() {
        let a: Vec<Rational> = (0..30).map(|i| if i % 5 == 0 { q(i + 1) } else { q(0) }).collect();
        let b: Vec<Rational> = (0..30).map(|i| q(i - 7)).collect();

        assert_eq!(select_kernel(&a, &b, 30, 100), MulKernel::Sparse);
        assert_eq!(
            sparse_mul_truncated(&a, &b, 30),
            schoolbook_mul_truncated(&a, &b, 30)
        );
    }

    #[test]
    fn test_karatsuba_large() {
        // Create larger operands to trigger Karatsuba
        let n = 150;
        let a: Vec<Rational> = (0..n).map(|i| q(i + 1)).collect();
        let b: Vec<Rational> = (0..n).map(|i| q(n - i)).collect();
        let len = usize::try_from(n).unwrap();

        let school = schoolbook_mul_truncated(&a, &b, len);
        let kara = karatsuba_mul_truncated(&a, &b, len, 8);

        assert_eq!(school.len(), kara.len());
        for i in 0..school.len() {
            assert_eq!(school[i], kara[i], "mismatch at index {i}");
        }
    }

    #[test]
    fn test_karatsuba_uneven_lengths() {
        let a: Vec<Rational> = (0..37).map(|i| q(i * i - 3)).collect();
        let b: Vec<Rational> = (0..11).map(|i| q(2 * i + 1)).collect();

        assert_eq!(mul_full(&a, &b, 2), schoolbook_mul_truncated(&a, &b, 47));
    }

    #[test]
    fn test_empty_truncation() {
        assert!(mul_truncated(&[q(1)], &[q(1)], 0, 100).is_empty());
    }
}
