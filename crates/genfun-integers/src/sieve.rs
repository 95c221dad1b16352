//! Number-theoretic sieves.
//!
//! Linear sieve producing Euler totient and Möbius tables in one pass.
//! Tables have length `n + 1`; entry 0 is unused and set to zero.

use log::trace;

/// Euler's totient φ(k) for every `k` in `0..=n`.
#[must_use]
pub fn totients(n: usize) -> Vec<u64> {
    sieve(n).0
}

/// The Möbius function μ(k) for every `k` in `0..=n`.
#[must_use]
pub fn mobius(n: usize) -> Vec<i8> {
    sieve(n).1
}

/// Positive divisors of `n` in increasing order (empty for `n == 0`).
#[must_use]
pub fn divisors(n: usize) -> Vec<usize> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1;
    while d * d <= n {
        if n % d == 0 {
            small.push(d);
            if d * d != n {
                large.push(n / d);
            }
        }
        d += 1;
    }
    small.extend(large.into_iter().rev());
    small
}

fn sieve(n: usize) -> (Vec<u64>, Vec<i8>) {
    trace!("sieving totient/mobius up to {n}");

    let mut phi = vec![0u64; n + 1];
    let mut mu = vec![0i8; n + 1];
    let mut composite = vec![false; n + 1];
    let mut primes: Vec<usize> = Vec::new();

    if n >= 1 {
        phi[1] = 1;
        mu[1] = 1;
    }

    for i in 2..=n {
        if !composite[i] {
            primes.push(i);
            phi[i] = i as u64 - 1;
            mu[i] = -1;
        }
        for &p in &primes {
            let ip = i * p;
            if ip > n {
                break;
            }
            composite[ip] = true;
            if i % p == 0 {
                phi[ip] = phi[i] * p as u64;
                mu[ip] = 0;
                break;
            }
            phi[ip] = phi[i] * (p as u64 - 1);
            mu[ip] = -mu[i];
        }
    }

    (phi, mu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totients() {
        assert_eq!(totients(12), vec![0, 1, 1, 2, 2, 4, 2, 6, 4, 6, 4, 10, 4]);
    }

    #[test]
    fn test_mobius() {
        assert_eq!(
            mobius(12),
            vec![0, 1, -1, -1, 0, -1, 1, -1, 0, 0, 1, -1, 0]
        );
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(totients(0), vec![0]);
        assert_eq!(mobius(1), vec![0, 1]);
    }

    #[test]
    fn test_divisors() {
        assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors(1), vec![1]);
        assert_eq!(divisors(49), vec![1, 7, 49]);
        assert!(divisors(0).is_empty());
    }

    #[test]
    fn test_totient_sum_over_divisors() {
        // Σ_{d|n} φ(d) = n
        let phi = totients(60);
        for n in 1..=60 {
            let s: u64 = divisors(n).iter().map(|&d| phi[d]).sum();
            assert_eq!(s, n as u64);
        }
    }
}
