//! Integer partitions as (part size, multiplicity) pairs.
//!
//! Partitions are produced by recursive descent on the largest admissible
//! part size, and handed to a callback one at a time so that cycle-index
//! sums never materialize the whole partition list.

use genfun_core::Result;
use genfun_integers::Integer;
use genfun_rings::{Factorials, Ring};
use smallvec::SmallVec;

/// One part size together with how often it occurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PartitionCount {
    /// The part size (cycle length).
    pub size: usize,
    /// How many parts of this size.
    pub multiplicity: usize,
}

/// A partition: part sizes strictly decreasing.
pub type Partition = SmallVec<[PartitionCount; 8]>;

/// Calls `f` once for every partition of `n`, largest parts first.
///
/// `n = 0` has exactly one partition, the empty one.
pub fn for_each_partition(n: usize, mut f: impl FnMut(&[PartitionCount])) {
    let mut stack = Partition::new();
    descend(n, n, &mut stack, &mut f);
}

fn descend(
    remaining: usize,
    max_part: usize,
    stack: &mut Partition,
    f: &mut impl FnMut(&[PartitionCount]),
) {
    if remaining == 0 {
        f(stack);
        return;
    }
    if max_part == 0 {
        return;
    }

    let size = max_part.min(remaining);
    for multiplicity in 1..=remaining / size {
        stack.push(PartitionCount { size, multiplicity });
        descend(remaining - size * multiplicity, size - 1, stack, f);
        stack.pop();
    }
    descend(remaining, size - 1, stack, f);
}

/// All partitions of `n`.
#[must_use]
pub fn partitions(n: usize) -> Vec<Partition> {
    let mut out = Vec::new();
    for_each_partition(n, |p| out.push(Partition::from_slice(p)));
    out
}

/// Number of partitions of `n`, by enumeration.
#[must_use]
pub fn partition_count(n: usize) -> usize {
    let mut count = 0;
    for_each_partition(n, |_| count += 1);
    count
}

/// Sum of `size * multiplicity` over the parts.
#[must_use]
pub fn partition_total(partition: &[PartitionCount]) -> usize {
    partition.iter().map(|p| p.size * p.multiplicity).sum()
}

/// Sign of any permutation with this cycle type.
///
/// Each even cycle length occurring an odd number of times flips it.
#[must_use]
pub fn partition_sign(partition: &[PartitionCount]) -> i64 {
    let flips = partition
        .iter()
        .filter(|p| p.size % 2 == 0 && p.multiplicity % 2 == 1)
        .count();
    if flips % 2 == 0 {
        1
    } else {
        -1
    }
}

/// Size of the conjugacy class in `S_n`: `n! / prod(m_i! * s_i^m_i)`.
#[must_use]
pub fn class_size(partition: &[PartitionCount]) -> Integer {
    let n = partition_total(partition);
    let denominator = partition.iter().fold(Integer::from(1i64), |acc, p| {
        let mult = u32::try_from(p.multiplicity).unwrap_or(u32::MAX);
        acc * Integer::factorial(p.multiplicity as u64)
            * Integer::from(p.size as u64).pow(mult)
    });
    &Integer::factorial(n as u64) / &denominator
}

/// The weight `class_size / n! = 1 / prod(m_i! * s_i^m_i)` in the ring of
/// `factorials`.
///
/// # Errors
///
/// [`GfError::Range`](genfun_core::GfError::Range) if a multiplicity is past
/// the factorial table, [`GfError::NotInvertible`](genfun_core::GfError::NotInvertible)
/// if a part size is not a unit.
pub fn class_weight<T: Ring>(partition: &[PartitionCount], factorials: &Factorials<T>) -> Result<T> {
    let mut weight = factorials.inverse_factorial(0)?.clone();
    for p in partition {
        let inv_size = weight.from_i64_like(to_i64(p.size)?).try_inv()?;
        let mult = u32::try_from(p.multiplicity)
            .map_err(|_| genfun_core::GfError::range("partition multiplicity too large"))?;
        weight = weight
            * factorials.inverse_factorial(p.multiplicity)?.clone()
            * inv_size.pow(mult);
    }
    Ok(weight)
}

pub(crate) fn to_i64(n: usize) -> Result<i64> {
    i64::try_from(n).map_err(|_| genfun_core::GfError::range(format!("{n} does not fit in i64")))
}
