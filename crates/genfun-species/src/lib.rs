//! # genfun-species
//!
//! The combinatorial layer of the genfun kernel: generating functions of
//! unlabelled and labelled structures by the symbolic method.
//!
//! This crate provides:
//! - A recursive integer-partition enumerator ([`for_each_partition`])
//! - Symmetric, alternating and cyclic cycle indices evaluated at series
//! - The subset mini-language restricting component counts ([`Subset`])
//! - The operators SEQ, MSET, PSET, CYC, LSET, LCYC and INV_MSET
//!   ([`SymbolicMethod`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cycle_index;
pub mod operators;
pub mod partition;
pub mod subset;

#[cfg(test)]
mod proptests;

pub use operators::{Operator, SymbolicMethod};
pub use partition::{for_each_partition, partition_count, partitions, PartitionCount};
pub use subset::{Subset, SubsetKind};
