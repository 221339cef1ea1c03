//! # jackpoly-partitions
//!
//! Integer partitions for jackpoly.
//!
//! This crate provides:
//! - [`Partition`], an immutable weakly decreasing sequence of positive
//!   parts with copy-on-decrement box removal
//! - [`RankIndexer`], the mixed-radix map from sub-partitions of a fixed
//!   outer partition to dense memo-table rows
//! - [`partitions_of`], enumeration of all partitions of an integer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod enumerate;
pub mod partition;
pub mod rank;

#[cfg(test)]
mod proptests;

pub use enumerate::{partitions_of, Partitions};
pub use partition::{Partition, PartitionError};
pub use rank::RankIndexer;
