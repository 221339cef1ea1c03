//! The partition value type.

use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;

/// Inline storage for partition parts.
pub type Parts = SmallVec<[u32; 8]>;

/// Errors raised when a sequence is not a partition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// A part is larger than the one before it.
    #[error("parts must be weakly decreasing, but part {index} ({value}) exceeds its predecessor")]
    NotDecreasing {
        /// 0-based position of the offending part.
        index: usize,
        /// The offending part.
        value: i64,
    },

    /// A part is negative.
    #[error("parts must be non-negative, but part {index} is {value}")]
    NegativePart {
        /// 0-based position of the offending part.
        index: usize,
        /// The offending part.
        value: i64,
    },

    /// A part does not fit the part type.
    #[error("part {index} ({value}) is too large")]
    PartTooLarge {
        /// 0-based position of the offending part.
        index: usize,
        /// The offending part.
        value: i64,
    },
}

/// An integer partition `λ₁ ≥ λ₂ ≥ … ≥ λₗ > 0`.
///
/// Trailing zeros are never stored. The derived ordering is lexicographic on
/// the parts.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Partition(Parts);

impl Partition {
    /// Creates a partition, dropping trailing zeros.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::NotDecreasing`] if a part exceeds its
    /// predecessor (a zero followed by a positive part counts).
    pub fn new(parts: &[u32]) -> Result<Self, PartitionError> {
        if let Some(index) = parts.windows(2).position(|w| w[0] < w[1]) {
            return Err(PartitionError::NotDecreasing {
                index: index + 1,
                value: i64::from(parts[index + 1]),
            });
        }

        let len = parts.iter().rposition(|&p| p > 0).map_or(0, |i| i + 1);
        Ok(Self(SmallVec::from_slice(&parts[..len])))
    }

    /// The empty partition of 0.
    #[must_use]
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    /// Wraps parts already known to form a partition.
    pub(crate) fn from_parts_unchecked(parts: Parts) -> Self {
        debug_assert!(parts.windows(2).all(|w| w[0] >= w[1]));
        debug_assert!(parts.last().map_or(true, |&p| p > 0));
        Self(parts)
    }

    /// Returns the parts.
    #[must_use]
    pub fn parts(&self) -> &[u32] {
        &self.0
    }

    /// Returns part `i` (0-based), or 0 beyond the length.
    #[must_use]
    pub fn part(&self, i: usize) -> u32 {
        self.0.get(i).copied().unwrap_or(0)
    }

    /// Returns the largest part, 0 for the empty partition.
    #[must_use]
    pub fn first(&self) -> u32 {
        self.part(0)
    }

    /// Returns the number of (positive) parts, `l(λ)`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty partition.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the size `|λ| = Σλᵢ`.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Returns the number of parts that are at least `s`.
    #[must_use]
    pub fn count_at_least(&self, s: u32) -> u32 {
        // Parts are sorted, so this is a partition point.
        let n = self.0.partition_point(|&p| p >= s);
        u32::try_from(n).unwrap_or(u32::MAX)
    }

    /// Returns the conjugate partition `λ′`, with `λ′ⱼ = |{i : λᵢ ≥ j}|`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self((1..=self.first()).map(|j| self.count_at_least(j)).collect())
    }

    /// Returns true if a box can be removed from row `i` (0-based) leaving a
    /// partition, i.e. row `i` is the last row or strictly longer than the
    /// next one.
    #[must_use]
    pub fn is_removable(&self, i: usize) -> bool {
        i < self.len() && (i + 1 == self.len() || self.0[i] > self.0[i + 1])
    }

    /// Returns a new partition with one box removed from row `i` (0-based),
    /// or `None` if that row is not a removable corner.
    #[must_use]
    pub fn remove_box(&self, i: usize) -> Option<Self> {
        if !self.is_removable(i) {
            return None;
        }
        let mut parts = self.0.clone();
        parts[i] -= 1;
        if parts[i] == 0 {
            parts.pop();
        }
        Some(Self::from_parts_unchecked(parts))
    }

    /// Iterates over the cells `(i, j)` of the Young diagram in row-major
    /// order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(i, &row)| (0..row).map(move |j| (i, j)))
    }
}

impl TryFrom<&[i64]> for Partition {
    type Error = PartitionError;

    fn try_from(parts: &[i64]) -> Result<Self, Self::Error> {
        let converted = parts
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                if value < 0 {
                    Err(PartitionError::NegativePart { index, value })
                } else {
                    u32::try_from(value).map_err(|_| PartitionError::PartTooLarge { index, value })
                }
            })
            .collect::<Result<Vec<u32>, _>>()?;
        Self::new(&converted)
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}
