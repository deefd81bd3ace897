//! Residue range type
//!
//! Both UniProt and structural numbering are 1-based and inclusive at both
//! ends. [`ResidueRange`] makes that explicit and gives the translator a
//! single place for the boundary arithmetic.
//!
//! # Examples
//!
//! ```
//! use ferro_sifts::coords::ResidueRange;
//!
//! let request = ResidueRange::new(12, 30).unwrap();
//! let segment = ResidueRange::from_bounds(10, 20).unwrap();
//!
//! let overlap = request.intersect(&segment).unwrap();
//! assert_eq!((overlap.start(), overlap.end()), (12, 20));
//! assert_eq!(overlap.len(), 9);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PositionMappingError;

/// A 1-based closed range `[start, end]` of residue positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResidueRange {
    start: i64,
    end: i64,
}

impl ResidueRange {
    /// Create a range from a caller request.
    ///
    /// Rejects non-positive bounds and `start > end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_sifts::coords::ResidueRange;
    ///
    /// assert!(ResidueRange::new(1, 1).is_ok());
    /// assert!(ResidueRange::new(0, 5).is_err());
    /// assert!(ResidueRange::new(9, 3).is_err());
    /// ```
    pub fn new(start: i64, end: i64) -> Result<Self, PositionMappingError> {
        if start < 1 || end < 1 {
            return Err(PositionMappingError::InvalidRange {
                start,
                end,
                msg: "positions must be positive".to_string(),
            });
        }
        if start > end {
            return Err(PositionMappingError::InvalidRange {
                start,
                end,
                msg: "start is greater than end".to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Create a range from segment bounds.
    ///
    /// Segment bounds are not required to be positive; returns None only
    /// when the bounds are inverted.
    pub fn from_bounds(start: i64, end: i64) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// First position (inclusive)
    #[inline]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Last position (inclusive)
    #[inline]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Number of positions covered, saturating at `i64::MAX`
    #[inline]
    pub const fn len(&self) -> i64 {
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    /// Always false; a closed range holds at least one position
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Check whether a position falls inside this range
    #[inline]
    pub const fn contains(&self, pos: i64) -> bool {
        pos >= self.start && pos <= self.end
    }

    /// Check whether two ranges share at least one position
    pub fn overlaps(&self, other: &ResidueRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Intersection of two ranges, or None if they are disjoint
    pub fn intersect(&self, other: &ResidueRange) -> Option<ResidueRange> {
        Self::from_bounds(self.start.max(other.start), self.end.min(other.end))
    }
}

impl fmt::Display for ResidueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
