//! Inclusive data-value ranges.
//!
//! A [`DataRange`] narrows a material id to a subset of its data values
//! (`wool:14`, `log:0-3`). Either bound may be `-1`, meaning unspecified.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

/// An inclusive range of data values; `-1` on a bound means "open".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataRange {
    /// Lowest data value, or `-1` for unbounded.
    pub min: i16,
    /// Highest data value, or `-1` for unbounded.
    pub max: i16,
}

impl DataRange {
    /// Sentinel for an unspecified bound.
    pub const OPEN: i16 = -1;

    /// The range that matches every data value.
    pub const WILDCARD: Self = Self {
        min: Self::OPEN,
        max: Self::OPEN,
    };

    /// Creates a range from raw bounds without validation.
    #[must_use]
    pub const fn new(min: i16, max: i16) -> Self {
        Self { min, max }
    }

    /// Creates a range matching exactly one data value.
    #[must_use]
    pub const fn exact(value: i16) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Parses the part after `:` in an item type.
    ///
    /// Accepted forms are `""`, `"a"`, `"a-b"`, `"a-"` and `"-b"`.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidDataRange`] for anything else, and
    /// [`ErrorKind::ReversedDataRange`] when a concrete `max` is below `min`.
    pub fn parse(s: &str) -> Result<Self> {
        let (low, high) = match s.split_once('-') {
            Some((low, high)) => (low, Some(high)),
            None => (s, None),
        };
        if !is_digits(low) || high.is_some_and(|h| !is_digits(h)) {
            return Err(Error::invalid_data_range(s));
        }

        let min = if low.is_empty() {
            Self::OPEN
        } else {
            parse_bound(low, s)?
        };
        let max = match high {
            None => min,
            Some("") => Self::OPEN,
            Some(high) => parse_bound(high, s)?,
        };

        if max != Self::OPEN && max < min {
            return Err(Error::new(ErrorKind::ReversedDataRange { min, max }));
        }
        Ok(Self { min, max })
    }

    /// Returns true if neither bound is specified.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.min == Self::OPEN && self.max == Self::OPEN
    }

    /// Returns true if this is exactly data value 0.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.min == 0 && self.max == 0
    }

    /// Returns true if either concrete bound lies above `limit`.
    #[must_use]
    pub const fn exceeds(&self, limit: i16) -> bool {
        self.min > limit || self.max > limit
    }

    /// Returns the overlap of two ranges, or `None` if they are disjoint.
    #[must_use]
    pub fn intersect(self, other: Self) -> Option<Self> {
        if self.min != Self::OPEN && other.max != Self::OPEN && self.min > other.max {
            return None;
        }
        if self.max != Self::OPEN && other.min != Self::OPEN && self.max < other.min {
            return None;
        }
        Some(Self {
            min: narrow(self.min, other.min, i16::max),
            max: narrow(self.max, other.max, i16::min),
        })
    }
}

impl Default for DataRange {
    fn default() -> Self {
        Self::WILDCARD
    }
}

impl fmt::Display for DataRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Self::OPEN, Self::OPEN) => Ok(()),
            (min, max) if min == max => write!(f, "{min}"),
            (Self::OPEN, max) => write!(f, "-{max}"),
            (min, Self::OPEN) => write!(f, "{min}-"),
            (min, max) => write!(f, "{min}-{max}"),
        }
    }
}

/// Combines two bounds, treating `OPEN` as "no constraint".
fn narrow(a: i16, b: i16, pick: fn(i16, i16) -> i16) -> i16 {
    match (a, b) {
        (DataRange::OPEN, x) | (x, DataRange::OPEN) => x,
        (a, b) => pick(a, b),
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_bound(digits: &str, whole: &str) -> Result<i16> {
    digits
        .parse::<i16>()
        .map_err(|_| Error::invalid_data_range(whole))
}
