use std::cmp::Ordering;
use std::fmt;

const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// An inclusive interval of Unicode code points.
///
/// The default string formatter is returning the XML grammar notation:
/// ```
/// use xmlchars::CodePointRange;
///
/// assert_eq!(CodePointRange::new(0x41, 0x5A).to_string(), "[#x41-#x5A]");
/// assert_eq!(CodePointRange::single(0x3A).to_string(), "#x3A");
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct CodePointRange {
    low: u32,
    high: u32,
}

impl CodePointRange {
    /// Builds the interval `[low, high]`.
    ///
    /// Panics if `low > high` or if `high` is not a Unicode code point.
    /// When used in a constant this is a compilation error.
    #[inline]
    pub const fn new(low: u32, high: u32) -> Self {
        assert!(low <= high, "Inverted code point range");
        assert!(high <= MAX_CODE_POINT, "Code point range above U+10FFFF");
        Self { low, high }
    }

    /// Builds the interval containing only `code_point`.
    #[inline]
    pub const fn single(code_point: u32) -> Self {
        Self::new(code_point, code_point)
    }

    #[inline]
    pub const fn low(self) -> u32 {
        self.low
    }

    #[inline]
    pub const fn high(self) -> u32 {
        self.high
    }

    #[inline]
    pub const fn contains(self, code_point: u32) -> bool {
        self.low <= code_point && code_point <= self.high
    }
}

impl fmt::Display for CodePointRange {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.low == self.high {
            write!(f, "#x{:X}", self.low)
        } else {
            write!(f, "[#x{:X}-#x{:X}]", self.low, self.high)
        }
    }
}

/// The ranges of code points allowed by a grammar production.
///
/// The ranges are sorted in ascending order and disjoint so that membership is a binary search.
/// This is checked by [`RangeSet::new`] that is meant to be evaluated in a constant:
/// a malformed table does not compile.
///
/// ```
/// use xmlchars::{CodePointRange, RangeSet};
///
/// const DIGITS: RangeSet = RangeSet::new(&[CodePointRange::new(0x30, 0x39)]);
/// assert!(DIGITS.contains(u32::from('7')));
/// assert!(!DIGITS.contains(u32::from('a')));
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct RangeSet {
    ranges: &'static [CodePointRange],
}

impl RangeSet {
    /// Panics if `ranges` is empty, not sorted or if some ranges overlap.
    pub const fn new(ranges: &'static [CodePointRange]) -> Self {
        assert!(!ranges.is_empty(), "Empty code point range set");
        let mut i = 1;
        while i < ranges.len() {
            assert!(
                ranges[i - 1].high < ranges[i].low,
                "Code point ranges must be sorted and disjoint"
            );
            i += 1;
        }
        Self { ranges }
    }

    #[inline]
    pub const fn ranges(&self) -> &'static [CodePointRange] {
        self.ranges
    }

    #[inline]
    pub fn contains(&self, code_point: u32) -> bool {
        self.ranges
            .binary_search_by(|range| {
                if range.high < code_point {
                    Ordering::Less
                } else if range.low > code_point {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }
}

/// A union of [`RangeSet`]s.
///
/// It allows to reuse the 4th edition tables (`Letter ::= BaseChar | Ideographic`...)
/// without merging them.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct CharClass {
    sets: &'static [RangeSet],
}

impl CharClass {
    /// Panics if `sets` is empty.
    pub const fn new(sets: &'static [RangeSet]) -> Self {
        assert!(!sets.is_empty(), "Empty character class");
        Self { sets }
    }

    #[inline]
    pub const fn sets(&self) -> &'static [RangeSet] {
        self.sets
    }

    #[inline]
    pub fn contains(&self, code_point: u32) -> bool {
        self.sets.iter().any(|set| set.contains(code_point))
    }

    /// Iterates over the ranges of all the member sets.
    pub fn ranges(&self) -> impl Iterator<Item = CodePointRange> + use<> {
        let sets = self.sets;
        sets.iter().flat_map(|set| set.ranges().iter().copied())
    }
}
