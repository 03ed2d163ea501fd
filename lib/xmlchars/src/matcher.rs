use crate::ranges::CharClass;

/// A whole-input matcher for an XML production.
///
/// It behaves like a regular expression anchored at both ends: the full input must match.
/// Astral characters count as a single character.
///
/// ```
/// use xmlchars::{Production, xml_1_0};
///
/// let char = xml_1_0::ED5.matcher(Production::Char).unwrap();
/// assert!(char.is_match("\u{1F4A9}"));
/// assert!(!char.is_match("ab"));
/// assert!(!char.is_match(""));
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Matcher {
    /// Exactly one character of the class.
    Char(CharClass),
    /// A character of `start` followed by any number of characters of `rest`.
    Name {
        /// The class of the first character.
        start: CharClass,
        /// The class of the following characters.
        rest: CharClass,
    },
    /// One or more characters of the class.
    Nmtoken(CharClass),
}

impl Matcher {
    /// Checks if the full `input` matches.
    #[inline]
    pub fn is_match(&self, input: &str) -> bool {
        self.is_match_code_points(input.chars().map(u32::from))
    }

    /// Checks if the full sequence of code points matches.
    ///
    /// Values that are not Unicode scalar values never match.
    pub fn is_match_code_points(&self, input: impl IntoIterator<Item = u32>) -> bool {
        let mut input = input.into_iter();
        match self {
            Self::Char(class) => {
                input.next().is_some_and(|c| class.contains(c)) && input.next().is_none()
            }
            Self::Name { start, rest } => {
                input.next().is_some_and(|c| start.contains(c)) && input.all(|c| rest.contains(c))
            }
            Self::Nmtoken(class) => {
                input.next().is_some_and(|c| class.contains(c)) && input.all(|c| class.contains(c))
            }
        }
    }

    /// Like [`is_match`](Self::is_match) but explains why the input does not match.
    ///
    /// ```
    /// use xmlchars::{Mismatch, Production, xml_1_0};
    ///
    /// let name = xml_1_0::ED5.matcher(Production::Name).unwrap();
    /// assert_eq!(name.check("foo"), Ok(()));
    /// assert_eq!(
    ///     name.check("foo bar"),
    ///     Err(Mismatch::InvalidChar {
    ///         offset: 3,
    ///         character: ' '
    ///     })
    /// );
    /// ```
    pub fn check(&self, input: &str) -> Result<(), Mismatch> {
        let (start, rest) = match self {
            Self::Char(class) => (class, None),
            Self::Name { start, rest } => (start, Some(rest)),
            Self::Nmtoken(class) => (class, Some(class)),
        };
        let mut chars = input.char_indices();
        let (offset, character) = chars.next().ok_or(Mismatch::Empty)?;
        if !start.contains(character.into()) {
            return Err(Mismatch::InvalidChar { offset, character });
        }
        let Some(rest) = rest else {
            return match chars.next() {
                Some((offset, character)) => Err(Mismatch::TrailingChar { offset, character }),
                None => Ok(()),
            };
        };
        for (offset, character) in chars {
            if !rest.contains(character.into()) {
                return Err(Mismatch::InvalidChar { offset, character });
            }
        }
        Ok(())
    }

    /// The character class of a single character production.
    ///
    /// Returns `None` for `Name` and `Nmtoken`.
    #[inline]
    pub fn class(&self) -> Option<CharClass> {
        match self {
            Self::Char(class) => Some(*class),
            Self::Name { .. } | Self::Nmtoken(_) => None,
        }
    }
}

/// The reason why an input does not match a [`Matcher`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum Mismatch {
    /// No production matches the empty string.
    #[error("The input is empty")]
    Empty,
    /// A character is not allowed at this position.
    #[error("Unexpected character {character:?} at byte {offset}")]
    InvalidChar {
        /// Position of the character in the input, in bytes.
        offset: usize,
        /// The offending character.
        character: char,
    },
    /// A single character production got a longer input.
    #[error("Unexpected character {character:?} at byte {offset}, a single character is expected")]
    TrailingChar {
        /// Position of the first extra character in the input, in bytes.
        offset: usize,
        /// The offending character.
        character: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::{CodePointRange, RangeSet};

    const LOWER: RangeSet = RangeSet::new(&[CodePointRange::new(0x61, 0x7A)]);
    const DIGITS: RangeSet = RangeSet::new(&[CodePointRange::new(0x30, 0x39)]);
    const START: CharClass = CharClass::new(&[LOWER]);
    const REST: CharClass = CharClass::new(&[LOWER, DIGITS]);

    #[test]
    fn single_char() {
        let matcher = Matcher::Char(START);
        assert!(matcher.is_match("a"));
        assert!(!matcher.is_match(""));
        assert!(!matcher.is_match("ab"));
        assert!(!matcher.is_match("1"));
        assert_eq!(matcher.check(""), Err(Mismatch::Empty));
        assert_eq!(
            matcher.check("ab"),
            Err(Mismatch::TrailingChar {
                offset: 1,
                character: 'b'
            })
        );
    }

    #[test]
    fn name() {
        let matcher = Matcher::Name {
            start: START,
            rest: REST,
        };
        assert!(matcher.is_match("a1"));
        assert!(!matcher.is_match("1a"));
        assert!(!matcher.is_match(""));
        assert_eq!(
            matcher.check("1a"),
            Err(Mismatch::InvalidChar {
                offset: 0,
                character: '1'
            })
        );
        assert_eq!(
            matcher.check("ab-c"),
            Err(Mismatch::InvalidChar {
                offset: 2,
                character: '-'
            })
        );
    }

    #[test]
    fn nmtoken() {
        let matcher = Matcher::Nmtoken(REST);
        assert!(matcher.is_match("1a"));
        assert!(matcher.is_match("9"));
        assert!(!matcher.is_match(""));
        assert!(!matcher.is_match("a b"));
        assert_eq!(matcher.check("12"), Ok(()));
    }

    #[test]
    fn invalid_code_points() {
        let matcher = Matcher::Nmtoken(REST);
        assert!(matcher.is_match_code_points([0x61, 0x31]));
        assert!(!matcher.is_match_code_points([0x61, 0xD800]));
        assert!(!matcher.is_match_code_points([0x11_0061]));
        assert!(!matcher.is_match_code_points(std::iter::empty()));
    }

    #[test]
    fn class() {
        assert_eq!(Matcher::Char(START).class(), Some(START));
        assert_eq!(Matcher::Nmtoken(REST).class(), None);
    }
}
