//! Character classes of the [XML 1.0 5th edition](https://www.w3.org/TR/2008/REC-xml-20081126/).
//!
//! `NameStartChar` and `NameChar` are defined directly by large ranges,
//! which allows most of Unicode (including the astral planes) in names.

use crate::edition::{Edition, EditionKind};
use crate::matcher::Matcher;
use crate::production::Production;
use crate::ranges::{CharClass, CodePointRange, RangeSet};

const CHAR_RANGES: &[CodePointRange] = &[
    CodePointRange::single(0x09),
    CodePointRange::single(0x0A),
    CodePointRange::single(0x0D),
    CodePointRange::new(0x20, 0xD7FF),
    CodePointRange::new(0xE000, 0xFFFD),
    CodePointRange::new(0x10000, 0x10_FFFF),
];

const S_RANGES: &[CodePointRange] = &[
    CodePointRange::new(0x09, 0x0A),
    CodePointRange::single(0x0D),
    CodePointRange::single(0x20),
];

// ":" | [A-Z] | "_" | [a-z] | [#xC0-#xD6] | [#xD8-#xF6] | [#xF8-#x2FF] | [#x370-#x37D] | [#x37F-#x1FFF] | [#x200C-#x200D] | [#x2070-#x218F] | [#x2C00-#x2FEF] | [#x3001-#xD7FF] | [#xF900-#xFDCF] | [#xFDF0-#xFFFD] | [#x10000-#xEFFFF]
const NAME_START_CHAR_RANGES: &[CodePointRange] = &[
    CodePointRange::single(0x3A),
    CodePointRange::new(0x41, 0x5A),
    CodePointRange::single(0x5F),
    CodePointRange::new(0x61, 0x7A),
    CodePointRange::new(0xC0, 0xD6),
    CodePointRange::new(0xD8, 0xF6),
    CodePointRange::new(0xF8, 0x2FF),
    CodePointRange::new(0x370, 0x37D),
    CodePointRange::new(0x37F, 0x1FFF),
    CodePointRange::new(0x200C, 0x200D),
    CodePointRange::new(0x2070, 0x218F),
    CodePointRange::new(0x2C00, 0x2FEF),
    CodePointRange::new(0x3001, 0xD7FF),
    CodePointRange::new(0xF900, 0xFDCF),
    CodePointRange::new(0xFDF0, 0xFFFD),
    CodePointRange::new(0x10000, 0xEFFFF),
];

// NameStartChar | "-" | "." | [0-9] | #xB7 | [#x0300-#x036F] | [#x203F-#x2040]
// merged into NameStartChar ranges when adjacent
const NAME_CHAR_RANGES: &[CodePointRange] = &[
    CodePointRange::new(0x2D, 0x2E),
    CodePointRange::new(0x30, 0x3A),
    CodePointRange::new(0x41, 0x5A),
    CodePointRange::single(0x5F),
    CodePointRange::new(0x61, 0x7A),
    CodePointRange::single(0xB7),
    CodePointRange::new(0xC0, 0xD6),
    CodePointRange::new(0xD8, 0xF6),
    CodePointRange::new(0xF8, 0x37D),
    CodePointRange::new(0x37F, 0x1FFF),
    CodePointRange::new(0x200C, 0x200D),
    CodePointRange::new(0x203F, 0x2040),
    CodePointRange::new(0x2070, 0x218F),
    CodePointRange::new(0x2C00, 0x2FEF),
    CodePointRange::new(0x3001, 0xD7FF),
    CodePointRange::new(0xF900, 0xFDCF),
    CodePointRange::new(0xFDF0, 0xFFFD),
    CodePointRange::new(0x10000, 0xEFFFF),
];

/// `Char ::= #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]`
pub const CHAR: RangeSet = RangeSet::new(CHAR_RANGES);
/// `S ::= (#x20 | #x9 | #xD | #xA)`
pub const S: RangeSet = RangeSet::new(S_RANGES);
/// `NameStartChar`
pub const NAME_START_CHAR: RangeSet = RangeSet::new(NAME_START_CHAR_RANGES);
/// `NameChar`
pub const NAME_CHAR: RangeSet = RangeSet::new(NAME_CHAR_RANGES);

const CHAR_CLASS: CharClass = CharClass::new(&[CHAR]);
const S_CLASS: CharClass = CharClass::new(&[S]);
const NAME_START_CHAR_CLASS: CharClass = CharClass::new(&[NAME_START_CHAR]);
const NAME_CHAR_CLASS: CharClass = CharClass::new(&[NAME_CHAR]);

const REGEXES: &[(Production, Matcher)] = &[
    (Production::Char, Matcher::Char(CHAR_CLASS)),
    (Production::S, Matcher::Char(S_CLASS)),
    (
        Production::NameStartChar,
        Matcher::Char(NAME_START_CHAR_CLASS),
    ),
    (Production::NameChar, Matcher::Char(NAME_CHAR_CLASS)),
    (
        Production::Name,
        Matcher::Name {
            start: NAME_START_CHAR_CLASS,
            rest: NAME_CHAR_CLASS,
        },
    ),
    (Production::Nmtoken, Matcher::Nmtoken(NAME_CHAR_CLASS)),
];

/// The XML 1.0 5th edition.
pub static ED5: Edition = Edition::new(
    EditionKind::Fifth,
    CHAR_CLASS,
    S_CLASS,
    NAME_START_CHAR_CLASS,
    NAME_CHAR_CLASS,
    REGEXES,
);

/// Is the code point a `Char`.
#[inline]
pub fn is_char(code_point: u32) -> bool {
    CHAR.contains(code_point)
}

/// Is the code point a white space.
#[inline]
pub fn is_s(code_point: u32) -> bool {
    matches!(code_point, 0x20 | 0x09 | 0x0D | 0x0A)
}

/// Is the code point a `NameStartChar`.
#[inline]
pub fn is_name_start_char(code_point: u32) -> bool {
    NAME_START_CHAR.contains(code_point)
}

/// Is the code point a `NameChar`.
#[inline]
pub fn is_name_char(code_point: u32) -> bool {
    NAME_CHAR.contains(code_point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_char_extends_name_start_char() {
        for code_point in 0..=0x10_FFFF {
            let extra = matches!(
                code_point,
                0x2D | 0x2E | 0x30..=0x39 | 0xB7 | 0x300..=0x36F | 0x203F..=0x2040
            );
            assert_eq!(
                is_name_char(code_point),
                is_name_start_char(code_point) || extra,
                "U+{code_point:04X}"
            );
        }
    }

    #[test]
    fn s_is_the_table() {
        for code_point in 0..0x100 {
            assert_eq!(is_s(code_point), S.contains(code_point));
        }
    }

    #[test]
    fn char_excludes_surrogates_and_non_characters() {
        assert!(!is_char(0xD800));
        assert!(!is_char(0xDFFF));
        assert!(!is_char(0xFFFE));
        assert!(!is_char(0xFFFF));
        assert!(!is_char(0x00));
        assert!(!is_char(0x1F));
        assert!(is_char(0x10_FFFF));
        assert!(!is_char(0x11_0000));
    }

    #[test]
    fn astral_names() {
        assert!(is_name_start_char(0x1F4A9));
        assert!(is_name_start_char(0xEFFFF));
        assert!(!is_name_start_char(0xF0000));
        assert!(!is_name_char(0x10_FFFF));
    }

    #[test]
    fn free_functions_match_the_facade() {
        for code_point in (0..=0x10_FFFF).step_by(7) {
            assert_eq!(is_char(code_point), ED5.is_char(code_point));
            assert_eq!(is_s(code_point), ED5.is_s(code_point));
            assert_eq!(
                is_name_start_char(code_point),
                ED5.is_name_start_char(code_point)
            );
            assert_eq!(is_name_char(code_point), ED5.is_name_char(code_point));
        }
    }
}
