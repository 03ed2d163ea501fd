//! Character classes of the [XML 1.0 4th edition](https://www.w3.org/TR/2006/REC-xml-20060816/).
//!
//! Names are built from the `BaseChar`, `Ideographic`, `CombiningChar`, `Digit` and `Extender`
//! tables of [Appendix B](https://www.w3.org/TR/2006/REC-xml-20060816/#CharClasses),
//! derived from Unicode 2.0. This edition does not define a `NameStartChar` production,
//! the first character of a `Name` is `Letter | '_' | ':'`.

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

// [85] BaseChar
const BASE_CHAR_RANGES: &[CodePointRange] = &[
    CodePointRange::new(0x0041, 0x005A),
    CodePointRange::new(0x0061, 0x007A),
    CodePointRange::new(0x00C0, 0x00D6),
    CodePointRange::new(0x00D8, 0x00F6),
    CodePointRange::new(0x00F8, 0x00FF),
    CodePointRange::new(0x0100, 0x0131),
    CodePointRange::new(0x0134, 0x013E),
    CodePointRange::new(0x0141, 0x0148),
    CodePointRange::new(0x014A, 0x017E),
    CodePointRange::new(0x0180, 0x01C3),
    CodePointRange::new(0x01CD, 0x01F0),
    CodePointRange::new(0x01F4, 0x01F5),
    CodePointRange::new(0x01FA, 0x0217),
    CodePointRange::new(0x0250, 0x02A8),
    CodePointRange::new(0x02BB, 0x02C1),
    CodePointRange::single(0x0386),
    CodePointRange::new(0x0388, 0x038A),
    CodePointRange::single(0x038C),
    CodePointRange::new(0x038E, 0x03A1),
    CodePointRange::new(0x03A3, 0x03CE),
    CodePointRange::new(0x03D0, 0x03D6),
    CodePointRange::single(0x03DA),
    CodePointRange::single(0x03DC),
    CodePointRange::single(0x03DE),
    CodePointRange::single(0x03E0),
    CodePointRange::new(0x03E2, 0x03F3),
    CodePointRange::new(0x0401, 0x040C),
    CodePointRange::new(0x040E, 0x044F),
    CodePointRange::new(0x0451, 0x045C),
    CodePointRange::new(0x045E, 0x0481),
    CodePointRange::new(0x0490, 0x04C4),
    CodePointRange::new(0x04C7, 0x04C8),
    CodePointRange::new(0x04CB, 0x04CC),
    CodePointRange::new(0x04D0, 0x04EB),
    CodePointRange::new(0x04EE, 0x04F5),
    CodePointRange::new(0x04F8, 0x04F9),
    CodePointRange::new(0x0531, 0x0556),
    CodePointRange::single(0x0559),
    CodePointRange::new(0x0561, 0x0586),
    CodePointRange::new(0x05D0, 0x05EA),
    CodePointRange::new(0x05F0, 0x05F2),
    CodePointRange::new(0x0621, 0x063A),
    CodePointRange::new(0x0641, 0x064A),
    CodePointRange::new(0x0671, 0x06B7),
    CodePointRange::new(0x06BA, 0x06BE),
    CodePointRange::new(0x06C0, 0x06CE),
    CodePointRange::new(0x06D0, 0x06D3),
    CodePointRange::single(0x06D5),
    CodePointRange::new(0x06E5, 0x06E6),
    CodePointRange::new(0x0905, 0x0939),
    CodePointRange::single(0x093D),
    CodePointRange::new(0x0958, 0x0961),
    CodePointRange::new(0x0985, 0x098C),
    CodePointRange::new(0x098F, 0x0990),
    CodePointRange::new(0x0993, 0x09A8),
    CodePointRange::new(0x09AA, 0x09B0),
    CodePointRange::single(0x09B2),
    CodePointRange::new(0x09B6, 0x09B9),
    CodePointRange::new(0x09DC, 0x09DD),
    CodePointRange::new(0x09DF, 0x09E1),
    CodePointRange::new(0x09F0, 0x09F1),
    CodePointRange::new(0x0A05, 0x0A0A),
    CodePointRange::new(0x0A0F, 0x0A10),
    CodePointRange::new(0x0A13, 0x0A28),
    CodePointRange::new(0x0A2A, 0x0A30),
    CodePointRange::new(0x0A32, 0x0A33),
    CodePointRange::new(0x0A35, 0x0A36),
    CodePointRange::new(0x0A38, 0x0A39),
    CodePointRange::new(0x0A59, 0x0A5C),
    CodePointRange::single(0x0A5E),
    CodePointRange::new(0x0A72, 0x0A74),
    CodePointRange::new(0x0A85, 0x0A8B),
    CodePointRange::single(0x0A8D),
    CodePointRange::new(0x0A8F, 0x0A91),
    CodePointRange::new(0x0A93, 0x0AA8),
    CodePointRange::new(0x0AAA, 0x0AB0),
    CodePointRange::new(0x0AB2, 0x0AB3),
    CodePointRange::new(0x0AB5, 0x0AB9),
    CodePointRange::single(0x0ABD),
    CodePointRange::single(0x0AE0),
    CodePointRange::new(0x0B05, 0x0B0C),
    CodePointRange::new(0x0B0F, 0x0B10),
    CodePointRange::new(0x0B13, 0x0B28),
    CodePointRange::new(0x0B2A, 0x0B30),
    CodePointRange::new(0x0B32, 0x0B33),
    CodePointRange::new(0x0B36, 0x0B39),
    CodePointRange::single(0x0B3D),
    CodePointRange::new(0x0B5C, 0x0B5D),
    CodePointRange::new(0x0B5F, 0x0B61),
    CodePointRange::new(0x0B85, 0x0B8A),
    CodePointRange::new(0x0B8E, 0x0B90),
    CodePointRange::new(0x0B92, 0x0B95),
    CodePointRange::new(0x0B99, 0x0B9A),
    CodePointRange::single(0x0B9C),
    CodePointRange::new(0x0B9E, 0x0B9F),
    CodePointRange::new(0x0BA3, 0x0BA4),
    CodePointRange::new(0x0BA8, 0x0BAA),
    CodePointRange::new(0x0BAE, 0x0BB5),
    CodePointRange::new(0x0BB7, 0x0BB9),
    CodePointRange::new(0x0C05, 0x0C0C),
    CodePointRange::new(0x0C0E, 0x0C10),
    CodePointRange::new(0x0C12, 0x0C28),
    CodePointRange::new(0x0C2A, 0x0C33),
    CodePointRange::new(0x0C35, 0x0C39),
    CodePointRange::new(0x0C60, 0x0C61),
    CodePointRange::new(0x0C85, 0x0C8C),
    CodePointRange::new(0x0C8E, 0x0C90),
    CodePointRange::new(0x0C92, 0x0CA8),
    CodePointRange::new(0x0CAA, 0x0CB3),
    CodePointRange::new(0x0CB5, 0x0CB9),
    CodePointRange::single(0x0CDE),
    CodePointRange::new(0x0CE0, 0x0CE1),
    CodePointRange::new(0x0D05, 0x0D0C),
    CodePointRange::new(0x0D0E, 0x0D10),
    CodePointRange::new(0x0D12, 0x0D28),
    CodePointRange::new(0x0D2A, 0x0D39),
    CodePointRange::new(0x0D60, 0x0D61),
    CodePointRange::new(0x0E01, 0x0E2E),
    CodePointRange::single(0x0E30),
    CodePointRange::new(0x0E32, 0x0E33),
    CodePointRange::new(0x0E40, 0x0E45),
    CodePointRange::new(0x0E81, 0x0E82),
    CodePointRange::single(0x0E84),
    CodePointRange::new(0x0E87, 0x0E88),
    CodePointRange::single(0x0E8A),
    CodePointRange::single(0x0E8D),
    CodePointRange::new(0x0E94, 0x0E97),
    CodePointRange::new(0x0E99, 0x0E9F),
    CodePointRange::new(0x0EA1, 0x0EA3),
    CodePointRange::single(0x0EA5),
    CodePointRange::single(0x0EA7),
    CodePointRange::new(0x0EAA, 0x0EAB),
    CodePointRange::new(0x0EAD, 0x0EAE),
    CodePointRange::single(0x0EB0),
    CodePointRange::new(0x0EB2, 0x0EB3),
    CodePointRange::single(0x0EBD),
    CodePointRange::new(0x0EC0, 0x0EC4),
    CodePointRange::new(0x0F40, 0x0F47),
    CodePointRange::new(0x0F49, 0x0F69),
    CodePointRange::new(0x10A0, 0x10C5),
    CodePointRange::new(0x10D0, 0x10F6),
    CodePointRange::single(0x1100),
    CodePointRange::new(0x1102, 0x1103),
    CodePointRange::new(0x1105, 0x1107),
    CodePointRange::single(0x1109),
    CodePointRange::new(0x110B, 0x110C),
    CodePointRange::new(0x110E, 0x1112),
    CodePointRange::single(0x113C),
    CodePointRange::single(0x113E),
    CodePointRange::single(0x1140),
    CodePointRange::single(0x114C),
    CodePointRange::single(0x114E),
    CodePointRange::single(0x1150),
    CodePointRange::new(0x1154, 0x1155),
    CodePointRange::single(0x1159),
    CodePointRange::new(0x115F, 0x1161),
    CodePointRange::single(0x1163),
    CodePointRange::single(0x1165),
    CodePointRange::single(0x1167),
    CodePointRange::single(0x1169),
    CodePointRange::new(0x116D, 0x116E),
    CodePointRange::new(0x1172, 0x1173),
    CodePointRange::single(0x1175),
    CodePointRange::single(0x119E),
    CodePointRange::single(0x11A8),
    CodePointRange::single(0x11AB),
    CodePointRange::new(0x11AE, 0x11AF),
    CodePointRange::new(0x11B7, 0x11B8),
    CodePointRange::single(0x11BA),
    CodePointRange::new(0x11BC, 0x11C2),
    CodePointRange::single(0x11EB),
    CodePointRange::single(0x11F0),
    CodePointRange::single(0x11F9),
    CodePointRange::new(0x1E00, 0x1E9B),
    CodePointRange::new(0x1EA0, 0x1EF9),
    CodePointRange::new(0x1F00, 0x1F15),
    CodePointRange::new(0x1F18, 0x1F1D),
    CodePointRange::new(0x1F20, 0x1F45),
    CodePointRange::new(0x1F48, 0x1F4D),
    CodePointRange::new(0x1F50, 0x1F57),
    CodePointRange::single(0x1F59),
    CodePointRange::single(0x1F5B),
    CodePointRange::single(0x1F5D),
    CodePointRange::new(0x1F5F, 0x1F7D),
    CodePointRange::new(0x1F80, 0x1FB4),
    CodePointRange::new(0x1FB6, 0x1FBC),
    CodePointRange::single(0x1FBE),
    CodePointRange::new(0x1FC2, 0x1FC4),
    CodePointRange::new(0x1FC6, 0x1FCC),
    CodePointRange::new(0x1FD0, 0x1FD3),
    CodePointRange::new(0x1FD6, 0x1FDB),
    CodePointRange::new(0x1FE0, 0x1FEC),
    CodePointRange::new(0x1FF2, 0x1FF4),
    CodePointRange::new(0x1FF6, 0x1FFC),
    CodePointRange::single(0x2126),
    CodePointRange::new(0x212A, 0x212B),
    CodePointRange::single(0x212E),
    CodePointRange::new(0x2180, 0x2182),
    CodePointRange::new(0x3041, 0x3094),
    CodePointRange::new(0x30A1, 0x30FA),
    CodePointRange::new(0x3105, 0x312C),
    CodePointRange::new(0xAC00, 0xD7A3),
];

// [86] Ideographic ::= [#x4E00-#x9FA5] | #x3007 | [#x3021-#x3029]
const IDEOGRAPHIC_RANGES: &[CodePointRange] = &[
    CodePointRange::single(0x3007),
    CodePointRange::new(0x3021, 0x3029),
    CodePointRange::new(0x4E00, 0x9FA5),
];

// [87] CombiningChar
const COMBINING_CHAR_RANGES: &[CodePointRange] = &[
    CodePointRange::new(0x0300, 0x0345),
    CodePointRange::new(0x0360, 0x0361),
    CodePointRange::new(0x0483, 0x0486),
    CodePointRange::new(0x0591, 0x05A1),
    CodePointRange::new(0x05A3, 0x05B9),
    CodePointRange::new(0x05BB, 0x05BD),
    CodePointRange::single(0x05BF),
    CodePointRange::new(0x05C1, 0x05C2),
    CodePointRange::single(0x05C4),
    CodePointRange::new(0x064B, 0x0652),
    CodePointRange::single(0x0670),
    CodePointRange::new(0x06D6, 0x06DC),
    CodePointRange::new(0x06DD, 0x06DF),
    CodePointRange::new(0x06E0, 0x06E4),
    CodePointRange::new(0x06E7, 0x06E8),
    CodePointRange::new(0x06EA, 0x06ED),
    CodePointRange::new(0x0901, 0x0903),
    CodePointRange::single(0x093C),
    CodePointRange::new(0x093E, 0x094C),
    CodePointRange::single(0x094D),
    CodePointRange::new(0x0951, 0x0954),
    CodePointRange::new(0x0962, 0x0963),
    CodePointRange::new(0x0981, 0x0983),
    CodePointRange::single(0x09BC),
    CodePointRange::single(0x09BE),
    CodePointRange::single(0x09BF),
    CodePointRange::new(0x09C0, 0x09C4),
    CodePointRange::new(0x09C7, 0x09C8),
    CodePointRange::new(0x09CB, 0x09CD),
    CodePointRange::single(0x09D7),
    CodePointRange::new(0x09E2, 0x09E3),
    CodePointRange::single(0x0A02),
    CodePointRange::single(0x0A3C),
    CodePointRange::single(0x0A3E),
    CodePointRange::single(0x0A3F),
    CodePointRange::new(0x0A40, 0x0A42),
    CodePointRange::new(0x0A47, 0x0A48),
    CodePointRange::new(0x0A4B, 0x0A4D),
    CodePointRange::new(0x0A70, 0x0A71),
    CodePointRange::new(0x0A81, 0x0A83),
    CodePointRange::single(0x0ABC),
    CodePointRange::new(0x0ABE, 0x0AC5),
    CodePointRange::new(0x0AC7, 0x0AC9),
    CodePointRange::new(0x0ACB, 0x0ACD),
    CodePointRange::new(0x0B01, 0x0B03),
    CodePointRange::single(0x0B3C),
    CodePointRange::new(0x0B3E, 0x0B43),
    CodePointRange::new(0x0B47, 0x0B48),
    CodePointRange::new(0x0B4B, 0x0B4D),
    CodePointRange::new(0x0B56, 0x0B57),
    CodePointRange::new(0x0B82, 0x0B83),
    CodePointRange::new(0x0BBE, 0x0BC2),
    CodePointRange::new(0x0BC6, 0x0BC8),
    CodePointRange::new(0x0BCA, 0x0BCD),
    CodePointRange::single(0x0BD7),
    CodePointRange::new(0x0C01, 0x0C03),
    CodePointRange::new(0x0C3E, 0x0C44),
    CodePointRange::new(0x0C46, 0x0C48),
    CodePointRange::new(0x0C4A, 0x0C4D),
    CodePointRange::new(0x0C55, 0x0C56),
    CodePointRange::new(0x0C82, 0x0C83),
    CodePointRange::new(0x0CBE, 0x0CC4),
    CodePointRange::new(0x0CC6, 0x0CC8),
    CodePointRange::new(0x0CCA, 0x0CCD),
    CodePointRange::new(0x0CD5, 0x0CD6),
    CodePointRange::new(0x0D02, 0x0D03),
    CodePointRange::new(0x0D3E, 0x0D43),
    CodePointRange::new(0x0D46, 0x0D48),
    CodePointRange::new(0x0D4A, 0x0D4D),
    CodePointRange::single(0x0D57),
    CodePointRange::single(0x0E31),
    CodePointRange::new(0x0E34, 0x0E3A),
    CodePointRange::new(0x0E47, 0x0E4E),
    CodePointRange::single(0x0EB1),
    CodePointRange::new(0x0EB4, 0x0EB9),
    CodePointRange::new(0x0EBB, 0x0EBC),
    CodePointRange::new(0x0EC8, 0x0ECD),
    CodePointRange::new(0x0F18, 0x0F19),
    CodePointRange::single(0x0F35),
    CodePointRange::single(0x0F37),
    CodePointRange::single(0x0F39),
    CodePointRange::single(0x0F3E),
    CodePointRange::single(0x0F3F),
    CodePointRange::new(0x0F71, 0x0F84),
    CodePointRange::new(0x0F86, 0x0F8B),
    CodePointRange::new(0x0F90, 0x0F95),
    CodePointRange::single(0x0F97),
    CodePointRange::new(0x0F99, 0x0FAD),
    CodePointRange::new(0x0FB1, 0x0FB7),
    CodePointRange::single(0x0FB9),
    CodePointRange::new(0x20D0, 0x20DC),
    CodePointRange::single(0x20E1),
    CodePointRange::new(0x302A, 0x302F),
    CodePointRange::single(0x3099),
    CodePointRange::single(0x309A),
];

// [88] Digit
const DIGIT_RANGES: &[CodePointRange] = &[
    CodePointRange::new(0x0030, 0x0039),
    CodePointRange::new(0x0660, 0x0669),
    CodePointRange::new(0x06F0, 0x06F9),
    CodePointRange::new(0x0966, 0x096F),
    CodePointRange::new(0x09E6, 0x09EF),
    CodePointRange::new(0x0A66, 0x0A6F),
    CodePointRange::new(0x0AE6, 0x0AEF),
    CodePointRange::new(0x0B66, 0x0B6F),
    CodePointRange::new(0x0BE7, 0x0BEF),
    CodePointRange::new(0x0C66, 0x0C6F),
    CodePointRange::new(0x0CE6, 0x0CEF),
    CodePointRange::new(0x0D66, 0x0D6F),
    CodePointRange::new(0x0E50, 0x0E59),
    CodePointRange::new(0x0ED0, 0x0ED9),
    CodePointRange::new(0x0F20, 0x0F29),
];

// [89] Extender
const EXTENDER_RANGES: &[CodePointRange] = &[
    CodePointRange::single(0x00B7),
    CodePointRange::single(0x02D0),
    CodePointRange::single(0x02D1),
    CodePointRange::single(0x0387),
    CodePointRange::single(0x0640),
    CodePointRange::single(0x0E46),
    CodePointRange::single(0x0EC6),
    CodePointRange::single(0x3005),
    CodePointRange::new(0x3031, 0x3035),
    CodePointRange::new(0x309D, 0x309E),
    CodePointRange::new(0x30FC, 0x30FE),
];

// '_' | ':'
const NAME_START_PUNCTUATION_RANGES: &[CodePointRange] =
    &[CodePointRange::single(0x3A), CodePointRange::single(0x5F)];

// '.' | '-' | '_' | ':'
const NAME_PUNCTUATION_RANGES: &[CodePointRange] = &[
    CodePointRange::new(0x2D, 0x2E),
    CodePointRange::single(0x3A),
    CodePointRange::single(0x5F),
];

/// `Char ::= #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]`
pub const CHAR: RangeSet = RangeSet::new(CHAR_RANGES);
/// `S ::= (#x20 | #x9 | #xD | #xA)`
pub const S: RangeSet = RangeSet::new(S_RANGES);
/// `BaseChar`
pub const BASE_CHAR: RangeSet = RangeSet::new(BASE_CHAR_RANGES);
/// `Ideographic`
pub const IDEOGRAPHIC: RangeSet = RangeSet::new(IDEOGRAPHIC_RANGES);
/// `CombiningChar`
pub const COMBINING_CHAR: RangeSet = RangeSet::new(COMBINING_CHAR_RANGES);
/// `Digit`
pub const DIGIT: RangeSet = RangeSet::new(DIGIT_RANGES);
/// `Extender`
pub const EXTENDER: RangeSet = RangeSet::new(EXTENDER_RANGES);
const NAME_START_PUNCTUATION: RangeSet = RangeSet::new(NAME_START_PUNCTUATION_RANGES);
const NAME_PUNCTUATION: RangeSet = RangeSet::new(NAME_PUNCTUATION_RANGES);

const CHAR_CLASS: CharClass = CharClass::new(&[CHAR]);
const S_CLASS: CharClass = CharClass::new(&[S]);
const BASE_CHAR_CLASS: CharClass = CharClass::new(&[BASE_CHAR]);
const IDEOGRAPHIC_CLASS: CharClass = CharClass::new(&[IDEOGRAPHIC]);
const COMBINING_CHAR_CLASS: CharClass = CharClass::new(&[COMBINING_CHAR]);
const DIGIT_CLASS: CharClass = CharClass::new(&[DIGIT]);
const EXTENDER_CLASS: CharClass = CharClass::new(&[EXTENDER]);
// Letter ::= BaseChar | Ideographic
const LETTER_CLASS: CharClass = CharClass::new(&[BASE_CHAR, IDEOGRAPHIC]);
// (Letter | '_' | ':')
const NAME_START_CHAR_CLASS: CharClass =
    CharClass::new(&[BASE_CHAR, IDEOGRAPHIC, NAME_START_PUNCTUATION]);
// NameChar ::= Letter | Digit | '.' | '-' | '_' | ':' | CombiningChar | Extender
const NAME_CHAR_CLASS: CharClass = CharClass::new(&[
    BASE_CHAR,
    IDEOGRAPHIC,
    DIGIT,
    NAME_PUNCTUATION,
    COMBINING_CHAR,
    EXTENDER,
]);

const REGEXES: &[(Production, Matcher)] = &[
    (Production::Char, Matcher::Char(CHAR_CLASS)),
    (Production::S, Matcher::Char(S_CLASS)),
    (Production::BaseChar, Matcher::Char(BASE_CHAR_CLASS)),
    (Production::Ideographic, Matcher::Char(IDEOGRAPHIC_CLASS)),
    (
        Production::CombiningChar,
        Matcher::Char(COMBINING_CHAR_CLASS),
    ),
    (Production::Digit, Matcher::Char(DIGIT_CLASS)),
    (Production::Extender, Matcher::Char(EXTENDER_CLASS)),
    (Production::Letter, Matcher::Char(LETTER_CLASS)),
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

/// The XML 1.0 4th edition.
pub static ED4: Edition = Edition::new(
    EditionKind::Fourth,
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

/// Is the code point a `BaseChar`.
#[inline]
pub fn is_base_char(code_point: u32) -> bool {
    BASE_CHAR.contains(code_point)
}

/// Is the code point an `Ideographic`.
#[inline]
pub fn is_ideographic(code_point: u32) -> bool {
    IDEOGRAPHIC.contains(code_point)
}

#[inline]
pub fn is_combining_char(code_point: u32) -> bool {
    COMBINING_CHAR.contains(code_point)
}

#[inline]
pub fn is_digit(code_point: u32) -> bool {
    DIGIT.contains(code_point)
}

#[inline]
pub fn is_extender(code_point: u32) -> bool {
    EXTENDER.contains(code_point)
}

/// `Letter ::= BaseChar | Ideographic`
#[inline]
pub fn is_letter(code_point: u32) -> bool {
    is_base_char(code_point) || is_ideographic(code_point)
}

/// `Letter | '_' | ':'`, the characters allowed at the start of a `Name`.
#[inline]
pub fn is_name_start_char(code_point: u32) -> bool {
    matches!(code_point, 0x3A | 0x5F) || is_letter(code_point)
}

/// `NameChar ::= Letter | Digit | '.' | '-' | '_' | ':' | CombiningChar | Extender`
#[inline]
pub fn is_name_char(code_point: u32) -> bool {
    matches!(code_point, 0x2D | 0x2E | 0x3A | 0x5F)
        || is_letter(code_point)
        || is_digit(code_point)
        || is_combining_char(code_point)
        || is_extender(code_point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_disjoint() {
        let sets = [
            BASE_CHAR,
            IDEOGRAPHIC,
            COMBINING_CHAR,
            DIGIT,
            EXTENDER,
            NAME_PUNCTUATION,
        ];
        for code_point in 0..=0xFFFF {
            let count = sets.iter().filter(|set| set.contains(code_point)).count();
            assert!(count <= 1, "U+{code_point:04X} is in {count} tables");
        }
    }

    #[test]
    fn no_astral_names() {
        for code_point in 0x10000..=0x10_FFFF {
            assert!(!is_name_char(code_point), "U+{code_point:04X}");
        }
        assert!(is_char(0x1F4A9));
    }

    #[test]
    fn table_samples() {
        assert!(is_base_char(0x0041));
        assert!(is_base_char(0xD7A3));
        assert!(!is_base_char(0x0132));
        assert!(is_ideographic(0x3007));
        assert!(is_ideographic(0x9FA5));
        assert!(!is_ideographic(0x9FA6));
        assert!(is_combining_char(0x309A));
        assert!(!is_combining_char(0x0346));
        assert!(is_digit(0x0F29));
        assert!(!is_digit(0x0F2A));
        assert!(is_extender(0x30FE));
        assert!(!is_extender(0x30FF));
    }

    #[test]
    fn white_space_is_a_single_char() {
        let s = ED4.matcher(Production::S).unwrap();
        for input in [" ", "\t", "\n", "\r"] {
            assert!(s.is_match(input), "{input:?}");
        }
        assert!(!s.is_match("  "));
        assert!(!s.is_match(" \n"));
        assert!(!s.is_match(""));
    }

    #[test]
    fn name_start_char_is_not_name_char_for_digits() {
        for digit in 0x30..=0x39 {
            assert!(!is_name_start_char(digit));
            assert!(is_name_char(digit));
        }
        assert!(is_name_start_char(0x3A));
        assert!(is_name_start_char(0x5F));
        assert!(!is_name_start_char(0x2D));
        assert!(!is_name_start_char(0x2E));
    }

    #[test]
    fn free_functions_match_the_facade() {
        for code_point in 0..=0x10_FFFF {
            assert_eq!(is_char(code_point), ED4.is_char(code_point));
            assert_eq!(is_s(code_point), ED4.is_s(code_point));
            assert_eq!(
                is_name_start_char(code_point),
                ED4.is_name_start_char(code_point),
                "U+{code_point:04X}"
            );
            assert_eq!(
                is_name_char(code_point),
                ED4.is_name_char(code_point),
                "U+{code_point:04X}"
            );
        }
    }
}
