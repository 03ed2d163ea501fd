use crate::matcher::Matcher;
use crate::production::Production;
use crate::ranges::CharClass;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// An edition of the XML 1.0 specification.
///
/// ```
/// use xmlchars::EditionKind;
///
/// assert_eq!("ed4".parse::<EditionKind>()?, EditionKind::Fourth);
/// assert_eq!("5".parse::<EditionKind>()?, EditionKind::Fifth);
/// assert_eq!(EditionKind::Fifth.to_string(), "ED5");
/// # Result::<_, xmlchars::EditionParseError>::Ok(())
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd, Default)]
pub enum EditionKind {
    /// [XML 1.0 4th edition](https://www.w3.org/TR/2006/REC-xml-20060816/).
    Fourth,
    /// [XML 1.0 5th edition](https://www.w3.org/TR/2008/REC-xml-20081126/).
    #[default]
    Fifth,
}

impl EditionKind {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fourth => "ED4",
            Self::Fifth => "ED5",
        }
    }
}

impl fmt::Display for EditionKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EditionKind {
    type Err = EditionParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_uppercase().as_str() {
            "ED4" | "4" | "FOURTH" => Ok(Self::Fourth),
            "ED5" | "5" | "FIFTH" => Ok(Self::Fifth),
            _ => Err(EditionParseError {
                name: name.to_owned(),
            }),
        }
    }
}

/// An error raised when parsing an [`EditionKind`] name.
#[derive(Debug, thiserror::Error)]
#[error("{name:?} is not a supported XML 1.0 edition, only ED4 and ED5 are")]
pub struct EditionParseError {
    name: String,
}

#[cfg(feature = "serde")]
impl Serialize for EditionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EditionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

/// The character classes and matchers of an edition of XML 1.0.
///
/// The two existing editions are [`ED4`](crate::xml_1_0::ED4) and [`ED5`](crate::xml_1_0::ED5).
///
/// ```
/// use xmlchars::{Production, xml_1_0};
///
/// for edition in xml_1_0::EDITIONS {
///     assert!(edition.is_name("foo:bar"));
///     assert!(!edition.is_name(".bar"));
///     assert!(edition.is_nmtoken(".bar"));
///     assert!(edition.is_s(0x20));
/// }
/// assert!(xml_1_0::ED4.matcher(Production::BaseChar).is_some());
/// assert!(xml_1_0::ED5.matcher(Production::BaseChar).is_none());
/// ```
#[derive(Debug)]
pub struct Edition {
    kind: EditionKind,
    char: CharClass,
    s: CharClass,
    name_start_char: CharClass,
    name_char: CharClass,
    regexes: &'static [(Production, Matcher)],
}

impl Edition {
    pub(crate) const fn new(
        kind: EditionKind,
        char: CharClass,
        s: CharClass,
        name_start_char: CharClass,
        name_char: CharClass,
        regexes: &'static [(Production, Matcher)],
    ) -> Self {
        Self {
            kind,
            char,
            s,
            name_start_char,
            name_char,
            regexes,
        }
    }

    #[inline]
    pub const fn kind(&self) -> EditionKind {
        self.kind
    }

    /// The matcher of a production, `None` if this edition does not define it.
    #[inline]
    pub fn matcher(&self, production: Production) -> Option<&Matcher> {
        self.regexes
            .iter()
            .find_map(|(p, matcher)| (*p == production).then_some(matcher))
    }

    /// Iterates over all the productions defined by this edition and their matchers.
    #[inline]
    pub fn regexes(&self) -> impl Iterator<Item = (Production, &Matcher)> {
        self.regexes
            .iter()
            .map(|(production, matcher)| (*production, matcher))
    }

    /// Is the code point a `Char`.
    #[inline]
    pub fn is_char(&self, code_point: u32) -> bool {
        self.char.contains(code_point)
    }

    /// Is the code point a white space (`S`).
    #[inline]
    pub fn is_s(&self, code_point: u32) -> bool {
        self.s.contains(code_point)
    }

    /// Is the code point allowed at the start of a `Name`.
    #[inline]
    pub fn is_name_start_char(&self, code_point: u32) -> bool {
        self.name_start_char.contains(code_point)
    }

    /// Is the code point allowed in a `Name` after its first character.
    #[inline]
    pub fn is_name_char(&self, code_point: u32) -> bool {
        self.name_char.contains(code_point)
    }

    /// Checks if the full input is a `Name`.
    pub fn is_name(&self, input: &str) -> bool {
        self.matcher(Production::Name)
            .is_some_and(|matcher| matcher.is_match(input))
    }

    /// Checks if the full input is a `Nmtoken`.
    pub fn is_nmtoken(&self, input: &str) -> bool {
        self.matcher(Production::Nmtoken)
            .is_some_and(|matcher| matcher.is_match(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml_1_0::{ED4, ED5, EDITIONS};

    #[test]
    fn parse_edition() {
        assert_eq!("ED4".parse::<EditionKind>().unwrap(), EditionKind::Fourth);
        assert_eq!("fifth".parse::<EditionKind>().unwrap(), EditionKind::Fifth);
        assert_eq!(
            "ED3".parse::<EditionKind>().unwrap_err().to_string(),
            "\"ED3\" is not a supported XML 1.0 edition, only ED4 and ED5 are"
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(ED4.kind(), EditionKind::Fourth);
        assert_eq!(ED5.kind(), EditionKind::Fifth);
        assert_eq!(EditionKind::default(), EditionKind::Fifth);
    }

    #[test]
    fn regexes_are_unique() {
        for edition in EDITIONS {
            let mut productions = edition.regexes().map(|(p, _)| p).collect::<Vec<_>>();
            let count = productions.len();
            productions.sort_unstable();
            productions.dedup();
            assert_eq!(productions.len(), count, "duplicated production in {}", edition.kind());
        }
    }

    #[test]
    fn regexes_keys() {
        assert_eq!(ED5.regexes().count(), 6);
        assert_eq!(ED4.regexes().count(), 12);
        for production in Production::ALL {
            assert!(ED4.matcher(production).is_some(), "{production} missing in ED4");
        }
    }

    #[test]
    fn facade_predicates_are_the_matcher_classes() {
        for edition in EDITIONS {
            for (production, class) in [
                (Production::Char, edition.char),
                (Production::S, edition.s),
                (Production::NameStartChar, edition.name_start_char),
                (Production::NameChar, edition.name_char),
            ] {
                assert_eq!(
                    edition.matcher(production).and_then(Matcher::class),
                    Some(class),
                    "{production} in {}",
                    edition.kind()
                );
            }
        }
    }

    #[test]
    fn name_shortcuts() {
        for edition in EDITIONS {
            let name = edition.matcher(Production::Name).unwrap();
            let nmtoken = edition.matcher(Production::Nmtoken).unwrap();
            for input in ["", "x", "1bar", ".bar", "foo:bar", "a b", "\u{0300}", "_-."] {
                assert_eq!(edition.is_name(input), name.is_match(input), "{input:?}");
                assert_eq!(edition.is_nmtoken(input), nmtoken.is_match(input), "{input:?}");
            }
        }
    }

    #[test]
    fn name_shortcuts_follow_the_edition() {
        assert!(ED5.is_name("\u{1F4A9}"));
        assert!(!ED4.is_name("\u{1F4A9}"));
        assert!(ED5.is_nmtoken("\u{10000}a"));
        assert!(!ED4.is_nmtoken("\u{10000}a"));
        for edition in EDITIONS {
            assert!(!edition.is_name("-bar"));
            assert!(edition.is_nmtoken("-bar"));
            assert!(!edition.is_nmtoken(""));
        }
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        let json = serde_json::to_string(&EditionKind::Fourth).unwrap();
        assert_eq!(json, "\"ED4\"");
        let kind: EditionKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, EditionKind::Fourth);
    }
}
