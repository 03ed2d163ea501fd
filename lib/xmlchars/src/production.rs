#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// A lexical production of the XML 1.0 grammar.
///
/// The string representation is the upper snake case name used as key of the matchers table:
/// ```
/// use xmlchars::Production;
///
/// assert_eq!(Production::NameStartChar.to_string(), "NAME_START_CHAR");
/// assert_eq!("nmtoken".parse::<Production>()?, Production::Nmtoken);
/// # Result::<_, xmlchars::ProductionParseError>::Ok(())
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum Production {
    /// `Char`: any Unicode character, excluding the surrogate blocks, U+FFFE and U+FFFF.
    Char,
    /// `S`: white space.
    S,
    /// `NameStartChar`: the characters allowed at the start of a `Name`.
    ///
    /// The 4th edition does not name this production: it is `Letter | '_' | ':'`.
    NameStartChar,
    /// `NameChar`: the characters allowed after the first character of a `Name`.
    NameChar,
    /// `Name`: a `NameStartChar` followed by `NameChar`s.
    Name,
    /// `Nmtoken`: one or more `NameChar`s.
    Nmtoken,
    /// `BaseChar` (4th edition only).
    BaseChar,
    /// `Ideographic` (4th edition only).
    Ideographic,
    /// `CombiningChar` (4th edition only).
    CombiningChar,
    /// `Digit` (4th edition only).
    Digit,
    /// `Extender` (4th edition only).
    Extender,
    /// `Letter ::= BaseChar | Ideographic` (4th edition only).
    Letter,
}

impl Production {
    /// All the productions, in their declaration order.
    pub const ALL: [Self; 12] = [
        Self::Char,
        Self::S,
        Self::NameStartChar,
        Self::NameChar,
        Self::Name,
        Self::Nmtoken,
        Self::BaseChar,
        Self::Ideographic,
        Self::CombiningChar,
        Self::Digit,
        Self::Extender,
        Self::Letter,
    ];

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Char => "CHAR",
            Self::S => "S",
            Self::NameStartChar => "NAME_START_CHAR",
            Self::NameChar => "NAME_CHAR",
            Self::Name => "NAME",
            Self::Nmtoken => "NMTOKEN",
            Self::BaseChar => "BASE_CHAR",
            Self::Ideographic => "IDEOGRAPHIC",
            Self::CombiningChar => "COMBINING_CHAR",
            Self::Digit => "DIGIT",
            Self::Extender => "EXTENDER",
            Self::Letter => "LETTER",
        }
    }

    /// Returns `false` for the productions that match a sequence of characters (`Name` and `Nmtoken`).
    #[inline]
    pub const fn is_single_char(self) -> bool {
        !matches!(self, Self::Name | Self::Nmtoken)
    }
}

impl fmt::Display for Production {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Production {
    type Err = ProductionParseError;

    /// Parses a production name.
    ///
    /// The comparison is ASCII case-insensitive and `-` is accepted in place of `_`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = name.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|production| production.name() == normalized)
            .ok_or_else(|| ProductionParseError {
                name: name.to_owned(),
            })
    }
}

/// An error raised when parsing a [`Production`] name.
#[derive(Debug, thiserror::Error)]
#[error("{name:?} is not a known XML 1.0 production")]
pub struct ProductionParseError {
    name: String,
}

#[cfg(feature = "serde")]
impl Serialize for Production {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Production {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trip() {
        for production in Production::ALL {
            assert_eq!(production.name().parse::<Production>().unwrap(), production);
        }
    }

    #[test]
    fn lenient_parsing() {
        assert_eq!(
            "name-start-char".parse::<Production>().unwrap(),
            Production::NameStartChar
        );
        assert_eq!(" Letter ".parse::<Production>().unwrap(), Production::Letter);
        "NameStartChar".parse::<Production>().unwrap_err();
        "".parse::<Production>().unwrap_err();
    }

    #[test]
    fn parse_error_message() {
        assert_eq!(
            "QName".parse::<Production>().unwrap_err().to_string(),
            "\"QName\" is not a known XML 1.0 production"
        );
    }

    #[test]
    fn single_char() {
        assert!(Production::Char.is_single_char());
        assert!(Production::Extender.is_single_char());
        assert!(!Production::Name.is_single_char());
        assert!(!Production::Nmtoken.is_single_char());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        let json = serde_json::to_string(&Production::NameChar).unwrap();
        assert_eq!(json, "\"NAME_CHAR\"");
        let production: Production = serde_json::from_str(&json).unwrap();
        assert_eq!(production, Production::NameChar);
        serde_json::from_str::<Production>("\"FOO\"").unwrap_err();
    }
}
