#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod ed4;
pub mod ed5;
mod edition;
mod matcher;
mod production;
mod ranges;

pub use crate::edition::{Edition, EditionKind, EditionParseError};
pub use crate::matcher::{Matcher, Mismatch};
pub use crate::production::{Production, ProductionParseError};
pub use crate::ranges::{CharClass, CodePointRange, RangeSet};

/// The editions of [XML 1.0](https://www.w3.org/TR/xml/).
///
/// ```
/// use xmlchars::{EditionKind, Production, xml_1_0};
///
/// let edition = xml_1_0::edition(EditionKind::Fourth);
/// assert!(edition.matcher(Production::Letter).unwrap().is_match("x"));
/// ```
pub mod xml_1_0 {
    pub use crate::ed4::ED4;
    pub use crate::ed5::ED5;
    use crate::edition::{Edition, EditionKind};

    /// All the supported editions, oldest first.
    pub static EDITIONS: [&Edition; 2] = [&ED4, &ED5];

    #[inline]
    pub fn edition(kind: EditionKind) -> &'static Edition {
        match kind {
            EditionKind::Fourth => &ED4,
            EditionKind::Fifth => &ED5,
        }
    }
}
