#![no_main]

use libfuzzer_sys::fuzz_target;
use xmlchars::{xml_1_0, Matcher, Mismatch, Production};

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    for edition in xml_1_0::EDITIONS {
        for (production, matcher) in edition.regexes() {
            let result = matcher.check(&input);
            assert_eq!(matcher.is_match(&input), result.is_ok(), "{production}");
            if let Err(
                Mismatch::InvalidChar { offset, character }
                | Mismatch::TrailingChar { offset, character },
            ) = result
            {
                assert_eq!(input[offset..].chars().next(), Some(character));
            }
            let mut chars = input.chars();
            let expected = match matcher {
                Matcher::Char(class) => matches!(
                    (chars.next(), chars.next()),
                    (Some(c), None) if class.contains(c.into())
                ),
                Matcher::Name { start, rest } => {
                    chars.next().is_some_and(|c| start.contains(c.into()))
                        && chars.all(|c| rest.contains(c.into()))
                }
                Matcher::Nmtoken(class) => {
                    !input.is_empty() && chars.all(|c| class.contains(c.into()))
                }
            };
            assert_eq!(result.is_ok(), expected, "{production}");
            assert_eq!(
                matcher.is_match_code_points(input.chars().map(u32::from)),
                expected,
                "{production}"
            );
        }
        assert_eq!(
            edition.is_name(&input),
            edition
                .matcher(Production::Name)
                .is_some_and(|matcher| matcher.is_match(&input))
        );
        assert_eq!(
            edition.is_nmtoken(&input),
            edition
                .matcher(Production::Nmtoken)
                .is_some_and(|matcher| matcher.is_match(&input))
        );
    }
});
