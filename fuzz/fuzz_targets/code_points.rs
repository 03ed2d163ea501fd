#![no_main]

use libfuzzer_sys::fuzz_target;
use xmlchars::{xml_1_0, Matcher, Production};

fuzz_target!(|code_points: Vec<u32>| {
    for code_point in code_points {
        for edition in xml_1_0::EDITIONS {
            let in_class = |production| {
                edition
                    .matcher(production)
                    .and_then(Matcher::class)
                    .is_some_and(|class| class.contains(code_point))
            };
            assert_eq!(edition.is_char(code_point), in_class(Production::Char));
            assert_eq!(edition.is_s(code_point), in_class(Production::S));
            assert_eq!(
                edition.is_name_start_char(code_point),
                in_class(Production::NameStartChar)
            );
            assert_eq!(
                edition.is_name_char(code_point),
                in_class(Production::NameChar)
            );
            if edition.is_name_start_char(code_point) {
                assert!(edition.is_name_char(code_point));
            }
            if edition.is_name_char(code_point) {
                assert!(edition.is_char(code_point));
            }
            if let Some(c) = char::from_u32(code_point) {
                assert_eq!(
                    edition.is_name(c.encode_utf8(&mut [0; 4])),
                    edition.is_name_start_char(code_point)
                );
            }
        }
    }
});
