//! Property-based tests for template section splicing

use lcgen::splice::{Code, Splicer};
use proptest::prelude::*;

/// Lines that never look like section markers
fn plain_lines() -> impl Strategy<Value = Code> {
    prop::collection::vec("[a-z ;{}()]{0,12}", 0..8)
}

proptest! {
    #[test]
    fn test_own_body_round_trip_drops_only_markers(
        head in plain_lines(),
        body in plain_lines(),
        tail in plain_lines(),
    ) {
        let splicer = Splicer::new("//", "C++");
        let mut template = head.clone();
        template.push(splicer.begin_marker("TEST"));
        template.extend(body.iter().cloned());
        template.push(splicer.end_marker("TEST"));
        template.extend(tail.iter().cloned());

        let own = splicer.body(&template, "TEST").unwrap().to_vec();
        prop_assert_eq!(&own, &body);

        let out = splicer.replace(&template, &[("TEST", own)], false).unwrap();
        let expected: Code = head.into_iter().chain(body).chain(tail).collect();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn test_missing_section_names_it(section in "[A-Z]{1,8}", body in plain_lines()) {
        let splicer = Splicer::new("//", "C++");
        let err = splicer.replace(&body, &[(section.as_str(), Code::new())], false).unwrap_err();
        prop_assert!(err.to_string().contains(&section));
        prop_assert_eq!(splicer.replace(&body, &[(section.as_str(), Code::new())], true).unwrap(), body);
    }
}
