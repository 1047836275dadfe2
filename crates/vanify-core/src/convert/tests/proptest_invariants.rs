//! Property-based invariants over random digit strings.
//!
//! Every candidate must project back onto the canonical input digits, the
//! ranking must be deterministic, and scores must come out best-first.

use proptest::prelude::*;

use crate::convert::convert;
use crate::convert::testutil::test_dict;
use crate::keypad;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn candidates_project_back_and_rank_deterministically(digits in "[0-9]{1,12}") {
        let dict = test_dict();
        let first = convert(&dict, &digits, 10).unwrap();
        let second = convert(&dict, &digits, 10).unwrap();
        prop_assert_eq!(&first, &second);

        let canonical = if digits.len() == 10 {
            format!("1{digits}")
        } else {
            digits.clone()
        };
        for candidate in &first {
            let projected: String = candidate
                .wordified()
                .chars()
                .map(|c| keypad::digit_for(c).unwrap_or(c))
                .collect();
            prop_assert_eq!(projected, canonical.clone());
        }

        for pair in first.windows(2) {
            prop_assert!(pair[0].score() >= pair[1].score());
        }
    }
}
