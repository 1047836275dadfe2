use crate::convert::segment::{letter_runs, validate, Validation};
use crate::dict::WordTrie;

fn dict() -> WordTrie {
    WordTrie::from_words(["CALL", "NOW", "BALL"])
}

#[test]
fn test_letter_runs() {
    assert_eq!(letter_runs("1800BAN4103"), vec!["BAN"]);
    assert_eq!(letter_runs("180000APPLE"), vec!["APPLE"]);
    assert_eq!(letter_runs("1BALL2NOW"), vec!["BALL", "NOW"]);
    assert_eq!(letter_runs("ABC"), vec!["ABC"]);
    assert!(letter_runs("18001112255").is_empty());
}

#[test]
fn test_all_digit_string_is_invalid() {
    assert_eq!(
        validate(&dict(), "18001112255"),
        Validation { valid: false, max_run: 0, max_word_span: 0 }
    );
}

#[test]
fn test_single_word_run() {
    assert_eq!(
        validate(&dict(), "1800111BALL"),
        Validation { valid: true, max_run: 4, max_word_span: 4 }
    );
}

#[test]
fn test_compound_run_splits_into_two_words() {
    assert_eq!(
        validate(&dict(), "1CALLNOW255"),
        Validation { valid: true, max_run: 7, max_word_span: 4 }
    );
}

#[test]
fn test_longest_metrics_across_runs() {
    assert_eq!(
        validate(&dict(), "1BALL2XY255"),
        Validation { valid: true, max_run: 4, max_word_span: 4 }
    );
}

#[test]
fn test_letters_without_words_still_validate() {
    // Intentional: a run that decomposes into no dictionary word keeps the
    // string valid with a word span of 0, so such candidates surface with
    // a low score rather than being dropped.
    assert_eq!(
        validate(&dict(), "1800XYZ1234"),
        Validation { valid: true, max_run: 3, max_word_span: 0 }
    );
}
