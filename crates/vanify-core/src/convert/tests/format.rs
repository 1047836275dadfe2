use crate::convert::format::render;
use crate::convert::testutil::test_dict;
use crate::convert::{convert, format};

#[test]
fn test_clean_seven_keeps_local_part_whole() {
    assert_eq!(render("1800COCONUT"), "1-800-COCONUT");
    assert_eq!(render("800COCONUT"), "800-COCONUT");
}

#[test]
fn test_exchange_separator() {
    assert_eq!(render("1800111BALL"), "1-800-111-BALL");
    assert_eq!(render("1800BAN4103"), "1-800-BAN-4103");
    assert_eq!(render("1800225HELP"), "1-800-225-HELP");
}

#[test]
fn test_boundary_hyphens_on_both_sides_of_a_word() {
    assert_eq!(render("180000APPLE"), "1-800-00-APPLE");
}

#[test]
fn test_all_digit_string() {
    assert_eq!(render("18001112255"), "1-800-1112255");
}

#[test]
fn test_without_country_code() {
    assert_eq!(render("800111BALL"), "80011-1-BALL");
}

#[test]
fn test_short_strings_skip_exchange_separator() {
    assert_eq!(render("BALL"), "BALL");
    assert_eq!(render("1BALL"), "1-BALL");
}

#[test]
fn test_format_matches_display() {
    let dict = test_dict();
    let results = convert(&dict, "18002626688", 5).unwrap();
    for candidate in &results {
        assert_eq!(format(candidate), candidate.display());
    }
}
