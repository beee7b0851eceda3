use super::*;

#[test]
fn parse_percent_text_reads_leading_integer() {
    assert_eq!(parse_percent_text("40%"), Some(40));
    assert_eq!(parse_percent_text("  100 % "), Some(100));
    assert_eq!(parse_percent_text("0%"), Some(0));
}

#[test]
fn parse_percent_text_rejects_non_numeric() {
    assert_eq!(parse_percent_text(""), None);
    assert_eq!(parse_percent_text("--"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn lookups_are_absent_off_browser() {
    assert_eq!(element_rect(PROFILE_ICON_ID), None);
    assert_eq!(measure_hidden_width(PROFILE_MENU_ID), None);
    assert_eq!(visual_course_progress(), None);
    assert_eq!(current_path(), "/");
    hard_navigate("/");
}
