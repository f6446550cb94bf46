use super::*;

#[test]
fn parse_select_value_reads_numbers() {
    assert_eq!(parse_select_value("7"), Some(7));
    assert_eq!(parse_select_value(" 29 "), Some(29));
}

#[test]
fn parse_select_value_rejects_placeholder_and_garbage() {
    assert_eq!(parse_select_value(""), None);
    assert_eq!(parse_select_value("0"), None);
    assert_eq!(parse_select_value("month"), None);
    assert_eq!(parse_select_value("-3"), None);
}
