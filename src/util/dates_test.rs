use super::*;

#[test]
fn days_in_month_matches_fixed_table() {
    let expected = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    for month in 1..=12u8 {
        assert_eq!(days_in_month(month), expected[usize::from(month) - 1]);
    }
}

#[test]
fn february_is_always_29_days() {
    assert_eq!(days_in_month(2), 29);
    assert_eq!(day_options(2), (1..=29).collect::<Vec<u8>>());
}

#[test]
fn every_month_yields_between_1_and_31_options() {
    for month in 1..=12u8 {
        let options = day_options(month);
        assert!(!options.is_empty());
        assert!(options.len() <= 31);
        assert_eq!(options.first().copied(), Some(1));
        assert_eq!(options.last().copied(), Some(days_in_month(month)));
    }
}

#[test]
fn out_of_range_months_yield_no_days() {
    assert_eq!(days_in_month(0), 0);
    assert_eq!(days_in_month(13), 0);
    assert!(day_options(0).is_empty());
    assert!(day_options(13).is_empty());
}

#[test]
fn month_name_covers_calendar_bounds() {
    assert_eq!(month_name(1), Some("January"));
    assert_eq!(month_name(12), Some("December"));
    assert_eq!(month_name(0), None);
    assert_eq!(month_name(13), None);
}

#[test]
fn format_date_expands_month_and_strips_padding() {
    assert_eq!(format_date("07/04"), "July 4");
    assert_eq!(format_date("12/25"), "December 25");
    assert_eq!(format_date("2/29"), "February 29");
}

#[test]
fn format_date_passes_through_unparsable_input() {
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("not-a-date"), "not-a-date");
    assert_eq!(format_date("13/01"), "13/01");
}
