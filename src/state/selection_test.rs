use super::*;

#[test]
fn default_selection_is_incomplete() {
    let selection = DateSelection::default();
    assert!(!selection.is_complete());
    assert_eq!(selection.complete(), None);
}

#[test]
fn selection_completes_once_both_parts_set() {
    let mut selection = DateSelection::default();
    selection.set_month(Some(7));
    assert!(!selection.is_complete());
    selection.set_day(Some(4));
    assert_eq!(selection.complete(), Some((7, 4)));
}

#[test]
fn changing_month_clears_the_day() {
    let mut selection = DateSelection::default();
    selection.set_month(Some(1));
    selection.set_day(Some(31));
    selection.set_month(Some(2));
    assert_eq!(selection.day, None);
    assert!(!selection.is_complete());
}

#[test]
fn clearing_month_also_clears_the_day() {
    let mut selection = DateSelection {
        month: Some(3),
        day: Some(15),
    };
    selection.set_month(None);
    assert_eq!(selection, DateSelection::default());
}
