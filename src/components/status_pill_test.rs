use super::*;

#[test]
fn status_label_covers_all_states() {
    assert_eq!(status_label(ApiStatus::Unknown), "Checking API...");
    assert_eq!(status_label(ApiStatus::Online), "API Online");
    assert_eq!(status_label(ApiStatus::Offline), "API Offline");
}

#[test]
fn status_class_distinguishes_states() {
    assert_ne!(status_class(ApiStatus::Online), status_class(ApiStatus::Offline));
    assert!(status_class(ApiStatus::Unknown).contains("status-pill--unknown"));
}
