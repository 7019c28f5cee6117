use super::*;

#[test]
fn strips_time_component() {
    assert_eq!(format_created_at("2024-05-01T12:30:00"), "2024-05-01");
    assert_eq!(format_created_at("2024-05-01 12:30:00"), "2024-05-01");
}

#[test]
fn passes_through_bare_dates() {
    assert_eq!(format_created_at("2024-05-01"), "2024-05-01");
    assert_eq!(format_created_at(""), "");
}
