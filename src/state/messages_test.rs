use super::*;

// =============================================================
// show / dismiss epoch semantics
// =============================================================

#[test]
fn show_replaces_the_visible_banner() {
    let mut m = MessagesState::default();
    m.show(MessageKind::Error, "first".to_owned());
    m.show(MessageKind::Success, "second".to_owned());

    let entry = m.entry.expect("banner visible");
    assert_eq!(entry.kind, MessageKind::Success);
    assert_eq!(entry.text, "second");
}

#[test]
fn dismiss_with_current_epoch_hides_banner() {
    let mut m = MessagesState::default();
    let epoch = m.show(MessageKind::Success, "done".to_owned());
    m.dismiss(epoch);
    assert!(m.entry.is_none());
}

#[test]
fn stale_dismiss_keeps_newer_message() {
    let mut m = MessagesState::default();
    let old = m.show(MessageKind::Success, "old".to_owned());
    m.show(MessageKind::Error, "new".to_owned());

    // The timer for the first message fires after the second was shown.
    m.dismiss(old);
    assert_eq!(m.entry.map(|e| e.text), Some("new".to_owned()));
}

#[test]
fn dismiss_now_always_hides() {
    let mut m = MessagesState::default();
    m.show(MessageKind::Error, "oops".to_owned());
    m.dismiss_now();
    assert!(m.entry.is_none());
}

// =============================================================
// MessageKind
// =============================================================

#[test]
fn kind_css_classes() {
    assert_eq!(MessageKind::Success.css_class(), "success");
    assert_eq!(MessageKind::Error.css_class(), "error");
}
