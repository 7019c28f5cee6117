use super::*;

#[test]
fn short_passwords_are_weak() {
    assert_eq!(rate_password(""), PasswordStrength::Weak);
    assert_eq!(rate_password("Ab1"), PasswordStrength::Weak);
    assert_eq!(rate_password("12345"), PasswordStrength::Weak);
}

#[test]
fn six_chars_without_variety_is_medium() {
    assert_eq!(rate_password("abcdef"), PasswordStrength::Medium);
    assert_eq!(rate_password("12345678"), PasswordStrength::Medium);
}

#[test]
fn long_password_needs_upper_and_digit_for_strong() {
    assert_eq!(rate_password("Abcdef12"), PasswordStrength::Strong);
    // Missing a digit.
    assert_eq!(rate_password("Abcdefgh"), PasswordStrength::Medium);
    // Missing an uppercase letter.
    assert_eq!(rate_password("abcdefg1"), PasswordStrength::Medium);
    // Long enough but neither.
    assert_eq!(rate_password("abcdefghij"), PasswordStrength::Medium);
}

#[test]
fn strength_labels_and_classes() {
    assert_eq!(PasswordStrength::Weak.label(), "weak");
    assert_eq!(PasswordStrength::Strong.css_class(), "password-strength--strong");
}
