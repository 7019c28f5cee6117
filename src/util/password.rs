#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Advisory password strength shown next to the registration form.
///
/// Purely cosmetic: the server does not enforce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Human-readable label for the strength indicator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }

    /// CSS modifier class for the strength indicator.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Weak => "password-strength--weak",
            Self::Medium => "password-strength--medium",
            Self::Strong => "password-strength--strong",
        }
    }
}

/// Rate a password: 8+ characters with an uppercase letter and a digit is
/// strong, 6+ characters is medium, anything shorter is weak.
pub fn rate_password(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    let has_upper = password.chars().any(char::is_uppercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if len >= 8 && has_upper && has_digit {
        PasswordStrength::Strong
    } else if len >= 6 {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Weak
    }
}
