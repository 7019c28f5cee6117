#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum password length accepted by the registration form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Check the login form fields. Both email and password must be non-empty.
///
/// # Errors
///
/// Returns the validation message to display when a field is missing.
pub fn check_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Please fill in all fields".to_owned());
    }
    Ok(())
}

/// Check the registration form fields: non-empty email and password, and a
/// minimum password length.
///
/// # Errors
///
/// Returns the validation message to display when a check fails.
pub fn check_registration(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Email and password are required".to_owned());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}

/// Trim a form field and map an empty result to `None`.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
