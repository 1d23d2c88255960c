use crate::error::AppError;

/// Validate a client email used as a lookup/identity key, returning the
/// trimmed form. An empty key would otherwise create an unreachable project
/// row, so this fails fast instead.
pub fn validate_email(email: &str) -> Result<&str, AppError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Client email must not be empty".into()));
    }
    if trimmed.len() > 320 || !trimmed.contains('@') {
        return Err(AppError::Validation(
            "Client email must be a valid address".into(),
        ));
    }
    Ok(trimmed)
}
