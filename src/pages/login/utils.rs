/// Pre-submit check so an obviously empty form never spends a round trip.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Please enter your email address.".into());
    }
    if password.is_empty() {
        return Err("Please enter your password.".into());
    }
    Ok(())
}
