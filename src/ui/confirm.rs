//! Confirmation answer parsing

use crate::errors::GitpError;

/// Interpret a confirmation answer
///
/// Empty, `y` and `yes` are affirmative, `n` and `no` are negative, in any
/// case and surrounding whitespace. Anything else is a [`GitpError::Prompt`].
pub fn parse_confirmation(answer: &str) -> Result<bool, GitpError> {
    let answer = answer.trim();
    match answer.to_uppercase().as_str() {
        "" | "Y" | "YES" => Ok(true),
        "N" | "NO" => Ok(false),
        _ => Err(GitpError::Prompt(format!("Invalid input '{}'", answer))),
    }
}
