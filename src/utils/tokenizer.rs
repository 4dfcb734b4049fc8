//! Splitting interactive input lines into argument tokens

use crate::errors::GitpError;
use regex::Regex;
use std::sync::LazyLock;

// A token is a run of quoted segments and unquoted non-space characters
static TOKEN_RGX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:"[^"]*"|[^\s"]+)+"#).expect("token pattern is valid")
});

/// Split a line on whitespace, keeping double-quoted segments whole
///
/// Quotes are removed and a quoted segment joins the characters around it:
/// `commit -m "two words"` yields `commit`, `-m`, `two words`, and
/// `-m"two words"` yields `-mtwo words`.
pub fn split_command_line(line: &str) -> Result<Vec<String>, GitpError> {
    if line.matches('"').count() % 2 != 0 {
        return Err(GitpError::usage(format!("Unterminated quote in '{}'", line)));
    }

    Ok(TOKEN_RGX
        .find_iter(line)
        .map(|token| token.as_str().replace('"', ""))
        .collect())
}
