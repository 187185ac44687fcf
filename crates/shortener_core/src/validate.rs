use url::Url;

use crate::UiText;

/// Why the form refused to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIssue {
    Missing,
    NotAUrl,
}

impl InputIssue {
    pub fn message(self, text: &UiText) -> &'static str {
        match self {
            InputIssue::Missing => text.input_missing,
            InputIssue::NotAUrl => text.input_not_a_url,
        }
    }
}

/// Checks `raw` the way a required `type=url` field does: surrounding
/// whitespace is stripped, the rest must be non-empty and an absolute URL.
///
/// Returns the trimmed text unchanged so the service sees what the user typed.
pub fn validate_long_url(raw: &str) -> Result<String, InputIssue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputIssue::Missing);
    }
    Url::parse(trimmed).map_err(|_| InputIssue::NotAUrl)?;
    Ok(trimmed.to_string())
}
