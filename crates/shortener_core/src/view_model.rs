use crate::UiText;

/// Frames of the busy indicator shown next to the submit label.
pub const BUSY_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub text: &'static UiText,
    pub input: String,
    pub input_issue: Option<String>,
    pub loading: bool,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub busy_glyph: Option<char>,
    pub short_url: Option<String>,
    pub error: Option<String>,
    pub redirect_enabled: bool,
    pub notice: Option<String>,
    pub dirty: bool,
}
