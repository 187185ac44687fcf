#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box (full new text).
    InputChanged(String),
    /// User submitted the form.
    Submitted,
    /// The create request finished with a short URL.
    CreateSucceeded {
        request_id: crate::RequestId,
        short_url: String,
    },
    /// The create request failed for any reason.
    CreateFailed { request_id: crate::RequestId },
    /// User triggered the redirect action.
    RedirectClicked,
    /// User asked to copy the short link.
    CopyClicked,
    /// Clipboard write finished.
    CopyFinished { ok: bool },
    /// The browser could not be launched.
    OpenFailed,
    /// UI/render tick; drives the busy indicator.
    Tick,
}
