use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `url` to the create endpoint; the outcome comes back tagged with `request_id`.
    CreateShortUrl { request_id: RequestId, url: String },
    /// Open the redirect target for `short_url` in a new browser context.
    OpenRedirect { short_url: String },
    /// Put the openable link for `short_url` on the clipboard.
    CopyShortUrl { short_url: String },
}
