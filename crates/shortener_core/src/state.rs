use crate::view_model::{AppViewModel, BUSY_FRAMES};
use crate::{InputIssue, Locale};

pub type RequestId = u64;

/// Lifecycle of the create request. Output and error share this enum, so at
/// most one of them is ever populated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Submitting {
        request_id: RequestId,
    },
    Succeeded {
        short_url: String,
    },
    Failed,
}

/// Outcome of a local action, shown until the next edit or submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Copied,
    CopyFailed,
    OpenFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    locale: Locale,
    input: String,
    phase: RequestPhase,
    input_issue: Option<InputIssue>,
    notice: Option<Notice>,
    next_request_id: RequestId,
    busy_frame: usize,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_locale(Locale::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            input: String::new(),
            phase: RequestPhase::Idle,
            input_issue: None,
            notice: None,
            next_request_id: 1,
            busy_frame: 0,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let text = self.locale.text();
        let loading = self.is_loading();
        let short_url = match &self.phase {
            RequestPhase::Succeeded { short_url } => Some(short_url.clone()),
            _ => None,
        };
        AppViewModel {
            text,
            input: self.input.clone(),
            input_issue: self.input_issue.map(|issue| issue.message(text).to_string()),
            loading,
            submit_enabled: !loading,
            submit_label: (if loading { text.submitting } else { text.submit }).to_string(),
            busy_glyph: loading.then(|| BUSY_FRAMES[self.busy_frame % BUSY_FRAMES.len()]),
            redirect_enabled: short_url.is_some(),
            short_url,
            error: matches!(self.phase, RequestPhase::Failed)
                .then(|| text.create_failed.to_string()),
            notice: self.notice.map(|notice| notice_text(notice, text).to_string()),
            dirty: self.dirty,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> &RequestPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, RequestPhase::Submitting { .. })
    }

    pub fn short_url(&self) -> Option<&str> {
        match &self.phase {
            RequestPhase::Succeeded { short_url } => Some(short_url),
            _ => None,
        }
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
        self.input_issue = None;
        self.notice = None;
        self.mark_dirty();
    }

    pub(crate) fn set_input_issue(&mut self, issue: InputIssue) {
        self.input_issue = Some(issue);
        self.mark_dirty();
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mark_dirty();
    }

    /// Enters `Submitting`, clearing any previous output, error and notice.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.phase = RequestPhase::Submitting { request_id };
        self.input_issue = None;
        self.notice = None;
        self.busy_frame = 0;
        self.mark_dirty();
        request_id
    }

    /// Resolves the outstanding request. Returns false when `request_id` is not
    /// the one in flight.
    pub(crate) fn finish_request(&mut self, request_id: RequestId, outcome: RequestPhase) -> bool {
        match self.phase {
            RequestPhase::Submitting {
                request_id: pending,
            } if pending == request_id => {
                self.phase = outcome;
                self.mark_dirty();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn advance_busy_frame(&mut self) {
        if self.is_loading() {
            self.busy_frame = self.busy_frame.wrapping_add(1);
            self.mark_dirty();
        }
    }
}

fn notice_text(notice: Notice, text: &crate::UiText) -> &'static str {
    match notice {
        Notice::Copied => text.copied,
        Notice::CopyFailed => text.copy_failed,
        Notice::OpenFailed => text.open_failed,
    }
}
