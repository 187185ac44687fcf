use engine_logging::{engine_debug, engine_info};

use crate::{validate_long_url, AppState, Effect, Msg, Notice, RequestPhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            if text != state.input() {
                state.set_input(text);
            }
            Vec::new()
        }
        Msg::Submitted => {
            // The submit control is disabled while a request is in flight.
            if state.is_loading() {
                return (state, Vec::new());
            }
            match validate_long_url(state.input()) {
                Ok(url) => {
                    let request_id = state.begin_request();
                    engine_info!("Submitting request_id={} url_len={}", request_id, url.len());
                    vec![Effect::CreateShortUrl { request_id, url }]
                }
                Err(issue) => {
                    engine_debug!("Submission blocked: {:?}", issue);
                    state.set_input_issue(issue);
                    Vec::new()
                }
            }
        }
        Msg::CreateSucceeded {
            request_id,
            short_url,
        } => {
            if !state.finish_request(request_id, RequestPhase::Succeeded { short_url }) {
                engine_debug!("Ignoring completion for stale request_id={}", request_id);
            }
            Vec::new()
        }
        Msg::CreateFailed { request_id } => {
            if !state.finish_request(request_id, RequestPhase::Failed) {
                engine_debug!("Ignoring failure for stale request_id={}", request_id);
            }
            Vec::new()
        }
        Msg::RedirectClicked => match state.short_url() {
            Some(short_url) => vec![Effect::OpenRedirect {
                short_url: short_url.to_string(),
            }],
            None => Vec::new(),
        },
        Msg::CopyClicked => match state.short_url() {
            Some(short_url) => vec![Effect::CopyShortUrl {
                short_url: short_url.to_string(),
            }],
            None => Vec::new(),
        },
        Msg::CopyFinished { ok } => {
            state.set_notice(if ok { Notice::Copied } else { Notice::CopyFailed });
            Vec::new()
        }
        Msg::OpenFailed => {
            state.set_notice(Notice::OpenFailed);
            Vec::new()
        }
        Msg::Tick => {
            state.advance_busy_frame();
            Vec::new()
        }
    };

    (state, effects)
}
