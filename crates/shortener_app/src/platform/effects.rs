use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_info, engine_warn};
use shortener_core::{Effect, Msg};
use shortener_engine::{
    EngineError, EngineEvent, EngineEvents, EngineHandle, Endpoint, ReqwestShortener, Shortener,
};
use thiserror::Error;

use super::config::AppConfig;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("could not launch browser: {0}")]
    Browser(#[from] io::Error),
    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Opens a URL in a new browser context.
pub trait BrowserLauncher {
    fn open(&self, url: &str) -> Result<(), ActionError>;
}

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ActionError>;
}

pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), ActionError> {
        webbrowser::open(url)?;
        Ok(())
    }
}

/// System clipboard, opened on first use and kept alive so X11/Wayland
/// selections outlive the call.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ActionError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        self.inner.insert(clipboard).set_text(text.to_string())?;
        Ok(())
    }
}

pub struct EffectRunner {
    engine: EngineHandle,
    endpoint: Endpoint,
    browser: Box<dyn BrowserLauncher>,
    clipboard: Box<dyn ClipboardSink>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(config: &AppConfig, msg_tx: mpsc::Sender<Msg>) -> anyhow::Result<Self> {
        let shortener = ReqwestShortener::new(config.endpoint.clone(), &config.client)?;
        let runner = Self::with_parts(
            Arc::new(shortener),
            config.endpoint.clone(),
            Box::new(SystemBrowser),
            Box::new(SystemClipboard::default()),
            msg_tx,
        )?;
        Ok(runner)
    }

    pub fn with_parts(
        shortener: Arc<dyn Shortener>,
        endpoint: Endpoint,
        browser: Box<dyn BrowserLauncher>,
        clipboard: Box<dyn ClipboardSink>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Result<Self, EngineError> {
        let (engine, events) = EngineHandle::spawn(shortener)?;
        spawn_event_loop(events, msg_tx.clone())?;
        Ok(Self {
            engine,
            endpoint,
            browser,
            clipboard,
            msg_tx,
        })
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CreateShortUrl { request_id, url } => {
                    engine_info!(
                        "CreateShortUrl request_id={} url_len={} url={}",
                        request_id,
                        url.len(),
                        url
                    );
                    if !self.engine.create(request_id, url) {
                        let _ = self.msg_tx.send(Msg::CreateFailed { request_id });
                    }
                }
                Effect::OpenRedirect { short_url } => {
                    let target = self.endpoint.redirect_url(&short_url);
                    engine_info!("OpenRedirect {}", target);
                    if let Err(err) = self.browser.open(target.as_str()) {
                        engine_warn!("Opening {} failed: {}", target, err);
                        let _ = self.msg_tx.send(Msg::OpenFailed);
                    }
                }
                Effect::CopyShortUrl { short_url } => {
                    let link = self.endpoint.redirect_url(&short_url);
                    let ok = match self.clipboard.set_text(link.as_str()) {
                        Ok(()) => true,
                        Err(err) => {
                            engine_warn!("Copying {} failed: {}", link, err);
                            false
                        }
                    };
                    let _ = self.msg_tx.send(Msg::CopyFinished { ok });
                }
            }
        }
    }
}

fn spawn_event_loop(events: EngineEvents, msg_tx: mpsc::Sender<Msg>) -> io::Result<()> {
    thread::Builder::new()
        .name("shortener-events".to_string())
        .spawn(move || {
            while let Some(event) = events.recv() {
                if msg_tx.send(map_event(event)).is_err() {
                    break;
                }
            }
        })?;
    Ok(())
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CreateCompleted { request_id, result } => match result {
            Ok(short_url) => Msg::CreateSucceeded {
                request_id,
                short_url,
            },
            Err(_) => Msg::CreateFailed { request_id },
        },
    }
}


#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::test_support::*;
    use super::*;

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn create_effect_reports_success_message() {
        let (mut runner, msg_rx) = runner(RecordingBrowser::default(), RecordingClipboard::default());

        runner.enqueue(vec![Effect::CreateShortUrl {
            request_id: 4,
            url: "https://example.com".to_string(),
        }]);

        assert_eq!(
            msg_rx.recv_timeout(WAIT).unwrap(),
            Msg::CreateSucceeded {
                request_id: 4,
                short_url: "abc123".to_string(),
            }
        );
    }

    #[test]
    fn create_failure_becomes_uniform_failed_message() {
        let (mut runner, msg_rx) = runner(RecordingBrowser::default(), RecordingClipboard::default());

        runner.enqueue(vec![Effect::CreateShortUrl {
            request_id: 5,
            url: "https://fail.example.com".to_string(),
        }]);

        assert_eq!(
            msg_rx.recv_timeout(WAIT).unwrap(),
            Msg::CreateFailed { request_id: 5 }
        );
    }

    #[test]
    fn redirect_opens_exactly_one_target() {
        let browser = RecordingBrowser::default();
        let (mut runner, msg_rx) = runner(browser.clone(), RecordingClipboard::default());

        runner.enqueue(vec![Effect::OpenRedirect {
            short_url: "abc123".to_string(),
        }]);

        assert_eq!(
            *browser.opened.lock().unwrap(),
            vec!["http://api.test/v1/redirect-url/abc123".to_string()]
        );
        assert!(msg_rx.try_recv().is_err());
    }

    #[test]
    fn launcher_failure_sends_open_failed() {
        let browser = RecordingBrowser {
            fail: true,
            ..RecordingBrowser::default()
        };
        let (mut runner, msg_rx) = runner(browser, RecordingClipboard::default());

        runner.enqueue(vec![Effect::OpenRedirect {
            short_url: "abc123".to_string(),
        }]);

        assert_eq!(msg_rx.recv_timeout(WAIT).unwrap(), Msg::OpenFailed);
    }

    #[test]
    fn copy_puts_full_redirect_link_on_clipboard() {
        let clipboard = RecordingClipboard::default();
        let (mut runner, msg_rx) = runner(RecordingBrowser::default(), clipboard.clone());

        runner.enqueue(vec![Effect::CopyShortUrl {
            short_url: "abc123".to_string(),
        }]);

        assert_eq!(
            *clipboard.copied.lock().unwrap(),
            vec!["http://api.test/v1/redirect-url/abc123".to_string()]
        );
        assert_eq!(msg_rx.recv_timeout(WAIT).unwrap(), Msg::CopyFinished { ok: true });
    }
}
