use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use engine_logging::{engine_error, engine_info};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use shortener_core::{update, AppState, AppViewModel, Msg};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::input::{self, Command};
use super::terminal::{self, Tui};
use super::ui;

const TICK_INTERVAL: Duration = Duration::from_millis(75);
const INPUT_POLL: Duration = Duration::from_millis(20);

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    engine_info!("Starting shortener against {}", config.endpoint);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(&config, msg_tx.clone()).context("failed to start request engine")?;
    let mut controller = AppController::new(AppState::with_locale(config.locale), effects);

    // Background tick to animate the busy indicator.
    thread::Builder::new()
        .name("shortener-tick".to_string())
        .spawn(move || {
            while msg_tx.send(Msg::Tick).is_ok() {
                thread::sleep(TICK_INTERVAL);
            }
        })
        .context("failed to start ticker")?;

    let mut tui = terminal::enter().context("failed to initialize terminal")?;
    let result = event_loop(&mut tui, &mut controller, &msg_rx);
    if let Err(err) = terminal::restore(&mut tui) {
        engine_error!("Failed to restore terminal: {}", err);
    }
    engine_info!("Shortener exiting");
    result
}

fn event_loop(
    tui: &mut Tui,
    controller: &mut AppController,
    msg_rx: &mpsc::Receiver<Msg>,
) -> anyhow::Result<()> {
    loop {
        controller.process_pending_messages(msg_rx);

        if let Some(view) = controller.take_render() {
            tui.draw(|frame| ui::render::render(frame, &view))?;
        }

        if !event::poll(INPUT_POLL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match input::map_key(key, controller.state().input()) {
                    Some(Command::Quit) => return Ok(()),
                    Some(Command::Dispatch(msg)) => controller.dispatch_msg(msg),
                    None => {}
                }
            }
            Event::Paste(text) => {
                let msg = input::paste(controller.state().input(), &text);
                controller.dispatch_msg(msg);
            }
            Event::Resize(..) => controller.request_render(),
            _ => {}
        }
    }
}

/// Owns the state and routes effects; the terminal loop only feeds it messages.
struct AppController {
    state: AppState,
    effects: EffectRunner,
    needs_render: bool,
}

impl AppController {
    fn new(state: AppState, effects: EffectRunner) -> Self {
        Self {
            state,
            effects,
            needs_render: true,
        }
    }

    fn state(&self) -> &AppState {
        &self.state
    }

    fn process_pending_messages(&mut self, msg_rx: &mpsc::Receiver<Msg>) {
        while let Ok(msg) = msg_rx.try_recv() {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_render = true;
        }
        self.state = state;
        if !effects.is_empty() {
            self.effects.enqueue(effects);
        }
    }

    fn request_render(&mut self) {
        self.needs_render = true;
    }

    fn take_render(&mut self) -> Option<AppViewModel> {
        std::mem::take(&mut self.needs_render).then(|| self.state.view())
    }
}

#[cfg(test)]
mod tests {
    use super::super::effects::test_support::{runner, RecordingBrowser, RecordingClipboard};
    use super::*;

    const WAIT: Duration = Duration::from_secs(5);

    fn controller() -> (AppController, mpsc::Receiver<Msg>, RecordingBrowser) {
        let browser = RecordingBrowser::default();
        let (effects, msg_rx) = runner(browser.clone(), RecordingClipboard::default());
        (AppController::new(AppState::new(), effects), msg_rx, browser)
    }

    #[test]
    fn first_frame_is_always_rendered() {
        let (mut controller, _rx, _browser) = controller();
        assert!(controller.take_render().is_some());
        assert!(controller.take_render().is_none());
    }

    #[test]
    fn submit_round_trip_displays_short_url() {
        let (mut controller, msg_rx, _browser) = controller();
        controller.dispatch_msg(Msg::InputChanged("https://example.com".to_string()));
        controller.dispatch_msg(Msg::Submitted);

        let view = controller.take_render().unwrap();
        assert!(view.loading);
        assert!(!view.submit_enabled);

        let completion = msg_rx.recv_timeout(WAIT).unwrap();
        controller.dispatch_msg(completion);

        let view = controller.take_render().unwrap();
        assert_eq!(view.short_url.as_deref(), Some("abc123"));
        assert_eq!(view.error, None);
    }

    #[test]
    fn failed_round_trip_displays_error() {
        let (mut controller, msg_rx, _browser) = controller();
        controller.dispatch_msg(Msg::InputChanged("https://fail.example.com".to_string()));
        controller.dispatch_msg(Msg::Submitted);
        controller.dispatch_msg(msg_rx.recv_timeout(WAIT).unwrap());

        let view = controller.take_render().unwrap();
        assert_eq!(view.short_url, None);
        assert!(view.error.is_some());
    }

    #[test]
    fn redirect_after_success_opens_browser_once() {
        let (mut controller, msg_rx, browser) = controller();
        controller.dispatch_msg(Msg::InputChanged("https://example.com".to_string()));
        controller.dispatch_msg(Msg::Submitted);
        controller.dispatch_msg(msg_rx.recv_timeout(WAIT).unwrap());

        controller.dispatch_msg(Msg::RedirectClicked);

        assert_eq!(
            *browser.opened.lock().unwrap(),
            vec!["http://api.test/v1/redirect-url/abc123".to_string()]
        );
    }
}
