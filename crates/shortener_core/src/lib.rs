//! Shortener core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod text;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, Notice, RequestId, RequestPhase};
pub use text::{Locale, UiText};
pub use update::update;
pub use validate::{validate_long_url, InputIssue};
pub use view_model::{AppViewModel, BUSY_FRAMES};
