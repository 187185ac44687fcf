//! Key translation for the form.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shortener_core::Msg;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Quit,
}

/// Map a key press to a command, given the current input text.
pub fn map_key(key: KeyEvent, input: &str) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let msg = match key.code {
        KeyCode::Esc => return Some(Command::Quit),
        KeyCode::Char('c') if ctrl => return Some(Command::Quit),
        KeyCode::Char('o') if ctrl => Msg::RedirectClicked,
        KeyCode::Char('y') if ctrl => Msg::CopyClicked,
        KeyCode::Char('u') if ctrl => Msg::InputChanged(String::new()),
        KeyCode::Char(_) if ctrl || alt => return None,
        KeyCode::Char(ch) => {
            let mut next = String::with_capacity(input.len() + ch.len_utf8());
            next.push_str(input);
            next.push(ch);
            Msg::InputChanged(next)
        }
        KeyCode::Backspace => {
            let mut next = input.to_string();
            next.pop()?;
            Msg::InputChanged(next)
        }
        KeyCode::Enter => Msg::Submitted,
        _ => return None,
    };
    Some(Command::Dispatch(msg))
}

/// Appends pasted text; the field is single-line, so line breaks are dropped.
pub fn paste(input: &str, pasted: &str) -> Msg {
    let mut next = input.to_string();
    next.extend(pasted.chars().filter(|ch| !matches!(ch, '\r' | '\n')));
    Msg::InputChanged(next)
}
