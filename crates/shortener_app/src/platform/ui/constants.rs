/// Widest the form grows on large terminals.
pub const MAX_FORM_WIDTH: u16 = 80;

pub mod colors {
    use ratatui::style::Color;

    pub const PRIMARY: Color = Color::Cyan;
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const MUTED: Color = Color::DarkGray;
}

pub mod keys {
    pub const SUBMIT: &str = "Enter";
    pub const REDIRECT: &str = "Ctrl+O";
    pub const COPY: &str = "Ctrl+Y";
    pub const QUIT: &str = "Esc";
}
