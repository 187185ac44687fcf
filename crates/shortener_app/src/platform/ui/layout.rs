use ratatui::layout::{Constraint, Layout, Rect};

use super::constants::MAX_FORM_WIDTH;

/// Screen regions of the form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub title: Rect,
    pub input: Rect,
    pub input_issue: Rect,
    pub submit: Rect,
    pub outcome: Rect,
    pub notice: Rect,
    pub howto: Rect,
    pub footer: Rect,
}

pub fn form_layout(area: Rect) -> FormLayout {
    let form = centered_column(area, MAX_FORM_WIDTH);
    let [title, input, input_issue, submit, outcome, notice, howto, _spacer, footer] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(form);

    FormLayout {
        title,
        input,
        input_issue,
        submit,
        outcome,
        notice,
        howto,
        footer,
    }
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
