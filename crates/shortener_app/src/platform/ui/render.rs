use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use shortener_core::AppViewModel;

use super::constants::{colors, keys};
use super::layout::{form_layout, FormLayout};

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let layout = form_layout(frame.area());

    render_title(frame, layout.title, view);
    render_input(frame, &layout, view);
    render_submit(frame, layout.submit, view);
    render_outcome(frame, layout.outcome, view);
    if let Some(notice) = &view.notice {
        frame.render_widget(
            Paragraph::new(notice.as_str()).style(Style::default().fg(colors::PRIMARY)),
            layout.notice,
        );
    }
    render_howto(frame, layout.howto, view);
    render_footer(frame, layout.footer, view);
}

fn render_title(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let title = Paragraph::new(view.text.title)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, area);
}

fn render_input(frame: &mut Frame, layout: &FormLayout, view: &AppViewModel) {
    let content = if view.input.is_empty() {
        Line::from(Span::styled(
            view.text.input_placeholder,
            Style::default().fg(colors::MUTED),
        ))
    } else {
        Line::from(view.input.as_str())
    };
    let border = if view.input_issue.is_some() {
        colors::ERROR
    } else {
        colors::PRIMARY
    };
    // Scroll so the end of the text and the cursor cell after it stay visible.
    let inner_width = layout.input.width.saturating_sub(2);
    let typed = u16::try_from(Span::raw(view.input.as_str()).width()).unwrap_or(u16::MAX);
    let offset = typed.saturating_sub(inner_width.saturating_sub(1));

    let input = Paragraph::new(content).scroll((0, offset)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(format!("{} *", view.text.input_label)),
    );
    frame.render_widget(input, layout.input);

    let x = layout
        .input
        .x
        .saturating_add(1)
        .saturating_add(typed - offset);
    frame.set_cursor_position(Position::new(x, layout.input.y.saturating_add(1)));

    if let Some(issue) = &view.input_issue {
        frame.render_widget(
            Paragraph::new(issue.as_str()).style(Style::default().fg(colors::ERROR)),
            layout.input_issue,
        );
    }
}

fn render_submit(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let label = match view.busy_glyph {
        Some(glyph) => format!("{glyph} {}", view.submit_label),
        None => format!("{}  [{}]", view.submit_label, keys::SUBMIT),
    };
    let style = if view.submit_enabled {
        Style::default()
            .fg(Color::Black)
            .bg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray).bg(colors::MUTED)
    };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    frame.render_widget(button, area);
}

fn render_outcome(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    if let Some(error) = &view.error {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::ERROR));
        let message = Paragraph::new(error.as_str())
            .style(Style::default().fg(colors::ERROR))
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let Some(short_url) = &view.short_url else {
        return;
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::SUCCESS))
        .title(Span::styled(
            view.text.result_heading,
            Style::default().fg(colors::SUCCESS).add_modifier(Modifier::BOLD),
        ));
    let lines = vec![
        Line::from(Span::styled(
            short_url.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            hint(keys::REDIRECT, view.text.redirect),
            Span::raw("  "),
            hint(keys::COPY, view.text.copy),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_howto(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let muted = Style::default().fg(colors::MUTED);
    let mut lines = vec![Line::from(Span::styled(
        view.text.howto_heading,
        muted.add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        view.text
            .howto_steps
            .iter()
            .enumerate()
            .map(|(i, step)| Line::from(Span::styled(format!("{}. {step}", i + 1), muted))),
    );
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let mut spans = vec![hint(keys::SUBMIT, view.text.submit)];
    if view.redirect_enabled {
        spans.push(Span::raw("  "));
        spans.push(hint(keys::REDIRECT, view.text.redirect));
        spans.push(Span::raw("  "));
        spans.push(hint(keys::COPY, view.text.copy));
    }
    spans.push(Span::raw("  "));
    spans.push(hint(keys::QUIT, view.text.quit));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hint(key: &'static str, action: &'static str) -> Span<'static> {
    Span::styled(format!("[{key}] {action}"), Style::default().fg(colors::MUTED))
}
