//! Status bar rendering with keybindings and the formula input prompt

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `input` is `Some` while the app is capturing a new formula; the typed
/// text replaces the status message until Enter or Esc.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    input: Option<&str>,
    selected: usize,
    total: usize,
) {
    // Split status bar into left and right
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(50),
            ratatui::layout::Constraint::Percentage(50),
        ])
        .split(area);

    // Left side: formula position and status, or the input prompt
    let left_spans = if let Some(text) = input {
        vec![
            Span::styled(
                " New formula ",
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", text),
                Style::default()
                    .bg(DEFAULT_THEME.selected_bg)
                    .fg(DEFAULT_THEME.fg),
            ),
            Span::styled(
                "█",
                Style::default()
                    .bg(DEFAULT_THEME.selected_bg)
                    .fg(DEFAULT_THEME.secondary),
            ),
        ]
    } else {
        vec![
            Span::styled(
                format!(" Formula {}/{} ", selected + 1, total),
                Style::default()
                    .bg(DEFAULT_THEME.primary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " | ",
                Style::default()
                    .bg(DEFAULT_THEME.selected_bg)
                    .fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                format!(" {} ", message),
                Style::default()
                    .bg(DEFAULT_THEME.selected_bg)
                    .fg(DEFAULT_THEME.fg),
            ),
        ]
    };

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.selected_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.selected_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.selected_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = if input.is_some() {
        vec![
            Span::styled(" ↵ ", key_style),
            Span::styled(" analyze ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" esc ", key_style),
            Span::styled(" cancel ", desc_style),
        ]
    } else {
        vec![
            Span::styled(" ⇥ ", key_style),
            Span::styled(" pane ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ←/→ ", key_style),
            Span::styled(" formula ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ↑/↓ ", key_style),
            Span::styled(" scroll ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" n ", key_style),
            Span::styled(" new ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled("q", key_style),
            Span::styled(" quit ", desc_style),
        ]
    };

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.selected_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
