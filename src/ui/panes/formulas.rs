//! Formula list pane rendering
//!
//! Shows every analyzed formula with a validity marker. The selected entry
//! is the one the tokens, tree, and diagnostics panes describe.

use crate::parser::Analysis;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the formula list pane
pub fn render_formulas_pane(
    frame: &mut Frame,
    area: Rect,
    analyses: &[Analysis],
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Formulas ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let total_items = analyses.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Keep the selected entry visible
    if selected < *scroll_offset {
        *scroll_offset = selected;
    } else if selected >= *scroll_offset + visible_height {
        *scroll_offset = selected + 1 - visible_height;
    }

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_lines: Vec<Line> = analyses
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, analysis)| {
            let is_selected = idx == selected;

            let marker = if analysis.is_valid() { "✓" } else { "✗" };
            let marker_style = if analysis.is_valid() {
                Style::default().fg(DEFAULT_THEME.success)
            } else {
                Style::default().fg(DEFAULT_THEME.error)
            };

            let num_style = if is_selected {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![
                Span::styled(format!("{:3} ", idx + 1), num_style),
                Span::styled(marker, marker_style),
                Span::raw(" "),
                Span::styled(
                    analysis.source.clone(),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ];

            if is_selected {
                let selection = Style::default().bg(DEFAULT_THEME.selected_bg);
                for span in &mut spans {
                    span.style = span.style.patch(selection);
                }
            }

            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
