//! Diagnostics pane rendering
//!
//! Shows the verdict for the selected formula. A valid formula gets its
//! canonical fully-parenthesized form; an invalid one gets the syntax
//! diagnostic. Illegal characters the lexer skipped are always listed, and
//! a caret row under the formula marks every offset a diagnostic points at.

use crate::parser::Analysis;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build a row of spaces with a caret under each marked offset.
fn caret_line(offsets: &[usize]) -> String {
    let width = offsets.iter().max().map(|max| max + 1).unwrap_or(0);
    let mut carets = vec![' '; width];
    for &offset in offsets {
        carets[offset] = '^';
    }
    carets.into_iter().collect()
}

/// Render the diagnostics pane
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    analysis: &Analysis,
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
        .title(" Diagnostics ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines: Vec<Line> = Vec::new();

    // Echo the formula, with a caret row when anything points at it
    lines.push(Line::from(Span::styled(
        analysis.source.clone(),
        Style::default().fg(DEFAULT_THEME.fg),
    )));

    let mut error_offsets: Vec<usize> = analysis
        .lexical_errors
        .iter()
        .map(|error| error.position)
        .collect();
    if let Err(error) = &analysis.result {
        error_offsets.push(error.position());
    }
    if !error_offsets.is_empty() {
        lines.push(Line::from(Span::styled(
            caret_line(&error_offsets),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::default());

    match &analysis.result {
        Ok(ast) => {
            lines.push(Line::from(Span::styled(
                "Formula is VALID",
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::styled("Canonical: ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(ast.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            ]));
        }
        Err(error) => {
            lines.push(Line::from(Span::styled(
                "Formula is INVALID",
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(DEFAULT_THEME.error),
            )));
        }
    }

    if !analysis.lexical_errors.is_empty() {
        lines.push(Line::default());
        for error in &analysis.lexical_errors {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(DEFAULT_THEME.error),
            )));
        }
    }

    // Calculate visible range for scrolling
    let total_items = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_line_marks_each_offset() {
        assert_eq!(caret_line(&[1]), " ^");
        assert_eq!(caret_line(&[0, 4]), "^   ^");
        assert_eq!(caret_line(&[]), "");
    }

    #[test]
    fn test_caret_line_handles_duplicate_offsets() {
        assert_eq!(caret_line(&[2, 2]), "  ^");
    }
}
