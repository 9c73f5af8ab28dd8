//! Token stream pane rendering
//!
//! Lists the tokens of the selected formula in source order, one per row,
//! with the offsets where the lexer skipped an illegal character spliced in
//! as error rows.

use crate::parser::{Analysis, Token};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn token_style(token: &Token) -> Style {
    match token {
        Token::Var(_, _) => Style::default().fg(DEFAULT_THEME.variable),
        Token::Const(_, _) => Style::default().fg(DEFAULT_THEME.constant),
        Token::LParen(_) | Token::RParen(_) => Style::default().fg(DEFAULT_THEME.primary),
        _ => Style::default().fg(DEFAULT_THEME.connective),
    }
}

/// Render the token stream pane
pub fn render_tokens_pane(
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
        .title(" Tokens ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if analysis.tokens.is_empty() && analysis.lexical_errors.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // Merge tokens and lexical errors back into source order
    let mut rows: Vec<(usize, Line)> = Vec::new();

    for token in &analysis.tokens {
        let line = Line::from(vec![
            Span::styled(
                format!("{:3}  ", token.position()),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(format!("{:<7} ", token.kind_name()), token_style(token)),
            Span::styled(token.lexeme(), Style::default().fg(DEFAULT_THEME.fg)),
        ]);
        rows.push((token.position(), line));
    }

    for error in &analysis.lexical_errors {
        let line = Line::from(vec![
            Span::styled(
                format!("{:3}  ", error.position),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                format!("{:<7} ", "ERROR"),
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                error.character.to_string(),
                Style::default().fg(DEFAULT_THEME.error),
            ),
        ]);
        rows.push((error.position, line));
    }

    rows.sort_by_key(|(position, _)| *position);

    // Calculate visible range for scrolling
    let total_items = rows.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_lines: Vec<Line> = rows
        .into_iter()
        .map(|(_, line)| line)
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
