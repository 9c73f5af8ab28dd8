//! Syntax tree pane rendering
//!
//! Draws the exported tree of the selected formula with box characters, one
//! node per row, children indented under their parent:
//!
//! ```text
//! ^
//! ├── =>
//! │   ├── p
//! │   └── q
//! └── p
//! ```
//!
//! The rows are built from the flat [`GraphDescription`], not from the AST,
//! so the pane shows exactly what a DOT export would contain.

use crate::export::GraphDescription;
use crate::parser::Analysis;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

/// One visual row of the tree: the box-drawing prefix and the node label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub prefix: String,
    pub label: String,
}

/// Lay a graph description out as indented rows, one per node.
pub fn build_tree_rows(graph: &GraphDescription) -> Vec<TreeRow> {
    // Edges arrive in pre-order, so each adjacency list is already in
    // left-to-right child order
    let mut children: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
    for edge in &graph.edges {
        children.entry(edge.parent).or_default().push(edge.child);
    }

    let mut rows = Vec::with_capacity(graph.nodes.len());
    if let Some(root) = graph.nodes.first() {
        rows.push(TreeRow {
            prefix: String::new(),
            label: root.label.clone(),
        });
        descend(root.id, "", &children, graph, &mut rows);
    }
    rows
}

fn descend(
    id: usize,
    prefix: &str,
    children: &FxHashMap<usize, Vec<usize>>,
    graph: &GraphDescription,
    rows: &mut Vec<TreeRow>,
) {
    if let Some(kids) = children.get(&id) {
        for (i, &kid) in kids.iter().enumerate() {
            let is_last = i + 1 == kids.len();
            let connector = if is_last { "└── " } else { "├── " };
            rows.push(TreeRow {
                prefix: format!("{}{}", prefix, connector),
                label: graph.nodes[kid].label.clone(),
            });

            let child_prefix = if is_last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };
            descend(kid, &child_prefix, children, graph, rows);
        }
    }
}

fn label_color(label: &str) -> Color {
    match label {
        "0" | "1" => DEFAULT_THEME.constant,
        "~" | "^" | "o" | "=>" | "<=>" => DEFAULT_THEME.connective,
        _ => DEFAULT_THEME.variable,
    }
}

/// Render the syntax tree pane
pub fn render_tree_pane(
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
        .title(" Syntax Tree ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let ast = match &analysis.result {
        Ok(ast) => ast,
        Err(error) => {
            let lines = vec![
                Line::from(Span::styled(
                    "(no tree)",
                    Style::default().fg(DEFAULT_THEME.comment),
                )),
                Line::default(),
                Line::from(Span::styled(
                    error.to_string(),
                    Style::default().fg(DEFAULT_THEME.error),
                )),
            ];
            let paragraph = Paragraph::new(lines).block(block);
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let graph = crate::export::export(ast);
    let rows = build_tree_rows(&graph);

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
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| {
            Line::from(vec![
                Span::styled(
                    row.prefix.clone(),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    row.label.clone(),
                    Style::default()
                        .fg(label_color(&row.label))
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::export;
    use crate::parser::{parser, Lexer};

    fn graph_of(input: &str) -> GraphDescription {
        let (tokens, _) = Lexer::new(input).tokenize();
        export(&parser::parse(tokens).expect("formula should parse"))
    }

    fn row(prefix: &str, label: &str) -> TreeRow {
        TreeRow {
            prefix: prefix.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_single_leaf_is_one_row() {
        assert_eq!(build_tree_rows(&graph_of("p")), [row("", "p")]);
    }

    #[test]
    fn test_nested_tree_layout() {
        let rows = build_tree_rows(&graph_of("((p=>q)^p)"));
        assert_eq!(
            rows,
            [
                row("", "^"),
                row("├── ", "=>"),
                row("│   ├── ", "p"),
                row("│   └── ", "q"),
                row("└── ", "p"),
            ]
        );
    }

    #[test]
    fn test_unary_chain_stays_single_branch() {
        let rows = build_tree_rows(&graph_of("~~p"));
        assert_eq!(
            rows,
            [row("", "~"), row("└── ", "~"), row("    └── ", "p")]
        );
    }

    #[test]
    fn test_empty_graph_builds_no_rows() {
        assert!(build_tree_rows(&GraphDescription::default()).is_empty());
    }
}
