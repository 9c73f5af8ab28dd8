//! Main TUI application state and logic

use crate::parser::Analysis;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Formulas,
    Tokens,
    Tree,
    Diagnostics,
}

impl FocusedPane {
    /// Move focus to the next pane (formulas -> tokens -> tree -> diagnostics)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Formulas => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Formulas,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Formulas => FocusedPane::Diagnostics,
            FocusedPane::Tokens => FocusedPane::Formulas,
            FocusedPane::Tree => FocusedPane::Tokens,
            FocusedPane::Diagnostics => FocusedPane::Tree,
        }
    }
}

/// The main application state
pub struct App {
    /// Every formula analyzed so far, in the order it was added
    pub analyses: Vec<Analysis>,

    /// Index of the formula the detail panes describe
    pub selected: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub formulas_scroll: usize,
    pub tokens_scroll: usize,
    pub tree_scroll: usize,
    pub diagnostics_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status bar is capturing a new formula
    pub input_mode: bool,

    /// The formula text typed so far in input mode
    pub input_buffer: String,
}

impl App {
    /// Create a new app over the given analyses.
    ///
    /// Callers hand in at least one analysis; the driver falls back to the
    /// built-in demo set when it has nothing else to show.
    pub fn new(analyses: Vec<Analysis>) -> Self {
        App {
            analyses,
            selected: 0,
            focused_pane: FocusedPane::Formulas,
            formulas_scroll: 0,
            tokens_scroll: 0,
            tree_scroll: 0,
            diagnostics_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            input_mode: false,
            input_buffer: String::new(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so resizes repaint promptly
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Create layout: 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(pane_area);

        // Left column: Formulas (top) | Tokens (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[0]);

        // Right column: Tree (top) | Diagnostics (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[1]);

        let analysis = &self.analyses[self.selected];

        // Render each pane
        super::panes::render_formulas_pane(
            frame,
            left_rows[0],
            &self.analyses,
            self.selected,
            self.focused_pane == FocusedPane::Formulas,
            &mut self.formulas_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            left_rows[1],
            analysis,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_tree_pane(
            frame,
            right_rows[0],
            analysis,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_diagnostics_pane(
            frame,
            right_rows[1],
            analysis,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        // Render status bar
        let input = if self.input_mode {
            Some(self.input_buffer.as_str())
        } else {
            None
        };
        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            input,
            self.selected,
            self.analyses.len(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        // Input mode captures everything until Enter or Esc
        if self.input_mode {
            match key.code {
                KeyCode::Enter => self.commit_input(),
                KeyCode::Esc => {
                    self.input_mode = false;
                    self.input_buffer.clear();
                    self.status_message = "Input cancelled".to_string();
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys jump straight to that formula
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap() as usize;
                if n <= self.analyses.len() {
                    self.select_index(n - 1);
                    self.status_message = format!("Selected formula {}", n);
                } else {
                    self.status_message = format!("No formula {}", n);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.input_mode = true;
                self.input_buffer.clear();
                self.status_message = "Type a formula, Enter to analyze".to_string();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.select_previous();
            }
            KeyCode::Right => {
                self.select_next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Formulas => {
                    self.select_previous();
                }
                FocusedPane::Tokens => {
                    self.tokens_scroll = self.tokens_scroll.saturating_sub(1);
                }
                FocusedPane::Tree => {
                    self.tree_scroll = self.tree_scroll.saturating_sub(1);
                }
                FocusedPane::Diagnostics => {
                    self.diagnostics_scroll = self.diagnostics_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Formulas => {
                    self.select_next();
                }
                FocusedPane::Tokens => {
                    self.tokens_scroll = self.tokens_scroll.saturating_add(1);
                }
                FocusedPane::Tree => {
                    self.tree_scroll = self.tree_scroll.saturating_add(1);
                }
                FocusedPane::Diagnostics => {
                    self.diagnostics_scroll = self.diagnostics_scroll.saturating_add(1);
                }
            },
            KeyCode::Enter => {
                // Jump to the last formula
                self.select_index(self.analyses.len().saturating_sub(1));
                self.status_message = "Jumped to last formula".to_string();
            }
            KeyCode::Backspace => {
                // Jump to the first formula
                self.select_index(0);
                self.status_message = "Jumped to first formula".to_string();
            }
            _ => {}
        }
    }

    /// Select the next formula in the list
    fn select_next(&mut self) {
        if self.selected + 1 < self.analyses.len() {
            self.select_index(self.selected + 1);
            self.status_message = format!("Formula {}", self.selected + 1);
        } else {
            self.status_message = "Already at the last formula".to_string();
        }
    }

    /// Select the previous formula in the list
    fn select_previous(&mut self) {
        if self.selected > 0 {
            self.select_index(self.selected - 1);
            self.status_message = format!("Formula {}", self.selected + 1);
        } else {
            self.status_message = "Already at the first formula".to_string();
        }
    }

    /// Switch the detail panes to the formula at `index`
    fn select_index(&mut self, index: usize) {
        self.selected = index;
        // The detail panes now show different content
        self.tokens_scroll = 0;
        self.tree_scroll = 0;
        self.diagnostics_scroll = 0;
    }

    /// Analyze the typed formula and append it to the list
    fn commit_input(&mut self) {
        self.input_mode = false;

        let source: String = self.input_buffer.drain(..).collect();
        if source.trim().is_empty() {
            self.status_message = "Input cancelled".to_string();
            return;
        }

        let analysis = Analysis::new(&source);
        self.status_message = if analysis.is_valid() {
            format!("Formula \"{}\" is valid", source)
        } else {
            format!("Formula \"{}\" has errors", source)
        };

        self.analyses.push(analysis);
        self.select_index(self.analyses.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_app() -> App {
        App::new(vec![
            Analysis::new("p"),
            Analysis::new("~q"),
            Analysis::new("(p^q)"),
        ])
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code));
    }

    #[test]
    fn test_quit_key() {
        let mut app = demo_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_focus_cycles_through_all_panes() {
        let mut app = demo_app();
        assert_eq!(app.focused_pane, FocusedPane::Formulas);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tokens);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Formulas);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Diagnostics);
    }

    #[test]
    fn test_selection_clamps_at_list_ends() {
        let mut app = demo_app();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected, 0);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_selection_change_resets_detail_scrolls() {
        let mut app = demo_app();
        app.tokens_scroll = 5;
        app.tree_scroll = 3;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.tokens_scroll, 0);
        assert_eq!(app.tree_scroll, 0);
    }

    #[test]
    fn test_number_key_jumps_to_formula() {
        let mut app = demo_app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.selected, 2);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_input_mode_appends_and_selects_new_formula() {
        let mut app = demo_app();
        press(&mut app, KeyCode::Char('n'));
        assert!(app.input_mode);

        for c in "~~r".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(!app.input_mode);
        assert_eq!(app.analyses.len(), 4);
        assert_eq!(app.selected, 3);
        assert_eq!(app.analyses[3].source, "~~r");
        assert!(app.analyses[3].is_valid());
    }

    #[test]
    fn test_input_mode_escape_discards_buffer() {
        let mut app = demo_app();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Esc);

        assert!(!app.input_mode);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.analyses.len(), 3);
    }

    #[test]
    fn test_input_mode_swallows_quit_key() {
        let mut app = demo_app();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input_buffer, "q");
    }
}
