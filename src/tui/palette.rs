//! Command palette TUI using ratatui.
//!
//! Type-to-filter search over the catalog with keyboard-driven selection:
//! Up/Down move with wraparound, Enter selects the focused result's URL,
//! Esc closes without selecting. Results are recomputed from scratch on
//! every keystroke and the focus snaps back to the top match whenever the
//! result set changes.

use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::config::SearchConfig;
use crate::content::{Catalog, ItemKind};
use crate::error::{FolioError, Result};
use crate::search::{self, SearchResult};

/// Observable palette state. The open substates are a pure function of
/// (query, result count), never mutated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteState {
    Closed,
    OpenEmpty,
    OpenWithResults,
    OpenNoResults,
}

/// Action to take after handling input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Exit without selecting
    Quit,
    /// Navigate to the selected URL and exit
    Navigate(String),
    /// Continue running
    Continue,
}

/// Palette application state.
pub struct PaletteTui<'a> {
    catalog: &'a Catalog,
    config: &'a SearchConfig,
    query: String,
    results: Vec<SearchResult>,
    /// Focused result index; always 0 when there are no results
    selected: usize,
    closed: bool,
    list_state: ListState,
}

impl<'a> PaletteTui<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: &'a SearchConfig) -> Self {
        Self {
            catalog,
            config,
            query: String::new(),
            results: Vec::new(),
            selected: 0,
            closed: false,
            list_state: ListState::default(),
        }
    }

    /// Current state, derived from (closed, query, result count).
    #[must_use]
    pub fn state(&self) -> PaletteState {
        if self.closed {
            PaletteState::Closed
        } else if self.query.trim().is_empty() {
            PaletteState::OpenEmpty
        } else if self.results.is_empty() {
            PaletteState::OpenNoResults
        } else {
            PaletteState::OpenWithResults
        }
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Run the TUI main loop until a selection or close.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<Option<String>> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match self.handle_key(key.code, key.modifiers) {
                        Action::Quit => return Ok(None),
                        Action::Navigate(url) => return Ok(Some(url)),
                        Action::Continue => {}
                    }
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Action {
        match key {
            KeyCode::Esc => {
                self.close();
                return Action::Quit;
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.close();
                return Action::Quit;
            }
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_prev(),
            KeyCode::Enter => {
                if let Some(result) = self.results.get(self.selected) {
                    let url = result.url.clone();
                    self.close();
                    return Action::Navigate(url);
                }
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.requery();
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.requery();
            }
            _ => {}
        }
        Action::Continue
    }

    /// Recompute results and snap focus back to the top match. Focus is
    /// never preserved across query edits.
    fn requery(&mut self) {
        self.results = search::search(self.catalog, &self.query, self.config);
        self.selected = 0;
        self.sync_list_state();
    }

    fn select_next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.results.len();
        self.sync_list_state();
    }

    fn select_prev(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected = (self.selected + self.results.len() - 1) % self.results.len();
        self.sync_list_state();
    }

    /// Closing resets the session: query and focus do not persist.
    fn close(&mut self) {
        self.query.clear();
        self.results.clear();
        self.selected = 0;
        self.closed = true;
        self.sync_list_state();
    }

    fn sync_list_state(&mut self) {
        if self.results.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.selected));
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Length(3), // Query input
                Constraint::Min(5),    // Results
                Constraint::Length(1), // Help bar
            ])
            .split(f.area());

        self.draw_title_bar(f, chunks[0]);
        self.draw_query_bar(f, chunks[1]);
        self.draw_results(f, chunks[2]);
        self.draw_help_bar(f, chunks[3]);
    }

    fn draw_title_bar(&self, f: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled("folio", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                " | {} items | {} results",
                self.catalog.len(),
                self.results.len()
            )),
        ]);
        f.render_widget(Paragraph::new(title).style(Style::default().fg(Color::Cyan)), area);
    }

    fn draw_query_bar(&self, f: &mut Frame, area: Rect) {
        let text = if self.query.is_empty() {
            "Search pages, blog posts, projects...".to_string()
        } else {
            format!("{}_", self.query)
        };

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Search "),
            )
            .style(if self.query.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            });

        f.render_widget(paragraph, area);
    }

    fn draw_results(&mut self, f: &mut Frame, area: Rect) {
        match self.state() {
            PaletteState::OpenEmpty => {
                let hint = Paragraph::new(vec![
                    Line::from(""),
                    Line::from("Type to search across all pages, blog posts, and projects"),
                    Line::from(""),
                    Line::from("Up/Down: navigate    Enter: select    Esc: close"),
                ])
                .style(Style::default().fg(Color::DarkGray))
                .centered();
                f.render_widget(hint, area);
            }
            PaletteState::OpenNoResults => {
                let msg = Paragraph::new(format!("No results found for \"{}\"", self.query))
                    .style(Style::default().fg(Color::DarkGray))
                    .centered();
                f.render_widget(msg, area);
            }
            _ => {
                let items: Vec<ListItem> = self.results.iter().map(result_line).collect();
                let list = List::new(items)
                    .block(Block::default().borders(Borders::ALL).title(" Results "))
                    .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                    .highlight_symbol("> ");
                f.render_stateful_widget(list, area, &mut self.list_state);
            }
        }
    }

    fn draw_help_bar(&self, f: &mut Frame, area: Rect) {
        let help = Paragraph::new("type: search  Up/Down: navigate  Enter: select  Esc: close")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(help, area);
    }
}

fn result_line(result: &SearchResult) -> ListItem<'_> {
    let kind_color = match result.kind {
        ItemKind::Blog => Color::Green,
        ItemKind::Project => Color::Blue,
        ItemKind::Page => Color::Gray,
    };

    let mut spans = vec![
        Span::styled(
            format!("[{}] ", result.kind.as_str()),
            Style::default().fg(kind_color),
        ),
        Span::raw(result.title.clone()),
    ];

    if let Some(ref secondary) = result.secondary_text {
        spans.push(Span::styled(
            format!("  {}", truncate(secondary, 60)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(ref date) = result.date {
        spans.push(Span::styled(
            format!("  {date}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    ListItem::new(Line::from(spans))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        format!("{}...", s.chars().take(max_len - 3).collect::<String>())
    } else {
        s.to_string()
    }
}

/// RAII guard to restore the terminal even on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the palette; returns the selected URL, or None if closed without a
/// selection.
pub fn run_palette_tui(catalog: &Catalog, config: &SearchConfig) -> Result<Option<String>> {
    if !io::stdout().is_terminal() {
        return Err(FolioError::NotATerminal(
            "palette command requires an interactive terminal".to_string(),
        ));
    }

    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = PaletteTui::new(catalog, config);
    app.run(&mut terminal)
}
