//! Main TUI application state and logic

use crate::config::Config;
use crate::grid::GridLayout;
use crate::numbers::NumberGenerator;
use crate::session::{parse_count, ClickOutcome, Session};
use crate::ui::panes::{self, GridView, HitMap, StatusRenderData, Target};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::num::NonZeroUsize;
use std::time::Duration;

/// How long the event loop waits for input before polling the sort thread
const TICK: Duration = Duration::from_millis(30);

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Sort,
}

/// The main application state
pub struct App {
    config: Config,

    /// Held while on the intro screen; moves into the session otherwise
    generator: Option<NumberGenerator>,

    /// The active sort screen, if any
    session: Option<Session>,

    /// Text typed at the prompt; kept across Reset
    pub input: String,

    /// Index of the selected cell
    pub cursor: usize,

    /// First visible grid column
    pub col_offset: usize,

    /// Clickable regions from the last frame
    hits: HitMap,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a rejection
    pub status_is_error: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let generator = config.generator();
        let mut app = App {
            config,
            generator: Some(generator),
            session: None,
            input: String::new(),
            cursor: 0,
            col_offset: 0,
            hits: HitMap::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
        };
        if let Some(count) = app.config.initial_count {
            app.input = count.to_string();
            app.open_sort_screen(count);
        }
        app
    }

    pub fn screen(&self) -> Screen {
        if self.session.is_some() {
            Screen::Sort
        } else {
            Screen::Intro
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// Clickable regions recorded by the last draw
    pub fn hit_map(&self) -> &HitMap {
        &self.hits
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.draw(terminal)?;

            if self.should_quit {
                break;
            }

            self.tick();

            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }

        if let Some(session) = self.session.as_mut() {
            session.cancel_sort();
        }
        Ok(())
    }

    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|f| self.render(f))?;
        Ok(())
    }

    /// Pull pending frames from the sort thread
    pub fn tick(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let pumped = session.pump();
        if let Some(outcome) = pumped.finished {
            tracing::debug!(?outcome, "sort thread reported");
            let message = format!("Sorted! Next sort: {}", session.direction().label());
            self.set_status(message, false);
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        self.hits.clear();
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);
        let body = main_chunks[0];
        let status_area = main_chunks[1];

        let direction = match &self.session {
            None => {
                panes::render_intro(frame, body, &self.input, &mut self.hits);
                None
            }
            Some(session) => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(1)])
                    .split(body);

                let view = GridView {
                    numbers: session.numbers(),
                    highlight: session.highlight(),
                    cursor: self.cursor,
                    sorting: session.is_sorting(),
                };
                panes::render_grid_pane(
                    frame,
                    rows[0],
                    &view,
                    &mut self.col_offset,
                    &mut self.hits,
                );
                panes::render_controls(frame, rows[1], session.is_sorting(), &mut self.hits);
                Some(session.direction())
            }
        };

        panes::render_status_bar(
            frame,
            status_area,
            &StatusRenderData {
                message: &self.status_message,
                is_error: self.status_is_error,
                direction,
                is_sorting: self.session.as_ref().is_some_and(Session::is_sorting),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen() {
            Screen::Intro => self.handle_intro_key(key),
            Screen::Sort => self.handle_sort_key(key),
        }
    }

    fn handle_intro_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit_count(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !c.is_control() => self.input.push(c),
            _ => {}
        }
    }

    fn handle_sort_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.sort(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            KeyCode::Enter | KeyCode::Char(' ') => self.click_cell(self.cursor),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => {
                if let Some(session) = &self.session {
                    self.cursor = session.numbers().len() - 1;
                }
            }
            _ => {}
        }
    }

    /// Handle mouse events; only left clicks on recorded regions do anything
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match self.hits.target_at(mouse.column, mouse.row) {
            Some(Target::Cell(index)) => {
                self.cursor = index;
                self.click_cell(index);
            }
            Some(Target::Sort) => self.sort(),
            Some(Target::Reset) => self.reset(),
            Some(Target::Enter) => self.submit_count(),
            None => {}
        }
    }

    /// Validate the prompt input and open the sort screen
    pub fn submit_count(&mut self) {
        match parse_count(&self.input) {
            Ok(count) => self.open_sort_screen(count),
            Err(e) => {
                tracing::info!(input = %self.input, "rejected count");
                self.set_status(e.to_string(), true);
            }
        }
    }

    fn open_sort_screen(&mut self, count: NonZeroUsize) {
        let generator = self
            .generator
            .take()
            .unwrap_or_else(|| self.config.generator());
        self.session = Some(Session::start(generator, count, self.config.session));
        self.cursor = 0;
        self.col_offset = 0;
        self.set_status(format!("Generated {} values", count), false);
    }

    /// Click the cell showing `index`
    pub fn click_cell(&mut self, index: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.click(index) {
            Ok(ClickOutcome::Regenerated {
                len,
                cancelled_sort,
            }) => {
                self.cursor = 0;
                self.col_offset = 0;
                let message = if cancelled_sort {
                    format!("Sort stopped. Regenerated {} values", len)
                } else {
                    format!("Regenerated {} values", len)
                };
                self.set_status(message, false);
            }
            Err(e) => self.set_status(e.to_string(), true),
        }
    }

    pub fn sort(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.start_sort() {
            Ok(()) => {
                let message = format!("Sorting {}...", session.direction().label());
                self.set_status(message, false);
            }
            Err(e) => self.set_status(e.to_string(), true),
        }
    }

    /// Cancel any sort, drop the set and go back to the prompt
    pub fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            self.generator = Some(session.reset());
        }
        self.cursor = 0;
        self.col_offset = 0;
        self.set_status("Ready!".to_string(), false);
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        if let Some(session) = &self.session {
            let grid = GridLayout::for_len(session.numbers().len());
            self.cursor = grid.step(self.cursor.min(grid.len - 1), d_row, d_col);
        }
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = message;
        self.status_is_error = is_error;
    }
}
