//! Interactive calculator: quantity input, result panels and cost chart.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

use super::{chart, panels};
use crate::pricing::{self, Tier};
use crate::report::{format_quantity, PricingReport};

const MAX_INPUT_LEN: usize = 10;

/// Everything the screen shows, independent of the terminal
#[derive(Debug, Clone)]
pub struct AppState {
    /// Quantity being typed, not yet applied
    pub input: String,
    /// Results for the last accepted quantity
    pub report: PricingReport,
    /// Rejection message for the last Enter, if any
    pub error: Option<String>,
    /// Cost curves over the chart domain, one per tier
    pub curves: Vec<(Tier, Vec<(f64, f64)>)>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(quantity: f64) -> Self {
        Self {
            input: format_quantity(quantity),
            report: PricingReport::compute(quantity),
            error: None,
            curves: Tier::ALL
                .iter()
                .map(|&tier| (tier, pricing::cost_curve(tier)))
                .collect(),
            should_quit: false,
        }
    }

    /// Apply the typed quantity. Invalid input keeps the previous results.
    pub fn recompute(&mut self) {
        match PricingReport::from_input(&self.input) {
            Ok(report) => {
                debug!(quantity = report.quantity, "recomputed report");
                self.report = report;
                self.error = None;
            }
            Err(e) => {
                debug!(input = %self.input, "rejected quantity");
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.recompute(),
            _ => {}
        }
    }
}

/// Owns the terminal for the lifetime of the chart screen.
///
/// Creating the app switches the terminal into raw mode on the alternate
/// screen; dropping it restores the terminal.
pub struct TuiApp {
    state: AppState,
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiApp {
    pub fn new(quantity: f64) -> io::Result<Self> {
        enable_raw_mode()?;
        let terminal = undo_on_error(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)?;
                Terminal::new(CrosstermBackend::new(stdout))
            },
            || {
                let _ = disable_raw_mode();
            },
        )?;

        Ok(Self {
            state: AppState::new(quantity),
            terminal,
        })
    }

    /// Run the event loop until the user quits
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let state = &self.state;
            self.terminal.draw(|frame| draw(frame, state))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.state.handle_key(key.code);
                    }
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }
}

/// Run `setup`; if it fails, run `undo` before returning the error
fn undo_on_error<T>(setup: impl FnOnce() -> io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    setup().inspect_err(|_| undo())
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Draw the whole screen
pub fn draw(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    panels::draw_panels(frame, body[0], state);
    chart::draw_cost_chart(frame, body[1], &state.curves, state.report.quantity);

    draw_footer(frame, chunks[2]);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(" Kalkulus - Storage Tier Pricing ")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(" [0-9 .]Edit GB [Backspace]Delete [Enter]Calculate | [q]Quit ")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
