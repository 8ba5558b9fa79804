//! Plot view application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use smoothplot_core::PlotSeries;

use crate::chart::render_chart;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};

/// Plot view state (Elm Model).
pub struct PlotApp {
    /// The series being drawn.
    pub series: PlotSeries,
    /// Whether the raw `Value` series is overlaid.
    pub show_raw: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl PlotApp {
    /// Create a plot view for `series`.
    #[must_use]
    pub fn new(series: PlotSeries) -> Self {
        Self {
            series,
            show_raw: false,
            should_quit: false,
        }
    }

    /// Start with the raw overlay on or off.
    #[must_use]
    pub fn with_raw(mut self, show_raw: bool) -> Self {
        self.show_raw = show_raw && self.series.has_raw;
        self
    }

    /// Handle a keyboard action (Elm Update).
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::ToggleRaw => {
                if self.series.has_raw {
                    self.show_raw = !self.show_raw;
                }
            }
            KeyAction::None => {}
        }
    }

    /// Handle a terminal event.
    ///
    /// Resizes need no state change; the next draw uses the new frame size.
    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Key(key_event) = event {
            if key_event.kind == KeyEventKind::Press {
                self.handle_key_action(map_key(*key_event));
            }
        }
    }

    /// Compute the layout.
    ///
    /// Returns (header, chart, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Min(5),    // chart
                Constraint::Length(2), // footer
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2])
    }

    /// Render the full view (Elm View).
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, chart_area, footer_area) = Self::compute_layout(frame.area());

        let source = self.series.source.display().to_string();
        render_header(
            frame,
            header_area,
            &source,
            self.series.points.len(),
            self.series.computed(),
        );
        render_chart(frame, chart_area, &self.series, self.show_raw);
        render_footer(frame, footer_area, self.series.has_raw);
    }

    /// Set up the terminal for the plot view.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Show the plot until the user quits.
    ///
    /// The terminal is restored even if drawing or event handling fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        tracing::debug!(points = self.series.points.len(), "plot view opened");

        let result = self.event_loop(&mut terminal);
        let teardown = Self::teardown_terminal(&mut terminal);
        tracing::debug!("plot view closed");
        first_error(result, teardown)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                let event = event::read()?;
                self.handle_event(&event);
            }
        }
    }
}

/// Keep the event loop's error if both the loop and teardown failed.
fn first_error(result: io::Result<()>, teardown: io::Result<()>) -> io::Result<()> {
    match (result, teardown) {
        (Err(err), Err(teardown_err)) => {
            tracing::error!(error = %teardown_err, "failed to restore terminal");
            Err(err)
        }
        (Err(err), Ok(())) | (Ok(()), Err(err)) => Err(err),
        (Ok(()), Ok(())) => Ok(()),
    }
}
