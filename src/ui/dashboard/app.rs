use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::system_info::{Collector, Snapshot};
use crate::platform::is_elevated;
use crate::ui::cards::{layout, Card, Columns};

use super::event_handler::{map_key, DashboardEvent};
use super::render::render_ui;

/// Lines moved by PgUp/PgDn
const PAGE_LINES: u16 = 10;

/// Dashboard application state
pub struct DashboardApp {
    pub collector: Collector,
    pub snapshot: Snapshot,
    pub columns: Columns,
    pub should_quit: bool,
    pub show_help: bool,
    /// Vertical offset shared by all three columns
    pub scroll: u16,
    pub interval_ms: u64,
    pub elevated: bool,
}

impl DashboardApp {
    pub fn new(collector: Collector, config: &DashboardConfig) -> Self {
        let elevated = is_elevated();
        let snapshot = collector.collect();
        let columns = layout(&snapshot, elevated);

        Self {
            collector,
            snapshot,
            columns,
            should_quit: false,
            show_help: false,
            scroll: 0,
            interval_ms: config.interval_ms,
            elevated,
        }
    }

    /// Replace the snapshot with a fresh one
    pub fn refresh(&mut self) {
        self.snapshot = self.collector.collect();
        self.columns = layout(&self.snapshot, self.elevated);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Tallest column in lines, see [`super::widgets::card_lines`]
    pub fn content_height(&self) -> u16 {
        let height = |cards: &[Card]| -> usize {
            cards.iter().map(|card| card.lines.len() + 2).sum()
        };
        let tallest = height(&self.columns.system)
            .max(height(&self.columns.storage))
            .max(height(&self.columns.sensors));
        u16::try_from(tallest).unwrap_or(u16::MAX)
    }

    fn max_scroll(&self) -> u16 {
        self.content_height().saturating_sub(1)
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Quit => self.should_quit = true,
            DashboardEvent::Refresh => self.refresh(),
            DashboardEvent::ToggleHelp => self.show_help = !self.show_help,
            DashboardEvent::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            DashboardEvent::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
            }
            DashboardEvent::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_LINES),
            DashboardEvent::PageDown => {
                self.scroll = self
                    .scroll
                    .saturating_add(PAGE_LINES)
                    .min(self.max_scroll());
            }
            DashboardEvent::ScrollTop => self.scroll = 0,
            DashboardEvent::None => {}
        }
    }
}

/// Configuration for the dashboard
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// How often the snapshot is re-collected
    pub interval_ms: u64,
    /// Longest wait for input before redrawing
    pub poll_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            poll_ms: 200,
        }
    }
}

/// Run the dashboard until the user quits
pub fn run_dashboard(collector: Collector, config: DashboardConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = event_loop(&mut terminal, collector, &config);

    // Restore terminal even when the loop failed
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    collector: Collector,
    config: &DashboardConfig,
) -> Result<()> {
    let mut app = DashboardApp::new(collector, config);
    let tick_rate = Duration::from_millis(app.interval_ms.max(1));
    let poll_rate = Duration::from_millis(config.poll_ms.max(1));

    let mut last_tick = Instant::now();

    loop {
        // Draw also resizes the viewport to the current terminal size
        terminal.draw(|frame| render_ui(frame, &app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO)
            .min(poll_rate);

        if event::poll(timeout).context("Event poll failed")? {
            match event::read().context("Event read failed")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let dashboard_event = if app.show_help {
                        // Any key closes the help overlay
                        DashboardEvent::ToggleHelp
                    } else {
                        map_key(key.code)
                    };
                    if dashboard_event == DashboardEvent::Refresh {
                        last_tick = Instant::now();
                    }
                    app.handle_event(dashboard_event);
                }
                Event::Resize(width, height) => {
                    log::debug!("Terminal resized to {}x{}", width, height);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            app.refresh();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
