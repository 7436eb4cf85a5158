use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::DashboardApp;
use super::widgets::card_lines;
use crate::ui::cards::Card;

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Columns
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_columns(frame, chunks[1], app);
    render_footer(frame, chunks[2]);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let collected = app.snapshot.collected_at.format("%H:%M:%S");
    let root = app.collector.root().base().display().to_string();
    let source = if root == "/" {
        String::new()
    } else {
        format!(" │ Root: {}", root)
    };

    let title = format!(
        " JayInsights │ Refresh: {}ms │ Updated: {}{} ",
        app.interval_ms, collected, source
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);
}

fn render_columns(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_column(frame, columns[0], " System ", &app.columns.system, app.scroll);
    render_column(
        frame,
        columns[1],
        " Storage & Memory ",
        &app.columns.storage,
        app.scroll,
    );
    render_column(frame, columns[2], " Sensors ", &app.columns.sensors, app.scroll);
}

fn render_column(frame: &mut Frame, area: Rect, title: &str, cards: &[Card], scroll: u16) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = card_lines(cards);
    let visible = block.inner(area).height;
    let max_offset = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(visible);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll.min(max_offset), 0));

    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let help = " q: Quit │ r: Refresh │ ↑↓/jk PgUp PgDn Home: Scroll │ ?: Help ";
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = r#"
    JayInsights - Help

    Keyboard Shortcuts:
    ─────────────────────────────────────
    q / Esc     Quit the application
    r           Refresh now
    ↑ / k       Scroll up
    ↓ / j       Scroll down
    PgUp PgDn   Scroll by a page
    Home        Back to the top
    ? / h       Toggle this help screen

    Temperatures turn red at their section threshold.

    Press any key to close this help
    "#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::DarkGray));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    // Center the help popup
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
