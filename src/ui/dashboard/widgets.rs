use ratatui::prelude::*;

use crate::ui::cards::{Card, Tone};

/// Style for a line of a card
pub fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Plain => Style::default().fg(Color::White),
        Tone::Heading => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        Tone::Hot => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Tone::Cool => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Tone::Muted => Style::default().fg(Color::DarkGray),
    }
}

/// Flatten cards into paragraph lines: a bold title, the card body and a
/// blank separator.
pub fn card_lines(cards: &[Card]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for card in cards {
        lines.push(Line::from(Span::styled(
            format!("▌ {}", card.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        )));
        for line in &card.lines {
            lines.push(Line::from(Span::styled(
                format!("  {}", line.text),
                tone_style(line.tone),
            )));
        }
        lines.push(Line::default());
    }

    lines
}
