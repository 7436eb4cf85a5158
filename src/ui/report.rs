use colored::*;

use crate::core::system_info::Snapshot;
use crate::ui::cards::{layout, Card, Tone};

/// Print a snapshot once as colored text, column by column.
pub fn print_snapshot(snapshot: &Snapshot, elevated: bool) {
    let columns = layout(snapshot, elevated);

    println!("\n{}", "JAYINSIGHTS".bold().bright_cyan());
    println!(
        "Collected at {}",
        snapshot.collected_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!("{}", "=".repeat(80));

    for card in columns
        .system
        .iter()
        .chain(&columns.storage)
        .chain(&columns.sensors)
    {
        print_card(card);
    }

    println!();
}

fn print_section_header(title: &str) {
    println!("\n{}", title.bold().green());
    println!("{}", "-".repeat(title.chars().count()));
}

fn print_card(card: &Card) {
    print_section_header(&card.title);

    for line in &card.lines {
        let text = format!("  {}", line.text);
        let styled = match line.tone {
            Tone::Plain => text.normal(),
            Tone::Heading => text.bold(),
            Tone::Hot => text.red().bold(),
            Tone::Cool => text.green().bold(),
            Tone::Muted => text.dimmed(),
        };
        println!("{}", styled);
    }
}
