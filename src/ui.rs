//! Terminal presentation
//!
//! Renders markup blocks with ANSI styling, prints the session history
//! table, and surfaces the side effects a reply requests. Side effects in
//! a terminal are advisory: URLs and videos are printed as links for the
//! user to follow rather than launched directly.

use crate::markup::{Block, ListKind, Span};
use crate::router::Action;
use crate::session::ChatSession;
use colored::Colorize;
use prettytable::{format, row, Table};

/// Render markup blocks to stdout
pub fn render_blocks(blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Heading { level, spans } => {
                let text = render_spans(spans);
                if *level == 1 {
                    println!("{}", text.bold().cyan());
                } else {
                    println!("{}", text.bold());
                }
            }
            Block::Paragraph(spans) => {
                println!("{}", render_spans(spans));
            }
            Block::List { kind, items } => {
                for (idx, item) in items.iter().enumerate() {
                    let marker = match kind {
                        ListKind::Unordered => "•".to_string(),
                        ListKind::Ordered => format!("{}.", idx + 1),
                    };
                    println!("  {} {}", marker.dimmed(), render_spans(item));
                }
            }
            Block::Break => println!(),
        }
    }
}

fn render_spans(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(text),
            Span::Bold(text) => out.push_str(&text.bold().to_string()),
            Span::Link { label, url } => {
                out.push_str(&format!("{} ({})", label.underline().blue(), url.dimmed()));
            }
        }
    }
    out
}

/// Print the side effect a reply requested
pub fn render_action(action: &Action) {
    match action {
        Action::OpenUrl(url) => {
            println!("{} {}", "→ Open:".yellow(), url.underline());
        }
        Action::PlayVideo { id, title } => {
            println!(
                "{} {} ({})",
                "▶ Play:".yellow(),
                title.bold(),
                format!("https://www.youtube.com/watch?v={}", id).underline()
            );
        }
    }
}

/// Print a thumbnail URL, after the reply text has rendered
pub fn render_thumbnail(url: &str) {
    println!("{} {}", "🖼".dimmed(), url.dimmed());
}

/// Print the session history table, marking the active session
pub fn render_history_list(sessions: &[(&str, &ChatSession)], active: Option<&str>) {
    if sessions.is_empty() {
        println!("{}", "No chat sessions yet.".dimmed());
        return;
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.set_titles(row!["", "ID", "Title", "Updated", "Messages"]);

    for (id, session) in sessions {
        let marker = if active == Some(*id) { "*" } else { "" };
        table.add_row(row![
            marker,
            id,
            session.title,
            session.timestamp.format("%Y-%m-%d %H:%M"),
            session.messages.len()
        ]);
    }

    table.printstd();
}

/// One-time notice for a feature the environment cannot provide
pub fn notify_unsupported_feature(feature: &str) {
    println!(
        "{}",
        format!("Note: {} is not available in this environment.", feature).dimmed()
    );
}
