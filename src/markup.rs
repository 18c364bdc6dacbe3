//! Line-oriented markup renderer
//!
//! Turns semi-structured assistant text into an ordered sequence of render
//! blocks. The supported subset: `# ` and `## ` heading lines, `**bold**`
//! spans, `[label](url)` links with http(s) URLs, `-`/`*`/`•` bullet lines,
//! `1.` numbered lines, and blank lines as separators.
//!
//! The renderer is a pure function: identical input always yields an
//! identical block sequence. Pass order matters: headings are recognized
//! per line first, then bold spans, then links, so each pass consumes
//! markers the next pass must not reinterpret.

use regex::Regex;

/// One inline run within a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Plain text
    Text(String),
    /// Bold emphasis (`**text**`)
    Bold(String),
    /// Hyperlink (`[label](url)`, http/https only)
    Link {
        /// Display label
        label: String,
        /// Target URL
        url: String,
    },
}

/// Whether a list block is numbered or bulleted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Bullet list (`-`, `*`, or `•`)
    Unordered,
    /// Numbered list (`1.`, `2.`, ...)
    Ordered,
}

/// One structural unit of rendered output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading with level 1 (`# `) or 2 (`## `)
    Heading {
        /// Heading level, 1 or 2
        level: u8,
        /// Heading text
        spans: Vec<Span>,
    },
    /// A single non-empty, non-heading, non-list line
    Paragraph(Vec<Span>),
    /// A run of consecutive list item lines
    List {
        /// Bullet or numbered
        kind: ListKind,
        /// Item texts with their markers stripped
        items: Vec<Vec<Span>>,
    },
    /// Explicit break from a blank line
    Break,
}

/// Render markup text into an ordered block sequence
///
/// Single pass over lines with one state flag ("inside a list"): a blank
/// line closes any open list and emits a break, a bullet or numbered line
/// opens or extends the matching list, any other non-empty line becomes a
/// heading or paragraph. An open list is implicitly closed at end of input.
pub fn render(text: &str) -> Vec<Block> {
    let bullet_re = Regex::new(r"^[•\-\*]\s+").unwrap();
    let numbered_re = Regex::new(r"^\d+\.\s+").unwrap();

    let mut blocks = Vec::new();
    let mut open_list: Option<(ListKind, Vec<Vec<Span>>)> = None;

    for raw_line in text.split('\n') {
        let line = raw_line.trim();

        if line.is_empty() {
            close_list(&mut blocks, &mut open_list);
            blocks.push(Block::Break);
        } else if let Some(rest) = line.strip_prefix("## ") {
            close_list(&mut blocks, &mut open_list);
            blocks.push(Block::Heading {
                level: 2,
                spans: parse_spans(rest),
            });
        } else if let Some(rest) = line.strip_prefix("# ") {
            close_list(&mut blocks, &mut open_list);
            blocks.push(Block::Heading {
                level: 1,
                spans: parse_spans(rest),
            });
        } else if let Some(marker) = bullet_re.find(line) {
            push_item(
                &mut blocks,
                &mut open_list,
                ListKind::Unordered,
                &line[marker.end()..],
            );
        } else if let Some(marker) = numbered_re.find(line) {
            push_item(
                &mut blocks,
                &mut open_list,
                ListKind::Ordered,
                &line[marker.end()..],
            );
        } else {
            close_list(&mut blocks, &mut open_list);
            blocks.push(Block::Paragraph(parse_spans(line)));
        }
    }

    close_list(&mut blocks, &mut open_list);
    blocks
}

fn close_list(blocks: &mut Vec<Block>, open_list: &mut Option<(ListKind, Vec<Vec<Span>>)>) {
    if let Some((kind, items)) = open_list.take() {
        blocks.push(Block::List { kind, items });
    }
}

fn push_item(
    blocks: &mut Vec<Block>,
    open_list: &mut Option<(ListKind, Vec<Vec<Span>>)>,
    kind: ListKind,
    text: &str,
) {
    match open_list {
        // One state flag: the list kind is fixed by the line that opened it,
        // and any later item line extends the open list.
        Some((_, items)) => items.push(parse_spans(text)),
        None => *open_list = Some((kind, vec![parse_spans(text)])),
    }
}

/// Split a line into inline spans
///
/// Bold spans are consumed first, then links within the remaining plain
/// segments, so link syntax inside a bold marker is not reinterpreted.
fn parse_spans(text: &str) -> Vec<Span> {
    let bold_re = Regex::new(r"\*\*([^*]+?)\*\*").unwrap();

    let mut spans = Vec::new();
    let mut last = 0;
    for caps in bold_re.captures_iter(text) {
        let whole = caps.get(0).expect("capture group 0 always present");
        parse_links(&text[last..whole.start()], &mut spans);
        spans.push(Span::Bold(caps[1].to_string()));
        last = whole.end();
    }
    parse_links(&text[last..], &mut spans);
    spans
}

fn parse_links(text: &str, spans: &mut Vec<Span>) {
    let link_re = Regex::new(r"\[([^\]]+)\]\((https?://[^\s)]+)\)").unwrap();

    let mut last = 0;
    for caps in link_re.captures_iter(text) {
        let whole = caps.get(0).expect("capture group 0 always present");
        if whole.start() > last {
            spans.push(Span::Text(text[last..whole.start()].to_string()));
        }
        spans.push(Span::Link {
            label: caps[1].to_string(),
            url: caps[2].to_string(),
        });
        last = whole.end();
    }
    if last < text.len() {
        spans.push(Span::Text(text[last..].to_string()));
    }
}
