//! Markdown export → flat [`Token`] stream.
//!
//! Headings become an open / inline / close triple carrying the heading's
//! plain text. A paragraph becomes one [`Token::Inline`] holding its Markdown
//! source, one trimmed line per source line, so link syntax such as
//! `[配信](https://…)` reaches the video parser untouched. The text of a tight
//! list item (one without blank lines around it, hence no paragraph) becomes
//! an inline the same way, without its list marker. Every other block start
//! becomes [`Token::Other`].

use std::ops::Range;

use matchlog_core::{MatchLogError, Result, Token};
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Marker headings bounding the match-log region of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: "試合ログ".to_string(),
            end: "（テンプレート）".to_string(),
        }
    }
}

pub fn tokenize(markdown: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut heading: Option<String> = None;
    let mut in_paragraph = false;
    let mut in_code_block = false;
    let mut item_depth = 0usize;
    // Source span of the loose text of the current tight list item.
    let mut item_span: Option<Range<usize>> = None;

    for (event, range) in Parser::new(markdown).into_offset_iter() {
        let in_item_text =
            heading.is_none() && !in_paragraph && !in_code_block && item_depth > 0;

        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush_item(markdown, &mut item_span, &mut tokens);
                tokens.push(Token::HeadingOpen { level: level as u8 });
                heading = Some(String::new());
            }
            Event::End(TagEnd::Heading(level)) => {
                if let Some(text) = heading.take() {
                    tokens.push(Token::Inline(text.trim().to_string()));
                }
                tokens.push(Token::HeadingClose { level: level as u8 });
            }
            Event::Text(text) | Event::Code(text) if heading.is_some() => {
                if let Some(buf) = heading.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::Start(Tag::Paragraph) if heading.is_none() => {
                flush_item(markdown, &mut item_span, &mut tokens);
                tokens.push(Token::Inline(paragraph_source(markdown, range)));
                in_paragraph = true;
            }
            Event::End(TagEnd::Paragraph) => in_paragraph = false,
            Event::Start(Tag::Item) => {
                flush_item(markdown, &mut item_span, &mut tokens);
                item_depth += 1;
                tokens.push(Token::Other);
            }
            Event::End(TagEnd::Item) => {
                flush_item(markdown, &mut item_span, &mut tokens);
                item_depth = item_depth.saturating_sub(1);
            }
            Event::Start(Tag::CodeBlock(_)) => {
                flush_item(markdown, &mut item_span, &mut tokens);
                in_code_block = true;
                tokens.push(Token::Other);
            }
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Start(
                Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. },
            ) if in_item_text => extend_span(&mut item_span, range),
            Event::Text(_)
            | Event::Code(_)
            | Event::SoftBreak
            | Event::HardBreak
            | Event::InlineHtml(_)
                if in_item_text =>
            {
                extend_span(&mut item_span, range)
            }
            Event::Start(_) if heading.is_none() && !in_paragraph => {
                flush_item(markdown, &mut item_span, &mut tokens);
                tokens.push(Token::Other);
            }
            _ => {}
        }
    }
    flush_item(markdown, &mut item_span, &mut tokens);
    tokens
}

fn extend_span(span: &mut Option<Range<usize>>, range: Range<usize>) {
    *span = Some(match span.take() {
        Some(current) => current.start.min(range.start)..current.end.max(range.end),
        None => range,
    });
}

fn flush_item(markdown: &str, span: &mut Option<Range<usize>>, tokens: &mut Vec<Token>) {
    if let Some(range) = span.take() {
        let text = paragraph_source(markdown, range);
        if !text.is_empty() {
            tokens.push(Token::Inline(text));
        }
    }
}

/// Paragraph source, one trimmed line per source line. Inside a block quote
/// the continuation lines carry their own `>` markers, which are dropped.
fn paragraph_source(markdown: &str, range: Range<usize>) -> String {
    let line_start = markdown[..range.start].rfind('\n').map_or(0, |i| i + 1);
    let quoted = markdown[line_start..range.start].contains('>');

    markdown[range]
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let line = line.trim();
            if quoted && i > 0 {
                line.trim_start_matches(|c: char| c == '>' || c.is_whitespace())
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Slice `tokens` strictly between the heading containing `markers.start` and
/// the later heading containing `markers.end`. Both marker headings are
/// excluded. Without an end marker the window runs to the end of the document.
pub fn window<'a>(tokens: &'a [Token], markers: &Markers) -> Result<&'a [Token]> {
    let start_inline = find_heading_inline(tokens, 0, &markers.start)
        .ok_or_else(|| MatchLogError::lookup("match log marker heading", &markers.start))?;

    let mut begin = start_inline + 1;
    if matches!(tokens.get(begin), Some(Token::HeadingClose { .. })) {
        begin += 1;
    }

    let end = match find_heading_inline(tokens, begin, &markers.end) {
        Some(end_inline) => end_inline - 1,
        None => {
            tracing::warn!(marker = %markers.end, "window: end marker not found, reading to end");
            tokens.len()
        }
    };
    tracing::debug!(begin, end, total = tokens.len(), "window: match log region");
    Ok(&tokens[begin..end])
}

/// Index of the first heading inline at or after `from` that contains `marker`.
fn find_heading_inline(tokens: &[Token], from: usize, marker: &str) -> Option<usize> {
    (from.max(1)..tokens.len()).find(|&i| {
        matches!(tokens[i - 1], Token::HeadingOpen { .. })
            && matches!(&tokens[i], Token::Inline(text) if text.contains(marker))
    })
}
