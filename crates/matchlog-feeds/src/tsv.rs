//! Tab-separated sheet files.
//!
//! Cells containing a tab, a quote or a line break are wrapped in double
//! quotes with inner quotes doubled, so multi-line summaries and video lists
//! survive a write and a read.

use std::io::{self, Write};
use std::mem::take;

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Split `text` into rows of cells. CRLF line endings are accepted.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some('"')) {
                    chars.next(); // doubled quote
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            '\t' if !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                rows.push(take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

fn needs_quotes(cell: &str) -> bool {
    cell.contains(['\t', '"', '\n', '\r'])
}

/// Write a single TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "\t")?;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Render every row, one line each.
pub fn rows_to_string(rows: &[Vec<String>]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    for r in rows {
        // Writing into a Vec cannot fail.
        let _ = write_row(&mut buf, r);
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
