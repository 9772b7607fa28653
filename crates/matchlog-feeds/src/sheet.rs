//! Spreadsheet row assembly.
//!
//! A match-log row is 8 record columns followed by one column per roster
//! member:
//!
//! | # | column                                   |
//! |---|------------------------------------------|
//! | 0 | date label                               |
//! | 1 | match number                             |
//! | 2 | mode                                     |
//! | 3 | map                                      |
//! | 4 | winner                                   |
//! | 5 | videos / summary (order from the header) |
//! | 6 | videos / summary (order from the header) |
//! | 7 | headcount (left blank, derived in-sheet) |
//! | 8.. | roster columns                         |
//!
//! With the default 11-name roster that is 19 columns.

use matchlog_core::{MatchLogError, MatchRecord, Result, Roster};

pub const RECORD_COLUMNS: usize = 8;
const TEXT_COLUMNS: [usize; 2] = [5, 6];
const VIDEO_HEADER: &str = "動画";
const SUMMARY_HEADER: &str = "概要";

/// Column positions for one sheet, derived from its header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub width: usize,
    pub video_col: usize,
    pub summary_col: usize,
}

impl RowLayout {
    /// Read the layout from a header row. The header's width (ignoring
    /// trailing blank cells) must equal 8 + `roster_len`.
    pub fn from_header(header: &[String], roster_len: usize) -> Result<Self> {
        let width = header
            .iter()
            .rposition(|cell| !cell.trim().is_empty())
            .map_or(0, |last| last + 1);
        let expected = RECORD_COLUMNS + roster_len;
        if width != expected {
            return Err(MatchLogError::Shape {
                expected,
                actual: width,
            });
        }

        let find = |label: &str| {
            TEXT_COLUMNS
                .into_iter()
                .find(|&col| header[col].trim() == label)
                .ok_or_else(|| MatchLogError::lookup("column header", label))
        };
        Ok(Self {
            width,
            video_col: find(VIDEO_HEADER)?,
            summary_col: find(SUMMARY_HEADER)?,
        })
    }
}

/// Text for the videos cell: one `name: url` line per video.
pub fn video_text(record: &MatchRecord) -> String {
    record
        .videos
        .iter()
        .map(|v| format!("{}: {}", v.contributor_name, v.url_text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assemble one row. Every participant must be on the roster; imposters are
/// prefixed with `imposter_marker`.
///
/// `layout` must have been read for a roster of the same size, otherwise the
/// roster columns would not line up with the header.
pub fn build_row(
    record: &MatchRecord,
    layout: &RowLayout,
    roster: &Roster,
    imposter_marker: &str,
) -> Result<Vec<String>> {
    let width = RECORD_COLUMNS + roster.len();
    if width != layout.width {
        return Err(MatchLogError::Shape {
            expected: layout.width,
            actual: width,
        });
    }

    let mut row = vec![String::new(); width];
    row[0] = record.date.clone();
    row[1] = record.match_number.to_string();
    row[2] = record.mode.label().to_string();
    row[3] = record.map.label().to_string();
    row[4] = record.winner.label().to_string();
    row[layout.video_col] = video_text(record);
    row[layout.summary_col] = record.summary.clone();

    let mut member_cols = Vec::with_capacity(record.members.len());
    for name in &record.members {
        let idx = roster.resolve(name)?;
        row[RECORD_COLUMNS + idx] = roster.canonical(idx).unwrap_or(name).to_string();
        member_cols.push(idx);
    }
    for name in &record.imposters {
        let idx = roster.resolve(name)?;
        if !member_cols.contains(&idx) {
            tracing::warn!(
                match_number = record.match_number,
                name = %name,
                "sheet: imposter is not listed among members"
            );
        }
        let canonical = roster.canonical(idx).unwrap_or(name);
        row[RECORD_COLUMNS + idx] = format!("{imposter_marker}{canonical}");
    }

    Ok(row)
}
