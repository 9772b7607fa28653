//! Spreadsheet sinks.
//!
//! [`write_match_records`] assembles every row before touching the sink, so a
//! bad record (unknown participant, wrong width) aborts the run with nothing
//! written.

use std::collections::HashMap;
use std::path::PathBuf;

use matchlog_core::{MatchLogError, MatchRecord, Result, Roster};

use crate::sheet::{build_row, RowLayout};
use crate::tsv;

/// A spreadsheet made of named tabs whose first row is the header.
pub trait SheetSink {
    fn header_row(&self, sheet_id: &str, tab: &str) -> Result<Vec<String>>;

    /// 1-based index of the first row after existing content.
    fn next_empty_row(&self, sheet_id: &str, tab: &str) -> Result<usize>;

    /// Overwrite rows starting at the 1-based `start_row`.
    fn write_rows(
        &mut self,
        sheet_id: &str,
        tab: &str,
        start_row: usize,
        rows: &[Vec<String>],
    ) -> Result<()>;
}

/// Where and how records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub tab: String,
    pub imposter_marker: String,
    /// 1-based; `None` appends after existing content.
    pub start_row: Option<usize>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            tab: "試合ログ".to_string(),
            imposter_marker: "★".to_string(),
            start_row: None,
        }
    }
}

/// Write `records` to `sheet_id`, returning the 1-based first row written.
pub fn write_match_records<S: SheetSink + ?Sized>(
    sink: &mut S,
    sheet_id: &str,
    records: &[MatchRecord],
    roster: &Roster,
    options: &WriteOptions,
) -> Result<usize> {
    let header = sink.header_row(sheet_id, &options.tab)?;
    let layout = RowLayout::from_header(&header, roster.len())?;

    let rows = records
        .iter()
        .map(|record| build_row(record, &layout, roster, &options.imposter_marker))
        .collect::<Result<Vec<_>>>()?;

    let start_row = match options.start_row {
        Some(row) => row,
        None => sink.next_empty_row(sheet_id, &options.tab)?,
    };
    if start_row < 2 {
        return Err(MatchLogError::Configuration(format!(
            "start_row must be 2 or later (row 1 is the header), got {start_row}"
        )));
    }

    sink.write_rows(sheet_id, &options.tab, start_row, &rows)?;
    tracing::info!(sheet_id, tab = %options.tab, start_row, rows = rows.len(), "sink: rows written");
    Ok(start_row)
}

fn next_row_after(rows: &[Vec<String>]) -> usize {
    let used = rows
        .iter()
        .rposition(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .map_or(0, |last| last + 1);
    used.max(1) + 1
}

fn splice_rows(existing: &mut Vec<Vec<String>>, start_row: usize, rows: &[Vec<String>]) {
    let first = start_row - 1;
    if existing.len() < first + rows.len() {
        existing.resize(first + rows.len(), Vec::new());
    }
    for (offset, row) in rows.iter().enumerate() {
        existing[first + offset] = row.clone();
    }
}

// ---------------------------------------------------------------------------
// In-memory sheet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    tabs: HashMap<(String, String), Vec<Vec<String>>>,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tab(mut self, sheet_id: &str, tab: &str, header: Vec<String>) -> Self {
        self.tabs
            .insert((sheet_id.to_string(), tab.to_string()), vec![header]);
        self
    }

    /// All rows of a tab, header included.
    pub fn rows(&self, sheet_id: &str, tab: &str) -> Option<&[Vec<String>]> {
        self.tabs
            .get(&(sheet_id.to_string(), tab.to_string()))
            .map(Vec::as_slice)
    }

    fn tab(&self, sheet_id: &str, tab: &str) -> Result<&Vec<Vec<String>>> {
        if !self.tabs.keys().any(|(id, _)| id == sheet_id) {
            return Err(MatchLogError::lookup("spreadsheet", sheet_id));
        }
        self.tabs
            .get(&(sheet_id.to_string(), tab.to_string()))
            .ok_or_else(|| MatchLogError::lookup("sheet tab", tab))
    }
}

impl SheetSink for MemorySheet {
    fn header_row(&self, sheet_id: &str, tab: &str) -> Result<Vec<String>> {
        Ok(self.tab(sheet_id, tab)?.first().cloned().unwrap_or_default())
    }

    fn next_empty_row(&self, sheet_id: &str, tab: &str) -> Result<usize> {
        Ok(next_row_after(self.tab(sheet_id, tab)?))
    }

    fn write_rows(
        &mut self,
        sheet_id: &str,
        tab: &str,
        start_row: usize,
        rows: &[Vec<String>],
    ) -> Result<()> {
        self.tab(sheet_id, tab)?;
        let existing = self
            .tabs
            .get_mut(&(sheet_id.to_string(), tab.to_string()))
            .ok_or_else(|| MatchLogError::lookup("sheet tab", tab))?;
        splice_rows(existing, start_row, rows);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TSV workbook on disk
// ---------------------------------------------------------------------------

/// Spreadsheets stored as `<dir>/<spreadsheet_id>/<tab>.tsv`.
#[derive(Debug, Clone)]
pub struct TsvWorkbook {
    dir: PathBuf,
}

impl TsvWorkbook {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn tab_path(&self, sheet_id: &str, tab: &str) -> Result<PathBuf> {
        let sheet_dir = self.dir.join(sheet_id);
        if !sheet_dir.is_dir() {
            return Err(MatchLogError::lookup("spreadsheet", sheet_id));
        }
        let path = sheet_dir.join(format!("{tab}.tsv"));
        if !path.is_file() {
            return Err(MatchLogError::lookup("sheet tab", tab));
        }
        Ok(path)
    }

    fn read_tab(&self, sheet_id: &str, tab: &str) -> Result<(PathBuf, Vec<Vec<String>>)> {
        let path = self.tab_path(sheet_id, tab)?;
        let text =
            std::fs::read_to_string(&path).map_err(|e| MatchLogError::io(path.display(), e))?;
        Ok((path, tsv::parse_rows(&text)))
    }
}

impl SheetSink for TsvWorkbook {
    fn header_row(&self, sheet_id: &str, tab: &str) -> Result<Vec<String>> {
        let (_, rows) = self.read_tab(sheet_id, tab)?;
        Ok(rows.into_iter().next().unwrap_or_default())
    }

    fn next_empty_row(&self, sheet_id: &str, tab: &str) -> Result<usize> {
        let (_, rows) = self.read_tab(sheet_id, tab)?;
        Ok(next_row_after(&rows))
    }

    fn write_rows(
        &mut self,
        sheet_id: &str,
        tab: &str,
        start_row: usize,
        rows: &[Vec<String>],
    ) -> Result<()> {
        let (path, mut existing) = self.read_tab(sheet_id, tab)?;
        splice_rows(&mut existing, start_row, rows);
        tracing::debug!(path = %path.display(), start_row, rows = rows.len(), "sink: writing tab");
        std::fs::write(&path, tsv::rows_to_string(&existing))
            .map_err(|e| MatchLogError::io(path.display(), e))
    }
}
