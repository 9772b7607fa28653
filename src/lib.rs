//! matchlog: imports a meeting-log Markdown export into a match-log sheet.
//!
//! This crate wires the two boundary adapters around the parser:
//!
//! ```text
//! DocumentSource ──► tokens ──► parse_match_log ──► records ──► SheetSink
//! ```
//!
//! Every stage is fail-fast. A run either writes every record or nothing.

use anyhow::Context;
use matchlog_core::config::{Config, RunIds};
use matchlog_core::{parse_match_log, MatchRecord};
use matchlog_feeds::{
    write_match_records, DocumentSource, Markers, MarkdownDirSource, SheetSink, TsvWorkbook,
    WriteOptions,
};

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub records: Vec<MatchRecord>,
    /// 1-based first row written, `None` for a dry run.
    pub start_row: Option<usize>,
}

/// Fetch, tokenize and parse the match log of `document_id`.
pub fn read_records<D: DocumentSource + ?Sized>(
    source: &D,
    document_id: &str,
) -> anyhow::Result<Vec<MatchRecord>> {
    let tokens = source
        .fetch_match_log_tokens(document_id)
        .with_context(|| format!("reading document {document_id}"))?;
    let records = parse_match_log(&tokens)
        .with_context(|| format!("parsing match log of document {document_id}"))?;
    tracing::info!(document_id, records = records.len(), "match log parsed");
    Ok(records)
}

/// Parse the document and write its records through `sink`.
pub fn import<D, S>(
    source: &D,
    sink: &mut S,
    ids: &RunIds,
    config: &Config,
) -> anyhow::Result<RunReport>
where
    D: DocumentSource + ?Sized,
    S: SheetSink + ?Sized,
{
    let records = read_records(source, &ids.document_id)?;
    let options = write_options(config);
    let start_row = write_match_records(
        sink,
        &ids.spreadsheet_id,
        &records,
        &config.roster(),
        &options,
    )
    .with_context(|| format!("writing spreadsheet {}", ids.spreadsheet_id))?;
    Ok(RunReport {
        records,
        start_row: Some(start_row),
    })
}

/// Run against the local adapters named in `config`.
pub fn run(config: &Config, dry_run: bool) -> anyhow::Result<RunReport> {
    let ids = config.require_ids()?;
    let source = MarkdownDirSource::new(&config.source.dir, markers(config));

    if dry_run {
        let records = read_records(&source, &ids.document_id)?;
        return Ok(RunReport {
            records,
            start_row: None,
        });
    }

    let mut sink = TsvWorkbook::new(&config.sheet.dir);
    import(&source, &mut sink, &ids, config)
}

fn markers(config: &Config) -> Markers {
    Markers {
        start: config.source.start_marker.clone(),
        end: config.source.end_marker.clone(),
    }
}

fn write_options(config: &Config) -> WriteOptions {
    WriteOptions {
        tab: config.sheet.tab.clone(),
        imposter_marker: config.sheet.imposter_marker.clone(),
        start_row: config.sheet.start_row,
    }
}
