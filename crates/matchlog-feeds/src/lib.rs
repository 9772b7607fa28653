//! matchlog-feeds: boundary adapters for matchlog.
//!
//! Two seams connect the parser to the outside world:
//!
//! - a [`DocumentSource`] turns a document identifier into the windowed token
//!   stream between the match-log marker heading and the template marker;
//! - a [`SheetSink`] receives fully assembled spreadsheet rows.
//!
//! Both are traits so the pipeline can run against local files
//! ([`MarkdownDirSource`], [`TsvWorkbook`]) or in-memory fakes
//! ([`StaticSource`], [`MemorySheet`]).

pub mod markdown;
pub mod sheet;
pub mod sink;
pub mod source;
pub mod tsv;

pub use markdown::{tokenize, window, Markers};
pub use sheet::{build_row, RowLayout};
pub use sink::{write_match_records, MemorySheet, SheetSink, TsvWorkbook, WriteOptions};
pub use source::{DocumentSource, MarkdownDirSource, StaticSource};
