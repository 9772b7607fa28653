//! matchlog-core: match-log parsing for matchlog.
//!
//! This crate holds everything with algorithmic content: the token and record
//! types, the field normalizers, the raw record assembler, the match-log state
//! machine and the record finalizer, plus the injected roster and the
//! configuration layer.
//!
//! # Pipeline
//!
//! ```text
//! Token stream ──► MatchLogParser ──► Vec<MatchRecord>
//!                    │
//!                    ├── normalizer  (ordinals, key:value, videos, names)
//!                    ├── assembler   (body blocks → raw fields)
//!                    └── draft       (validated slots → MatchRecord)
//! ```
//!
//! Parsing is single-threaded and fail-fast: the first malformed value aborts
//! the whole document.

pub mod assembler;
pub mod config;
pub mod draft;
pub mod error;
pub mod normalizer;
pub mod parser;
pub mod roster;
pub mod types;

pub use error::{MatchLogError, Result};
pub use parser::{parse_match_log, MatchLogParser};
pub use roster::{Roster, RosterEntry};
pub use types::{FieldSlot, GameMap, MatchRecord, Mode, MovieContribution, Team, Token};
