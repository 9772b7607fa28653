//! Match-log state machine.
//!
//! A single forward pass over the [`Token`] stream. Two pieces of context
//! drive every transition: the heading level currently open (none, 2, 3 or 4)
//! and, once no heading is open, the active [`FieldSlot`].
//!
//! | Token                         | Effect                                              |
//! |-------------------------------|-----------------------------------------------------|
//! | heading-open 2 / 3            | ends the current match (emitting its record)        |
//! | inline under level 2          | sets the date label                                 |
//! | inline under level 3          | starts a new match draft from `第N試合`             |
//! | inline under level 4          | selects the active field slot                       |
//! | heading-close                 | back to content mode                                |
//! | inline, no heading open       | field content (or a body block) for the draft       |
//!
//! A match is emitted once it ends, when its required slots are all present,
//! so the order of field slots inside a match does not matter. Content that
//! appears while no match is open is ignored.
//!
//! Errors are never caught here: the first bad value aborts the whole parse.

use crate::assembler::assemble_raw;
use crate::draft::MatchDraft;
use crate::error::Result;
use crate::normalizer::extract_match_number_and_mode;
use crate::types::{FieldSlot, MatchRecord, Token};

const DATE_LEVEL: u8 = 2;
const MATCH_LEVEL: u8 = 3;
const SLOT_LEVEL: u8 = 4;

/// Parser state threaded by value through the token stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchLogParser {
    open_heading: Option<u8>,
    date: String,
    active_slot: Option<FieldSlot>,
    current: Option<MatchDraft>,
}

impl MatchLogParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Match number of the draft in progress; 0 when no match is open.
    pub fn match_number(&self) -> u32 {
        self.current.as_ref().map_or(0, |draft| draft.match_number)
    }

    pub fn active_slot(&self) -> Option<FieldSlot> {
        self.active_slot
    }

    /// Consume one token, returning the next state and the record of a match
    /// that ended on this token, if any.
    pub fn step(mut self, token: &Token) -> Result<(Self, Option<MatchRecord>)> {
        let mut emitted = None;
        match token {
            Token::HeadingOpen { level } => {
                if matches!(*level, DATE_LEVEL | MATCH_LEVEL) {
                    emitted = self.end_match()?;
                }
                self.open_heading = Some(*level);
            }
            Token::HeadingClose { .. } => self.open_heading = None,
            Token::Inline(text) => self.inline(text)?,
            Token::Other => {}
        }
        Ok((self, emitted))
    }

    /// End of stream: emit the last match, if one is open.
    pub fn finish(mut self) -> Result<Option<MatchRecord>> {
        self.end_match()
    }

    fn inline(&mut self, text: &str) -> Result<()> {
        match self.open_heading {
            Some(DATE_LEVEL) => {
                self.date = text.trim().to_string();
                self.active_slot = None;
                tracing::debug!(date = %self.date, "parser: date heading");
            }
            Some(MATCH_LEVEL) => {
                let (number, mode) = extract_match_number_and_mode(text)?;
                self.current = Some(MatchDraft::new(self.date.clone(), number, mode));
                self.active_slot = None;
                tracing::debug!(date = %self.date, match_number = number, mode = %mode, "parser: match heading");
            }
            Some(SLOT_LEVEL) => {
                let slot: FieldSlot = text.parse()?;
                self.active_slot = Some(slot);
                tracing::debug!(slot = %slot, match_number = self.match_number(), "parser: field slot");
            }
            Some(level) => {
                tracing::debug!(level, text, "parser: heading level ignored");
            }
            None => self.content(text)?,
        }
        Ok(())
    }

    fn content(&mut self, text: &str) -> Result<()> {
        let Some(draft) = self.current.as_mut() else {
            tracing::debug!(text, "parser: content before first match skipped");
            return Ok(());
        };

        match self.active_slot {
            Some(slot) => draft.assign(slot, text),
            None => {
                let raw = assemble_raw(text);
                if raw.is_empty() {
                    tracing::debug!(text, "parser: prose without field skipped");
                }
                for (slot, value) in &raw.fields {
                    draft.assign(*slot, value)?;
                }
                Ok(())
            }
        }
    }

    fn end_match(&mut self) -> Result<Option<MatchRecord>> {
        self.active_slot = None;
        let Some(draft) = self.current.take() else {
            return Ok(None);
        };
        let record = draft.finalize()?;
        tracing::info!(
            date = %record.date,
            match_number = record.match_number,
            map = %record.map,
            winner = %record.winner,
            videos = record.videos.len(),
            "parser: match finalized"
        );
        Ok(Some(record))
    }
}

/// Parse a windowed token stream into match records, in document order.
pub fn parse_match_log(tokens: &[Token]) -> Result<Vec<MatchRecord>> {
    let (parser, mut records) = tokens.iter().try_fold(
        (MatchLogParser::new(), Vec::new()),
        |(parser, mut records), token| {
            let (parser, emitted) = parser.step(token)?;
            records.extend(emitted);
            Ok::<_, crate::error::MatchLogError>((parser, records))
        },
    )?;
    records.extend(parser.finish()?);
    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
