//! Match draft: the field-slot-scoped state of the match being parsed, and
//! the finalizer that turns it into an immutable [`MatchRecord`].

use std::collections::BTreeSet;

use crate::error::{MatchLogError, Result};
use crate::normalizer::{parse_videos, split_names};
use crate::types::{FieldSlot, GameMap, MatchRecord, Mode, MovieContribution, Team};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDraft {
    pub date: String,
    pub match_number: u32,
    pub mode: Mode,
    map: Option<GameMap>,
    members: Vec<String>,
    imposters: Vec<String>,
    winner: Option<Team>,
    summary: String,
    videos: Vec<MovieContribution>,
    /// Slots that have received content since the match heading.
    gathered: BTreeSet<FieldSlot>,
}

impl MatchDraft {
    pub fn new(date: impl Into<String>, match_number: u32, mode: Mode) -> Self {
        Self {
            date: date.into(),
            match_number,
            mode,
            map: None,
            members: Vec::new(),
            imposters: Vec::new(),
            winner: None,
            summary: String::new(),
            videos: Vec::new(),
            gathered: BTreeSet::new(),
        }
    }

    /// Validate `text` for `slot` and store it.
    ///
    /// Scalars and name lists replace earlier content. Summary paragraphs are
    /// joined with a newline and video lines accumulate, so both may span
    /// several paragraphs.
    pub fn assign(&mut self, slot: FieldSlot, text: &str) -> Result<()> {
        let text = text.trim();
        if matches!(slot, FieldSlot::Members | FieldSlot::Imposters) && self.has(slot) {
            tracing::warn!(
                match_number = self.match_number,
                slot = %slot,
                text,
                "draft: name list replaced by a later paragraph"
            );
        }
        match slot {
            FieldSlot::Mode => self.mode = text.parse()?,
            FieldSlot::Map => self.map = Some(text.parse()?),
            FieldSlot::Members => self.members = split_names(text),
            FieldSlot::Imposters => self.imposters = split_names(text),
            FieldSlot::Winner => self.winner = Some(text.parse()?),
            FieldSlot::Summary => {
                if !self.summary.is_empty() {
                    self.summary.push('\n');
                }
                self.summary.push_str(text);
            }
            FieldSlot::Videos => self.videos.extend(parse_videos(text)?),
        }
        self.gathered.insert(slot);
        tracing::debug!(
            match_number = self.match_number,
            slot = %slot,
            "draft: slot assigned"
        );
        Ok(())
    }

    pub fn has(&self, slot: FieldSlot) -> bool {
        self.gathered.contains(&slot)
    }

    /// Required slots that have not received content yet.
    pub fn missing(&self) -> Vec<FieldSlot> {
        FieldSlot::REQUIRED
            .into_iter()
            .filter(|slot| !self.has(*slot))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Heading text identifying this match in error messages.
    pub fn describe(&self) -> String {
        format!("{} 第{}試合", self.date, self.match_number)
    }

    /// Build the immutable record. Fails if a required slot is missing.
    pub fn finalize(self) -> Result<MatchRecord> {
        let missing = self.missing();
        let (Some(map), Some(winner), true) = (self.map, self.winner, missing.is_empty()) else {
            let names: Vec<&str> = missing.iter().map(|slot| slot.label()).collect();
            return Err(MatchLogError::format(
                format!("match is missing required fields [{}]", names.join(", ")),
                self.describe(),
            ));
        };

        Ok(MatchRecord {
            date: self.date,
            match_number: self.match_number,
            mode: self.mode,
            map,
            members: self.members,
            imposters: self.imposters,
            winner,
            summary: self.summary,
            videos: self.videos,
        })
    }
}
