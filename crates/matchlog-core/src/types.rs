//! Core types for matchlog-core.
//!
//! This module defines the data shared across the pipeline: the flat
//! [`Token`] stream produced by the document source, the closed vocabularies
//! ([`Mode`], [`Team`], [`GameMap`], [`FieldSlot`]) and the finalized
//! [`MatchRecord`] handed to the spreadsheet sink.

use std::str::FromStr;

use serde::Serialize;

use crate::error::MatchLogError;

// ---------------------------------------------------------------------------
// Token stream
// ---------------------------------------------------------------------------

/// One block-level element of the Markdown export, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    HeadingOpen { level: u8 },
    HeadingClose { level: u8 },
    /// Inline content of a heading or paragraph. Paragraph text keeps its
    /// Markdown source (links stay `[text](url)`); lines are joined by `\n`.
    Inline(String),
    /// Any other block event (lists, rules, code blocks).
    Other,
}

impl Token {
    /// The open / inline / close triple for a heading.
    pub fn heading(level: u8, text: impl Into<String>) -> [Token; 3] {
        [
            Token::HeadingOpen { level },
            Token::Inline(text.into()),
            Token::HeadingClose { level },
        ]
    }

    pub fn inline(text: impl Into<String>) -> Token {
        Token::Inline(text.into())
    }
}

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

/// Game mode of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Mode {
    #[default]
    #[serde(rename = "クラシック")]
    Classic,
    #[serde(rename = "かくれんぼ")]
    HideAndSeek,
}

impl Mode {
    pub const VOCABULARY: &'static [&'static str] = &["クラシック", "かくれんぼ"];

    /// Keyword whose presence in a match heading selects [`Mode::HideAndSeek`].
    pub const HIDE_AND_SEEK_KEYWORD: &'static str = "かくれんぼ";

    pub fn label(self) -> &'static str {
        match self {
            Mode::Classic => "クラシック",
            Mode::HideAndSeek => "かくれんぼ",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = MatchLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "クラシック" => Ok(Mode::Classic),
            "かくれんぼ" => Ok(Mode::HideAndSeek),
            _ => Err(vocabulary_error("mode", Mode::VOCABULARY, s)),
        }
    }
}

/// Winning side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Team {
    #[serde(rename = "クルー")]
    Crew,
    #[serde(rename = "インポスター")]
    Impostor,
}

impl Team {
    pub const VOCABULARY: &'static [&'static str] = &["クルー", "インポスター"];

    pub fn label(self) -> &'static str {
        match self {
            Team::Crew => "クルー",
            Team::Impostor => "インポスター",
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Team {
    type Err = MatchLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "クルー" => Ok(Team::Crew),
            "インポスター" => Ok(Team::Impostor),
            _ => Err(vocabulary_error("team", Team::VOCABULARY, s)),
        }
    }
}

/// The five known maps. Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameMap {
    #[serde(rename = "The Skeld")]
    TheSkeld,
    #[serde(rename = "MIRA HQ")]
    MiraHq,
    #[serde(rename = "Polus")]
    Polus,
    #[serde(rename = "Airship")]
    Airship,
    #[serde(rename = "The Fungle")]
    TheFungle,
}

impl GameMap {
    pub const ALL: [GameMap; 5] = [
        GameMap::TheSkeld,
        GameMap::MiraHq,
        GameMap::Polus,
        GameMap::Airship,
        GameMap::TheFungle,
    ];

    pub const VOCABULARY: &'static [&'static str] =
        &["The Skeld", "MIRA HQ", "Polus", "Airship", "The Fungle"];

    pub fn label(self) -> &'static str {
        match self {
            GameMap::TheSkeld => "The Skeld",
            GameMap::MiraHq => "MIRA HQ",
            GameMap::Polus => "Polus",
            GameMap::Airship => "Airship",
            GameMap::TheFungle => "The Fungle",
        }
    }
}

impl std::fmt::Display for GameMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameMap {
    type Err = MatchLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        GameMap::ALL
            .into_iter()
            .find(|map| map.label().to_lowercase() == wanted)
            .ok_or_else(|| vocabulary_error("map", GameMap::VOCABULARY, s))
    }
}

/// One of the seven named attributes of a match, introduced by a level-4
/// heading (or a `key:` in a body block).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldSlot {
    Mode,
    Map,
    Members,
    Imposters,
    Winner,
    Summary,
    Videos,
}

impl FieldSlot {
    pub const VOCABULARY: &'static [&'static str] =
        &["モード", "マップ", "参加者", "インポスター", "勝利", "概要", "動画"];

    /// Slots that must have received content before a match can be finalized.
    pub const REQUIRED: [FieldSlot; 4] = [
        FieldSlot::Map,
        FieldSlot::Members,
        FieldSlot::Imposters,
        FieldSlot::Winner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldSlot::Mode => "モード",
            FieldSlot::Map => "マップ",
            FieldSlot::Members => "参加者",
            FieldSlot::Imposters => "インポスター",
            FieldSlot::Winner => "勝利",
            FieldSlot::Summary => "概要",
            FieldSlot::Videos => "動画",
        }
    }

    /// Lookup without an error, for body-block keys where unknown keys are
    /// tolerated.
    pub fn from_label(s: &str) -> Option<FieldSlot> {
        match s.trim() {
            "モード" => Some(FieldSlot::Mode),
            "マップ" => Some(FieldSlot::Map),
            "参加者" => Some(FieldSlot::Members),
            "インポスター" => Some(FieldSlot::Imposters),
            "勝利" => Some(FieldSlot::Winner),
            "概要" => Some(FieldSlot::Summary),
            "動画" | "【動画】" => Some(FieldSlot::Videos),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FieldSlot {
    type Err = MatchLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldSlot::from_label(s)
            .ok_or_else(|| vocabulary_error("field slot", FieldSlot::VOCABULARY, s))
    }
}

fn vocabulary_error(what: &str, vocabulary: &[&str], text: &str) -> MatchLogError {
    MatchLogError::format(
        format!("unknown {what}, expected one of [{}]", vocabulary.join(", ")),
        text,
    )
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One video of a match, from one participant's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieContribution {
    pub contributor_name: String,
    pub url_text: String,
}

/// A finalized, immutable result for a single game round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Free-form session label such as `6/2昼`; not a calendar date.
    pub date: String,
    /// Match index within its date block, always ≥ 1.
    pub match_number: u32,
    pub mode: Mode,
    pub map: GameMap,
    pub members: Vec<String>,
    /// Names of the imposters. Not checked to be a subset of `members`.
    pub imposters: Vec<String>,
    pub winner: Team,
    pub summary: String,
    pub videos: Vec<MovieContribution>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
