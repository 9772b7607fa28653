//! Test builders: ergonomic constructors for token streams and records.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use matchlog_core::{GameMap, MatchRecord, Mode, MovieContribution, Team, Token};

// ---------------------------------------------------------------------------
// TokenStreamBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for windowed token streams.
///
/// # Example
///
/// ```rust
/// let tokens = TokenStreamBuilder::new()
///     .date("6/2昼")
///     .match_heading("第3試合")
///     .slot("マップ", "Polus")
///     .build();
/// ```
#[derive(Default)]
pub struct TokenStreamBuilder {
    tokens: Vec<Token>,
}

impl TokenStreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, label: &str) -> Self {
        self.tokens.extend(Token::heading(2, label));
        self
    }

    pub fn match_heading(mut self, text: &str) -> Self {
        self.tokens.extend(Token::heading(3, text));
        self
    }

    /// A level-4 slot heading followed by one content paragraph.
    pub fn slot(mut self, name: &str, content: &str) -> Self {
        self.tokens.extend(Token::heading(4, name));
        self.tokens.push(Token::inline(content));
        self
    }

    pub fn slot_heading(mut self, name: &str) -> Self {
        self.tokens.extend(Token::heading(4, name));
        self
    }

    pub fn paragraph(mut self, text: &str) -> Self {
        self.tokens.push(Token::inline(text));
        self
    }

    pub fn other(mut self) -> Self {
        self.tokens.push(Token::Other);
        self
    }

    /// All seven slots with valid content, videos last.
    pub fn full_match(self, heading: &str) -> Self {
        self.match_heading(heading)
            .slot("モード", "クラシック")
            .slot("マップ", "Polus")
            .slot("参加者", "ゆうやみ, 若丸, あっちゃん")
            .slot("インポスター", "若丸")
            .slot("勝利", "クルー")
            .slot("概要", "若丸が吊られた")
            .slot("動画", "あっちゃん視点: [link](http://example.com/v)")
    }

    pub fn build(self) -> Vec<Token> {
        self.tokens
    }
}

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`MatchRecord`] fixtures used by sink tests.
pub struct RecordBuilder {
    record: MatchRecord,
}

impl RecordBuilder {
    pub fn new(date: &str, match_number: u32) -> Self {
        Self {
            record: MatchRecord {
                date: date.to_string(),
                match_number,
                mode: Mode::Classic,
                map: GameMap::Polus,
                members: Vec::new(),
                imposters: Vec::new(),
                winner: Team::Crew,
                summary: String::new(),
                videos: Vec::new(),
            },
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.record.mode = mode;
        self
    }

    pub fn map(mut self, map: GameMap) -> Self {
        self.record.map = map;
        self
    }

    pub fn winner(mut self, winner: Team) -> Self {
        self.record.winner = winner;
        self
    }

    pub fn members(mut self, names: &[&str]) -> Self {
        self.record.members = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn imposters(mut self, names: &[&str]) -> Self {
        self.record.imposters = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn summary(mut self, text: &str) -> Self {
        self.record.summary = text.to_string();
        self
    }

    pub fn video(mut self, contributor: &str, url: &str) -> Self {
        self.record.videos.push(MovieContribution {
            contributor_name: contributor.to_string(),
            url_text: url.to_string(),
        });
        self
    }

    pub fn build(self) -> MatchRecord {
        self.record
    }
}

/// Header row for a sheet with the default 19-column layout.
pub fn default_header() -> Vec<String> {
    [
        "日付", "試合数", "モード", "マップ", "勝利", "動画", "概要", "人数",
        "ゆうやみ", "Marie", "Marie（こうすけ）", "若丸", "ようじょ", "源", "水金",
        "あっちゃん", "透", "なおえ", "すっちん",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
