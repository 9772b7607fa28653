//! Normalizer: pure functions turning free-text fields of the match log into
//! typed values.
//!
//! Nothing here guesses: text that does not fit a pattern is a
//! [`MatchLogError::Format`] carrying the offending text. The two tolerated
//! cases are colon-less lines (skipped by [`separate_key_and_value`]) and video
//! lines without a `<name>視点` marker (recorded under a fallback label).

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MatchLogError, Result};
use crate::types::{Mode, MovieContribution};

static ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"第(\d+)試合").expect("ordinal pattern is a constant"));

static CONTRIBUTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)視点").expect("contributor pattern is a constant"));

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[.*?\]\((https?://[^\s)]+)\)").expect("link pattern is a constant")
});

const KEY_SEPARATORS: [char; 2] = [':', '：'];
const NAME_SEPARATORS: [char; 2] = [',', '，'];

/// Extract the match number and mode from a match heading such as
/// `第3試合（かくれんぼ）`.
///
/// The mode is [`Mode::HideAndSeek`] when the heading contains the
/// hide-and-seek keyword and [`Mode::Classic`] otherwise. Match number 0 is
/// rejected because 0 means "no match started".
pub fn extract_match_number_and_mode(text: &str) -> Result<(u32, Mode)> {
    let caps = ORDINAL_RE.captures(text).ok_or_else(|| {
        MatchLogError::format("match heading must contain \"第<number>試合\"", text)
    })?;
    let number: u32 = caps[1]
        .parse()
        .map_err(|_| MatchLogError::format("match number is not an integer", text))?;
    if number == 0 {
        return Err(MatchLogError::format("match number must be positive", text));
    }

    let mode = if text.contains(Mode::HIDE_AND_SEEK_KEYWORD) {
        Mode::HideAndSeek
    } else {
        Mode::Classic
    };
    Ok((number, mode))
}

/// Split `key: value` on the first ASCII or full-width colon.
///
/// Returns `None` when the line has no separator; callers skip such lines.
/// Later colons stay in the value verbatim. Both halves are trimmed.
pub fn separate_key_and_value(text: &str) -> Option<(&str, &str)> {
    let idx = text.find(KEY_SEPARATORS)?;
    let sep_len = text[idx..].chars().next().map_or(1, char::len_utf8);
    Some((text[..idx].trim(), text[idx + sep_len..].trim()))
}

/// Split a participant list on ASCII or full-width commas.
pub fn split_names(text: &str) -> Vec<String> {
    text.split(NAME_SEPARATORS)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse one `「名前」視点: [title](url)` pair.
pub fn parse_video_entry(name_text: &str, url_markdown: &str) -> Result<MovieContribution> {
    let contributor_name = match CONTRIBUTOR_RE.captures(name_text) {
        Some(caps) => caps[1].trim().to_string(),
        None => {
            tracing::warn!(text = name_text, "video: no 視点 marker, using fallback label");
            fallback_contributor(name_text)
        }
    };

    let url_text = LINK_RE
        .captures(url_markdown)
        .map(|caps| caps[1].trim().to_string())
        .ok_or_else(|| {
            MatchLogError::format("video line must contain a [text](http://…) link", url_markdown)
        })?;

    Ok(MovieContribution {
        contributor_name,
        url_text,
    })
}

/// Parse the multi-line content of a videos slot.
///
/// Blank and colon-less lines are skipped; every other line must carry a link.
pub fn parse_videos(text: &str) -> Result<Vec<MovieContribution>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(separate_key_and_value)
        .map(|(name, url)| parse_video_entry(name, url))
        .collect()
}

/// Label used when a contributor cannot be read from the name text.
pub fn fallback_contributor(raw: &str) -> String {
    format!("不明({raw})")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
