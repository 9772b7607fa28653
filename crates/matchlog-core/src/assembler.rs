//! Raw record assembler: groups the body lines of one match into raw field
//! values.
//!
//! A body block is a paragraph of `key: value` lines written directly under a
//! match heading, optionally followed by a `【動画】` marker line and one video
//! line per contributor:
//!
//! ```text
//! マップ: Polus
//! 参加者: ゆうやみ, 若丸
//! 勝利: クルー
//! 【動画】
//! 若丸視点: [配信](https://example.com/w)
//! ```
//!
//! The assembler only routes text to slots. Validation happens when the state
//! machine stores each value, exactly as for heading-introduced content.

use crate::normalizer::separate_key_and_value;
use crate::types::FieldSlot;

/// Line marking the start of the video section in a body block.
pub const VIDEO_MARKER: &str = "【動画】";

/// Raw, unvalidated field text collected from a body block, in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMatchFields {
    pub fields: Vec<(FieldSlot, String)>,
}

impl RawMatchFields {
    pub fn get(&self, slot: FieldSlot) -> Option<&str> {
        self.fields
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, text)| text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split a body block into raw field text.
///
/// Lines without a colon are skipped. Keys that name no field slot are
/// skipped with a warning. Everything after the video marker is kept verbatim
/// as the videos slot.
pub fn assemble_raw(text: &str) -> RawMatchFields {
    let lines: Vec<&str> = text.lines().collect();
    let (log_part, video_part) = match lines.iter().position(|l| l.contains(VIDEO_MARKER)) {
        Some(idx) => (&lines[..idx], Some(&lines[idx + 1..])),
        None => (&lines[..], None),
    };

    let mut raw = RawMatchFields::default();
    for line in log_part {
        let Some((key, value)) = separate_key_and_value(line) else {
            continue;
        };
        match FieldSlot::from_label(key) {
            Some(slot) => raw.fields.push((slot, value.to_string())),
            None => tracing::warn!(key, line, "body block: unknown key skipped"),
        }
    }

    if let Some(video_lines) = video_part {
        raw.fields.push((FieldSlot::Videos, video_lines.join("\n")));
    }
    raw
}
