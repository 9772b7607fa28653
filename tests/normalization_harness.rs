#![allow(unused)]
//! Field normalizer integration harness.
//!
//! # What this covers
//!
//! - **Ordinal marker**: `第N試合` yields N and the hide-and-seek keyword
//!   selects the mode; anything else is a format error.
//! - **Key/value splitting**: first ASCII or full-width colon only; colon-less
//!   lines yield `None`.
//! - **Videos**: contributor from `<name>視点`, fallback label otherwise; link
//!   syntax is mandatory.
//! - **Body blocks**: the raw assembler routes `key: value` lines and the
//!   `【動画】` section to field slots.
//! - **Properties**: proptest over generated headings and lines.
//!
//! # Running
//!
//! ```sh
//! cargo test --test normalization_harness
//! ```

mod common;
use common::*;
use matchlog_core::assembler::assemble_raw;
use matchlog_core::normalizer::{
    extract_match_number_and_mode, fallback_contributor, parse_videos, separate_key_and_value,
    split_names,
};
use matchlog_core::{FieldSlot, Mode};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Ordinal marker
// ---------------------------------------------------------------------------

#[rstest]
#[case("第1試合", 1, Mode::Classic)]
#[case("第10試合 かくれんぼ", 10, Mode::HideAndSeek)]
#[case("【かくれんぼ】第2試合", 2, Mode::HideAndSeek)]
fn ordinal_marker_is_extracted(#[case] text: &str, #[case] number: u32, #[case] mode: Mode) {
    assert_eq!(extract_match_number_and_mode(text).unwrap(), (number, mode));
}

#[rstest]
#[case("第試合")]
#[case("3試合目")]
#[case("")]
fn missing_ordinal_is_format_error(#[case] text: &str) {
    assert_format_error!(extract_match_number_and_mode(text), "第<number>試合");
}

// ---------------------------------------------------------------------------
// Key/value
// ---------------------------------------------------------------------------

#[rstest]
#[case("マップ: Polus", Some(("マップ", "Polus")))]
#[case("a:b:c", Some(("a", "b:c")))]
#[case("  勝利 ： クルー  ", Some(("勝利", "クルー")))]
#[case("キー:", Some(("キー", "")))]
#[case("no colon here", None)]
fn key_value_split(#[case] text: &str, #[case] expected: Option<(&str, &str)>) {
    assert_eq!(separate_key_and_value(text), expected);
}

// ---------------------------------------------------------------------------
// Videos
// ---------------------------------------------------------------------------

#[test]
fn video_contributors_and_urls() {
    let videos = parse_videos(
        "あっちゃん視点: [link](http://example.com/v)\n切り抜き: [clip](https://example.com/c?t=1)",
    )
    .unwrap();
    let pairs: Vec<(&str, &str)> = videos
        .iter()
        .map(|v| (v.contributor_name.as_str(), v.url_text.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("あっちゃん", "http://example.com/v"),
            ("不明(切り抜き)", "https://example.com/c?t=1"),
        ]
    );
    assert_eq!(fallback_contributor("切り抜き"), "不明(切り抜き)");
}

#[rstest]
#[case::bare_url("源視点: https://example.com")]
#[case::no_scheme("源視点: [a](example.com)")]
#[case::empty_value("源視点:")]
#[case::no_marker_bare_url("切り抜き: https://x")]
#[case::no_marker_plain_text("まとめ: あとで貼る")]
fn video_without_markdown_link_fails(#[case] line: &str) {
    assert!(parse_videos(line).unwrap_err().is_format());
}

// ---------------------------------------------------------------------------
// Names and body blocks
// ---------------------------------------------------------------------------

#[test]
fn names_split_on_ascii_and_full_width_commas() {
    assert_eq!(split_names("源，透, なおえ"), vec!["源", "透", "なおえ"]);
    assert!(split_names("  ").is_empty());
}

#[test]
fn body_block_assembles_all_slots() {
    let raw = assemble_raw(
        "モード: かくれんぼ\nマップ: Polus\n参加者: 源, 透\nインポスター: 透\n勝利: クルー\n概要: 短期決戦\n【動画】\n源視点: [a](https://a.example)\n透視点: [b](https://b.example)",
    );
    let slots: Vec<FieldSlot> = raw.fields.iter().map(|(slot, _)| *slot).collect();
    assert_eq!(
        slots,
        vec![
            FieldSlot::Mode,
            FieldSlot::Map,
            FieldSlot::Members,
            FieldSlot::Imposters,
            FieldSlot::Winner,
            FieldSlot::Summary,
            FieldSlot::Videos,
        ]
    );
    assert_eq!(parse_videos(raw.get(FieldSlot::Videos).unwrap()).unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn ordinal_number_round_trips(n in 1u32..=u32::MAX, tail in "[^第]{0,10}") {
        let text = format!("第{n}試合{tail}");
        let (number, mode) = extract_match_number_and_mode(&text).unwrap();
        prop_assert_eq!(number, n);
        prop_assert_eq!(mode == Mode::HideAndSeek, tail.contains("かくれんぼ"));
    }

    #[test]
    fn colon_less_lines_are_skipped(line in "[^:：]*") {
        prop_assert_eq!(separate_key_and_value(&line), None);
    }

    #[test]
    fn video_lines_without_link_always_fail(
        name in "[a-z]{1,5}",
        url in "[a-z./]{1,20}",
        with_marker in any::<bool>(),
    ) {
        let key = if with_marker { format!("{name}視点") } else { name };
        let line = format!("{key}: {url}");
        let err = parse_videos(&line).unwrap_err();
        prop_assert!(err.is_format());
    }
}
