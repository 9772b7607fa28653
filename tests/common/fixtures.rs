//! Static documents used across harnesses, plus a helper that lays out a
//! document directory and a TSV workbook in a temp dir.

use std::path::Path;

use matchlog_core::config::Config;

pub const DOCUMENT_ID: &str = "among-us-night";
pub const SPREADSHEET_ID: &str = "match-stats";
pub const TAB: &str = "試合ログ";

/// A meeting log with a preamble, three matches across two dates (one in
/// body-block form, one with its videos slot first) and a template section.
pub const DOC_MD: &str = r#"# 深夜のAmongUs会

参加方法: Discord の #among-us チャンネル

マップ: ここはテンプレートの説明なので無視される

# 試合ログ

## 6/2昼

### 第1試合

#### マップ

Polus

#### 参加者

ゆうやみ, まりえ, 若丸, 源, あっちゃん

#### インポスター

若丸

#### 勝利

クルー

#### 概要

若丸が2ターン目で吊られた

最後はタスク勝ち

#### 動画

あっちゃん視点: [配信](https://www.youtube.com/watch?v=aaa)

源視点: [録画](https://www.youtube.com/watch?v=bbb)

### 第2試合 かくれんぼ

マップ: The Skeld
参加者: ゆうやみ, 若丸, 透
インポスター: 透
勝利: インポスター
概要: 全員見つかった
【動画】
透視点: [配信](https://www.youtube.com/watch?v=ccc)

## 6/9

### 第1試合

#### 動画

かけちよ視点: [v](https://example.com/k)

#### マップ

airship

#### 参加者

水金, なおえ, すっちん

#### インポスター

なおえ

#### 勝利

インポスター

# （テンプレート）

## 日付

### 第N試合

#### マップ

"#;

/// A single match listing someone who is not on the roster.
pub const DOC_UNKNOWN_MEMBER_MD: &str = r#"# 試合ログ

## 6/16

### 第1試合

マップ: Polus
参加者: ゆうやみ, ゲスト
インポスター: ゆうやみ
勝利: インポスター

# （テンプレート）
"#;

/// Write `markdown` as the document and an empty 19-column sheet under
/// `root`, returning a config pointing at both.
pub fn lay_out_workspace(root: &Path, markdown: &str, header: &[String]) -> Config {
    let docs = root.join("docs");
    let sheets = root.join("sheets").join(SPREADSHEET_ID);
    std::fs::create_dir_all(&docs).unwrap();
    std::fs::create_dir_all(&sheets).unwrap();
    std::fs::write(docs.join(format!("{DOCUMENT_ID}.md")), markdown).unwrap();

    let mut tsv = header.join("\t");
    tsv.push('\n');
    std::fs::write(sheets.join(format!("{TAB}.tsv")), tsv).unwrap();

    Config::from_toml(&format!(
        "document_id = \"{DOCUMENT_ID}\"\nspreadsheet_id = \"{SPREADSHEET_ID}\"\n\
         [source]\ndir = \"{}\"\n[sheet]\ndir = \"{}\"\n",
        docs.display(),
        root.join("sheets").display(),
    ))
    .unwrap()
}

pub fn sheet_path(root: &Path) -> std::path::PathBuf {
    root.join("sheets")
        .join(SPREADSHEET_ID)
        .join(format!("{TAB}.tsv"))
}
