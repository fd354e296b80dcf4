//! 応答テキストパーサー
//!
//! モデルの自由形式テキストを `ラベル: 値` の表に変換する

use crate::types::{IdentificationResult, ResultRow};

/// 応答テキストをパース
///
/// 各行を最初のコロンで分割し、両側をtrimする。
/// コロンのない行、ラベルか値が空になる行は捨てる（エラーにはしない）。
/// 値に含まれる2つ目以降のコロンはそのまま残す（URLなど）。
///
/// # Examples
/// ```
/// use object_identifier_common::parse_identification;
///
/// let result = parse_identification("Name: Peace Lily\nCare: Low light");
/// assert_eq!(result.get("Name"), Some("Peace Lily"));
/// assert_eq!(result.get("Care"), Some("Low light"));
/// ```
pub fn parse_identification(text: &str) -> IdentificationResult {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ResultRow> {
    let (label, value) = line.split_once(':')?;
    let (label, value) = (label.trim(), value.trim());
    if label.is_empty() || value.is_empty() {
        return None;
    }
    Some(ResultRow::new(label, value))
}
