//! 結果表のテキスト整形

use object_identifier_common::IdentificationResult;
use unicode_width::UnicodeWidthStr;

/// ラベル列を揃えた2列の表（全角は2桁として数える）
pub fn format_table(result: &IdentificationResult) -> String {
    let width = result
        .iter()
        .map(|row| row.label.width())
        .max()
        .unwrap_or(0);

    result
        .iter()
        .map(|row| {
            let padding = width - row.label.width();
            format!("{}{}  {}", row.label, " ".repeat(padding), row.value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_identifier_common::parse_identification;

    #[test]
    fn test_format_table_aligns_labels() {
        let result = parse_identification("Name: Laptop\nFeatures: Retina display");
        assert_eq!(
            format_table(&result),
            "Name      Laptop\nFeatures  Retina display"
        );
    }

    #[test]
    fn test_format_table_multibyte_labels() {
        let result = parse_identification("名前: ノートPC\nBrand: Apple");
        assert_eq!(format_table(&result), "名前   ノートPC\nBrand  Apple");
    }

    #[test]
    fn test_format_table_wide_label_longest() {
        let result = parse_identification("Name: Laptop\n製品カテゴリ: ノートPC");
        let table = format_table(&result);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], format!("Name{}  Laptop", " ".repeat(8)));
        assert_eq!(lines[1], "製品カテゴリ  ノートPC");
        // 値の列が表示上同じ位置から始まる
        let value_column = |line: &str, value: &str| line[..line.find(value).unwrap_or(0)].width();
        assert_eq!(value_column(lines[0], "Laptop"), value_column(lines[1], "ノートPC"));
    }

    #[test]
    fn test_format_table_empty() {
        assert_eq!(format_table(&IdentificationResult::default()), "");
    }
}
