//! 識別処理の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ImageAsset: 識別対象の画像（バイト列 + MIMEタイプ + 表示用URL）
//! - ResultRow / IdentificationResult: 応答テキストをパースした表
//! - ExampleEntry: 同梱の表示用サンプル

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// MIMEタイプ不明時のデフォルト
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// 識別対象の画像
///
/// アップロード/撮影のたびに新しく作られ、前の画像を置き換える
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageAsset {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    /// 表示用の一時URL（ブラウザではObject URL）
    pub display_url: Option<String>,
}

impl ImageAsset {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        let mime_type = if mime_type.trim().is_empty() {
            DEFAULT_MIME_TYPE.to_string()
        } else {
            mime_type
        };

        Self {
            bytes,
            mime_type,
            display_url: None,
        }
    }

    pub fn with_display_url(mut self, url: impl Into<String>) -> Self {
        self.display_url = Some(url.into());
        self
    }

    /// Data URLから生成
    ///
    /// # Arguments
    /// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
    ///
    /// # Returns
    /// デコード結果、不正な形式の場合はNone
    pub fn from_data_url(data_url: &str) -> Option<Self> {
        let base64_data = extract_base64_from_data_url(data_url)?;
        let bytes = STANDARD.decode(base64_data).ok()?;
        Some(Self::new(bytes, extract_mime_type_from_data_url(data_url)))
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }

    /// `<img src>` に渡すURL
    pub fn display_src(&self) -> String {
        self.display_url
            .clone()
            .unwrap_or_else(|| self.to_data_url())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Data URLからBase64データ部分を抽出
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    let (header, data) = data_url.split_once(',')?;
    if !header.starts_with("data:") || !header.ends_with(";base64") {
        return None;
    }
    Some(data)
}

/// Data URLからMIMEタイプを抽出（不明時は image/jpeg）
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .strip_prefix("data:")
        .and_then(|s| s.split([';', ',']).next())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_MIME_TYPE)
}

/// 結果表の1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub label: String,
    pub value: String,
}

impl ResultRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// 識別結果（順序付きの ラベル/値 の並び）
///
/// 自由形式の応答から作るので、ラベルの重複やスキーマは保証しない
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentificationResult {
    pub rows: Vec<ResultRow>,
}

impl IdentificationResult {
    pub fn iter(&self) -> std::slice::Iter<'_, ResultRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 最初に一致したラベルの値
    pub fn get(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

impl FromIterator<ResultRow> for IdentificationResult {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a IdentificationResult {
    type Item = &'a ResultRow;
    type IntoIter = std::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// 同梱サンプル（画像URL + 応答テキスト）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleEntry {
    pub image_url: &'static str,
    pub raw_text: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // ImageAsset テスト
    // =============================================

    #[test]
    fn test_image_asset_default_mime() {
        let asset = ImageAsset::new(vec![1, 2, 3], "");
        assert_eq!(asset.mime_type, "image/jpeg");
        assert_eq!(asset.display_url, None);
    }

    #[test]
    fn test_image_asset_keeps_mime() {
        let asset = ImageAsset::new(vec![1, 2, 3], "image/png");
        assert_eq!(asset.mime_type, "image/png");
        assert_eq!(asset.len(), 3);
        assert!(!asset.is_empty());
    }

    #[test]
    fn test_image_asset_to_data_url() {
        let asset = ImageAsset::new(b"hello".to_vec(), "image/png");
        assert_eq!(asset.to_base64(), "aGVsbG8=");
        assert_eq!(asset.to_data_url(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn test_image_asset_display_src_prefers_url() {
        let asset = ImageAsset::new(b"hello".to_vec(), "image/png")
            .with_display_url("blob:http://localhost/abc");
        assert_eq!(asset.display_src(), "blob:http://localhost/abc");

        let asset = ImageAsset::new(b"hello".to_vec(), "image/png");
        assert!(asset.display_src().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_image_asset_from_data_url() {
        let asset = ImageAsset::from_data_url("data:image/webp;base64,aGVsbG8=")
            .expect("デコード失敗");
        assert_eq!(asset.bytes, b"hello");
        assert_eq!(asset.mime_type, "image/webp");
    }

    #[test]
    fn test_image_asset_from_data_url_invalid() {
        assert!(ImageAsset::from_data_url("not a data url").is_none());
        assert!(ImageAsset::from_data_url("data:image/png;base64,@@@").is_none());
        assert!(ImageAsset::from_data_url("").is_none());
    }

    // =============================================
    // Data URL抽出テスト
    // =============================================

    #[test]
    fn test_extract_base64_from_data_url_jpeg() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
        assert_eq!(extract_base64_from_data_url(data_url), Some("/9j/4AAQSkZJRg=="));
    }

    #[test]
    fn test_extract_base64_requires_base64_marker() {
        assert_eq!(extract_base64_from_data_url("data:text/plain,hello"), None);
    }

    #[test]
    fn test_extract_mime_type() {
        assert_eq!(extract_mime_type_from_data_url("data:image/png;base64,iVBO"), "image/png");
        assert_eq!(extract_mime_type_from_data_url("data:;base64,iVBO"), "image/jpeg");
        assert_eq!(extract_mime_type_from_data_url("invalid"), "image/jpeg");
    }

    // =============================================
    // IdentificationResult テスト
    // =============================================

    #[test]
    fn test_identification_result_get() {
        let result: IdentificationResult = vec![
            ResultRow::new("Name", "Laptop"),
            ResultRow::new("Brand", "Apple"),
            ResultRow::new("Name", "Second"),
        ]
        .into_iter()
        .collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result.get("Name"), Some("Laptop"));
        assert_eq!(result.get("Model"), None);
    }

    #[test]
    fn test_identification_result_serialize() {
        let result: IdentificationResult =
            std::iter::once(ResultRow::new("Name", "Laptop")).collect();
        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert_eq!(json, r#"[{"label":"Name","value":"Laptop"}]"#);
    }
}
