//! Gemini API ワイヤ形式
//!
//! generateContent のリクエスト/レスポンス型。
//! 送信処理そのものは各プラットフォームの InferenceBackend が持つ。

use serde::{Deserialize, Serialize};

use crate::prompts::IDENTIFY_PROMPT;
use crate::types::ImageAsset;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// generateContent のエンドポイントURL
pub fn endpoint_url(model: &str, api_key: &str) -> String {
    format!("{}/{}:generateContent?key={}", GEMINI_API_BASE, model, api_key)
}

/// Gemini APIリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl GeminiRequest {
    /// 識別リクエスト（固定プロンプト + インライン画像1枚）
    pub fn identify(image: &ImageAsset) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: IDENTIFY_PROMPT.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type.clone(),
                            data: image.to_base64(),
                        },
                    },
                ],
            }],
        }
    }
}

/// Gemini APIレスポンス
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeminiResponse {
    pub candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub content: ResponseContent,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResponseContent {
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PromptFeedback {
    #[serde(rename = "blockReason")]
    pub block_reason: Option<String>,
}

impl GeminiResponse {
    /// 先頭候補のテキストパートを連結して返す
    pub fn text(&self) -> Result<String, String> {
        let Some(candidate) = self.candidates.first() else {
            if let Some(reason) = self
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref())
            {
                return Err(format!("Response was blocked due to {}", reason));
            }
            return Err("Empty response".to_string());
        };

        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.is_empty() {
            return Err("Empty response".to_string());
        }
        Ok(text)
    }
}

/// エラーレスポンス本体 `{"error": {...}}`
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiErrorBody {
    pub error: GeminiErrorDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeminiErrorDetail {
    pub code: u16,
    pub message: String,
    pub status: String,
}

/// HTTPエラー時のメッセージ
///
/// 本文がGeminiのエラー形式ならその内容、そうでなければステータスのみ
pub fn describe_http_error(status: u16, body: &str) -> String {
    match serde_json::from_str::<GeminiErrorBody>(body) {
        Ok(parsed) if !parsed.error.message.is_empty() => {
            let code = if parsed.error.code == 0 { status } else { parsed.error.code };
            format!("API error {}: {}", code, parsed.error.message)
        }
        _ => format!("API error: {}", status),
    }
}
