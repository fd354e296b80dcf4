//! 物体識別の実行
//!
//! 画像の有無を検証し、Geminiへ1回だけ問い合わせる。
//! 送信方法（fetch / reqwest）は InferenceBackend の実装が決める。

use crate::error::{Error, Result};
use crate::gemini::{GeminiRequest, GeminiResponse};
use crate::types::ImageAsset;

/// 推論APIへの送信口
///
/// 失敗時はユーザーに見せる理由文字列を返す
#[allow(async_fn_in_trait)]
pub trait InferenceBackend {
    async fn generate_content(
        &self,
        request: &GeminiRequest,
    ) -> std::result::Result<GeminiResponse, String>;
}

/// 画像を識別し、モデルの応答テキストをそのまま返す
///
/// 画像がなければ送信せずに `Error::Validation`。リトライはしない。
pub async fn identify<B: InferenceBackend>(
    backend: &B,
    image: Option<&ImageAsset>,
) -> Result<String> {
    let image = image.ok_or(Error::Validation)?;

    tracing::debug!(
        mime_type = %image.mime_type,
        bytes = image.len(),
        "identify request"
    );

    let request = GeminiRequest::identify(image);
    let response = backend
        .generate_content(&request)
        .await
        .map_err(Error::Identification)?;

    let text = response.text().map_err(Error::Identification)?;
    tracing::debug!(chars = text.len(), "identify response");
    Ok(text)
}
