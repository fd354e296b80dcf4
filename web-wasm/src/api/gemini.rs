//! Gemini API連携（ブラウザ fetch）

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use object_identifier_common::gemini::{describe_http_error, endpoint_url};
use object_identifier_common::{GeminiRequest, GeminiResponse, InferenceBackend, DEFAULT_MODEL};

use crate::js_error::js_error_message;

/// ビルド時に埋め込むAPIキー
const BUILD_API_KEY: Option<&str> = option_env!("GEMINI_API_KEY");

/// ビルド時に指定されたモデル（未指定なら既定値）
const BUILD_MODEL: Option<&str> = option_env!("GEMINI_MODEL");

/// fetch で Gemini を呼び出すバックエンド
#[derive(Clone)]
pub struct WebGeminiBackend {
    api_key: String,
    model: String,
}

impl WebGeminiBackend {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// ビルド時の設定から生成
    pub fn from_build_env() -> Self {
        Self::new(
            BUILD_API_KEY.unwrap_or_default(),
            BUILD_MODEL.unwrap_or(DEFAULT_MODEL),
        )
    }

    async fn post(&self, request: &GeminiRequest) -> Result<GeminiResponse, JsValue> {
        if self.api_key.trim().is_empty() {
            return Err(JsValue::from_str(
                "API key is not configured (set GEMINI_API_KEY at build time)",
            ));
        }

        let url = endpoint_url(&self.model, &self.api_key);
        let body = serde_json::to_string(request)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&url, &opts)?;
        request.headers().set("Content-Type", "application/json")?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            let text = JsFuture::from(resp.text()?).await?;
            let text = text.as_string().unwrap_or_default();
            return Err(JsValue::from_str(&describe_http_error(resp.status(), &text)));
        }

        let json = JsFuture::from(resp.json()?).await?;
        let response: GeminiResponse = serde_wasm_bindgen::from_value(json)?;
        Ok(response)
    }
}

impl InferenceBackend for WebGeminiBackend {
    async fn generate_content(&self, request: &GeminiRequest) -> Result<GeminiResponse, String> {
        self.post(request).await.map_err(|e| js_error_message(&e))
    }
}
