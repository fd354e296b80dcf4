//! Gemini API連携（reqwest）

use object_identifier_common::gemini::{describe_http_error, endpoint_url};
use object_identifier_common::{GeminiRequest, GeminiResponse, InferenceBackend};

pub struct HttpGeminiBackend {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl HttpGeminiBackend {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

impl InferenceBackend for HttpGeminiBackend {
    async fn generate_content(&self, request: &GeminiRequest) -> Result<GeminiResponse, String> {
        // URLにAPIキーが含まれるのでエラー文字列からは外す
        let response = self
            .client
            .post(endpoint_url(&self.model, &self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| e.without_url().to_string())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(describe_http_error(status.as_u16(), &body));
        }

        response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| e.without_url().to_string())
    }
}
