//! 画面状態と遷移
//!
//! 状態の更新はすべて `reduce` を通す。
//! 識別リクエストには単調増加のIDを振り、古い完了通知は捨てる。

use crate::error::Error;
use crate::parser::parse_identification;
use crate::types::{IdentificationResult, ImageAsset};

/// 識別リクエストの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading {
        request_id: u64,
    },
    Succeeded {
        request_id: u64,
        raw_text: String,
    },
    Failed {
        message: String,
    },
}

/// 画面全体の状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub image: Option<ImageAsset>,
    pub request: RequestState,
    /// 画像取得の失敗メッセージ（権限拒否・撮影エラー）
    pub notice: Option<String>,
    last_request_id: u64,
}

/// 状態遷移のきっかけ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ImageAcquired(ImageAsset),
    AcquisitionFailed(Error),
    SubmitIdentify,
    IdentifyFinished {
        request_id: u64,
        outcome: Result<String, String>,
    },
}

/// 状態遷移
pub fn reduce(state: ViewState, action: Action) -> ViewState {
    match action {
        Action::ImageAcquired(image) => {
            // 前回の失敗表示は新しい画像で消える。成功結果は残す
            let request = match state.request {
                RequestState::Failed { .. } => RequestState::Idle,
                other => other,
            };
            ViewState {
                image: Some(image),
                request,
                notice: None,
                ..state
            }
        }

        Action::AcquisitionFailed(error) => ViewState {
            notice: Some(error.to_string()),
            ..state
        },

        Action::SubmitIdentify => {
            if state.image.is_none() {
                return ViewState {
                    request: RequestState::Failed {
                        message: Error::Validation.to_string(),
                    },
                    notice: None,
                    ..state
                };
            }

            let request_id = state.last_request_id + 1;
            tracing::debug!(request_id, "identify submitted");
            ViewState {
                request: RequestState::Loading { request_id },
                notice: None,
                last_request_id: request_id,
                ..state
            }
        }

        Action::IdentifyFinished { request_id, outcome } => {
            if state.pending_request() != Some(request_id) {
                tracing::warn!(request_id, "stale identify result ignored");
                return state;
            }

            let request = match outcome {
                Ok(raw_text) => RequestState::Succeeded {
                    request_id,
                    raw_text,
                },
                Err(message) => RequestState::Failed { message },
            };
            ViewState { request, ..state }
        }
    }
}

impl ViewState {
    /// その場で遷移を適用
    pub fn dispatch(&mut self, action: Action) {
        *self = reduce(std::mem::take(self), action);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.request, RequestState::Loading { .. })
    }

    /// 応答待ちのリクエストID
    pub fn pending_request(&self) -> Option<u64> {
        match self.request {
            RequestState::Loading { request_id } => Some(request_id),
            _ => None,
        }
    }

    /// 成功時の応答テキスト
    pub fn raw_text(&self) -> Option<&str> {
        match &self.request {
            RequestState::Succeeded { raw_text, .. } => Some(raw_text),
            _ => None,
        }
    }

    /// 表示用の結果表（応答テキストから都度パース）
    pub fn results(&self) -> Option<IdentificationResult> {
        self.raw_text().map(parse_identification)
    }

    /// 表示するエラーメッセージ（画像取得の失敗を優先）
    pub fn error_message(&self) -> Option<&str> {
        if let Some(notice) = self.notice.as_deref() {
            return Some(notice);
        }
        match &self.request {
            RequestState::Failed { message } => Some(message),
            _ => None,
        }
    }
}
