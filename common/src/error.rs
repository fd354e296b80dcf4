//! エラー型定義
//!
//! 表示文字列はそのままユーザーに見せるメッセージとして使う

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Camera permission was denied. Please allow camera access in your browser settings.")]
    PermissionDenied,

    #[error("Error accessing camera: {0}")]
    Capture(String),

    #[error("Error reading image: {0}")]
    Upload(String),

    #[error("Please upload or capture an image first.")]
    Validation,

    #[error("Error identifying object: {0}")]
    Identification(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
