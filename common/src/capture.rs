//! カメラ撮影手順
//!
//! 権限確認 -> (未許可なら一度開いて即解放) -> ストリーム取得 -> 1フレーム取得 -> 解放。
//! 開いたストリームは成功・失敗に関わらず必ず stop_stream に渡す。

use crate::error::{Error, Result};
use crate::types::ImageAsset;

/// カメラ権限の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
    Prompt,
}

/// カメラ操作の抽象
///
/// ブラウザでは Permissions API / getUserMedia / canvas で実装する
#[allow(async_fn_in_trait)]
pub trait Camera {
    type Stream;

    async fn query_permission(&self) -> std::result::Result<PermissionState, String>;

    async fn open_stream(&self) -> std::result::Result<Self::Stream, String>;

    async fn grab_frame(&self, stream: &Self::Stream) -> std::result::Result<ImageAsset, String>;

    /// ストリームの全トラックを停止
    fn stop_stream(&self, stream: Self::Stream);
}

/// 静止画を1枚撮影
pub async fn capture_still<C: Camera>(camera: &C) -> Result<ImageAsset> {
    let permission = camera.query_permission().await.map_err(Error::Capture)?;
    tracing::debug!(?permission, "camera permission");

    if permission == PermissionState::Denied {
        return Err(Error::PermissionDenied);
    }

    if permission != PermissionState::Granted {
        // 許可ダイアログを出すためだけに開く
        let probe = camera.open_stream().await.map_err(Error::Capture)?;
        camera.stop_stream(probe);
    }

    let stream = camera.open_stream().await.map_err(Error::Capture)?;
    let frame = camera.grab_frame(&stream).await;
    camera.stop_stream(stream);

    frame.map_err(Error::Capture)
}
