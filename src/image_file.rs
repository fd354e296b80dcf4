//! 画像ファイルの読み込み（アップロード相当）

use crate::error::{IdentifierError, Result};
use object_identifier_common::ImageAsset;
use std::path::Path;

/// 画像ファイルを読み込む
///
/// 形式は拡張子ではなく中身から判定する
pub fn load_image(path: &Path) -> Result<ImageAsset> {
    if !path.is_file() {
        return Err(IdentifierError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Err(IdentifierError::ImageLoad(format!(
            "空のファイルです: {}",
            path.display()
        )));
    }

    let format = image::guess_format(&bytes)
        .map_err(|_| IdentifierError::UnsupportedImage(path.display().to_string()))?;

    tracing::debug!(path = %path.display(), ?format, bytes = bytes.len(), "image loaded");

    Ok(ImageAsset::new(bytes, format.to_mime_type()))
}
