//! ファイル選択からの画像読み込みとObject URL管理

use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Url};

use object_identifier_common::ImageAsset;

use crate::js_error::js_error_message;

/// 選択されたファイルを読み込み、プレビュー用のObject URLを付ける
pub async fn read_file(file: File) -> Result<ImageAsset, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| js_error_message(&e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let asset = ImageAsset::new(bytes, file.type_());
    match Url::create_object_url_with_blob(&file) {
        Ok(url) => Ok(asset.with_display_url(url)),
        // プレビューはData URLで代用できる
        Err(_) => Ok(asset),
    }
}

fn is_object_url(url: &str) -> bool {
    url.starts_with("blob:")
}

/// 表示中の画像が持つ、解放すべきObject URL
pub fn owned_object_url(current: Option<&ImageAsset>) -> Option<String> {
    current
        .and_then(|image| image.display_url.as_deref())
        .filter(|url| is_object_url(url))
        .map(str::to_string)
}

/// 次の画像に置き換えたとき解放するObject URL
///
/// 同じURLを引き継ぐ場合は解放しない
pub fn superseded_object_url(current: Option<&ImageAsset>, next: &ImageAsset) -> Option<String> {
    owned_object_url(current).filter(|url| next.display_url.as_deref() != Some(url.as_str()))
}

/// Object URLを解放（Data URLなどは対象外）
pub fn revoke_display_url(url: &str) {
    if !is_object_url(url) {
        return;
    }
    if let Err(e) = Url::revoke_object_url(url) {
        gloo::console::warn!("revokeObjectURL failed:", js_error_message(&e));
    }
}
