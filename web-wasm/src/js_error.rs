//! JsValue のエラーを表示用文字列に変換

use wasm_bindgen::{JsCast, JsValue};

/// JS例外からメッセージを取り出す（`err.message` 相当）
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    format!("{:?}", value)
}
