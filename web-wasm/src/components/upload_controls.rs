//! 画像入力ボタン（アップロード / カメラ撮影）

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement};

#[component]
pub fn UploadControls<FF, FC>(
    on_file: FF,
    on_capture: FC,
) -> impl IntoView
where
    FF: Fn(File) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    let on_change = move |ev: Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };

        // 選択なしは何もしない
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file(file);
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    view! {
        <div class="upload-controls">
            <input
                type="file"
                accept="image/*"
                id="image-upload"
                class="hidden"
                on:change=on_change
            />
            <label for="image-upload" class="btn btn-upload">
                "Upload Image"
            </label>
            <button
                class="btn btn-capture"
                on:click={
                    let on_capture = on_capture.clone();
                    move |_| on_capture(())
                }
            >
                "Capture Image"
            </button>
        </div>
    }
}
