//! 選択中画像のプレビュー

use leptos::prelude::*;

#[component]
pub fn ImagePreview(src: Memo<Option<String>>) -> impl IntoView {
    move || {
        src.get().map(|src| {
            view! {
                <div class="preview">
                    <img src=src alt="Uploaded or Captured" />
                </div>
            }
        })
    }
}
