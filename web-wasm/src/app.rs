//! メインアプリケーションコンポーネント
//!
//! 画面状態は1つの RwSignal<ViewState> に持ち、更新は Action 経由のみ。

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use object_identifier_common::{
    capture_still, identify, Action, Error, ImageAsset, ViewState,
};

use crate::api::WebGeminiBackend;
use crate::camera::BrowserCamera;
use crate::components::{
    example_gallery::ExampleGallery,
    footer::Footer,
    header::Header,
    image_preview::ImagePreview,
    result_table::ResultTable,
    upload_controls::UploadControls,
};
use crate::upload::{owned_object_url, read_file, revoke_display_url, superseded_object_url};

/// 識別ボタンの状態（無効か, ラベル）。送信中は押せない
fn identify_button(state: &ViewState) -> (bool, &'static str) {
    if state.is_loading() {
        (true, "Identifying...")
    } else {
        (false, "Identify Object")
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(ViewState::default());
    let backend = WebGeminiBackend::from_build_env();

    // 画像取得の結果を反映（置き換えた画像のObject URLは解放）
    let on_acquired = move |result: Result<ImageAsset, Error>| match result {
        Ok(image) => {
            let superseded = state.with_untracked(|s| superseded_object_url(s.image.as_ref(), &image));
            state.update(|s| s.dispatch(Action::ImageAcquired(image)));
            if let Some(url) = superseded {
                revoke_display_url(&url);
            }
        }
        Err(error) => {
            gloo::console::error!(error.to_string());
            state.update(|s| s.dispatch(Action::AcquisitionFailed(error)));
        }
    };

    let on_file = move |file: File| {
        spawn_local(async move {
            on_acquired(read_file(file).await.map_err(Error::Upload));
        });
    };

    let on_capture = move |_| {
        spawn_local(async move {
            on_acquired(capture_still(&BrowserCamera).await);
        });
    };

    let on_identify = move |_| {
        state.update(|s| s.dispatch(Action::SubmitIdentify));

        // 画像なしは reduce 側で検証エラーになり、送信しない
        let Some(request_id) = state.with_untracked(ViewState::pending_request) else {
            return;
        };
        let image = state.with_untracked(|s| s.image.clone());
        let backend = backend.clone();

        spawn_local(async move {
            let outcome = identify(&backend, image.as_ref())
                .await
                .map_err(|error| {
                    gloo::console::error!(error.to_string());
                    error.to_string()
                });
            state.update(|s| s.dispatch(Action::IdentifyFinished { request_id, outcome }));
        });
    };

    on_cleanup(move || {
        if let Some(Some(url)) = state.try_with_untracked(|s| owned_object_url(s.image.as_ref())) {
            revoke_display_url(&url);
        }
    });

    let preview_src = Memo::new(move |_| {
        state.with(|s| s.image.as_ref().map(ImageAsset::display_src))
    });
    let button = move || state.with(identify_button);

    view! {
        <div class="page">
            <Header />

            <main class="main">
                <UploadControls on_file=on_file on_capture=on_capture />

                <ImagePreview src=preview_src />

                <button
                    class="btn btn-identify"
                    disabled=move || button().0
                    on:click=on_identify
                >
                    {move || button().1}
                </button>

                {move || {
                    state
                        .with(|s| s.error_message().map(str::to_string))
                        .map(|message| view! { <p class="error">{message}</p> })
                }}

                {move || {
                    state
                        .with(ViewState::results)
                        .map(|result| {
                            view! {
                                <div class="result-card">
                                    <ResultTable result=result />
                                </div>
                            }
                        })
                }}

                <ExampleGallery />
            </main>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_button_disabled_while_loading() {
        let mut state = ViewState::default();
        state.dispatch(Action::ImageAcquired(ImageAsset::new(vec![0xFF, 0xD8], "image/jpeg")));
        assert_eq!(identify_button(&state), (false, "Identify Object"));

        state.dispatch(Action::SubmitIdentify);
        assert_eq!(identify_button(&state), (true, "Identifying..."));

        state.dispatch(Action::IdentifyFinished {
            request_id: 1,
            outcome: Ok("Name: Laptop".to_string()),
        });
        assert_eq!(identify_button(&state), (false, "Identify Object"));
    }

    #[test]
    fn test_identify_button_enabled_after_validation_error() {
        let mut state = ViewState::default();
        state.dispatch(Action::SubmitIdentify);
        assert_eq!(identify_button(&state), (false, "Identify Object"));
    }
}
