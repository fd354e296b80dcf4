//! ブラウザのカメラ
//!
//! Permissions API で権限を確認し、getUserMedia のストリームを
//! 画面外の video に流して canvas に1フレーム描画する。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack, PermissionStatus,
};

use object_identifier_common::{Camera, ImageAsset, PermissionState};

use crate::js_error::js_error_message;

const FRAME_MIME_TYPE: &str = "image/jpeg";

pub struct BrowserCamera;

impl BrowserCamera {
    async fn permission(&self) -> Result<PermissionState, JsValue> {
        let window = window()?;
        let permissions = window.navigator().permissions()?;

        let descriptor = js_sys::Object::new();
        js_sys::Reflect::set(&descriptor, &"name".into(), &"camera".into())?;

        let status: PermissionStatus = JsFuture::from(permissions.query(&descriptor)?)
            .await?
            .dyn_into()?;

        Ok(match status.state() {
            web_sys::PermissionState::Granted => PermissionState::Granted,
            web_sys::PermissionState::Denied => PermissionState::Denied,
            _ => PermissionState::Prompt,
        })
    }

    async fn stream(&self) -> Result<MediaStream, JsValue> {
        let media_devices = window()?.navigator().media_devices()?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&JsValue::TRUE);

        let stream = JsFuture::from(media_devices.get_user_media_with_constraints(&constraints)?)
            .await?;
        stream.dyn_into()
    }

    async fn frame(&self, stream: &MediaStream) -> Result<ImageAsset, JsValue> {
        let document = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("document is not available"))?;

        let video: HtmlVideoElement = document.create_element("video")?.dyn_into()?;
        video.set_muted(true);
        video.set_attribute("playsinline", "")?;
        video.set_src_object(Some(stream));
        JsFuture::from(video.play()?).await?;

        let (width, height) = (video.video_width(), video.video_height());
        let drawn = draw_frame(&document, &video, width, height);
        video.set_src_object(None);
        let data_url = drawn?;

        let asset = ImageAsset::from_data_url(&data_url)
            .ok_or_else(|| JsValue::from_str("captured frame could not be decoded"))?;
        Ok(asset.with_display_url(data_url))
    }
}

fn draw_frame(
    document: &web_sys::Document,
    video: &HtmlVideoElement,
    width: u32,
    height: u32,
) -> Result<String, JsValue> {
    if width == 0 || height == 0 {
        return Err(JsValue::from_str("camera did not deliver a frame"));
    }

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d canvas is not supported"))?
        .dyn_into()?;
    context.draw_image_with_html_video_element(video, 0.0, 0.0)?;

    canvas.to_data_url_with_type(FRAME_MIME_TYPE)
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))
}

impl Camera for BrowserCamera {
    type Stream = MediaStream;

    async fn query_permission(&self) -> Result<PermissionState, String> {
        self.permission().await.map_err(|e| js_error_message(&e))
    }

    async fn open_stream(&self) -> Result<MediaStream, String> {
        self.stream().await.map_err(|e| js_error_message(&e))
    }

    async fn grab_frame(&self, stream: &MediaStream) -> Result<ImageAsset, String> {
        self.frame(stream).await.map_err(|e| js_error_message(&e))
    }

    fn stop_stream(&self, stream: MediaStream) {
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}
