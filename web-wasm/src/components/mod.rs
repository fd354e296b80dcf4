//! UIコンポーネント

pub mod header;
pub mod footer;
pub mod upload_controls;
pub mod image_preview;
pub mod result_table;
pub mod example_gallery;
