//! Object Identifier CLI
//!
//! 共通ライブラリの識別処理をローカルの画像ファイルに対して実行する

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod gemini;
pub mod image_file;
pub mod logging;
