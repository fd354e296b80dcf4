//! プロンプト定義
//!
//! CLIとWeb(WASM)で同じ文言を使う

/// 識別用プロンプト
pub const IDENTIFY_PROMPT: &str =
    "Identify the object in the image and provide its name and other important information.";
