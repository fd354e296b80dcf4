//! Object Identifier Common Library
//!
//! CLIとWeb(WASM)で共有される型とロジック

pub mod types;
pub mod error;
pub mod parser;
pub mod prompts;
pub mod gemini;
pub mod identify;
pub mod capture;
pub mod state;
pub mod samples;

pub use types::{ExampleEntry, IdentificationResult, ImageAsset, ResultRow};
pub use error::{Error, Result};
pub use parser::parse_identification;
pub use gemini::{GeminiRequest, GeminiResponse, DEFAULT_MODEL};
pub use identify::{identify, InferenceBackend};
pub use capture::{capture_still, Camera, PermissionState};
pub use state::{reduce, Action, RequestState, ViewState};
pub use samples::EXAMPLES;
