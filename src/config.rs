use crate::error::{IdentifierError, Result};
use object_identifier_common::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIキーの環境変数名
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 書き換え用に読み込む（壊れたファイルはデフォルトから作り直す）
    pub fn load_for_update() -> Result<Self> {
        Self::load_for_update_from(&Self::config_path()?)
    }

    pub fn load_for_update_from(path: &Path) -> Result<Self> {
        match Self::load_from(path) {
            Err(IdentifierError::JsonParse(e)) => {
                tracing::warn!(path = %path.display(), error = %e, "設定ファイルが壊れているため作り直します");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| IdentifierError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("object-identifier").join("config.json"))
    }

    /// 環境変数の値を優先し、なければ設定ファイルのキー
    pub fn resolve_api_key(&self, env_value: Option<String>) -> Result<String> {
        if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
            return Ok(key);
        }

        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(IdentifierError::MissingApiKey)
    }

    pub fn api_key(&self) -> Result<String> {
        self.resolve_api_key(std::env::var(API_KEY_ENV).ok())
    }
}
