//! 設定ファイルテスト

use object_identifier::config::Config;
use object_identifier::error::IdentifierError;
use tempfile::tempdir;

/// ファイルがなければデフォルト
#[test]
fn test_load_missing_file_uses_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");

    assert!(config.api_key.is_none());
    assert_eq!(config.model, "gemini-1.5-flash");
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        api_key: Some("stored-key".to_string()),
        model: "gemini-1.5-pro".to_string(),
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.api_key.as_deref(), Some("stored-key"));
    assert_eq!(loaded.model, "gemini-1.5-pro");
}

/// 欠けた項目はデフォルトで補う
#[test]
fn test_load_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"api_key": "k"}"#).unwrap();

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.api_key.as_deref(), Some("k"));
    assert_eq!(loaded.model, "gemini-1.5-flash");
}

/// 不正なJSON
#[test]
fn test_load_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ invalid").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(IdentifierError::JsonParse(_))));
}

/// 壊れたファイルも書き換え用の読み込みなら修復できる
#[test]
fn test_load_for_update_recovers_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ invalid").unwrap();

    let mut config = Config::load_for_update_from(&path).expect("読み込み失敗");
    assert!(config.api_key.is_none());
    assert_eq!(config.model, "gemini-1.5-flash");

    config.api_key = Some("fixed-key".to_string());
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("修復後の読み込み失敗");
    assert_eq!(loaded.api_key.as_deref(), Some("fixed-key"));
}

/// 書き換え用の読み込みでも既存の値は保持
#[test]
fn test_load_for_update_keeps_valid_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"api_key": "k", "model": "gemini-1.5-pro"}"#).unwrap();

    let config = Config::load_for_update_from(&path).expect("読み込み失敗");
    assert_eq!(config.api_key.as_deref(), Some("k"));
    assert_eq!(config.model, "gemini-1.5-pro");
}

/// 環境変数が優先される
#[test]
fn test_resolve_api_key_env_first() {
    let config = Config {
        api_key: Some("stored-key".to_string()),
        ..Default::default()
    };

    let key = config.resolve_api_key(Some("env-key".to_string())).unwrap();
    assert_eq!(key, "env-key");

    let key = config.resolve_api_key(Some("   ".to_string())).unwrap();
    assert_eq!(key, "stored-key");

    let key = config.resolve_api_key(None).unwrap();
    assert_eq!(key, "stored-key");
}

#[test]
fn test_resolve_api_key_missing() {
    let config = Config::default();
    let result = config.resolve_api_key(None);
    assert!(matches!(result, Err(IdentifierError::MissingApiKey)));
}
