//! 設定ファイルのテスト

use estate::config::{resolve_base_url, Config};
use estate_common::api::DEFAULT_API_BASE_URL;
use tempfile::tempdir;

/// ファイルが無ければデフォルト
#[test]
fn test_load_missing_file_returns_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");

    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.listing_page_size, 6);
    assert_eq!(config.agents_per_page, 4);
    assert!(config.session_cookie.is_none());
}

/// 保存と読み込み（親ディレクトリも作る）
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        api_base_url: "https://api.example.com".to_string(),
        timeout_seconds: 5,
        ..Default::default()
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.api_base_url, "https://api.example.com");
    assert_eq!(loaded.timeout_seconds, 5);
    assert_eq!(loaded.listing_page_size, 6);
}

/// 一部のキーだけのファイル
#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"agentsPerPage": 10, "agents_per_page": 8}"#).unwrap();

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.agents_per_page, 8);
    assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
}

/// 壊れたファイルはエラー
#[test]
fn test_invalid_file_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::load_from(&path).is_err());
}

/// フラグ > 環境変数 > 設定ファイル
#[test]
fn test_resolve_base_url_precedence() {
    let file = "http://file.example";
    assert_eq!(resolve_base_url(Some("http://flag"), Some("http://env"), file), "http://flag");
    assert_eq!(resolve_base_url(None, Some("http://env"), file), "http://env");
    assert_eq!(resolve_base_url(Some("  "), None, file), file);
    assert_eq!(resolve_base_url(None, Some(""), file), file);
}
