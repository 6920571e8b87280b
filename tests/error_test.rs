//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use std::path::Path;
use tempfile::tempdir;
use usfind::error::UsfindError;
use usfind::scanner;

/// 存在しない写真
#[test]
fn test_missing_photo() {
    let result = scanner::ensure_image(Path::new("/nonexistent/path/12345.jpg"));
    assert!(matches!(result, Err(UsfindError::FileNotFound(_))));
}

/// 画像以外のファイル
#[test]
fn test_non_image_photo() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("data.json");
    std::fs::write(&path, "{}").unwrap();

    let result = scanner::ensure_image(&path);
    assert!(matches!(result, Err(UsfindError::UnsupportedImage(_))));
}

/// UsfindErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        UsfindError::Config("テスト設定エラー".to_string()),
        UsfindError::FileNotFound("test.jpg".to_string()),
        UsfindError::UnsupportedImage("test.gif".to_string()),
        UsfindError::ApiCall("API呼び出し失敗".to_string()),
        UsfindError::ApiParse("不正な応答".to_string()),
        UsfindError::Timeout(120),
        UsfindError::InvalidStore("バージョン不一致".to_string()),
        UsfindError::InvalidRecord("不正なレコード".to_string()),
        UsfindError::Prompt("入力中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// タイムアウトのメッセージに秒数が入る
#[test]
fn test_timeout_message() {
    let display = format!("{}", UsfindError::Timeout(30));
    assert!(display.contains("30"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: UsfindError = io_err.into();

    assert!(matches!(err, UsfindError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: UsfindError = json_err.into();

    assert!(matches!(err, UsfindError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = usfind_common::Error::Parse("パースエラー".to_string());
    let err: UsfindError = common_err.into();

    assert!(matches!(err, UsfindError::Common(_)));
    assert!(format!("{}", err).contains("パースエラー"));
}
