//! エラーケーステスト

use estate::error::EstateError;

/// EstateErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        EstateError::Config("テスト設定エラー".to_string()),
        EstateError::PropertyNotFound("p1".to_string()),
        EstateError::BannerNotFound("b1".to_string()),
        EstateError::NotificationNotFound("n1".to_string()),
        EstateError::PageOutOfRange { page: 9, total_pages: 2 },
        EstateError::Cancelled,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

#[test]
fn test_page_out_of_range_message() {
    let err = EstateError::PageOutOfRange { page: 4, total_pages: 3 };
    let display = format!("{}", err);

    assert!(display.contains('4'));
    assert!(display.contains('3'));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: EstateError = io_err.into();

    assert!(matches!(err, EstateError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: EstateError = json_err.into();

    assert!(matches!(err, EstateError::JsonParse(_)));
}

/// common::Errorからの変換（透過的）
#[test]
fn test_common_error_is_transparent() {
    let common_err = estate_common::Error::Status {
        status: 503,
        endpoint: "/api/agents".to_string(),
    };
    let err: EstateError = common_err.into();

    assert!(matches!(err, EstateError::Common(_)));
    assert_eq!(format!("{}", err), "HTTP 503 from /api/agents");
}
