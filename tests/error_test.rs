//! エラーケーステスト

use leaply_admin::error::AdminError;
use leaply_import_common::TransportError;

/// AdminErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        AdminError::Config("テスト設定エラー".to_string()),
        AdminError::NotLoggedIn,
        AdminError::AuthStore("書き込み不可".to_string()),
        AdminError::FileNotFound("universities.csv".to_string()),
        AdminError::FolderNotFound("/path/to/folder".to_string()),
        AdminError::NoCsvFound("フォルダ".to_string()),
        AdminError::ImportFailed {
            kind: "programs".to_string(),
            message: "Import failed".to_string(),
        },
        AdminError::HttpClient("tls".to_string()),
        AdminError::Prompt("中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 未ログインエラーのメッセージ確認
#[test]
fn test_not_logged_in_message() {
    let display = AdminError::NotLoggedIn.to_string();
    assert!(display.contains("leaply-admin login"));
}

/// インポート失敗のメッセージに種別と理由が含まれる
#[test]
fn test_import_failed_message() {
    let err = AdminError::ImportFailed {
        kind: "intakes".to_string(),
        message: "Failed to import intakes".to_string(),
    };
    let display = err.to_string();
    assert!(display.contains("intakes"));
    assert!(display.contains("Failed to import intakes"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AdminError = io_err.into();

    assert!(matches!(err, AdminError::Io(_)));
    assert!(err.to_string().contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: AdminError = json_err.into();

    assert!(matches!(err, AdminError::JsonParse(_)));
}

/// 通信エラーからの変換
#[test]
fn test_transport_error_conversion() {
    let err: AdminError = TransportError::Status {
        status: 401,
        message: "Login failed".to_string(),
    }
    .into();

    assert!(matches!(err, AdminError::Api(_)));
    assert!(err.to_string().contains("Login failed"));
}
