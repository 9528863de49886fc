//! エラー型定義

use thiserror::Error;

/// CSV以外のファイルが選択されたときのメッセージ
pub const INVALID_FILE_MESSAGE: &str = "Please upload a CSV file";

/// インポート失敗時のフォールバックメッセージ
pub const IMPORT_FAILED_MESSAGE: &str = "Import failed";

/// テンプレート取得失敗時のフォールバックメッセージ
pub const TEMPLATE_FAILED_MESSAGE: &str = "Failed to download template";

/// ファイル選択時の検証エラー（ネットワークには到達しない）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", INVALID_FILE_MESSAGE)]
    NotCsv { file_name: String },
}

/// 通信エラー（ネットワーク障害・非2xx・レスポンス不正）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Decode(String),
}

impl TransportError {
    /// 表示用メッセージ。空ならフォールバックを返す
    pub fn message_or(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }

    /// HTTPステータス（ステータスエラーのみ）
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::NotCsv { file_name: "notes.txt".to_string() };
        assert_eq!(error.to_string(), "Please upload a CSV file");
    }

    #[test]
    fn test_transport_error_display_uses_message() {
        let error = TransportError::Status {
            status: 400,
            message: "Failed to import universities".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to import universities");
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn test_transport_error_message_fallback() {
        let error = TransportError::Network(String::new());
        assert_eq!(error.message_or(IMPORT_FAILED_MESSAGE), "Import failed");

        let error = TransportError::Network("connection refused".to_string());
        assert_eq!(error.message_or(IMPORT_FAILED_MESSAGE), "connection refused");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_debug() {
        let error = TransportError::Decode("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Decode"));
        assert!(debug.contains("テスト"));
    }
}
