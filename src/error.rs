use leaply_import_common::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ログインしていません。`leaply-admin login` でログインしてください")]
    NotLoggedIn,

    #[error("認証情報の保存に失敗: {0}")]
    AuthStore(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("CSVファイルが見つかりません: {0}")]
    NoCsvFound(String),

    #[error("API呼び出しエラー: {0}")]
    Api(#[from] TransportError),

    #[error("インポート失敗 ({kind}): {message}")]
    ImportFailed { kind: String, message: String },

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AdminError>;
