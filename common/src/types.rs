//! インポート関連の型定義
//!
//! - SelectedFile: 送信待ちのローカルファイル
//! - ImportResult: サーバが返すインポート結果（クライアント側で再計算しない）
//! - ApiEnvelope: `{ "data": ... }` 形式のレスポンス

use serde::{Deserialize, Serialize};

/// CSVのMIMEタイプ
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// 行単位のエラー（rowはヘッダを除いた1始まりの行番号）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    pub row: u64,
    pub message: String,
}

/// インポート結果
///
/// `created + updated + skipped == total` はサーバの責任であり検証しない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub total: u64,
    pub created: u64,
    pub updated: u64,
    pub skipped: u64,
    #[serde(default)]
    pub errors: Vec<RowError>,
}

impl ImportResult {
    /// 一部の行がエラーになったか
    pub fn has_row_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// APIレスポンスの共通エンベロープ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// 選択されたファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    /// 宣言されたMIMEタイプ（不明ならNone）
    pub media_type: Option<String>,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: Option<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size: content.len() as u64,
            media_type,
            content,
        }
    }

    /// CSVとして受け付けられるか（MIMEタイプまたは拡張子）
    ///
    /// 拡張子は大文字小文字を区別する。
    pub fn is_csv(&self) -> bool {
        self.media_type.as_deref() == Some(CSV_MEDIA_TYPE) || self.name.ends_with(".csv")
    }

    /// 表示用サイズ（例: "12.3 KB"）
    pub fn display_size(&self) -> String {
        format!("{:.1} KB", self.size as f64 / 1024.0)
    }
}
