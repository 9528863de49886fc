//! 管理APIクライアント
//!
//! コントローラは `ImportApi` トレイト越しに通信するため、
//! テストでは任意の実装に差し替えられる。

mod client;

pub use client::HttpImportApi;

use async_trait::async_trait;
use leaply_import_common::{EntityKind, ImportResult, SelectedFile, TransportError};

#[async_trait]
pub trait ImportApi: Send + Sync {
    /// CSVファイルをアップロードしてインポート結果を受け取る
    async fn upload(
        &self,
        kind: EntityKind,
        file: &SelectedFile,
    ) -> Result<ImportResult, TransportError>;

    /// テンプレートCSVのバイト列を取得
    async fn download_template(&self, kind: EntityKind) -> Result<Vec<u8>, TransportError>;
}

#[async_trait]
impl<T: ImportApi + ?Sized> ImportApi for std::sync::Arc<T> {
    async fn upload(
        &self,
        kind: EntityKind,
        file: &SelectedFile,
    ) -> Result<ImportResult, TransportError> {
        (**self).upload(kind, file).await
    }

    async fn download_template(&self, kind: EntityKind) -> Result<Vec<u8>, TransportError> {
        (**self).download_template(kind).await
    }
}
