//! インポートセッションコントローラ
//!
//! 種別ごとに独立したセッションを保持し、`ImportApi` を通して送信する。
//! ロックは状態遷移の間だけ取り、通信中は保持しない。
//! エラーはすべてセッション状態に変換され、呼び出し側には返らない。

use crate::api::ImportApi;
use leaply_import_common::{
    EntityKind, FileSource, ImportSession, SelectedFile, SessionStatus, TEMPLATE_FAILED_MESSAGE,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

pub struct ImportController<A> {
    api: A,
    sessions: BTreeMap<EntityKind, Mutex<ImportSession>>,
}

impl<A: ImportApi> ImportController<A> {
    pub fn new(api: A) -> Self {
        let sessions = EntityKind::ALL
            .into_iter()
            .map(|kind| (kind, Mutex::new(ImportSession::new(kind))))
            .collect();
        Self { api, sessions }
    }

    fn session(&self, kind: EntityKind) -> MutexGuard<'_, ImportSession> {
        // 全種別を生成時に登録済み
        let mutex = &self.sessions[&kind];
        mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 表示用のスナップショット
    pub fn snapshot(&self, kind: EntityKind) -> ImportSession {
        self.session(kind).clone()
    }

    pub fn status(&self, kind: EntityKind) -> SessionStatus {
        self.session(kind).status()
    }

    pub fn select_file(
        &self,
        kind: EntityKind,
        input: Option<SelectedFile>,
        source: FileSource,
    ) -> SessionStatus {
        let mut session = self.session(kind);
        if let Err(e) = session.select_file(input, source) {
            tracing::info!(kind = %kind, error = %e, "ファイルを受け付けませんでした");
        }
        session.status()
    }

    pub fn drag_enter(&self, kind: EntityKind) {
        self.session(kind).drag_enter();
    }

    pub fn drag_leave(&self, kind: EntityKind) {
        self.session(kind).drag_leave();
    }

    pub fn clear_file(&self, kind: EntityKind) {
        self.session(kind).clear_file();
    }

    /// 選択中のファイルを送信する
    ///
    /// ファイルなし・送信中の場合は通信せずに現在の状態を返す。
    pub async fn submit(&self, kind: EntityKind) -> SessionStatus {
        let file = {
            let mut session = self.session(kind);
            match session.begin_submit() {
                Some(file) => file,
                None => {
                    tracing::debug!(kind = %kind, status = session.status().as_str(), "送信をスキップ");
                    return session.status();
                }
            }
        };

        tracing::info!(kind = %kind, file = %file.name, size = file.size, "インポート開始");
        let outcome = self.api.upload(kind, &file).await;

        match &outcome {
            Ok(result) => tracing::info!(
                kind = %kind,
                total = result.total,
                created = result.created,
                updated = result.updated,
                skipped = result.skipped,
                row_errors = result.errors.len(),
                "インポート完了"
            ),
            Err(e) => tracing::warn!(kind = %kind, error = %e, "インポート失敗"),
        }

        let mut session = self.session(kind);
        session.finish_submit(outcome);
        session.status()
    }

    /// テンプレートを取得して `<dir>/<kind>_template.csv` に保存する
    ///
    /// セッションの状態とは独立しており、送信中でも呼べる。
    pub async fn download_template(&self, kind: EntityKind, dir: &Path) -> Option<PathBuf> {
        let bytes = match self.api.download_template(kind).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(kind = %kind, error = %e, "テンプレート取得失敗");
                self.session(kind)
                    .record_error(e.message_or(TEMPLATE_FAILED_MESSAGE));
                return None;
            }
        };

        let path = dir.join(kind.template_file_name());
        match tokio::fs::write(&path, &bytes).await {
            Ok(()) => {
                tracing::info!(kind = %kind, path = %path.display(), bytes = bytes.len(), "テンプレート保存");
                Some(path)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "テンプレート保存失敗");
                self.session(kind)
                    .record_error(format!("{}: {}", TEMPLATE_FAILED_MESSAGE, e));
                None
            }
        }
    }
}
