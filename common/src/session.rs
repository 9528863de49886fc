//! インポートセッション（1エンティティ種別ごとの状態機械）
//!
//! ```text
//! Idle ──select_file(有効)──> Idle（ファイルあり）
//! Idle ──select_file(無効)──> FailedValidation（ファイルなし）
//! Idle（ファイルあり） ──begin_submit──> Uploading
//! Uploading ──成功──> Succeeded（ファイルクリア）
//! Uploading ──失敗──> Failed（ファイル保持）
//! Succeeded/Failed/FailedValidation ──select_file/clear_file──> Idle
//! ```
//!
//! 状態遷移はすべて同期処理。通信は呼び出し側が
//! `begin_submit` と `finish_submit` の間で行う。

use crate::entity::EntityKind;
use crate::error::{TransportError, ValidationError, IMPORT_FAILED_MESSAGE};
use crate::types::{ImportResult, SelectedFile};
use serde::{Deserialize, Serialize};

/// セッション状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    #[default]
    Idle,
    Dragging,
    Uploading,
    Succeeded,
    Failed,
    FailedValidation,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Dragging => "dragging",
            SessionStatus::Uploading => "uploading",
            SessionStatus::Succeeded => "succeeded",
            SessionStatus::Failed => "failed",
            SessionStatus::FailedValidation => "failed-validation",
        }
    }

    /// 失敗状態か（検証エラー含む）
    pub fn is_failure(&self) -> bool {
        matches!(self, SessionStatus::Failed | SessionStatus::FailedValidation)
    }
}

/// ファイルの入手元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    Picker,
    Drop,
}

/// 1種別ぶんのインポートセッション
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSession {
    kind: EntityKind,
    selected_file: Option<SelectedFile>,
    status: SessionStatus,
    last_result: Option<ImportResult>,
    last_error: Option<String>,
}

impl ImportSession {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            selected_file: None,
            status: SessionStatus::Idle,
            last_result: None,
            last_error: None,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn last_result(&self) -> Option<&ImportResult> {
        self.last_result.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_uploading(&self) -> bool {
        self.status == SessionStatus::Uploading
    }

    /// 送信可能か（ファイルあり・送信中でない）
    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && !self.is_uploading()
    }

    /// ファイルを選択する
    ///
    /// `None`（ファイル以外のドロップ、ピッカーのキャンセル）は何もしない。
    /// 送信中は無視する。
    pub fn select_file(
        &mut self,
        input: Option<SelectedFile>,
        source: FileSource,
    ) -> Result<(), ValidationError> {
        if self.is_uploading() {
            return Ok(());
        }

        let file = match input {
            Some(file) => file,
            None => {
                if source == FileSource::Drop && self.status == SessionStatus::Dragging {
                    self.status = SessionStatus::Idle;
                }
                return Ok(());
            }
        };

        if !file.is_csv() {
            let error = ValidationError::NotCsv { file_name: file.name };
            self.last_result = None;
            self.last_error = Some(error.to_string());
            self.status = SessionStatus::FailedValidation;
            return Err(error);
        }

        self.selected_file = Some(file);
        self.last_result = None;
        self.last_error = None;
        self.status = SessionStatus::Idle;
        Ok(())
    }

    /// ドラッグ開始
    pub fn drag_enter(&mut self) {
        if self.is_uploading() {
            return;
        }
        self.last_result = None;
        self.last_error = None;
        self.status = SessionStatus::Dragging;
    }

    /// ドラッグ終了（ドロップなし）
    pub fn drag_leave(&mut self) {
        if self.status == SessionStatus::Dragging {
            self.status = SessionStatus::Idle;
        }
    }

    /// 選択ファイルと結果をクリア
    pub fn clear_file(&mut self) {
        if self.is_uploading() {
            return;
        }
        self.selected_file = None;
        self.last_result = None;
        self.last_error = None;
        self.status = SessionStatus::Idle;
    }

    /// 送信開始。送信するファイルの複製を返す
    ///
    /// ファイルなし・送信中なら状態を変えずにNoneを返す。
    pub fn begin_submit(&mut self) -> Option<SelectedFile> {
        if !self.can_submit() {
            return None;
        }
        self.status = SessionStatus::Uploading;
        self.last_error = None;
        self.selected_file.clone()
    }

    /// 送信結果を反映する
    pub fn finish_submit(&mut self, outcome: Result<ImportResult, TransportError>) {
        if !self.is_uploading() {
            return;
        }
        match outcome {
            Ok(result) => {
                self.last_result = Some(result);
                self.last_error = None;
                self.selected_file = None;
                self.status = SessionStatus::Succeeded;
            }
            Err(error) => {
                // ファイルは再送信用に保持
                self.last_result = None;
                self.last_error = Some(error.message_or(IMPORT_FAILED_MESSAGE));
                self.status = SessionStatus::Failed;
            }
        }
    }

    /// ファイル・状態を変えずにエラーだけ記録（テンプレート取得失敗など）
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.last_result = None;
        self.last_error = Some(message.into());
    }
}
