//! セッション結果の表示とレポート出力

use crate::error::Result;
use leaply_import_common::report::{format_result, format_selected_file};
use leaply_import_common::{EntityKind, ImportResult, ImportSession, SessionStatus};
use serde::Serialize;
use std::path::Path;

/// `--json` 出力・レポートファイルの形式
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub kind: EntityKind,
    pub status: SessionStatus,
    pub file_name: Option<String>,
    pub imported_at: String,
    pub result: Option<ImportResult>,
    pub error: Option<String>,
}

impl SessionReport {
    pub fn new(session: &ImportSession, file_name: Option<String>) -> Self {
        Self {
            kind: session.kind(),
            status: session.status(),
            file_name,
            imported_at: chrono::Local::now().to_rfc3339(),
            result: session.last_result().cloned(),
            error: session.last_error().map(str::to_string),
        }
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// セッションの状態を人間向けに表示
pub fn print_session(session: &ImportSession) {
    if let Some(result) = session.last_result() {
        println!("{}", format_result(result));
    }

    if session.status() == SessionStatus::Failed {
        if let Some(file) = format_selected_file(session) {
            println!("  ファイル: {} (再送信可能)", file);
        }
    }
    if session.status().is_failure() {
        if let Some(error) = session.last_error() {
            println!("✖ {}", error);
        }
    }
}

pub fn print_json(report: &SessionReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaply_import_common::{FileSource, SelectedFile};
    use tempfile::tempdir;

    #[test]
    fn test_report_for_validation_failure() {
        let mut session = ImportSession::new(EntityKind::Programs);
        let _ = session.select_file(
            Some(SelectedFile::new("p.txt", Some("text/plain".into()), vec![])),
            FileSource::Picker,
        );

        let report = SessionReport::new(&session, Some("p.txt".into()));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "programs");
        assert_eq!(json["status"], "failed-validation");
        assert_eq!(json["error"], "Please upload a CSV file");
        assert!(json["result"].is_null());
    }

    #[test]
    fn test_write_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("u.json");
        let session = ImportSession::new(EntityKind::Universities);

        SessionReport::new(&session, None).write_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"importedAt\""));
        assert!(content.contains("\"universities\""));
    }
}
