//! インポート結果の表示用整形
//!
//! CLIとWebで同じ文言を使うための共通処理。

use crate::session::ImportSession;
use crate::types::{ImportResult, RowError};

/// 件数サマリ（ラベル, 値）
pub fn summary_rows(result: &ImportResult) -> [(&'static str, u64); 4] {
    [
        ("Total Rows", result.total),
        ("Created", result.created),
        ("Updated", result.updated),
        ("Skipped", result.skipped),
    ]
}

/// 行エラー1件の表示
pub fn format_row_error(error: &RowError) -> String {
    format!("Row {}: {}", error.row, error.message)
}

/// 結果全体をテキストに整形
pub fn format_result(result: &ImportResult) -> String {
    let mut lines = vec!["Import Complete".to_string()];
    for (label, value) in summary_rows(result) {
        lines.push(format!("  {:<10} {:>6}", label, value));
    }

    if result.has_row_errors() {
        lines.push("Error Details:".to_string());
        lines.extend(result.errors.iter().map(|e| format!("  {}", format_row_error(e))));
    }

    lines.join("\n")
}

/// 選択中ファイルの表示（"name (1.2 KB)"）
pub fn format_selected_file(session: &ImportSession) -> Option<String> {
    session
        .selected_file()
        .map(|f| format!("{} ({})", f.name, f.display_size()))
}
