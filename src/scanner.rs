use crate::error::{AdminError, Result};
use leaply_import_common::{EntityKind, SelectedFile};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// ローカルファイルを読み込んで選択ファイルにする
///
/// MIMEタイプは拡張子から推定する（CSVかどうかの判定はセッション側）。
pub fn load_file(path: &Path) -> Result<SelectedFile> {
    if !path.is_file() {
        return Err(AdminError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let media_type = mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str().to_string());

    Ok(SelectedFile::new(name, media_type, content))
}

/// ファイル名から種別を判定（`<kind>.csv` または `<kind>_*.csv`）
pub fn kind_for_file_name(file_name: &str) -> Option<EntityKind> {
    let stem = file_name.strip_suffix(".csv")?;
    EntityKind::ALL.into_iter().find(|kind| {
        let prefix = kind.as_str();
        stem == prefix
            || stem
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('_'))
    })
}

/// フォルダ直下からインポート対象のCSVを探す
///
/// 結果は参照依存順（大学 → プログラム → 募集枠）、同一種別内はファイル名順。
/// テンプレート（`*_template.csv`）は対象外。
pub fn scan_folder(folder: &Path) -> Result<Vec<(EntityKind, PathBuf)>> {
    if !folder.is_dir() {
        return Err(AdminError::FolderNotFound(folder.display().to_string()));
    }

    let mut found = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = match path.file_name() {
            Some(n) => n.to_string_lossy().to_string(),
            None => continue,
        };
        if file_name.ends_with("_template.csv") {
            continue;
        }

        if let Some(kind) = kind_for_file_name(&file_name) {
            found.push((kind, path.to_path_buf()));
        }
    }

    found.sort();

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_for_file_name() {
        assert_eq!(kind_for_file_name("universities.csv"), Some(EntityKind::Universities));
        assert_eq!(kind_for_file_name("programs_2025.csv"), Some(EntityKind::Programs));
        assert_eq!(kind_for_file_name("intakes_fall.csv"), Some(EntityKind::Intakes));
        assert_eq!(kind_for_file_name("programsx.csv"), None);
        assert_eq!(kind_for_file_name("universities.txt"), None);
        assert_eq!(kind_for_file_name("users.csv"), None);
    }
}
