//! インポート対象エンティティ種別と種別ごとの設定

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// インポート可能なレコード種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Universities,
    Programs,
    Intakes,
}

impl EntityKind {
    /// 参照依存順（大学 → プログラム → 募集枠）
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Universities,
        EntityKind::Programs,
        EntityKind::Intakes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Universities => "universities",
            EntityKind::Programs => "programs",
            EntityKind::Intakes => "intakes",
        }
    }

    /// 表示タイトル
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Universities => "Universities",
            EntityKind::Programs => "Programs",
            EntityKind::Intakes => "Intakes",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EntityKind::Universities => {
                "Import university data including name, country, city, rankings, and more."
            }
            EntityKind::Programs => {
                "Import program data. Requires university IDs to be referenced."
            }
            EntityKind::Intakes => "Import intake data. Requires program IDs to be referenced.",
        }
    }

    /// インポートエンドポイントのパス
    pub fn import_path(&self) -> String {
        format!("/v1/admin/import/{}", self.as_str())
    }

    /// テンプレート取得エンドポイントのパス
    pub fn template_path(&self) -> String {
        format!("/v1/admin/import/templates/{}", self.as_str())
    }

    /// 保存時のテンプレートファイル名
    pub fn template_file_name(&self) -> String {
        format!("{}_template.csv", self.as_str())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "universities" | "university" => Ok(EntityKind::Universities),
            "programs" | "program" => Ok(EntityKind::Programs),
            "intakes" | "intake" => Ok(EntityKind::Intakes),
            _ => Err(format!(
                "Unknown entity kind: {}. Use universities, programs, or intakes",
                s
            )),
        }
    }
}
