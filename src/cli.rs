use clap::{Parser, Subcommand};
use leaply_import_common::EntityKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leaply-admin")]
#[command(about = "Leaply管理 CSV一括インポートツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 結果をJSONで出力
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSVファイルをインポート
    Import {
        /// 種別 (universities/programs/intakes)
        #[arg(required = true)]
        kind: EntityKind,

        /// CSVファイルのパス
        #[arg(required = true)]
        file: PathBuf,

        /// 結果レポート(JSON)の出力先
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// フォルダ内のCSVをまとめてインポート（大学 → プログラム → 募集枠の順）
    ImportDir {
        /// CSVフォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 失敗しても後続の種別を続行
        #[arg(long)]
        keep_going: bool,
    },

    /// テンプレートCSVをダウンロード
    Template {
        /// 種別 (universities/programs/intakes)
        #[arg(required = true)]
        kind: EntityKind,

        /// 保存先ディレクトリ（デフォルト: カレント）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ログインしてトークンを保存
    Login {
        /// メールアドレス（省略時は入力）
        #[arg(long)]
        email: Option<String>,

        /// パスワード（省略時は入力）
        #[arg(long)]
        password: Option<String>,
    },

    /// 保存したトークンを削除
    Logout,

    /// 設定を表示/編集
    Config {
        /// APIのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
