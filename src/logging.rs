//! ログ初期化
//!
//! 標準出力は結果表示に使うため、ログは標準エラーへ出す。

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "LEAPLY_LOG";

pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "leaply_admin=debug,leaply_import_common=debug"
    } else {
        "leaply_admin=warn"
    };
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| default_filter.into());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}
