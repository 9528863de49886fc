use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use leaply_admin::{api, auth, cli, config, controller, error, logging, output, scanner};
use api::HttpImportApi;
use auth::{AuthContext, AuthState, AuthStore};
use cli::{Cli, Commands};
use config::Config;
use controller::ImportController;
use error::{AdminError, Result};
use leaply_import_common::{EntityKind, FileSource, SessionStatus};
use output::SessionReport;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;
    let auth_store = AuthStore::in_dir(&Config::config_dir()?);

    match cli.command {
        Commands::Import { kind, file, report } => {
            let controller = build_controller(&config, &auth_store)?;
            if !cli.json {
                println!("📥 leaply-admin - {} インポート\n", kind.title());
            }

            let status = import_one(&controller, kind, &file, cli.json, report.as_deref()).await?;
            ensure_succeeded(&controller, kind, status)?;

            if !cli.json {
                println!("\n✅ インポート完了");
            }
        }

        Commands::ImportDir { folder, keep_going } => {
            let files = scanner::scan_folder(&folder)?;
            if files.is_empty() {
                return Err(AdminError::NoCsvFound(folder.display().to_string()));
            }

            let controller = build_controller(&config, &auth_store)?;
            if !cli.json {
                println!("📥 leaply-admin - 一括インポート\n");
                println!("✔ {}件のCSVを検出\n", files.len());
            }

            let mut failures = Vec::new();
            for (index, (kind, path)) in files.iter().enumerate() {
                if !cli.json {
                    println!("[{}/{}] {} ← {}", index + 1, files.len(), kind.title(), path.display());
                }

                let status = import_one(&controller, *kind, path, cli.json, None).await?;
                if let Err(e) = ensure_succeeded(&controller, *kind, status) {
                    if !keep_going {
                        return Err(e);
                    }
                    failures.push(e);
                }
                if !cli.json {
                    println!();
                }
            }

            if let Some(first) = failures.into_iter().next() {
                return Err(first);
            }
            if !cli.json {
                println!("✅ 一括インポート完了");
            }
        }

        Commands::Template { kind, output } => {
            let controller = build_controller(&config, &auth_store)?;
            let dir = output.unwrap_or_else(|| PathBuf::from("."));
            std::fs::create_dir_all(&dir)?;

            match controller.download_template(kind, &dir).await {
                Some(path) => println!("✔ テンプレートを保存: {}", path.display()),
                None => {
                    let session = controller.snapshot(kind);
                    return Err(AdminError::ImportFailed {
                        kind: kind.to_string(),
                        message: session.last_error().unwrap_or_default().to_string(),
                    });
                }
            }
        }

        Commands::Login { email, password } => {
            let email = match email {
                Some(e) => e,
                None => dialoguer::Input::<String>::new()
                    .with_prompt("メールアドレス")
                    .interact_text()
                    .map_err(|e| AdminError::Prompt(e.to_string()))?,
            };
            let password = match password {
                Some(p) => p,
                None => dialoguer::Password::new()
                    .with_prompt("パスワード")
                    .interact()
                    .map_err(|e| AdminError::Prompt(e.to_string()))?,
            };

            let client = HttpImportApi::from_config(&config, AuthContext::anonymous())?;
            let response = client.login(&email, &password).await?;
            let state = AuthState::from_login(&response);
            auth_store.save(&state)?;

            println!("✔ ログインしました: {}", response.email);
            if !state.is_admin() {
                println!("⚠ このアカウントには管理者権限がありません");
            }
        }

        Commands::Logout => {
            if auth_store.clear()? {
                println!("✔ ログアウトしました");
            } else {
                println!("ログインしていません");
            }
        }

        Commands::Config { set_base_url, set_timeout, show } => {
            let mut config = config;
            let changed = set_base_url.is_some() || set_timeout.is_some();

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
            }
            if let Some(timeout) = set_timeout {
                config.timeout_seconds = timeout;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                let state = auth_store.load_state();
                println!("設定:");
                println!("  ベースURL: {}", config.base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  ログイン: {}",
                    match state.profile.as_ref() {
                        Some(profile) if state.token.is_some() => profile.email.as_str(),
                        _ => "未ログイン",
                    }
                );
            }
        }
    }

    Ok(())
}

fn build_controller(config: &Config, auth_store: &AuthStore) -> Result<ImportController<HttpImportApi>> {
    let auth = auth_store.load();
    if auth.token().is_none() {
        tracing::warn!("{}", AdminError::NotLoggedIn);
    }
    let client = HttpImportApi::from_config(config, auth)?;
    Ok(ImportController::new(client))
}

/// 1ファイルを選択・送信して結果を表示する
async fn import_one(
    controller: &ImportController<HttpImportApi>,
    kind: EntityKind,
    path: &Path,
    json: bool,
    report: Option<&Path>,
) -> Result<SessionStatus> {
    let file = scanner::load_file(path)?;
    let file_name = file.name.clone();
    let size = file.display_size();

    let status = controller.select_file(kind, Some(file), FileSource::Picker);
    if status != SessionStatus::FailedValidation {
        let spinner = (!json).then(|| start_spinner(format!("{} ({}) を送信中...", file_name, size)));
        controller.submit(kind).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
    }

    let session = controller.snapshot(kind);
    let session_report = SessionReport::new(&session, Some(file_name));
    if json {
        output::print_json(&session_report)?;
    } else {
        output::print_session(&session);
    }
    if let Some(path) = report {
        session_report.write_to(path)?;
        if !json {
            println!("✔ レポートを保存: {}", path.display());
        }
    }

    Ok(session.status())
}

fn ensure_succeeded(
    controller: &ImportController<HttpImportApi>,
    kind: EntityKind,
    status: SessionStatus,
) -> Result<()> {
    if status == SessionStatus::Succeeded {
        return Ok(());
    }
    let session = controller.snapshot(kind);
    Err(AdminError::ImportFailed {
        kind: kind.to_string(),
        message: session.last_error().unwrap_or(status.as_str()).to_string(),
    })
}

fn start_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
