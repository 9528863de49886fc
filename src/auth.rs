//! 認証情報の保持と永続化
//!
//! HTTPクライアントには `AuthContext` を明示的に渡す。
//! 永続化ファイルは管理画面の保存形式（`{ "state": { ... } }`）に合わせている。

use crate::error::{AdminError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 永続化ストレージ名
pub const AUTH_STORAGE_NAME: &str = "leaply-admin-auth";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    DataAdmin,
    SuperAdmin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    pub role: UserRole,
}

/// ログインAPIのレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user_id: String,
    pub email: String,
    pub token: String,
    pub role: UserRole,
    #[serde(default)]
    pub onboarding_completed: bool,
}

/// リクエストに付与する認証情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    token: Option<String>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.trim().is_empty() {
            return Self::anonymous();
        }
        Self { token: Some(token) }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `Authorization` ヘッダ値
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthState {
    pub profile: Option<AdminProfile>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn from_login(response: &AuthResponse) -> Self {
        Self {
            profile: Some(AdminProfile {
                id: response.user_id.clone(),
                email: response.email.clone(),
                full_name: String::new(),
                role: response.role,
            }),
            token: Some(response.token.clone()),
            is_authenticated: true,
        }
    }

    /// data_admin / super_admin のみ管理操作が可能
    pub fn is_admin(&self) -> bool {
        matches!(
            self.profile.as_ref().map(|p| p.role),
            Some(UserRole::DataAdmin | UserRole::SuperAdmin)
        )
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self.profile.as_ref().map(|p| p.role), Some(UserRole::SuperAdmin))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PersistedAuth {
    #[serde(default)]
    state: AuthState,
}

/// 認証情報ファイル
#[derive(Debug, Clone)]
pub struct AuthStore {
    path: PathBuf,
}

impl AuthStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 設定ディレクトリ直下の既定ファイル
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(format!("{}.json", AUTH_STORAGE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 保存された状態を読む。存在しない・壊れている場合は未ログイン扱い
    pub fn load_state(&self) -> AuthState {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return AuthState::default(),
        };
        match serde_json::from_str::<PersistedAuth>(&content) {
            Ok(persisted) => persisted.state,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "認証情報を読み込めません");
                AuthState::default()
            }
        }
    }

    pub fn load(&self) -> AuthContext {
        match self.load_state().token {
            Some(token) => AuthContext::with_token(token),
            None => AuthContext::anonymous(),
        }
    }

    pub fn save(&self, state: &AuthState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let persisted = PersistedAuth { state: state.clone() };
        let content = serde_json::to_string_pretty(&persisted)?;
        std::fs::write(&self.path, content)
            .map_err(|e| AdminError::AuthStore(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }

    /// ログアウト。削除したらtrue
    pub fn clear(&self) -> Result<bool> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn login_response(role: UserRole) -> AuthResponse {
        AuthResponse {
            user_id: "u-1".to_string(),
            email: "admin@leaply.test".to_string(),
            token: "tok-123".to_string(),
            role,
            onboarding_completed: true,
        }
    }

    #[test]
    fn test_missing_file_is_anonymous() {
        let dir = tempdir().unwrap();
        let store = AuthStore::in_dir(dir.path());
        assert_eq!(store.load(), AuthContext::anonymous());
        assert!(store.load().bearer().is_none());
    }

    #[test]
    fn test_save_and_load_token() {
        let dir = tempdir().unwrap();
        let store = AuthStore::in_dir(dir.path());
        store.save(&AuthState::from_login(&login_response(UserRole::DataAdmin))).unwrap();

        let ctx = store.load();
        assert_eq!(ctx.token(), Some("tok-123"));
        assert_eq!(ctx.bearer().as_deref(), Some("Bearer tok-123"));
        assert!(store.path().ends_with("leaply-admin-auth.json"));
    }

    #[test]
    fn test_reads_dashboard_blob_shape() {
        let dir = tempdir().unwrap();
        let store = AuthStore::in_dir(dir.path());
        std::fs::write(
            store.path(),
            r#"{"state":{"profile":null,"token":"abc","isAuthenticated":true},"version":0}"#,
        )
        .unwrap();

        assert_eq!(store.load().token(), Some("abc"));
    }

    #[test]
    fn test_corrupt_file_is_anonymous() {
        let dir = tempdir().unwrap();
        let store = AuthStore::in_dir(dir.path());
        std::fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().token().is_none());
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let store = AuthStore::in_dir(dir.path());
        store.save(&AuthState::from_login(&login_response(UserRole::User))).unwrap();

        assert!(store.clear().unwrap());
        assert!(!store.clear().unwrap());
        assert!(store.load().token().is_none());
    }

    #[test]
    fn test_roles() {
        assert!(AuthState::from_login(&login_response(UserRole::DataAdmin)).is_admin());
        assert!(AuthState::from_login(&login_response(UserRole::SuperAdmin)).is_super_admin());
        assert!(!AuthState::from_login(&login_response(UserRole::User)).is_admin());
        assert!(!AuthState::default().is_admin());
    }

    #[test]
    fn test_empty_token_is_anonymous() {
        assert_eq!(AuthContext::with_token("  "), AuthContext::anonymous());
    }
}
