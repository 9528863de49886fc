//! reqwestによる `ImportApi` 実装

use super::ImportApi;
use crate::auth::{AuthContext, AuthResponse};
use crate::config::Config;
use crate::error::{AdminError, Result};
use async_trait::async_trait;
use leaply_import_common::{
    ApiEnvelope, EntityKind, ImportResult, SelectedFile, TransportError, CSV_MEDIA_TYPE,
    TEMPLATE_FAILED_MESSAGE,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const LOGIN_PATH: &str = "/v1/auth/login";
const LOGIN_FAILED_MESSAGE: &str = "Login failed";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// `{ "data": T }` と素のTのどちらでも受け付ける
#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeEnvelope<T> {
    Wrapped(ApiEnvelope<T>),
    Bare(T),
}

impl<T> MaybeEnvelope<T> {
    fn into_inner(self) -> T {
        match self {
            MaybeEnvelope::Wrapped(envelope) => envelope.data,
            MaybeEnvelope::Bare(value) => value,
        }
    }
}

/// エラーレスポンス本文（`message` のみ参照）
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct HttpImportApi {
    client: Client,
    base_url: String,
    auth: AuthContext,
}

impl HttpImportApi {
    pub fn new(base_url: &str, auth: AuthContext, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AdminError::HttpClient(e.to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self { client, base_url, auth })
    }

    pub fn from_config(config: &Config, auth: AuthContext) -> Result<Self> {
        Self::new(
            &config.base_url,
            auth,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth.bearer() {
            Some(value) => request.header(reqwest::header::AUTHORIZATION, value),
            None => request,
        }
    }

    /// ログインしてトークンを取得
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> std::result::Result<AuthResponse, TransportError> {
        let response = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(network_error)?;
        let response = check_status(response, LOGIN_FAILED_MESSAGE).await?;
        decode_json::<MaybeEnvelope<AuthResponse>>(response)
            .await
            .map(MaybeEnvelope::into_inner)
    }
}

#[async_trait]
impl ImportApi for HttpImportApi {
    async fn upload(
        &self,
        kind: EntityKind,
        file: &SelectedFile,
    ) -> std::result::Result<ImportResult, TransportError> {
        let media_type = file.media_type.as_deref().unwrap_or(CSV_MEDIA_TYPE);
        let part = Part::bytes(file.content.clone())
            .file_name(file.name.clone())
            .mime_str(media_type)
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let form = Form::new().part("file", part);

        tracing::debug!(kind = %kind, file = %file.name, size = file.size, "インポート送信");

        let response = self
            .authorize(self.client.post(self.url(&kind.import_path())))
            .multipart(form)
            .send()
            .await
            .map_err(network_error)?;
        let fallback = format!("Failed to import {}", kind);
        let response = check_status(response, &fallback).await?;

        let envelope: ApiEnvelope<ImportResult> = decode_json(response).await?;
        Ok(envelope.data)
    }

    async fn download_template(
        &self,
        kind: EntityKind,
    ) -> std::result::Result<Vec<u8>, TransportError> {
        tracing::debug!(kind = %kind, "テンプレート取得");

        let response = self
            .authorize(self.client.get(self.url(&kind.template_path())))
            .send()
            .await
            .map_err(network_error)?;
        let response = check_status(response, TEMPLATE_FAILED_MESSAGE).await?;

        let bytes = response.bytes().await.map_err(network_error)?;
        Ok(bytes.to_vec())
    }
}

fn network_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Network("Request timed out".to_string())
    } else if err.is_connect() {
        TransportError::Network("Failed to connect to server".to_string())
    } else {
        TransportError::Network(err.to_string())
    }
}

/// 非2xxをエラーに変換。本文に `message` があればそれを優先
async fn check_status(
    response: Response,
    fallback: &str,
) -> std::result::Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());

    tracing::warn!(status = status.as_u16(), %message, "APIエラー");

    Err(TransportError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode_json<T: DeserializeOwned>(
    response: Response,
) -> std::result::Result<T, TransportError> {
    let body = response.text().await.map_err(network_error)?;
    serde_json::from_str(&body)
        .map_err(|e| TransportError::Decode(format!("Invalid response from server: {}", e)))
}
