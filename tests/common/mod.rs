//! テスト用の `ImportApi` 実装

#![allow(dead_code)]

use async_trait::async_trait;
use leaply_admin::api::ImportApi;
use leaply_import_common::{EntityKind, ImportResult, RowError, SelectedFile, TransportError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// 種別ごとに応答を設定できる偽API
#[derive(Default)]
pub struct FakeApi {
    uploads: Mutex<HashMap<EntityKind, Result<ImportResult, TransportError>>>,
    templates: Mutex<HashMap<EntityKind, Result<Vec<u8>, TransportError>>>,
    upload_calls: AtomicUsize,
    template_calls: AtomicUsize,
    received: Mutex<Vec<(EntityKind, String)>>,
    gates: Mutex<HashMap<EntityKind, Arc<Notify>>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_upload(&self, kind: EntityKind, response: Result<ImportResult, TransportError>) {
        self.uploads.lock().unwrap().insert(kind, response);
    }

    pub fn respond_template(&self, kind: EntityKind, response: Result<Vec<u8>, TransportError>) {
        self.templates.lock().unwrap().insert(kind, response);
    }

    /// アップロードを `Notify` が鳴るまで止める
    pub fn gate_upload(&self, kind: EntityKind) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates.lock().unwrap().insert(kind, notify.clone());
        notify
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    pub fn template_calls(&self) -> usize {
        self.template_calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<(EntityKind, String)> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImportApi for FakeApi {
    async fn upload(
        &self,
        kind: EntityKind,
        file: &SelectedFile,
    ) -> Result<ImportResult, TransportError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push((kind, file.name.clone()));

        let gate = self.gates.lock().unwrap().get(&kind).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.uploads
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| Err(TransportError::Network("no response configured".to_string())))
    }

    async fn download_template(&self, kind: EntityKind) -> Result<Vec<u8>, TransportError> {
        self.template_calls.fetch_add(1, Ordering::SeqCst);
        self.templates
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| Err(TransportError::Network(String::new())))
    }
}

pub fn csv_file(name: &str, rows: usize) -> SelectedFile {
    let mut content = String::from("name,country\n");
    for i in 0..rows {
        content.push_str(&format!("University {},JP\n", i + 1));
    }
    SelectedFile::new(name, Some("text/csv".to_string()), content.into_bytes())
}

pub fn happy_result() -> ImportResult {
    ImportResult {
        total: 10,
        created: 8,
        updated: 1,
        skipped: 1,
        errors: vec![],
    }
}

pub fn partial_result() -> ImportResult {
    ImportResult {
        total: 5,
        created: 3,
        updated: 0,
        skipped: 2,
        errors: vec![
            RowError { row: 2, message: "Unknown universityId".to_string() },
            RowError { row: 4, message: "Missing degreeType".to_string() },
        ],
    }
}
