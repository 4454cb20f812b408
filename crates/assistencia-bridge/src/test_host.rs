// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Recording fake host shared by the bridge tests.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use assistencia_artifact::ProviderSink;
use assistencia_core::error::{AssistenciaError, Result};
use assistencia_core::types::{
    CapabilityTier, PermissionId, RequestToken, Selection, ShareableReference,
};

use crate::host::*;

/// One provider insert observed by the fake media store.
pub(crate) struct InsertRecord {
    pub display_name: String,
    pub mime: String,
    pub bytes: Arc<Mutex<Vec<u8>>>,
    pub committed: Arc<AtomicBool>,
    pub aborted: Arc<AtomicBool>,
}

/// In-memory host recording every collaborator call, backed by a temp dir
/// for the direct-path writes.
pub(crate) struct FakeHost {
    tier: CapabilityTier,
    temp: TempDir,
    pub granted: Mutex<HashSet<PermissionId>>,
    pub permission_requests: Mutex<Vec<(Vec<PermissionId>, RequestToken)>>,
    pub capture_dir_available: AtomicBool,
    pub provider_available: AtomicBool,
    pub chooser_fails: AtomicBool,
    pub inserts: Mutex<Vec<InsertRecord>>,
    pub choosers: Mutex<Vec<(ShareableReference, String)>>,
    pub capture_launches: Mutex<Vec<(Option<PathBuf>, RequestToken)>>,
    pub enqueued: Mutex<Vec<(String, String, String)>>,
    pub selections: Mutex<Vec<(RequestToken, Selection)>>,
    pub toasts: Mutex<Vec<String>>,
}

impl FakeHost {
    pub fn new(tier: CapabilityTier) -> Arc<Self> {
        Arc::new(Self {
            tier,
            temp: tempfile::tempdir().expect("tempdir"),
            granted: Mutex::new(HashSet::new()),
            permission_requests: Mutex::new(Vec::new()),
            capture_dir_available: AtomicBool::new(true),
            provider_available: AtomicBool::new(true),
            chooser_fails: AtomicBool::new(false),
            inserts: Mutex::new(Vec::new()),
            choosers: Mutex::new(Vec::new()),
            capture_launches: Mutex::new(Vec::new()),
            enqueued: Mutex::new(Vec::new()),
            selections: Mutex::new(Vec::new()),
            toasts: Mutex::new(Vec::new()),
        })
    }

    pub fn grant(&self, permission: PermissionId) {
        self.granted.lock().unwrap().insert(permission);
    }

    pub fn downloads_path(&self) -> PathBuf {
        self.temp.path().join("Download")
    }

    /// Token of the most recent permission prompt.
    pub fn last_permission_token(&self) -> RequestToken {
        self.permission_requests
            .lock()
            .unwrap()
            .last()
            .expect("a permission prompt was issued")
            .1
    }
}

impl PlatformHost for FakeHost {
    fn capability_tier(&self) -> CapabilityTier {
        self.tier
    }

    fn platform_name(&self) -> &str {
        "FakeHost"
    }
}

impl HostDirectories for FakeHost {
    fn downloads_dir(&self) -> Result<PathBuf> {
        Ok(self.downloads_path())
    }

    fn capture_dir(&self) -> Result<PathBuf> {
        if self.capture_dir_available.load(Ordering::SeqCst) {
            Ok(self.temp.path().join("captures"))
        } else {
            Err(AssistenciaError::StorageUnavailable("no capture dir".into()))
        }
    }
}

impl HostPermissions for FakeHost {
    fn is_granted(&self, permission: PermissionId) -> bool {
        self.granted.lock().unwrap().contains(&permission)
    }

    fn request(&self, permissions: &[PermissionId], token: RequestToken) -> Result<()> {
        self.permission_requests
            .lock()
            .unwrap()
            .push((permissions.to_vec(), token));
        Ok(())
    }
}

struct FakeSink {
    bytes: Arc<Mutex<Vec<u8>>>,
    committed: Arc<AtomicBool>,
    aborted: Arc<AtomicBool>,
    uri: String,
}

impl ProviderSink for FakeSink {
    fn write_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        self.bytes.lock().unwrap().extend_from_slice(chunk);
        Ok(())
    }

    fn commit(self: Box<Self>) -> Result<String> {
        self.committed.store(true, Ordering::SeqCst);
        Ok(self.uri)
    }

    fn abort(self: Box<Self>) {
        self.aborted.store(true, Ordering::SeqCst);
    }
}

impl MediaStore for FakeHost {
    fn begin_image_insert(&self, display_name: &str, mime: &str) -> Result<Box<dyn ProviderSink>> {
        if !self.provider_available.load(Ordering::SeqCst) {
            return Err(AssistenciaError::ProviderWrite(
                "provider returned no handle".into(),
            ));
        }
        let record = InsertRecord {
            display_name: display_name.to_string(),
            mime: mime.to_string(),
            bytes: Arc::new(Mutex::new(Vec::new())),
            committed: Arc::new(AtomicBool::new(false)),
            aborted: Arc::new(AtomicBool::new(false)),
        };
        let sink = FakeSink {
            bytes: Arc::clone(&record.bytes),
            committed: Arc::clone(&record.committed),
            aborted: Arc::clone(&record.aborted),
            uri: format!(
                "content://media/external/images/media/{}",
                self.inserts.lock().unwrap().len()
            ),
        };
        self.inserts.lock().unwrap().push(record);
        Ok(Box::new(sink))
    }
}

impl ContentResolver for FakeHost {
    fn shareable_uri(&self, path: &Path) -> Result<String> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(format!("content://assistencia.provider/{name}"))
    }
}

impl ChooserLauncher for FakeHost {
    fn launch_chooser(&self, reference: &ShareableReference, title: &str) -> Result<()> {
        if self.chooser_fails.load(Ordering::SeqCst) {
            return Err(AssistenciaError::Host("no chooser activity".into()));
        }
        self.choosers
            .lock()
            .unwrap()
            .push((reference.clone(), title.to_string()));
        Ok(())
    }

    fn launch_capture_chooser(
        &self,
        capture_output: Option<&Path>,
        _title: &str,
        token: RequestToken,
    ) -> Result<()> {
        if self.chooser_fails.load(Ordering::SeqCst) {
            return Err(AssistenciaError::Host("no chooser activity".into()));
        }
        self.capture_launches
            .lock()
            .unwrap()
            .push((capture_output.map(Path::to_path_buf), token));
        Ok(())
    }
}

impl DownloadManager for FakeHost {
    fn enqueue_download(&self, url: &str, suggested_name: &str, mime: &str) -> Result<()> {
        self.enqueued.lock().unwrap().push((
            url.to_string(),
            suggested_name.to_string(),
            mime.to_string(),
        ));
        Ok(())
    }
}

impl WebChooserReply for FakeHost {
    fn deliver_selection(&self, token: RequestToken, selection: Selection) {
        self.selections.lock().unwrap().push((token, selection));
    }
}

impl Notifier for FakeHost {
    fn notify(&self, message: &str) {
        self.toasts.lock().unwrap().push(message.to_string());
    }
}
