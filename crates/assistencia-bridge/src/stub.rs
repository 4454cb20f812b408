// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub host for desktop/CI builds where native mobile APIs are unavailable.
//
// Every collaborator method returns `PlatformUnavailable` — real
// implementations live behind the target-specific platform modules.

use std::path::{Path, PathBuf};

use assistencia_artifact::ProviderSink;
use assistencia_core::error::{AssistenciaError, Result};
use assistencia_core::types::{
    CapabilityTier, PermissionId, RequestToken, Selection, ShareableReference,
};

use crate::host::*;

/// No-op host returned on non-mobile platforms.
pub struct StubHost;

impl PlatformHost for StubHost {
    fn capability_tier(&self) -> CapabilityTier {
        CapabilityTier::Scoped
    }

    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl HostDirectories for StubHost {
    fn downloads_dir(&self) -> Result<PathBuf> {
        Err(AssistenciaError::PlatformUnavailable)
    }

    fn capture_dir(&self) -> Result<PathBuf> {
        Err(AssistenciaError::PlatformUnavailable)
    }
}

impl HostPermissions for StubHost {
    fn is_granted(&self, _permission: PermissionId) -> bool {
        false
    }

    fn request(&self, _permissions: &[PermissionId], _token: RequestToken) -> Result<()> {
        tracing::warn!("HostPermissions::request called on stub host");
        Err(AssistenciaError::PlatformUnavailable)
    }
}

impl MediaStore for StubHost {
    fn begin_image_insert(
        &self,
        _display_name: &str,
        _mime: &str,
    ) -> Result<Box<dyn ProviderSink>> {
        tracing::warn!("MediaStore::begin_image_insert called on stub host");
        Err(AssistenciaError::PlatformUnavailable)
    }
}

impl ContentResolver for StubHost {
    fn shareable_uri(&self, _path: &Path) -> Result<String> {
        Err(AssistenciaError::PlatformUnavailable)
    }
}

impl ChooserLauncher for StubHost {
    fn launch_chooser(&self, _reference: &ShareableReference, _title: &str) -> Result<()> {
        tracing::warn!("ChooserLauncher::launch_chooser called on stub host");
        Err(AssistenciaError::PlatformUnavailable)
    }

    fn launch_capture_chooser(
        &self,
        _capture_output: Option<&Path>,
        _title: &str,
        _token: RequestToken,
    ) -> Result<()> {
        tracing::warn!("ChooserLauncher::launch_capture_chooser called on stub host");
        Err(AssistenciaError::PlatformUnavailable)
    }
}

impl DownloadManager for StubHost {
    fn enqueue_download(&self, _url: &str, _suggested_name: &str, _mime: &str) -> Result<()> {
        Err(AssistenciaError::PlatformUnavailable)
    }
}

impl WebChooserReply for StubHost {
    fn deliver_selection(&self, token: RequestToken, _selection: Selection) {
        tracing::warn!(%token, "chooser selection dropped on stub host");
    }
}

impl Notifier for StubHost {
    fn notify(&self, message: &str) {
        tracing::info!(message, "toast suppressed on stub host");
    }
}
