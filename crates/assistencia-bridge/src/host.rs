// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the host collaborators.
//
// The bridge never talks to the OS directly — permission prompts, activity
// launches, media-store inserts, content URIs, the download manager, and
// toast display all go through these traits. Native implementations live
// behind target-specific modules; everything else gets the stub.

use std::path::{Path, PathBuf};

use assistencia_artifact::ProviderSink;
use assistencia_core::error::Result;
use assistencia_core::types::{
    CapabilityTier, PermissionId, RequestToken, Selection, ShareableReference,
};

/// Unified host that groups all native collaborators the bridge needs.
///
/// Platforms that lack a collaborator (desktop/CI builds) return
/// `AssistenciaError::PlatformUnavailable` from the stub implementation.
pub trait PlatformHost:
    HostDirectories
    + HostPermissions
    + MediaStore
    + ContentResolver
    + ChooserLauncher
    + DownloadManager
    + WebChooserReply
    + Notifier
    + Send
    + Sync
{
    /// Storage capability tier of the running OS version.
    fn capability_tier(&self) -> CapabilityTier;

    /// Human-readable platform name (e.g. "Android 14").
    fn platform_name(&self) -> &str;
}

/// Storage directories the host resolves for direct-path writes.
pub trait HostDirectories {
    /// Directory backing the `PublicDownloads` storage area. On scoped tiers
    /// this is the app-scoped downloads dir, which needs no permission.
    fn downloads_dir(&self) -> Result<PathBuf>;

    /// App-scoped directory for camera capture temp files.
    fn capture_dir(&self) -> Result<PathBuf>;
}

/// Runtime permission subsystem.
pub trait HostPermissions {
    /// Whether the permission is currently granted.
    fn is_granted(&self, permission: PermissionId) -> bool;

    /// Prompt the user. The grant/deny result arrives later through
    /// `WebBridge::on_permission_result` carrying the same token.
    fn request(&self, permissions: &[PermissionId], token: RequestToken) -> Result<()>;
}

/// Provider-mediated media writes (scoped gallery inserts).
pub trait MediaStore {
    /// Open an insert session for a new image record. The returned sink must
    /// be committed or aborted; its content URI becomes visible on commit.
    fn begin_image_insert(&self, display_name: &str, mime: &str) -> Result<Box<dyn ProviderSink>>;
}

/// Content-provider URI grants for direct-path files.
pub trait ContentResolver {
    /// Wrap a file behind a read-only content URI valid for the chooser the
    /// bridge is about to launch.
    fn shareable_uri(&self, path: &Path) -> Result<String>;
}

/// System chooser launching.
pub trait ChooserLauncher {
    /// Launch a view/share chooser on the reference. Fire-and-forget: the
    /// host never reports whether the user completed the action.
    fn launch_chooser(&self, reference: &ShareableReference, title: &str) -> Result<()>;

    /// Launch the combined camera/pick chooser. When `capture_output` is
    /// set, the camera branch is pre-wired to write there; the activity
    /// result arrives later through `WebBridge::on_activity_result` with the
    /// same token.
    fn launch_capture_chooser(
        &self,
        capture_output: Option<&Path>,
        title: &str,
        token: RequestToken,
    ) -> Result<()>;
}

/// External-URL downloads, handled by the platform download manager.
pub trait DownloadManager {
    fn enqueue_download(&self, url: &str, suggested_name: &str, mime: &str) -> Result<()>;
}

/// Delivery of a file-chooser result back to the web content.
///
/// Implementations must tolerate a recipient that no longer exists (the
/// hosting screen may have been torn down while the chooser was open).
pub trait WebChooserReply {
    fn deliver_selection(&self, token: RequestToken, selection: Selection);
}

/// User-visible, informational feedback (toasts in the original screen).
pub trait Notifier {
    fn notify(&self, message: &str);
}
